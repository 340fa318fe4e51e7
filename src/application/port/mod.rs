// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! The gallery controller never touches a concrete widget. It is bound to
//! whatever implements these traits: in-memory adapters rendered by Iced in
//! the application, recording fakes in tests.
//!
//! # Available Ports
//!
//! - [`display`]: Main display, thumbnails and counter
//! - [`keyboard`]: Window-global key listener registration
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles)
//! - No `async fn`: delayed work is described by the controller and
//!   scheduled by the caller

pub mod display;
pub mod keyboard;

pub use display::{CounterDisplay, MainDisplay, Thumbnail};
pub use keyboard::{KeyboardHub, ListenerId, NavigationKey};
