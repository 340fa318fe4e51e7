// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`surface`]: In-memory display, thumbnail and counter state rendered by
//!   the Iced view (implements [`MainDisplay`], [`Thumbnail`], [`CounterDisplay`])
//! - [`keyboard`]: Listener registry gating the keyboard subscription
//!   (implements [`KeyboardHub`])
//!
//! [`MainDisplay`]: crate::application::port::MainDisplay
//! [`Thumbnail`]: crate::application::port::Thumbnail
//! [`CounterDisplay`]: crate::application::port::CounterDisplay
//! [`KeyboardHub`]: crate::application::port::KeyboardHub

pub mod keyboard;
pub mod surface;

pub use keyboard::ListenerRegistry;
pub use surface::{CounterLabel, DisplaySurface, ThumbnailSlot};
