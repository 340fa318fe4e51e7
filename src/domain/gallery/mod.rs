// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types.
//!
//! Value objects shared by the gallery controller, the element ports and
//! the configuration layer.

pub mod cursor;
pub mod newtypes;

pub use cursor::Cursor;
pub use newtypes::{FadeDelay, ImageSource, Opacity, TransitionPolicy};
