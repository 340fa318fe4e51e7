// SPDX-License-Identifier: MPL-2.0
//! Image gallery with thumbnail, control and keyboard navigation.
//!
//! A [`GalleryController`] is bound once to a main display, an ordered list
//! of thumbnails, optional previous/next controls and an optional counter.
//! Navigation wraps around at both ends and every selection fades the
//! display out before the new image is swapped in (see [`transition`]).
//!
//! ```
//! use iced_gallery::domain::gallery::ImageSource;
//! use iced_gallery::gallery::{Bindings, Controls, GalleryController, Options};
//! use iced_gallery::infrastructure::{CounterLabel, ListenerRegistry, surface};
//! use iced_gallery::application::port::CounterDisplay;
//!
//! let images: Vec<ImageSource> = ["a.png", "b.png", "c.png"].into_iter().map(Into::into).collect();
//! let (display, thumbnails) = surface::build_surfaces(&images).unwrap();
//! let mut hub = ListenerRegistry::new();
//! let mut gallery = GalleryController::bind(
//!     Bindings {
//!         main_display: Some(display),
//!         thumbnails,
//!         controls: Controls::both(),
//!         counter: Some(CounterLabel::default()),
//!     },
//!     Options::default(),
//!     &mut hub,
//! )
//! .unwrap();
//!
//! let swap = gallery.previous().unwrap();
//! assert_eq!(gallery.cursor(), 2);
//! assert_eq!(gallery.counter().unwrap().text(), "3 / 3");
//! assert!(gallery.complete_swap(swap.ticket));
//! ```

mod controller;
pub mod transition;

pub use controller::{Bindings, Control, Controls, Effect, GalleryController, Message, Options};
pub use transition::{PendingSwap, SwapTicket};

#[cfg(test)]
mod tests;
