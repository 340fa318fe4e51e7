// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a thumbnail gallery built with the Iced GUI framework.
//!
//! The heart of the crate is the [`gallery::GalleryController`]: it keeps one
//! current image out of a fixed thumbnail list, wraps around at both ends,
//! keeps the thumbnail highlight and the counter in sync, and fades between
//! images. It is bound to element ports ([`application::port`]) so it can be
//! driven by the Iced application in [`app`] or by plain tests.

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod directory_scanner;
pub mod domain;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod infrastructure;
pub mod logging;
pub mod ui;
