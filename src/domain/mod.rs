// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core gallery rules without any presentation framework.
//!
//! This module contains pure value objects and navigation rules. Nothing in
//! here knows about Iced, so every rule can be tested in isolation.
//!
//! # Modules
//!
//! - [`gallery`]: Gallery types ([`Cursor`](gallery::Cursor),
//!   [`FadeDelay`](gallery::FadeDelay), [`Opacity`](gallery::Opacity),
//!   [`ImageSource`](gallery::ImageSource),
//!   [`TransitionPolicy`](gallery::TransitionPolicy))

pub mod gallery;
