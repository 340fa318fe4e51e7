// SPDX-License-Identifier: MPL-2.0
//! Localization of the gallery's labels, tooltips and window title.
//!
//! Translations are Fluent `.ftl` files embedded at build time. The locale is
//! chosen from the `--lang` flag, then the `[general] language` setting, then
//! the system locale, falling back to `en-US`.

pub mod fluent;
