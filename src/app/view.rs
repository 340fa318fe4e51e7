// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::{empty_state, gallery::{self, PageGallery}};
use iced::widget::Container;
use iced::{Element, Length};
use std::path::Path;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: Option<&'a PageGallery>,
    pub directory: &'a Path,
    pub scan_error: Option<&'a str>,
    pub thumbnail_size: u16,
}

/// Renders the gallery, or the empty state when none is bound.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content: Element<'_, Message> = match ctx.gallery {
        Some(bound) => gallery::view(bound, ctx.i18n, ctx.thumbnail_size).map(Message::Gallery),
        None => empty_state::view(ctx.i18n, ctx.directory, ctx.scan_error),
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
