// SPDX-License-Identifier: MPL-2.0
//! Empty state view displayed when no gallery could be bound.
//!
//! Either the directory holds no supported image or it could not be read.
//! The view explains which, and reminds the user that F5 rescans.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{Column, Container, Text};
use iced::{alignment, Color, Element, Length};
use std::path::Path;

/// Renders the empty state for `directory`, with `scan_error` when the scan failed.
pub fn view<'a, M: 'a>(i18n: &I18n, directory: &Path, scan_error: Option<&str>) -> Element<'a, M> {
    let directory = directory.display().to_string();

    let title = Text::new(i18n.tr("gallery-empty-title"))
        .size(typography::TITLE_LG)
        .color(palette::GRAY_400);

    let subtitle = match scan_error {
        Some(error) => Text::new(i18n.tr_with_args(
            "gallery-scan-error",
            &[("directory", directory.as_str()), ("error", error)],
        ))
        .color(palette::ERROR_500),
        None => Text::new(i18n.tr_with_args(
            "gallery-empty-hint",
            &[("directory", directory.as_str())],
        ))
        .color(palette::GRAY_400),
    }
    .size(typography::BODY);

    let hint = Text::new(i18n.tr("gallery-rescan-hint"))
        .size(typography::CAPTION)
        .color(Color {
            a: 0.5,
            ..palette::GRAY_400
        });

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(subtitle)
        .push(hint);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
