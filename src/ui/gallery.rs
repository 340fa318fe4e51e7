// SPDX-License-Identifier: MPL-2.0
//! Gallery view: main image, controls with counter, thumbnail strip.
//!
//! Everything is read from the controller's surfaces. The main image is drawn
//! with the display's opacity, which is how the fade transition shows up.

use crate::application::port::{CounterDisplay, MainDisplay, Thumbnail};
use crate::gallery::{Control, GalleryController, Message};
use crate::i18n::fluent::I18n;
use crate::infrastructure::{CounterLabel, DisplaySurface, ThumbnailSlot};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, image, scrollable, tooltip, Column, Container, Row, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Gallery bound to the in-memory surfaces rendered here.
pub type PageGallery = GalleryController<DisplaySurface, ThumbnailSlot, CounterLabel>;

/// Renders the gallery.
pub fn view<'a>(gallery: &'a PageGallery, i18n: &I18n, thumbnail_size: u16) -> Element<'a, Message> {
    let display = gallery.display();
    let main_image = image(image::Handle::from_path(display.source().as_path()))
        .content_fit(ContentFit::Contain)
        .opacity(display.opacity().value())
        .width(Length::Fill)
        .height(Length::Fill);

    Column::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .push(
            Container::new(main_image)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center),
        )
        .push(controls_row(gallery, i18n))
        .push(thumbnail_strip(gallery, thumbnail_size))
        .into()
}

fn controls_row<'a>(gallery: &'a PageGallery, i18n: &I18n) -> Element<'a, Message> {
    let controls = gallery.controls();
    let mut row = Row::new()
        .spacing(spacing::LG)
        .align_y(alignment::Vertical::Center);

    if controls.previous {
        row = row.push(control_button(
            i18n.tr("gallery-previous"),
            i18n.tr("gallery-previous-tooltip"),
            Control::Previous,
        ));
    }

    if let Some(counter) = gallery.counter() {
        row = row.push(
            Text::new(counter.text())
                .size(typography::BODY)
                .color(palette::GRAY_400),
        );
    }

    if controls.next {
        row = row.push(control_button(
            i18n.tr("gallery-next"),
            i18n.tr("gallery-next-tooltip"),
            Control::Next,
        ));
    }

    Container::new(row)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into()
}

fn control_button<'a>(label: String, hint: String, control: Control) -> Element<'a, Message> {
    let control_button = button(Text::new(label).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::control)
        .on_press(Message::ControlClicked(control));

    tooltip(
        control_button,
        Text::new(hint).size(typography::CAPTION),
        tooltip::Position::Top,
    )
    .into()
}

fn thumbnail_strip(gallery: &PageGallery, thumbnail_size: u16) -> Element<'_, Message> {
    let size = f32::from(thumbnail_size);
    let strip = gallery
        .thumbnails()
        .iter()
        .enumerate()
        .fold(Row::new().spacing(spacing::XS), |row, (index, thumb)| {
            let preview = image(image::Handle::from_path(thumb.source().as_path()))
                .content_fit(ContentFit::Cover)
                .width(Length::Fixed(size))
                .height(Length::Fixed(size));

            row.push(
                button(preview)
                    .padding(spacing::XXS)
                    .style(styles::button::thumbnail(thumb.is_active()))
                    .on_press(Message::ThumbnailClicked(index)),
            )
        });

    scrollable(strip)
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::default(),
        ))
        .width(Length::Fill)
        .into()
}
