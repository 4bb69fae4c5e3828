// SPDX-License-Identifier: MPL-2.0
//! Anchored toast layers.
//!
//! Each of the three positions gets a full-bleed layer stacked over the host
//! content. Layers are plain containers, which never capture input: presses
//! and scrolls outside a toast reach whatever is underneath. Only the toast
//! cards themselves, wrapped in a `mouse_area`, capture presses for the swipe
//! gesture. Swipe and enter offsets are applied when drawing, so a moving
//! card keeps its size and never pushes its neighbours.

use crate::config::{MAX_WIDTH_RATIO, MIN_WIDTH_RATIO};
use crate::toast::{Message, ToastContent, ToastItem, ToastPosition, ToastRecord, Toaster};
use crate::ui::design_tokens::typography;
use crate::ui::styles::{self, ToastStyle};
use crate::ui::widgets::translate;
use iced::widget::{mouse_area, text, Column, Container, Space, Stack};
use iced::{alignment, font, mouse, Element, Font, Length, Padding, Size, Theme, Vector};

/// Renders the three anchored layers for every queued toast.
pub fn view(toaster: &Toaster) -> Element<'_, Message> {
    ToastPosition::ALL
        .into_iter()
        .fold(
            Stack::new().width(Length::Fill).height(Length::Fill),
            |stack, position| stack.push(layer(toaster, position)),
        )
        .into()
}

/// Renders the layer of one anchor, stacking its toasts in insertion order.
fn layer(toaster: &Toaster, position: ToastPosition) -> Element<'_, Message> {
    let settings = toaster.settings();
    let viewport = toaster.viewport();

    let toasts: Vec<Element<'_, Message>> = toaster
        .queue()
        .at(position)
        .filter_map(|record| {
            toaster
                .item(record.id())
                .map(|item| toast_card(record, item, viewport))
        })
        .collect();

    if toasts.is_empty() {
        return Space::new().into();
    }

    let column = Column::with_children(toasts)
        .spacing(settings.stack_spacing)
        .align_x(alignment::Horizontal::Center);

    let anchored = Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    match position {
        ToastPosition::Top => anchored
            .align_y(alignment::Vertical::Top)
            .padding(Padding::ZERO.top(settings.anchor_margin)),
        ToastPosition::Center => anchored.align_y(alignment::Vertical::Center),
        ToastPosition::Bottom => anchored
            .align_y(alignment::Vertical::Bottom)
            .padding(Padding::ZERO.bottom(settings.anchor_margin)),
    }
    .into()
}

/// Width range of a toast card for the given viewport.
fn width_limits(viewport: Size) -> (f32, f32) {
    (viewport.width * MIN_WIDTH_RATIO, viewport.width * MAX_WIDTH_RATIO)
}

/// Renders one toast card at its animated opacity and offsets.
fn toast_card<'a>(record: &'a ToastRecord, item: &ToastItem, viewport: Size) -> Element<'a, Message> {
    let style = ToastStyle::resolve(record.kind(), record.style()).faded(item.opacity());
    let (min_width, max_width) = width_limits(viewport);

    let body: Element<'a, Message> = match record.content() {
        ToastContent::Text(message) => text(message.as_str())
            .size(typography::BODY)
            .font(Font {
                weight: font::Weight::Semibold,
                ..Font::DEFAULT
            })
            .color(style.text_color)
            .align_x(alignment::Horizontal::Center)
            .into(),
        ToastContent::Rich(content) => content.build(),
    };

    // A zero-height spacer holds the card at its minimum width.
    let inner_min = (min_width - style.padding.left - style.padding.right).max(0.0);
    let body = Column::new()
        .push(body)
        .push(Space::new().width(Length::Fixed(inner_min)))
        .align_x(alignment::Horizontal::Center);

    let card = Container::new(body)
        .padding(style.padding)
        .max_width(max_width)
        .style(move |_theme: &Theme| styles::toast_container(&style));

    let interaction = if item.is_pressed() {
        mouse::Interaction::Grabbing
    } else {
        mouse::Interaction::Grab
    };
    let card = mouse_area(card)
        .on_press(Message::Pressed(record.id().clone()))
        .interaction(interaction);

    translate(card, card_offset(item)).into()
}

/// Draw offset of a card: the item's horizontal swipe and vertical enter
/// offsets.
fn card_offset(item: &ToastItem) -> Vector {
    Vector::new(item.offset_x(), item.offset_y())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::{Settings, ToastConfig};

    #[test]
    fn width_limits_follow_viewport() {
        let (min, max) = width_limits(Size::new(1000.0, 800.0));
        assert!((min - 600.0).abs() < 0.01);
        assert!((max - 900.0).abs() < 0.01);
    }

    #[test]
    fn view_builds_for_every_position() {
        let mut toaster = Toaster::new(Settings::default());
        toaster.show_toast(ToastConfig::info("top").position(ToastPosition::Top));
        toaster.show_toast(ToastConfig::success("center").position(ToastPosition::Center));
        toaster.show_toast(ToastConfig::error("bottom"));
        toaster.show_toast(ToastConfig::new(ToastContent::rich(|| text("rich").into())));

        // Building the element tree must not panic.
        let _element = view(&toaster);
    }

    #[test]
    fn card_offset_follows_the_item() {
        let start = std::time::Instant::now();
        let mut item = ToastItem::new(Settings::default(), start);
        assert_eq!(card_offset(&item), Vector::new(0.0, 30.0));

        item.tick(start + std::time::Duration::from_millis(250));
        assert!(item.press(100.0));
        item.move_to(250.0);
        assert_eq!(card_offset(&item), Vector::new(item.offset_x(), 0.0));
        assert_eq!(card_offset(&item).x, 150.0);
    }

    #[test]
    fn empty_toaster_renders() {
        let toaster = Toaster::default();
        let _element = view(&toaster);
    }
}
