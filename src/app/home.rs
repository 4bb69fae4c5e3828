// SPDX-License-Identifier: MPL-2.0
//! Demo screen: one button per toast flavor, plus a scoped toast overlay.
//!
//! The screen never looks the application toasts up: it receives them
//! through the `toasts` argument of [`State::update`].

use crate::toast::{
    self, Settings, ShowToast, Toast, ToastConfig, ToastContent, ToastPosition,
};
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{button, column, text, Column, Container, Stack};
use iced::{alignment, Element, Length, Subscription};

#[derive(Debug, Clone)]
pub enum Message {
    TopToast,
    CenterToast,
    BottomToast,
    RefToast,
    Scoped(toast::Message),
}

#[derive(Debug)]
pub struct State {
    /// Overlay owned by this screen and driven through its handle.
    scoped: Toast,
}

impl State {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            scoped: Toast::new(settings),
        }
    }

    pub fn update(&mut self, message: Message, toasts: &mut impl ShowToast) {
        match message {
            Message::TopToast => {
                toasts.show_toast(
                    ToastConfig::info("This is top toast 👆").position(ToastPosition::Top),
                );
            }
            Message::CenterToast => {
                toasts.show_toast(
                    ToastConfig::success(rich_body()).position(ToastPosition::Center),
                );
            }
            Message::BottomToast => {
                toasts.show_toast(
                    ToastConfig::error("Bottom toast 👇").position(ToastPosition::Bottom),
                );
            }
            Message::RefToast => {
                self.scoped.handle().show_toast(
                    ToastConfig::success(rich_body()).position(ToastPosition::Bottom),
                );
            }
            Message::Scoped(message) => self.scoped.update(message),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let buttons = Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(demo_button("Top Toast", Message::TopToast))
            .push(demo_button("Center Toast", Message::CenterToast))
            .push(demo_button("Bottom Toast", Message::BottomToast))
            .push(demo_button("Ref Toast", Message::RefToast));

        let content = Container::new(buttons)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center);

        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(content)
            .push(self.scoped.view().map(Message::Scoped))
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        self.scoped.subscription().map(Message::Scoped)
    }
}

fn demo_button(label: &str, message: Message) -> Element<'_, Message> {
    button(text(label).size(typography::BODY_LG))
        .padding([spacing::XS, spacing::LG])
        .on_press(message)
        .into()
}

/// Content that is not plain text, rendered as-is inside the toast.
fn rich_body() -> ToastContent {
    ToastContent::rich(|| {
        column![
            text("Saved to your library").size(typography::BODY),
            text("Swipe sideways to dismiss").size(typography::BODY - 2.0),
        ]
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center)
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::{ToastKind, ToastProvider};

    #[test]
    fn buttons_route_to_the_right_queue() {
        let mut provider = ToastProvider::default();
        let mut home = State::new(Settings::default());

        home.update(Message::TopToast, &mut provider.context());
        home.update(Message::CenterToast, &mut provider.context());
        home.update(Message::BottomToast, &mut provider.context());
        home.update(Message::RefToast, &mut provider.context());

        let queue = provider.toaster().queue();
        assert_eq!(queue.len(), 3);
        for position in ToastPosition::ALL {
            assert_eq!(queue.at(position).count(), 1);
        }
        assert_eq!(
            queue.at(ToastPosition::Bottom).next().map(|r| r.kind()),
            Some(ToastKind::Error)
        );
        assert_eq!(home.scoped.toaster().len(), 1);
    }

    #[test]
    fn center_toast_carries_rich_content() {
        let mut provider = ToastProvider::default();
        let mut home = State::new(Settings::default());
        home.update(Message::CenterToast, &mut provider.context());

        let record = provider
            .toaster()
            .queue()
            .at(ToastPosition::Center)
            .next()
            .expect("center toast should be queued");
        assert!(record.content().as_text().is_none());
    }
}
