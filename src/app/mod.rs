// SPDX-License-Identifier: MPL-2.0
//! Demo application wiring a [`ToastProvider`] at the root.
//!
//! The root owns the ambient toast queue and injects its context into the
//! home screen's update; the home screen owns a scoped [`crate::toast::Toast`]
//! of its own.

mod home;
mod message;

pub use message::{Flags, Message};

use crate::config;
use crate::toast::{Settings, ShowToast, ToastConfig, ToastKind, ToastPosition, ToastProvider};
use iced::{Element, Subscription, Task, Theme};
use std::path::PathBuf;

const WINDOW_DEFAULT_WIDTH: f32 = 420.0;
const WINDOW_DEFAULT_HEIGHT: f32 = 780.0;

pub struct App {
    toasts: ToastProvider,
    home: home::State,
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot function; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window_size(iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT))
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) =
            config::load_with_override(flags.config_dir.map(PathBuf::from));
        let settings = Settings::from(&config);
        tracing::info!(?settings, "starting toast demo");

        let mut app = App {
            toasts: ToastProvider::new(settings),
            home: home::State::new(settings),
        };

        if let Some(warning) = config_warning {
            app.toasts.context().show_toast(
                ToastConfig::new(warning)
                    .kind(ToastKind::Error)
                    .position(ToastPosition::Top),
            );
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("Toast demo")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Home(message) => {
                self.home.update(message, &mut self.toasts.context());
            }
            Message::Toast(message) => self.toasts.update(message),
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        self.toasts
            .view(self.home.view().map(Message::Home), Message::Toast)
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            self.toasts.subscription().map(Message::Toast),
            self.home.subscription().map(Message::Home),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn new_app_starts_without_toasts() {
        let dir = tempdir().expect("failed to create temp dir");
        let flags = Flags {
            config_dir: Some(dir.path().to_string_lossy().into_owned()),
        };
        let (app, _) = App::new(flags);
        assert!(app.toasts.toaster().is_empty());
    }

    #[test]
    fn broken_config_is_reported_as_toast() {
        let dir = tempdir().expect("failed to create temp dir");
        std::fs::write(dir.path().join("settings.toml"), "[toast\n").expect("write config");
        let flags = Flags {
            config_dir: Some(dir.path().to_string_lossy().into_owned()),
        };

        let (app, _) = App::new(flags);
        let queue = app.toasts.toaster().queue();
        assert_eq!(queue.at(ToastPosition::Top).count(), 1);
    }

    #[test]
    fn home_messages_reach_the_root_queue() {
        let dir = tempdir().expect("failed to create temp dir");
        let flags = Flags {
            config_dir: Some(dir.path().to_string_lossy().into_owned()),
        };
        let (mut app, _) = App::new(flags);

        let _ = app.update(Message::Home(home::Message::TopToast));
        assert_eq!(app.toasts.toaster().len(), 1);
    }
}
