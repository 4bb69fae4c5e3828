// SPDX-License-Identifier: MPL-2.0
//! Public entry points: the ambient [`ToastProvider`] and the scoped [`Toast`].
//!
//! Both wrap the same [`Toaster`], so their timing and visuals are
//! identical. They only differ in how callers reach `show_toast`:
//!
//! - [`ToastProvider`] is owned by the application root and wraps the whole
//!   view tree. Descendants receive a [`ToastContext`] through their update
//!   context instead of looking it up globally.
//! - [`Toast`] is placed explicitly where it should render and is driven only
//!   through the [`ToastHandle`] its owner obtains from [`Toast::handle`].

use super::clock::Clock;
use super::record::{ToastConfig, ToastId};
use super::settings::Settings;
use super::toaster::{Message, Toaster};
use crate::ui::layer;
use iced::widget::Stack;
use iced::{Element, Length, Subscription};

/// Showing and dismissing toasts, however the queue was reached.
pub trait ShowToast {
    /// Queues a toast and returns its id. Never fails.
    fn show_toast(&mut self, config: ToastConfig) -> ToastId;

    /// Removes a toast; returns `false` if it was not queued.
    fn dismiss(&mut self, id: &ToastId) -> bool;
}

impl ShowToast for Toaster {
    fn show_toast(&mut self, config: ToastConfig) -> ToastId {
        Toaster::show_toast(self, config)
    }

    fn dismiss(&mut self, id: &ToastId) -> bool {
        Toaster::dismiss(self, id)
    }
}

// =============================================================================
// Ambient form
// =============================================================================

/// Application-wide toast queue rendered above the wrapped content.
#[derive(Debug, Default)]
pub struct ToastProvider {
    toaster: Toaster,
}

impl ToastProvider {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            toaster: Toaster::new(settings),
        }
    }

    #[must_use]
    pub fn with_clock(settings: Settings, clock: impl Clock + 'static) -> Self {
        Self {
            toaster: Toaster::with_clock(settings, clock),
        }
    }

    /// Returns the context handed down to descendants.
    pub fn context(&mut self) -> ToastContext<'_> {
        ToastContext {
            toaster: &mut self.toaster,
        }
    }

    /// Handles a toast message.
    pub fn update(&mut self, message: Message) {
        self.toaster.update(message);
    }

    pub fn subscription(&self) -> Subscription<Message> {
        self.toaster.subscription()
    }

    /// Renders `content` with the three toast layers stacked above it.
    ///
    /// `on_message` lifts toast messages into the application's message type.
    pub fn view<'a, AppMessage: 'a>(
        &'a self,
        content: impl Into<Element<'a, AppMessage>>,
        on_message: impl Fn(Message) -> AppMessage + 'a,
    ) -> Element<'a, AppMessage> {
        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(content)
            .push(layer::view(&self.toaster).map(on_message))
            .into()
    }

    #[must_use]
    pub fn toaster(&self) -> &Toaster {
        &self.toaster
    }
}

/// Access to the provider's queue, injected into descendants.
#[derive(Debug)]
pub struct ToastContext<'a> {
    toaster: &'a mut Toaster,
}

impl ShowToast for ToastContext<'_> {
    fn show_toast(&mut self, config: ToastConfig) -> ToastId {
        self.toaster.show_toast(config)
    }

    fn dismiss(&mut self, id: &ToastId) -> bool {
        self.toaster.dismiss(id)
    }
}

// =============================================================================
// Scoped form
// =============================================================================

/// A toast overlay placed explicitly in the view tree.
#[derive(Debug, Default)]
pub struct Toast {
    toaster: Toaster,
}

impl Toast {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            toaster: Toaster::new(settings),
        }
    }

    #[must_use]
    pub fn with_clock(settings: Settings, clock: impl Clock + 'static) -> Self {
        Self {
            toaster: Toaster::with_clock(settings, clock),
        }
    }

    /// Returns the handle controlling this overlay.
    pub fn handle(&mut self) -> ToastHandle<'_> {
        ToastHandle {
            toaster: &mut self.toaster,
        }
    }

    /// Handles a toast message.
    pub fn update(&mut self, message: Message) {
        self.toaster.update(message);
    }

    pub fn subscription(&self) -> Subscription<Message> {
        self.toaster.subscription()
    }

    /// Renders the three toast layers; the caller stacks them where needed.
    pub fn view(&self) -> Element<'_, Message> {
        layer::view(&self.toaster)
    }

    #[must_use]
    pub fn toaster(&self) -> &Toaster {
        &self.toaster
    }
}

/// Explicit handle to a [`Toast`].
#[derive(Debug)]
pub struct ToastHandle<'a> {
    toaster: &'a mut Toaster,
}

impl ShowToast for ToastHandle<'_> {
    fn show_toast(&mut self, config: ToastConfig) -> ToastId {
        self.toaster.show_toast(config)
    }

    fn dismiss(&mut self, id: &ToastId) -> bool {
        self.toaster.dismiss(id)
    }
}
