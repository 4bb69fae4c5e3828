// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` provides queued, animated toast notifications for the Iced
//! GUI framework.
//!
//! Toasts stack at the top, center or bottom of the window, fade in, leave
//! after a timeout and can be swiped away horizontally. An application either
//! wraps its whole view in a [`toast::ToastProvider`] and hands its context to
//! descendants, or places a scoped [`toast::Toast`] and drives it through an
//! explicit handle.

pub mod app;
pub mod config;
pub mod error;
pub mod toast;
pub mod ui;

pub use toast::{
    ShowToast, Toast, ToastConfig, ToastContent, ToastHandle, ToastId, ToastKind, ToastPosition,
    ToastProvider,
};
