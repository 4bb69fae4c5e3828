// SPDX-License-Identifier: MPL-2.0
//! Toast notification system.
//!
//! Transient messages are queued, rendered at one of three anchors (top,
//! center, bottom), removed after a timeout and can be swiped away.
//!
//! # Components
//!
//! - [`record`] - `ToastConfig`, `ToastRecord` and their enums
//! - [`queue`] - `ToastQueue`, ordered records with auto-dismiss deadlines
//! - [`animation`] - timing and spring primitives
//! - [`item`] - `ToastItem`, the per-toast animation and gesture state machine
//! - [`toaster`] - `Toaster`, the engine tying queue, items and input together
//! - [`provider`] - `ToastProvider` (ambient) and `Toast` (scoped) entry points
//!
//! # Usage
//!
//! ```ignore
//! use iced_toast::toast::{ShowToast, ToastConfig, ToastPosition, ToastProvider};
//!
//! // At the application root
//! let mut toasts = ToastProvider::default();
//!
//! // Anywhere an update context carries `toasts.context()`
//! toasts
//!     .context()
//!     .show_toast(ToastConfig::success("Saved").position(ToastPosition::Top));
//!
//! // In the root view
//! toasts.view(content, Message::Toast)
//! ```

pub mod animation;
pub mod clock;
pub mod item;
pub mod provider;
pub mod queue;
pub mod record;
pub mod settings;
pub mod toaster;

pub use clock::{Clock, ManualClock, SystemClock};
pub use item::{ItemEvent, Phase, Release, ToastItem};
pub use provider::{ShowToast, Toast, ToastContext, ToastHandle, ToastProvider};
pub use queue::ToastQueue;
pub use record::{
    ContainerStyle, RichContent, ToastConfig, ToastContent, ToastId, ToastKind, ToastPosition,
    ToastRecord,
};
pub use settings::Settings;
pub use toaster::{Message, Toaster};
