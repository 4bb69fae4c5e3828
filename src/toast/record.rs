// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! [`ToastConfig`] is what callers hand to `show_toast`; [`ToastRecord`] is the
//! fully-defaulted, immutable entry the queue stores.

use super::Message;
use iced::{Color, Element, Padding};
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// Identifier of a queued toast. Unique among the records of one queue.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(String);

impl ToastId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ToastId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ToastId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Hands out ids for toasts shown without one.
///
/// A per-queue counter: two toasts shown within the same instant still get
/// distinct ids.
#[derive(Debug, Default)]
pub(crate) struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub(crate) fn next_id(&mut self) -> ToastId {
        let id = ToastId(format!("toast-{}", self.next));
        self.next += 1;
        id
    }
}

/// Style selector for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    /// Neutral dark background.
    #[default]
    Info,
    /// Green background.
    Success,
    /// Red background.
    Error,
}

impl ToastKind {
    /// Parses a kind name, falling back to [`ToastKind::Info`] for anything
    /// unrecognized.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "success" => ToastKind::Success,
            "error" => ToastKind::Error,
            _ => ToastKind::Info,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ToastKind::Info => "info",
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

/// Screen anchor a toast is stacked at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToastPosition {
    Top,
    Center,
    #[default]
    Bottom,
}

impl ToastPosition {
    /// All anchors, in the order their layers are stacked.
    pub const ALL: [ToastPosition; 3] =
        [ToastPosition::Top, ToastPosition::Center, ToastPosition::Bottom];

    /// Parses a position name, falling back to [`ToastPosition::Bottom`] for
    /// anything unrecognized.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "top" => ToastPosition::Top,
            "center" => ToastPosition::Center,
            _ => ToastPosition::Bottom,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ToastPosition::Top => "top",
            ToastPosition::Center => "center",
            ToastPosition::Bottom => "bottom",
        }
    }
}

/// Builder for arbitrary toast content.
pub type RichBuilder = dyn Fn() -> Element<'static, Message>;

/// Opaque rich content, rendered as-is inside the toast container.
#[derive(Clone)]
pub struct RichContent(Rc<RichBuilder>);

impl RichContent {
    pub fn new(build: impl Fn() -> Element<'static, Message> + 'static) -> Self {
        Self(Rc::new(build))
    }

    pub(crate) fn build(&self) -> Element<'static, Message> {
        (self.0)()
    }
}

impl fmt::Debug for RichContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RichContent(..)")
    }
}

/// Body of a toast: plain text or rich content.
#[derive(Debug, Clone)]
pub enum ToastContent {
    Text(String),
    Rich(RichContent),
}

impl ToastContent {
    /// Wraps a builder producing arbitrary content.
    pub fn rich(build: impl Fn() -> Element<'static, Message> + 'static) -> Self {
        ToastContent::Rich(RichContent::new(build))
    }

    /// Returns the text if this is plain text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ToastContent::Text(text) => Some(text),
            ToastContent::Rich(_) => None,
        }
    }
}

impl From<&str> for ToastContent {
    fn from(value: &str) -> Self {
        ToastContent::Text(value.to_string())
    }
}

impl From<String> for ToastContent {
    fn from(value: String) -> Self {
        ToastContent::Text(value)
    }
}

/// Visual overrides merged onto the default container style.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContainerStyle {
    pub background: Option<Color>,
    pub text_color: Option<Color>,
    pub radius: Option<f32>,
    pub padding: Option<Padding>,
    pub shadow: Option<bool>,
}

impl ContainerStyle {
    #[must_use]
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    #[must_use]
    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    #[must_use]
    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = Some(radius);
        self
    }

    #[must_use]
    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = Some(padding.into());
        self
    }

    #[must_use]
    pub fn shadow(mut self, enabled: bool) -> Self {
        self.shadow = Some(enabled);
        self
    }
}

/// What a caller passes to `show_toast`. Only the message is required.
#[derive(Debug, Clone)]
pub struct ToastConfig {
    pub id: Option<ToastId>,
    pub message: ToastContent,
    pub kind: Option<ToastKind>,
    pub duration: Option<Duration>,
    pub position: Option<ToastPosition>,
    pub container_style: Option<ContainerStyle>,
}

impl ToastConfig {
    pub fn new(message: impl Into<ToastContent>) -> Self {
        Self {
            id: None,
            message: message.into(),
            kind: None,
            duration: None,
            position: None,
            container_style: None,
        }
    }

    pub fn info(message: impl Into<ToastContent>) -> Self {
        Self::new(message).kind(ToastKind::Info)
    }

    pub fn success(message: impl Into<ToastContent>) -> Self {
        Self::new(message).kind(ToastKind::Success)
    }

    pub fn error(message: impl Into<ToastContent>) -> Self {
        Self::new(message).kind(ToastKind::Error)
    }

    #[must_use]
    pub fn id(mut self, id: impl Into<ToastId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: ToastKind) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    #[must_use]
    pub fn position(mut self, position: ToastPosition) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub fn container_style(mut self, style: ContainerStyle) -> Self {
        self.container_style = Some(style);
        self
    }
}

/// A queued toast with every default applied. Never mutated after creation.
#[derive(Debug, Clone)]
pub struct ToastRecord {
    id: ToastId,
    content: ToastContent,
    kind: ToastKind,
    position: ToastPosition,
    duration: Duration,
    style: ContainerStyle,
}

impl ToastRecord {
    pub(crate) fn from_config(config: ToastConfig, id: ToastId, default_duration: Duration) -> Self {
        Self {
            id,
            content: config.message,
            kind: config.kind.unwrap_or_default(),
            position: config.position.unwrap_or_default(),
            duration: config.duration.unwrap_or(default_duration),
            style: config.container_style.unwrap_or_default(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &ToastId {
        &self.id
    }

    #[must_use]
    pub fn content(&self) -> &ToastContent {
        &self.content
    }

    #[must_use]
    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    #[must_use]
    pub fn position(&self) -> ToastPosition {
        self.position
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn style(&self) -> &ContainerStyle {
        &self.style
    }
}
