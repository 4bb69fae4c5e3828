// SPDX-License-Identifier: MPL-2.0
//! Toast container styling.
//!
//! The default look is derived from the toast kind; per-toast
//! [`ContainerStyle`] overrides are merged on top, then the animated opacity
//! is applied to every color.

use crate::toast::{ContainerStyle, ToastKind};
use crate::ui::design_tokens::{palette, radius, shadow, spacing};
use iced::widget::container;
use iced::{Background, Border, Color, Padding, Shadow};

/// Background color for a toast kind.
#[must_use]
pub fn kind_color(kind: ToastKind) -> Color {
    match kind {
        ToastKind::Info => palette::NEUTRAL_DARK,
        ToastKind::Success => palette::SUCCESS,
        ToastKind::Error => palette::ERROR,
    }
}

/// Fully resolved look of one toast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastStyle {
    pub background: Color,
    pub text_color: Color,
    pub radius: f32,
    pub padding: Padding,
    pub shadow: Shadow,
}

impl ToastStyle {
    /// Default style for `kind`, with `overrides` merged field by field.
    #[must_use]
    pub fn resolve(kind: ToastKind, overrides: &ContainerStyle) -> Self {
        Self {
            background: overrides.background.unwrap_or_else(|| kind_color(kind)),
            text_color: overrides.text_color.unwrap_or(palette::WHITE),
            radius: overrides.radius.unwrap_or(radius::LG),
            padding: overrides
                .padding
                .unwrap_or(Padding::from([spacing::SM, spacing::MD])),
            shadow: match overrides.shadow {
                Some(false) => shadow::NONE,
                _ => shadow::TOAST,
            },
        }
    }

    /// Scales every color's alpha by `opacity`.
    #[must_use]
    pub fn faded(mut self, opacity: f32) -> Self {
        let opacity = opacity.clamp(0.0, 1.0);
        self.background = self.background.scale_alpha(opacity);
        self.text_color = self.text_color.scale_alpha(opacity);
        self.shadow.color = self.shadow.color.scale_alpha(opacity);
        self
    }
}

/// Style function for the toast container.
#[must_use]
pub fn toast_container(style: &ToastStyle) -> container::Style {
    container::Style {
        background: Some(Background::Color(style.background)),
        border: Border {
            radius: style.radius.into(),
            ..Border::default()
        },
        shadow: style.shadow,
        text_color: Some(style.text_color),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_to_their_colors() {
        assert_eq!(kind_color(ToastKind::Info), palette::NEUTRAL_DARK);
        assert_eq!(kind_color(ToastKind::Success), palette::SUCCESS);
        assert_eq!(kind_color(ToastKind::Error), palette::ERROR);
    }

    #[test]
    fn resolve_without_overrides_uses_defaults() {
        let style = ToastStyle::resolve(ToastKind::Error, &ContainerStyle::default());
        assert_eq!(style.background, palette::ERROR);
        assert_eq!(style.text_color, palette::WHITE);
        assert_eq!(style.radius, radius::LG);
        assert_eq!(style.shadow, shadow::TOAST);
    }

    #[test]
    fn overrides_win_over_defaults() {
        let overrides = ContainerStyle::default()
            .background(Color::from_rgb(0.0, 0.0, 1.0))
            .radius(2.0)
            .shadow(false);
        let style = ToastStyle::resolve(ToastKind::Success, &overrides);

        assert_eq!(style.background, Color::from_rgb(0.0, 0.0, 1.0));
        assert_eq!(style.radius, 2.0);
        assert_eq!(style.shadow, shadow::NONE);
        assert_eq!(style.text_color, palette::WHITE);
    }

    #[test]
    fn faded_scales_alpha() {
        let style = ToastStyle::resolve(ToastKind::Info, &ContainerStyle::default()).faded(0.5);
        assert!((style.background.a - 0.5).abs() < f32::EPSILON);
        assert!((style.text_color.a - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn container_style_uses_background() {
        let style = ToastStyle::resolve(ToastKind::Success, &ContainerStyle::default());
        let container = toast_container(&style);
        assert_eq!(
            container.background,
            Some(Background::Color(palette::SUCCESS))
        );
        assert_eq!(container.text_color, Some(palette::WHITE));
    }
}
