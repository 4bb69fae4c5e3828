// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines the visual tokens of the toast widget.

## Organization

- **Palette**: Base and per-kind colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px grid)
- **Typography**: Font sizes
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_toast::ui::design_tokens::{palette, spacing};

let background = palette::SUCCESS;
let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    /// Info toast background (#333333).
    pub const NEUTRAL_DARK: Color = Color::from_rgb(0.2, 0.2, 0.2);

    /// Success toast background (#4CAF50).
    pub const SUCCESS: Color = Color::from_rgb(0.298, 0.686, 0.314);

    /// Error toast background (#F44336).
    pub const ERROR: Color = Color::from_rgb(0.957, 0.263, 0.212);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Toast drop shadow.
    pub const SHADOW: f32 = 0.2;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (4px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Toast message text.
    pub const BODY: f32 = 14.0;

    /// Demo buttons.
    pub const BODY_LG: f32 = 16.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{opacity, palette};
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Soft elevation under a toast.
    pub const TOAST: Shadow = Shadow {
        color: Color {
            a: opacity::SHADOW,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_colors_are_distinct() {
        assert_ne!(palette::NEUTRAL_DARK, palette::SUCCESS);
        assert_ne!(palette::NEUTRAL_DARK, palette::ERROR);
        assert_ne!(palette::SUCCESS, palette::ERROR);
    }

    #[test]
    fn spacing_scale_is_increasing() {
        assert!(spacing::XXS < spacing::XS);
        assert!(spacing::XS < spacing::SM);
        assert!(spacing::SM < spacing::MD);
        assert!(spacing::MD < spacing::LG);
    }

    #[test]
    fn toast_shadow_is_translucent() {
        assert!(shadow::TOAST.color.a < opacity::OPAQUE);
        assert!(shadow::TOAST.color.a > opacity::TRANSPARENT);
    }
}
