// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Every color, spacing, size and font scale used by the shell lives here.

## Organization

- **Palette**: Neutral, brand, accent and toast colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px steps)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use chopexpress::ui::design_tokens::{palette, spacing};

let card_padding = spacing::XXL;
let title_color = palette::GRAY_900;
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_50: Color = Color::from_rgb8(0xf9, 0xfa, 0xfb);
    pub const GRAY_200: Color = Color::from_rgb8(0xe5, 0xe7, 0xeb);
    pub const GRAY_300: Color = Color::from_rgb8(0xd1, 0xd5, 0xdb);
    pub const GRAY_500: Color = Color::from_rgb8(0x6b, 0x72, 0x80);
    pub const GRAY_600: Color = Color::from_rgb8(0x4b, 0x55, 0x63);
    pub const GRAY_800: Color = Color::from_rgb8(0x1f, 0x29, 0x37);
    pub const GRAY_900: Color = Color::from_rgb8(0x11, 0x18, 0x27);

    // Brand (green, the chef badge)
    pub const GREEN_100: Color = Color::from_rgb8(0xdc, 0xfc, 0xe7);
    pub const GREEN_600: Color = Color::from_rgb8(0x16, 0xa3, 0x4a);

    // Feature accents
    pub const BLUE_50: Color = Color::from_rgb8(0xef, 0xf6, 0xff);
    pub const BLUE_100: Color = Color::from_rgb8(0xdb, 0xea, 0xfe);
    pub const BLUE_200: Color = Color::from_rgb8(0xbf, 0xdb, 0xfe);
    pub const BLUE_600: Color = Color::from_rgb8(0x25, 0x63, 0xeb);
    pub const BLUE_700: Color = Color::from_rgb8(0x1d, 0x4e, 0xd8);
    pub const BLUE_900: Color = Color::from_rgb8(0x1e, 0x3a, 0x8a);
    pub const YELLOW_100: Color = Color::from_rgb8(0xfe, 0xf9, 0xc3);
    pub const YELLOW_600: Color = Color::from_rgb8(0xca, 0x8a, 0x04);
    pub const PURPLE_100: Color = Color::from_rgb8(0xf3, 0xe8, 0xff);
    pub const PURPLE_600: Color = Color::from_rgb8(0x93, 0x33, 0xea);

    // Toasts
    pub const TOAST_BACKGROUND: Color = Color::from_rgb8(0x36, 0x36, 0x36);
    pub const TOAST_TEXT: Color = WHITE;
    pub const SUCCESS_400: Color = Color::from_rgb8(0x4a, 0xde, 0x80);
    pub const ERROR_500: Color = Color::from_rgb8(0xef, 0x44, 0x44);
    pub const INFO_400: Color = Color::from_rgb8(0x60, 0xa5, 0xfa);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_MD: f32 = 24.0;

    /// Round badge holding the chef glyph.
    pub const BADGE_LG: f32 = 96.0;
    /// Square tile holding a feature glyph.
    pub const BADGE_MD: f32 = 48.0;
    /// Round tile holding the info glyph.
    pub const BADGE_SM: f32 = 32.0;

    pub const NAVBAR_HEIGHT: f32 = 56.0;
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const CONTENT_MAX_WIDTH: f32 = 1024.0;
    pub const FEATURES_MAX_WIDTH: f32 = 672.0;
    pub const PARAGRAPH_MAX_WIDTH: f32 = 448.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.

    /// Page heading.
    pub const TITLE_LG: f32 = 30.0;

    /// Card heading.
    pub const TITLE_MD: f32 = 24.0;

    /// App name in the navbar.
    pub const TITLE_SM: f32 = 20.0;

    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;

    /// Glyph inside the large badge.
    pub const GLYPH_LG: f32 = 48.0;
    /// Glyph inside a feature tile.
    pub const GLYPH_MD: f32 = 24.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.05),
        offset: Vector { x: 0.0, y: 1.0 },
        blur_radius: 2.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XL > spacing::LG);
    assert!(spacing::XXL > spacing::XL);

    assert!(opacity::OVERLAY_MEDIUM > opacity::OVERLAY_SUBTLE);
    assert!(opacity::OVERLAY_MEDIUM < 1.0);

    assert!(sizing::BADGE_LG > sizing::BADGE_MD);
    assert!(sizing::BADGE_MD > sizing::BADGE_SM);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
