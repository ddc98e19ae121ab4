// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

All of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors (warm paper and ink tones)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use cabinet::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let overlay_bg = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.11, 0.1, 0.09);
    pub const GRAY_700: Color = Color::from_rgb(0.32, 0.3, 0.28);
    pub const GRAY_400: Color = Color::from_rgb(0.46, 0.44, 0.41);
    pub const GRAY_200: Color = Color::from_rgb(0.78, 0.76, 0.72);
    pub const GRAY_100: Color = Color::from_rgb(0.93, 0.91, 0.87);

    // Brand colors (amber scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.96, 0.7, 0.28);
    pub const PRIMARY_500: Color = Color::from_rgb(0.85, 0.55, 0.13);
    pub const PRIMARY_600: Color = Color::from_rgb(0.7, 0.42, 0.08);
    pub const PRIMARY_900: Color = Color::from_rgb(0.47, 0.21, 0.06);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    /// Modal backdrop behind the viewer.
    pub const BACKDROP: f32 = 0.92;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 48.0;

    /// Top navigation bar.
    pub const NAVBAR_HEIGHT: f32 = 56.0;

    /// Source and object cards in grids.
    pub const CARD_WIDTH: f32 = 260.0;
    pub const CARD_IMAGE_HEIGHT: f32 = 180.0;

    /// Viewer thumbnail strip.
    pub const THUMBNAIL: f32 = 64.0;

    /// Inline viewer height on detail screens.
    pub const INLINE_VIEWER_HEIGHT: f32 = 460.0;

    /// Filter sidebar on the Explore screen.
    pub const SIDEBAR_WIDTH: f32 = 240.0;

    /// Maximum width of page content.
    pub const PAGE_WIDTH: f32 = 1200.0;

    /// Preview tiles on the Discover screen.
    pub const PREVIEW_TILE: f32 = 128.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Titles: Large headings (pages, sections)
    //! - Body: Primary content text
    //! - Caption: Secondary, supporting text

    /// Large title - Page headings
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - App name, card titles on detail pages
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - Section headers
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Lead paragraphs
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text
    pub const BODY: f32 = 14.0;

    /// Small body - Metadata labels
    pub const BODY_SM: f32 = 13.0;

    /// Caption - Credits, counters, badges
    pub const CAPTION: f32 = 12.0;
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
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::BACKDROP > 0.0 && opacity::BACKDROP < 1.0);

    // Sizing validation
    assert!(sizing::ICON_XL > sizing::ICON_LG);
    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::THUMBNAIL < sizing::CARD_IMAGE_HEIGHT);

    // Typography validation
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
