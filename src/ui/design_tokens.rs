// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii

## Examples

```
use iced_chronicle::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Create a faded text color
let faded_ink = Color {
    a: opacity::DIMMED,
    ..palette::INK_900
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```

## Modification

Tokens are designed to be consistent. Before modifying:
1. Check the impact on all components
2. Maintain ratios (e.g., MD = XS * 2)
3. Run validation tests
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Paper & ink (the page's base look)
    pub const PAPER: Color = Color::from_rgb(0.957, 0.961, 0.973);
    pub const INK_900: Color = Color::from_rgb(0.259, 0.337, 0.478); // #42567A
    pub const INK_700: Color = Color::from_rgb(0.36, 0.43, 0.56);
    pub const GRAY_400: Color = Color::from_rgb(0.55, 0.58, 0.64);
    pub const GRAY_200: Color = Color::from_rgb(0.78, 0.80, 0.85);

    // Accent colors for the interpolating year numbers
    pub const IRIS_500: Color = Color::from_rgb(0.365, 0.373, 0.937); // #5D5FEF
    pub const FUCHSIA_500: Color = Color::from_rgb(0.937, 0.365, 0.659); // #EF5DA8
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Partially clipped slider cards.
    pub const DIMMED: f32 = 0.4;
    /// The faint navigator ring and connector lines.
    pub const RING: f32 = 0.2;
    /// Disabled controls.
    pub const DISABLED: f32 = 0.35;
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

    /// Gap between event cards in the slider.
    pub const CARD_GAP: f32 = LG;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Circular navigator
    pub const CIRCLE_RADIUS: f32 = 265.0;
    pub const CIRCLE_CANVAS: f32 = 640.0;
    pub const DOT_RADIUS: f32 = 3.0;
    pub const DOT_ACTIVE_RADIUS: f32 = 28.0;

    // Event slider
    pub const CARD_WIDTH: f32 = 320.0;
    pub const CARD_HEIGHT: f32 = 160.0;
    pub const PAGINATION_DOT: f32 = 10.0;

    // Stepper controls
    pub const STEPPER_BUTTON: f32 = 50.0;
    pub const EDGE_BUTTON: f32 = 40.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// The huge interpolating year numbers.
    pub const YEAR_XL: f32 = 120.0;

    /// Page title.
    pub const TITLE_LG: f32 = 42.0;

    /// Timeline title above the event strip.
    pub const TITLE_MD: f32 = 22.0;

    /// Event card year.
    pub const TITLE_SM: f32 = 20.0;

    /// Standard body - card descriptions.
    pub const BODY: f32 = 15.0;

    /// Caption - position counter, dot ordinals.
    pub const CAPTION: f32 = 14.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0; // Pill shape
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
    assert!(opacity::DIMMED > 0.0 && opacity::DIMMED < 1.0);

    // Sizing validation
    assert!(sizing::DOT_ACTIVE_RADIUS > sizing::DOT_RADIUS);
    assert!(sizing::CIRCLE_CANVAS > sizing::CIRCLE_RADIUS * 2.0);
};
