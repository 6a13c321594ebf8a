// SPDX-License-Identifier: MPL-2.0
//! Design tokens: colors, spacing, sizes and type scale shared by the views.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    /// Marker fill.
    pub const MARKER: Color = BLACK;
    /// Note fill.
    pub const NOTE: Color = Color::from_rgb(0.15, 0.4, 0.7);
    /// Line joining a marker to its note.
    pub const NOTE_LINK: Color = Color::from_rgb(0.263, 0.702, 0.404);
    /// Area drawn in place of the image before one is loaded.
    pub const IMAGE_PLACEHOLDER: Color = GRAY_200;
}

// ============================================================================
// Spacing Scale (8px grid)
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    /// Width of the marker-to-note line.
    pub const NOTE_LINK_WIDTH: f32 = 6.0;
    /// Marker label font size.
    pub const MARKER_LABEL: f32 = 14.0;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    pub const CAPTION: f32 = 12.0;
    pub const BODY: f32 = 14.0;
    pub const TITLE_SM: f32 = 18.0;
}

// ============================================================================
// Radius
// ============================================================================

pub mod radius {
    pub const MD: f32 = 8.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_increasing() {
        assert!(spacing::XS < spacing::SM);
        assert!(spacing::SM < spacing::MD);
        assert!(spacing::MD < spacing::LG);
    }
}
