//! Centralized theme constants for the VolunteerHub deck
//! All colors, sizes, and styling should reference these constants

use crate::types::{MilestoneStatus, RiskTone};
use egui::Color32;

// =============================================================================
// COLORS - Brand
// =============================================================================
pub const BRAND_DARK: Color32 = Color32::from_rgb(0x21, 0x35, 0x55); // headings, active nodes
pub const BRAND_NAVY: Color32 = Color32::from_rgb(0x3e, 0x58, 0x79);
pub const BRAND_MUTED: Color32 = Color32::from_rgb(0x6b, 0x7a, 0x90); // secondary text, borders
pub const BRAND_CREAM: Color32 = Color32::from_rgb(0xf5, 0xef, 0xe7); // page background
pub const BRAND_CREAM_DARK: Color32 = Color32::from_rgb(0xd8, 0xc4, 0xb6);

// =============================================================================
// COLORS - Surfaces
// =============================================================================
pub const BG_BASE: Color32 = BRAND_CREAM;
pub const BG_CARD: Color32 = Color32::from_rgb(0xff, 0xff, 0xff);
pub const BG_RAIL: Color32 = Color32::from_rgb(0xfc, 0xfa, 0xf7);
pub const BG_HOVER: Color32 = Color32::from_rgb(0xee, 0xe6, 0xdc);

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = BRAND_DARK;
pub const TEXT_SECONDARY: Color32 = BRAND_NAVY;
pub const TEXT_MUTED: Color32 = BRAND_MUTED;
pub const TEXT_ON_DARK: Color32 = Color32::WHITE;

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0xe6, 0xe2, 0xdc);
pub const BORDER_DEFAULT: Color32 = Color32::from_rgb(0xc9, 0xcf, 0xd8);

// =============================================================================
// COLORS - Accents (teal = positive, rose = problem, amber = caution)
// =============================================================================
pub const TEAL_50: Color32 = Color32::from_rgb(0xf0, 0xfd, 0xfa);
pub const TEAL_100: Color32 = Color32::from_rgb(0xcc, 0xfb, 0xf1);
pub const TEAL_200: Color32 = Color32::from_rgb(0x99, 0xf6, 0xe4);
pub const TEAL_500: Color32 = Color32::from_rgb(0x14, 0xb8, 0xa6);
pub const TEAL_600: Color32 = Color32::from_rgb(0x0d, 0x94, 0x88);
pub const TEAL_700: Color32 = Color32::from_rgb(0x0f, 0x76, 0x6e);
pub const TEAL_800: Color32 = Color32::from_rgb(0x11, 0x5e, 0x59);

pub const ROSE_50: Color32 = Color32::from_rgb(0xff, 0xf1, 0xf2);
pub const ROSE_100: Color32 = Color32::from_rgb(0xff, 0xe4, 0xe6);
pub const ROSE_200: Color32 = Color32::from_rgb(0xfe, 0xcd, 0xd3);
pub const ROSE_500: Color32 = Color32::from_rgb(0xf4, 0x3f, 0x5e);
pub const ROSE_600: Color32 = Color32::from_rgb(0xe1, 0x1d, 0x48);
pub const ROSE_700: Color32 = Color32::from_rgb(0xbe, 0x12, 0x3c);
pub const ROSE_800: Color32 = Color32::from_rgb(0x9f, 0x12, 0x39);

pub const AMBER_50: Color32 = Color32::from_rgb(0xff, 0xfb, 0xeb);
pub const AMBER_200: Color32 = Color32::from_rgb(0xfd, 0xe6, 0x8a);
pub const AMBER_800: Color32 = Color32::from_rgb(0x92, 0x40, 0x0e);

// =============================================================================
// COLORS - Tones
// =============================================================================

/// Returns (fill, border, text) for a risk card
pub fn risk_colors(tone: RiskTone) -> (Color32, Color32, Color32) {
    match tone {
        RiskTone::Rose => (ROSE_50, ROSE_200, ROSE_800),
        RiskTone::Amber => (AMBER_50, AMBER_200, AMBER_800),
        RiskTone::Neutral => (BRAND_CREAM, with_alpha(BRAND_MUTED, 77), BRAND_NAVY),
    }
}

/// Returns (fill, border, date text, label text) for a milestone tile
pub fn milestone_colors(status: MilestoneStatus) -> (Color32, Color32, Color32, Color32) {
    match status {
        MilestoneStatus::Complete => (TEAL_50, TEAL_200, TEAL_600, TEAL_700),
        MilestoneStatus::Current => (with_alpha(BRAND_NAVY, 26), BRAND_NAVY, BRAND_NAVY, BRAND_DARK),
        MilestoneStatus::Upcoming => (BRAND_CREAM, with_alpha(BRAND_MUTED, 77), BRAND_MUTED, BRAND_NAVY),
    }
}

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_DISPLAY: f32 = 44.0;
pub const FONT_TITLE: f32 = 24.0;
pub const FONT_HEADING: f32 = 18.0;
pub const FONT_STAT: f32 = 20.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_LABEL: f32 = 13.0;
pub const FONT_SMALL: f32 = 12.0;
pub const FONT_CAPTION: f32 = 11.0;

// =============================================================================
// DIMENSIONS - Layout
// =============================================================================
pub const RAIL_WIDTH: f32 = 224.0;
pub const RAIL_NODE_SIZE: f32 = 44.0;
pub const CONTENT_MAX_WIDTH: f32 = 1280.0;
pub const HEADER_HEIGHT: f32 = 56.0;
pub const ICON_BUTTON_SIZE: f32 = 32.0;
pub const AVATAR_SIZE: f32 = 48.0;
pub const PROGRESS_DOT: f32 = 6.0;
pub const PROGRESS_DOT_ACTIVE: f32 = 24.0;

// =============================================================================
// CORNER RADIUS
// =============================================================================
pub const RADIUS_SMALL: f32 = 4.0;
pub const RADIUS_DEFAULT: f32 = 8.0;
pub const RADIUS_LARGE: f32 = 12.0;

// =============================================================================
// STROKE WIDTHS
// =============================================================================
pub const STROKE_DEFAULT: f32 = 1.0;
pub const STROKE_THICK: f32 = 2.0;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;
pub const SPACING_XXL: f32 = 24.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals {
        dark_mode: false,
        panel_fill: BG_BASE,
        window_fill: BG_CARD,
        extreme_bg_color: BG_CARD,
        faint_bg_color: BG_RAIL,
        hyperlink_color: TEAL_600,
        selection: egui::style::Selection {
            bg_fill: BRAND_CREAM_DARK,
            stroke: egui::Stroke::NONE,
        },
        widgets: egui::style::Widgets {
            noninteractive: egui::style::WidgetVisuals {
                bg_fill: BG_CARD,
                weak_bg_fill: BG_RAIL,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_SMALL.into(),
                expansion: 0.0,
            },
            inactive: egui::style::WidgetVisuals {
                bg_fill: Color32::TRANSPARENT,
                weak_bg_fill: Color32::TRANSPARENT,
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_SECONDARY),
                corner_radius: RADIUS_SMALL.into(),
                expansion: 0.0,
            },
            hovered: egui::style::WidgetVisuals {
                bg_fill: BG_HOVER,
                weak_bg_fill: BG_HOVER,
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_SMALL.into(),
                expansion: 0.0,
            },
            active: egui::style::WidgetVisuals {
                bg_fill: BRAND_CREAM_DARK,
                weak_bg_fill: BRAND_CREAM_DARK,
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_SMALL.into(),
                expansion: -1.0,
            },
            open: egui::style::WidgetVisuals {
                bg_fill: BG_HOVER,
                weak_bg_fill: BG_HOVER,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_SMALL.into(),
                expansion: 0.0,
            },
        },
        striped: false,
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        popup_shadow: egui::epaint::Shadow {
            offset: [0, 4],
            blur: 12,
            spread: 0,
            color: Color32::from_black_alpha(30),
        },
        window_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
        window_corner_radius: egui::CornerRadius::same(8),
        ..egui::Visuals::light()
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(10.0, 6.0);
        style.spacing.scroll.bar_width = 6.0;
        style.spacing.scroll.floating = true;
    });
}

// =============================================================================
// HELPER - Frames
// =============================================================================

/// Main content card
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_CARD)
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(SPACING_XL as i8))
        .shadow(egui::epaint::Shadow {
            offset: [0, 8],
            blur: 24,
            spread: 0,
            color: Color32::from_black_alpha(28),
        })
}

/// Navigation rail and mobile header
pub fn rail_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_RAIL)
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(SPACING_LG as i8))
}

/// Coloured content panel inside a slide
pub fn panel_frame(fill: Color32, border: Color32) -> egui::Frame {
    egui::Frame::new()
        .fill(fill)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, border))
        .corner_radius(RADIUS_DEFAULT)
        .inner_margin(egui::Margin::same(SPACING_XL as i8))
}

/// Small white tile nested in a panel
pub fn tile_frame(border: Color32) -> egui::Frame {
    egui::Frame::new()
        .fill(BG_CARD)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, border))
        .corner_radius(RADIUS_DEFAULT)
        .inner_margin(egui::Margin::same(SPACING_LG as i8))
}

/// Dark emphasis panel (objective, risk response)
pub fn dark_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BRAND_DARK)
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(SPACING_XL as i8))
}

// =============================================================================
// HELPER - Buttons
// =============================================================================

/// Returns (fill, draw_rect) for a custom-painted button with hover/press effects.
/// Darkens on hover, darkens more + shrinks on press.
pub fn button_visual(
    response: &egui::Response,
    base_fill: Color32,
    rect: egui::Rect,
) -> (Color32, egui::Rect) {
    if response.is_pointer_button_down_on() {
        (darken(base_fill, 0.12), rect.shrink(1.5))
    } else if response.hovered() {
        (darken(base_fill, 0.06), rect)
    } else {
        (base_fill, rect)
    }
}

pub fn darken(c: Color32, amount: f32) -> Color32 {
    let f = 1.0 - amount.clamp(0.0, 1.0);
    Color32::from_rgba_unmultiplied(
        (c.r() as f32 * f) as u8,
        (c.g() as f32 * f) as u8,
        (c.b() as f32 * f) as u8,
        c.a(),
    )
}

pub fn with_alpha(c: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(c.r(), c.g(), c.b(), alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_darken_keeps_alpha() {
        let c = darken(Color32::from_rgb(200, 100, 50), 0.5);
        assert_eq!((c.r(), c.g(), c.b(), c.a()), (100, 50, 25, 255));
    }

    #[test]
    fn test_risk_tones_are_distinct() {
        let rose = risk_colors(RiskTone::Rose);
        let amber = risk_colors(RiskTone::Amber);
        let neutral = risk_colors(RiskTone::Neutral);
        assert_ne!(rose, amber);
        assert_ne!(amber, neutral);
    }
}
