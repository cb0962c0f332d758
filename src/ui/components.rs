//! Reusable UI components
//!
//! Standalone widgets shared by the slide panels and the deck chrome.

use crate::app::assets::AssetCache;
use crate::app::lightbox::Lightbox;
use crate::theme;
use crate::types::{Figure, Heading, Icon};
use crate::ui::motion::Reveal;
use eframe::egui;

/// Centered slide title with optional subtitle
pub fn heading(ui: &mut egui::Ui, heading: &Heading) {
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(&heading.title)
                .size(theme::FONT_TITLE)
                .strong()
                .color(theme::TEXT_PRIMARY),
        );
        if let Some(subtitle) = &heading.subtitle {
            ui.label(
                egui::RichText::new(subtitle)
                    .size(theme::FONT_LABEL)
                    .color(theme::TEXT_MUTED),
            );
        }
    });
    ui.add_space(theme::SPACING_LG);
}

/// Glyph followed by a label on one line
pub fn icon_text(ui: &mut egui::Ui, icon: Icon, text: egui::RichText, size: f32, icon_color: egui::Color32) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = theme::SPACING_MD;
        ui.label(egui::RichText::new(icon.glyph()).size(size).color(icon_color));
        ui.label(text.size(size));
    });
}

/// Rounded square with a centered glyph (section header icons)
pub fn icon_tile(ui: &mut egui::Ui, icon: Icon, fill: egui::Color32, fg: egui::Color32, glyph_size: f32) {
    let side = glyph_size + theme::SPACING_LG;
    let (rect, _) = ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::hover());
    if ui.is_rect_visible(rect) {
        ui.painter().rect_filled(rect, theme::RADIUS_DEFAULT, fill);
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            icon.glyph(),
            egui::FontId::proportional(glyph_size),
            fg,
        );
    }
}

/// Pill-shaped badge
pub fn badge(ui: &mut egui::Ui, text: &str, fill: egui::Color32, fg: egui::Color32, border: Option<egui::Color32>) {
    let mut frame = egui::Frame::new()
        .fill(fill)
        .corner_radius(theme::RADIUS_LARGE)
        .inner_margin(egui::Margin::symmetric(8, 2));
    if let Some(border) = border {
        frame = frame.stroke(egui::Stroke::new(theme::STROKE_DEFAULT, border));
    }
    frame.show(ui, |ui| {
        ui.label(egui::RichText::new(text).size(theme::FONT_CAPTION).strong().color(fg));
    });
}

/// Staggered entry: fades in and slides up after `delay` seconds
pub fn reveal<R>(
    ui: &mut egui::Ui,
    reveal: &Reveal,
    delay: f32,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    let (opacity, offset) = reveal.sample(delay);
    ui.scope(|ui| {
        ui.multiply_opacity(opacity);
        if offset > 0.0 {
            ui.add_space(offset);
        }
        add_contents(ui)
    })
    .inner
}

/// Column count for a grid: `wide` when there is room, `narrow` otherwise
pub fn responsive_columns(ui: &egui::Ui, wide: usize, narrow: usize) -> usize {
    if ui.available_width() >= 640.0 {
        wide
    } else {
        narrow
    }
}

/// Lay out `len` cells in rows of `columns` equal-width columns
pub fn grid(ui: &mut egui::Ui, len: usize, columns: usize, mut cell: impl FnMut(&mut egui::Ui, usize)) {
    let columns = columns.max(1);
    for row_start in (0..len).step_by(columns) {
        ui.columns(columns, |cols| {
            for (offset, col) in cols.iter_mut().enumerate() {
                let idx = row_start + offset;
                if idx < len {
                    cell(col, idx);
                }
            }
        });
        ui.add_space(theme::SPACING_SM);
    }
}

/// Square ghost button with a glyph. Disabled buttons never report clicks.
pub fn icon_button(ui: &mut egui::Ui, glyph: &str, enabled: bool) -> egui::Response {
    let size = egui::vec2(theme::ICON_BUTTON_SIZE, theme::ICON_BUTTON_SIZE);
    let sense = if enabled { egui::Sense::click() } else { egui::Sense::hover() };
    let (rect, response) = ui.allocate_exact_size(size, sense);

    if ui.is_rect_visible(rect) {
        if enabled && (response.hovered() || response.is_pointer_button_down_on()) {
            let (fill, draw_rect) = theme::button_visual(&response, theme::BG_HOVER, rect);
            ui.painter().rect_filled(draw_rect, theme::RADIUS_DEFAULT, fill);
        }
        let color = if enabled {
            theme::TEXT_PRIMARY
        } else {
            theme::with_alpha(theme::TEXT_MUTED, 90)
        };
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            glyph,
            egui::FontId::proportional(16.0),
            color,
        );
    }

    response
}

/// Round avatar image, or initials on a dark disc when the image is missing
pub fn avatar(ui: &mut egui::Ui, texture: Option<&egui::TextureHandle>, initials: &str) {
    let size = egui::vec2(theme::AVATAR_SIZE, theme::AVATAR_SIZE);
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }

    match texture {
        Some(texture) => {
            egui::Image::from_texture(egui::load::SizedTexture::new(texture.id(), size))
                .uv(square_crop_uv(texture.size()))
                .corner_radius(theme::AVATAR_SIZE / 2.0)
                .paint_at(ui, rect);
        }
        None => {
            ui.painter()
                .circle_filled(rect.center(), theme::AVATAR_SIZE / 2.0, theme::BRAND_DARK);
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                initials,
                egui::FontId::proportional(theme::FONT_LABEL),
                theme::TEXT_ON_DARK,
            );
        }
    }
}

/// UV rect that crops the centered square out of a `[w, h]` image
pub fn square_crop_uv(size: [usize; 2]) -> egui::Rect {
    let (w, h) = (size[0].max(1) as f32, size[1].max(1) as f32);
    if w > h {
        let d = (1.0 - h / w) / 2.0;
        egui::Rect::from_min_max(egui::pos2(d, 0.0), egui::pos2(1.0 - d, 1.0))
    } else {
        let d = (1.0 - w / h) / 2.0;
        egui::Rect::from_min_max(egui::pos2(0.0, d), egui::pos2(1.0, 1.0 - d))
    }
}

/// Fallback (label, path hint) shown when a figure's image is unavailable
pub fn figure_fallback(figure: &Figure, assets: &AssetCache) -> (String, String) {
    (
        figure.fallback_text.clone(),
        format!("Place at {}", assets.resolve(&figure.src).display()),
    )
}

/// Chart image with click-to-preview, or fallback content when it can't load
pub fn figure(ui: &mut egui::Ui, figure: &Figure, assets: &mut AssetCache, lightbox: &mut Lightbox) {
    let width = ui.available_width();
    let aspect = if figure.aspect > 0.0 { figure.aspect } else { 16.0 / 9.0 };
    let size = egui::vec2(width, width / aspect);
    let texture = assets.texture(ui.ctx(), &figure.src);
    let sense = if texture.is_some() { egui::Sense::click() } else { egui::Sense::hover() };
    let (rect, response) = ui.allocate_exact_size(size, sense);

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        painter.rect_filled(rect, theme::RADIUS_DEFAULT, theme::BG_CARD);
        painter.rect_stroke(
            rect,
            theme::RADIUS_DEFAULT,
            egui::Stroke::new(theme::STROKE_DEFAULT, theme::BORDER_SUBTLE),
            egui::StrokeKind::Inside,
        );

        match &texture {
            Some(texture) => {
                let image_size = texture.size_vec2();
                let inner = rect.shrink(theme::SPACING_SM);
                let scale = (inner.width() / image_size.x).min(inner.height() / image_size.y);
                let image_rect = egui::Rect::from_center_size(rect.center(), image_size * scale);
                egui::Image::from_texture(egui::load::SizedTexture::new(texture.id(), image_rect.size()))
                    .paint_at(ui, image_rect);

                if response.hovered() {
                    let painter = ui.painter();
                    painter.rect_filled(rect, theme::RADIUS_DEFAULT, egui::Color32::from_black_alpha(25));
                    let hint = format!("{}  Click to preview", egui_phosphor::regular::ARROWS_OUT);
                    let pill = egui::Rect::from_center_size(rect.center(), egui::vec2(150.0, 32.0));
                    painter.rect_filled(pill, theme::RADIUS_DEFAULT, theme::with_alpha(egui::Color32::WHITE, 235));
                    painter.text(
                        pill.center(),
                        egui::Align2::CENTER_CENTER,
                        hint,
                        egui::FontId::proportional(theme::FONT_LABEL),
                        theme::BRAND_NAVY,
                    );
                }
            }
            None => {
                let (text, hint) = figure_fallback(figure, assets);
                let center = rect.center();
                painter.text(
                    center - egui::vec2(0.0, 22.0),
                    egui::Align2::CENTER_CENTER,
                    figure.fallback_icon.glyph(),
                    egui::FontId::proportional(36.0),
                    theme::TEXT_MUTED,
                );
                painter.text(
                    center + egui::vec2(0.0, 12.0),
                    egui::Align2::CENTER_CENTER,
                    text,
                    egui::FontId::proportional(theme::FONT_LABEL),
                    theme::TEXT_MUTED,
                );
                painter.text(
                    center + egui::vec2(0.0, 30.0),
                    egui::Align2::CENTER_CENTER,
                    hint,
                    egui::FontId::proportional(theme::FONT_CAPTION),
                    theme::with_alpha(theme::TEXT_MUTED, 180),
                );
            }
        }
    }

    if response.clicked() {
        lightbox.open(&figure.src, &figure.alt, assets);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn gantt() -> Figure {
        Figure {
            src: "charts/gantt.png".into(),
            alt: "Project Gantt Chart".into(),
            fallback_icon: Icon::Calendar,
            fallback_text: "Gantt Chart".into(),
            caption: "Figure 2".into(),
            aspect: 16.0 / 6.0,
        }
    }

    #[test]
    fn test_unreachable_figure_shows_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = egui::Context::default();
        let mut assets = AssetCache::new(dir.path().to_path_buf());
        let mut lightbox = Lightbox::default();
        let fig = gantt();

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| figure(ui, &fig, &mut assets, &mut lightbox));
        });

        assert!(assets.is_failed(&fig.src));
        let (text, hint) = figure_fallback(&fig, &assets);
        assert_eq!(text, "Gantt Chart");
        let expected = dir.path().join("charts/gantt.png");
        assert_eq!(hint, format!("Place at {}", expected.display()));
        assert!(!lightbox.open(&fig.src, &fig.alt, &assets));
    }

    #[test]
    fn test_square_crop_uv() {
        let wide = square_crop_uv([200, 100]);
        assert_eq!(wide, egui::Rect::from_min_max(egui::pos2(0.25, 0.0), egui::pos2(0.75, 1.0)));
        let square = square_crop_uv([64, 64]);
        assert_eq!(square, egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)));
    }

    #[test]
    fn test_fallback_hint_uses_asset_root() {
        let assets = AssetCache::new(PathBuf::from("assets"));
        let (_, hint) = figure_fallback(&gantt(), &assets);
        assert_eq!(hint, format!("Place at {}", PathBuf::from("assets/charts/gantt.png").display()));
    }
}
