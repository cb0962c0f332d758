//! Full-window image preview overlay

use super::assets::AssetCache;
use crate::theme;
use eframe::egui;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxTarget {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Default)]
pub struct Lightbox {
    target: Option<LightboxTarget>,
}

impl Lightbox {
    /// Open the overlay for an already loaded image. Returns false (and stays
    /// closed) when the image failed to load or was never loaded.
    pub fn open(&mut self, src: &str, alt: &str, assets: &AssetCache) -> bool {
        if assets.cached(src).is_none() {
            return false;
        }
        debug!(asset = src, "Opening preview");
        self.target = Some(LightboxTarget {
            src: src.to_string(),
            alt: alt.to_string(),
        });
        true
    }

    pub fn close(&mut self) {
        self.target = None;
    }

    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    #[cfg(test)]
    pub fn target(&self) -> Option<&LightboxTarget> {
        self.target.as_ref()
    }

    /// Render the overlay. Clicking the backdrop closes it; clicking the image
    /// does not.
    pub fn show(&mut self, ctx: &egui::Context, assets: &AssetCache) {
        let Some(target) = self.target.clone() else {
            return;
        };
        let Some(texture) = assets.cached(&target.src) else {
            self.close();
            return;
        };
        let alt = target.alt;
        let texture_id = texture.id();
        let image_size = texture.size_vec2();

        let screen = ctx.screen_rect();
        let mut close = false;

        // Dim backdrop - blocks interaction with the deck
        egui::Area::new(egui::Id::new("lightbox_backdrop"))
            .fixed_pos(screen.min)
            .order(egui::Order::Middle)
            .interactable(true)
            .show(ctx, |ui| {
                let response = ui.allocate_response(screen.size(), egui::Sense::click());
                ui.painter()
                    .rect_filled(screen, 0.0, egui::Color32::from_black_alpha(220));
                if response.clicked() {
                    close = true;
                }
            });

        // Fit within 90% of the window, never upscale past 2x
        let bounds = screen.shrink2(screen.size() * 0.05);
        let scale = (bounds.width() / image_size.x)
            .min(bounds.height() / image_size.y)
            .min(2.0);
        let draw_size = image_size * scale;
        let image_rect = egui::Rect::from_center_size(screen.center(), draw_size);

        egui::Area::new(egui::Id::new("lightbox_image"))
            .fixed_pos(image_rect.min)
            .order(egui::Order::Foreground)
            .interactable(true)
            .show(ctx, |ui| {
                ui.add(
                    egui::Image::from_texture(egui::load::SizedTexture::new(texture_id, draw_size))
                        .sense(egui::Sense::click()),
                )
                .on_hover_text(&alt);
            });

        // Close button, top right
        let close_rect = egui::Rect::from_center_size(
            egui::pos2(screen.right() - 32.0, screen.top() + 32.0),
            egui::vec2(theme::ICON_BUTTON_SIZE, theme::ICON_BUTTON_SIZE),
        );
        egui::Area::new(egui::Id::new("lightbox_close"))
            .fixed_pos(close_rect.min)
            .order(egui::Order::Foreground)
            .interactable(true)
            .show(ctx, |ui| {
                let (rect, response) = ui.allocate_exact_size(close_rect.size(), egui::Sense::click());
                let fill = if response.hovered() {
                    egui::Color32::from_white_alpha(40)
                } else {
                    egui::Color32::from_white_alpha(15)
                };
                ui.painter().rect_filled(rect, theme::RADIUS_DEFAULT, fill);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    egui_phosphor::regular::X,
                    egui::FontId::proportional(18.0),
                    egui::Color32::WHITE,
                );
                if response.clicked() {
                    close = true;
                }
            });

        if close {
            debug!("Closing preview");
            self.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_refuses_failed_image() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = egui::Context::default();
        let mut assets = AssetCache::new(dir.path().to_path_buf());
        assert!(assets.texture(&ctx, "charts/wbs.png").is_none());

        let mut lightbox = Lightbox::default();
        assert!(!lightbox.open("charts/wbs.png", "WBS Tree Diagram", &assets));
        assert!(!lightbox.is_open());
    }

    #[test]
    fn test_refuses_unloaded_image() {
        let assets = AssetCache::new(PathBuf::from("/nowhere"));
        let mut lightbox = Lightbox::default();
        assert!(!lightbox.open("charts/wbs.png", "WBS", &assets));
    }

    #[test]
    fn test_open_and_close() {
        let dir = tempfile::tempdir().unwrap();
        image::RgbaImage::new(8, 8)
            .save(dir.path().join("gantt.png"))
            .unwrap();
        let ctx = egui::Context::default();
        let mut assets = AssetCache::new(dir.path().to_path_buf());
        assets.texture(&ctx, "gantt.png").unwrap();

        let mut lightbox = Lightbox::default();
        assert!(lightbox.open("gantt.png", "Project Gantt Chart", &assets));
        assert_eq!(lightbox.target().map(|t| t.alt.as_str()), Some("Project Gantt Chart"));

        // Renders headless without closing itself
        let _ = ctx.run(egui::RawInput::default(), |ctx| lightbox.show(ctx, &assets));
        assert!(lightbox.is_open());

        lightbox.close();
        assert!(!lightbox.is_open());
    }
}
