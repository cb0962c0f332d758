//! Deck chrome: navigation rail, mobile header and menu, content card, progress dots

use super::navigation::NavCommand;
use super::slides::{self, SlideCtx};
use super::App;
use crate::constants::DESKTOP_BREAKPOINT;
use crate::theme;
use crate::ui::components;
use crate::ui::motion::Reveal;
use eframe::egui;
use egui_extras::{Size, StripBuilder};

const RAIL_ROW_HEIGHT: f32 = 56.0;
const PROGRESS_STRIP_HEIGHT: f32 = 32.0;
const PROGRESS_GAP: f32 = 6.0;

/// Desktop shows the timeline rail beside the card; mobile swaps it for a
/// header bar with a collapsible menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Desktop,
    Mobile,
}

impl LayoutMode {
    pub fn for_width(width: f32) -> Self {
        if width >= DESKTOP_BREAKPOINT {
            LayoutMode::Desktop
        } else {
            LayoutMode::Mobile
        }
    }
}

/// Request raised by a control while the frame is being built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DeckAction {
    GoTo(usize),
    Nav(NavCommand),
    ToggleFullscreen,
    ToggleMenu,
}

impl App {
    // ========================================================================
    // DESKTOP RAIL
    // ========================================================================

    pub(crate) fn render_rail(&self, ctx: &egui::Context, action: &mut Option<DeckAction>) {
        egui::SidePanel::left("nav_rail")
            .exact_width(theme::RAIL_WIDTH)
            .resizable(false)
            .show_separator_line(false)
            .frame(theme::rail_frame())
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new(&self.catalog.title)
                        .size(theme::FONT_LABEL)
                        .strong()
                        .color(theme::TEXT_PRIMARY),
                );
                ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
                    ui.add_space(theme::SPACING_MD);
                    keyboard_hint(ui);
                    ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                        self.render_timeline(ui, action);
                    });
                });
            });
    }

    fn render_timeline(&self, ui: &mut egui::Ui, action: &mut Option<DeckAction>) {
        let count = self.catalog.slides.len();
        let active = self.nav.active();
        let total = RAIL_ROW_HEIGHT * count as f32;
        ui.add_space(((ui.available_height() - total) / 2.0).max(0.0));

        // Connector goes under the nodes; its shape is filled in once the
        // node centres are known
        let track_idx = ui.painter().add(egui::Shape::Noop);
        let progress_idx = ui.painter().add(egui::Shape::Noop);
        let mut centers = Vec::with_capacity(count);

        for (i, slide) in self.catalog.slides.iter().enumerate() {
            let (rect, response) = ui.allocate_exact_size(
                egui::vec2(ui.available_width(), RAIL_ROW_HEIGHT),
                egui::Sense::click(),
            );
            let response = response.on_hover_cursor(egui::CursorIcon::PointingHand);
            let shift = ui.ctx().animate_bool(response.id, response.hovered()) * 4.0;
            let center = egui::pos2(rect.left() + theme::RAIL_NODE_SIZE / 2.0, rect.center().y);
            centers.push(center);

            if ui.is_rect_visible(rect) {
                let (fill, stroke, glyph_color, title_color) = if i == active {
                    (theme::BRAND_DARK, egui::Stroke::NONE, theme::TEXT_ON_DARK, theme::TEXT_PRIMARY)
                } else if i < active {
                    (theme::BRAND_NAVY, egui::Stroke::NONE, theme::TEXT_ON_DARK, theme::TEXT_SECONDARY)
                } else {
                    (
                        theme::BG_CARD,
                        egui::Stroke::new(theme::STROKE_THICK, theme::BRAND_CREAM_DARK),
                        theme::TEXT_MUTED,
                        theme::TEXT_MUTED,
                    )
                };
                let radius = if i == active {
                    theme::RAIL_NODE_SIZE / 2.0
                } else {
                    theme::RAIL_NODE_SIZE / 2.0 - 4.0
                };

                let painter = ui.painter();
                let node = center + egui::vec2(shift, 0.0);
                painter.circle(node, radius, fill, stroke);
                painter.text(
                    node,
                    egui::Align2::CENTER_CENTER,
                    slide.icon.glyph(),
                    egui::FontId::proportional(18.0),
                    glyph_color,
                );

                let text_x = rect.left() + theme::RAIL_NODE_SIZE + theme::SPACING_LG + shift;
                painter.text(
                    egui::pos2(text_x, center.y - 2.0),
                    egui::Align2::LEFT_BOTTOM,
                    format!("{:02}", i + 1),
                    egui::FontId::proportional(theme::FONT_CAPTION),
                    theme::TEXT_MUTED,
                );
                let title_size = if i == active { theme::FONT_LABEL } else { theme::FONT_SMALL };
                painter.text(
                    egui::pos2(text_x, center.y),
                    egui::Align2::LEFT_TOP,
                    &slide.title,
                    egui::FontId::proportional(title_size),
                    title_color,
                );
            }

            if response.clicked() {
                *action = Some(DeckAction::GoTo(i));
            }
        }

        if let (Some(first), Some(last)) = (centers.first(), centers.last()) {
            let painter = ui.painter();
            painter.set(
                track_idx,
                egui::Shape::line_segment(
                    [*first, *last],
                    egui::Stroke::new(theme::STROKE_THICK, theme::BRAND_CREAM_DARK),
                ),
            );
            if let Some(current) = centers.get(active) {
                painter.set(
                    progress_idx,
                    egui::Shape::line_segment(
                        [*first, *current],
                        egui::Stroke::new(theme::STROKE_THICK, theme::BRAND_NAVY),
                    ),
                );
            }
        }
    }

    // ========================================================================
    // MOBILE HEADER
    // ========================================================================

    pub(crate) fn render_mobile_header(&self, ctx: &egui::Context, action: &mut Option<DeckAction>) {
        egui::TopBottomPanel::top("mobile_header")
            .show_separator_line(false)
            .frame(theme::rail_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    components::icon_tile(
                        ui,
                        crate::types::Icon::Layers,
                        theme::BRAND_DARK,
                        theme::TEXT_ON_DARK,
                        16.0,
                    );
                    ui.label(
                        egui::RichText::new(&self.catalog.title)
                            .size(theme::FONT_BODY)
                            .strong()
                            .color(theme::TEXT_PRIMARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let menu_glyph = if self.menu_open {
                            egui_phosphor::regular::X
                        } else {
                            egui_phosphor::regular::LIST
                        };
                        if components::icon_button(ui, menu_glyph, true)
                            .on_hover_text("Slides")
                            .clicked()
                        {
                            *action = Some(DeckAction::ToggleMenu);
                        }
                        if components::icon_button(ui, self.fullscreen.glyph(), true)
                            .on_hover_text(self.fullscreen.tooltip())
                            .clicked()
                        {
                            *action = Some(DeckAction::ToggleFullscreen);
                        }
                    });
                });

                let open = ui.ctx().animate_bool(egui::Id::new("mobile_menu"), self.menu_open);
                if open > 0.0 {
                    ui.add_space(theme::SPACING_SM);
                    ui.scope(|ui| {
                        ui.multiply_opacity(open);
                        ui.horizontal_wrapped(|ui| {
                            for (i, slide) in self.catalog.slides.iter().enumerate() {
                                let is_active = i == self.nav.active();
                                let text = egui::RichText::new(format!("{}  {}", slide.icon.glyph(), slide.title))
                                    .size(theme::FONT_SMALL)
                                    .color(if is_active { theme::TEXT_ON_DARK } else { theme::TEXT_SECONDARY });
                                let button = egui::Button::new(text)
                                    .fill(if is_active { theme::BRAND_DARK } else { theme::BG_CARD })
                                    .corner_radius(theme::RADIUS_DEFAULT);
                                if ui.add(button).clicked() && self.menu_open {
                                    *action = Some(DeckAction::GoTo(i));
                                }
                            }
                        });
                    });
                }
            });
    }

    // ========================================================================
    // CONTENT CARD
    // ========================================================================

    pub(crate) fn render_content(
        &mut self,
        ctx: &egui::Context,
        mode: LayoutMode,
        now: f64,
        action: &mut Option<DeckAction>,
    ) {
        let margin = match mode {
            LayoutMode::Desktop => theme::SPACING_XXL as i8,
            LayoutMode::Mobile => theme::SPACING_MD as i8,
        };
        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::same(margin)),
            )
            .show(ctx, |ui| {
                let full = ui.max_rect();
                let width = full.width().min(theme::CONTENT_MAX_WIDTH);
                let rect = egui::Rect::from_center_size(full.center(), egui::vec2(width, full.height()));

                ui.scope_builder(egui::UiBuilder::new().max_rect(rect), |ui| {
                    StripBuilder::new(ui)
                        .size(Size::remainder())
                        .size(Size::exact(PROGRESS_STRIP_HEIGHT))
                        .vertical(|mut strip| {
                            strip.cell(|ui| {
                                theme::card_frame().show(ui, |ui| {
                                    ui.set_min_size(ui.available_size());
                                    self.render_card_header(ui, mode, action);
                                    ui.separator();
                                    self.render_slide_body(ui, now);
                                });
                            });
                            strip.cell(|ui| self.render_progress(ui, action));
                        });
                });
            });
    }

    fn render_card_header(&self, ui: &mut egui::Ui, mode: LayoutMode, action: &mut Option<DeckAction>) {
        let Some(slide) = self.catalog.slides.get(self.nav.active()) else {
            return;
        };
        ui.horizontal(|ui| {
            ui.set_height(theme::HEADER_HEIGHT);
            components::icon_tile(ui, slide.icon, theme::BRAND_DARK, theme::TEXT_ON_DARK, 18.0);
            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new(&slide.title)
                        .size(theme::FONT_HEADING)
                        .strong()
                        .color(theme::TEXT_PRIMARY),
                );
                ui.label(
                    egui::RichText::new(self.nav.position_label())
                        .size(theme::FONT_CAPTION)
                        .color(theme::TEXT_MUTED),
                );
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if components::icon_button(ui, egui_phosphor::regular::CARET_DOWN, !self.nav.is_last())
                    .on_hover_text("Next slide")
                    .clicked()
                {
                    *action = Some(DeckAction::Nav(NavCommand::Next));
                }
                if components::icon_button(ui, egui_phosphor::regular::CARET_UP, !self.nav.is_first())
                    .on_hover_text("Previous slide")
                    .clicked()
                {
                    *action = Some(DeckAction::Nav(NavCommand::Prev));
                }
                if mode == LayoutMode::Desktop {
                    ui.add_space(theme::SPACING_MD);
                    if components::icon_button(ui, self.fullscreen.glyph(), true)
                        .on_hover_text(self.fullscreen.tooltip())
                        .clicked()
                    {
                        *action = Some(DeckAction::ToggleFullscreen);
                    }
                }
            });
        });
    }

    /// Draws the leaving slide until its exit finishes, then the active one
    fn render_slide_body(&mut self, ui: &mut egui::Ui, now: f64) {
        let exiting = self.transition.exiting(now);
        let index = exiting.unwrap_or_else(|| self.nav.active());
        let Some(kind) = self.catalog.slides.get(index).map(|s| s.kind) else {
            return;
        };
        let (offset, opacity, reveal) = match exiting {
            Some(_) => (
                self.transition.exit_offset_y(now),
                self.transition.exit_opacity(now),
                Reveal::settled(),
            ),
            None => (
                self.transition.offset_y(now),
                self.transition.opacity(now),
                Reveal::new(&self.transition, now),
            ),
        };
        let counter_duration = self.settings.counter_duration();

        egui::ScrollArea::vertical()
            .id_salt(("slide_body", index))
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.multiply_opacity(opacity);
                if exiting.is_some() {
                    ui.disable();
                }
                let rect = ui.max_rect().translate(egui::vec2(0.0, offset));
                ui.scope_builder(egui::UiBuilder::new().max_rect(rect), |ui| {
                    let counters = if exiting.is_some() {
                        &mut self.leaving_counters
                    } else {
                        &mut self.counters
                    };
                    let mut cx = SlideCtx {
                        catalog: &self.catalog,
                        assets: &mut self.assets,
                        lightbox: &mut self.lightbox,
                        counters,
                        runtime: self.runtime.handle(),
                        counter_duration,
                        reveal,
                        exiting: exiting.is_some(),
                    };
                    slides::render(ui, kind, &mut cx);
                });
            });
    }

    // ========================================================================
    // PROGRESS DOTS
    // ========================================================================

    fn render_progress(&self, ui: &mut egui::Ui, action: &mut Option<DeckAction>) {
        let active = self.nav.active();
        let widths: Vec<f32> = (0..self.nav.count())
            .map(|i| {
                let target = if i == active {
                    theme::PROGRESS_DOT_ACTIVE
                } else {
                    theme::PROGRESS_DOT
                };
                ui.ctx()
                    .animate_value_with_time(ui.id().with(("progress_width", i)), target, 0.2)
            })
            .collect();
        let total = widths.iter().sum::<f32>() + PROGRESS_GAP * widths.len().saturating_sub(1) as f32;

        let (strip, _) = ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());
        let pill = egui::Rect::from_center_size(
            strip.center(),
            egui::vec2(total + theme::SPACING_XL, theme::PROGRESS_DOT + theme::SPACING_LG),
        );
        ui.painter()
            .rect_filled(pill, pill.height() / 2.0, theme::with_alpha(theme::BG_CARD, 200));

        let mut x = pill.left() + theme::SPACING_MD;
        for (i, width) in widths.iter().enumerate() {
            let dot = egui::Rect::from_min_size(
                egui::pos2(x, pill.center().y - theme::PROGRESS_DOT / 2.0),
                egui::vec2(*width, theme::PROGRESS_DOT),
            );
            let response = ui.interact(
                dot.expand(3.0),
                ui.id().with(("progress_dot", i)),
                egui::Sense::click(),
            );
            let color = if i == active {
                theme::BRAND_DARK
            } else if response.hovered() {
                theme::BRAND_NAVY
            } else {
                theme::BRAND_CREAM_DARK
            };
            ui.painter().rect_filled(dot, theme::PROGRESS_DOT / 2.0, color);

            if let Some(slide) = self.catalog.slides.get(i) {
                if response.on_hover_text(&slide.title).clicked() {
                    *action = Some(DeckAction::GoTo(i));
                }
            }
            x += width + PROGRESS_GAP;
        }
    }
}

fn keyboard_hint(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = theme::SPACING_SM;
        for glyph in [egui_phosphor::regular::ARROW_UP, egui_phosphor::regular::ARROW_DOWN] {
            egui::Frame::new()
                .fill(theme::BG_CARD)
                .stroke(egui::Stroke::new(theme::STROKE_DEFAULT, theme::BORDER_DEFAULT))
                .corner_radius(theme::RADIUS_SMALL)
                .inner_margin(egui::Margin::symmetric(6, 2))
                .show(ui, |ui| {
                    ui.label(egui::RichText::new(glyph).size(theme::FONT_CAPTION).color(theme::TEXT_MUTED));
                });
        }
        ui.label(egui::RichText::new("navigate").size(theme::FONT_CAPTION).color(theme::TEXT_MUTED));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_breakpoint() {
        assert_eq!(LayoutMode::for_width(1440.0), LayoutMode::Desktop);
        assert_eq!(LayoutMode::for_width(1024.0), LayoutMode::Desktop);
        assert_eq!(LayoutMode::for_width(1023.0), LayoutMode::Mobile);
        assert_eq!(LayoutMode::for_width(390.0), LayoutMode::Mobile);
    }
}
