//! Slide panels, one renderer per content kind

use super::assets::AssetCache;
use super::lightbox::Lightbox;
use crate::catalog::Catalog;
use crate::theme;
use crate::types::*;
use crate::ui::components::{self, reveal};
use crate::ui::counter::{CounterSet, CountUp};
use crate::ui::motion::Reveal;
use eframe::egui;
use std::time::Duration;

/// Everything a slide panel may read or mount while rendering
pub(crate) struct SlideCtx<'a> {
    pub catalog: &'a Catalog,
    pub assets: &'a mut AssetCache,
    pub lightbox: &'a mut Lightbox,
    pub counters: &'a mut CounterSet,
    pub runtime: &'a tokio::runtime::Handle,
    pub counter_duration: Duration,
    pub reveal: Reveal,
    /// Drawn while leaving: counters show their frozen text and nothing mounts
    pub exiting: bool,
}

/// Latest reveal delay used by any panel; animation settles after this
pub(crate) const MAX_REVEAL_DELAY: f32 = 0.6;

pub(crate) fn render(ui: &mut egui::Ui, kind: SlideKind, cx: &mut SlideCtx<'_>) {
    match kind {
        SlideKind::Overview => overview(ui, cx),
        SlideKind::ProblemSolution => problem_solution(ui, cx),
        SlideKind::Scope => scope(ui, cx),
        SlideKind::Wbs => work_breakdown(ui, cx),
        SlideKind::Schedule => schedule(ui, cx),
        SlideKind::Team => team(ui, cx),
        SlideKind::Risk => risk(ui, cx),
    }
}

// ============================================================================
// OVERVIEW
// ============================================================================

fn overview(ui: &mut egui::Ui, cx: &mut SlideCtx<'_>) {
    let overview = &cx.catalog.overview;

    ui.vertical_centered(|ui| {
        components::badge(
            ui,
            &overview.badge,
            theme::BRAND_CREAM_DARK,
            theme::BRAND_NAVY,
            Some(theme::with_alpha(theme::BRAND_MUTED, 77)),
        );
        ui.add_space(theme::SPACING_MD);
        ui.label(
            egui::RichText::new(&overview.headline)
                .size(theme::FONT_DISPLAY)
                .strong()
                .color(theme::TEXT_PRIMARY),
        );
        ui.add_space(theme::SPACING_SM);
        ui.set_max_width(520.0);
        ui.label(
            egui::RichText::new(&overview.tagline)
                .size(theme::FONT_BODY)
                .color(theme::TEXT_MUTED),
        );
    });

    ui.add_space(theme::SPACING_XL);
    ui.separator();
    ui.add_space(theme::SPACING_XL);

    let columns = components::responsive_columns(ui, 4, 2);
    let stats = &overview.stats;
    components::grid(ui, stats.len(), columns, |ui, i| {
        let stat = &stats[i];
        reveal(ui, &cx.reveal, 0.1 + i as f32 * 0.05, |ui| {
            theme::panel_frame(theme::BRAND_CREAM, theme::BRAND_CREAM).show(ui, |ui| {
                ui.set_width(ui.available_width());
                components::icon_text(
                    ui,
                    stat.icon,
                    egui::RichText::new(stat.label.to_uppercase()).color(theme::TEXT_MUTED),
                    theme::FONT_CAPTION,
                    theme::TEXT_MUTED,
                );
                let value = match &stat.value {
                    StatValue::Counter { from, to, prefix, suffix } => {
                        let key = format!("stat-{i}");
                        let duration = cx.counter_duration;
                        let count = || CountUp {
                            from: *from,
                            to: *to,
                            duration,
                            prefix: prefix.clone(),
                            suffix: suffix.clone(),
                        };
                        if cx.exiting {
                            cx.counters.text(&key).unwrap_or_else(|| count().final_text())
                        } else {
                            cx.counters.mount(&key, count, cx.runtime, ui.ctx())
                        }
                    }
                    StatValue::Text { text } => text.clone(),
                };
                ui.label(
                    egui::RichText::new(value)
                        .size(theme::FONT_STAT)
                        .strong()
                        .color(theme::TEXT_PRIMARY),
                );
                if let Some(note) = &stat.note {
                    ui.label(egui::RichText::new(note).size(theme::FONT_CAPTION).color(theme::TEXT_MUTED));
                }
            });
        });
    });

    ui.add_space(theme::SPACING_MD);
    reveal(ui, &cx.reveal, 0.3, |ui| {
        theme::dark_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            components::icon_text(
                ui,
                Icon::Target,
                egui::RichText::new(&overview.objective_title).strong().color(theme::TEXT_ON_DARK),
                theme::FONT_BODY,
                theme::TEXT_ON_DARK,
            );
            ui.add_space(theme::SPACING_SM);
            ui.add(
                egui::Label::new(
                    egui::RichText::new(&overview.objective)
                        .size(theme::FONT_LABEL)
                        .color(theme::BRAND_CREAM_DARK),
                )
                .wrap(),
            );
        });
    });
}

// ============================================================================
// PROBLEM & SOLUTION
// ============================================================================

/// Glyph bullet followed by wrapped text
fn bullet(ui: &mut egui::Ui, glyph: &str, glyph_color: egui::Color32, text: &str, text_color: egui::Color32) {
    ui.horizontal_top(|ui| {
        ui.label(egui::RichText::new(glyph).size(theme::FONT_BODY).color(glyph_color));
        ui.add(egui::Label::new(egui::RichText::new(text).size(theme::FONT_LABEL).color(text_color)).wrap());
    });
}

/// Panel title with a tinted icon tile
fn panel_title(ui: &mut egui::Ui, icon: Icon, tile: egui::Color32, fg: egui::Color32, title: &str, color: egui::Color32) {
    ui.horizontal(|ui| {
        components::icon_tile(ui, icon, tile, fg, 18.0);
        ui.label(egui::RichText::new(title).size(theme::FONT_HEADING).strong().color(color));
    });
    ui.add_space(theme::SPACING_MD);
}

fn problem_solution(ui: &mut egui::Ui, cx: &mut SlideCtx<'_>) {
    let content = &cx.catalog.problem_solution;
    components::heading(ui, &content.heading);

    let columns = components::responsive_columns(ui, 2, 1);
    components::grid(ui, 2, columns, |ui, side| {
        let (items, delay, item_delay) = if side == 0 {
            (&content.problems, 0.1, 0.2)
        } else {
            (&content.solutions, 0.2, 0.3)
        };
        reveal(ui, &cx.reveal, delay, |ui| {
            let (fill, border) = if side == 0 {
                (theme::ROSE_50, theme::ROSE_200)
            } else {
                (theme::TEAL_50, theme::TEAL_200)
            };
            theme::panel_frame(fill, border).show(ui, |ui| {
                ui.set_width(ui.available_width());
                if side == 0 {
                    panel_title(ui, Icon::AlertTriangle, theme::ROSE_100, theme::ROSE_600, "Current Problems", theme::ROSE_800);
                } else {
                    panel_title(ui, Icon::Lightbulb, theme::TEAL_100, theme::TEAL_600, "Our Solution", theme::TEAL_800);
                }
                for (i, item) in items.iter().enumerate() {
                    reveal(ui, &cx.reveal, item_delay + i as f32 * 0.05, |ui| {
                        if side == 0 {
                            bullet(ui, Icon::X.glyph(), theme::ROSE_500, item, theme::ROSE_700);
                        } else {
                            bullet(ui, Icon::Check.glyph(), theme::TEAL_500, item, theme::TEAL_700);
                        }
                    });
                }
            });
        });
    });

    ui.add_space(theme::SPACING_SM);
    reveal(ui, &cx.reveal, 0.4, |ui| {
        theme::panel_frame(theme::BRAND_CREAM, theme::with_alpha(theme::BRAND_MUTED, 77)).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                components::icon_text(
                    ui,
                    Icon::TrendingUp,
                    egui::RichText::new("Expected Impact").strong().color(theme::BRAND_NAVY),
                    theme::FONT_BODY,
                    theme::TEAL_600,
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.spacing_mut().item_spacing.x = theme::SPACING_XXL;
                    for metric in content.impact.iter().rev() {
                        ui.vertical(|ui| {
                            ui.label(egui::RichText::new(&metric.value).size(theme::FONT_HEADING).strong().color(theme::TEAL_600));
                            ui.label(egui::RichText::new(&metric.label).size(theme::FONT_CAPTION).color(theme::TEXT_MUTED));
                        });
                    }
                });
            });
        });
    });
}

// ============================================================================
// SCOPE
// ============================================================================

fn scope_list(
    ui: &mut egui::Ui,
    reveal_state: &Reveal,
    items: &[ScopeItem],
    start_delay: f32,
    border: egui::Color32,
    icon_color: egui::Color32,
    title_color: egui::Color32,
) {
    for (i, item) in items.iter().enumerate() {
        reveal(ui, reveal_state, start_delay + i as f32 * 0.05, |ui| {
            theme::tile_frame(border).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal_top(|ui| {
                    ui.label(egui::RichText::new(item.icon.glyph()).size(theme::FONT_HEADING).color(icon_color));
                    ui.vertical(|ui| {
                        ui.label(egui::RichText::new(&item.title).size(theme::FONT_LABEL).strong().color(title_color));
                        ui.add(
                            egui::Label::new(egui::RichText::new(&item.desc).size(theme::FONT_SMALL).color(theme::TEXT_MUTED))
                                .wrap(),
                        );
                    });
                });
            });
        });
        ui.add_space(theme::SPACING_SM);
    }
}

fn scope(ui: &mut egui::Ui, cx: &mut SlideCtx<'_>) {
    let content = &cx.catalog.scope;
    components::heading(ui, &content.heading);

    let columns = components::responsive_columns(ui, 2, 1);
    components::grid(ui, 2, columns, |ui, side| {
        let delay = if side == 0 { 0.1 } else { 0.2 };
        reveal(ui, &cx.reveal, delay, |ui| {
            if side == 0 {
                theme::panel_frame(theme::TEAL_50, theme::TEAL_200).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    panel_title(ui, Icon::Check, theme::TEAL_500, theme::TEXT_ON_DARK, "In Scope", theme::TEAL_800);
                    scope_list(ui, &cx.reveal, &content.in_scope, 0.15, theme::TEAL_100, theme::TEAL_600, theme::TEXT_PRIMARY);
                });
            } else {
                theme::panel_frame(theme::BRAND_CREAM, theme::with_alpha(theme::BRAND_MUTED, 77)).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    panel_title(ui, Icon::X, theme::BRAND_MUTED, theme::TEXT_ON_DARK, "Out of Scope", theme::BRAND_NAVY);
                    scope_list(
                        ui,
                        &cx.reveal,
                        &content.out_of_scope,
                        0.25,
                        theme::with_alpha(theme::BRAND_MUTED, 50),
                        theme::TEXT_MUTED,
                        theme::BRAND_NAVY,
                    );
                    ui.label(
                        egui::RichText::new(&content.footnote)
                            .size(theme::FONT_CAPTION)
                            .italics()
                            .color(theme::TEXT_MUTED),
                    );
                });
            }
        });
    });
}

// ============================================================================
// WORK BREAKDOWN
// ============================================================================

/// Figure inside a cream panel with an italic caption
fn figure_panel(ui: &mut egui::Ui, figure: &Figure, assets: &mut AssetCache, lightbox: &mut Lightbox) {
    theme::panel_frame(theme::BRAND_CREAM, theme::with_alpha(theme::BRAND_MUTED, 77)).show(ui, |ui| {
        ui.set_width(ui.available_width());
        components::figure(ui, figure, assets, lightbox);
        ui.add_space(theme::SPACING_SM);
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(&figure.caption)
                    .size(theme::FONT_CAPTION)
                    .italics()
                    .color(theme::TEXT_MUTED),
            );
        });
    });
}

fn work_breakdown(ui: &mut egui::Ui, cx: &mut SlideCtx<'_>) {
    let content = &cx.catalog.wbs;
    components::heading(ui, &content.heading);

    let columns = components::responsive_columns(ui, 3, 1);
    components::grid(ui, content.phases.len(), columns, |ui, i| {
        let phase = &content.phases[i];
        reveal(ui, &cx.reveal, 0.1 + i as f32 * 0.05, |ui| {
            theme::tile_frame(theme::with_alpha(theme::BRAND_MUTED, 50)).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    components::badge(ui, &phase.phase, theme::BRAND_DARK, theme::TEXT_ON_DARK, None);
                    ui.label(egui::RichText::new(&phase.name).size(theme::FONT_LABEL).strong().color(theme::TEXT_PRIMARY));
                });
                ui.add(
                    egui::Label::new(egui::RichText::new(&phase.tasks).size(theme::FONT_SMALL).color(theme::TEXT_MUTED))
                        .wrap(),
                );
            });
        });
    });

    ui.add_space(theme::SPACING_MD);
    reveal(ui, &cx.reveal, 0.4, |ui| {
        figure_panel(ui, &content.figure, cx.assets, cx.lightbox);
    });
}

// ============================================================================
// SCHEDULE
// ============================================================================

fn schedule(ui: &mut egui::Ui, cx: &mut SlideCtx<'_>) {
    let content = &cx.catalog.schedule;
    components::heading(ui, &content.heading);

    let columns = if ui.available_width() >= 900.0 {
        6
    } else {
        components::responsive_columns(ui, 3, 2)
    };
    let time = ui.input(|i| i.time);
    let mut pulsing = false;

    components::grid(ui, content.milestones.len(), columns, |ui, i| {
        let item = &content.milestones[i];
        let (fill, border, date_color, label_color) = theme::milestone_colors(item.status);
        let hover_id = ui.id().with(("milestone_hover", i));
        let hover = ui
            .ctx()
            .animate_bool(hover_id, ui.ctx().data(|d| d.get_temp::<bool>(hover_id)).unwrap_or(false));

        reveal(ui, &cx.reveal, 0.1 + i as f32 * 0.05, |ui| {
            let stroke_width = if item.status == MilestoneStatus::Current {
                theme::STROKE_THICK
            } else {
                theme::STROKE_DEFAULT
            };
            let response = egui::Frame::new()
                .fill(fill)
                .stroke(egui::Stroke::new(stroke_width, border))
                .corner_radius(theme::RADIUS_DEFAULT)
                .inner_margin(egui::Margin::same(theme::SPACING_LG as i8))
                .shadow(egui::epaint::Shadow {
                    offset: [0, (6.0 * hover) as i8],
                    blur: (14.0 * hover) as u8,
                    spread: 0,
                    color: egui::Color32::from_black_alpha((30.0 * hover) as u8),
                })
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.vertical_centered(|ui| {
                        ui.label(egui::RichText::new(&item.date).size(theme::FONT_SMALL).strong().color(date_color));
                        ui.add(
                            egui::Label::new(egui::RichText::new(&item.milestone).size(theme::FONT_SMALL).color(label_color))
                                .wrap(),
                        );
                        match item.status {
                            MilestoneStatus::Complete => {
                                ui.label(egui::RichText::new(Icon::Check.glyph()).color(theme::TEAL_500));
                            }
                            MilestoneStatus::Current => {
                                let (rect, _) = ui.allocate_exact_size(egui::vec2(8.0, 8.0), egui::Sense::hover());
                                let alpha = 0.55 + 0.45 * (time * 3.0).sin().abs() as f32;
                                ui.painter().circle_filled(
                                    rect.center(),
                                    4.0,
                                    theme::with_alpha(theme::BRAND_NAVY, (alpha * 255.0) as u8),
                                );
                                pulsing = true;
                            }
                            MilestoneStatus::Upcoming => {}
                        }
                    });
                })
                .response;
            ui.ctx().data_mut(|d| d.insert_temp(hover_id, response.hovered()));
        });
    });

    if pulsing {
        ui.ctx().request_repaint();
    }

    ui.add_space(theme::SPACING_MD);
    reveal(ui, &cx.reveal, 0.4, |ui| {
        figure_panel(ui, &content.figure, cx.assets, cx.lightbox);
    });
}

// ============================================================================
// TEAM
// ============================================================================

fn team(ui: &mut egui::Ui, cx: &mut SlideCtx<'_>) {
    let content = &cx.catalog.team;
    components::heading(ui, &content.heading);

    let columns = components::responsive_columns(ui, 2, 1);
    components::grid(ui, content.members.len(), columns, |ui, i| {
        let member = &content.members[i];
        let texture = cx.assets.texture(ui.ctx(), &member.avatar);
        reveal(ui, &cx.reveal, 0.1 + i as f32 * 0.08, |ui| {
            theme::tile_frame(theme::with_alpha(theme::BRAND_MUTED, 50)).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal_top(|ui| {
                    components::avatar(ui, texture.as_ref(), &member.initials);
                    ui.add_space(theme::SPACING_SM);
                    ui.vertical(|ui| {
                        ui.label(egui::RichText::new(&member.name).size(theme::FONT_BODY).strong().color(theme::TEXT_PRIMARY));
                        components::badge(ui, &member.role, theme::BRAND_CREAM_DARK, theme::BRAND_NAVY, None);
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(&member.responsibilities)
                                    .size(theme::FONT_SMALL)
                                    .color(theme::TEXT_MUTED),
                            )
                            .wrap(),
                        );
                    });
                });
            });
        });
    });

    ui.add_space(theme::SPACING_SM);
    reveal(ui, &cx.reveal, 0.5, |ui| {
        theme::panel_frame(theme::BRAND_CREAM, theme::with_alpha(theme::BRAND_MUTED, 77)).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new("Key Stakeholders").size(theme::FONT_LABEL).strong().color(theme::BRAND_NAVY));
            ui.add_space(theme::SPACING_SM);
            let stakeholders = &content.stakeholders;
            let columns = components::responsive_columns(ui, 4, 2);
            components::grid(ui, stakeholders.len(), columns, |ui, i| {
                theme::tile_frame(theme::with_alpha(theme::BRAND_MUTED, 50)).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.vertical_centered(|ui| {
                        ui.label(egui::RichText::new(&stakeholders[i].name).size(theme::FONT_LABEL).strong().color(theme::BRAND_NAVY));
                        ui.label(egui::RichText::new(&stakeholders[i].role).size(theme::FONT_CAPTION).color(theme::TEXT_MUTED));
                    });
                });
            });
        });
    });
}

// ============================================================================
// RISK
// ============================================================================

fn risk(ui: &mut egui::Ui, cx: &mut SlideCtx<'_>) {
    let content = &cx.catalog.risk;
    components::heading(ui, &content.heading);

    for (i, item) in content.risks.iter().enumerate() {
        let (fill, border, text) = theme::risk_colors(item.tone);
        reveal(ui, &cx.reveal, 0.1 + i as f32 * 0.1, |ui| {
            theme::panel_frame(fill, border).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal_top(|ui| {
                    ui.label(egui::RichText::new(Icon::AlertCircle.glyph()).size(theme::FONT_HEADING).color(text));
                    ui.vertical(|ui| {
                        ui.horizontal_wrapped(|ui| {
                            ui.label(egui::RichText::new(&item.risk).size(theme::FONT_BODY).strong().color(text));
                            let probability = format!("P: {}", item.probability.label());
                            let impact = format!("I: {}", item.impact.label());
                            components::badge(ui, &probability, egui::Color32::TRANSPARENT, text, Some(text));
                            components::badge(ui, &impact, egui::Color32::TRANSPARENT, text, Some(text));
                        });
                        ui.horizontal_wrapped(|ui| {
                            ui.spacing_mut().item_spacing.x = theme::SPACING_SM;
                            ui.label(egui::RichText::new("Mitigation:").size(theme::FONT_LABEL).strong().color(text));
                            ui.add(
                                egui::Label::new(egui::RichText::new(&item.mitigation).size(theme::FONT_LABEL).color(text))
                                    .wrap(),
                            );
                        });
                    });
                });
            });
        });
        ui.add_space(theme::SPACING_SM);
    }

    reveal(ui, &cx.reveal, 0.4, |ui| {
        theme::dark_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            components::icon_text(
                ui,
                Icon::ShieldAlert,
                egui::RichText::new("Risk Response Strategy").strong().color(theme::TEXT_ON_DARK),
                theme::FONT_BODY,
                theme::TEXT_ON_DARK,
            );
            ui.add_space(theme::SPACING_SM);
            let strategies = &content.strategies;
            let columns = components::responsive_columns(ui, 2, 1);
            components::grid(ui, strategies.len(), columns, |ui, i| {
                egui::Frame::new()
                    .fill(theme::with_alpha(theme::BRAND_NAVY, 128))
                    .corner_radius(theme::RADIUS_SMALL)
                    .inner_margin(egui::Margin::same(theme::SPACING_LG as i8))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.label(egui::RichText::new(&strategies[i].title).size(theme::FONT_LABEL).strong().color(theme::BRAND_CREAM));
                        ui.label(egui::RichText::new(&strategies[i].detail).size(theme::FONT_CAPTION).color(theme::BRAND_CREAM_DARK));
                    });
            });
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::motion::{Direction, Transition};

    fn render_all(ctx: &egui::Context, now: f64) -> (CounterSet, AssetCache) {
        let dir = tempfile::tempdir().unwrap();
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let catalog = Catalog::builtin();
        let mut assets = AssetCache::new(dir.path().to_path_buf());
        let mut lightbox = Lightbox::default();
        let mut counters = CounterSet::default();
        let transition = Transition::new(Direction::Forward, 0.0, true);

        for slide in &catalog.slides {
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    let mut cx = SlideCtx {
                        catalog: &catalog,
                        assets: &mut assets,
                        lightbox: &mut lightbox,
                        counters: &mut counters,
                        runtime: runtime.handle(),
                        counter_duration: Duration::ZERO,
                        reveal: Reveal::new(&transition, now),
                        exiting: false,
                    };
                    render(ui, slide.kind, &mut cx);
                });
            });
        }
        (counters, assets)
    }

    #[test]
    fn test_every_slide_renders_headless() {
        let ctx = egui::Context::default();
        let (counters, assets) = render_all(&ctx, 10.0);
        // Budget and duration counters from the overview
        assert_eq!(counters.len(), 2);
        // No assets on disk: both figures and every avatar fall back
        assert!(assets.is_failed("charts/wbs.png"));
        assert!(assets.is_failed("charts/gantt.png"));
        assert!(assets.is_failed("avatars/kevin.jpeg"));
    }

    #[test]
    fn test_renders_mid_animation() {
        let ctx = egui::Context::default();
        let _ = render_all(&ctx, 0.15);
    }

    #[test]
    fn test_leaving_overview_mounts_no_counters() {
        let ctx = egui::Context::default();
        let dir = tempfile::tempdir().unwrap();
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let catalog = Catalog::builtin();
        let mut assets = AssetCache::new(dir.path().to_path_buf());
        let mut lightbox = Lightbox::default();
        let mut counters = CounterSet::default();

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let mut cx = SlideCtx {
                    catalog: &catalog,
                    assets: &mut assets,
                    lightbox: &mut lightbox,
                    counters: &mut counters,
                    runtime: runtime.handle(),
                    counter_duration: Duration::from_secs(2),
                    reveal: Reveal::settled(),
                    exiting: true,
                };
                render(ui, SlideKind::Overview, &mut cx);
            });
        });
        assert!(counters.is_empty());
    }
}
