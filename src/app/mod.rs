//! App module - deck state, key handling and the per-frame UI

pub mod assets;
pub mod fullscreen;
pub mod lightbox;
pub mod navigation;
mod slides;
mod views;

use crate::catalog::Catalog;
use crate::settings::Settings;
use crate::theme;
use crate::ui::counter::CounterSet;
use crate::ui::motion::{Reveal, Transition};
use assets::AssetCache;
use eframe::egui;
use fullscreen::Fullscreen;
use lightbox::Lightbox;
use navigation::{NavCommand, Navigator};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};
use views::{DeckAction, LayoutMode};

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) catalog: Arc<Catalog>,
    pub(crate) nav: Navigator,
    pub(crate) transition: Transition,
    pub(crate) fullscreen: Fullscreen,
    pub(crate) menu_open: bool,
    // Images and overlays
    pub(crate) assets: AssetCache,
    pub(crate) lightbox: Lightbox,
    // Counter animations run on this runtime
    pub(crate) counters: CounterSet,
    /// Frozen counters of the slide playing its exit
    pub(crate) leaving_counters: CounterSet,
    pub(crate) runtime: tokio::runtime::Runtime,
    // Settings
    pub(crate) settings: Settings,
    pub(crate) data_dir: PathBuf,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    /// Start time of the opening transition, taken from the first frame
    pub(crate) awaiting_first_frame: bool,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        catalog: Arc<Catalog>,
        settings: Settings,
        data_dir: PathBuf,
    ) -> std::io::Result<Self> {
        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // Apply theme from theme.rs
        theme::apply_visuals(&cc.egui_ctx);

        let app = Self::with_state(catalog, settings, data_dir)?;
        if app.settings.start_fullscreen {
            cc.egui_ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(true));
        }
        Ok(app)
    }

    /// Build the deck state without touching any window
    pub(crate) fn with_state(catalog: Arc<Catalog>, settings: Settings, data_dir: PathBuf) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("deck-anim")
            .enable_time()
            .build()?;

        let initial = settings.initial_slide(catalog.slide_count());
        let asset_dir = settings.asset_dir_or_default();
        info!(asset_dir = %asset_dir.display(), slides = catalog.slide_count(), initial, "Deck ready");

        Ok(Self {
            nav: Navigator::new(catalog.slide_count(), initial),
            transition: Transition::new(Default::default(), 0.0, !settings.reduce_motion),
            fullscreen: Fullscreen::default(),
            menu_open: false,
            assets: AssetCache::new(asset_dir),
            lightbox: Lightbox::default(),
            counters: CounterSet::default(),
            leaving_counters: CounterSet::default(),
            runtime,
            catalog,
            settings,
            data_dir,
            window_pos: None,
            window_size: None,
            needs_center: false,
            awaiting_first_frame: true,
        })
    }

    /// Switch to `index`. Out-of-range requests are ignored.
    pub(crate) fn change_slide(&mut self, index: isize, now: f64) -> bool {
        let previous = self.nav.active();
        if !self.nav.go_to(index) {
            debug!(index, "Ignoring out-of-range slide request");
            return false;
        }
        self.slide_changed(previous, now);
        true
    }

    pub(crate) fn navigate(&mut self, command: NavCommand, now: f64) -> bool {
        let previous = self.nav.active();
        let moved = self.nav.apply(command);
        if moved {
            self.slide_changed(previous, now);
        }
        moved
    }

    /// Moving to a different slide unmounts its counters, plays the old
    /// slide out and the new one in
    fn slide_changed(&mut self, previous: usize, now: f64) {
        if self.nav.active() != previous {
            self.leaving_counters = std::mem::take(&mut self.counters);
            self.leaving_counters.freeze();
            self.transition =
                Transition::new(self.nav.direction(), now, !self.settings.reduce_motion).with_exit(previous);
        }
    }

    fn apply_action(&mut self, ctx: &egui::Context, action: DeckAction, now: f64) {
        match action {
            DeckAction::GoTo(index) => {
                self.change_slide(index as isize, now);
                self.menu_open = false;
            }
            DeckAction::Nav(command) => {
                self.navigate(command, now);
            }
            DeckAction::ToggleFullscreen => ctx.send_viewport_cmd(self.fullscreen.toggle(now)),
            DeckAction::ToggleMenu => self.menu_open = !self.menu_open,
        }
    }

    /// Keyboard: arrows and Home/End move between slides unless the preview
    /// is open, F11 toggles fullscreen, Escape closes the preview or leaves
    /// fullscreen
    fn handle_keys(&mut self, ctx: &egui::Context, now: f64) {
        const NAV_KEYS: [egui::Key; 6] = [
            egui::Key::ArrowUp,
            egui::Key::ArrowLeft,
            egui::Key::ArrowDown,
            egui::Key::ArrowRight,
            egui::Key::Home,
            egui::Key::End,
        ];

        let (escape, f11, command) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Escape),
                i.key_pressed(egui::Key::F11),
                NAV_KEYS
                    .into_iter()
                    .filter(|k| i.key_pressed(*k))
                    .find_map(NavCommand::from_key),
            )
        });

        if escape {
            if self.lightbox.is_open() {
                self.lightbox.close();
            } else if let Some(cmd) = self.fullscreen.exit(now) {
                ctx.send_viewport_cmd(cmd);
            }
        }
        if f11 {
            ctx.send_viewport_cmd(self.fullscreen.toggle(now));
        }
        if let Some(command) = command {
            if !self.lightbox.is_open() {
                self.navigate(command, now);
            }
        }
    }

    /// Build one frame of the deck
    pub(crate) fn ui(&mut self, ctx: &egui::Context) {
        let now = ctx.input(|i| i.time);
        if self.awaiting_first_frame {
            self.awaiting_first_frame = false;
            self.transition = Transition::new(self.nav.direction(), now, !self.settings.reduce_motion);
        }

        if self.transition.exiting(now).is_none() && !self.leaving_counters.is_empty() {
            self.leaving_counters.clear();
        }

        self.fullscreen.sync(ctx.input(|i| i.viewport().fullscreen), now);
        self.handle_keys(ctx, now);

        let mode = LayoutMode::for_width(ctx.screen_rect().width());
        if mode == LayoutMode::Desktop {
            self.menu_open = false;
        }

        let mut action = None;
        match mode {
            LayoutMode::Desktop => self.render_rail(ctx, &mut action),
            LayoutMode::Mobile => self.render_mobile_header(ctx, &mut action),
        }
        self.render_content(ctx, mode, now, &mut action);
        self.lightbox.show(ctx, &self.assets);

        if let Some(action) = action {
            self.apply_action(ctx, action, now);
        }

        let reveal = Reveal::new(&self.transition, now);
        if self.transition.is_running(now) || !reveal.is_settled(slides::MAX_REVEAL_DELAY) {
            ctx.request_repaint();
        }
    }

    pub(crate) fn save_settings(&mut self) {
        if let Some(pos) = self.window_pos {
            self.settings.window_x = Some(pos.x);
            self.settings.window_y = Some(pos.y);
        }
        if let Some(size) = self.window_size {
            self.settings.window_w = Some(size.x);
            self.settings.window_h = Some(size.y);
        }
        self.settings.last_slide = self.nav.active();
        self.settings.save(&self.data_dir);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: egui::Key) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }
    }

    fn input(width: f32, events: Vec<egui::Event>) -> egui::RawInput {
        egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(width, 800.0))),
            events,
            ..Default::default()
        }
    }

    struct Harness {
        app: App,
        ctx: egui::Context,
        dir: tempfile::TempDir,
    }

    impl Harness {
        fn new() -> Self {
            let dir = tempfile::tempdir().unwrap();
            let settings = Settings {
                asset_dir: Some(dir.path().to_string_lossy().to_string()),
                reduce_motion: true,
                ..Default::default()
            };
            let app = App::with_state(Arc::new(Catalog::builtin()), settings, dir.path().to_path_buf()).unwrap();
            Self {
                app,
                ctx: egui::Context::default(),
                dir,
            }
        }

        fn frame(&mut self, width: f32, events: Vec<egui::Event>) {
            let app = &mut self.app;
            let _ = self.ctx.run(input(width, events), |ctx| app.ui(ctx));
        }
    }

    #[test]
    fn test_down_arrow_advances() {
        let mut h = Harness::new();
        h.app.change_slide(2, 0.0);
        h.frame(1280.0, vec![key(egui::Key::ArrowDown)]);
        assert_eq!(h.app.nav.active(), 3);
    }

    #[test]
    fn test_down_arrow_on_last_slide_is_noop() {
        let mut h = Harness::new();
        h.app.change_slide(6, 0.0);
        h.frame(1280.0, vec![key(egui::Key::ArrowDown)]);
        assert_eq!(h.app.nav.active(), 6);
    }

    #[test]
    fn test_home_and_end() {
        let mut h = Harness::new();
        h.frame(1280.0, vec![key(egui::Key::End)]);
        assert_eq!(h.app.nav.active(), 6);
        h.frame(1280.0, vec![key(egui::Key::Home)]);
        assert_eq!(h.app.nav.active(), 0);
    }

    #[test]
    fn test_out_of_range_change_is_ignored() {
        let mut h = Harness::new();
        assert!(!h.app.change_slide(7, 0.0));
        assert!(!h.app.change_slide(-1, 0.0));
        assert_eq!(h.app.nav.active(), 0);
    }

    #[test]
    fn test_leaving_overview_unmounts_counters() {
        let mut h = Harness::new();
        h.frame(1280.0, vec![]);
        assert_eq!(h.app.counters.len(), 2);

        // Re-selecting the active slide keeps them
        assert!(h.app.change_slide(0, 1.0));
        assert_eq!(h.app.counters.len(), 2);

        assert!(h.app.change_slide(1, 1.0));
        assert!(h.app.counters.is_empty());
    }

    #[test]
    fn test_leaving_slide_plays_out_before_entry() {
        let mut h = Harness::new();
        h.app.settings.reduce_motion = false;
        h.app.change_slide(2, 0.0);
        assert!(h.app.change_slide(3, 5.0));

        let t = h.app.transition;
        assert_eq!(t.exiting(5.0), Some(2));
        assert_eq!(t.direction, crate::ui::motion::Direction::Forward);
        assert!(t.exit_offset_y(5.1) < 0.0);
        assert!(t.entry_started_at() > 5.0);
        assert_eq!(t.exiting(t.entry_started_at() + 0.01), None);
    }

    #[test]
    fn test_leaving_counters_freeze_then_drop() {
        let mut h = Harness::new();
        h.app.settings.reduce_motion = false;
        h.frame(1280.0, vec![]);
        assert_eq!(h.app.counters.len(), 2);

        // Far in the future so the exit is already over on the next frame
        assert!(h.app.change_slide(1, -100.0));
        assert!(h.app.counters.is_empty());
        assert_eq!(h.app.leaving_counters.len(), 2);

        h.frame(1280.0, vec![]);
        assert!(h.app.leaving_counters.is_empty());
    }

    #[test]
    fn test_fullscreen_keys() {
        let mut h = Harness::new();
        h.frame(1280.0, vec![key(egui::Key::F11)]);
        assert!(h.app.fullscreen.is_active());
        h.frame(1280.0, vec![key(egui::Key::Escape)]);
        assert!(!h.app.fullscreen.is_active());
    }

    #[test]
    fn test_open_preview_swallows_navigation() {
        let mut h = Harness::new();
        let charts = h.dir.path().join("charts");
        std::fs::create_dir_all(&charts).unwrap();
        image::RgbaImage::new(16, 7).save(charts.join("wbs.png")).unwrap();

        h.app.change_slide(3, 0.0);
        h.frame(1280.0, vec![]);
        assert!(h.app.lightbox.open("charts/wbs.png", "WBS Tree Diagram", &h.app.assets));

        h.frame(1280.0, vec![key(egui::Key::ArrowDown)]);
        assert_eq!(h.app.nav.active(), 3);
        assert!(h.app.lightbox.is_open());

        // Escape closes the preview before it would leave fullscreen
        h.app.fullscreen.toggle(0.0);
        h.frame(1280.0, vec![key(egui::Key::Escape)]);
        assert!(!h.app.lightbox.is_open());
        assert!(h.app.fullscreen.is_active());
    }

    #[test]
    fn test_every_slide_renders_in_both_layouts() {
        let mut h = Harness::new();
        for width in [1280.0, 390.0] {
            for i in 0..7 {
                h.app.change_slide(i, 0.0);
                h.frame(width, vec![]);
                assert_eq!(h.app.nav.active(), i as usize);
            }
        }
    }

    #[test]
    fn test_menu_closes_on_desktop() {
        let mut h = Harness::new();
        h.app.menu_open = true;
        h.frame(390.0, vec![]);
        assert!(h.app.menu_open);
        h.frame(1280.0, vec![]);
        assert!(!h.app.menu_open);
    }

    #[test]
    fn test_save_remembers_slide() {
        let mut h = Harness::new();
        h.app.change_slide(4, 0.0);
        h.app.save_settings();
        let saved = Settings::load(h.dir.path());
        assert_eq!(saved.last_slide, 4);
    }
}
