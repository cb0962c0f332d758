//! Fullscreen toggle mirrored from the window's reported state

use crate::constants::FULLSCREEN_CONFIRM_SECS;
use eframe::egui;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Fullscreen {
    active: bool,
    /// Requested state and when it was requested, until the window agrees
    pending: Option<(bool, f64)>,
}

impl Fullscreen {
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Flip the flag and return the viewport command that requests it
    pub fn toggle(&mut self, now: f64) -> egui::ViewportCommand {
        self.active = !self.active;
        self.pending = Some((self.active, now));
        debug!(fullscreen = self.active, "Fullscreen toggled");
        egui::ViewportCommand::Fullscreen(self.active)
    }

    /// Leave fullscreen if active
    pub fn exit(&mut self, now: f64) -> Option<egui::ViewportCommand> {
        self.active.then(|| self.toggle(now))
    }

    /// Adopt the state reported by the window, e.g. when the window system
    /// leaves fullscreen on its own. `None` (unknown) keeps the current flag.
    /// While a request is unconfirmed, disagreeing reports are stale and are
    /// ignored for up to `FULLSCREEN_CONFIRM_SECS`.
    pub fn sync(&mut self, reported: Option<bool>, now: f64) {
        if let Some((wanted, since)) = self.pending {
            if reported == Some(wanted) || now - since > FULLSCREEN_CONFIRM_SECS {
                self.pending = None;
            } else {
                return;
            }
        }
        if let Some(reported) = reported {
            if reported != self.active {
                debug!(fullscreen = reported, "Fullscreen changed externally");
                self.active = reported;
            }
        }
    }

    pub fn glyph(&self) -> &'static str {
        if self.active {
            egui_phosphor::regular::CORNERS_IN
        } else {
            egui_phosphor::regular::CORNERS_OUT
        }
    }

    pub fn tooltip(&self) -> &'static str {
        if self.active {
            "Exit fullscreen"
        } else {
            "Enter fullscreen"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_enters_and_leaves() {
        let mut fs = Fullscreen::default();
        assert_eq!(fs.toggle(0.0), egui::ViewportCommand::Fullscreen(true));
        assert!(fs.is_active());
        assert_eq!(fs.toggle(0.0), egui::ViewportCommand::Fullscreen(false));
        assert!(!fs.is_active());
    }

    #[test]
    fn test_external_exit_is_reflected() {
        let mut fs = Fullscreen::default();
        fs.toggle(0.0);
        fs.sync(Some(true), 0.1);
        fs.sync(Some(false), 5.0);
        assert!(!fs.is_active());
        assert_eq!(fs.tooltip(), "Enter fullscreen");
    }

    #[test]
    fn test_unknown_report_keeps_state() {
        let mut fs = Fullscreen::default();
        fs.toggle(0.0);
        fs.sync(None, 0.1);
        assert!(fs.is_active());
    }

    #[test]
    fn test_stale_report_ignored_until_confirmed() {
        let mut fs = Fullscreen::default();
        assert_eq!(fs.toggle(0.0), egui::ViewportCommand::Fullscreen(true));
        // The window has not switched yet
        fs.sync(Some(false), 0.02);
        assert!(fs.is_active());
        // A second press in that frame leaves instead of re-entering
        assert_eq!(fs.toggle(0.03), egui::ViewportCommand::Fullscreen(false));
    }

    #[test]
    fn test_unconfirmed_request_times_out() {
        let mut fs = Fullscreen::default();
        fs.toggle(0.0);
        fs.sync(Some(false), 0.5);
        assert!(fs.is_active());
        fs.sync(Some(false), FULLSCREEN_CONFIRM_SECS + 0.5);
        assert!(!fs.is_active());
    }

    #[test]
    fn test_exit_only_when_active() {
        let mut fs = Fullscreen::default();
        assert!(fs.exit(0.0).is_none());
        fs.toggle(0.0);
        assert_eq!(fs.exit(0.0), Some(egui::ViewportCommand::Fullscreen(false)));
        assert!(!fs.is_active());
    }
}
