//! Slide switcher: active index, transition direction, key bindings

use crate::ui::motion::Direction;
use eframe::egui;
use tracing::debug;

/// Navigation request from a key or button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Prev,
    Next,
    First,
    Last,
}

impl NavCommand {
    /// Up/Left go back, Down/Right go forward, Home/End jump to the ends
    pub fn from_key(key: egui::Key) -> Option<Self> {
        match key {
            egui::Key::ArrowUp | egui::Key::ArrowLeft => Some(NavCommand::Prev),
            egui::Key::ArrowDown | egui::Key::ArrowRight => Some(NavCommand::Next),
            egui::Key::Home => Some(NavCommand::First),
            egui::Key::End => Some(NavCommand::Last),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    active: usize,
    direction: Direction,
    count: usize,
}

impl Navigator {
    /// `initial` outside the deck falls back to the first slide
    pub fn new(count: usize, initial: usize) -> Self {
        Self {
            active: if initial < count { initial } else { 0 },
            direction: Direction::Forward,
            count,
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_first(&self) -> bool {
        self.active == 0
    }

    pub fn is_last(&self) -> bool {
        self.active + 1 >= self.count
    }

    /// "3 of 7"
    pub fn position_label(&self) -> String {
        format!("{} of {}", self.active + 1, self.count)
    }

    /// Move to `index`. Requests outside `[0, count)` are ignored and return
    /// false. Re-selecting the active slide counts as a (backward) change.
    pub fn go_to(&mut self, index: isize) -> bool {
        let Ok(index) = usize::try_from(index) else {
            return false;
        };
        if index >= self.count {
            return false;
        }
        self.direction = Direction::between(self.active, index);
        debug!(from = self.active, to = index, direction = ?self.direction, "Slide change");
        self.active = index;
        true
    }

    pub fn next(&mut self) -> bool {
        self.go_to(self.active as isize + 1)
    }

    pub fn prev(&mut self) -> bool {
        self.go_to(self.active as isize - 1)
    }

    pub fn first(&mut self) -> bool {
        self.go_to(0)
    }

    pub fn last(&mut self) -> bool {
        self.go_to(self.count as isize - 1)
    }

    pub fn apply(&mut self, command: NavCommand) -> bool {
        match command {
            NavCommand::Prev => self.prev(),
            NavCommand::Next => self.next(),
            NavCommand::First => self.first(),
            NavCommand::Last => self.last(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range_requests_move() {
        for i in 0..7 {
            let mut nav = Navigator::new(7, 3);
            assert!(nav.go_to(i));
            assert_eq!(nav.active(), i as usize);
        }
    }

    #[test]
    fn test_out_of_range_requests_are_ignored() {
        for i in [-5, -1, 7, 8, 100] {
            let mut nav = Navigator::new(7, 3);
            let before = nav.clone();
            assert!(!nav.go_to(i));
            assert_eq!(nav, before);
        }
    }

    #[test]
    fn test_direction_tracks_movement() {
        let mut nav = Navigator::new(7, 2);
        nav.go_to(5);
        assert_eq!(nav.direction(), Direction::Forward);
        nav.go_to(1);
        assert_eq!(nav.direction(), Direction::Backward);
        nav.go_to(1);
        assert_eq!(nav.direction(), Direction::Backward);
    }

    #[test]
    fn test_down_key_moves_forward_until_last() {
        let mut nav = Navigator::new(7, 2);
        let down = NavCommand::from_key(egui::Key::ArrowDown).unwrap();
        assert!(nav.apply(down));
        assert_eq!(nav.active(), 3);

        let mut nav = Navigator::new(7, 6);
        assert!(!nav.apply(down));
        assert_eq!(nav.active(), 6);
    }

    #[test]
    fn test_up_key_stops_at_first() {
        let mut nav = Navigator::new(7, 0);
        assert!(!nav.apply(NavCommand::from_key(egui::Key::ArrowUp).unwrap()));
        assert_eq!(nav.active(), 0);
        assert!(nav.is_first());
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(NavCommand::from_key(egui::Key::ArrowLeft), Some(NavCommand::Prev));
        assert_eq!(NavCommand::from_key(egui::Key::ArrowRight), Some(NavCommand::Next));
        assert_eq!(NavCommand::from_key(egui::Key::Home), Some(NavCommand::First));
        assert_eq!(NavCommand::from_key(egui::Key::End), Some(NavCommand::Last));
        assert_eq!(NavCommand::from_key(egui::Key::Space), None);
    }

    #[test]
    fn test_first_and_last() {
        let mut nav = Navigator::new(7, 3);
        nav.apply(NavCommand::Last);
        assert_eq!(nav.active(), 6);
        assert!(nav.is_last());
        nav.apply(NavCommand::First);
        assert_eq!(nav.active(), 0);
    }

    #[test]
    fn test_initial_out_of_range_starts_at_zero() {
        assert_eq!(Navigator::new(7, 9).active(), 0);
        assert_eq!(Navigator::new(7, 4).position_label(), "5 of 7");
    }
}
