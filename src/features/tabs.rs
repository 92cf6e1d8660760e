//! Tabbed panels

use crate::effects::Transient;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabPanel {
    /// Key the button targets; the panel id is `<key>-tab`
    pub key: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

impl TabPanel {
    pub fn panel_id(&self) -> String {
        format!("{}-tab", self.key)
    }
}

#[derive(Debug, Clone)]
pub struct Tabs {
    panels: Vec<TabPanel>,
    active: usize,
    lift: Transient,
    lift_duration: Duration,
}

impl Tabs {
    pub fn new(panels: Vec<TabPanel>, lift_duration: Duration) -> Self {
        Self {
            panels,
            active: 0,
            lift: Transient::new(),
            lift_duration,
        }
    }

    pub fn lift_duration(mut self, lift_duration: Duration) -> Self {
        self.lift_duration = lift_duration;
        self
    }

    pub fn panels(&self) -> &[TabPanel] {
        &self.panels
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn active_panel(&self) -> Option<&TabPanel> {
        self.panels.get(self.active)
    }

    /// Activate a tab; every other tab and panel becomes inactive
    pub fn select(&mut self, index: usize, now: Instant) {
        if index >= self.panels.len() {
            return;
        }
        self.active = index;
        self.lift.arm(now, self.lift_duration);
    }

    pub fn select_next(&mut self, now: Instant) {
        if !self.panels.is_empty() {
            self.select((self.active + 1) % self.panels.len(), now);
        }
    }

    pub fn select_prev(&mut self, now: Instant) {
        if !self.panels.is_empty() {
            let prev = self.active.checked_sub(1).unwrap_or(self.panels.len() - 1);
            self.select(prev, now);
        }
    }

    /// Whether a tab button is in its activation lift
    pub fn is_lifted(&self, index: usize, now: Instant) -> bool {
        index == self.active && self.lift.is_active(now)
    }
}

impl Default for Tabs {
    fn default() -> Self {
        Self::new(
            vec![
                TabPanel {
                    key: "overview",
                    title: "Overview",
                    body: "A single page of independent interactive pieces, each reacting to its own events.",
                },
                TabPanel {
                    key: "events",
                    title: "Events",
                    body: "Clicks, pointer movement, key presses, focus and blur, input and change, and form submission.",
                },
                TabPanel {
                    key: "validation",
                    title: "Validation",
                    body: "Eight field rules, live feedback while you type or leave a field, and a full check on submit.",
                },
            ],
            Duration::from_millis(200),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tab_active_by_default() {
        let tabs = Tabs::default();
        assert_eq!(tabs.active(), 0);
        assert_eq!(tabs.active_panel().map(|p| p.panel_id()), Some("overview-tab".to_string()));
    }

    #[test]
    fn select_switches_panel_and_lifts() {
        let now = Instant::now();
        let mut tabs = Tabs::default();
        tabs.select(2, now);

        assert_eq!(tabs.active(), 2);
        assert!(tabs.is_lifted(2, now));
        assert!(!tabs.is_lifted(0, now));
        assert!(!tabs.is_lifted(2, now + Duration::from_millis(200)));
    }

    #[test]
    fn next_and_prev_wrap() {
        let now = Instant::now();
        let mut tabs = Tabs::default();
        tabs.select_prev(now);
        assert_eq!(tabs.active(), 2);
        tabs.select_next(now);
        assert_eq!(tabs.active(), 0);
    }

    #[test]
    fn out_of_range_select_is_ignored() {
        let now = Instant::now();
        let mut tabs = Tabs::default();
        tabs.select(7, now);
        assert_eq!(tabs.active(), 0);
        assert!(!tabs.is_lifted(0, now));
    }
}
