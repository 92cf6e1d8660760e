//! Collapsible FAQ (accordion)
//!
//! At most one item is open. Opening an item closes every other one.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone)]
pub struct Faq {
    items: Vec<FaqItem>,
    open: Option<usize>,
    hovered: Option<usize>,
    cursor: usize,
}

impl Faq {
    pub fn new(items: Vec<FaqItem>) -> Self {
        Self {
            items,
            open: None,
            hovered: None,
            cursor: 0,
        }
    }

    pub fn items(&self) -> &[FaqItem] {
        &self.items
    }

    pub fn open_item(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Toggle an item; any other open item closes
    pub fn activate(&mut self, index: usize) {
        if index >= self.items.len() {
            return;
        }
        self.open = if self.is_open(index) { None } else { Some(index) };
        self.cursor = index;
    }

    pub fn activate_cursor(&mut self) {
        self.activate(self.cursor);
    }

    pub fn hover(&mut self, index: Option<usize>) {
        self.hovered = index.filter(|&i| i < self.items.len());
    }

    /// Hovered questions stay highlighted only while open once the pointer leaves
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.hovered == Some(index) || self.is_open(index)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn cursor_down(&mut self) {
        if !self.items.is_empty() {
            self.cursor = (self.cursor + 1) % self.items.len();
            self.hovered = Some(self.cursor);
        }
    }

    pub fn cursor_up(&mut self) {
        if !self.items.is_empty() {
            self.cursor = self.cursor.checked_sub(1).unwrap_or(self.items.len() - 1);
            self.hovered = Some(self.cursor);
        }
    }
}

impl Default for Faq {
    fn default() -> Self {
        Self::new(vec![
            FaqItem {
                question: "What does this page demonstrate?",
                answer: "Event handling: clicks, hovers, key presses, focus changes and form submission, each wired to a small piece of state.",
            },
            FaqItem {
                question: "Is anything saved between sessions?",
                answer: "No. Every counter, answer and form value lives only as long as the session does.",
            },
            FaqItem {
                question: "How is the registration form checked?",
                answer: "Each field has its own rule. Most fields are checked when you leave them, the password on every keystroke, and everything at once when you submit.",
            },
            FaqItem {
                question: "Can I switch between light and dark themes?",
                answer: "Yes. Use the theme button in the top right corner or press Ctrl+T from anywhere.",
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_collapsed() {
        let faq = Faq::default();
        assert_eq!(faq.open_item(), None);
        assert_eq!(faq.items().len(), 4);
    }

    #[test]
    fn opening_closes_others() {
        let mut faq = Faq::default();
        faq.activate(0);
        assert!(faq.is_open(0));

        faq.activate(2);
        assert!(faq.is_open(2));
        assert!(!faq.is_open(0));
    }

    #[test]
    fn activating_open_item_closes_it() {
        let mut faq = Faq::default();
        faq.activate(1);
        faq.activate(1);
        assert_eq!(faq.open_item(), None);
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut faq = Faq::default();
        faq.activate(1);
        faq.activate(99);
        assert_eq!(faq.open_item(), Some(1));
    }

    #[test]
    fn highlight_persists_only_when_open() {
        let mut faq = Faq::default();
        faq.hover(Some(0));
        assert!(faq.is_highlighted(0));

        faq.hover(None);
        assert!(!faq.is_highlighted(0));

        faq.activate(0);
        faq.hover(Some(1));
        assert!(faq.is_highlighted(0));
        assert!(faq.is_highlighted(1));
    }

    #[test]
    fn cursor_wraps() {
        let mut faq = Faq::default();
        faq.cursor_up();
        assert_eq!(faq.cursor(), 3);
        faq.cursor_down();
        assert_eq!(faq.cursor(), 0);

        faq.cursor_down();
        faq.activate_cursor();
        assert!(faq.is_open(1));
    }
}
