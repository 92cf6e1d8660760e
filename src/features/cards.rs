//! Hover cards that reveal extra info under the pointer

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoverCard {
    pub title: &'static str,
    pub summary: &'static str,
    pub info: &'static str,
}

#[derive(Debug, Clone)]
pub struct HoverCards {
    cards: Vec<HoverCard>,
    hovered: Option<usize>,
}

impl HoverCards {
    pub fn new(cards: Vec<HoverCard>) -> Self {
        Self {
            cards,
            hovered: None,
        }
    }

    pub fn cards(&self) -> &[HoverCard] {
        &self.cards
    }

    /// Pointer entered a card, or left all of them with `None`
    pub fn hover(&mut self, index: Option<usize>) {
        self.hovered = index.filter(|&i| i < self.cards.len());
    }

    /// Info is visible and the card lifted only while hovered
    pub fn is_revealed(&self, index: usize) -> bool {
        self.hovered == Some(index)
    }

    pub fn hover_next(&mut self) {
        if self.cards.is_empty() {
            return;
        }
        self.hovered = Some(match self.hovered {
            Some(i) => (i + 1) % self.cards.len(),
            None => 0,
        });
    }

    pub fn hover_prev(&mut self) {
        if self.cards.is_empty() {
            return;
        }
        let last = self.cards.len() - 1;
        self.hovered = Some(match self.hovered {
            Some(0) | None => last,
            Some(i) => i - 1,
        });
    }
}

impl Default for HoverCards {
    fn default() -> Self {
        Self::new(vec![
            HoverCard {
                title: "Speed",
                summary: "Instant feedback",
                info: "Every interaction updates the screen on the next frame.",
            },
            HoverCard {
                title: "Focus",
                summary: "One thing at a time",
                info: "Each widget owns its own state and ignores the others.",
            },
            HoverCard {
                title: "Safety",
                summary: "Checked input",
                info: "The registration form explains every problem it finds.",
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_reveals_single_card() {
        let mut cards = HoverCards::default();
        assert!(!cards.is_revealed(0));

        cards.hover(Some(1));
        assert!(cards.is_revealed(1));
        assert!(!cards.is_revealed(0));

        cards.hover(None);
        assert!(!cards.is_revealed(1));
    }

    #[test]
    fn hover_out_of_range_clears() {
        let mut cards = HoverCards::default();
        cards.hover(Some(0));
        cards.hover(Some(10));
        assert!((0..3).all(|i| !cards.is_revealed(i)));
    }

    #[test]
    fn keyboard_hover_cycles() {
        let mut cards = HoverCards::default();
        cards.hover_next();
        assert!(cards.is_revealed(0));
        cards.hover_prev();
        assert!(cards.is_revealed(2));
        cards.hover_next();
        assert!(cards.is_revealed(0));
    }
}
