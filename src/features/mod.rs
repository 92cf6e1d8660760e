//! Page micro-interactions
//!
//! Each feature is an explicit state struct owned by the [`App`](crate::ui::App).
//! None of them share state with each other.

mod cards;
mod counter;
mod faq;
mod registration;
mod tabs;
mod theme_toggle;
mod typing;

pub use cards::{HoverCard, HoverCards};
pub use counter::{CounterButton, CounterGame, ValueTone};
pub use faq::{Faq, FaqItem};
pub use registration::{FocusTarget, RegistrationForm};
pub use tabs::{TabPanel, Tabs};
pub use theme_toggle::ThemeToggle;
pub use typing::{is_command_chord, key_name, TypingStats};
