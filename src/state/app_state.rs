//! Application state definitions

use super::counters::{hero_counters, StatCounter};
use super::forms::ContactForm;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Hero section with animated stats
    #[default]
    Home,
    /// Contact / lead-capture form
    Contact,
}

impl View {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Contact => "Contact",
        }
    }
}

/// Main application state
pub struct AppState {
    pub current_view: View,
    pub contact_form: ContactForm,
    pub counters: Vec<StatCounter>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_view: View::default(),
            contact_form: ContactForm::new(),
            counters: hero_counters(),
        }
    }
}

impl AppState {
    /// Switch views; entering Home for the first time starts the stat
    /// counters, mirroring a scroll-into-view trigger
    pub fn navigate_to(&mut self, view: View) {
        self.current_view = view;
        if view == View::Home {
            self.start_counters();
        }
    }

    /// Start the hero counters (no-op for already-started ones)
    pub fn start_counters(&mut self) {
        for counter in &mut self.counters {
            counter.start();
        }
    }

    /// True while any counter animation is still running
    pub fn is_animating(&self) -> bool {
        self.counters.iter().any(StatCounter::is_animating)
    }
}
