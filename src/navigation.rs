//! Sidebar navigation: a fixed menu of destinations and the currently shown
//! page.

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Conversion,
    Translate,
    ExpenseTracker,
    Extracurriculars,
    CulturalRecs,
}

impl Page {
    /// Menu order.
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::Conversion,
        Page::Translate,
        Page::ExpenseTracker,
        Page::Extracurriculars,
        Page::CulturalRecs,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Conversion => "conversion",
            Page::Translate => "translate",
            Page::ExpenseTracker => "expense-tracker",
            Page::Extracurriculars => "extracurriculars",
            Page::CulturalRecs => "cultural-recs",
        }
    }

    /// Label shown in the sidebar.
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Conversion => "Conversion Tool",
            Page::Translate => "Translator",
            Page::ExpenseTracker => "Expense Tracker",
            Page::Extracurriculars => "Extracurriculars",
            Page::CulturalRecs => "Cultural Recs",
        }
    }

    pub fn from_id(id: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|p| p.id() == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("unknown page: {0}")]
    UnknownPage(String),
}

/// Which page is visible and whether the sidebar is open.
#[derive(Debug, Clone)]
pub struct Navigator {
    current: Page,
    menu_open: bool,
}

impl Default for Navigator {
    fn default() -> Self {
        Self {
            current: Page::Home,
            menu_open: true,
        }
    }
}

impl Navigator {
    pub fn current(&self) -> Page {
        self.current
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn show(&mut self, page: Page) {
        if page != self.current {
            debug!(from = self.current.id(), to = page.id(), "navigate");
        }
        self.current = page;
    }

    /// Switches to the page with the given id.
    pub fn navigate_to(&mut self, page_id: &str) -> Result<Page, NavigationError> {
        let page =
            Page::from_id(page_id).ok_or_else(|| NavigationError::UnknownPage(page_id.to_string()))?;
        self.show(page);
        Ok(page)
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }
}
