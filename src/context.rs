//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use epitrello_core::session::{Session, Theme};

use crate::commands;
use crate::storage::BrowserStorage;

/// Top-level screens
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Login,
    Register,
    Boards,
    /// Remote board by id, or the local template board
    Board(Option<i64>),
}

pub type BrowserSession = Session<BrowserStorage>;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current screen - read
    pub page: ReadSignal<Page>,
    /// Current screen - write
    set_page: WriteSignal<Page>,
    /// Auth token and verified user, mirrored to localStorage
    pub session: RwSignal<BrowserSession>,
    pub theme: ReadSignal<Theme>,
    set_theme: WriteSignal<Theme>,
    /// Trigger to reload the board list
    pub reload_trigger: ReadSignal<u32>,
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        page: (ReadSignal<Page>, WriteSignal<Page>),
        session: RwSignal<BrowserSession>,
        theme: (ReadSignal<Theme>, WriteSignal<Theme>),
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            page: page.0,
            set_page: page.1,
            session,
            theme: theme.0,
            set_theme: theme.1,
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    pub fn navigate(&self, page: Page) {
        log::debug!("[APP] navigate to {:?}", page);
        self.set_page.set(page);
    }

    /// Token snapshot for a request
    pub fn token(&self) -> Option<String> {
        self.session.with_untracked(|s| s.token().map(str::to_string))
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(|s| s.is_authenticated())
    }

    pub fn display_email(&self) -> Option<String> {
        self.session.with(|s| s.display_email())
    }

    /// Clear the stored token and return to the login screen
    pub fn sign_out(&self) {
        self.session.update(|s| s.sign_out());
        self.set_page.set(Page::Login);
    }

    pub fn toggle_theme(&self) {
        let theme = self.theme.get_untracked().toggled();
        theme.save(&BrowserStorage, &commands::config().theme_key);
        self.set_theme.set(theme);
    }

    /// Trigger a reload of the board list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}
