//! Application state (Model in TEA pattern)

use std::time::{Duration, Instant};

use vibeparse_core::GithubTarget;

use crate::config::Settings;
use crate::form::GenerationForm;
use crate::overlay::PointerRegistry;
use crate::player::PlayerPage;
use crate::router::Route;

/// How long a toast stays on screen
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Current screen
#[derive(Debug)]
pub enum Page {
    Index(Box<GenerationForm>),
    Player(PlayerPage),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

/// Short-lived status line message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub text: String,
    pub kind: ToastKind,
    pub expires_at: Instant,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,
    pub route: Route,
    pub page: Page,
    pub settings: Settings,
    /// Backend base URL, shown in the header
    pub api_base_url: String,
    /// Pointer listeners of open overlays
    pub pointers: PointerRegistry,
    pub toast: Option<Toast>,
    /// Repository of the last submitted form, carried to the player header
    pub last_source: Option<GithubTarget>,
    pub last_tick: Instant,
}

impl AppState {
    /// State on the generation form; call `handler::navigate` to start
    /// the route's requests
    pub fn new(settings: Settings, api_base_url: impl Into<String>) -> Self {
        let page = Page::Index(Box::new(GenerationForm::new(&settings.form)));
        Self {
            phase: AppPhase::Running,
            route: Route::Index,
            page,
            settings,
            api_base_url: api_base_url.into(),
            pointers: PointerRegistry::new(),
            toast: None,
            last_source: None,
            last_tick: Instant::now(),
        }
    }

    /// Replace the current page with a fresh one for `route`
    ///
    /// Dropping the old page releases any overlay listeners it held.
    pub fn enter_route(&mut self, route: Route) {
        self.page = match &route {
            Route::Index => Page::Index(Box::new(GenerationForm::new(&self.settings.form))),
            Route::Player { script_id } => {
                let mut page = PlayerPage::new(script_id.clone());
                page.source = self.last_source.clone();
                Page::Player(page)
            }
        };
        self.route = route;
    }

    pub fn form(&self) -> Option<&GenerationForm> {
        match &self.page {
            Page::Index(form) => Some(form.as_ref()),
            Page::Player(_) => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut GenerationForm> {
        match &mut self.page {
            Page::Index(form) => Some(form.as_mut()),
            Page::Player(_) => None,
        }
    }

    pub fn player(&self) -> Option<&PlayerPage> {
        match &self.page {
            Page::Player(page) => Some(page),
            Page::Index(_) => None,
        }
    }

    pub fn player_mut(&mut self) -> Option<&mut PlayerPage> {
        match &mut self.page {
            Page::Player(page) => Some(page),
            Page::Index(_) => None,
        }
    }

    pub fn show_toast(&mut self, text: impl Into<String>, kind: ToastKind) {
        self.toast = Some(Toast {
            text: text.into(),
            kind,
            expires_at: Instant::now() + TOAST_DURATION,
        });
    }

    /// Drop the toast once it has expired
    pub fn expire_toast(&mut self, now: Instant) {
        if self.toast.as_ref().is_some_and(|t| now >= t.expires_at) {
            self.toast = None;
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
