//! Application Context
//!
//! Session and router handles provided via Leptos Context API.

use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::User;
use crate::routes::Route;
use crate::session::{begin_session, end_session, restore_session, LocalTokenStore, SessionState, TokenStore};
use crate::store::Toasts;

// ========================
// Router
// ========================

/// Current route plus History API navigation
#[derive(Clone, Copy)]
pub struct Router {
    /// Route for the current URL - read
    pub route: ReadSignal<Route>,
    /// Route for the current URL - write
    set_route: WriteSignal<Route>,
}

fn location_route() -> Route {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .map(|path| Route::parse(&path))
        .unwrap_or(Route::Home)
}

impl Router {
    /// Reads the initial URL and follows back / forward buttons.
    pub fn new() -> Self {
        let (route, set_route) = signal(location_route());
        let _ = window_event_listener(leptos::ev::popstate, move |_| {
            let next = location_route();
            log!("[ROUTER] popstate -> {}", next.path());
            set_route.set(next);
        });
        Self { route, set_route }
    }

    pub fn navigate(&self, route: Route) {
        if let Some(window) = web_sys::window() {
            if let Ok(history) = window.history() {
                let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&route.path()));
            }
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
        log!("[ROUTER] navigate -> {}", route.path());
        self.set_route.set(route);
    }

    /// Navigate without adding a history entry
    pub fn replace(&self, route: Route) {
        if let Some(window) = web_sys::window() {
            if let Ok(history) = window.history() {
                let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&route.path()));
            }
        }
        self.set_route.set(route);
    }

    pub fn back(&self) {
        if let Some(history) = web_sys::window().and_then(|window| window.history().ok()) {
            let _ = history.back();
        }
    }
}

pub fn use_router() -> Router {
    expect_context::<Router>()
}

// ========================
// Session
// ========================

/// Signed-in user and the API client bound to their token
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// Session lifecycle - read
    pub state: ReadSignal<SessionState>,
    /// Session lifecycle - write
    set_state: WriteSignal<SessionState>,
    config: StoredValue<AppConfig>,
    router: Router,
    toasts: Toasts,
}

impl SessionContext {
    pub fn new(config: AppConfig, router: Router, toasts: Toasts) -> Self {
        let (state, set_state) = signal(SessionState::Initializing);
        Self {
            state,
            set_state,
            config: StoredValue::new(config),
            router,
            toasts,
        }
    }

    /// Client carrying the stored bearer token, if any
    pub fn api(&self) -> ApiClient {
        self.config.with_value(|config| ApiClient::new(config, LocalTokenStore.token()))
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    /// Absolute URL for an uploaded asset path
    pub fn asset_url(&self, path: &str) -> String {
        self.config.with_value(|config| config.asset_url(path))
    }

    pub fn user(&self) -> Option<User> {
        self.state.with(|state| state.user().cloned())
    }

    pub fn is_initializing(&self) -> bool {
        self.state.with(SessionState::is_initializing)
    }

    /// Validate the stored token once at startup.
    pub fn restore(&self) {
        let ctx = *self;
        spawn_local(async move {
            let api = ctx.api();
            let state = restore_session(&LocalTokenStore, &api).await;
            ctx.set_state.set(state);
        });
    }

    pub fn login(&self, token: &str, user: User) {
        let (state, route) = begin_session(&LocalTokenStore, token, user);
        log!("[SESSION] Signed in, landing on {}", route.path());
        self.set_state.set(state);
        self.router.navigate(route);
    }

    pub fn logout(&self) {
        let (state, route) = end_session(&LocalTokenStore);
        self.set_state.set(state);
        self.toasts.success("You have been logged out.");
        self.router.navigate(route);
    }

    /// Token rejected mid-session: drop to anonymous without a toast.
    pub fn expire(&self) {
        log!("[SESSION] Token rejected, signing out");
        let (state, route) = end_session(&LocalTokenStore);
        self.set_state.set(state);
        self.router.navigate(route);
    }

    /// Replace the cached profile after an edit
    pub fn set_user(&self, user: User) {
        self.set_state.set(SessionState::Authenticated(user));
    }

    /// Surface a failed call: 401 ends the session, anything else toasts.
    pub fn report(&self, err: &ApiError, fallback: &str) {
        if err.is_unauthorized() {
            self.expire();
        } else {
            self.toasts.error(err.user_message(fallback));
        }
    }
}

pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
