//! Session Lifecycle
//!
//! Token persistence and the profile lookup sit behind traits so the
//! restore / login / logout rules can run without a browser.

use std::cell::RefCell;

use leptos::logging::{log, warn};

use crate::error::ApiError;
use crate::models::{Role, User};
use crate::routes::Route;

const TOKEN_KEY: &str = "token";

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionState {
    /// Stored token not yet checked
    #[default]
    Initializing,
    Authenticated(User),
    Anonymous,
}

impl SessionState {
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_initializing(&self) -> bool {
        matches!(self, Self::Initializing)
    }
}

// ========================
// Seams
// ========================

/// Where the bearer token survives page reloads
pub trait TokenStore {
    fn token(&self) -> Option<String>;
    fn store(&self, token: &str);
    fn clear(&self);
}

/// Exchanges a stored token for the current profile
#[allow(async_fn_in_trait)]
pub trait ProfileSource {
    async fn profile(&self, token: &str) -> Result<User, ApiError>;
}

/// Browser `localStorage`
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalTokenStore;

impl LocalTokenStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl TokenStore for LocalTokenStore {
    fn token(&self) -> Option<String> {
        Self::storage()?
            .get_item(TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
    }

    fn store(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(TOKEN_KEY, token).is_err() {
                warn!("[SESSION] Could not persist token");
            }
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self {
            token: RefCell::new(Some(token.to_string())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn store(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
    }
}

// ========================
// Lifecycle
// ========================

/// Resolve the startup state. Never fails: any error degrades to
/// anonymous and drops the stored token.
pub async fn restore_session(store: &impl TokenStore, source: &impl ProfileSource) -> SessionState {
    let Some(token) = store.token() else {
        return SessionState::Anonymous;
    };

    match source.profile(&token).await {
        Ok(user) => {
            log!("[SESSION] Restored session for user {}", user.id);
            SessionState::Authenticated(user)
        }
        Err(err) => {
            warn!("[SESSION] Session expired or token is invalid: {}", err);
            store.clear();
            SessionState::Anonymous
        }
    }
}

/// Landing page after sign-in
pub fn home_for(role: &Role) -> Route {
    if role.is_staff() {
        Route::Dashboard
    } else {
        Route::LearnerDashboard
    }
}

/// Persist the token and return the new state plus where to go.
pub fn begin_session(store: &impl TokenStore, token: &str, user: User) -> (SessionState, Route) {
    store.store(token);
    let route = home_for(&user.role);
    (SessionState::Authenticated(user), route)
}

/// Drop the token; the caller redirects to the returned route.
pub fn end_session(store: &impl TokenStore) -> (SessionState, Route) {
    store.clear();
    (SessionState::Anonymous, Route::Login)
}

/// Redirect for a visitor who may not see `route`: anonymous users go to
/// login, signed-in users outside their area go to their own dashboard.
pub fn guard_route(route: &Route, state: &SessionState) -> Option<Route> {
    match state {
        SessionState::Initializing => None,
        SessionState::Anonymous => route.requires_session().then_some(Route::Login),
        SessionState::Authenticated(user) => {
            let staff = user.role.is_staff();
            let outside = (route.is_staff_area() && !staff) || (route.is_learner_area() && staff);
            outside.then(|| home_for(&user.role))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::Cell;

    struct FakeProfiles {
        result: Result<User, ApiError>,
        calls: Cell<u32>,
    }

    impl FakeProfiles {
        fn new(result: Result<User, ApiError>) -> Self {
            Self {
                result,
                calls: Cell::new(0),
            }
        }
    }

    impl ProfileSource for FakeProfiles {
        async fn profile(&self, _token: &str) -> Result<User, ApiError> {
            self.calls.set(self.calls.get() + 1);
            self.result.clone()
        }
    }

    fn user(role: &str) -> User {
        User {
            id: 4,
            username: "diane".into(),
            email: "diane@shecan.rw".into(),
            first_name: "Diane".into(),
            last_name: "K".into(),
            profile_picture_url: None,
            role: Role::from(role.to_string()),
            location: None,
            bio: None,
        }
    }

    #[test]
    fn test_no_token_skips_profile_fetch() {
        let store = MemoryTokenStore::default();
        let profiles = FakeProfiles::new(Ok(user("learner")));
        let state = block_on(restore_session(&store, &profiles));
        assert_eq!(state, SessionState::Anonymous);
        assert_eq!(profiles.calls.get(), 0);
    }

    #[test]
    fn test_valid_token_restores_user() {
        let store = MemoryTokenStore::with_token("abc");
        let profiles = FakeProfiles::new(Ok(user("mentor")));
        let state = block_on(restore_session(&store, &profiles));
        assert_eq!(state.user().map(|u| u.id), Some(4));
        assert_eq!(store.token().as_deref(), Some("abc"));
    }

    #[test]
    fn test_rejected_token_is_cleared() {
        for err in [ApiError::Unauthorized, ApiError::Network("offline".into())] {
            let store = MemoryTokenStore::with_token("stale");
            let profiles = FakeProfiles::new(Err(err));
            let state = block_on(restore_session(&store, &profiles));
            assert_eq!(state, SessionState::Anonymous);
            assert_eq!(store.token(), None);
        }
    }

    #[test]
    fn test_login_redirect_by_role() {
        let store = MemoryTokenStore::default();
        for (role, route) in [
            ("program manager", Route::Dashboard),
            ("mentor", Route::Dashboard),
            ("learner", Route::LearnerDashboard),
            ("alumni", Route::LearnerDashboard),
        ] {
            let (state, next) = begin_session(&store, "t0k", user(role));
            assert_eq!(next, route, "role {}", role);
            assert!(state.user().is_some());
        }
        assert_eq!(store.token().as_deref(), Some("t0k"));
    }

    #[test]
    fn test_logout_prevents_profile_fetch() {
        let store = MemoryTokenStore::default();
        let profiles = FakeProfiles::new(Ok(user("learner")));
        begin_session(&store, "t0k", user("learner"));

        let (state, next) = end_session(&store);
        assert_eq!(state, SessionState::Anonymous);
        assert_eq!(next, Route::Login);
        assert_eq!(store.token(), None);

        block_on(restore_session(&store, &profiles));
        assert_eq!(profiles.calls.get(), 0);
    }

    #[test]
    fn test_guard_route() {
        assert_eq!(guard_route(&Route::MentorBookings, &SessionState::Initializing), None);
        assert_eq!(guard_route(&Route::MentorBookings, &SessionState::Anonymous), Some(Route::Login));
        assert_eq!(guard_route(&Route::About, &SessionState::Anonymous), None);

        let learner = SessionState::Authenticated(user("learner"));
        assert_eq!(guard_route(&Route::AdminCourses, &learner), Some(Route::LearnerDashboard));
        assert_eq!(guard_route(&Route::LearnerCourse(3), &learner), None);

        let mentor = SessionState::Authenticated(user("mentor"));
        assert_eq!(guard_route(&Route::TakeQuiz(1), &mentor), Some(Route::Dashboard));
        assert_eq!(guard_route(&Route::MentorStudents, &mentor), None);
        assert_eq!(guard_route(&Route::MentorEditCourse, &mentor), None);
        assert_eq!(guard_route(&Route::MentorEditCourse, &learner), Some(Route::LearnerDashboard));
    }
}
