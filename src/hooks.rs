//! Page Data Hooks
//!
//! Fetch-on-mount with an explicit reload trigger, the pattern every
//! page uses for its backing collection.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::context::use_session;
use crate::error::ApiError;
use crate::remote::Remote;

/// One remotely fetched value and its reload trigger
pub struct RemoteData<T: Send + Sync + 'static> {
    pub data: RwSignal<Remote<T>>,
    trigger: RwSignal<u32>,
}

impl<T: Send + Sync + 'static> Clone for RemoteData<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for RemoteData<T> {}

impl<T: Send + Sync + 'static> RemoteData<T> {
    /// Refetch from the backend
    pub fn reload(&self) {
        let _ = self.trigger.try_update(|v| *v += 1);
    }

    pub fn is_loading(&self) -> bool {
        self.data.with(Remote::is_loading)
    }

    pub fn failed(&self) -> bool {
        self.data.with(|data| data.error().is_some())
    }

    /// Patch the loaded value in place. No-op once the page is gone.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let _ = self.data.try_update(|data| data.update(f));
    }
}

impl<T: Clone + Default + Send + Sync + 'static> RemoteData<T> {
    /// Loaded value, or empty while loading / after failure
    pub fn value(&self) -> T {
        self.data.with(Remote::data_or_default)
    }
}

/// Fetch with the session's client now and on every `reload()`.
/// Signals `fetch` reads before building its future are tracked too, so
/// a changed filter refetches. Failures are reported through the
/// session (401 signs out).
pub fn use_remote<T, F, Fut>(fetch: F, fallback: &'static str) -> RemoteData<T>
where
    T: Send + Sync + 'static,
    F: Fn(ApiClient) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let session = use_session();
    let data = RwSignal::new(Remote::Loading);
    let trigger = RwSignal::new(0u32);

    Effect::new(move |_| {
        trigger.track();
        let request = fetch(session.api());
        spawn_local(async move {
            let result = request.await;
            if let Err(err) = &result {
                session.report(err, fallback);
            }
            // The page may have been left while the request was in flight
            let _ = data.try_set(Remote::from_result(result));
        });
    });

    RemoteData { data, trigger }
}
