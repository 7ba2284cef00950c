//! Countdown Banner Component
//!
//! Ticks down to the next physical program session once per second.

use chrono::Utc;
use gloo_timers::callback::{Interval, Timeout};
use leptos::logging::warn;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_session;
use crate::countdown::{Countdown, CountdownKind, Tick};

const TICK_MS: u32 = 1_000;

#[component]
pub fn CountdownBanner(kind: CountdownKind) -> impl IntoView {
    let session = use_session();
    let (text, set_text) = signal(None::<String>);
    let interval = StoredValue::new_local(None::<Interval>);

    spawn_local(async move {
        let next = match session.api().next_program().await {
            Ok(next) => next,
            Err(err) => {
                warn!("[COUNTDOWN] Could not load next program: {}", err);
                None
            }
        };
        let Some(mut countdown) = Countdown::for_program(next.as_ref(), kind) else {
            let _ = set_text.try_set(Some(kind.fallback().to_string()));
            return;
        };

        let mut step = move || {
            let tick = countdown.tick(Utc::now());
            if let Some(line) = countdown.render(&tick) {
                let _ = set_text.try_set(Some(line));
            }
            if matches!(tick, Tick::Started(_)) {
                // Dropped from a fresh task, never from inside its own callback
                Timeout::new(0, move || {
                    let _ = interval.try_update_value(|handle| handle.take());
                })
                .forget();
            }
            tick
        };

        if matches!(step(), Tick::Remaining(_)) {
            let handle = Interval::new(TICK_MS, move || {
                step();
            });
            let _ = interval.try_update_value(|slot| *slot = Some(handle));
        }
    });

    on_cleanup(move || {
        let _ = interval.try_update_value(|handle| handle.take());
    });

    view! {
        <div class="countdown-banner">
            {move || text.get()}
        </div>
    }
}
