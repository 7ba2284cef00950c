//! Debounced Input
//!
//! `DebounceGate` decides which settled value may trigger a request;
//! `use_debounced` drives it from a signal with a superseding timeout.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

pub const DEBOUNCE_MS: u32 = 300;

/// Shorter queries never reach the backend
pub const MIN_QUERY_LEN: usize = 3;

/// Outcome of a timer firing
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Settle {
    /// Stale timer or a repeat of the last request
    Ignore,
    /// Newest input is too short; drop any results shown for older input
    Clear,
    /// Issue one request
    Query(String),
}

/// Generation-counted gate: only the newest input may settle, and only
/// once, and only if it differs from the last settled value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DebounceGate {
    generation: u64,
    latest: String,
    settled: Option<String>,
}

impl DebounceGate {
    /// Record a keystroke; returns the generation its timer must present.
    pub fn input(&mut self, value: &str) -> u64 {
        self.generation += 1;
        self.latest = value.trim().to_string();
        self.generation
    }

    /// Timer for `generation` fired.
    pub fn settle(&mut self, generation: u64) -> Settle {
        if generation != self.generation {
            return Settle::Ignore;
        }
        let query = self.latest.clone();
        if query.chars().count() < MIN_QUERY_LEN {
            self.settled = None;
            return Settle::Clear;
        }
        if self.settled.as_deref() == Some(query.as_str()) {
            return Settle::Ignore;
        }
        self.settled = Some(query.clone());
        Settle::Query(query)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Debounced copy of `source`: updates `delay_ms` after the last change,
/// only with queries the gate lets through. Settling on a too-short
/// value resets it to `None`.
pub fn use_debounced(source: Signal<String>, delay_ms: u32) -> ReadSignal<Option<String>> {
    let (settled, set_settled) = signal(None::<String>);
    let gate = StoredValue::new(DebounceGate::default());
    let pending = StoredValue::new_local(None::<Timeout>);

    Effect::new(move |_| {
        let value = source.get();
        let generation = gate.try_update_value(|gate| gate.input(&value)).unwrap_or_default();
        if value.trim().is_empty() {
            set_settled.set(None);
        }
        // Replacing the handle drops, and so cancels, the previous timer
        let timeout = Timeout::new(delay_ms, move || {
            match gate.try_update_value(|gate| gate.settle(generation)) {
                Some(Settle::Query(query)) => set_settled.set(Some(query)),
                Some(Settle::Clear) => set_settled.set(None),
                Some(Settle::Ignore) | None => {}
            }
        });
        pending.set_value(Some(timeout));
    });

    on_cleanup(move || {
        let _ = pending.try_update_value(|timeout| timeout.take());
    });

    settled
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays keystrokes at millisecond offsets and returns the queries
    /// that would have been sent.
    fn simulate(keystrokes: &[(u64, &str)], delay: u64) -> Vec<String> {
        let mut gate = DebounceGate::default();
        let mut timers: Vec<(u64, u64)> = Vec::new();
        let mut sent = Vec::new();

        for (at, value) in keystrokes {
            let generation = gate.input(value);
            timers.push((at + delay, generation));
        }
        timers.sort();
        for (_, generation) in timers {
            if let Settle::Query(query) = gate.settle(generation) {
                sent.push(query);
            }
        }
        sent
    }

    #[test]
    fn test_fast_typing_sends_once() {
        let sent = simulate(
            &[(0, "a"), (80, "al"), (160, "ali"), (240, "alin"), (320, "aline")],
            300,
        );
        assert_eq!(sent, vec!["aline"]);
    }

    #[test]
    fn test_each_pause_sends_once() {
        let mut gate = DebounceGate::default();
        let first = gate.input("gra");
        assert_eq!(gate.settle(first), Settle::Query("gra".to_string()));

        let stale = gate.input("grac");
        let latest = gate.input("grace");
        assert_eq!(gate.settle(stale), Settle::Ignore);
        assert_eq!(gate.settle(latest), Settle::Query("grace".to_string()));
        // A late duplicate firing never repeats the request
        assert_eq!(gate.settle(latest), Settle::Ignore);
    }

    #[test]
    fn test_empty_and_short_input_send_nothing() {
        assert!(simulate(&[(0, "")], 300).is_empty());
        assert!(simulate(&[(0, "ab")], 300).is_empty());
        assert!(simulate(&[(0, "   ")], 300).is_empty());
    }

    #[test]
    fn test_retyping_same_query_after_clear() {
        let mut gate = DebounceGate::default();
        let g = gate.input("diane");
        assert_eq!(gate.settle(g), Settle::Query("diane".to_string()));
        let g = gate.input("");
        assert_eq!(gate.settle(g), Settle::Clear);
        let g = gate.input("diane");
        assert_eq!(gate.settle(g), Settle::Query("diane".to_string()));
    }

    #[test]
    fn test_shortened_query_clears_results() {
        let mut gate = DebounceGate::default();
        let g = gate.input("grace");
        assert_eq!(gate.settle(g), Settle::Query("grace".to_string()));
        let g = gate.input("gr");
        assert_eq!(gate.settle(g), Settle::Clear);
        // Typing the old query again is a fresh request
        let g = gate.input("grace");
        assert_eq!(gate.settle(g), Settle::Query("grace".to_string()));
    }
}
