//! Confirmation Gate
//!
//! Destructive row actions park here until the user accepts or dismisses.

/// Pending destructive action awaiting an explicit answer
#[derive(Clone, Debug, PartialEq)]
pub enum Confirmation<A> {
    Idle,
    Pending(A),
}

impl<A> Default for Confirmation<A> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<A> Confirmation<A> {
    /// Ask for confirmation. Replaces any earlier unanswered request.
    pub fn request(&mut self, action: A) {
        *self = Self::Pending(action);
    }

    pub fn pending(&self) -> Option<&A> {
        match self {
            Self::Pending(action) => Some(action),
            Self::Idle => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }

    /// The user said yes: hand the action over exactly once.
    pub fn accept(&mut self) -> Option<A> {
        match std::mem::replace(self, Self::Idle) {
            Self::Pending(action) => Some(action),
            Self::Idle => None,
        }
    }

    /// The user said no: drop the action without running it.
    pub fn dismiss(&mut self) {
        *self = Self::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Clone, Debug, PartialEq)]
    enum RowAction {
        Delete(u32),
    }

    fn run(gate: &mut Confirmation<RowAction>, answer_yes: bool, requests: &Cell<u32>) {
        if answer_yes {
            if let Some(RowAction::Delete(_)) = gate.accept() {
                requests.set(requests.get() + 1);
            }
        } else {
            gate.dismiss();
        }
    }

    #[test]
    fn test_dismiss_issues_nothing() {
        let requests = Cell::new(0);
        let mut gate = Confirmation::default();
        gate.request(RowAction::Delete(4));
        assert!(gate.is_pending());
        run(&mut gate, false, &requests);
        assert_eq!(requests.get(), 0);
        assert!(!gate.is_pending());
        // a late accept after dismissal still does nothing
        run(&mut gate, true, &requests);
        assert_eq!(requests.get(), 0);
    }

    #[test]
    fn test_accept_runs_once() {
        let requests = Cell::new(0);
        let mut gate = Confirmation::default();
        gate.request(RowAction::Delete(4));
        assert_eq!(gate.pending(), Some(&RowAction::Delete(4)));
        run(&mut gate, true, &requests);
        run(&mut gate, true, &requests);
        assert_eq!(requests.get(), 1);
    }

    #[test]
    fn test_request_replaces_previous() {
        let mut gate = Confirmation::default();
        gate.request(RowAction::Delete(1));
        gate.request(RowAction::Delete(2));
        assert_eq!(gate.accept(), Some(RowAction::Delete(2)));
    }
}
