//! Per-view request state.

use std::sync::atomic::{AtomicU64, Ordering};

/// `Idle → Loading → Loaded | Failed`, re-entered on every refetch.
/// Data from the last successful load is carried through later loads and
/// failures.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading { previous: Option<T> },
    Loaded(T),
    Failed { message: String, previous: Option<T> },
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Idle
    }
}

impl<T> FetchState<T> {
    pub fn begin(&mut self) {
        let previous = std::mem::take(self).into_data();
        *self = FetchState::Loading { previous };
    }

    pub fn resolve(&mut self, result: Result<T, String>) {
        let previous = std::mem::take(self).into_data();
        *self = match result {
            Ok(data) => FetchState::Loaded(data),
            Err(message) => FetchState::Failed { message, previous },
        };
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Idle => None,
            FetchState::Loaded(data) => Some(data),
            FetchState::Loading { previous } | FetchState::Failed { previous, .. } => {
                previous.as_ref()
            }
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            FetchState::Idle => None,
            FetchState::Loaded(data) => Some(data),
            FetchState::Loading { previous } | FetchState::Failed { previous, .. } => previous,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// Identifies one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Hands out increasing tickets so that only the newest request of a view may
/// update its state.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: AtomicU64,
}

impl RequestSequence {
    pub fn next(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}
