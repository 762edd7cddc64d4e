//! # Hook Lifecycle
//!
//! Every hook moves through `Idle -> Pending -> Success | Error` on each call. The
//! current state is published through a `tokio::sync::watch` channel so a view can
//! render a spinner or an error without polling the hook.
//!
//! Nothing is cached: a new call always goes back to `Pending` and hits the backend.
//!
//! When calls overlap on one hook, only the most recently started call may settle
//! the state. An earlier call finishing late still returns its result to its own
//! caller (and a mutation still redirects), but it no longer overwrites `Pending`.
use crate::hooks::HookError;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;

#[derive(Debug, Clone)]
pub enum QueryState<T> {
    /// The hook has not been called yet.
    Idle,
    /// A call is in flight.
    Pending,
    Success(T),
    Error(HookError),
}

impl<T> QueryState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, QueryState::Idle)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, QueryState::Pending)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, QueryState::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, QueryState::Error(_))
    }

    /// Returns the data of a successful call.
    pub fn data(&self) -> Option<&T> {
        match self {
            QueryState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&HookError> {
        match self {
            QueryState::Error(err) => Some(err),
            _ => None,
        }
    }
}

/// Owner side of a hook's state channel.
#[derive(Debug)]
pub(crate) struct Lifecycle<T> {
    state: watch::Sender<QueryState<T>>,
    // Id of the latest call; only read or bumped under the channel's write lock.
    generation: AtomicU64,
}

impl<T: Clone> Lifecycle<T> {
    pub(crate) fn new() -> Self {
        Self {
            state: watch::Sender::new(QueryState::Idle),
            generation: AtomicU64::new(0),
        }
    }

    /// Marks a new call as in flight and returns its generation.
    pub(crate) fn pending(&self) -> u64 {
        let mut generation = 0;
        self.state.send_modify(|state| {
            generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            *state = QueryState::Pending;
        });
        generation
    }

    /// Publishes the outcome of call `generation`, unless a newer call has started since.
    pub(crate) fn settle(&self, generation: u64, result: &Result<T, HookError>) {
        self.state.send_if_modified(|state| {
            if self.generation.load(Ordering::SeqCst) != generation {
                return false;
            }
            *state = match result {
                Ok(data) => QueryState::Success(data.clone()),
                Err(err) => QueryState::Error(err.clone()),
            };
            true
        });
    }

    pub(crate) fn snapshot(&self) -> QueryState<T> {
        self.state.borrow().clone()
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<QueryState<T>> {
        self.state.subscribe()
    }
}
