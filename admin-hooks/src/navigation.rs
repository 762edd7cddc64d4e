//! # Navigation
//!
//! Redirect targets of the admin dashboard and the [`Navigator`] seam the mutations
//! use to perform them.
use std::fmt;
use std::sync::{Mutex, PoisonError};
use tokio::sync::watch;

/// A client-side route of the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/admin/login`
    Login,
    /// `/admin/content`, optionally filtered with `?type=<content_type>`.
    ContentList { content_type: Option<String> },
}

impl Route {
    pub fn content_list() -> Self {
        Route::ContentList { content_type: None }
    }

    pub fn content_list_of(content_type: impl Into<String>) -> Self {
        Route::ContentList {
            content_type: Some(content_type.into()),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Login => f.write_str("/admin/login"),
            Route::ContentList { content_type: None } => f.write_str("/admin/content"),
            // The content type is appended verbatim, without percent-encoding.
            Route::ContentList {
                content_type: Some(content_type),
            } => write!(f, "/admin/content?type={content_type}"),
        }
    }
}

/// Performs client-side redirects.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// An in-process router history.
///
/// Keeps every visited location and publishes the current one through a
/// `watch` channel so a view layer can follow redirects.
#[derive(Debug)]
pub struct History {
    location: watch::Sender<String>,
    entries: Mutex<Vec<String>>,
}

impl History {
    /// Starts a history at `location`.
    pub fn starting_at(location: impl Into<String>) -> Self {
        let location = location.into();
        Self {
            location: watch::Sender::new(location.clone()),
            entries: Mutex::new(vec![location]),
        }
    }

    pub fn location(&self) -> String {
        self.location.borrow().clone()
    }

    /// All visited locations, oldest first, including the starting one.
    pub fn entries(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.location.subscribe()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::starting_at("/")
    }
}

impl Navigator for History {
    fn navigate(&self, route: Route) {
        let location = route.to_string();
        tracing::info!(%location, "redirecting");

        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(location.clone());
        self.location.send_replace(location);
    }
}
