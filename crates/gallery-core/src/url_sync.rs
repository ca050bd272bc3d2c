//! Shareable-URL synchronization for the lightbox selection.
//!
//! The in-memory [`Selection`] is the source of truth; the query parameter is
//! a projection of it. Writes go through a [`SyncGuard`] so the navigation
//! event a write produces is not mistaken for a user navigation and fed back
//! into the selection.

use std::collections::BTreeMap;

use gallery_model::ArtworkId;
use thiserror::Error;
use tracing::{debug, warn};
use url::form_urlencoded;

use crate::config::UrlConfig;
use crate::gallery::Gallery;
use crate::selection::{Selection, Transition};

/// Query-string parameters.
pub type Query = BTreeMap<String, String>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("navigation unavailable: {0}")]
    Unavailable(String),
    #[error("navigation to {path} rejected: {reason}")]
    Rejected { path: String, reason: String },
}

/// Router collaborator.
pub trait Navigator {
    /// Reads the current query parameters.
    fn current_query(&self) -> Result<Query, NavigationError>;

    /// Replaces the current history entry with `path?query`.
    ///
    /// A successful replace is followed by a navigation event that the owner
    /// delivers back to the component.
    fn replace(&mut self, path: &str, query: &Query) -> Result<(), NavigationError>;
}

/// Reentrancy guard for URL writes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SyncGuard {
    /// No write outstanding; navigation events are treated as external.
    #[default]
    Idle,
    /// A write was issued and its navigation event has not arrived yet.
    Writing,
}

impl SyncGuard {
    pub fn begin_write(&mut self) {
        *self = Self::Writing;
    }

    /// A write failed, so no navigation event will follow it.
    pub fn write_failed(&mut self) {
        *self = Self::Idle;
    }

    /// Consumes a navigation event. Returns true if it was the echo of our
    /// own write, which also resets the guard.
    pub fn absorb_echo(&mut self) -> bool {
        match self {
            Self::Writing => {
                *self = Self::Idle;
                true
            }
            Self::Idle => false,
        }
    }

    pub fn is_writing(self) -> bool {
        matches!(self, Self::Writing)
    }
}

/// Keeps the `param` query parameter in step with the selection.
#[derive(Debug, Clone)]
pub struct UrlSync {
    param: String,
    path: String,
    share_selection: bool,
    guard: SyncGuard,
    /// Parameter value already applied while sharing is off. It stays in the
    /// URL after close and must not reopen the lightbox.
    consumed: Option<String>,
}

impl UrlSync {
    pub fn new(config: &UrlConfig) -> Self {
        Self {
            param: config.param.clone(),
            path: config.path.clone(),
            share_selection: config.share_selection,
            guard: SyncGuard::Idle,
            consumed: None,
        }
    }

    pub fn guard(&self) -> SyncGuard {
        self.guard
    }

    pub fn param(&self) -> &str {
        &self.param
    }

    /// Handles a navigation event (including the initial load).
    ///
    /// If the event is not our own echo and nothing is selected yet, a valid
    /// artwork id in the query parameter is applied as a selection.
    pub fn on_navigation<N: Navigator + ?Sized>(
        &mut self,
        navigator: &N,
        gallery: &Gallery,
        selection: &mut Selection,
    ) -> Transition {
        if self.guard.absorb_echo() {
            debug!("navigation event is the echo of a URL write");
            return Transition::Unchanged;
        }
        if selection.is_open() {
            return Transition::Unchanged;
        }
        let query = match navigator.current_query() {
            Ok(query) => query,
            Err(error) => {
                warn!(%error, "failed to read query parameters");
                return Transition::Unchanged;
            }
        };
        let Some(value) = query.get(&self.param) else {
            self.consumed = None;
            return Transition::Unchanged;
        };
        if self.consumed.as_deref() == Some(value.as_str()) {
            debug!(param = %self.param, "artwork parameter already applied");
            return Transition::Unchanged;
        }
        self.consumed = None;
        let Ok(id) = ArtworkId::new(value.as_str()) else {
            debug!(param = %self.param, "ignoring blank artwork parameter");
            return Transition::Unchanged;
        };
        let transition = selection.select(gallery, &id);
        if transition.is_changed() {
            debug!(artwork_id = %id, "selection restored from URL");
            if !self.share_selection {
                self.consumed = Some(value.clone());
            }
        }
        transition
    }

    /// Projects the selection into the URL after an internal change.
    ///
    /// Failures are logged; the selection is never affected.
    pub fn on_selection_changed<N: Navigator + ?Sized>(
        &mut self,
        navigator: &mut N,
        selection: &Selection,
    ) {
        if !self.share_selection {
            return;
        }
        let current = match navigator.current_query() {
            Ok(query) => query,
            Err(error) => {
                warn!(%error, "failed to read query parameters, URL left unchanged");
                return;
            }
        };
        let mut next = current.clone();
        match selection.artwork_id() {
            Some(id) => {
                next.insert(self.param.clone(), id.to_string());
            }
            None => {
                next.remove(&self.param);
            }
        }
        if next == current {
            return;
        }
        self.guard.begin_write();
        match navigator.replace(&self.path, &next) {
            Ok(()) => debug!(url = %render_url(&self.path, &next), "URL updated"),
            Err(error) => {
                warn!(%error, "failed to update URL");
                self.guard.write_failed();
            }
        }
    }
}

/// Router that keeps history in memory.
///
/// Each successful `replace` queues one navigation event; the owner drains
/// them with [`MemoryNavigator::take_event`] and forwards them to the
/// component.
#[derive(Debug, Clone, Default)]
pub struct MemoryNavigator {
    query: Query,
    history: Vec<String>,
    pending_events: usize,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            query: pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    #[must_use]
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    /// URLs written so far, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Simulates the user editing the address bar. Queues a navigation event.
    pub fn navigate(&mut self, query: Query) {
        self.query = query;
        self.pending_events += 1;
    }

    /// Takes one pending navigation event, if any.
    pub fn take_event(&mut self) -> bool {
        if self.pending_events == 0 {
            return false;
        }
        self.pending_events -= 1;
        true
    }

    pub fn pending_events(&self) -> usize {
        self.pending_events
    }
}

impl Navigator for MemoryNavigator {
    fn current_query(&self) -> Result<Query, NavigationError> {
        if self.fail_reads {
            return Err(NavigationError::Unavailable("history is not readable".into()));
        }
        Ok(self.query.clone())
    }

    fn replace(&mut self, path: &str, query: &Query) -> Result<(), NavigationError> {
        if self.fail_writes {
            return Err(NavigationError::Rejected {
                path: path.to_string(),
                reason: "history is read-only".into(),
            });
        }
        self.query = query.clone();
        self.history.push(render_url(path, query));
        self.pending_events += 1;
        Ok(())
    }
}

/// Renders `path?k=v&...` with form-urlencoded components.
pub fn render_url(path: &str, query: &Query) -> String {
    if query.is_empty() {
        return path.to_string();
    }
    let encoded = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(query.iter())
        .finish();
    format!("{path}?{encoded}")
}

/// Parses a query string (with or without a leading `?`).
///
/// Pairs without `=` get an empty value; malformed escapes are kept verbatim.
pub fn parse_query(text: &str) -> Query {
    form_urlencoded::parse(text.trim_start_matches('?').as_bytes())
        .into_owned()
        .collect()
}
