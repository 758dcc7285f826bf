//! Shareable navigation state.
//!
//! Epistemic foundation:
//! - K_i: The store holds the serialized view only; the controller owns
//!   the live state and treats the store as write-target and read-seed
//! - B_i: The store may be missing or unreadable → default state
//! - I^B: Persist failures are logged and swallowed; navigation state is
//!   best-effort and must never fail a user operation

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

/// Serializable filter/page view, fields present only when non-default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavState {
    pub search_query: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    /// Omitted when 1
    pub page: Option<u32>,
    /// Omitted when at the configured default
    pub page_size: Option<u32>,
}

impl NavState {
    /// Render as a URL query string (`searchQuery=...&page=...`).
    pub fn to_query_string(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        if let Some(query) = &self.search_query {
            serializer.append_pair("searchQuery", query);
        }
        if let Some(start) = &self.start_date {
            serializer.append_pair("startDate", start);
        }
        if let Some(end) = &self.end_date {
            serializer.append_pair("endDate", end);
        }
        if let Some(page) = self.page {
            serializer.append_pair("page", &page.to_string());
        }
        if let Some(page_size) = self.page_size {
            serializer.append_pair("pageSize", &page_size.to_string());
        }
        serializer.finish()
    }

    /// Parse from a URL query string; unknown keys and malformed numbers
    /// are ignored.
    pub fn from_query_string(input: &str) -> Self {
        let mut state = Self::default();
        for (key, value) in url::form_urlencoded::parse(input.as_bytes()) {
            match key.as_ref() {
                "searchQuery" if !value.is_empty() => {
                    state.search_query = Some(value.into_owned());
                }
                "startDate" if !value.is_empty() => {
                    state.start_date = Some(value.into_owned());
                }
                "endDate" if !value.is_empty() => {
                    state.end_date = Some(value.into_owned());
                }
                "page" => {
                    state.page = value.parse::<u32>().ok().filter(|page| *page >= 1);
                }
                "pageSize" => {
                    state.page_size = value.parse::<u32>().ok().filter(|size| *size >= 1);
                }
                _ => {}
            }
        }
        state
    }
}

/// External system of record for the serialized navigation state.
pub trait NavStore: Send + Sync {
    /// Read the seed state once at construction time.
    fn load(&self) -> NavState;

    /// Write the current state after a mutation settles.
    fn persist(&self, state: &NavState);
}

/// In-process store for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryNavStore {
    state: Arc<Mutex<NavState>>,
}

impl MemoryNavStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with `state`.
    pub fn with_state(state: NavState) -> Self {
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    /// The most recently persisted state.
    pub fn current(&self) -> NavState {
        self.state.lock().expect("nav state lock poisoned").clone()
    }
}

impl NavStore for MemoryNavStore {
    fn load(&self) -> NavState {
        self.current()
    }

    fn persist(&self, state: &NavState) {
        *self.state.lock().expect("nav state lock poisoned") = state.clone();
    }
}

/// File-backed store holding the query string, written atomically
/// (write temp + rename).
#[derive(Debug, Clone)]
pub struct FileNavStore {
    path: PathBuf,
}

impl FileNavStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn try_persist(&self, state: &NavState) -> std::io::Result<()> {
        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, state.to_query_string())?;
        fs::rename(&tmp_path, &self.path)
    }
}

impl NavStore for FileNavStore {
    fn load(&self) -> NavState {
        match fs::read_to_string(&self.path) {
            Ok(content) => NavState::from_query_string(content.trim()),
            Err(error) => {
                debug!(path = %self.path.display(), error = %error, "No stored navigation state");
                NavState::default()
            }
        }
    }

    fn persist(&self, state: &NavState) {
        if let Err(error) = self.try_persist(state) {
            warn!(path = %self.path.display(), error = %error, "Failed to persist navigation state");
        }
    }
}
