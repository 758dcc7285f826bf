//! lexika - Resilient paginated browsing for Directus-style content APIs.
//!
//! ## Architecture
//!
//! lexika layers three primitives under one controller:
//! - **Fetcher**: bounded-retry HTTP GET with linear backoff
//! - **Debouncer**: trailing-edge delay for bursty search input
//! - **CollectionBrowser**: filter/page state machine issuing parallel
//!   data + count cycles and mirroring settled state into a shareable
//!   navigation store
//!
//! ## Epistemic Design
//!
//! - K_i (Knowledge): Compile-time enforced invariants (types, page math)
//! - B_i (Beliefs): Runtime fallible operations (Result, Option)
//! - I^R (Resolvable): User-configurable parameters
//! - I^B (Bounded): Network uncertainties (retry, backoff, generation guard)

pub mod client;
pub mod models;
pub mod query;
pub mod util;

// Re-exports for convenience
pub use client::{
    build_url, Fetcher, FetcherStats, ReqwestTransport, RetryPolicy, Transport, TransportResponse,
};
pub use models::{Config, CountRow, DateRange, LexikaError, Result, TranslationKey};
pub use query::{
    BrowserOptions, CollectionBrowser, FileNavStore, FilterExpr, FilterSet, MemoryNavStore,
    NavState, NavStore, PageState, Snapshot,
};
pub use util::{format_relative_time, format_relative_time_at, Debouncer};
