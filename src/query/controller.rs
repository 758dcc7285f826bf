//! Pagination/filter controller over the content API.
//!
//! Epistemic foundation:
//! - K_i: One controller instance exclusively owns its filter/page state
//! - K_i: Items and total count commit together or not at all
//! - B_i: A fetch cycle ends loaded or errored; prior data survives errors
//! - I^B: A superseded cycle may settle late → generation token discards it

use crate::client::{build_url, Fetcher, ReqwestTransport, RetryPolicy};
use crate::models::{Config, CountRow, DateRange, LexikaError, Result};
use crate::query::{FileNavStore, FilterSet, MemoryNavStore, NavState, NavStore, PageState};
use crate::util::Debouncer;
use serde::de::DeserializeOwned;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, warn};

/// Tuning for a [`CollectionBrowser`].
#[derive(Debug, Clone)]
pub struct BrowserOptions {
    /// Collection endpoint URL
    pub collection_url: String,
    /// Record field the search predicate matches against
    pub search_field: String,
    /// Record field the date window applies to
    pub date_field: String,
    /// Page size restored by [`CollectionBrowser::reset`]
    pub default_page_size: u32,
    /// Quiescence window for debounced search
    pub debounce: Duration,
    /// Retry budget per request
    pub retry: RetryPolicy,
}

impl Default for BrowserOptions {
    fn default() -> Self {
        Self {
            collection_url: "https://directus.altura.io/items/translationKeys".to_string(),
            search_field: "key".to_string(),
            date_field: "updatedAt".to_string(),
            default_page_size: 10,
            debounce: Duration::from_millis(300),
            retry: RetryPolicy::default(),
        }
    }
}

impl BrowserOptions {
    /// Derive options from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            collection_url: config.collection_url(),
            search_field: config.query.search_field.clone(),
            date_field: config.query.date_field.clone(),
            default_page_size: config.query.page_size.max(1),
            debounce: Duration::from_millis(config.query.debounce_ms),
            retry: RetryPolicy {
                retries: config.api.retries,
                retry_delay: Duration::from_millis(config.api.retry_delay_ms),
            },
        }
    }
}

/// Observable view of the browser, published after every committed change.
///
/// `items` and `total_count` are always from the same settled cycle;
/// `error` carries the failure message of the most recent cycle, or `None`
/// after a success.
#[derive(Debug, Clone)]
pub struct Snapshot<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub current_page: u32,
    pub page_size: u32,
    pub error: Option<String>,
    pub is_loading: bool,
}

impl<T> Snapshot<T> {
    fn seeded(page: PageState) -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
            current_page: page.current_page,
            page_size: page.page_size,
            error: None,
            is_loading: false,
        }
    }

    /// Number of pages implied by the current count.
    pub fn total_pages(&self) -> u64 {
        PageState {
            current_page: self.current_page,
            page_size: self.page_size,
            total_count: self.total_count,
        }
        .total_pages()
    }
}

/// Live filter/page state. Exclusively owned by one controller.
struct QueryState {
    search_query: String,
    date_range: DateRange,
    page: PageState,
}

struct BrowserInner<T> {
    fetcher: Fetcher,
    nav: Box<dyn NavStore>,
    debouncer: Debouncer,
    options: BrowserOptions,
    state: Mutex<QueryState>,
    snapshot: watch::Sender<Snapshot<T>>,
    generation: AtomicU64,
}

/// Stateful browser over a paginated, filterable, searchable collection.
///
/// Composes the URL builder, retrying fetcher, and debouncer; mirrors every
/// settled state change into the navigation store so a view is shareable
/// and restorable.
pub struct CollectionBrowser<T> {
    inner: Arc<BrowserInner<T>>,
}

impl<T> Clone for CollectionBrowser<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> CollectionBrowser<T>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    /// Create a browser, seeding filter/page state from the store.
    pub fn new(fetcher: Fetcher, nav: Box<dyn NavStore>, options: BrowserOptions) -> Self {
        let seed = nav.load();
        let page = PageState {
            current_page: seed.page.unwrap_or(1).max(1),
            page_size: seed
                .page_size
                .unwrap_or(options.default_page_size)
                .max(1),
            total_count: 0,
        };
        let state = QueryState {
            search_query: seed.search_query.unwrap_or_default(),
            date_range: DateRange::new(
                seed.start_date.unwrap_or_default(),
                seed.end_date.unwrap_or_default(),
            ),
            page,
        };

        let (snapshot, _) = watch::channel(Snapshot::seeded(page));

        Self {
            inner: Arc::new(BrowserInner {
                fetcher,
                nav,
                debouncer: Debouncer::new(options.debounce),
                options,
                state: Mutex::new(state),
                snapshot,
                generation: AtomicU64::new(0),
            }),
        }
    }

    /// Create a browser from configuration, with the store the config names
    /// (file-backed when `state.path` is set, in-memory otherwise).
    pub fn from_config(config: &Config) -> Result<Self> {
        let nav: Box<dyn NavStore> = match &config.state.path {
            Some(path) => Box::new(FileNavStore::new(path)),
            None => Box::new(MemoryNavStore::new()),
        };
        Self::with_store(config, nav)
    }

    /// Create a browser from configuration with an explicit store.
    pub fn with_store(config: &Config, nav: Box<dyn NavStore>) -> Result<Self> {
        let transport = ReqwestTransport::new(config.timeout())?;
        let fetcher = Fetcher::new(Arc::new(transport));
        Ok(Self::new(fetcher, nav, BrowserOptions::from_config(config)))
    }

    /// Subscribe to committed snapshots.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot<T>> {
        self.inner.snapshot.subscribe()
    }

    /// The latest committed snapshot.
    pub fn snapshot(&self) -> Snapshot<T>
    where
        T: Clone,
    {
        self.inner.snapshot.borrow().clone()
    }

    /// Cumulative fetcher statistics.
    pub fn fetcher_stats(&self) -> crate::client::FetcherStats {
        self.inner.fetcher.stats()
    }

    /// Update the search text and schedule a debounced fetch cycle.
    ///
    /// Resets to page 1. The cycle runs after the quiescence window; rapid
    /// successive calls collapse into one fetch with the latest text.
    pub fn set_search_query(&self, text: impl Into<String>) {
        {
            let mut state = self.inner.lock_state();
            state.search_query = text.into();
            if state.page.current_page != 1 {
                state.page.current_page = 1;
            }
        }
        self.inner.sync_page_snapshot();
        self.inner.persist_nav();

        let inner = Arc::clone(&self.inner);
        self.inner.debouncer.call(async move {
            inner.run_cycle().await;
        });
    }

    /// Update the date window. When both bounds are present, resets to
    /// page 1 and fetches immediately; otherwise only records the bounds.
    pub async fn set_date_range(&self, range: DateRange) {
        let active = range.is_active();
        {
            let mut state = self.inner.lock_state();
            state.date_range = range;
            if active && state.page.current_page != 1 {
                state.page.current_page = 1;
            }
        }
        self.inner.sync_page_snapshot();
        self.inner.persist_nav();

        if active {
            Arc::clone(&self.inner).run_cycle().await;
        }
    }

    /// Update the page size and fetch immediately. The current page is
    /// left untouched.
    pub async fn set_page_size(&self, page_size: u32) {
        {
            let mut state = self.inner.lock_state();
            state.page.page_size = page_size.max(1);
        }
        self.inner.sync_page_snapshot();
        self.inner.persist_nav();
        Arc::clone(&self.inner).run_cycle().await;
    }

    /// Advance one page and fetch, if the last known count allows it;
    /// otherwise a silent no-op.
    pub async fn increment_page(&self) {
        let advanced = {
            let mut state = self.inner.lock_state();
            if state.page.can_increment() {
                state.page.current_page += 1;
                true
            } else {
                false
            }
        };
        if advanced {
            self.inner.sync_page_snapshot();
            self.inner.persist_nav();
            Arc::clone(&self.inner).run_cycle().await;
        }
    }

    /// Go back one page and fetch, unless already on page 1.
    pub async fn decrement_page(&self) {
        let moved = {
            let mut state = self.inner.lock_state();
            if state.page.can_decrement() {
                state.page.current_page -= 1;
                true
            } else {
                false
            }
        };
        if moved {
            self.inner.sync_page_snapshot();
            self.inner.persist_nav();
            Arc::clone(&self.inner).run_cycle().await;
        }
    }

    /// Clear search and date filters, restore the default page size and
    /// page 1, then fetch.
    pub async fn reset(&self) {
        {
            let mut state = self.inner.lock_state();
            state.search_query.clear();
            state.date_range = DateRange::default();
            state.page.page_size = self.inner.options.default_page_size;
            state.page.current_page = 1;
        }
        self.inner.sync_page_snapshot();
        self.inner.persist_nav();
        Arc::clone(&self.inner).run_cycle().await;
    }

    /// Fetch with the current state (initial load, manual reload).
    pub async fn refresh(&self) {
        Arc::clone(&self.inner).run_cycle().await;
    }
}

impl<T> BrowserInner<T>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    fn lock_state(&self) -> std::sync::MutexGuard<'_, QueryState> {
        self.state.lock().expect("query state lock poisoned")
    }

    /// Mirror page fields into the snapshot so observers see mutations
    /// before the next cycle settles.
    fn sync_page_snapshot(&self) {
        let (current_page, page_size) = {
            let state = self.lock_state();
            (state.page.current_page, state.page.page_size)
        };
        self.snapshot.send_modify(|snapshot| {
            snapshot.current_page = current_page;
            snapshot.page_size = page_size;
        });
    }

    /// Write the non-default fields of the current state to the store.
    fn persist_nav(&self) {
        let nav = {
            let state = self.lock_state();
            NavState {
                search_query: (!state.search_query.is_empty())
                    .then(|| state.search_query.clone()),
                start_date: (!state.date_range.start.is_empty())
                    .then(|| state.date_range.start.clone()),
                end_date: (!state.date_range.end.is_empty())
                    .then(|| state.date_range.end.clone()),
                page: (state.page.current_page != 1).then_some(state.page.current_page),
                page_size: (state.page.page_size != self.options.default_page_size)
                    .then_some(state.page.page_size),
            }
        };
        self.nav.persist(&nav);
    }

    /// One fetch cycle: data and count issued in parallel, committed
    /// all-or-nothing, discarded when superseded.
    async fn run_cycle(self: Arc<Self>) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let (filter, current_page, page_size) = {
            let state = self.lock_state();
            let mut filter = FilterSet::new();
            if !state.search_query.is_empty() {
                filter.contains(self.options.search_field.as_str(), state.search_query.as_str());
            }
            if state.date_range.is_active() {
                filter.between(
                    self.options.date_field.as_str(),
                    state.date_range.start.as_str(),
                    state.date_range.end.as_str(),
                );
            }
            (filter, state.page.current_page, state.page.page_size)
        };

        self.snapshot.send_modify(|snapshot| {
            snapshot.is_loading = true;
            snapshot.current_page = current_page;
            snapshot.page_size = page_size;
        });

        let outcome = self.fetch_page(&filter, current_page, page_size).await;

        // A newer cycle has started: it owns the snapshot now
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(generation, "Discarding superseded fetch cycle");
            return;
        }

        match outcome {
            Ok((items, total_count)) => {
                self.lock_state().page.total_count = total_count;
                self.snapshot.send_modify(|snapshot| {
                    snapshot.items = items;
                    snapshot.total_count = total_count;
                    snapshot.error = None;
                    snapshot.is_loading = false;
                });
            }
            Err(error) => {
                warn!(generation, error = %error, "Fetch cycle failed");
                self.snapshot.send_modify(|snapshot| {
                    snapshot.error = Some(error.to_string());
                    snapshot.is_loading = false;
                });
            }
        }
    }

    async fn fetch_page(&self, filter: &FilterSet, page: u32, limit: u32) -> Result<(Vec<T>, u64)> {
        let filter_json = filter.to_json()?;
        let page_param = page.to_string();
        let limit_param = limit.to_string();

        let data_url = build_url(
            &self.options.collection_url,
            &[
                ("sort", "-createdAt"),
                ("fields", "*,translations.*"),
                ("page", page_param.as_str()),
                ("limit", limit_param.as_str()),
                ("filter", filter_json.as_str()),
            ],
        )?;
        let count_url = build_url(
            &self.options.collection_url,
            &[
                ("filter", filter_json.as_str()),
                ("aggregate[count]", "*"),
            ],
        )?;

        let (items, count_rows) = tokio::join!(
            self.fetcher.fetch::<Vec<T>>(&data_url, &self.options.retry),
            self.fetcher.fetch::<Vec<CountRow>>(&count_url, &self.options.retry),
        );
        let items = items?;
        let count_rows: Vec<CountRow> = count_rows?;

        let total_count = count_rows
            .first()
            .ok_or_else(|| LexikaError::Parse("count aggregate returned no rows".to_string()))?
            .value()?;

        Ok((items, total_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{Transport, TransportResponse};
    use crate::models::TranslationKey;
    use async_trait::async_trait;
    use std::sync::atomic::AtomicUsize;

    /// Fake content API discriminating data and count requests by URL.
    struct FakeApi {
        data_body: Mutex<String>,
        count_body: Mutex<String>,
        failing: std::sync::atomic::AtomicBool,
        delay: Mutex<Duration>,
        data_calls: AtomicUsize,
        count_calls: AtomicUsize,
        last_data_url: Mutex<Option<url::Url>>,
    }

    impl FakeApi {
        fn new(keys: &[&str], total: u64) -> Arc<Self> {
            let api = Arc::new(Self {
                data_body: Mutex::new(String::new()),
                count_body: Mutex::new(String::new()),
                failing: std::sync::atomic::AtomicBool::new(false),
                delay: Mutex::new(Duration::ZERO),
                data_calls: AtomicUsize::new(0),
                count_calls: AtomicUsize::new(0),
                last_data_url: Mutex::new(None),
            });
            api.respond_with(keys, total);
            api
        }

        fn respond_with(&self, keys: &[&str], total: u64) {
            let rows: Vec<String> = keys
                .iter()
                .map(|key| format!(r#"{{"key":"{key}","updatedAt":"2024-06-01T00:00:00Z"}}"#))
                .collect();
            *self.data_body.lock().unwrap() = format!(r#"{{"data":[{}]}}"#, rows.join(","));
            *self.count_body.lock().unwrap() = format!(r#"{{"data":[{{"count":"{total}"}}]}}"#);
        }

        fn set_failing(&self, failing: bool) {
            self.failing.store(failing, Ordering::SeqCst);
        }

        fn set_delay(&self, delay: Duration) {
            *self.delay.lock().unwrap() = delay;
        }

        fn data_calls(&self) -> usize {
            self.data_calls.load(Ordering::SeqCst)
        }

        fn last_data_query(&self) -> String {
            self.last_data_url
                .lock()
                .unwrap()
                .as_ref()
                .and_then(|url| url.query().map(str::to_string))
                .unwrap_or_default()
        }
    }

    #[async_trait]
    impl Transport for FakeApi {
        async fn get(&self, url: &url::Url) -> Result<TransportResponse> {
            let delay = *self.delay.lock().unwrap();
            if delay > Duration::ZERO {
                tokio::time::sleep(delay).await;
            }

            if self.failing.load(Ordering::SeqCst) {
                return Ok(TransportResponse {
                    status: 503,
                    body: b"{}".to_vec(),
                });
            }

            let is_count = url.query().unwrap_or("").contains("aggregate");
            let body = if is_count {
                self.count_calls.fetch_add(1, Ordering::SeqCst);
                self.count_body.lock().unwrap().clone()
            } else {
                self.data_calls.fetch_add(1, Ordering::SeqCst);
                *self.last_data_url.lock().unwrap() = Some(url.clone());
                self.data_body.lock().unwrap().clone()
            };

            Ok(TransportResponse {
                status: 200,
                body: body.into_bytes(),
            })
        }
    }

    fn test_options() -> BrowserOptions {
        BrowserOptions {
            collection_url: "https://example.com/items/translationKeys".to_string(),
            retry: RetryPolicy {
                retries: 0,
                retry_delay: Duration::from_millis(1),
            },
            ..BrowserOptions::default()
        }
    }

    fn browser(api: &Arc<FakeApi>, store: MemoryNavStore) -> CollectionBrowser<TranslationKey> {
        CollectionBrowser::new(
            Fetcher::new(api.clone()),
            Box::new(store),
            test_options(),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_page_walk_stops_at_last_page() {
        let api = FakeApi::new(&["a", "b"], 25);
        let browser = browser(&api, MemoryNavStore::new());

        browser.refresh().await;
        assert_eq!(browser.snapshot().total_count, 25);
        assert_eq!(browser.snapshot().current_page, 1);

        browser.increment_page().await;
        assert_eq!(browser.snapshot().current_page, 2);
        browser.increment_page().await;
        assert_eq!(browser.snapshot().current_page, 3);

        // ceil(25 / 10) = 3: a fourth page does not exist
        let calls_before = api.data_calls();
        browser.increment_page().await;
        assert_eq!(browser.snapshot().current_page, 3);
        assert_eq!(api.data_calls(), calls_before);

        browser.decrement_page().await;
        browser.decrement_page().await;
        assert_eq!(browser.snapshot().current_page, 1);

        let calls_before = api.data_calls();
        browser.decrement_page().await;
        assert_eq!(browser.snapshot().current_page, 1);
        assert_eq!(api.data_calls(), calls_before);
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_resets_page_and_debounces() {
        let api = FakeApi::new(&["alpha", "beta"], 25);
        let store = MemoryNavStore::new();
        let browser = browser(&api, store.clone());

        browser.refresh().await;
        browser.increment_page().await;
        assert_eq!(browser.snapshot().current_page, 2);
        let calls_before = api.data_calls();

        api.respond_with(&["greeting"], 1);
        browser.set_search_query("greeting");
        assert_eq!(browser.snapshot().current_page, 1);
        assert_eq!(api.data_calls(), calls_before);

        let mut rx = browser.subscribe();
        rx.wait_for(|snapshot| snapshot.total_count == 1)
            .await
            .unwrap();

        assert_eq!(api.data_calls(), calls_before + 1);
        assert!(api.last_data_query().contains("_contains"));
        assert!(api.last_data_query().contains("greeting"));
        assert_eq!(store.current().search_query.as_deref(), Some("greeting"));
        assert_eq!(store.current().page, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_search_calls_collapse_into_one_fetch() {
        let api = FakeApi::new(&["x"], 1);
        let browser = browser(&api, MemoryNavStore::new());

        browser.set_search_query("g");
        browser.set_search_query("gr");
        browser.set_search_query("greeting");

        let mut rx = browser.subscribe();
        rx.wait_for(|snapshot| snapshot.total_count == 1)
            .await
            .unwrap();

        assert_eq!(api.data_calls(), 1);
        assert!(api.last_data_query().contains("greeting"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_cycle_keeps_prior_data_and_sets_error() {
        let api = FakeApi::new(&["a", "b"], 25);
        let browser = browser(&api, MemoryNavStore::new());

        browser.refresh().await;
        let loaded = browser.snapshot();
        assert_eq!(loaded.items.len(), 2);
        assert!(loaded.error.is_none());

        api.set_failing(true);
        browser.refresh().await;
        let errored = browser.snapshot();
        assert!(errored.error.is_some());
        assert!(!errored.is_loading);
        // Stale-but-available: previous data untouched
        assert_eq!(errored.items.len(), 2);
        assert_eq!(errored.total_count, 25);

        api.set_failing(false);
        browser.refresh().await;
        assert!(browser.snapshot().error.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_date_range_only_fetches_when_both_bounds_present() {
        let api = FakeApi::new(&["a"], 1);
        let store = MemoryNavStore::new();
        let browser = browser(&api, store.clone());

        browser
            .set_date_range(DateRange::new("2024-01-01", ""))
            .await;
        assert_eq!(api.data_calls(), 0);
        assert_eq!(store.current().start_date.as_deref(), Some("2024-01-01"));

        browser
            .set_date_range(DateRange::new("2024-01-01", "2024-01-31"))
            .await;
        assert_eq!(api.data_calls(), 1);
        assert!(api.last_data_query().contains("_between"));
        assert_eq!(store.current().end_date.as_deref(), Some("2024-01-31"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_page_size_change_keeps_current_page() {
        let api = FakeApi::new(&["a"], 25);
        let store = MemoryNavStore::new();
        let browser = browser(&api, store.clone());

        browser.refresh().await;
        browser.increment_page().await;
        browser.set_page_size(5).await;

        let snapshot = browser.snapshot();
        assert_eq!(snapshot.current_page, 2);
        assert_eq!(snapshot.page_size, 5);
        assert!(api.last_data_query().contains("limit=5"));
        assert_eq!(store.current().page, Some(2));
        assert_eq!(store.current().page_size, Some(5));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_restores_defaults_and_clears_store() {
        let api = FakeApi::new(&["a"], 25);
        let store = MemoryNavStore::new();
        let browser = browser(&api, store.clone());

        browser.refresh().await;
        browser.set_search_query("greeting");
        browser
            .set_date_range(DateRange::new("2024-01-01", "2024-01-31"))
            .await;
        browser.set_page_size(5).await;
        browser.increment_page().await;

        browser.reset().await;
        let snapshot = browser.snapshot();
        assert_eq!(snapshot.current_page, 1);
        assert_eq!(snapshot.page_size, 10);
        assert_eq!(store.current(), NavState::default());
        // Filter is empty again
        assert!(api.last_data_query().contains("filter=%7B%7D"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_construction_seeds_from_store() {
        let api = FakeApi::new(&["a"], 25);
        let seed = NavState {
            search_query: Some("greeting".to_string()),
            page: Some(2),
            page_size: Some(5),
            ..NavState::default()
        };
        let browser = browser(&api, MemoryNavStore::with_state(seed));

        let snapshot = browser.snapshot();
        assert_eq!(snapshot.current_page, 2);
        assert_eq!(snapshot.page_size, 5);

        browser.refresh().await;
        let query = api.last_data_query();
        assert!(query.contains("page=2"));
        assert!(query.contains("limit=5"));
        assert!(query.contains("greeting"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_loading_flag_spans_the_cycle() {
        let api = FakeApi::new(&["a"], 1);
        api.set_delay(Duration::from_millis(50));
        let browser = browser(&api, MemoryNavStore::new());
        let mut rx = browser.subscribe();

        let handle = tokio::spawn({
            let browser = browser.clone();
            async move { browser.refresh().await }
        });

        rx.wait_for(|snapshot| snapshot.is_loading).await.unwrap();
        rx.wait_for(|snapshot| !snapshot.is_loading).await.unwrap();
        handle.await.unwrap();

        let snapshot = browser.snapshot();
        assert_eq!(snapshot.items.len(), 1);
        assert_eq!(snapshot.total_count, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_superseded_cycle_is_discarded() {
        let api = FakeApi::new(&["slow"], 1);
        api.set_delay(Duration::from_millis(500));
        let browser = browser(&api, MemoryNavStore::new());

        let slow = tokio::spawn({
            let browser = browser.clone();
            async move { browser.refresh().await }
        });
        // Let the slow cycle reach its transport calls
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }

        api.set_delay(Duration::from_millis(10));
        api.respond_with(&["fresh-a", "fresh-b"], 2);
        browser.refresh().await;
        slow.await.unwrap();

        // The late settle of the first cycle must not overwrite the second
        let snapshot = browser.snapshot();
        assert_eq!(snapshot.items.len(), 2);
        assert_eq!(snapshot.total_count, 2);
        assert_eq!(snapshot.items[0].key, "fresh-a");
    }
}
