//! Client-side catalog controls as an explicit state machine.
//!
//! The browser view keeps the URL as its single source of truth: every control
//! change produces a [`Navigation`] to a canonical catalog URL, and every URL
//! change produces a [`FetchTicket`] against the JSON endpoint. Tickets carry
//! a monotonically increasing sequence number and a cancellation token; only
//! the most recently dispatched ticket may update what is displayed.

use std::time::{Duration, Instant};

use tokio_util::sync::CancellationToken;

use crate::domain::query::{CatalogPage, CatalogQuery};
use crate::domain::types::{CatalogSort, CategoryFilter, StatusFilter};
use crate::forms::catalog::{api_href, catalog_href};

/// Quiet period after the last keystroke before the search is applied.
pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(400);

/// Where the controller currently is in its request cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewPhase {
    /// Nothing loaded yet.
    Idle,
    /// Search text changed; waiting for typing to settle.
    PendingDebounce { deadline: Instant },
    /// A request is in flight.
    Fetching { seq: u64 },
    /// The latest request failed.
    Error { message: String },
    /// Data for the current URL is displayed.
    Ready,
}

/// Request for the host to push a new URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub query: CatalogQuery,
    pub href: String,
}

impl Navigation {
    fn to(query: CatalogQuery) -> Self {
        let href = catalog_href(&query);
        Self { query, href }
    }
}

/// Request for the host to fetch one page of catalog data.
#[derive(Debug, Clone)]
pub struct FetchTicket {
    pub seq: u64,
    pub url: String,
    /// Cancelled as soon as a newer ticket supersedes this one.
    pub cancel: CancellationToken,
}

/// What the view should render right now.
#[derive(Debug, PartialEq, Eq)]
pub enum Display<'a> {
    Skeleton,
    Error(&'a str),
    Empty,
    Items(&'a CatalogPage),
}

/// "Showing X to Y of Z items" plus pager availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSummary {
    pub start: i64,
    pub end: i64,
    pub total: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PageSummary {
    /// Positions are 1-based; both are 0 when the page lies outside the
    /// filtered set (`page < 1` or past the last page).
    pub fn of(page: &CatalogPage) -> Self {
        let (start, end) = visible_range(page).unwrap_or((0, 0));
        let total_pages = i64::try_from(page.total_pages).unwrap_or(i64::MAX);
        Self {
            start,
            end,
            total: page.total,
            has_previous: page.page > 1,
            has_next: page.page >= 1 && page.page < total_pages,
        }
    }
}

fn visible_range(page: &CatalogPage) -> Option<(i64, i64)> {
    if page.page < 1 {
        return None;
    }
    let total = i64::try_from(page.total).ok()?;
    let size = page.page_size.max(1);
    let offset = (page.page - 1).checked_mul(size)?;
    if offset >= total {
        return None;
    }
    Some((offset + 1, offset.saturating_add(size).min(total)))
}

/// Controller behind the catalog search box, filters and pager.
///
/// `assets/catalog.js` runs the same machine in the browser; keep the two in
/// step when changing debounce, navigation or sequencing rules.
#[derive(Debug)]
pub struct CatalogController {
    query: CatalogQuery,
    search_draft: String,
    phase: ViewPhase,
    data: Option<CatalogPage>,
    debounce: Duration,
    last_seq: u64,
    in_flight: Option<CancellationToken>,
}

impl CatalogController {
    /// Start from the server-rendered state; the first page is already shown
    /// so nothing is fetched on mount.
    pub fn new(query: CatalogQuery, initial: Option<CatalogPage>, debounce: Duration) -> Self {
        let phase = if initial.is_some() {
            ViewPhase::Ready
        } else {
            ViewPhase::Idle
        };
        Self {
            search_draft: query.q.clone().unwrap_or_default(),
            query,
            phase,
            data: initial,
            debounce,
            last_seq: 0,
            in_flight: None,
        }
    }

    pub fn query(&self) -> &CatalogQuery {
        &self.query
    }

    pub fn phase(&self) -> &ViewPhase {
        &self.phase
    }

    pub fn search_draft(&self) -> &str {
        &self.search_draft
    }

    /// The search box changed.
    pub fn input_search(&mut self, text: impl Into<String>, now: Instant) {
        self.search_draft = text.into();
        if self.search_draft != self.query.q.as_deref().unwrap_or_default() {
            self.phase = ViewPhase::PendingDebounce {
                deadline: now + self.debounce,
            };
        } else if matches!(self.phase, ViewPhase::PendingDebounce { .. }) {
            self.phase = self.settled_phase();
        }
    }

    /// Fire the debounced search once its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<Navigation> {
        match self.phase {
            ViewPhase::PendingDebounce { deadline } if now >= deadline => {
                self.phase = self.settled_phase();
                let query = self
                    .query
                    .clone()
                    .search(self.search_draft.clone())
                    .paginate(1, self.query.page_size);
                Some(Navigation::to(query))
            }
            _ => None,
        }
    }

    pub fn set_status(&self, status: StatusFilter) -> Navigation {
        Navigation::to(self.first_page().status(status))
    }

    pub fn set_category(&self, category: CategoryFilter) -> Navigation {
        Navigation::to(self.first_page().category(category))
    }

    pub fn set_sort(&self, sort: CatalogSort) -> Navigation {
        Navigation::to(self.first_page().sort(sort))
    }

    pub fn set_page(&self, page: i64) -> Navigation {
        Navigation::to(self.query.clone().paginate(page, self.query.page_size))
    }

    pub fn set_page_size(&self, page_size: i64) -> Navigation {
        Navigation::to(self.query.clone().paginate(1, page_size))
    }

    /// The URL now reflects `query`. Returns a ticket when a fetch is needed.
    pub fn url_changed(&mut self, query: CatalogQuery) -> Option<FetchTicket> {
        if query == self.query && self.data.is_some() {
            return None;
        }
        if !matches!(self.phase, ViewPhase::PendingDebounce { .. }) {
            self.search_draft = query.q.clone().unwrap_or_default();
        }
        self.query = query;
        Some(self.dispatch())
    }

    /// Re-issue the current query after a failure.
    pub fn retry(&mut self) -> FetchTicket {
        self.dispatch()
    }

    /// Deliver the outcome of ticket `seq`.
    ///
    /// Returns `false` when the result is stale and was discarded.
    pub fn complete(&mut self, seq: u64, outcome: Result<CatalogPage, String>) -> bool {
        if seq != self.last_seq {
            log::debug!("Discarding stale catalog response {seq} (latest {})", self.last_seq);
            return false;
        }
        self.in_flight = None;
        match outcome {
            Ok(page) => {
                self.data = Some(page);
                self.phase = ViewPhase::Ready;
            }
            Err(message) => {
                self.phase = ViewPhase::Error { message };
            }
        }
        true
    }

    pub fn display(&self) -> Display<'_> {
        match (&self.phase, &self.data) {
            (ViewPhase::Fetching { .. }, _) | (ViewPhase::Idle, None) => Display::Skeleton,
            (ViewPhase::Error { message }, _) => Display::Error(message),
            (_, Some(page)) if page.is_empty() => Display::Empty,
            (_, Some(page)) => Display::Items(page),
            (_, None) => Display::Skeleton,
        }
    }

    pub fn summary(&self) -> Option<PageSummary> {
        self.data.as_ref().map(PageSummary::of)
    }

    fn first_page(&self) -> CatalogQuery {
        self.query.clone().paginate(1, self.query.page_size)
    }

    fn settled_phase(&self) -> ViewPhase {
        if self.last_seq > 0 && self.in_flight.is_some() {
            ViewPhase::Fetching { seq: self.last_seq }
        } else if self.data.is_some() {
            ViewPhase::Ready
        } else {
            ViewPhase::Idle
        }
    }

    fn dispatch(&mut self) -> FetchTicket {
        if let Some(previous) = self.in_flight.take() {
            previous.cancel();
        }
        self.last_seq += 1;
        let cancel = CancellationToken::new();
        self.in_flight = Some(cancel.clone());
        self.phase = ViewPhase::Fetching { seq: self.last_seq };
        FetchTicket {
            seq: self.last_seq,
            url: api_href(&self.query),
            cancel,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{CatalogStatus, Filter};

    fn page(page: i64, total: usize) -> CatalogPage {
        CatalogPage {
            items: vec![],
            page,
            page_size: 10,
            total,
            total_pages: total.div_ceil(10),
        }
    }

    fn controller() -> CatalogController {
        CatalogController::new(
            CatalogQuery::default(),
            Some(page(1, 100)),
            DEFAULT_SEARCH_DEBOUNCE,
        )
    }

    #[test]
    fn starts_ready_without_fetching() {
        let controller = controller();

        assert_eq!(controller.phase(), &ViewPhase::Ready);
    }

    #[test]
    fn debounce_coalesces_keystrokes() {
        let mut controller = controller();
        let t0 = Instant::now();

        controller.input_search("d", t0);
        controller.input_search("da", t0 + Duration::from_millis(100));
        controller.input_search("dark", t0 + Duration::from_millis(200));

        assert!(controller.poll(t0 + Duration::from_millis(500)).is_none());
        let navigation = controller
            .poll(t0 + Duration::from_millis(600))
            .expect("debounce elapsed");

        assert_eq!(navigation.query.q.as_deref(), Some("dark"));
        assert_eq!(navigation.query.page, 1);
        assert_eq!(navigation.href, "/dashboard/catalog?q=dark");
        assert!(controller.poll(t0 + Duration::from_secs(5)).is_none());
    }

    #[test]
    fn typing_back_to_current_value_cancels_debounce() {
        let mut controller = controller();
        let t0 = Instant::now();

        controller.input_search("x", t0);
        controller.input_search("", t0 + Duration::from_millis(50));

        assert_eq!(controller.phase(), &ViewPhase::Ready);
        assert!(controller.poll(t0 + Duration::from_secs(1)).is_none());
    }

    #[test]
    fn filter_changes_reset_to_first_page() {
        let mut controller = controller();
        controller.url_changed(CatalogQuery::default().paginate(4, 10));

        let navigation = controller.set_status(Filter::Only(CatalogStatus::Active));

        assert_eq!(navigation.query.page, 1);
        assert_eq!(navigation.href, "/dashboard/catalog?status=active");
        assert_eq!(controller.set_page(5).href, "/dashboard/catalog?page=5");
        assert_eq!(
            controller.set_page_size(20).href,
            "/dashboard/catalog?pageSize=20"
        );
    }

    #[test]
    fn stale_responses_are_discarded() {
        let mut controller = controller();

        let first = controller
            .url_changed(CatalogQuery::default().paginate(2, 10))
            .unwrap();
        let second = controller
            .url_changed(CatalogQuery::default().paginate(3, 10))
            .unwrap();

        assert!(second.seq > first.seq);
        assert!(first.cancel.is_cancelled());
        assert!(!second.cancel.is_cancelled());

        assert!(controller.complete(second.seq, Ok(page(3, 100))));
        assert!(!controller.complete(first.seq, Ok(page(2, 100))));

        assert_eq!(controller.summary().unwrap().start, 21);
    }

    #[test]
    fn unchanged_url_does_not_refetch() {
        let mut controller = controller();

        assert!(controller.url_changed(CatalogQuery::default()).is_none());
    }

    #[test]
    fn errors_can_be_retried() {
        let mut controller = controller();
        let ticket = controller
            .url_changed(CatalogQuery::default().search("x"))
            .unwrap();

        assert_eq!(controller.display(), Display::Skeleton);
        controller.complete(ticket.seq, Err("Failed to fetch catalog".into()));
        assert_eq!(controller.display(), Display::Error("Failed to fetch catalog"));

        let retry = controller.retry();
        assert!(retry.seq > ticket.seq);
        assert_eq!(retry.url, "/api/catalog?q=x");

        controller.complete(retry.seq, Ok(page(1, 0)));
        assert_eq!(controller.display(), Display::Empty);
    }

    #[test]
    fn summary_is_empty_outside_the_result_set() {
        let before = PageSummary::of(&page(-5, 100));
        assert_eq!((before.start, before.end), (0, 0));
        assert!(!before.has_previous);
        assert!(!before.has_next);

        let past = PageSummary::of(&page(11, 100));
        assert_eq!((past.start, past.end), (0, 0));
        assert!(past.has_previous);
        assert!(!past.has_next);

        let huge = PageSummary::of(&page(i64::MAX, 100));
        assert_eq!((huge.start, huge.end), (0, 0));

        let wide = PageSummary::of(&CatalogPage {
            page_size: i64::MAX,
            total_pages: 1,
            ..page(1, 100)
        });
        assert_eq!((wide.start, wide.end), (1, 100));

        let second_wide = PageSummary::of(&CatalogPage {
            page_size: i64::MAX,
            total_pages: 1,
            ..page(2, 100)
        });
        assert_eq!((second_wide.start, second_wide.end), (0, 0));
    }

    #[test]
    fn summarizes_pages() {
        let summary = PageSummary::of(&page(10, 95));

        assert_eq!((summary.start, summary.end, summary.total), (91, 95, 95));
        assert!(summary.has_previous);
        assert!(!summary.has_next);
    }
}
