//! # Book Search
//!
//! Debounced search-as-you-type. Every edit of the query bumps a generation
//! counter and hands out a [`SearchTicket`]; a ticket is only honoured while its
//! generation is still the latest, so a burst of keystrokes yields one request and
//! a slow response for an old query can never overwrite newer results.

use std::future::Future;

use shared::Book;

use crate::core::error::Result;
use crate::core::service::LibraryApi;
use crate::state::cell::StateCell;

/// Claim on one debounced search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    query: String,
}

impl SearchTicket {
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// What the view should do after the query changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchAction {
    /// Query is empty; results were cleared, nothing to fetch.
    Cleared,
    /// Wait out the quiet period, then run the ticket.
    Schedule(SearchTicket),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Applied { count: usize },
    Failed,
    Superseded,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    query: String,
    generation: u64,
    results: Vec<Book>,
    searching: bool,
}

impl SearchState {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[Book] {
        &self.results
    }

    pub fn is_searching(&self) -> bool {
        self.searching
    }

    /// The results panel shows only for a non-empty query with results.
    pub fn results_visible(&self) -> bool {
        !self.query.is_empty() && !self.results.is_empty()
    }

    pub fn set_query(&mut self, query: impl Into<String>) -> SearchAction {
        self.query = query.into();
        self.generation += 1;
        self.searching = false;

        if self.query.is_empty() {
            self.results.clear();
            return SearchAction::Cleared;
        }

        SearchAction::Schedule(SearchTicket {
            generation: self.generation,
            query: self.query.clone(),
        })
    }

    pub fn is_current(&self, ticket: &SearchTicket) -> bool {
        ticket.generation == self.generation && ticket.query == self.query
    }

    /// Mark the ticket's request as in flight. False if it was superseded while waiting.
    pub fn begin(&mut self, ticket: &SearchTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.searching = true;
        true
    }

    pub fn finish(&mut self, ticket: &SearchTicket, result: Result<Vec<Book>>) -> SearchOutcome {
        if !self.is_current(ticket) {
            return SearchOutcome::Superseded;
        }
        self.searching = false;

        match result {
            Ok(books) => {
                let count = books.len();
                self.results = books;
                SearchOutcome::Applied { count }
            }
            Err(e) => {
                tracing::warn!("Search for {:?} failed: {}", ticket.query, e);
                self.results.clear();
                SearchOutcome::Failed
            }
        }
    }
}

/// Wait for `quiet` (the debounce period), then run the ticket's search if it is
/// still the latest one.
pub async fn run_search<A, C, Q>(api: &A, cell: &C, ticket: SearchTicket, quiet: Q) -> SearchOutcome
where
    A: LibraryApi + ?Sized,
    C: StateCell<SearchState>,
    Q: Future<Output = ()>,
{
    quiet.await;

    if !cell.write(|state| state.begin(&ticket)).unwrap_or(false) {
        return SearchOutcome::Superseded;
    }

    tracing::debug!("Searching books for {:?}", ticket.query);
    let result = api.search_books(&ticket.query).await;

    cell.write(|state| state.finish(&ticket, result))
        .unwrap_or(SearchOutcome::Superseded)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use tokio::task::{spawn_local, JoinHandle, LocalSet};
    use tokio::time::sleep;

    use super::*;
    use crate::state::testing::MockApi;

    const QUIET: Duration = Duration::from_millis(300);

    fn type_query(
        api: &Rc<MockApi>,
        cell: &Rc<RefCell<SearchState>>,
        query: &str,
    ) -> Option<JoinHandle<SearchOutcome>> {
        match cell.write(|state| state.set_query(query)).unwrap() {
            SearchAction::Cleared => None,
            SearchAction::Schedule(ticket) => {
                let api = api.clone();
                let cell = cell.clone();
                Some(spawn_local(async move {
                    run_search(&*api, &cell, ticket, sleep(QUIET)).await
                }))
            }
        }
    }

    #[test]
    fn test_empty_query_clears_without_request() {
        let mut state = SearchState::default();
        state.results = vec![crate::state::testing::book("b1", "Dune")];
        state.query = "dune".to_string();

        assert_eq!(state.set_query(""), SearchAction::Cleared);
        assert!(state.results().is_empty());
        assert!(!state.results_visible());
    }

    #[test]
    fn test_stale_ticket_is_rejected() {
        let mut state = SearchState::default();
        let SearchAction::Schedule(first) = state.set_query("du") else {
            panic!("expected a ticket");
        };
        state.set_query("dune");

        assert!(!state.begin(&first));
        assert_eq!(state.finish(&first, Ok(Vec::new())), SearchOutcome::Superseded);
    }

    #[tokio::test(start_paused = true)]
    async fn test_keystroke_burst_sends_one_request() {
        let api = Rc::new(MockApi::new());
        let cell = Rc::new(RefCell::new(SearchState::default()));

        let outcomes = LocalSet::new()
            .run_until(async {
                let mut handles = Vec::new();
                for (i, query) in ["d", "du", "dun", "dune"].into_iter().enumerate() {
                    if i > 0 {
                        sleep(Duration::from_millis(100)).await;
                    }
                    handles.extend(type_query(&api, &cell, query));
                }

                let mut outcomes = Vec::new();
                for handle in handles {
                    outcomes.push(handle.await.unwrap());
                }
                outcomes
            })
            .await;

        assert_eq!(*api.search_calls.borrow(), vec!["dune".to_string()]);
        assert_eq!(outcomes.last(), Some(&SearchOutcome::Applied { count: 1 }));
        assert_eq!(cell.borrow().results()[0].title, "Results for dune");
        assert!(cell.borrow().results_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_pauses_longer_than_quiet_period_each_search() {
        let api = Rc::new(MockApi::new());
        let cell = Rc::new(RefCell::new(SearchState::default()));

        LocalSet::new()
            .run_until(async {
                let first = type_query(&api, &cell, "du").unwrap();
                sleep(Duration::from_millis(400)).await;
                let second = type_query(&api, &cell, "dune").unwrap();
                first.await.unwrap();
                second.await.unwrap();
            })
            .await;

        assert_eq!(
            *api.search_calls.borrow(),
            vec!["du".to_string(), "dune".to_string()]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_stale_response_is_discarded() {
        let api = Rc::new(MockApi::new());
        api.delay("slow", 1_000);
        let cell = Rc::new(RefCell::new(SearchState::default()));

        let (slow, fast) = LocalSet::new()
            .run_until(async {
                let slow = type_query(&api, &cell, "slow").unwrap();
                // let the first request leave before typing again
                sleep(Duration::from_millis(400)).await;
                let fast = type_query(&api, &cell, "fast").unwrap();
                (slow.await.unwrap(), fast.await.unwrap())
            })
            .await;

        assert_eq!(fast, SearchOutcome::Applied { count: 1 });
        assert_eq!(slow, SearchOutcome::Superseded);
        assert_eq!(cell.borrow().query(), "fast");
        assert_eq!(cell.borrow().results()[0].title, "Results for fast");
    }

    #[tokio::test(start_paused = true)]
    async fn test_clearing_query_cancels_pending_search() {
        let api = Rc::new(MockApi::new());
        let cell = Rc::new(RefCell::new(SearchState::default()));

        let outcome = LocalSet::new()
            .run_until(async {
                let pending = type_query(&api, &cell, "dune").unwrap();
                sleep(Duration::from_millis(50)).await;
                assert!(type_query(&api, &cell, "").is_none());
                pending.await.unwrap()
            })
            .await;

        assert_eq!(outcome, SearchOutcome::Superseded);
        assert!(api.search_calls.borrow().is_empty());
        assert!(cell.borrow().results().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_search_clears_results() {
        let api = Rc::new(MockApi::new());
        api.fail("broken");
        let cell = Rc::new(RefCell::new(SearchState::default()));

        let outcomes = LocalSet::new()
            .run_until(async {
                let ok = type_query(&api, &cell, "dune").unwrap().await.unwrap();
                let failed = type_query(&api, &cell, "broken").unwrap().await.unwrap();
                (ok, failed)
            })
            .await;

        assert_eq!(outcomes, (SearchOutcome::Applied { count: 1 }, SearchOutcome::Failed));
        assert!(cell.borrow().results().is_empty());
        assert!(!cell.borrow().is_searching());
    }
}
