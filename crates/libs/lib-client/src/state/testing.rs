//! In-memory [`LibraryApi`] for driver tests.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::time::Duration;

use async_trait::async_trait;
use shared::{AccountInfo, AdminSignupRequest, Book, BorrowRequest, LibraryAdmin, LibraryListing, Location};

use crate::core::error::{AppError, Result};
use crate::core::service::LibraryApi;

pub fn book(id: &str, title: &str) -> Book {
    Book {
        id: id.to_string(),
        title: title.to_string(),
        author: "Someone".to_string(),
        image: None,
    }
}

pub fn listing(id: &str, admin_id: &str) -> LibraryListing {
    LibraryListing {
        id: id.to_string(),
        admin: Some(LibraryAdmin {
            id: Some(admin_id.to_string()),
            library_name: Some(format!("Library {}", admin_id)),
            address: Some("1 Main St".to_string()),
        }),
        stock: Some(1),
    }
}

pub fn server_error(message: &str) -> AppError {
    AppError::Remote {
        status: 500,
        message: Some(message.to_string()),
    }
}

/// Records every call and answers from canned data. Calls keyed by a query or
/// title can be delayed to simulate slow responses.
pub struct MockApi {
    pub search_calls: RefCell<Vec<String>>,
    pub library_calls: RefCell<Vec<(String, Option<String>)>>,
    pub location_calls: RefCell<Vec<Vec<String>>>,
    pub borrow_calls: RefCell<Vec<(BorrowRequest, Option<String>)>>,
    pub signup_calls: RefCell<Vec<AdminSignupRequest>>,
    pub account_calls: Cell<usize>,
    pub logout_calls: Cell<usize>,

    pub delays: RefCell<HashMap<String, Duration>>,
    pub failing: RefCell<HashSet<String>>,
    pub libraries: RefCell<HashMap<String, Vec<LibraryListing>>>,
    pub locations_result: RefCell<Result<Vec<Location>>>,
    pub borrow_result: RefCell<Result<()>>,
    pub signup_result: RefCell<Result<u16>>,
    pub account_result: RefCell<Result<AccountInfo>>,
    pub logout_result: RefCell<Result<()>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self {
            search_calls: RefCell::new(Vec::new()),
            library_calls: RefCell::new(Vec::new()),
            location_calls: RefCell::new(Vec::new()),
            borrow_calls: RefCell::new(Vec::new()),
            signup_calls: RefCell::new(Vec::new()),
            account_calls: Cell::new(0),
            logout_calls: Cell::new(0),
            delays: RefCell::new(HashMap::new()),
            failing: RefCell::new(HashSet::new()),
            libraries: RefCell::new(HashMap::new()),
            locations_result: RefCell::new(Ok(Vec::new())),
            borrow_result: RefCell::new(Ok(())),
            signup_result: RefCell::new(Ok(201)),
            account_result: RefCell::new(Ok(AccountInfo {
                name: Some("Ada".to_string()),
                education: Some("BSc".to_string()),
                email: Some("ada@example.com".to_string()),
            })),
            logout_result: RefCell::new(Ok(())),
        }
    }

    pub fn delay(&self, key: &str, millis: u64) {
        self.delays.borrow_mut().insert(key.to_string(), Duration::from_millis(millis));
    }

    pub fn fail(&self, key: &str) {
        self.failing.borrow_mut().insert(key.to_string());
    }

    pub fn hold(&self, title: &str, listings: Vec<LibraryListing>) {
        self.libraries.borrow_mut().insert(title.to_string(), listings);
    }

    async fn pause(&self, key: &str) {
        let delay = self.delays.borrow().get(key).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }

    fn check(&self, key: &str) -> Result<()> {
        if self.failing.borrow().contains(key) {
            Err(server_error(&format!("{} failed", key)))
        } else {
            Ok(())
        }
    }
}

#[async_trait(?Send)]
impl LibraryApi for MockApi {
    async fn admin_signup(&self, request: &AdminSignupRequest) -> Result<u16> {
        self.signup_calls.borrow_mut().push(request.clone());
        self.pause("signup").await;
        self.signup_result.borrow().clone()
    }

    async fn search_books(&self, query: &str) -> Result<Vec<Book>> {
        self.search_calls.borrow_mut().push(query.to_string());
        self.pause(query).await;
        self.check(query)?;
        Ok(vec![book(&format!("{}-1", query), &format!("Results for {}", query))])
    }

    async fn libraries_for_book(&self, title: &str, token: Option<&str>) -> Result<Vec<LibraryListing>> {
        self.library_calls
            .borrow_mut()
            .push((title.to_string(), token.map(str::to_string)));
        self.pause(title).await;
        self.check(title)?;
        Ok(self.libraries.borrow().get(title).cloned().unwrap_or_default())
    }

    async fn locations(&self, admin_ids: &[String]) -> Result<Vec<Location>> {
        self.location_calls.borrow_mut().push(admin_ids.to_vec());
        self.pause("locations").await;
        self.locations_result.borrow().clone()
    }

    async fn borrow(&self, request: &BorrowRequest, token: Option<&str>) -> Result<()> {
        self.borrow_calls
            .borrow_mut()
            .push((request.clone(), token.map(str::to_string)));
        self.pause("borrow").await;
        self.borrow_result.borrow().clone()
    }

    async fn account_info(&self) -> Result<AccountInfo> {
        self.account_calls.set(self.account_calls.get() + 1);
        self.pause("account").await;
        self.account_result.borrow().clone()
    }

    async fn logout(&self) -> Result<()> {
        self.logout_calls.set(self.logout_calls.get() + 1);
        self.logout_result.borrow().clone()
    }
}
