//! Shell-wide state, owned by the layout and shared with every widget under it.

use leptos::prelude::*;
use lib_client::state::{AccountPopupState, LibraryModalState, NavState, SearchState};
use lib_client::{client_config, ApiClient};

#[derive(Clone, Copy)]
pub struct AppContext {
    pub api: StoredValue<ApiClient>,
    pub search: RwSignal<SearchState>,
    pub modal: RwSignal<LibraryModalState>,
    pub account: RwSignal<AccountPopupState>,
    pub nav: RwSignal<NavState>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            api: StoredValue::new(ApiClient::new(client_config())),
            search: RwSignal::new(SearchState::default()),
            modal: RwSignal::new(LibraryModalState::default()),
            account: RwSignal::new(AccountPopupState::default()),
            nav: RwSignal::new(NavState::default()),
        }
    }

    /// Handle to the API client for use inside a spawned task.
    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }
}

pub fn provide_app_context() -> AppContext {
    let context = AppContext::new();
    provide_context(context);
    context
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
