//! LibraryHub Web App - Leptos Frontend

use leptos::prelude::*;
use leptos_router::{
    components::{ParentRoute, Redirect, Route, Router, Routes, A},
    path,
};

use crate::components::LibraryLayout;
use crate::pages::{AboutPage, CatalogPage, HomePage, OrdersPage, SignupPage};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound/> }>
                <Route path=path!("/") view=|| view! { <Redirect path="/loginhome"/> }/>
                <Route path=path!("/adminsignup") view=SignupPage/>
                <ParentRoute path=path!("/loginhome") view=LibraryLayout>
                    <Route path=path!("") view=HomePage/>
                    <Route path=path!("catalog") view=CatalogPage/>
                    <Route path=path!("about") view=AboutPage/>
                    <Route path=path!("orders") view=OrdersPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <div class="card">
                <h1>"404 - Page Not Found"</h1>
                <p>"The page you're looking for doesn't exist."</p>
                <A href="/loginhome">
                    <span class="btn">"Go to Home"</span>
                </A>
            </div>
        </div>
    }
}
