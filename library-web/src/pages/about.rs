//! About Page

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="page">
            <div class="card">
                <h1>"About LibraryHub"</h1>
                <p>
                    "LibraryHub connects readers with the libraries around them. Every
                    participating library keeps its own stock; LibraryHub shows you where a
                    book is available and lets you borrow it from the branch of your choice."
                </p>
                <h2>"Features"</h2>
                <ul>
                    <li>"Search across every participating library"</li>
                    <li>"Live availability per branch"</li>
                    <li>"Directions to each library"</li>
                    <li>"One-click borrowing"</li>
                </ul>
            </div>
        </section>
    }
}
