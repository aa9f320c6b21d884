use leptos::prelude::*;

mod components;
mod pages;

use pages::Home;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <main>
            <Home/>
        </main>
    }
}
