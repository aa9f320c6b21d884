//! Card primitive — bordered container with header, title and content slots.

use godoksa_app::card::{CardSlot, slot_class};
use leptos::prelude::*;

/// Outer bordered container.
#[component]
pub fn Card(
    /// Classes appended to the default card styling.
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! { <div class=slot_class(CardSlot::Root, &class)>{children()}</div> }
}

/// Header band separated from the body by a rule.
#[component]
pub fn CardHeader(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <div class=slot_class(CardSlot::Header, &class)>{children()}</div> }
}

#[component]
pub fn CardTitle(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <h3 class=slot_class(CardSlot::Title, &class)>{children()}</h3> }
}

#[component]
pub fn CardContent(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <div class=slot_class(CardSlot::Content, &class)>{children()}</div> }
}
