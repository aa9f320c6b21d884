//! Headline counter card.

use godoksa_app::card::CardSlot;
use godoksa_app::views::CounterView;
use leptos::prelude::*;

use super::{Card, CardContent, CardHeader, CardTitle};

/// Card showing the headline solitary-death count.
///
/// The count lives in a signal so a future live feed can call
/// [`CounterView::set_value`] through it; nothing does today.
#[component]
pub fn SolitudeCounter(counter: CounterView) -> impl IntoView {
    let root_class = counter.card.extra(CardSlot::Root).to_string();
    let title_class = counter.card.extra(CardSlot::Title).to_string();
    let title = counter.title;
    let basis = counter.basis.clone();
    let counter = RwSignal::new(counter);

    view! {
        <Card class=root_class>
            <CardHeader>
                <CardTitle class=title_class>
                    <span>{title}</span>
                    <span class="card-caption">{basis}</span>
                </CardTitle>
            </CardHeader>
            <CardContent>
                <div class="counter-value">{move || counter.with(CounterView::display)}</div>
            </CardContent>
        </Card>
    }
}
