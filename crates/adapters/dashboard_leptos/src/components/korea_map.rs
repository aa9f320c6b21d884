//! Regional map card with clickable markers and a detail panel.

use godoksa_app::card::CardSlot;
use godoksa_app::views::MapView;
use leptos::prelude::*;

use super::{Card, CardContent, CardHeader, CardTitle};

/// Map of region markers colored by tier.
///
/// Clicking a marker selects its region and shows the detail panel below the
/// canvas. There is no deselect; a later click replaces the panel.
#[component]
pub fn KoreaMap(map: MapView) -> impl IntoView {
    let root_class = map.card.extra(CardSlot::Root).to_string();
    let content_class = map.card.extra(CardSlot::Content).to_string();
    let title = map.title;
    let markers = map.markers().to_vec();
    let map = RwSignal::new(map);

    view! {
        <Card class=root_class>
            <CardHeader>
                <CardTitle>{title}</CardTitle>
            </CardHeader>
            <CardContent class=content_class>
                <div class="map-canvas">
                    {markers
                        .into_iter()
                        .map(|marker| {
                            let region = marker.region;
                            let (class, style, label) =
                                (marker.class(), marker.style(), marker.label);
                            view! {
                                <button
                                    class=class
                                    style=style
                                    title=marker.name
                                    on:click=move |_| map.update(|m| m.select(region))
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                {move || {
                    map.with(MapView::detail)
                        .map(|detail| {
                            let class = detail.class();
                            view! {
                                <div class=class>
                                    <h3>{detail.heading}</h3>
                                    <p>{detail.count_text}</p>
                                </div>
                            }
                        })
                }}
            </CardContent>
        </Card>
    }
}
