//! Age-group bar chart drawn as inline SVG.

use godoksa_app::views::ChartView;
use leptos::prelude::*;

use super::{Card, CardContent, CardHeader, CardTitle};

/// Static bar chart; one bar with a value and a category label per bracket.
#[component]
pub fn AgeGroupChart(chart: ChartView) -> impl IntoView {
    let title = chart.title;
    let fill = chart.fill;
    let view_box = chart.view_box().to_string();
    let bars = chart.bars().to_vec();

    view! {
        <Card>
            <CardHeader>
                <CardTitle>{title}</CardTitle>
            </CardHeader>
            <CardContent>
                <svg class="bar-chart" viewBox=view_box>
                    {bars
                        .into_iter()
                        .map(|bar| {
                            view! {
                                <g>
                                    <rect
                                        x=bar.x.to_string()
                                        y=bar.y.to_string()
                                        width=bar.width.to_string()
                                        height=bar.height.to_string()
                                        fill=fill
                                    ></rect>
                                    <text
                                        class="value-label"
                                        x=bar.value_label.x.to_string()
                                        y=bar.value_label.y.to_string()
                                        text-anchor="middle"
                                    >
                                        {bar.value_label.text}
                                    </text>
                                    <text
                                        class="category-label"
                                        x=bar.category_label.x.to_string()
                                        y=bar.category_label.y.to_string()
                                        text-anchor="middle"
                                    >
                                        {bar.category_label.text}
                                    </text>
                                </g>
                            }
                        })
                        .collect_view()}
                </svg>
            </CardContent>
        </Card>
    }
}
