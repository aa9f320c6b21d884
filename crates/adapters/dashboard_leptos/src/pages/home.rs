use godoksa_app::inline_stats::InlineStats;
use godoksa_app::services::dashboard_service::{Dashboard, DashboardService};
use leptos::prelude::*;

use crate::components::{AgeGroupChart, KoreaMap, SolitudeCounter};

/// Dashboard page: counter and map side by side, chart underneath.
#[component]
pub fn Home() -> impl IntoView {
    match DashboardService::new(InlineStats).build() {
        Ok(dashboard) => {
            let Dashboard {
                title,
                counter,
                map,
                chart,
                footer,
            } = dashboard;

            view! {
                <div class="container">
                    <h1 class="page-title">{title}</h1>
                    <div class="dashboard-grid">
                        <div class="span-2">
                            <SolitudeCounter counter=counter/>
                        </div>
                        <div>
                            <KoreaMap map=map/>
                        </div>
                        <div class="span-3">
                            <AgeGroupChart chart=chart/>
                        </div>
                    </div>
                    <footer class="page-footer">
                        <p>{footer}</p>
                    </footer>
                </div>
            }
            .into_any()
        }
        Err(err) => {
            leptos::logging::error!("failed to build dashboard: {err:?}");
            view! { <p class="error">"Failed to load statistics: " {err.to_string()}</p> }
                .into_any()
        }
    }
}
