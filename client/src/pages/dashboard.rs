//! Dashboard overview with placeholder summary cards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Index child of the guarded `/admin` route. Figures are static until the
//! console is wired to a data source.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct SummaryCard {
    title: &'static str,
    value: &'static str,
    caption: &'static str,
}

const SUMMARY_CARDS: &[SummaryCard] = &[
    SummaryCard { title: "Orders", value: "0", caption: "Awaiting data source" },
    SummaryCard { title: "Customers", value: "0", caption: "Awaiting data source" },
    SummaryCard { title: "Revenue", value: "0", caption: "Awaiting data source" },
    SummaryCard { title: "Open tickets", value: "0", caption: "Awaiting data source" },
];

fn welcome_line(name: Option<&str>) -> String {
    match name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => format!("Welcome back, {name}."),
        None => "Welcome back.".to_owned(),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let welcome = move || welcome_line(auth.get().user.as_ref().map(|u| u.name.as_str()));

    view! {
        <section class="dashboard-page">
            <h1 class="dashboard-page__title">"Dashboard"</h1>
            <p class="dashboard-page__welcome">{welcome}</p>
            <div class="dashboard-page__cards">
                {SUMMARY_CARDS
                    .iter()
                    .map(|card| {
                        view! {
                            <article class="summary-card">
                                <h2 class="summary-card__title">{card.title}</h2>
                                <p class="summary-card__value">{card.value}</p>
                                <p class="summary-card__caption">{card.caption}</p>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
