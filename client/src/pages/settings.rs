//! Placeholder settings screen.

use leptos::prelude::*;

const SECTIONS: &[(&str, &str)] = &[
    ("General", "Store name, contact details and regional defaults will be managed here."),
    ("Notifications", "Choose which events notify administrators."),
    ("Security", "Session length and sign-in requirements for administrator accounts."),
];

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <section class="settings-page">
            <h1 class="settings-page__title">"Settings"</h1>
            <p class="settings-page__intro">"Configuration options are coming soon."</p>
            {SECTIONS
                .iter()
                .map(|(title, body)| {
                    view! {
                        <article class="settings-card">
                            <h2 class="settings-card__title">{*title}</h2>
                            <p class="settings-card__body">{*body}</p>
                        </article>
                    }
                })
                .collect::<Vec<_>>()}
            <button class="btn btn--primary settings-page__save" type="button">
                "Save changes"
            </button>
        </section>
    }
}
