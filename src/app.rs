//! Checklist App
//!
//! Login gate in front of the header and the checklist.

use leptos::prelude::*;

use crate::components::{AppHeader, ChecklistView, LoginPopup};
use crate::config::HostConfig;
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::init(HostConfig::from_window());

    // Provide context to all children
    provide_context(ctx);

    view! {
        <Show when=move || ctx.is_logged_in() fallback=|| view! { <LoginPopup /> }>
            <AppHeader />
            <main id="main-content">
                <ChecklistView />
            </main>
        </Show>
    }
}
