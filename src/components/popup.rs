//! Popup Component
//!
//! Modal shell shared by the login, profile, comment and reply dialogs.

use leptos::prelude::*;

/// Modal with a dimmed background. Clicking the background closes it
/// unless `on_close` is `None` (the login gate cannot be dismissed).
#[component]
pub fn Popup(
    #[prop(into)] title: String,
    #[prop(optional)] on_close: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="comment-popup">
            <div
                class="comment-popup-bg"
                on:click=move |_| {
                    if let Some(close) = on_close {
                        close.run(());
                    }
                }
            ></div>
            <div class="comment-popup-content">
                <h3>{title}</h3>
                {children()}
            </div>
        </div>
    }
}
