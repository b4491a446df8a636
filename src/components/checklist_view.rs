//! Checklist View Component
//!
//! Search box, clear/export actions and one card per category.

use leptos::prelude::*;

use crate::components::ChecklistItem;
use crate::context::use_app;
use crate::filter::visible_items;

#[component]
pub fn ChecklistView() -> impl IntoView {
    let ctx = use_app();
    let categories = StoredValue::new(ctx.categories());

    let views = move || categories.with_value(|cats| visible_items(cats, &ctx.search()));

    let reset = move |_| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message("Limpar todos os checks e comentários?").ok())
            .unwrap_or(false);
        if confirmed {
            log::info!("[CHECKLIST] clearing all state");
            ctx.reset();
        }
    };

    let export = move |_| {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.print() {
                log::error!("[CHECKLIST] print failed: {:?}", e);
            }
        }
    };

    view! {
        <div class="checklist-actions">
            <input
                type="search"
                id="search-box"
                placeholder="Buscar item..."
                aria-label="Buscar item"
                prop:value=move || ctx.search()
                on:input=move |ev| ctx.set_search(event_target_value(&ev))
            />
            <button id="reset-btn" on:click=reset>"Limpar"</button>
            <button id="export-btn" on:click=export>"Exportar"</button>
        </div>
        <Show
            when=move || categories.with_value(|cats| !cats.is_empty())
            fallback=|| view! { <p class="checklist-empty">"Nenhuma categoria configurada."</p> }
        >
            <For
                each=views
                key=|cat| (cat.name.clone(), cat.rows.iter().map(|r| r.key.clone()).collect::<Vec<_>>())
                children=move |cat| {
                    view! {
                        <div class="card">
                            <h2>{cat.name.clone()}</h2>
                            {cat.rows.into_iter().map(|row| view! { <ChecklistItem row=row /> }).collect_view()}
                        </div>
                    }
                }
            />
        </Show>
    }
}
