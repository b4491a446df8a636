//! Checklist Item Component
//!
//! One row: checkbox, label and the comment button.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::components::CommentPopup;
use crate::context::use_app;
use crate::filter::ItemRow;

/// How long the "pulse" class stays on a row after a toggle
const PULSE_MS: u32 = 500;

#[component]
pub fn ChecklistItem(row: ItemRow) -> impl IntoView {
    let ctx = use_app();

    let (pulsing, set_pulsing) = signal(false);
    let (comments_open, set_comments_open) = signal(false);

    let key = StoredValue::new(row.key.clone());
    let checked = move || key.with_value(|k| ctx.is_checked(k));
    let comment_count = move || key.with_value(|k| ctx.comments(k).len());

    let on_change = move |ev: web_sys::Event| {
        let value = event_target_checked(&ev);
        key.with_value(|k| ctx.set_checked(k, value));
        set_pulsing.set(true);
        Timeout::new(PULSE_MS, move || {
            let _ = set_pulsing.try_set(false);
        })
        .forget();
    };

    let row_class = move || {
        let mut class = String::from("checklist-item");
        if checked() {
            class.push_str(" checked");
        }
        if pulsing.get() {
            class.push_str(" pulse");
        }
        class
    };

    let label = row.label.clone();
    let popup_label = row.label.clone();

    view! {
        <div class=row_class>
            <input
                type="checkbox"
                id=row.key.clone()
                aria-label=row.label.clone()
                prop:checked=checked
                on:change=on_change
            />
            <label class="checklist-label" for=row.key.clone()>{label}</label>
            <button
                class="open-comment-btn"
                title="Ver/Adicionar comentários"
                aria-label=format!("Ver/Adicionar comentários para {}", row.label)
                on:click=move |_| set_comments_open.set(true)
            >
                "💬"
                {move || match comment_count() {
                    0 => String::new(),
                    n => format!(" {}", n),
                }}
            </button>
            <Show when=move || comments_open.get()>
                <CommentPopup
                    item_key=key.get_value()
                    label=popup_label.clone()
                    on_close=Callback::new(move |_| set_comments_open.set(false))
                />
            </Show>
        </div>
    }
}
