//! Reply Popup Component

use leptos::prelude::*;

use crate::components::Popup;
use crate::context::use_app;

/// Reply to comment `comment_index` of an item
#[component]
pub fn ReplyPopup(
    item_key: String,
    comment_index: usize,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_app();

    let key = StoredValue::new(item_key);
    let (draft, set_draft) = signal(String::new());

    let send = move |_| {
        if key.with_value(|k| ctx.add_reply(k, comment_index, &draft.get())).is_ok() {
            on_close.run(());
        }
    };

    view! {
        <Popup title="Responder comentário" on_close=on_close>
            <textarea
                class="comment-popup-box"
                placeholder="Digite sua resposta..."
                prop:value=move || draft.get()
                on:input=move |ev| set_draft.set(event_target_value(&ev))
            ></textarea>
            <div class="comment-popup-actions">
                <button class="comment-popup-send" on:click=send>"Responder"</button>
                <button class="comment-popup-close" on:click=move |_| on_close.run(())>"Fechar"</button>
            </div>
        </Popup>
    }
}
