//! Comment Popup Component
//!
//! Comment thread of one item: reactions, replies and a box for a new comment.

use leptos::prelude::*;

use crate::components::{Popup, ReplyPopup};
use crate::context::use_app;
use crate::models::REACTIONS;

#[component]
pub fn CommentPopup(
    item_key: String,
    #[prop(into)] label: String,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_app();

    let key = StoredValue::new(item_key);
    let (draft, set_draft) = signal(String::new());
    let (replying_to, set_replying_to) = signal::<Option<usize>>(None);

    let send = move |_| {
        // Blank text is ignored and leaves the popup open
        if key.with_value(|k| ctx.add_comment(k, &draft.get())).is_ok() {
            set_draft.set(String::new());
            on_close.run(());
        }
    };

    let comment_list = move || {
        let comments = key.with_value(|k| ctx.comments(k));
        if comments.is_empty() {
            return view! { <div class="comment-item comment-empty">"Nenhum comentário ainda."</div> }.into_any();
        }
        comments
            .into_iter()
            .enumerate()
            .map(|(idx, comment)| {
                let reactions = REACTIONS
                    .iter()
                    .map(|reaction| {
                        let count = comment.reaction_count(reaction.label);
                        let label = reaction.label;
                        view! {
                            <button
                                class="reaction-btn"
                                title=label
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    key.with_value(|k| ctx.add_reaction(k, idx, label));
                                }
                            >
                                {reaction.icon} " "
                                <span>{if count > 0 { count.to_string() } else { String::new() }}</span>
                            </button>
                        }
                    })
                    .collect_view();

                let replies = comment
                    .replies
                    .iter()
                    .map(|reply| {
                        view! {
                            <div class="reply-item">
                                <b>{reply.author().to_string()} ":"</b> " " <span>{reply.text.clone()}</span>
                            </div>
                        }
                    })
                    .collect_view();

                view! {
                    <div class="comment-item">
                        <b>{comment.author().to_string()} ":"</b> " " <span>{comment.text.clone()}</span>
                        <div class="reactions">{reactions}</div>
                        <button
                            class="reply-btn"
                            title="Responder"
                            aria-label="Responder comentário"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                set_replying_to.set(Some(idx));
                            }
                        >
                            "↩"
                        </button>
                        <div class="reply-list">{replies}</div>
                    </div>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <Popup title=format!("Comentários para: {}", label) on_close=on_close>
            <div class="comment-list">{comment_list}</div>
            <textarea
                class="comment-popup-box"
                placeholder="Digite seu comentário..."
                prop:value=move || draft.get()
                on:input=move |ev| set_draft.set(event_target_value(&ev))
            ></textarea>
            <div class="comment-popup-actions">
                <button class="comment-popup-send" on:click=send>"Enviar"</button>
                <button class="comment-popup-close" on:click=move |_| on_close.run(())>"Fechar"</button>
            </div>
            {move || replying_to.get().map(|idx| view! {
                <ReplyPopup
                    item_key=key.get_value()
                    comment_index=idx
                    on_close=Callback::new(move |_| set_replying_to.set(None))
                />
            })}
        </Popup>
    }
}
