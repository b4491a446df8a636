//! Profile Editor Component
//!
//! Change display name and password after confirming the current password.

use leptos::prelude::*;

use crate::components::Popup;
use crate::context::use_app;

#[component]
pub fn ProfileEditor(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let ctx = use_app();

    let (name, set_name) = signal(ctx.current_user_name());
    let (current_password, set_current_password) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match ctx.update_profile(&name.get(), &current_password.get(), &new_password.get()) {
            Ok(()) => on_close.run(()),
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    view! {
        <Popup title="Editar Perfil" on_close=on_close>
            <form id="edit-profile-form" autocomplete="off" on:submit=submit>
                <label>"Nome"</label>
                <input
                    type="text"
                    id="edit-nome"
                    required
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <label>"Senha atual"</label>
                <input
                    type="password"
                    id="edit-senha-atual"
                    placeholder="Senha atual"
                    required
                    prop:value=move || current_password.get()
                    on:input=move |ev| set_current_password.set(event_target_value(&ev))
                />
                <label>"Nova senha"</label>
                <input
                    type="password"
                    id="edit-senha-nova"
                    placeholder="Nova senha"
                    prop:value=move || new_password.get()
                    on:input=move |ev| set_new_password.set(event_target_value(&ev))
                />
                <div class="comment-popup-actions">
                    <button type="submit" class="comment-popup-save">"Salvar"</button>
                    <button type="button" class="comment-popup-close" on:click=move |_| on_close.run(())>
                        "Fechar"
                    </button>
                </div>
                {move || error.get().map(|msg| view! { <div class="form-error">{msg}</div> })}
            </form>
        </Popup>
    }
}
