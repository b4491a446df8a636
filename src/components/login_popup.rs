//! Login Popup Component
//!
//! Blocks the checklist until a known user logs in.

use leptos::prelude::*;

use crate::components::Popup;
use crate::context::use_app;

#[component]
pub fn LoginPopup() -> impl IntoView {
    let ctx = use_app();

    let (login, set_login) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match ctx.login(&login.get(), &password.get()) {
            Ok(()) => set_error.set(None),
            Err(e) => {
                log::info!("[LOGIN] rejected: {}", e);
                set_error.set(Some(e.to_string()));
            }
        }
    };

    view! {
        <Popup title="Login">
            <form id="login-form" autocomplete="off" on:submit=submit>
                <input
                    type="text"
                    id="login-user"
                    placeholder="Usuário"
                    required
                    prop:value=move || login.get()
                    on:input=move |ev| set_login.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    id="login-pass"
                    placeholder="Senha"
                    required
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <div class="comment-popup-actions">
                    <button type="submit" class="comment-popup-save">"Entrar"</button>
                </div>
                {move || error.get().map(|msg| view! { <div class="form-error">{msg}</div> })}
            </form>
        </Popup>
    }
}
