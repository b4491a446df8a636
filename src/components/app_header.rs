//! App Header Component
//!
//! Dark mode toggle and the profile dropdown (edit profile, logout).

use leptos::ev;
use leptos::prelude::*;

use crate::components::ProfileEditor;
use crate::context::use_app;

#[component]
pub fn AppHeader() -> impl IntoView {
    let ctx = use_app();

    let (dropdown_open, set_dropdown_open) = signal(false);
    let (editing_profile, set_editing_profile) = signal(false);

    // Any click outside the profile button closes the dropdown
    let listener = window_event_listener(ev::click, move |_| set_dropdown_open.set(false));
    on_cleanup(move || listener.remove());

    view! {
        <div id="app-header">
            <div class="header-right">
                <button
                    class="darkmode-btn"
                    id="darkmode-toggle"
                    title="Alternar modo escuro"
                    on:click=move |_| ctx.toggle_dark_mode()
                >
                    {move || if ctx.dark_mode() { "☀" } else { "☾" }}
                </button>
                <div class="profile-menu">
                    <button
                        class="profile-btn"
                        id="profile-btn"
                        title="Perfil"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_dropdown_open.update(|open| *open = !*open);
                        }
                    >
                        {move || ctx.current_user_name()} " ▾"
                    </button>
                    <Show when=move || dropdown_open.get()>
                        <div class="profile-dropdown" id="profile-dropdown">
                            <button id="edit-profile-btn" on:click=move |_| set_editing_profile.set(true)>
                                "Editar Perfil"
                            </button>
                            <button id="logout-btn" on:click=move |_| ctx.logout()>
                                "Sair"
                            </button>
                        </div>
                    </Show>
                </div>
            </div>
            <Show when=move || editing_profile.get()>
                <ProfileEditor on_close=Callback::new(move |_| set_editing_profile.set(false)) />
            </Show>
        </div>
    }
}
