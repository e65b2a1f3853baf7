//! Account popover

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use lib_client::client_config;
use lib_client::state::account::{display_value, load_account, logout};
use lib_client::state::Resource;

use crate::services::LocalStorageSession;
use crate::state::{use_app_context, SignalCell};
use crate::utils::constants::ACCOUNT_POPUP_CLASS;
use crate::utils::dom::{navigate_full, pointer_target};

#[component]
pub fn AccountPopup() -> impl IntoView {
    let ctx = use_app_context();
    let listener: StoredValue<Option<WindowListenerHandle>> = StoredValue::new(None);

    let remove_listener = move || {
        let mut handle = None;
        listener.update_value(|slot| handle = slot.take());
        if let Some(handle) = handle {
            handle.remove();
        }
    };

    // Outside-press listener lives only while the popover is open
    Effect::new(move |_| {
        if !ctx.account.with(|popup| popup.is_open()) {
            remove_listener();
            return;
        }
        if listener.with_value(Option::is_some) {
            return;
        }
        let handle = window_event_listener(ev::mousedown, move |ev| {
            let target = pointer_target(&ev);
            ctx.account.maybe_update(|popup| popup.pointer_down(target));
        });
        listener.set_value(Some(handle));
    });
    on_cleanup(remove_listener);

    let retry = move |_: ev::MouseEvent| {
        let Some(Some(ticket)) = ctx.account.try_update(|popup| popup.retry()) else {
            return;
        };
        let api = ctx.api();
        spawn_local(async move {
            load_account(&api, &SignalCell(ctx.account), ticket).await;
        });
    };

    let sign_out = move |_: ev::MouseEvent| {
        let api = ctx.api();
        spawn_local(async move {
            if !logout(&api, &LocalStorageSession).await {
                log::warn!("Backend did not confirm logout");
            }
            navigate_full(&client_config().login_path);
        });
    };

    view! {
        <Show when=move || ctx.account.with(|popup| popup.is_open())>
            <div class=ACCOUNT_POPUP_CLASS>
                <div class="account-popup-header">
                    <h3>"Account Information"</h3>
                </div>
                {move || match ctx.account.with(|popup| popup.info().clone()) {
                    Resource::Idle | Resource::Loading => view! {
                        <div class="account-popup-status">
                            <p>"Loading account info..."</p>
                        </div>
                    }
                    .into_any(),
                    Resource::Failed(message) => view! {
                        <div class="account-popup-status">
                            <p class="error">{message}</p>
                            <button class="btn btn-small" on:click=retry>"Retry"</button>
                        </div>
                    }
                    .into_any(),
                    Resource::Loaded(info) => view! {
                        <div class="account-popup-body">
                            <AccountField label="NAME" value=display_value(info.name.as_deref()).to_string()/>
                            <AccountField label="EDUCATION" value=display_value(info.education.as_deref()).to_string()/>
                            <AccountField label="EMAIL" value=display_value(info.email.as_deref()).to_string()/>
                        </div>
                    }
                    .into_any(),
                }}
                <div class="account-popup-footer">
                    <button class="btn btn-danger" on:click=sign_out>"Sign Out"</button>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn AccountField(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="account-field">
            <label>{label}</label>
            <p>{value}</p>
        </div>
    }
}
