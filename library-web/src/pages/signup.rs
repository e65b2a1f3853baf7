//! Admin Signup Page

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use lib_client::state::signup::{submit_signup, SignupField, SignupOutcome, SignupState, SIGNUP_SUCCEEDED};
use lib_client::{client_config, ApiClient};

use crate::state::SignalCell;
use crate::utils::dom::{alert, navigate_full};

#[component]
pub fn SignupPage() -> impl IntoView {
    let form = RwSignal::new(SignupState::default());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let api = ApiClient::new(client_config());
        spawn_local(async move {
            match submit_signup(&api, &SignalCell(form)).await {
                SignupOutcome::Created => {
                    alert(SIGNUP_SUCCEEDED);
                    navigate_full(&client_config().admin_login_path);
                }
                SignupOutcome::Failed(message) => log::warn!("Signup rejected: {}", message),
                SignupOutcome::Discarded => {}
            }
        });
    };

    view! {
        <div class="signup-page">
            <div class="signup-card">
                <h2>"Create your account"</h2>
                <form class="signup-form" on:submit=on_submit>
                    {move || form.with(|f| f.error().map(str::to_string)).map(|error| view! {
                        <div class="form-error">{error}</div>
                    })}

                    <SignupInput form=form field=SignupField::LibraryName input_type="text" placeholder="Library Name"/>
                    <SignupInput form=form field=SignupField::Address input_type="text" placeholder="Library Address"/>
                    <SignupInput form=form field=SignupField::Email input_type="email" placeholder="Email address"/>
                    <SignupInput form=form field=SignupField::Password input_type="password" placeholder="Password"/>

                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled=move || form.with(|f| f.is_submitting())
                    >
                        {move || form.with(|f| f.submit_label())}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[component]
fn SignupInput(
    form: RwSignal<SignupState>,
    field: SignupField,
    input_type: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <input
            type=input_type
            class="form-input"
            placeholder=placeholder
            prop:value=move || form.with(|f| f.value(field).to_string())
            on:input=move |ev| {
                let value = event_target_value(&ev);
                form.update(|f| f.set_field(field, value));
            }
        />
    }
}
