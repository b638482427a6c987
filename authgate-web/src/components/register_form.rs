use authgate::routes::{redirect_target, LOGIN_ROUTE};
use authgate::{Credentials, SessionObserver};
use leptos::ev::SubmitEvent;
use leptos::*;
use leptos_router::A;

use super::login_form::AppLogin;
use crate::base::state::GlobalState;
use crate::components::buttons::{ButtonType, FormButton};
use crate::components::forms::{InputField, SubmissionStatusView};
use crate::components::Redirect;

#[component]
pub fn RegisterForm() -> impl IntoView {
    let state = use_context::<GlobalState>()
        .expect("state to have been provided");
    let auth = state.auth();

    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let confirmation = create_rw_signal(String::new());

    let app_login = AppLogin::new(&state);
    let is_submitting = app_login.is_submitting();
    let validation_error = app_login.validation_error();

    let on_submit = move |ev: SubmitEvent| {
        match Credentials::with_confirmation(
            &email.get_untracked(),
            &password.get_untracked(),
            &confirmation.get_untracked(),
        ) {
            Ok(credentials) => app_login.submit_sign_up(ev, credentials),
            Err(err) => {
                ev.prevent_default();
                app_login.reject(&err);
            }
        }
    };

    let sign_up_button = FormButton::new(ButtonType::SignUp, None);

    view! {
        <div>
            { move || redirect_target(auth.is_authenticated())
                .map(|path| view! { <Redirect path/> })
            }
            <main class="flex items-center justify-center min-h-screen">
                <div class="w-full max-w-md p-8 bg-white bg-opacity-90 rounded-lg shadow-lg">
                    <div class="text-center mb-6">
                        <h3 class="text-2xl font-bold text-gray-800">"Create a New Account"</h3>
                    </div>
                    <form on:submit=on_submit class="space-y-4">
                        <InputField
                            label="Email"
                            input_type="email"
                            autocomplete="email"
                            placeholder="Enter Your Email"
                            value=email
                        />
                        <InputField
                            label="Password"
                            input_type="password"
                            autocomplete="new-password"
                            placeholder="Choose a Password"
                            value=password
                        />
                        <InputField
                            label="Confirm Password"
                            input_type="password"
                            autocomplete="off"
                            placeholder="Repeat the Password"
                            value=confirmation
                        />
                        <SubmissionStatusView submit_error=validation_error />
                        {sign_up_button.into_view(is_submitting)}
                    </form>
                    <p class="text-center text-sm mt-4">
                        "Already have an account? "
                        <A href=LOGIN_ROUTE class="hover:underline font-bold text-indigo-400">
                            "Sign In"
                        </A>
                    </p>
                </div>
            </main>
        </div>
    }
}
