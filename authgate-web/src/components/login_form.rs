use authgate::routes::{redirect_target, REGISTER_ROUTE};
use authgate::{
    Credentials, FormError, Liveness, OAuthProvider, SessionObserver,
    SignInController, SubmitOutcome,
};
use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::*;
use leptos_router::A;
use log::debug;
use wasm_bindgen_futures::spawn_local;

use crate::base::state::GlobalState;
use crate::base::PhaseSignal;
use crate::components::buttons::{ButtonType, ClickButton, FormButton};
use crate::components::forms::{InputField, SubmissionStatusView};
use crate::components::icons::GoogleIcon;
use crate::components::Redirect;

/// Submission side of a sign-in or sign-up form: one guarded controller per
/// mounted form, torn down with it.
#[derive(Clone)]
pub struct AppLogin {
    controller: SignInController<PhaseSignal>,
    phase: PhaseSignal,
}

impl AppLogin {
    pub fn new(state: &GlobalState) -> Self {
        let phase = PhaseSignal::new();
        let liveness = Liveness::new();
        on_cleanup({
            let liveness = liveness.clone();
            move || liveness.dispose()
        });
        Self {
            controller: SignInController::new(state.client(), phase, liveness),
            phase,
        }
    }

    pub fn is_submitting(&self) -> Signal<bool> {
        self.phase.is_submitting()
    }

    pub fn validation_error(&self) -> Signal<Option<String>> {
        self.phase.error_message()
    }

    pub fn submit_password(
        &self,
        ev: SubmitEvent,
        email: String,
        password: String,
    ) {
        ev.prevent_default();
        let credentials = match Credentials::new(&email, &password) {
            Ok(credentials) => credentials,
            Err(err) => {
                self.controller.reject(&err);
                return;
            }
        };
        let controller = self.controller.clone();
        spawn_local(async move {
            let outcome =
                controller.sign_in_with_password(&credentials).await;
            log_outcome("password sign-in", outcome);
        });
    }

    pub fn submit_oauth(&self, ev: MouseEvent, provider: OAuthProvider) {
        ev.prevent_default();
        let controller = self.controller.clone();
        spawn_local(async move {
            let outcome = controller.sign_in_with_oauth(provider).await;
            log_outcome("oauth sign-in", outcome);
        });
    }

    pub fn submit_sign_up(&self, ev: SubmitEvent, credentials: Credentials) {
        ev.prevent_default();
        let controller = self.controller.clone();
        spawn_local(async move {
            let outcome = controller.sign_up_with_password(&credentials).await;
            log_outcome("sign-up", outcome);
        });
    }

    pub fn reject(&self, err: &FormError) {
        self.controller.reject(err);
    }

    /// Finishes an OAuth sign-in the provider just redirected back from.
    pub fn complete_pending_oauth(&self) {
        if !self.controller.client().has_pending_oauth() {
            return;
        }
        let controller = self.controller.clone();
        spawn_local(async move {
            let outcome = controller.complete_oauth_redirect().await;
            log_outcome("oauth completion", outcome);
        });
    }
}

fn log_outcome(action: &str, outcome: SubmitOutcome) {
    debug!("{} finished: {:?}", action, outcome);
}

#[component]
pub fn LoginForm() -> impl IntoView {
    let state = use_context::<GlobalState>()
        .expect("state to have been provided");
    let auth = state.auth();

    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());

    let app_login = AppLogin::new(&state);
    app_login.complete_pending_oauth();

    let is_submitting = app_login.is_submitting();
    let validation_error = app_login.validation_error();

    let on_submit = {
        let app_login = app_login.clone();
        move |ev: SubmitEvent| {
            app_login.submit_password(
                ev,
                email.get_untracked(),
                password.get_untracked(),
            )
        }
    };
    let on_google = move |ev: MouseEvent| {
        app_login.submit_oauth(ev, OAuthProvider::Google)
    };

    let login_button = FormButton::new(ButtonType::SignIn, None);
    let google_button = FormButton::new(ButtonType::Google, None);

    view! {
        <div>
            // form contents play no part in this
            { move || redirect_target(auth.is_authenticated())
                .map(|path| view! { <Redirect path/> })
            }
            <main class="flex items-center justify-center min-h-screen bg-cover bg-center bg-no-repeat">
                <div class="w-full max-w-md p-8 bg-white bg-opacity-90 rounded-lg shadow-lg">
                    <div class="text-center">
                        <h3 class="text-2xl font-bold text-gray-800">"Welcome Back!"</h3>
                        <p class="text-gray-500 mt-2 mb-6">"Sign in to continue"</p>
                    </div>
                    <form on:submit=on_submit class="space-y-5">
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
                            autocomplete="current-password"
                            placeholder="Enter Your Password"
                            value=password
                        />
                        <SubmissionStatusView submit_error=validation_error />
                        {login_button.into_view(is_submitting)}
                    </form>
                    <p class="text-center text-sm mt-4">
                        "Don't have an account? "
                        <A href=REGISTER_ROUTE class="hover:underline font-bold text-indigo-400">
                            "Sign Up"
                        </A>
                    </p>
                    <div class="flex items-center my-4">
                        <hr class="flex-grow border-gray-400"/>
                        <span class="mx-4 text-sm font-bold text-gray-400">"OR"</span>
                        <hr class="flex-grow border-gray-400"/>
                    </div>
                    <ClickButton
                        form_button=google_button
                        is_submitting
                        on_click=on_google
                        icon=view! { <GoogleIcon/> }.into_view()
                    />
                </div>
            </main>
        </div>
    }
}
