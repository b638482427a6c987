use authgate::routes::{guard_target, LOGOUT_ROUTE};
use authgate::SessionObserver;
use leptos::*;
use leptos_meta::Title;
use leptos_router::A;

use crate::base::state::GlobalState;
use crate::components::Redirect;

#[component]
pub fn Home() -> impl IntoView {
    let state = use_context::<GlobalState>()
        .expect("state to have been provided");
    let auth = state.auth();
    let session = auth.session();

    let greeting = move || {
        session.with(|session| {
            let name = session
                .as_ref()
                .and_then(|s| s.email().map(String::from))
                .unwrap_or_else(|| "there".to_string());
            format!("Hello {}, you are now logged in.", name)
        })
    };

    view! {
        <Title text="Home"/>
        { move || match guard_target(auth.is_authenticated()) {
            Some(path) => view! { <Redirect path/> }.into_view(),
            None => view! {
                <div class="text-2xl font-bold pt-14 text-center">
                    {greeting}
                </div>
                <div class="text-center mt-6">
                    <A href=LOGOUT_ROUTE class="hover:underline font-bold text-indigo-600">
                        "Sign Out"
                    </A>
                </div>
            }.into_view(),
        }}
    }
}
