use authgate::routes::LOGIN_ROUTE;
use leptos::*;

use crate::base::state::GlobalState;
use crate::components::Redirect;

#[component]
pub fn Logout() -> impl IntoView {
    let state = use_context::<GlobalState>()
        .expect("state to have been provided");
    state.client().sign_out();

    view! { <Redirect path=LOGIN_ROUTE/> }
}
