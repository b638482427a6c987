use authgate::routes::{HOME_ROUTE, LOGIN_ROUTE, LOGOUT_ROUTE, REGISTER_ROUTE};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::base::state::GlobalState;
use crate::components::Redirect;
use crate::routes::{Home, Login, Logout, Register};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(GlobalState::new());

    view! {
        <Stylesheet id="authgate" href="/pkg/tailwind.css"/>
        <Link rel="shortcut icon" type_="image/ico" href="/favicon.ico"/>
        <Router fallback=|| view! { <Redirect path=LOGIN_ROUTE/> }.into_view()>
            <main>
                <Routes>
                    // serve the login form directly on first page load
                    <Route path="/" view=Login/>
                    <Route path=LOGIN_ROUTE view=Login/>
                    <Route path=REGISTER_ROUTE view=Register/>
                    <Route path=HOME_ROUTE view=Home/>
                    <Route path=LOGOUT_ROUTE view=Logout/>
                </Routes>
            </main>
        </Router>
    }
}
