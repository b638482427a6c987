use leptos::*;
use leptos_meta::Title;

use crate::components::LoginForm;

#[component]
pub fn Login() -> impl IntoView {
    view! {
        <Title text="Sign In"/>
        <LoginForm />
    }
}
