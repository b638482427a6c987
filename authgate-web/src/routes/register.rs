use leptos::*;
use leptos_meta::Title;

use crate::components::RegisterForm;

#[component]
pub fn Register() -> impl IntoView {
    view! {
        <Title text="Sign Up"/>
        <RegisterForm />
    }
}
