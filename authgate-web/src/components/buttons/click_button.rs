use leptos::ev::MouseEvent;
use leptos::*;

use super::FormButton;

#[component]
pub fn ClickButton<F>(
    form_button: FormButton,
    is_submitting: Signal<bool>,
    on_click: F,
    #[prop(optional)] icon: Option<View>,
) -> impl IntoView
where
    F: Fn(MouseEvent) + 'static,
{
    let label = form_button.clone();

    view! {
        <button
            type="button"
            class=move || form_button.button_class(is_submitting.get())
            prop:disabled=move || is_submitting.get()
            on:click=on_click
        >
            {icon}
            {move || label.text(is_submitting.get())}
        </button>
    }
}
