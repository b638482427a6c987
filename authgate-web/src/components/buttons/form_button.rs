use leptos::*;

use super::button_type::ButtonType;

/// Submit button of a form. Disabled, greyed out and relabelled while the
/// form is submitting.
#[derive(Clone)]
pub struct FormButton {
    button_type: ButtonType,
    text: Option<String>,
}

impl FormButton {
    pub fn new(button_type: ButtonType, text: Option<&str>) -> Self {
        Self {
            button_type,
            text: text.map(|s| s.to_string()),
        }
    }

    pub fn text(&self, is_submitting: bool) -> String {
        if is_submitting {
            return self.button_type.busy_text().to_string();
        }
        self.text
            .clone()
            .unwrap_or_else(|| self.button_type.button_text().to_string())
    }

    pub fn button_class(&self, is_submitting: bool) -> String {
        self.button_type.button_class(is_submitting)
    }

    pub fn into_view(self, is_submitting: Signal<bool>) -> impl IntoView {
        let label = self.clone();
        view! {
            <button
                type="submit"
                class=move || self.button_class(is_submitting.get())
                prop:disabled=move || is_submitting.get()
            >
                {move || label.text(is_submitting.get())}
            </button>
        }
    }
}
