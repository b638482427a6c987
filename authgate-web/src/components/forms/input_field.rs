use leptos::*;

/// Labelled, required text input bound to a string signal.
#[component]
pub fn InputField(
    label: &'static str,
    input_type: &'static str,
    autocomplete: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label class="text-sm text-gray-400 font-bold">{label}</label>
            <input
                type=input_type
                autocomplete=autocomplete
                required=true
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                class="w-full mt-2 px-3 py-2 text-gray-700 bg-white outline-none border focus:border-indigo-600 shadow-sm rounded-lg transition duration-300"
            />
        </div>
    }
}
