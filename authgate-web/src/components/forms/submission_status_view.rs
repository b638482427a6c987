use leptos::*;

#[component]
pub fn SubmissionStatusView(
    submit_error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
       // provider text is shown as is
       { move || submit_error.get().map(|error| view! {
           <span class="text-red-600 font-bold">
               {error}
           </span>
       })}
    }
}
