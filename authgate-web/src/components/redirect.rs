use leptos::*;
use leptos_router::{use_navigate, NavigateOptions};

/// Replaces the current history entry with `path`. Navigation stays inside
/// the router so in-memory state such as the session survives.
#[component]
pub fn Redirect(path: &'static str) -> impl IntoView {
    let navigate = use_navigate();
    // leave the current render pass before switching routes
    request_animation_frame(move || {
        navigate(
            path,
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        )
    });

    view! {
        <div>"Redirecting..."</div>
    }
}
