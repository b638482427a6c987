use std::panic::{self, PanicInfo};

use authgate_web::app::App;
use leptos::{mount_to_body, view};

#[cfg(debug_assertions)]
const LOG_LEVEL: log::Level = log::Level::Debug;
#[cfg(not(debug_assertions))]
const LOG_LEVEL: log::Level = log::Level::Info;

fn panic_message(info: &PanicInfo) -> String {
    let payload = info.payload();
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}

fn log_panic(info: &PanicInfo) {
    // one console line per panic, no stack trace
    match info.location() {
        Some(location) => {
            log::error!("panic at {}: {}", location, panic_message(info))
        }
        None => log::error!("panic: {}", panic_message(info)),
    }
}

pub fn main() {
    _ = console_log::init_with_level(LOG_LEVEL);
    if cfg!(debug_assertions) {
        console_error_panic_hook::set_once();
    } else {
        panic::set_hook(Box::new(log_panic));
    }
    mount_to_body(|| view! { <App /> })
}
