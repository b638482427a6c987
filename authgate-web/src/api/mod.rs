mod browser_host;
mod fetch;

pub use browser_host::BrowserHost;
pub use fetch::FetchTransport;
