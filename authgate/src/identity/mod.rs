//! Identity Toolkit REST client, the HTTP surface behind Firebase Auth.
//!
//! The client is transport agnostic: the browser build plugs in a `fetch`
//! based [`Transport`] and a `window` based [`RedirectHost`].

mod client;
mod endpoints;
mod host;
mod payload;
mod transport;

pub use client::IdentityToolkitClient;
pub(crate) use endpoints::parse_base_url;
pub use endpoints::{IdentityEndpoints, Method, DEFAULT_IDENTITY_BASE_URL};
pub use host::{PendingOAuth, RedirectHost};
pub use payload::provider_error_message;
pub use transport::{HttpResponse, Transport, TransportError};
