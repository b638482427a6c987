use authgate::identity::{PendingOAuth, RedirectHost};
use authgate::AuthError;
use log::warn;
use web_sys::{Location, Storage};

use super::fetch::js_message;
use crate::vars::PENDING_OAUTH_KEY;

/// [`RedirectHost`] over `window.location` and `sessionStorage`.
#[derive(Debug, Clone)]
pub struct BrowserHost {
    storage_key: String,
}

impl Default for BrowserHost {
    fn default() -> Self {
        Self::new(PENDING_OAUTH_KEY)
    }
}

impl BrowserHost {
    pub fn new(storage_key: &str) -> Self {
        Self {
            storage_key: storage_key.to_string(),
        }
    }

    fn location(&self) -> Result<Location, AuthError> {
        web_sys::window()
            .map(|window| window.location())
            .ok_or_else(|| AuthError::Redirect("No window available".into()))
    }

    fn storage(&self) -> Result<Storage, AuthError> {
        web_sys::window()
            .ok_or_else(|| AuthError::Redirect("No window available".into()))?
            .session_storage()
            .map_err(|e| AuthError::Redirect(js_message(&e)))?
            .ok_or_else(|| {
                AuthError::Redirect("Session storage unavailable".into())
            })
    }

    fn read_pending(&self) -> Option<String> {
        self.storage()
            .ok()
            .and_then(|storage| storage.get_item(&self.storage_key).ok())
            .flatten()
    }
}

impl RedirectHost for BrowserHost {
    fn origin(&self) -> Result<String, AuthError> {
        self.location()?
            .origin()
            .map_err(|e| AuthError::Redirect(js_message(&e)))
    }

    fn current_url(&self) -> Result<String, AuthError> {
        self.location()?
            .href()
            .map_err(|e| AuthError::Redirect(js_message(&e)))
    }

    fn redirect_to(&self, url: &str) -> Result<(), AuthError> {
        self.location()?
            .assign(url)
            .map_err(|e| AuthError::Redirect(js_message(&e)))
    }

    fn save_pending(&self, pending: &PendingOAuth) -> Result<(), AuthError> {
        let value = serde_json::to_string(pending)
            .map_err(|e| AuthError::Redirect(e.to_string()))?;
        self.storage()?
            .set_item(&self.storage_key, &value)
            .map_err(|e| AuthError::Redirect(js_message(&e)))
    }

    fn has_pending(&self) -> bool {
        self.read_pending().is_some()
    }

    fn take_pending(&self) -> Option<PendingOAuth> {
        let value = self.read_pending()?;
        if let Ok(storage) = self.storage() {
            if let Err(err) = storage.remove_item(&self.storage_key) {
                warn!("Error clearing pending sign-in: {}", js_message(&err));
            }
        }
        match serde_json::from_str(&value) {
            Ok(pending) => Some(pending),
            Err(err) => {
                warn!("Ignoring unreadable pending sign-in: {}", err);
                None
            }
        }
    }
}
