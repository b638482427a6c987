use std::rc::Rc;

use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::endpoints::{IdentityEndpoints, Method};
use super::host::{PendingOAuth, RedirectHost};
use super::payload::{
    provider_error_message, CreateAuthUriRequest, CreateAuthUriResponse,
    PasswordRequest, SignInWithIdpRequest, TokenResponse,
    PASSWORD_PROVIDER_ID,
};
use super::transport::Transport;
use crate::client::{AuthClient, AuthResult, OAuthProvider};
use crate::error::AuthError;
use crate::session::SessionSink;

/// [`AuthClient`] backed by the Identity Toolkit REST API.
pub struct IdentityToolkitClient {
    endpoints: IdentityEndpoints,
    transport: Rc<dyn Transport>,
    host: Rc<dyn RedirectHost>,
    sink: Rc<dyn SessionSink>,
    continue_url: Option<String>,
    login_route: String,
}

impl IdentityToolkitClient {
    pub fn new(
        endpoints: IdentityEndpoints,
        transport: Rc<dyn Transport>,
        host: Rc<dyn RedirectHost>,
        sink: Rc<dyn SessionSink>,
    ) -> Self {
        Self {
            endpoints,
            transport,
            host,
            sink,
            continue_url: None,
            login_route: crate::routes::LOGIN_ROUTE.to_string(),
        }
    }

    /// Fixed URL the provider sends the browser back to. Defaults to the
    /// login route on the current origin.
    pub fn with_continue_url(mut self, continue_url: Option<String>) -> Self {
        self.continue_url = continue_url;
        self
    }

    fn continue_url(&self) -> Result<String, AuthError> {
        match &self.continue_url {
            Some(url) => Ok(url.clone()),
            None => Ok(format!("{}{}", self.host.origin()?, self.login_route)),
        }
    }

    async fn post<Req, Resp>(
        &self,
        method: Method,
        request: &Req,
    ) -> Result<Resp, AuthError>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        let url = self.endpoints.url(method)?;
        let body = serde_json::to_string(request)
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        // url carries the api key, log the method only
        debug!("POST {}", method);
        let response = self.transport.post_json(&url, body).await?;
        if !response.is_success() {
            return Err(AuthError::Provider(provider_error_message(
                response.status_code(),
                response.body(),
            )));
        }
        serde_json::from_slice(response.body()).map_err(|e| {
            AuthError::Transport(format!("Unexpected response: {}", e))
        })
    }

    async fn password_call(
        &self,
        method: Method,
        email: &str,
        password: &str,
    ) -> Result<(), AuthError> {
        let request = PasswordRequest {
            email,
            password,
            return_secure_token: true,
        };
        let response: TokenResponse = self.post(method, &request).await?;
        let session = response.into_session(PASSWORD_PROVIDER_ID)?;
        info!("Signed in user {}", session.user_id());
        self.sink.publish(Some(session));
        Ok(())
    }

    async fn start_oauth(
        &self,
        provider: OAuthProvider,
    ) -> Result<(), AuthError> {
        let continue_uri = self.continue_url()?;
        let request = CreateAuthUriRequest {
            provider_id: provider.provider_id(),
            continue_uri: &continue_uri,
        };
        let response: CreateAuthUriResponse =
            self.post(Method::CreateAuthUri, &request).await?;

        self.host.save_pending(&PendingOAuth::new(
            provider.provider_id(),
            &response.session_id,
        ))?;
        info!("Redirecting to {} for sign-in", provider);
        self.host.redirect_to(&response.auth_uri)
    }

    async fn finish_oauth(&self) -> Result<(), AuthError> {
        let Some(pending) = self.host.take_pending() else {
            return Ok(());
        };
        let request_uri = self.host.current_url()?;
        let request = SignInWithIdpRequest {
            request_uri: &request_uri,
            session_id: pending.session_id(),
            return_secure_token: true,
            return_idp_credential: true,
        };
        let response: TokenResponse =
            self.post(Method::SignInWithIdp, &request).await?;
        let session = response.into_session(pending.provider_id())?;
        info!(
            "Signed in user {} via {}",
            session.user_id(),
            session.provider_id()
        );
        self.sink.publish(Some(session));
        Ok(())
    }
}

impl AuthClient for IdentityToolkitClient {
    fn sign_in_with_password<'a>(
        &'a self,
        email: &'a str,
        password: &'a str,
    ) -> AuthResult<'a> {
        Box::pin(self.password_call(
            Method::SignInWithPassword,
            email,
            password,
        ))
    }

    fn sign_in_with_oauth(&self, provider: OAuthProvider) -> AuthResult<'_> {
        Box::pin(self.start_oauth(provider))
    }

    fn complete_oauth_redirect(&self) -> AuthResult<'_> {
        Box::pin(self.finish_oauth())
    }

    fn has_pending_oauth(&self) -> bool {
        self.host.has_pending()
    }

    fn sign_up_with_password<'a>(
        &'a self,
        email: &'a str,
        password: &'a str,
    ) -> AuthResult<'a> {
        Box::pin(self.password_call(Method::SignUp, email, password))
    }

    fn sign_out(&self) {
        info!("Signing out");
        self.sink.publish(None);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use futures::executor::block_on;
    use futures::future::LocalBoxFuture;

    use super::*;
    use crate::identity::endpoints::DEFAULT_IDENTITY_BASE_URL;
    use crate::identity::transport::{HttpResponse, TransportError};
    use crate::session::{SessionCell, SessionObserver};

    #[derive(Default)]
    struct FakeTransport {
        requests: RefCell<Vec<(String, serde_json::Value)>>,
        responses: RefCell<VecDeque<Result<HttpResponse, TransportError>>>,
    }

    impl FakeTransport {
        fn reply(&self, status_code: u16, body: &str) {
            self.responses.borrow_mut().push_back(Ok(HttpResponse::new(
                status_code,
                body.as_bytes().to_vec(),
            )));
        }

        fn fail(&self, error: TransportError) {
            self.responses.borrow_mut().push_back(Err(error));
        }

        fn request(&self, index: usize) -> (String, serde_json::Value) {
            self.requests.borrow()[index].clone()
        }
    }

    impl Transport for FakeTransport {
        fn post_json<'a>(
            &'a self,
            url: &'a str,
            body: String,
        ) -> LocalBoxFuture<'a, Result<HttpResponse, TransportError>> {
            let value = serde_json::from_str(&body).unwrap();
            self.requests.borrow_mut().push((url.to_string(), value));
            let response =
                self.responses.borrow_mut().pop_front().unwrap_or_else(|| {
                    Err(TransportError::Other("no response".to_string()))
                });
            Box::pin(async move { response })
        }
    }

    #[derive(Default)]
    struct FakeHost {
        pending: RefCell<Option<PendingOAuth>>,
        redirected_to: RefCell<Option<String>>,
        current_url: String,
    }

    impl RedirectHost for FakeHost {
        fn origin(&self) -> Result<String, AuthError> {
            Ok("https://app.example.com".to_string())
        }

        fn current_url(&self) -> Result<String, AuthError> {
            Ok(self.current_url.clone())
        }

        fn redirect_to(&self, url: &str) -> Result<(), AuthError> {
            *self.redirected_to.borrow_mut() = Some(url.to_string());
            Ok(())
        }

        fn save_pending(
            &self,
            pending: &PendingOAuth,
        ) -> Result<(), AuthError> {
            *self.pending.borrow_mut() = Some(pending.clone());
            Ok(())
        }

        fn has_pending(&self) -> bool {
            self.pending.borrow().is_some()
        }

        fn take_pending(&self) -> Option<PendingOAuth> {
            self.pending.borrow_mut().take()
        }
    }

    struct Fixture {
        transport: Rc<FakeTransport>,
        host: Rc<FakeHost>,
        session: SessionCell,
        client: IdentityToolkitClient,
    }

    fn fixture(host: FakeHost) -> Fixture {
        let transport = Rc::new(FakeTransport::default());
        let host = Rc::new(host);
        let session = SessionCell::new();
        let endpoints =
            IdentityEndpoints::new(DEFAULT_IDENTITY_BASE_URL, "test-key")
                .unwrap();
        let client = IdentityToolkitClient::new(
            endpoints,
            transport.clone(),
            host.clone(),
            Rc::new(session.clone()),
        );
        Fixture {
            transport,
            host,
            session,
            client,
        }
    }

    const TOKEN_BODY: &str = r#"{
        "localId": "uid-1",
        "email": "ada@example.com",
        "idToken": "id-token",
        "refreshToken": "refresh-token",
        "expiresIn": "3600"
    }"#;

    #[test]
    fn test_password_sign_in_publishes_session() {
        let f = fixture(FakeHost::default());
        f.transport.reply(200, TOKEN_BODY);

        block_on(f.client.sign_in_with_password("ada@example.com", "secret"))
            .unwrap();

        assert!(f.session.is_authenticated());
        let (url, body) = f.transport.request(0);
        assert!(url.contains("accounts:signInWithPassword?key=test-key"));
        assert_eq!(body["email"], "ada@example.com");
        assert_eq!(body["password"], "secret");
        assert_eq!(body["returnSecureToken"], true);
    }

    #[test]
    fn test_password_rejection_keeps_provider_text() {
        let f = fixture(FakeHost::default());
        f.transport
            .reply(400, r#"{"error":{"code":400,"message":"INVALID_CREDENTIALS"}}"#);

        let err = block_on(f.client.sign_in_with_password("a@b.c", "nope"))
            .unwrap_err();

        assert_eq!(err, AuthError::Provider("INVALID_CREDENTIALS".to_string()));
        assert!(!f.session.is_authenticated());
    }

    #[test]
    fn test_transport_failure_is_an_auth_error() {
        let f = fixture(FakeHost::default());
        f.transport
            .fail(TransportError::ConnectionError("offline".to_string()));

        let err = block_on(f.client.sign_in_with_password("a@b.c", "pw"))
            .unwrap_err();

        assert_eq!(err.message(), "ConnectionError: offline");
    }

    #[test]
    fn test_sign_up_uses_sign_up_endpoint() {
        let f = fixture(FakeHost::default());
        f.transport.reply(200, TOKEN_BODY);

        block_on(f.client.sign_up_with_password("ada@example.com", "secret"))
            .unwrap();

        assert!(f.transport.request(0).0.contains("accounts:signUp?"));
        assert!(f.session.is_authenticated());
    }

    #[test]
    fn test_oauth_start_saves_pending_and_redirects() {
        let f = fixture(FakeHost::default());
        f.transport.reply(
            200,
            r#"{"authUri":"https://accounts.google.com/o/oauth2/auth?x=1",
                "sessionId":"session-123"}"#,
        );

        block_on(f.client.sign_in_with_oauth(OAuthProvider::Google)).unwrap();

        let (_, body) = f.transport.request(0);
        assert_eq!(body["providerId"], "google.com");
        assert_eq!(body["continueUri"], "https://app.example.com/login");
        assert_eq!(
            f.host.redirected_to.borrow().as_deref(),
            Some("https://accounts.google.com/o/oauth2/auth?x=1")
        );
        assert!(f.client.has_pending_oauth());
        assert!(!f.session.is_authenticated());
    }

    #[test]
    fn test_oauth_start_honours_continue_url() {
        let mut f = fixture(FakeHost::default());
        f.client = f
            .client
            .with_continue_url(Some("https://login.example.com/".into()));
        f.transport
            .reply(200, r#"{"authUri":"https://g.example","sessionId":"s"}"#);

        block_on(f.client.sign_in_with_oauth(OAuthProvider::Google)).unwrap();

        assert_eq!(
            f.transport.request(0).1["continueUri"],
            "https://login.example.com/"
        );
    }

    #[test]
    fn test_oauth_completion_consumes_pending() {
        let host = FakeHost {
            current_url: "https://app.example.com/login?code=abc&state=xyz"
                .to_string(),
            ..FakeHost::default()
        };
        *host.pending.borrow_mut() =
            Some(PendingOAuth::new("google.com", "session-123"));
        let f = fixture(host);
        f.transport.reply(
            200,
            r#"{"localId":"uid-2","email":"grace@example.com",
                "idToken":"t","refreshToken":"r","expiresIn":"3600",
                "providerId":"google.com"}"#,
        );

        block_on(f.client.complete_oauth_redirect()).unwrap();

        let (url, body) = f.transport.request(0);
        assert!(url.contains("accounts:signInWithIdp"));
        assert_eq!(
            body["requestUri"],
            "https://app.example.com/login?code=abc&state=xyz"
        );
        assert_eq!(body["sessionId"], "session-123");
        assert!(!f.client.has_pending_oauth());
        assert_eq!(
            f.session.current().map(|s| s.provider_id().to_string()),
            Some("google.com".to_string())
        );
    }

    #[test]
    fn test_oauth_completion_without_pending_is_noop() {
        let f = fixture(FakeHost::default());

        block_on(f.client.complete_oauth_redirect()).unwrap();

        assert!(f.transport.requests.borrow().is_empty());
    }

    #[test]
    fn test_failed_completion_is_not_retried() {
        let host = FakeHost::default();
        *host.pending.borrow_mut() = Some(PendingOAuth::new("google.com", "s"));
        let f = fixture(host);
        f.transport
            .reply(400, r#"{"error":{"message":"INVALID_IDP_RESPONSE"}}"#);

        let err = block_on(f.client.complete_oauth_redirect()).unwrap_err();

        assert_eq!(err.message(), "INVALID_IDP_RESPONSE");
        assert!(!f.host.has_pending());
    }

    #[test]
    fn test_completion_error_with_ok_status_is_verbatim() {
        let host = FakeHost::default();
        *host.pending.borrow_mut() = Some(PendingOAuth::new("google.com", "s"));
        let f = fixture(host);
        f.transport.reply(
            200,
            r#"{"errorMessage":"FEDERATED_USER_ID_ALREADY_LINKED",
                "providerId":"google.com"}"#,
        );

        let err = block_on(f.client.complete_oauth_redirect()).unwrap_err();

        assert_eq!(err.message(), "FEDERATED_USER_ID_ALREADY_LINKED");
        assert!(!f.session.is_authenticated());
    }

    #[test]
    fn test_sign_out_clears_session() {
        let f = fixture(FakeHost::default());
        f.transport.reply(200, TOKEN_BODY);
        block_on(f.client.sign_in_with_password("a@b.c", "pw")).unwrap();

        f.client.sign_out();

        assert!(!f.session.is_authenticated());
    }
}
