use authgate::identity::{HttpResponse, Transport, TransportError};
use futures::future::LocalBoxFuture;
use log::debug;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

/// [`Transport`] over the browser `fetch` API.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: String,
    ) -> LocalBoxFuture<'a, Result<HttpResponse, TransportError>> {
        Box::pin(http_post_json(url, body))
    }
}

async fn http_post_json(
    url: &str,
    body: String,
) -> Result<HttpResponse, TransportError> {
    let window = web_sys::window().ok_or_else(|| {
        TransportError::Other("No window available".to_string())
    })?;

    let headers = Headers::new().map_err(js_other)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(js_other)?;

    let request_init = RequestInit::new();
    request_init.set_method("POST");
    request_init.set_mode(RequestMode::Cors);
    request_init.set_headers(&headers);
    request_init.set_body(&JsValue::from_str(&body));

    let request =
        Request::new_with_str_and_init(url, &request_init).map_err(js_other)?;

    // fetch only rejects when no response came back at all
    let response_js = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| TransportError::ConnectionError(js_message(&e)))?;
    let response: Response = response_js.dyn_into().map_err(js_other)?;

    let status = response.status();
    let text_js = JsFuture::from(response.text().map_err(js_other)?)
        .await
        .map_err(js_other)?;
    let text = text_js.as_string().unwrap_or_default();
    debug!("fetch completed with status {}", status);

    Ok(HttpResponse::new(status, text.into_bytes()))
}

fn js_other(value: JsValue) -> TransportError {
    TransportError::Other(js_message(&value))
}

pub(crate) fn js_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value))
}
