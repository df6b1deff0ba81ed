//! Authenticated request construction for the order endpoints.
//!
//! Both builders are pure. The only failure they report is
//! [`MerchantApiError::InvalidUrl`]; a create-order body that fails to encode
//! is logged and dropped rather than failing the call.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use ::http::Uri;
use serde::Serialize;
use url::Url;

use crate::casing::snake_case_keys;
use crate::error::MerchantApiError;
use crate::http::{HttpMethod, HttpRequest};

/// Path of the orders collection, appended to the base URL.
pub const ORDERS_PATH: &str = "/v2/checkout/orders";

/// Build the create-order request.
///
/// The client ID is sent with an empty secret. The body is `params` as JSON
/// with every key converted to snake_case.
pub fn build_create_order_request<P>(
    params: &P,
    client_id: &str,
    base_url: &str,
) -> Result<HttpRequest, MerchantApiError>
where
    P: Serialize + ?Sized,
{
    let url = endpoint(base_url, ORDERS_PATH)?;
    let body = match encode_snake_case(params) {
        Ok(body) => Some(body),
        Err(e) => {
            tracing::warn!(
                error = %e,
                "create-order params failed to encode, sending without a body"
            );
            None
        }
    };
    tracing::debug!(%url, has_body = body.is_some(), "built create-order request");
    Ok(HttpRequest {
        method: HttpMethod::Post,
        url,
        headers: json_headers(client_id, ""),
        body,
    })
}

/// Build the process-order request for `intent` (for example `capture` or
/// `authorize`). No body is sent.
///
/// `order_id` and `intent` are concatenated into the path as given; no
/// escaping is performed. Empty segments are rejected.
pub fn build_process_order_request(
    order_id: &str,
    intent: &str,
    client_id: &str,
    client_secret: &str,
    base_url: &str,
) -> Result<HttpRequest, MerchantApiError> {
    if order_id.is_empty() || intent.is_empty() {
        tracing::debug!(
            order_id,
            intent,
            "rejected process-order request with empty path segment"
        );
        return Err(MerchantApiError::InvalidUrl);
    }
    let path = format!("{ORDERS_PATH}/{order_id}/{intent}");
    let url = endpoint(base_url, &path)?;
    tracing::debug!(%url, "built process-order request");
    Ok(HttpRequest {
        method: HttpMethod::Post,
        url,
        headers: json_headers(client_id, client_secret),
        body: None,
    })
}

/// `Basic base64(client_id:client_secret)`.
pub fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    let encoded = STANDARD.encode(format!("{client_id}:{client_secret}"));
    format!("Basic {encoded}")
}

/// Serialize `params` and snake_case every key in the result.
pub fn encode_snake_case<P>(params: &P) -> Result<String, serde_json::Error>
where
    P: Serialize + ?Sized,
{
    let value = serde_json::to_value(params)?;
    serde_json::to_string(&snake_case_keys(value))
}

/// Concatenate and validate; the returned string is the concatenation itself.
///
/// `Url::parse` alone would percent-encode characters such as spaces, so the
/// literal string must also pass the stricter `http::Uri` grammar that
/// transports send with.
fn endpoint(base_url: &str, path: &str) -> Result<String, MerchantApiError> {
    let url = format!("{base_url}{path}");
    if let Err(e) = Url::parse(&url) {
        tracing::debug!(%url, error = %e, "endpoint is not a valid absolute URL");
        return Err(MerchantApiError::InvalidUrl);
    }
    if let Err(e) = Uri::try_from(url.as_str()) {
        tracing::debug!(%url, error = %e, "endpoint contains characters that need escaping");
        return Err(MerchantApiError::InvalidUrl);
    }
    Ok(url)
}

fn json_headers(client_id: &str, client_secret: &str) -> Vec<(String, String)> {
    vec![
        (
            "Authorization".to_string(),
            basic_auth_header(client_id, client_secret),
        ),
        ("Content-Type".to_string(), "application/json".to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::types::CreateOrderParams;

    const BASE_URL: &str = "https://api.sandbox.paypal.com";

    fn decode_auth(req: &HttpRequest) -> String {
        let header = req.header("Authorization").unwrap();
        let encoded = header.strip_prefix("Basic ").unwrap();
        String::from_utf8(STANDARD.decode(encoded).unwrap()).unwrap()
    }

    #[test]
    fn create_order_produces_correct_request() {
        let params = CreateOrderParams::single("CAPTURE", "USD", "10.00");
        let req = build_create_order_request(&params, "client-123", BASE_URL).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "https://api.sandbox.paypal.com/v2/checkout/orders");
        assert_eq!(req.header("Content-Type"), Some("application/json"));
        assert_eq!(decode_auth(&req), "client-123:");

        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["intent"], "CAPTURE");
        assert_eq!(body["purchase_units"][0]["amount"]["currency_code"], "USD");
        assert_eq!(body["purchase_units"][0]["amount"]["value"], "10.00");
    }

    #[test]
    fn create_order_auth_header_has_empty_secret() {
        let params = CreateOrderParams::single("CAPTURE", "USD", "1.00");
        let req = build_create_order_request(&params, "abc", BASE_URL).unwrap();
        assert_eq!(req.header("Authorization"), Some("Basic YWJjOg=="));
    }

    #[test]
    fn create_order_snake_cases_free_form_keys() {
        let params = CreateOrderParams {
            intent: "CAPTURE".to_string(),
            purchase_units: None,
            application_context: Some(serde_json::json!({ "returnUrl": "https://shop.test/ok" })),
        };
        let req = build_create_order_request(&params, "id", BASE_URL).unwrap();
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["application_context"]["return_url"], "https://shop.test/ok");
        assert!(body["application_context"].get("returnUrl").is_none());
    }

    #[test]
    fn create_order_keeps_request_when_body_fails_to_encode() {
        // JSON object keys must be strings.
        let mut params: BTreeMap<Vec<u8>, u8> = BTreeMap::new();
        params.insert(vec![1, 2], 3);
        let req = build_create_order_request(&params, "id", BASE_URL).unwrap();
        assert!(req.body.is_none());
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.headers.len(), 2);
    }

    #[test]
    fn create_order_rejects_unparsable_base_url() {
        let params = CreateOrderParams::single("CAPTURE", "USD", "1.00");
        for base in ["", "not a url", "api.sandbox.paypal.com", "http://[::1"] {
            let err = build_create_order_request(&params, "id", base).unwrap_err();
            assert_eq!(err, MerchantApiError::InvalidUrl, "base {base:?}");
        }
    }

    #[test]
    fn create_order_url_is_not_normalized() {
        let params = CreateOrderParams::single("CAPTURE", "USD", "1.00");
        let req =
            build_create_order_request(&params, "id", "https://api.sandbox.paypal.com/").unwrap();
        assert_eq!(req.url, "https://api.sandbox.paypal.com//v2/checkout/orders");
    }

    #[test]
    fn process_order_produces_correct_request() {
        let req =
            build_process_order_request("5O190127TN364715T", "capture", "cid", "secret", BASE_URL)
                .unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(
            req.url,
            "https://api.sandbox.paypal.com/v2/checkout/orders/5O190127TN364715T/capture"
        );
        assert!(req.body.is_none());
        assert_eq!(req.header("Content-Type"), Some("application/json"));
        assert_eq!(decode_auth(&req), "cid:secret");
    }

    #[test]
    fn process_order_does_not_escape_segments() {
        let req = build_process_order_request("a/b?c", "authorize", "cid", "s", BASE_URL).unwrap();
        assert_eq!(
            req.url,
            "https://api.sandbox.paypal.com/v2/checkout/orders/a/b?c/authorize"
        );
    }

    #[test]
    fn process_order_rejects_segments_that_need_escaping() {
        for order_id in ["ORDER 1", "tab\tid", "ord<1>"] {
            let err =
                build_process_order_request(order_id, "capture", "cid", "s", BASE_URL).unwrap_err();
            assert_eq!(err, MerchantApiError::InvalidUrl, "order id {order_id:?}");
        }
        let err =
            build_process_order_request("ORDER", "cap ture", "cid", "s", BASE_URL).unwrap_err();
        assert_eq!(err, MerchantApiError::InvalidUrl);
    }

    #[test]
    fn create_order_rejects_base_url_with_spaces() {
        let params = CreateOrderParams::single("CAPTURE", "USD", "1.00");
        let base = "https://api.sandbox.paypal.com/my shop";
        let err = build_create_order_request(&params, "id", base).unwrap_err();
        assert_eq!(err, MerchantApiError::InvalidUrl);
    }

    #[test]
    fn process_order_rejects_empty_segments() {
        assert_eq!(
            build_process_order_request("", "capture", "cid", "s", BASE_URL).unwrap_err(),
            MerchantApiError::InvalidUrl
        );
        assert_eq!(
            build_process_order_request("ORDER", "", "cid", "s", BASE_URL).unwrap_err(),
            MerchantApiError::InvalidUrl
        );
    }

    #[test]
    fn process_order_rejects_unparsable_base_url() {
        let err = build_process_order_request("ORDER", "capture", "cid", "s", "nope").unwrap_err();
        assert_eq!(err, MerchantApiError::InvalidUrl);
    }

    #[test]
    fn basic_auth_header_encodes_pair() {
        assert_eq!(basic_auth_header("user", "pass"), "Basic dXNlcjpwYXNz");
        assert_eq!(basic_auth_header("", ""), "Basic Og==");
    }
}
