//! Classification of transport outcomes.
//!
//! # Design
//! The merchant-facing interpreter checks presence only: an error or a
//! missing body is a connection failure, a missing response is a server
//! failure, and everything else is decided by whether the body decodes.
//! It never looks at the status code, so a 4xx error payload surfaces as
//! `DataParsingError`. The check order is fixed; a body that arrived with a
//! transport error still counts as a connection failure.
//!
//! The networking-layer interpreters are stricter. They map each missing
//! piece to its own `NetworkingError` kind and turn non-2xx responses into
//! `ServerResponseError` carrying the server's message.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{MerchantApiError, NetworkingError};
use crate::http::TransportOutcome;
use crate::types::Order;

/// Decode an order from the outcome of a create or process call.
pub fn interpret_order_response(outcome: TransportOutcome) -> Result<Order, MerchantApiError> {
    interpret_merchant_response(outcome)
}

pub fn interpret_merchant_response<T>(outcome: TransportOutcome) -> Result<T, MerchantApiError>
where
    T: DeserializeOwned,
{
    let TransportOutcome {
        body,
        response,
        error,
    } = outcome;

    let body = match (body, error) {
        (Some(body), None) => body,
        (body, error) => {
            tracing::debug!(
                has_body = body.is_some(),
                error = ?error,
                "classified as network connection error"
            );
            return Err(MerchantApiError::NetworkConnectionError);
        }
    };

    if response.is_none() {
        tracing::debug!("classified as server error: no response metadata");
        return Err(MerchantApiError::ServerError);
    }

    serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(error = %e, "classified as data parsing error");
        MerchantApiError::DataParsingError
    })
}

/// Error payload returned by the checkout API on failure.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    name: Option<String>,
    message: Option<String>,
    error_description: Option<String>,
}

/// Decode a REST response body, treating non-2xx statuses as server errors.
pub fn interpret_api_response<T>(outcome: TransportOutcome) -> Result<T, NetworkingError>
where
    T: DeserializeOwned,
{
    let body = successful_body(outcome)?;
    serde_json::from_slice(&body).map_err(|e| NetworkingError::json_decoding_error(e.to_string()))
}

/// GraphQL envelope. `data` is kept raw so a missing or null key can be told
/// apart from a decode failure.
#[derive(Debug, Deserialize)]
struct GraphQlEnvelope {
    #[serde(default)]
    data: Option<serde_json::Value>,
    #[serde(default)]
    errors: Vec<GraphQlErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct GraphQlErrorEntry {
    message: String,
}

/// Decode the top-level `data` object of a GraphQL response.
pub fn interpret_graphql_response<T>(outcome: TransportOutcome) -> Result<T, NetworkingError>
where
    T: DeserializeOwned,
{
    let body = successful_body(outcome)?;
    let envelope: GraphQlEnvelope = serde_json::from_slice(&body)
        .map_err(|e| NetworkingError::json_decoding_error(e.to_string()))?;

    let Some(data) = envelope.data else {
        return Err(match envelope.errors.into_iter().next() {
            Some(first) => NetworkingError::server_response_error(first.message),
            None => NetworkingError::NoGraphQlDataKey,
        });
    };
    serde_json::from_value(data).map_err(|e| NetworkingError::json_decoding_error(e.to_string()))
}

/// Shared preamble: returns the body of a 2xx response.
fn successful_body(outcome: TransportOutcome) -> Result<Vec<u8>, NetworkingError> {
    if let Some(error) = outcome.error {
        tracing::debug!(%error, "request failed in transport");
        return Err(NetworkingError::UrlSessionError);
    }
    let Some(response) = outcome.response else {
        return Err(NetworkingError::InvalidUrlResponse);
    };
    let Some(body) = outcome.body else {
        return Err(NetworkingError::NoResponseData);
    };
    if !response.is_success() {
        let description = server_error_description(&body, response.status);
        tracing::debug!(status = response.status, %description, "server returned an error payload");
        return Err(NetworkingError::server_response_error(description));
    }
    Ok(body)
}

fn server_error_description(body: &[u8], status: u16) -> String {
    serde_json::from_slice::<ErrorResponse>(body)
        .ok()
        .and_then(|e| e.message.or(e.error_description).or(e.name))
        .unwrap_or_else(|| format!("HTTP {status}"))
}
