//! Error types for the checkout client.
//!
//! # Design
//! Two closed taxonomies live here. `MerchantApiError` is what the merchant
//! client hands back from `create_order` / `process_order`: four coarse
//! kinds with no payload. `NetworkingError` is the richer set used by the
//! lower networking layer; two of its kinds carry a caller-supplied
//! description, the other six are plain unit variants.
//!
//! Numeric codes and domain strings are part of the public contract. Callers
//! branch on `code()`, so a code is never reassigned once shipped.

use serde::Serialize;
use thiserror::Error;

/// Errors returned by `MerchantApi` order operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum MerchantApiError {
    /// The base URL plus endpoint did not form a valid absolute URL.
    #[error("The order endpoint URL could not be constructed.")]
    InvalidUrl,

    /// The transport reported an error, or no body bytes came back.
    #[error("A network connection error occurred while contacting the merchant server.")]
    NetworkConnectionError,

    /// Body bytes arrived without any response metadata.
    #[error("The merchant server did not return a response.")]
    ServerError,

    /// The response body did not decode as the expected order schema.
    #[error("The merchant server response could not be parsed.")]
    DataParsingError,
}

impl MerchantApiError {
    pub const DOMAIN: &'static str = "MerchantAPIErrorDomain";

    pub fn code(&self) -> i32 {
        match self {
            MerchantApiError::InvalidUrl => 0,
            MerchantApiError::NetworkConnectionError => 1,
            MerchantApiError::ServerError => 2,
            MerchantApiError::DataParsingError => 3,
        }
    }

    pub fn domain(&self) -> &'static str {
        Self::DOMAIN
    }

    pub fn description(&self) -> String {
        self.to_string()
    }
}

/// Failure kinds of the lower networking layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum NetworkingError {
    #[error("An unknown error occurred. Contact developer.paypal.com/support.")]
    Unknown,

    #[error("An error occurred during network call. Contact developer.paypal.com/support.")]
    UrlSessionError,

    /// Built with [`NetworkingError::json_decoding_error`].
    #[error("{0}")]
    JsonDecodingError(String),

    #[error("An error occurred due to an invalid HTTP response. Contact developer.paypal.com/support.")]
    InvalidUrlResponse,

    #[error("An error occurred due to missing HTTP response data. Contact developer.paypal.com/support.")]
    NoResponseData,

    #[error("An error occurred constructing an HTTP request. Contact developer.paypal.com/support.")]
    InvalidUrlRequest,

    /// Built with [`NetworkingError::server_response_error`].
    #[error("{0}")]
    ServerResponseError(String),

    #[error("An error occurred due to missing `data` key in GraphQL query response. Contact developer.paypal.com/support.")]
    NoGraphQlDataKey,
}

impl NetworkingError {
    pub const DOMAIN: &'static str = "NetworkingClientErrorDomain";

    pub fn json_decoding_error(description: impl Into<String>) -> Self {
        NetworkingError::JsonDecodingError(description.into())
    }

    pub fn server_response_error(description: impl Into<String>) -> Self {
        NetworkingError::ServerResponseError(description.into())
    }

    pub fn code(&self) -> i32 {
        match self {
            NetworkingError::Unknown => 0,
            NetworkingError::UrlSessionError => 1,
            NetworkingError::JsonDecodingError(_) => 2,
            NetworkingError::InvalidUrlResponse => 3,
            NetworkingError::NoResponseData => 4,
            NetworkingError::InvalidUrlRequest => 5,
            NetworkingError::ServerResponseError(_) => 6,
            NetworkingError::NoGraphQlDataKey => 7,
        }
    }

    pub fn domain(&self) -> &'static str {
        Self::DOMAIN
    }

    pub fn description(&self) -> String {
        self.to_string()
    }
}

/// A request that never got built cannot have reached the network.
impl From<MerchantApiError> for NetworkingError {
    fn from(err: MerchantApiError) -> Self {
        match err {
            MerchantApiError::InvalidUrl => NetworkingError::InvalidUrlRequest,
            MerchantApiError::NetworkConnectionError => NetworkingError::UrlSessionError,
            MerchantApiError::ServerError => NetworkingError::InvalidUrlResponse,
            MerchantApiError::DataParsingError => {
                NetworkingError::json_decoding_error(err.description())
            }
        }
    }
}

/// Flat `(code, domain, description)` view of either taxonomy, for logs and
/// for hosts that only understand integer codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{domain} ({code}): {error_description}")]
pub struct CoreSdkError {
    pub code: i32,
    pub domain: String,
    pub error_description: String,
}

impl From<&NetworkingError> for CoreSdkError {
    fn from(err: &NetworkingError) -> Self {
        CoreSdkError {
            code: err.code(),
            domain: err.domain().to_string(),
            error_description: err.description(),
        }
    }
}

impl From<NetworkingError> for CoreSdkError {
    fn from(err: NetworkingError) -> Self {
        CoreSdkError::from(&err)
    }
}

impl From<MerchantApiError> for CoreSdkError {
    fn from(err: MerchantApiError) -> Self {
        CoreSdkError {
            code: err.code(),
            domain: err.domain().to_string(),
            error_description: err.description(),
        }
    }
}

/// Failure reported by a [`Transport`](crate::http::Transport) while
/// executing a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("transport failure: {0}")]
pub struct TransportError(pub String);

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        TransportError(message.into())
    }
}
