//! Merchant-side client core for the checkout orders API.
//!
//! # Overview
//! Builds authenticated `HttpRequest` values for the two order operations
//! (create, and process as authorize/capture) and interprets the raw
//! `TransportOutcome` of executing them into an `Order` or a typed error.
//!
//! # Design
//! - `MerchantApi` is an explicit client value holding the base URL and
//!   credentials. It has no mutable state, so concurrent calls never
//!   interact.
//! - Request building (`request`) and outcome interpretation (`response`)
//!   are pure functions; I/O goes through the `Transport` trait. The
//!   `ureq` feature (on by default) provides `UreqTransport`.
//! - Two closed error taxonomies: `MerchantApiError` for order calls and
//!   `NetworkingError` for the stricter networking layer. Both expose
//!   stable integer codes.

pub mod casing;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod request;
pub mod response;
#[cfg(feature = "ureq")]
pub mod transport;
pub mod types;

pub use client::MerchantApi;
pub use config::{ConfigError, Environment, MerchantSettings};
pub use error::{CoreSdkError, MerchantApiError, NetworkingError, TransportError};
pub use http::{HttpMethod, HttpRequest, ResponseMeta, Transport, TransportOutcome};
pub use request::{basic_auth_header, build_create_order_request, build_process_order_request};
pub use response::{
    interpret_api_response, interpret_graphql_response, interpret_merchant_response,
    interpret_order_response,
};
#[cfg(feature = "ureq")]
pub use transport::UreqTransport;
pub use types::{
    Amount, CreateOrderParams, Link, Operation, Order, ProcessOrderParams, PurchaseUnit,
};
