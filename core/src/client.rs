//! Merchant-side client for the order lifecycle.
//!
//! # Design
//! `MerchantApi` holds only a base URL and credentials and carries no
//! mutable state between calls. The caller constructs one value and passes
//! it wherever orders are created or processed; clones are cheap enough to
//! hand to concurrent tasks.
//!
//! Each operation comes in two forms. `build_*` / `parse_order` keep the
//! I/O boundary explicit for callers that run their own transport. The async
//! `create_order` / `process_order` wrap build, execute and interpret into a
//! single call that resolves exactly once.

use std::fmt;

use serde::Serialize;

use crate::config::MerchantSettings;
use crate::error::MerchantApiError;
use crate::http::{HttpRequest, Transport, TransportOutcome};
use crate::request::{build_create_order_request, build_process_order_request};
use crate::response::interpret_order_response;
use crate::types::{Operation, Order, ProcessOrderParams};

/// Stateless client for the checkout orders API.
///
/// Builds authenticated `HttpRequest` values and interprets
/// `TransportOutcome` values into orders. The caller either runs the HTTP
/// round-trip between `build_*` and `parse_order` itself, or passes a
/// `Transport` to the async operations.
#[derive(Clone)]
pub struct MerchantApi {
    base_url: String,
    client_id: String,
    client_secret: String,
}

impl MerchantApi {
    /// `base_url` is used verbatim; endpoint paths are appended to it as is.
    pub fn new(
        base_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    pub fn from_settings(settings: &MerchantSettings) -> Self {
        Self::new(
            settings.base_url(),
            settings.client_id.clone(),
            settings.client_secret.clone(),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn build_create_order<P>(&self, params: &P) -> Result<HttpRequest, MerchantApiError>
    where
        P: Serialize + ?Sized,
    {
        build_create_order_request(params, &self.client_id, &self.base_url)
    }

    pub fn build_process_order(
        &self,
        params: &ProcessOrderParams,
    ) -> Result<HttpRequest, MerchantApiError> {
        build_process_order_request(
            &params.order_id,
            &params.intent,
            &self.client_id,
            &self.client_secret,
            &self.base_url,
        )
    }

    pub fn build_request(&self, operation: &Operation) -> Result<HttpRequest, MerchantApiError> {
        match operation {
            Operation::CreateOrder { params } => self.build_create_order(params),
            Operation::ProcessOrder(params) => self.build_process_order(params),
        }
    }

    pub fn parse_order(&self, outcome: TransportOutcome) -> Result<Order, MerchantApiError> {
        interpret_order_response(outcome)
    }

    /// Create an order. An invalid endpoint fails before `transport` is used.
    pub async fn create_order<T, P>(
        &self,
        transport: &T,
        params: &P,
    ) -> Result<Order, MerchantApiError>
    where
        T: Transport + ?Sized,
        P: Serialize + ?Sized,
    {
        let request = self.build_create_order(params)?;
        self.send(transport, request).await
    }

    /// Authorize or capture an existing order.
    pub async fn process_order<T>(
        &self,
        transport: &T,
        params: &ProcessOrderParams,
    ) -> Result<Order, MerchantApiError>
    where
        T: Transport + ?Sized,
    {
        let request = self.build_process_order(params)?;
        self.send(transport, request).await
    }

    pub async fn execute<T>(
        &self,
        transport: &T,
        operation: &Operation,
    ) -> Result<Order, MerchantApiError>
    where
        T: Transport + ?Sized,
    {
        let request = self.build_request(operation)?;
        self.send(transport, request).await
    }

    async fn send<T>(&self, transport: &T, request: HttpRequest) -> Result<Order, MerchantApiError>
    where
        T: Transport + ?Sized,
    {
        let url = request.url.clone();
        let outcome = transport.execute(request).await;
        let result = self.parse_order(outcome);
        match &result {
            Ok(order) => tracing::debug!(
                %url,
                order_id = %order.id,
                status = %order.status,
                "order call succeeded"
            ),
            Err(e) => tracing::debug!(%url, code = e.code(), error = %e, "order call failed"),
        }
        result
    }
}

impl fmt::Debug for MerchantApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MerchantApi")
            .field("base_url", &self.base_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}
