//! Default [`Transport`] backed by a blocking `ureq` agent.
//!
//! # Design
//! ureq is synchronous, so each request runs on tokio's blocking pool and
//! the returned future resolves when that job finishes. The agent is built
//! with `http_status_as_error(false)`: 4xx/5xx responses come back as data
//! and the interpreters decide what they mean. No timeout is configured
//! beyond ureq's defaults.

use std::future::Future;

use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, ResponseMeta, Transport, TransportOutcome};

#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    /// Use a preconfigured agent. Status codes must not be turned into
    /// errors by it, or error payloads will surface as transport failures.
    pub fn with_agent(agent: ureq::Agent) -> Self {
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: HttpRequest) -> impl Future<Output = TransportOutcome> + Send {
        let agent = self.agent.clone();
        async move {
            match tokio::task::spawn_blocking(move || execute_blocking(&agent, request)).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::warn!(error = %e, "transport job did not complete");
                    TransportOutcome::failed(TransportError::new(e.to_string()))
                }
            }
        }
    }
}

fn execute_blocking(agent: &ureq::Agent, request: HttpRequest) -> TransportOutcome {
    tracing::debug!(method = request.method.as_str(), url = %request.url, "sending request");
    let result = match request.method {
        HttpMethod::Post => {
            let mut builder = agent.post(request.url.as_str());
            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            match &request.body {
                Some(body) => builder.send(body.as_bytes()),
                None => builder.send_empty(),
            }
        }
    };

    let mut response = match result {
        Ok(response) => response,
        Err(e) => {
            tracing::debug!(error = %e, "request failed before a response arrived");
            return TransportOutcome::failed(TransportError::new(e.to_string()));
        }
    };

    let meta = ResponseMeta {
        status: response.status().as_u16(),
        headers: response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect(),
    };

    match response.body_mut().read_to_vec() {
        Ok(body) => TransportOutcome::completed(meta, body),
        Err(e) => TransportOutcome {
            body: None,
            response: Some(meta),
            error: Some(TransportError::new(e.to_string())),
        },
    }
}
