use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: String,
    pub status: String,
    pub intent: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub purchase_units: Vec<PurchaseUnit>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PurchaseUnit {
    pub amount: Amount,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Amount {
    pub currency_code: String,
    pub value: String,
}

#[derive(Deserialize)]
pub struct CreateOrderParams {
    pub intent: String,
    #[serde(default)]
    pub purchase_units: Vec<PurchaseUnit>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub name: String,
    pub message: String,
}

type Failure = (StatusCode, Json<ErrorBody>);

fn failure(status: StatusCode, name: &str, message: &str) -> Failure {
    (
        status,
        Json(ErrorBody {
            name: name.to_string(),
            message: message.to_string(),
        }),
    )
}

pub type Db = Arc<RwLock<HashMap<String, Order>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/v2/checkout/orders", post(create_order))
        .route("/v2/checkout/orders/{order_id}/{intent}", post(process_order))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Decode `Authorization: Basic ...` into `(client_id, client_secret)`.
fn basic_credentials(headers: &HeaderMap) -> Option<(String, String)> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let encoded = value.strip_prefix("Basic ")?;
    let decoded = String::from_utf8(STANDARD.decode(encoded).ok()?).ok()?;
    let (id, secret) = decoded.split_once(':')?;
    Some((id.to_string(), secret.to_string()))
}

async fn create_order(
    State(db): State<Db>,
    headers: HeaderMap,
    Json(input): Json<CreateOrderParams>,
) -> Result<(StatusCode, Json<Order>), Failure> {
    let Some((client_id, _)) = basic_credentials(&headers).filter(|(id, _)| !id.is_empty()) else {
        return Err(failure(
            StatusCode::UNAUTHORIZED,
            "AUTHENTICATION_FAILURE",
            "Authentication failed due to missing or invalid credentials.",
        ));
    };
    let order = Order {
        id: Uuid::new_v4().simple().to_string().to_uppercase()[..17].to_string(),
        status: "CREATED".to_string(),
        intent: input.intent,
        purchase_units: input.purchase_units,
    };
    tracing::info!(order_id = %order.id, %client_id, "order created");
    db.write().await.insert(order.id.clone(), order.clone());
    Ok((StatusCode::CREATED, Json(order)))
}

async fn process_order(
    State(db): State<Db>,
    Path((order_id, intent)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<(StatusCode, Json<Order>), Failure> {
    if basic_credentials(&headers).is_none_or(|(_, secret)| secret.is_empty()) {
        return Err(failure(
            StatusCode::UNAUTHORIZED,
            "AUTHENTICATION_FAILURE",
            "Client secret is required to process an order.",
        ));
    }
    if intent != "capture" && intent != "authorize" {
        return Err(failure(
            StatusCode::UNPROCESSABLE_ENTITY,
            "INVALID_INTENT",
            "Intent must be capture or authorize.",
        ));
    }

    let mut orders = db.write().await;
    let order = orders.get_mut(&order_id).ok_or_else(|| {
        failure(
            StatusCode::NOT_FOUND,
            "RESOURCE_NOT_FOUND",
            "The specified resource does not exist.",
        )
    })?;
    if order.status != "CREATED" {
        return Err(failure(
            StatusCode::UNPROCESSABLE_ENTITY,
            "ORDER_ALREADY_PROCESSED",
            "Order has already been captured or authorized.",
        ));
    }
    order.status = "COMPLETED".to_string();
    tracing::info!(%order_id, %intent, "order processed");
    Ok((StatusCode::CREATED, Json(order.clone())))
}
