//! HTTP routes.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use std::sync::Arc;
use stockroom_domain::{DomainError, InventoryItem, ItemName, Quantity};
use stockroom_shared::{
    AddItemRequest, DialogSubmitRequest, ErrorCode, ErrorResponse, InventoryViewResponse,
    ItemCardData, SearchParams, UpdateItemRequest,
};

use crate::app::App;
use crate::infrastructure::ports::RepoError;
use crate::stores::{DialogCommand, InventorySession, ItemDialog};
use crate::use_cases::inventory::InventoryError;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/api/inventory", get(get_inventory))
        .route("/api/inventory/resync", post(resync))
        .route("/api/inventory/search", get(search))
        .route("/api/inventory/items", post(add_item))
        .route(
            "/api/inventory/items/{name}",
            put(update_item).delete(delete_item),
        )
        .route("/api/inventory/items/{name}/increment", post(increment_item))
        .route("/api/inventory/items/{name}/decrement", post(decrement_item))
        .route("/api/inventory/dialog", post(submit_dialog))
        .fallback(not_found)
}

async fn health() -> &'static str {
    "OK"
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

fn view(session: &InventorySession) -> InventoryViewResponse {
    InventoryViewResponse {
        query: session.query().to_string(),
        items: session
            .cards()
            .into_iter()
            .map(ItemCardData::from)
            .collect(),
        filtered: session
            .filtered_cards()
            .into_iter()
            .map(ItemCardData::from)
            .collect(),
        total: session.items().len(),
        last_synced_at: session.last_synced_at().map(|t| t.to_rfc3339()),
    }
}

/// Name of a record that already exists in the collection.
fn existing_name(raw: &str) -> Result<ItemName, ApiError> {
    ItemName::from_stored(raw).map_err(ApiError::from)
}

// =============================================================================
// Inventory
// =============================================================================

async fn get_inventory(State(app): State<Arc<App>>) -> Json<InventoryViewResponse> {
    let session = app.session.lock().await;
    Json(view(&session))
}

async fn resync(State(app): State<Arc<App>>) -> Result<Json<InventoryViewResponse>, ApiError> {
    let mut session = app.session.lock().await;
    session.resync().await?;
    Ok(Json(view(&session)))
}

async fn search(
    State(app): State<Arc<App>>,
    Query(params): Query<SearchParams>,
) -> Json<InventoryViewResponse> {
    let mut session = app.session.lock().await;
    session.search(params.q);
    Json(view(&session))
}

async fn add_item(
    State(app): State<Arc<App>>,
    payload: Result<Json<AddItemRequest>, JsonRejection>,
) -> Result<Json<InventoryViewResponse>, ApiError> {
    let Json(request) = payload?;
    let quantity = request.quantity.map(Quantity::new).unwrap_or(Quantity::ONE);
    let mut session = app.session.lock().await;
    session.add_named(&request.name, quantity).await?;
    Ok(Json(view(&session)))
}

async fn increment_item(
    State(app): State<Arc<App>>,
    Path(name): Path<String>,
) -> Result<Json<InventoryViewResponse>, ApiError> {
    let name = existing_name(&name)?;
    let mut session = app.session.lock().await;
    session.increment(&name).await?;
    Ok(Json(view(&session)))
}

async fn decrement_item(
    State(app): State<Arc<App>>,
    Path(name): Path<String>,
) -> Result<Json<InventoryViewResponse>, ApiError> {
    let name = existing_name(&name)?;
    let mut session = app.session.lock().await;
    session.decrement(&name).await?;
    Ok(Json(view(&session)))
}

async fn update_item(
    State(app): State<Arc<App>>,
    Path(name): Path<String>,
    payload: Result<Json<UpdateItemRequest>, JsonRejection>,
) -> Result<Json<InventoryViewResponse>, ApiError> {
    let Json(request) = payload?;
    let old_name = existing_name(&name)?;
    let command = if request.new_name.is_empty() {
        DialogCommand::Skip
    } else {
        DialogCommand::Update {
            old_name,
            new_name: ItemName::new(request.new_name)?,
            quantity: request.quantity.map(Quantity::new),
        }
    };
    let mut session = app.session.lock().await;
    session.apply(command).await?;
    Ok(Json(view(&session)))
}

async fn delete_item(
    State(app): State<Arc<App>>,
    Path(name): Path<String>,
) -> Result<Json<InventoryViewResponse>, ApiError> {
    let name = existing_name(&name)?;
    let mut session = app.session.lock().await;
    session.delete(&name).await?;
    Ok(Json(view(&session)))
}

/// Submit the add/edit dialog with its raw field text.
async fn submit_dialog(
    State(app): State<Arc<App>>,
    payload: Result<Json<DialogSubmitRequest>, JsonRejection>,
) -> Result<Json<InventoryViewResponse>, ApiError> {
    let Json(request) = payload?;
    let mut session = app.session.lock().await;

    let mut dialog = ItemDialog::new();
    match request.editing.as_deref() {
        Some(editing) => {
            let original = existing_name(editing)?;
            let item = session
                .find(&original)
                .cloned()
                .unwrap_or_else(|| InventoryItem::new(original, Quantity::ZERO));
            dialog.open_for_edit(&item);
        }
        None => dialog.open_for_add(),
    }
    dialog.set_name(request.name);
    dialog.set_quantity(request.quantity.unwrap_or_default());

    let command = dialog.submit()?;
    session.apply(command).await?;
    Ok(Json(view(&session)))
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    /// No route matches the request
    NotFound,
    /// Body could not be read as the expected JSON
    BadRequest(String),
    /// Input parsed but failed a domain rule
    Validation(String),
    RemoteStore(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new(ErrorCode::NotFound, "Not found"),
            ),
            ApiError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(ErrorCode::BadRequest, msg),
            ),
            ApiError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(ErrorCode::ValidationError, msg),
            ),
            ApiError::RemoteStore(detail) => {
                tracing::error!(error = %detail, "Remote store request failed");
                (
                    StatusCode::BAD_GATEWAY,
                    ErrorResponse::new(ErrorCode::RemoteStoreError, "Remote store error"),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        ApiError::BadRequest(e.body_text())
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        ApiError::Validation(e.to_string())
    }
}

impl From<RepoError> for ApiError {
    fn from(e: RepoError) -> Self {
        ApiError::RemoteStore(e.to_string())
    }
}

impl From<InventoryError> for ApiError {
    fn from(e: InventoryError) -> Self {
        match e {
            InventoryError::Validation(e) => e.into(),
            InventoryError::Repo(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::in_memory::InMemoryCollection;
    use crate::infrastructure::ports::{
        InventoryCollection, MockClockPort, MockInventoryCollection, RepoError,
    };
    use axum::body::Body;
    use axum::http::Request as HttpRequest;
    use chrono::{TimeZone, Utc};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn router_over(collection: Arc<dyn InventoryCollection>) -> Router {
        let mut clock = MockClockPort::new();
        clock
            .expect_now()
            .returning(|| Utc.with_ymd_and_hms(2024, 8, 1, 9, 30, 0).unwrap());
        let app = Arc::new(App::with_clock(collection, Arc::new(clock)));
        routes().with_state(app)
    }

    async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = match body {
            Some(body) => HttpRequest::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => HttpRequest::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        };
        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    fn quantities(view: &Value) -> Vec<(String, i64)> {
        view["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| {
                (
                    c["name"].as_str().unwrap().to_string(),
                    c["quantity"].as_i64().unwrap(),
                )
            })
            .collect()
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let router = router_over(Arc::new(InMemoryCollection::new()));
        let response = router
            .oneshot(
                HttpRequest::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"OK");
    }

    #[tokio::test]
    async fn add_then_increment_and_decrement() {
        let router = router_over(Arc::new(InMemoryCollection::new()));

        let (status, view) = send(
            &router,
            "POST",
            "/api/inventory/items",
            Some(json!({ "name": "apple", "quantity": 3 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(quantities(&view), vec![("apple".to_string(), 3)]);
        assert_eq!(view["items"][0]["title"], "Apple");
        assert_eq!(view["items"][0]["quantity_label"], "Quantity: 3");
        assert_eq!(view["last_synced_at"], "2024-08-01T09:30:00+00:00");

        let (_, view) = send(&router, "POST", "/api/inventory/items/apple/increment", None).await;
        assert_eq!(quantities(&view), vec![("apple".to_string(), 4)]);

        let (_, view) = send(&router, "POST", "/api/inventory/items/apple/decrement", None).await;
        assert_eq!(quantities(&view), vec![("apple".to_string(), 3)]);
    }

    #[tokio::test]
    async fn add_without_quantity_adds_one() {
        let router = router_over(Arc::new(InMemoryCollection::new()));
        send(&router, "POST", "/api/inventory/items", Some(json!({ "name": "pear" }))).await;
        let (_, view) = send(&router, "POST", "/api/inventory/items", Some(json!({ "name": "pear" }))).await;
        assert_eq!(quantities(&view), vec![("pear".to_string(), 2)]);
    }

    #[tokio::test]
    async fn percent_encoded_names_reach_the_right_item() {
        let router = router_over(Arc::new(InMemoryCollection::new()));
        send(
            &router,
            "POST",
            "/api/inventory/items",
            Some(json!({ "name": "green apple", "quantity": 1 })),
        )
        .await;

        let (status, view) = send(&router, "DELETE", "/api/inventory/items/green%20apple", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(view["total"], 0);
    }

    #[tokio::test]
    async fn rename_moves_record() {
        let router = router_over(Arc::new(InMemoryCollection::new()));
        send(&router, "POST", "/api/inventory/items", Some(json!({ "name": "aple", "quantity": 2 }))).await;

        let (status, view) = send(
            &router,
            "PUT",
            "/api/inventory/items/aple",
            Some(json!({ "new_name": "apple" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(quantities(&view), vec![("apple".to_string(), 2)]);
    }

    #[tokio::test]
    async fn search_filters_locally_and_keeps_query() {
        let router = router_over(Arc::new(InMemoryCollection::new()));
        for name in ["Apple", "banana", "pineapple"] {
            send(&router, "POST", "/api/inventory/items", Some(json!({ "name": name }))).await;
        }

        let (_, view) = send(&router, "GET", "/api/inventory/search?q=APP", None).await;
        assert_eq!(view["query"], "APP");
        assert_eq!(view["filtered"].as_array().unwrap().len(), 2);
        assert_eq!(view["total"], 3);

        let (_, view) = send(&router, "GET", "/api/inventory", None).await;
        assert_eq!(view["filtered"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn dialog_add_and_edit() {
        let router = router_over(Arc::new(InMemoryCollection::new()));

        let (status, view) = send(
            &router,
            "POST",
            "/api/inventory/dialog",
            Some(json!({ "name": "widget", "quantity": "" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(quantities(&view), vec![("widget".to_string(), 1)]);

        let (_, view) = send(
            &router,
            "POST",
            "/api/inventory/dialog",
            Some(json!({ "editing": "widget", "name": "gadget", "quantity": "8" })),
        )
        .await;
        assert_eq!(quantities(&view), vec![("gadget".to_string(), 8)]);
    }

    #[tokio::test]
    async fn dialog_rejects_non_numeric_quantity() {
        let router = router_over(Arc::new(InMemoryCollection::new()));
        let (status, body) = send(
            &router,
            "POST",
            "/api/inventory/dialog",
            Some(json!({ "name": "widget", "quantity": "lots" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "validation_error");
    }

    #[tokio::test]
    async fn empty_name_writes_nothing() {
        let router = router_over(Arc::new(InMemoryCollection::new()));
        let (status, view) = send(
            &router,
            "POST",
            "/api/inventory/items",
            Some(json!({ "name": "" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(view["total"], 0);
        assert!(view["last_synced_at"].is_string());
    }

    #[tokio::test]
    async fn remote_failure_maps_to_bad_gateway() {
        let mut collection = MockInventoryCollection::new();
        collection
            .expect_list_all()
            .returning(|| Err(RepoError::database("list_all", "connection refused")));
        let router = router_over(Arc::new(collection));

        let (status, body) = send(&router, "POST", "/api/inventory/resync", None).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["code"], "remote_store_error");
        assert_eq!(body["message"], "Remote store error");
    }

    #[tokio::test]
    async fn whitespace_names_are_real_keys() {
        let router = router_over(Arc::new(InMemoryCollection::new()));

        let (status, view) = send(&router, "POST", "/api/inventory/items", Some(json!({ "name": " " }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(quantities(&view), vec![(" ".to_string(), 1)]);

        let (status, view) = send(
            &router,
            "PUT",
            "/api/inventory/items/%20",
            Some(json!({ "new_name": "  " })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(quantities(&view), vec![("  ".to_string(), 1)]);
    }

    #[tokio::test]
    async fn empty_new_name_skips_the_update() {
        let router = router_over(Arc::new(InMemoryCollection::new()));
        send(&router, "POST", "/api/inventory/items", Some(json!({ "name": "apple", "quantity": 2 }))).await;

        let (status, view) = send(
            &router,
            "PUT",
            "/api/inventory/items/apple",
            Some(json!({ "new_name": "", "quantity": 9 })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(quantities(&view), vec![("apple".to_string(), 2)]);
    }

    #[tokio::test]
    async fn stored_long_key_stays_addressable() {
        let long = "a".repeat(201);
        let collection = Arc::new(InMemoryCollection::new());
        collection
            .set(&ItemName::from_stored(long.clone()).unwrap(), Quantity::new(2))
            .await
            .unwrap();
        let router = router_over(collection);

        let uri = format!("/api/inventory/items/{long}/decrement");
        let (status, view) = send(&router, "POST", &uri, None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(quantities(&view), vec![(long, 1)]);
    }

    #[tokio::test]
    async fn overlong_new_name_is_a_validation_error() {
        let router = router_over(Arc::new(InMemoryCollection::new()));
        let (status, body) = send(
            &router,
            "POST",
            "/api/inventory/items",
            Some(json!({ "name": "a".repeat(201) })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "validation_error");
    }

    #[tokio::test]
    async fn malformed_body_is_a_bad_request() {
        let router = router_over(Arc::new(InMemoryCollection::new()));
        let (status, body) = send(
            &router,
            "POST",
            "/api/inventory/items",
            Some(json!({ "quantity": 3 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "bad_request");
        assert!(body["message"].as_str().unwrap().contains("name"));
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let router = router_over(Arc::new(InMemoryCollection::new()));
        let (status, body) = send(&router, "GET", "/api/warehouse", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "not_found");
    }
}
