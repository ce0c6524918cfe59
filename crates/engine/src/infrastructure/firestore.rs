//! Cloud Firestore inventory collection (REST v1)
//!
//! Talks to the documents endpoint directly with `reqwest`. Each item is a
//! document under the configured collection whose ID is the item name and
//! whose only field is `quantity` (an `integerValue`).

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::{Deserialize, Serialize};
use stockroom_domain::{InventoryItem, ItemName, Quantity};

use crate::infrastructure::ports::{InventoryCollection, RepoError};

/// Public Firestore REST endpoint.
pub const DEFAULT_FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com/v1";

/// Database used when none is configured.
pub const DEFAULT_DATABASE: &str = "(default)";

/// Documents requested per list page.
const PAGE_SIZE: u32 = 300;

const QUANTITY_FIELD: &str = "quantity";

/// Connection settings for one Firestore collection
#[derive(Debug, Clone)]
pub struct FirestoreConfig {
    /// REST root, e.g. `https://firestore.googleapis.com/v1` or an emulator
    pub base_url: String,
    pub project_id: String,
    pub database: String,
    pub collection: String,
    /// Sent as the `key` query parameter when set
    pub api_key: Option<String>,
    /// Sent as `Authorization: Bearer ...` when set
    pub bearer_token: Option<String>,
    pub timeout_secs: u64,
}

/// Client for one Firestore collection
#[derive(Clone)]
pub struct FirestoreCollection {
    client: Client,
    config: FirestoreConfig,
}

impl FirestoreCollection {
    pub fn new(config: FirestoreConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            config: FirestoreConfig {
                base_url: config.base_url.trim_end_matches('/').to_string(),
                ..config
            },
        }
    }

    fn collection_url(&self) -> Result<Url, RepoError> {
        let root = format!(
            "{}/projects/{}/databases/{}/documents",
            self.config.base_url, self.config.project_id, self.config.database
        );
        let mut url = Url::parse(&root)
            .map_err(|e| RepoError::database("build_url", format!("{root}: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| RepoError::database("build_url", "base URL cannot hold a path"))?
            .push(&self.config.collection);
        Ok(url)
    }

    fn document_url(&self, name: &ItemName) -> Result<Url, RepoError> {
        let mut url = self.collection_url()?;
        url.path_segments_mut()
            .map_err(|_| RepoError::database("build_url", "base URL cannot hold a path"))?
            .push(name.as_str());
        Ok(url)
    }

    fn request(&self, method: Method, mut url: Url) -> RequestBuilder {
        if let Some(key) = &self.config.api_key {
            url.query_pairs_mut().append_pair("key", key);
        }
        let builder = self.client.request(method, url);
        match &self.config.bearer_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

#[async_trait]
impl InventoryCollection for FirestoreCollection {
    async fn list_all(&self) -> Result<Vec<InventoryItem>, RepoError> {
        let mut items = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut url = self.collection_url()?;
            {
                let mut query = url.query_pairs_mut();
                query.append_pair("pageSize", &PAGE_SIZE.to_string());
                if let Some(token) = &page_token {
                    query.append_pair("pageToken", token);
                }
            }

            let response = self
                .request(Method::GET, url)
                .send()
                .await
                .map_err(|e| RepoError::database("list_all", e))?;
            let response = ensure_success("list_all", &self.config.collection, response).await?;
            let page: ListDocumentsResponse = response
                .json()
                .await
                .map_err(RepoError::serialization)?;

            for document in page.documents {
                match document.into_item() {
                    Ok(item) => items.push(item),
                    Err(e) => tracing::warn!(
                        collection = %self.config.collection,
                        error = %e,
                        "Skipping undecodable Firestore document"
                    ),
                }
            }

            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        tracing::debug!(
            collection = %self.config.collection,
            count = items.len(),
            "Listed Firestore documents"
        );
        Ok(items)
    }

    async fn get(&self, name: &ItemName) -> Result<Option<Quantity>, RepoError> {
        let url = self.document_url(name)?;
        let response = self
            .request(Method::GET, url)
            .send()
            .await
            .map_err(|e| RepoError::database("get", e))?;

        if response.status() == StatusCode::NOT_FOUND {
            tracing::debug!(item = %name, "Firestore document absent");
            return Ok(None);
        }

        let response = ensure_success("get", name.as_str(), response).await?;
        let document: Document = response
            .json()
            .await
            .map_err(RepoError::serialization)?;
        Ok(Some(document.quantity()?))
    }

    async fn set(&self, name: &ItemName, quantity: Quantity) -> Result<(), RepoError> {
        let url = self.document_url(name)?;
        // No updateMask: PATCH replaces the whole document and creates it if missing
        let response = self
            .request(Method::PATCH, url)
            .json(&Document::with_quantity(quantity))
            .send()
            .await
            .map_err(|e| RepoError::database("set", e))?;
        ensure_success("set", name.as_str(), response).await?;

        tracing::debug!(item = %name, quantity = quantity.value(), "Wrote Firestore document");
        Ok(())
    }

    async fn delete(&self, name: &ItemName) -> Result<(), RepoError> {
        let url = self.document_url(name)?;
        let response = self
            .request(Method::DELETE, url)
            .send()
            .await
            .map_err(|e| RepoError::database("delete", e))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(());
        }
        ensure_success("delete", name.as_str(), response).await?;

        tracing::debug!(item = %name, "Deleted Firestore document");
        Ok(())
    }
}

async fn ensure_success(
    operation: &'static str,
    key: &str,
    response: reqwest::Response,
) -> Result<reqwest::Response, RepoError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    tracing::warn!(operation, status = %status, "Firestore request failed");
    if status == StatusCode::CONFLICT {
        return Err(RepoError::conflict(key));
    }
    Err(RepoError::database(operation, format!("HTTP {status}: {body}")))
}

// =============================================================================
// Wire format
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListDocumentsResponse {
    #[serde(default)]
    documents: Vec<Document>,
    #[serde(default)]
    next_page_token: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Document {
    /// Full resource name; only present on responses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default)]
    fields: HashMap<String, FieldValue>,
}

/// One typed Firestore value. Only the numeric variants matter here.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FieldValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    integer_value: Option<IntegerValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    double_value: Option<f64>,
}

/// int64 values arrive as JSON strings, but emulators sometimes send numbers
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum IntegerValue {
    Text(String),
    Number(i64),
}

impl Document {
    fn with_quantity(quantity: Quantity) -> Self {
        let mut fields = HashMap::new();
        fields.insert(
            QUANTITY_FIELD.to_string(),
            FieldValue {
                integer_value: Some(IntegerValue::Text(quantity.value().to_string())),
                double_value: None,
            },
        );
        Self { name: None, fields }
    }

    /// Document ID: the last segment of the resource name.
    fn id(&self) -> Result<&str, RepoError> {
        self.name
            .as_deref()
            .and_then(|n| n.rsplit('/').next())
            .filter(|id| !id.is_empty())
            .ok_or_else(|| RepoError::serialization("document without a name"))
    }

    /// A document with no `quantity` field counts as zero.
    fn quantity(&self) -> Result<Quantity, RepoError> {
        let Some(value) = self.fields.get(QUANTITY_FIELD) else {
            return Ok(Quantity::ZERO);
        };
        match (&value.integer_value, value.double_value) {
            (Some(IntegerValue::Text(text)), _) => text
                .parse::<i64>()
                .map(Quantity::new)
                .map_err(|e| RepoError::serialization(format!("quantity '{text}': {e}"))),
            (Some(IntegerValue::Number(n)), _) => Ok(Quantity::new(*n)),
            (None, Some(d)) => Ok(Quantity::new(d.trunc() as i64)),
            (None, None) => Err(RepoError::serialization("quantity is not a number")),
        }
    }

    fn into_item(self) -> Result<InventoryItem, RepoError> {
        let name = ItemName::from_stored(self.id()?).map_err(RepoError::serialization)?;
        let quantity = self.quantity()?;
        Ok(InventoryItem::new(name, quantity))
    }
}
