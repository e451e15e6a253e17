//! [`Repository`] over the REST backend.
//!
//! Collections live at `{base}/{collection}/`; single records at `{base}/{collection}/{id}`.
//! The backend answers writes with `{"message": ...}` rather than the record (a new product
//! also gets its `"id"`), so writes are followed by a listing to return the record as stored.

use super::{ApiError, ErrorBody, Repository, RepositoryError};
use crate::model::Resource;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct HttpRepository {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRepository {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, RepositoryError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(RepositoryError::transport)?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn collection_url<T: Resource>(&self) -> String {
        format!("{}/{}/", self.base_url, T::COLLECTION.path())
    }

    fn record_url<T: Resource>(&self, id: T::Id) -> String {
        format!("{}/{}/{}", self.base_url, T::COLLECTION.path(), Into::<u32>::into(id))
    }

    /// Sends the request and returns the JSON body of a 2xx answer.
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Value, RepositoryError> {
        let response = request.send().await.map_err(RepositoryError::transport)?;
        let status = response.status();
        let text = response.text().await.map_err(RepositoryError::transport)?;

        if !status.is_success() {
            return Err(RepositoryError::Rejected(rejection(
                status.as_u16(),
                status.canonical_reason(),
                &text,
            )));
        }
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(RepositoryError::transport)
    }

    /// Re-reads a record after a write whose answer did not carry it.
    async fn reread<T: Resource>(&self, id: Option<T::Id>) -> Result<T, RepositoryError> {
        let records: Vec<T> = Repository::<T>::list(self).await?;
        written(records, id).ok_or_else(|| {
            RepositoryError::Transport(format!(
                "written {} record missing from listing",
                T::COLLECTION
            ))
        })
    }

    async fn resolve<T: Resource>(
        &self,
        body: Value,
        id: Option<T::Id>,
    ) -> Result<T, RepositoryError> {
        if is_record(&body) {
            return serde_json::from_value(body).map_err(RepositoryError::transport);
        }
        let id = id.or_else(|| answered_id(&body).map(<T::Id as From<u32>>::from));
        debug!(collection = %T::COLLECTION, ?id, "Write answered without record");
        self.reread(id).await
    }
}

/// Builds the rejection for a non-2xx answer, falling back to the status reason.
fn rejection(status: u16, reason: Option<&str>, text: &str) -> ApiError {
    let mut body = serde_json::from_str::<ErrorBody>(text).unwrap_or_default();
    if body.error.trim().is_empty() {
        body.error = reason.unwrap_or("Request failed").to_string();
    }
    ApiError { status, body }
}

/// A write answer is a record when it carries fields beyond `id` and `message`.
fn is_record(body: &Value) -> bool {
    body.as_object()
        .is_some_and(|map| map.keys().any(|key| key != "id" && key != "message"))
}

/// Picks the written record from a listing: the answered id, or else the newest record,
/// since ids are assigned in increasing order.
fn written<T: Resource>(records: Vec<T>, id: Option<T::Id>) -> Option<T> {
    match id {
        Some(id) => records.into_iter().find(|record| record.id() == id),
        None => records
            .into_iter()
            .max_by_key(|record| Into::<u32>::into(record.id())),
    }
}

fn answered_id(body: &Value) -> Option<u32> {
    body.get("id")?.as_u64().and_then(|id| u32::try_from(id).ok())
}

/// Decodes a listing row by row; rows that are not objects are skipped.
fn decode_rows<T: Resource>(body: Value) -> Result<Vec<T>, RepositoryError> {
    let Value::Array(rows) = body else {
        return Err(RepositoryError::Transport(format!(
            "expected a list of {}",
            T::COLLECTION
        )));
    };
    Ok(rows
        .into_iter()
        .filter_map(|row| match serde_json::from_value(row) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(collection = %T::COLLECTION, error = %e, "Skipping unreadable row");
                None
            }
        })
        .collect())
}

#[async_trait]
impl<T: Resource> Repository<T> for HttpRepository {
    async fn list(&self) -> Result<Vec<T>, RepositoryError> {
        let body = self.send(self.client.get(self.collection_url::<T>())).await?;
        decode_rows(body)
    }

    async fn create(&self, params: T::Create) -> Result<T, RepositoryError> {
        let request = self.client.post(self.collection_url::<T>()).json(&params);
        let body = self.send(request).await?;
        self.resolve(body, None).await
    }

    async fn update(&self, id: T::Id, update: T::Update) -> Result<T, RepositoryError> {
        let request = self.client.put(self.record_url::<T>(id)).json(&update);
        let body = self.send(request).await?;
        self.resolve(body, Some(id)).await
    }

    async fn delete(&self, id: T::Id) -> Result<(), RepositoryError> {
        self.send(self.client.delete(self.record_url::<T>(id))).await?;
        Ok(())
    }
}
