//! Generic CRUD service for one table of the remote store.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, info};
use validator::Validate;

use crate::domain::entities::{Entity, ResourceSpec};
use crate::domain::transport::{Method, Transport};
use crate::error::AppError;

/// CRUD operations for entity `E` over transport `T`.
///
/// The entity only contributes data (its [`ResourceSpec`] and payload types);
/// every table shares this implementation.
///
/// # Wire conventions
///
/// | Operation | Request |
/// |---|---|
/// | `list` | `GET {path}` |
/// | `get` | `GET {path}/{id}` |
/// | `create` | `POST {path}` |
/// | `update` | `PUT {path}/{id}` |
/// | `delete` | `DELETE {path}?{id_field}=eq.{id}` |
pub struct ResourceService<E: Entity, T: Transport + ?Sized> {
    transport: Arc<T>,
    spec: ResourceSpec,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity, T: Transport + ?Sized> ResourceService<E, T> {
    /// Creates a service at the entity's default path.
    pub fn new(transport: Arc<T>) -> Self {
        Self::with_spec(transport, E::SPEC)
    }

    /// Creates a service at a custom location.
    pub fn with_spec(transport: Arc<T>, spec: ResourceSpec) -> Self {
        Self {
            transport,
            spec,
            _entity: PhantomData,
        }
    }

    pub fn spec(&self) -> &ResourceSpec {
        &self.spec
    }

    /// Fetches the whole collection.
    ///
    /// # Errors
    ///
    /// Propagates transport errors; returns [`AppError::Decode`] if the body is
    /// not an array of records.
    pub async fn list(&self) -> Result<Vec<E>, AppError> {
        let data = self
            .transport
            .execute(Method::Get, &self.spec.path, None)
            .await?;
        let items: Vec<E> = decode(data)?;
        debug!(entity = E::NAME, count = items.len(), "Fetched collection");
        Ok(items)
    }

    /// Fetches one record by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::HttpStatus`] with 404 when the store answers with an
    /// empty result set.
    pub async fn get(&self, id: i64) -> Result<E, AppError> {
        let data = self
            .transport
            .execute(Method::Get, &self.spec.item_path(id), None)
            .await?;
        single(data)?.ok_or_else(|| not_found::<E>(id))
    }

    /// Validates and submits a new record. The store assigns the id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] before any request if the payload is invalid.
    pub async fn create(&self, new: E::New) -> Result<E, AppError> {
        new.validate()?;
        let body = encode(&new)?;
        let data = self
            .transport
            .execute(Method::Post, &self.spec.path, Some(body))
            .await?;
        let created: E =
            single(data)?.ok_or_else(|| AppError::decode("store returned no created record"))?;
        info!(entity = E::NAME, id = created.id(), "Created record");
        Ok(created)
    }

    /// Validates and submits changes to an existing record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] before any request if the patch is
    /// invalid or empty.
    pub async fn update(&self, id: i64, patch: E::Patch) -> Result<E, AppError> {
        patch.validate()?;
        let body = encode(&patch)?;
        if body.as_object().is_some_and(|fields| fields.is_empty()) {
            return Err(AppError::validation(
                "No fields to update",
                json!({ "id": id }),
            ));
        }

        let data = self
            .transport
            .execute(Method::Put, &self.spec.item_path(id), Some(body))
            .await?;
        let updated: E = single(data)?.ok_or_else(|| not_found::<E>(id))?;
        info!(entity = E::NAME, id = updated.id(), "Updated record");
        Ok(updated)
    }

    /// Deletes a record through the store's filter convention.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.transport
            .execute(Method::Delete, &self.spec.delete_path(id), None)
            .await?;
        info!(entity = E::NAME, id, "Deleted record");
        Ok(())
    }
}

fn not_found<E: Entity>(id: i64) -> AppError {
    AppError::http_status(404, format!("{} {id} not found", E::NAME))
}

fn encode<P: Serialize>(payload: &P) -> Result<Value, AppError> {
    serde_json::to_value(payload)
        .map_err(|e| AppError::decode(format!("cannot encode payload: {e}")))
}

fn decode<D: DeserializeOwned>(data: Value) -> Result<D, AppError> {
    serde_json::from_value(data).map_err(|e| AppError::decode(e.to_string()))
}

/// Accepts a bare object or the store's array representation.
///
/// `Ok(None)` for an empty array or an empty body.
fn single<E: DeserializeOwned>(data: Value) -> Result<Option<E>, AppError> {
    match data {
        Value::Null => Ok(None),
        Value::Array(mut items) => {
            if items.is_empty() {
                Ok(None)
            } else {
                decode(items.swap_remove(0)).map(Some)
            }
        }
        other => decode(other).map(Some),
    }
}
