//! Generic client for one server-managed collection.
//!
//! Every call checks the status before looking at the body. Success bodies are
//! decoded for `list_all`, `create` and `update`; `remove` never reads the body
//! because deletions may legitimately answer `204 No Content`.

use std::marker::PhantomData;

use common::model::student::{NewStudent, Student, StudentUpdate};
use common::model::subject::Subject;
use common::model::teacher::{NewTeacher, Teacher, TeacherUpdate};
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ApiError, Result};
use crate::transport::{ApiRequest, ApiResponse, Transport};

/// An entity type reachable at a collection path.
pub trait Resource: DeserializeOwned {
    /// Collection path, e.g. `/students`.
    const PATH: &'static str;
}

/// A resource this client may create, update and delete.
pub trait Writable: Resource {
    /// Creation payload: the entity minus server-assigned fields.
    type New: Serialize;
    /// Full-replacement payload, including the immutable code field.
    type Update: Serialize;
}

impl Resource for Student {
    const PATH: &'static str = "/students";
}

impl Writable for Student {
    type New = NewStudent;
    type Update = StudentUpdate;
}

impl Resource for Teacher {
    const PATH: &'static str = "/teachers";
}

impl Writable for Teacher {
    type New = NewTeacher;
    type Update = TeacherUpdate;
}

impl Resource for Subject {
    const PATH: &'static str = "/subjects";
}

pub struct ResourceClient<R, T> {
    transport: T,
    _resource: PhantomData<fn() -> R>,
}

impl<R, T: Clone> Clone for ResourceClient<R, T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R: Resource, T: Transport> ResourceClient<R, T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            _resource: PhantomData,
        }
    }

    /// Fetches the whole collection. A `null` listing counts as empty.
    pub async fn list_all(&self) -> Result<Vec<R>> {
        let response = self.send(ApiRequest::get(R::PATH)).await?;
        let response = ensure_success(response)?;
        let items: Option<Vec<R>> = decode(&response)?;
        Ok(items.unwrap_or_default())
    }

    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        debug!("{} {}", request.method.as_str(), request.path);
        self.transport.send(request).await
    }
}

impl<R: Writable, T: Transport> ResourceClient<R, T> {
    /// Creates an entity and returns the server's representation, including
    /// the assigned identifier and code.
    pub async fn create(&self, payload: &R::New) -> Result<R> {
        let request = ApiRequest::post(R::PATH).json(payload)?;
        let response = ensure_success(self.send(request).await?)?;
        decode(&response)
    }

    /// Replaces the editable fields of entity `id`.
    pub async fn update(&self, id: &str, payload: &R::Update) -> Result<R> {
        let request = ApiRequest::put(item_path(R::PATH, id)).json(payload)?;
        let response = ensure_success(self.send(request).await?)?;
        decode(&response)
    }

    /// Deletes entity `id`. Any 2xx counts as success.
    pub async fn remove(&self, id: &str) -> Result<()> {
        let response = self.send(ApiRequest::delete(item_path(R::PATH, id))).await?;
        ensure_status(&response)
    }
}

pub(crate) fn item_path(collection: &str, id: &str) -> String {
    format!("{}/{}", collection, id)
}

/// Passes success responses through; turns anything else into
/// [`ApiError::Request`] with a defensively parsed message.
pub(crate) fn ensure_success(response: ApiResponse) -> Result<ApiResponse> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(ApiError::from_response(&response))
    }
}

/// Status-only check for bodyless operations.
pub(crate) fn ensure_status(response: &ApiResponse) -> Result<()> {
    if response.is_success() {
        Ok(())
    } else {
        Err(ApiError::from_status(response))
    }
}

pub(crate) fn decode<V: DeserializeOwned>(response: &ApiResponse) -> Result<V> {
    Ok(serde_json::from_str(&response.body)?)
}
