//! API client and client-side synchronization for the registration admin UI.
//!
//! - [`resource::ResourceClient`] talks to one collection (`/students`,
//!   `/teachers`, `/subjects`) and normalizes success and error responses.
//! - [`association::AssociationClient`] attaches and detaches subjects on a
//!   student.
//! - [`store::ViewStateStore`] caches the three collections and is the only
//!   thing that writes them (by refetching).
//! - [`workflows`] holds the editor and association state machines the UI
//!   drives around each call.
//!
//! Everything is generic over [`transport::Transport`], so the same code runs
//! in the browser and in native tests.

pub mod association;
pub mod error;
pub mod resource;
pub mod selection;
pub mod store;
pub mod transport;
pub mod workflows;

pub use error::ApiError;
pub use transport::{ApiRequest, ApiResponse, Method, Transport};
