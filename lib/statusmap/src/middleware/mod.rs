//! Tower middleware layers for status-coded dispatch.
//!
//! Both layers hold an [`Endpoint`](crate::Endpoint) and adapt a service to
//! its typed side:
//!
//! - [`DispatchLayer`] - Client side: turns a `Response<Bytes>` into `Result<O, E>`
//! - [`RespondLayer`] - Server side: turns a handler's `Result<O, E>` into a `Response<Bytes>`
//!
//! # Example
//!
//! ```ignore
//! use statusmap::middleware::{DispatchLayer, ServiceBuilder};
//!
//! let client = ServiceBuilder::new()
//!     .layer(DispatchLayer::new(endpoint.clone()))
//!     .service(transport);
//!
//! let user: Result<User, ApiError> = client.oneshot(request).await?;
//! ```

mod dispatch;
mod respond;

pub use dispatch::{Dispatch, DispatchLayer};
pub use respond::{Respond, RespondLayer};

// Re-export tower types for convenience
pub use tower::{Layer, ServiceBuilder};
