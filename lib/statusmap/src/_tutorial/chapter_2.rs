//! # Chapter 2: Endpoints & Middleware
//!
//! Pair the output and error registries of an endpoint and plug them into
//! tower services.
//!
//! ## Endpoints
//!
//! ```ignore
//! let endpoint = Endpoint::new(outputs, errors);
//!
//! let response = endpoint.respond(&Err(ApiError::NotFound(not_found)))?;
//! let result: Result<User, ApiError> = endpoint.read(404, body)?;
//! ```
//!
//! When reading, an explicit error variant wins over an explicit output
//! variant. Other statuses go to the output default when they are `2xx`, and
//! to the error default otherwise.
//!
//! ## Client Side
//!
//! [`DispatchLayer`](crate::middleware::DispatchLayer) decodes the responses of
//! a transport service:
//!
//! ```ignore
//! use statusmap::middleware::{DispatchLayer, ServiceBuilder};
//! use statusmap::tower::ServiceExt;
//!
//! let client = ServiceBuilder::new()
//!     .layer(DispatchLayer::new(endpoint.clone()))
//!     .service(transport);
//!
//! match client.oneshot(request).await? {
//!     Ok(user) => println!("{user:?}"),
//!     Err(ApiError::NotFound(_)) => println!("no such user"),
//!     Err(other) => println!("failed: {other:?}"),
//! }
//! ```
//!
//! ## Server Side
//!
//! [`RespondLayer`](crate::middleware::RespondLayer) encodes what a handler
//! returns:
//!
//! ```ignore
//! use statusmap::middleware::{RespondLayer, ServiceBuilder};
//! use statusmap::tower::service_fn;
//!
//! let server = ServiceBuilder::new()
//!     .layer(RespondLayer::new(endpoint))
//!     .service(service_fn(|id: u64| async move {
//!         Ok::<_, statusmap::Error>(find_user(id))
//!     }));
//! ```
//!
//! Both layers log through `tracing`, in `status_dispatch` and
//! `status_respond` spans.
//!
//! ## Documentation
//!
//! ```ignore
//! println!("{}", endpoint.describe());
//! // default -        application/json  -
//! // 404     matcher  application/json  Resource does not exist
//! // default -        application/json  -
//! ```
