//! Server-side respond middleware.
//!
//! Encodes the typed results of a handler service with an endpoint's
//! registries.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::Bytes;
use tower::{Layer, Service};
use tracing::{Instrument, Level, debug, span, warn};

use crate::{Endpoint, Error, Response, Result};

/// Layer that encodes handler results into responses.
///
/// The wrapped handler yields `Result<O, E>` as its response: an `Err` is a
/// value of the error branch, encoded with its own status code.
///
/// # Example
///
/// ```ignore
/// use statusmap::middleware::RespondLayer;
/// use tower::{ServiceBuilder, service_fn};
///
/// let service = ServiceBuilder::new()
///     .layer(RespondLayer::new(endpoint))
///     .service(service_fn(|id: u64| async move {
///         Ok::<_, statusmap::Error>(find_user(id))
///     }));
/// ```
pub struct RespondLayer<O, E> {
    endpoint: Endpoint<O, E>,
}

impl<O, E> RespondLayer<O, E> {
    /// Create a respond layer for the given endpoint.
    #[must_use]
    pub const fn new(endpoint: Endpoint<O, E>) -> Self {
        Self { endpoint }
    }
}

impl<O, E> Clone for RespondLayer<O, E> {
    fn clone(&self) -> Self {
        Self {
            endpoint: self.endpoint.clone(),
        }
    }
}

impl<O, E> fmt::Debug for RespondLayer<O, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RespondLayer")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl<S, O, E> Layer<S> for RespondLayer<O, E> {
    type Service = Respond<S, O, E>;

    fn layer(&self, inner: S) -> Self::Service {
        Respond {
            inner,
            endpoint: self.endpoint.clone(),
        }
    }
}

/// Service that encodes the results of its inner handler.
pub struct Respond<S, O, E> {
    inner: S,
    endpoint: Endpoint<O, E>,
}

impl<S, O, E> Respond<S, O, E> {
    /// Create a respond service wrapping the given handler.
    pub const fn new(inner: S, endpoint: Endpoint<O, E>) -> Self {
        Self { inner, endpoint }
    }
}

impl<S: Clone, O, E> Clone for Respond<S, O, E> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            endpoint: self.endpoint.clone(),
        }
    }
}

impl<S: fmt::Debug, O, E> fmt::Debug for Respond<S, O, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Respond")
            .field("inner", &self.inner)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl<S, O, E, Req> Service<Req> for Respond<S, O, E>
where
    S: Service<Req, Response = std::result::Result<O, E>, Error = Error>,
    S::Future: Send + 'static,
    O: Send + 'static,
    E: Send + 'static,
{
    type Response = Response<Bytes>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<()>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Req) -> Self::Future {
        let span = span!(Level::DEBUG, "status_respond");
        let endpoint = self.endpoint.clone();
        let handled = self.inner.call(request);

        Box::pin(
            async move {
                let result = handled.await?;
                let branch = if result.is_ok() { "output" } else { "error" };

                let response = endpoint.respond(&result);
                match &response {
                    Ok(response) => debug!(status = response.status(), branch, "result encoded"),
                    Err(err) => warn!(branch, error = %err, "result encoding failed"),
                }

                response
            }
            .instrument(span),
        )
    }
}
