//! Client-side dispatch middleware.
//!
//! Decodes the raw responses of the wrapped service with an endpoint's
//! registries and logs every dispatch with `tracing`.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::Bytes;
use tower::{Layer, Service};
use tracing::{Instrument, Level, debug, span, warn};

use crate::{Endpoint, Error, Response, Result};

/// Layer that decodes responses into `Result<O, E>`.
///
/// # Example
///
/// ```ignore
/// use statusmap::middleware::DispatchLayer;
/// use tower::ServiceBuilder;
///
/// let service = ServiceBuilder::new()
///     .layer(DispatchLayer::new(endpoint))
///     .service(transport);
/// ```
pub struct DispatchLayer<O, E> {
    endpoint: Endpoint<O, E>,
}

impl<O, E> DispatchLayer<O, E> {
    /// Create a dispatch layer for the given endpoint.
    #[must_use]
    pub const fn new(endpoint: Endpoint<O, E>) -> Self {
        Self { endpoint }
    }
}

impl<O, E> Clone for DispatchLayer<O, E> {
    fn clone(&self) -> Self {
        Self {
            endpoint: self.endpoint.clone(),
        }
    }
}

impl<O, E> fmt::Debug for DispatchLayer<O, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispatchLayer")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl<S, O, E> Layer<S> for DispatchLayer<O, E> {
    type Service = Dispatch<S, O, E>;

    fn layer(&self, inner: S) -> Self::Service {
        Dispatch {
            inner,
            endpoint: self.endpoint.clone(),
        }
    }
}

/// Service that decodes the responses of its inner service.
pub struct Dispatch<S, O, E> {
    inner: S,
    endpoint: Endpoint<O, E>,
}

impl<S, O, E> Dispatch<S, O, E> {
    /// Create a dispatch service wrapping the given service.
    pub const fn new(inner: S, endpoint: Endpoint<O, E>) -> Self {
        Self { inner, endpoint }
    }
}

impl<S: Clone, O, E> Clone for Dispatch<S, O, E> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            endpoint: self.endpoint.clone(),
        }
    }
}

impl<S: fmt::Debug, O, E> fmt::Debug for Dispatch<S, O, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatch")
            .field("inner", &self.inner)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl<S, O, E, Req> Service<Req> for Dispatch<S, O, E>
where
    S: Service<Req, Response = Response<Bytes>, Error = Error>,
    S::Future: Send + 'static,
    O: Send + 'static,
    E: Send + 'static,
{
    type Response = std::result::Result<O, E>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<()>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Req) -> Self::Future {
        let span = span!(Level::DEBUG, "status_dispatch");
        let endpoint = self.endpoint.clone();
        let response = self.inner.call(request);

        Box::pin(
            async move {
                let response = response.await?;
                let status = response.status();

                let result = endpoint.read_response(response);
                match &result {
                    Ok(Ok(_)) => debug!(status, branch = "output", "response dispatched"),
                    Ok(Err(_)) => debug!(status, branch = "error", "response dispatched"),
                    Err(err) => warn!(status, error = %err, "response dispatch failed"),
                }

                result
            }
            .instrument(span),
        )
    }
}
