//! Endpoints pair the registry of normal outputs with the registry of errors.

use std::fmt;

use bytes::Bytes;

use crate::{Error, Registry, Response, Result, StatusDocs};

/// Status mapping of an endpoint: one registry per branch.
///
/// # Example
///
/// ```ignore
/// let endpoint = Endpoint::new(outputs, errors);
///
/// // Server side
/// let response = endpoint.respond(&handler_result)?;
///
/// // Client side
/// let result: Result<User, ApiError> = endpoint.read(status, body)?;
/// ```
pub struct Endpoint<O, E> {
    outputs: Registry<O>,
    errors: Registry<E>,
}

impl<O, E> Endpoint<O, E> {
    /// Pair an output registry with an error registry.
    #[must_use]
    pub const fn new(outputs: Registry<O>, errors: Registry<E>) -> Self {
        Self { outputs, errors }
    }

    /// Registry of normal outputs.
    #[must_use]
    pub const fn outputs(&self) -> &Registry<O> {
        &self.outputs
    }

    /// Registry of error outputs.
    #[must_use]
    pub const fn errors(&self) -> &Registry<E> {
        &self.errors
    }

    /// Encode a handler result with the registry of its branch.
    ///
    /// # Errors
    ///
    /// Returns an error if the branch registry cannot encode the value.
    pub fn respond(&self, result: &std::result::Result<O, E>) -> Result<Response<Bytes>> {
        match result {
            Ok(output) => self.outputs.encode(output),
            Err(error) => self.errors.encode(error),
        }
    }

    /// Decode a body received with `status`.
    ///
    /// Explicit error variants win over explicit output variants. Without an
    /// explicit variant, 2xx statuses go to the output default and every other
    /// status to the error default.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownStatusCode`] if no registry accepts the status,
    /// or the codec's error if the body is malformed.
    pub fn read(&self, status: u16, body: Bytes) -> Result<std::result::Result<O, E>> {
        if self.errors.has_explicit(status) {
            return self.errors.decode(status, body).map(Err);
        }
        if self.outputs.has_explicit(status) {
            return self.outputs.decode(status, body).map(Ok);
        }

        let success = (200..300).contains(&status);
        if success && self.outputs.has_default() {
            self.outputs.decode(status, body).map(Ok)
        } else if !success && self.errors.has_default() {
            self.errors.decode(status, body).map(Err)
        } else {
            Err(Error::unknown_status(status, body))
        }
    }

    /// Decode a response.
    ///
    /// # Errors
    ///
    /// See [`Endpoint::read`].
    pub fn read_response(&self, response: Response<Bytes>) -> Result<std::result::Result<O, E>> {
        let (status, _, body) = response.into_parts();
        self.read(status, body)
    }

    /// Document both branches, outputs first.
    #[must_use]
    pub fn describe(&self) -> StatusDocs {
        let mut docs = self.outputs.describe();
        docs.extend(self.errors.describe());
        docs
    }
}

impl<O, E> Clone for Endpoint<O, E> {
    fn clone(&self) -> Self {
        Self {
            outputs: self.outputs.clone(),
            errors: self.errors.clone(),
        }
    }
}

impl<O, E> fmt::Debug for Endpoint<O, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("outputs", &self.outputs)
            .field("errors", &self.errors)
            .finish()
    }
}
