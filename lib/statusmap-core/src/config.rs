//! Dispatch configuration types.

use std::ops::RangeInclusive;

use derive_more::Display;

use crate::ConfigError;

/// Status codes accepted by registries.
pub const VALID_STATUS: RangeInclusive<u16> = 100..=599;

/// Check that `status` lies in [`VALID_STATUS`].
///
/// # Errors
///
/// Returns [`ConfigError::InvalidStatusCode`] otherwise.
pub fn validate_status(status: u16) -> Result<u16, ConfigError> {
    if VALID_STATUS.contains(&status) {
        Ok(status)
    } else {
        Err(ConfigError::InvalidStatusCode(status))
    }
}

/// Which outputs of an endpoint a registry describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum Branch {
    /// Normal outputs.
    #[default]
    #[display("output")]
    Output,
    /// Error outputs.
    #[display("error")]
    Error,
}

/// What to do when two class-based variants share an erased class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErasurePolicy {
    /// Refuse the registration with [`ConfigError::ErasedClassConflict`].
    #[default]
    Reject,
    /// Accept the registration and log a warning.
    Warn,
}

/// Configuration shared by registry builders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchConfig {
    /// Status of a default output variant without an explicit code.
    pub output_status: u16,
    /// Status of a default error variant without an explicit code.
    pub error_status: u16,
    /// Handling of ambiguous class-based variants.
    pub erasure_policy: ErasurePolicy,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            output_status: 200,
            error_status: 400,
            erasure_policy: ErasurePolicy::Reject,
        }
    }
}

impl DispatchConfig {
    /// Create a new configuration builder.
    #[must_use]
    pub fn builder() -> DispatchConfigBuilder {
        DispatchConfigBuilder::default()
    }

    /// Status used by a default variant of `branch` when it has no explicit code.
    #[must_use]
    pub const fn default_status(&self, branch: Branch) -> u16 {
        match branch {
            Branch::Output => self.output_status,
            Branch::Error => self.error_status,
        }
    }
}

/// Builder for [`DispatchConfig`].
#[derive(Debug, Clone, Default)]
pub struct DispatchConfigBuilder {
    output_status: Option<u16>,
    error_status: Option<u16>,
    erasure_policy: Option<ErasurePolicy>,
}

impl DispatchConfigBuilder {
    /// Set the status of default output variants.
    #[must_use]
    pub const fn output_status(mut self, status: u16) -> Self {
        self.output_status = Some(status);
        self
    }

    /// Set the status of default error variants.
    #[must_use]
    pub const fn error_status(mut self, status: u16) -> Self {
        self.error_status = Some(status);
        self
    }

    /// Set the erasure policy.
    #[must_use]
    pub const fn erasure_policy(mut self, policy: ErasurePolicy) -> Self {
        self.erasure_policy = Some(policy);
        self
    }

    /// Build the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidStatusCode`] if a default status lies
    /// outside `100..=599`.
    pub fn build(self) -> Result<DispatchConfig, ConfigError> {
        let defaults = DispatchConfig::default();
        Ok(DispatchConfig {
            output_status: validate_status(self.output_status.unwrap_or(defaults.output_status))?,
            error_status: validate_status(self.error_status.unwrap_or(defaults.error_status))?,
            erasure_policy: self.erasure_policy.unwrap_or(defaults.erasure_policy),
        })
    }
}
