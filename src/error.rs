//! Error handling for the probemap library
//!
//! Key misses are not errors: lookups and removals report absence through
//! `Option`. The error type covers the two failure classes the tables can
//! actually signal: invalid construction input and an exhausted probe
//! cycle.

use thiserror::Error;

/// Main error type for the probemap library
#[derive(Error, Debug)]
pub enum ProbeMapError {
    /// Configuration or parameter errors, rejected at construction time
    #[error("Invalid configuration: {message}")]
    Configuration {
        /// Configuration error message
        message: String,
    },

    /// The probe sequence covered every slot without finding space.
    ///
    /// With a full-cycle probing strategy and a load-factor threshold below
    /// one this cannot happen during normal operation; it indicates the
    /// resize policy was bypassed or misconfigured and is not recoverable.
    #[error("Probe cycle exhausted at capacity {capacity}: no free slot remained")]
    CapacityExhausted {
        /// Table capacity when the probe cycle ran dry
        capacity: usize,
    },
}

impl ProbeMapError {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a capacity exhaustion error
    pub fn capacity_exhausted(capacity: usize) -> Self {
        Self::CapacityExhausted { capacity }
    }

    /// Get the error category for logging/metrics
    pub fn category(&self) -> &'static str {
        match self {
            Self::Configuration { .. } => "config",
            Self::CapacityExhausted { .. } => "capacity",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ProbeMapError>;
