use thiserror::Error;

/// Errors raised by the sample-generation core
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SignalError {
    /// Normalisation range collapsed to a single point
    #[error("Cannot normalise over an empty range (maxval = minval = {maxval})")]
    Domain { maxval: f64, minval: f64 },
}
