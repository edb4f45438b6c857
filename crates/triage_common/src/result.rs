//! Result and fault types for the diagnostic capture path.

/// The result type for fallible steps on the capture path.
///
/// `Err` carries a [`CaptureFault`]: something about a raw diagnostic could not
/// be enriched as expected. Callers on the capture path log the fault and fall
/// back to a degraded value instead of propagating it, so the compiler's own
/// error reporting is never interrupted.
pub type CaptureResult<T> = Result<T, CaptureFault>;

/// A local fault encountered while enriching a raw diagnostic.
///
/// Faults never escape the capture path. They are reported on the debug
/// channel and the affected field is exported as null.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("capture fault in {field}: {message}")]
pub struct CaptureFault {
    /// The record field that could not be populated.
    pub field: &'static str,
    /// Description of the fault.
    pub message: String,
}

impl CaptureFault {
    /// Creates a new fault for the given record field.
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}
