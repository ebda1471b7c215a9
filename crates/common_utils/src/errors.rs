//! Errors and error specific types for universal use

/// Custom Result
/// A custom datatype that wraps the error variant <E> into a report, allowing
/// error_stack::Report<E> specific extendability
///
/// Effectively, equivalent to `Result<T, error_stack::Report<E>>`
pub type CustomResult<T, E> = error_stack::Result<T, E>;

/// Validation errors raised by type constructors.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// The provided input is missing a required field.
    #[error("Missing required field: {field_name}")]
    MissingRequiredField {
        /// Name of the missing field.
        field_name: String,
    },

    /// An incorrect value was provided for the field specified by `field_name`.
    #[error("Incorrect value provided for field: {field_name}")]
    IncorrectValueProvided {
        /// Name of the offending field.
        field_name: &'static str,
    },

    /// An invalid input was provided.
    #[error("{message}")]
    InvalidValue {
        /// Description of what was invalid.
        message: String,
    },
}

/// Error produced when an amount cannot be expressed in the unit a gateway
/// expects.
#[derive(Debug, thiserror::Error)]
pub enum AmountConversionError {
    /// The amount does not fit the target representation.
    #[error("Amount conversion failed: {reason}")]
    ConversionFailed {
        /// Why the conversion failed.
        reason: &'static str,
    },
}
