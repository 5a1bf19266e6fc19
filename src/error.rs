//! Error types for specfun

use thiserror::Error;

/// Result type alias using specfun's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in specfun operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Argument outside the function's real domain
    #[error("Domain error in '{func}': {reason}")]
    Domain {
        /// The function name
        func: &'static str,
        /// Why the argument is outside the domain
        reason: String,
    },

    /// Result exceeded the representable range at the working precision
    #[error("Overflow in '{func}': result is not finite")]
    Overflow {
        /// The function name
        func: &'static str,
    },

    /// Series argument outside the region of convergence
    #[error("Series for '{func}' diverges: |x| must be < 1")]
    Divergent {
        /// The function name
        func: &'static str,
    },

    /// Parameter sits on a pole of the function
    #[error("Pole in '{func}': parameter '{parameter}' is a non-positive integer")]
    Pole {
        /// The function name
        func: &'static str,
        /// The offending parameter name
        parameter: &'static str,
    },

    /// Order too close to an integer for the reflection-based formula
    #[error("Near-integer order in '{func}': sin(u*pi) vanishes, formula is singular")]
    NearIntegerOrder {
        /// The function name
        func: &'static str,
    },
}

impl Error {
    /// Create a domain error
    pub fn domain(func: &'static str, reason: impl Into<String>) -> Self {
        Self::Domain {
            func,
            reason: reason.into(),
        }
    }

    /// Create an overflow error
    pub fn overflow(func: &'static str) -> Self {
        Self::Overflow { func }
    }

    /// Create a divergent-series error
    pub fn divergent(func: &'static str) -> Self {
        Self::Divergent { func }
    }

    /// Create a pole error
    pub fn pole(func: &'static str, parameter: &'static str) -> Self {
        Self::Pole { func, parameter }
    }

    /// Create a near-integer-order error
    pub fn near_integer_order(func: &'static str) -> Self {
        Self::NearIntegerOrder { func }
    }
}
