use serde::{Serialize, Deserialize};
use thiserror::Error;

/// Validation failures detected before any monetary computation runs.
///
/// Both variants refer to the down payment because every other input is
/// expected to be pre-validated by the caller (form constraints, dropdowns).
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ValidationError {
    /// The down payment is below the mandatory 5% of the property price.
    #[error("down payment must be at least 5% of the property price")]
    DownPaymentTooLow,
    /// The down payment is equal to or greater than the property price.
    #[error("down payment cannot be equal to or greater than the property price")]
    DownPaymentExceedsPrice,
}
