use std::error::Error;

use serde::Serialize;

use crate::error::ErrorKind;

/// Status for a successful calculation.
pub const STATUS_OK: u16 = 200;
/// Status for a failure that is not one of the known [`ErrorKind`]s.
pub const STATUS_UNKNOWN: u16 = 500;
/// Message for a failure that is not one of the known [`ErrorKind`]s.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown calculation error";

/// The body handed back to the caller: either a result or an error message.
///
/// Absent fields are left out of the JSON, so a success encodes as
/// `{"result":8.0}` and a failure as `{"error":"Division by zero"}`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CalculationResponse {
    /// The computed value, on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<f64>,
    /// The user-facing failure message, on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error:  Option<String>,
}

/// A calculation outcome ready to be delivered: a status code and a body.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// `200` on success, the kind's status on a known failure, `500`
    /// otherwise.
    pub status:   u16,
    /// The body.
    pub response: CalculationResponse,
}

impl Report {
    /// Builds the report for a successful calculation.
    ///
    /// `result` should be finite: JSON has no encoding for infinity or `NaN`.
    /// [`Report::from_outcome`] checks this.
    #[must_use]
    pub const fn success(result: f64) -> Self {
        Self { status:   STATUS_OK,
               response: CalculationResponse { result: Some(result),
                                               error:  None, }, }
    }

    /// Builds the report for a known failure, using the message table.
    #[must_use]
    pub fn failure(kind: ErrorKind) -> Self {
        Self { status:   kind.status_code(),
               response: CalculationResponse { result: None,
                                               error:  Some(kind.message().to_string()), }, }
    }

    /// Builds the report for the outcome of [`calculate`](crate::calculate).
    ///
    /// A result that overflowed to infinity cannot be encoded as a number, so
    /// it is reported as an unknown calculation error rather than a success.
    ///
    /// # Example
    /// ```
    /// use calculon::{calculate, report::Report};
    ///
    /// let report = Report::from_outcome(calculate("10 / 0"));
    /// assert_eq!(report.status, 422);
    /// assert_eq!(report.to_json().unwrap(), r#"{"error":"Division by zero"}"#);
    /// ```
    #[must_use]
    pub fn from_outcome(outcome: Result<f64, ErrorKind>) -> Self {
        match outcome {
            Ok(result) if result.is_finite() => Self::success(result),
            Ok(_) => Self::unknown(),
            Err(kind) => Self::failure(kind),
        }
    }

    /// Builds the report for an arbitrary error.
    ///
    /// An [`ErrorKind`] gets its table entry; anything else is reported as an
    /// unknown calculation error with status `500`.
    ///
    /// # Example
    /// ```
    /// use std::io;
    ///
    /// use calculon::{
    ///     ErrorKind,
    ///     report::{Report, UNKNOWN_ERROR_MESSAGE},
    /// };
    ///
    /// let known = Report::from_error(&ErrorKind::InvalidNumber);
    /// assert_eq!(known.response.error.as_deref(), Some("Invalid number format"));
    ///
    /// let other = io::Error::other("disk on fire");
    /// let unknown = Report::from_error(&other);
    /// assert_eq!(unknown.status, 500);
    /// assert_eq!(unknown.response.error.as_deref(), Some(UNKNOWN_ERROR_MESSAGE));
    /// ```
    #[must_use]
    pub fn from_error(error: &(dyn Error + 'static)) -> Self {
        match error.downcast_ref::<ErrorKind>() {
            Some(kind) => Self::failure(*kind),
            None => Self::unknown(),
        }
    }

    /// Builds the report for a failure outside the message table.
    #[must_use]
    pub fn unknown() -> Self {
        Self { status:   STATUS_UNKNOWN,
               response: CalculationResponse { result: None,
                                               error:  Some(UNKNOWN_ERROR_MESSAGE.to_string()), }, }
    }

    /// Returns `true` if the report describes a successful calculation.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status == STATUS_OK
    }

    /// Encodes the body as a compact JSON object.
    ///
    /// # Errors
    /// Fails only if `serde_json` cannot encode the body.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.response)
    }
}
