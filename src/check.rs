use crate::backend::QueryResult;
use crate::error::CheckError;
use crate::extract::{self, ExtractionMode};
use crate::render;
use crate::status::{CheckOutcome, Status};
use crate::threshold::{self, ThresholdExpression};

/// Turn a query result into the single outcome of this invocation.
///
/// Extraction failures become UNKNOWN here, so no failure path can read as
/// a passing check. Triggered outcomes carry the result's cell values for
/// operator diagnosis.
pub fn assess(
    result: &QueryResult,
    mode: ExtractionMode,
    critical: Option<&ThresholdExpression>,
    warning: Option<&ThresholdExpression>,
) -> CheckOutcome {
    let signal = match extract::extract(result, mode) {
        Ok(signal) => signal,
        Err(err) => return outcome_for_error(&err),
    };

    match threshold::evaluate(signal, critical, warning) {
        Status::Ok => CheckOutcome::new(Status::Ok, "Query OK"),
        status => CheckOutcome::new(
            status,
            format!("Results: {}", render::render_values(result)),
        ),
    }
}

/// Map a failed invocation to its UNKNOWN outcome. Connectivity failures
/// keep the underlying driver text for the operator.
pub fn outcome_for_error(err: &CheckError) -> CheckOutcome {
    let message = match err {
        CheckError::Connection { .. } | CheckError::Query { .. } | CheckError::Timeout { .. } => {
            format!("Unable to query PostgreSQL: {}", err)
        }
        _ => err.to_string(),
    };
    CheckOutcome::new(Status::Unknown, message)
}
