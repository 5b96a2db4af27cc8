//! Response validation
//!
//! Checks a raw API payload field by field, in a fixed order, so a malformed
//! response always yields the same error.

use serde_json::Value;

use crate::domain::homework::PollResponse;
use crate::error::ShapeError;

/// Validates the shape of a poll response
///
/// Requires a JSON object with a `homeworks` array and an integer
/// `current_date`. Records inside `homeworks` are not inspected here.
pub fn validate_response(payload: &Value) -> Result<PollResponse<'_>, ShapeError> {
    let map = payload.as_object().ok_or(ShapeError::NotAMapping)?;

    let homeworks = map
        .get("homeworks")
        .ok_or(ShapeError::MissingHomeworks)?
        .as_array()
        .ok_or(ShapeError::HomeworksNotAList)?;

    let current_date = map
        .get("current_date")
        .ok_or(ShapeError::MissingCurrentDate)?
        .as_i64()
        .ok_or(ShapeError::CurrentDateNotAnInteger)?;

    Ok(PollResponse {
        homeworks: homeworks.as_slice(),
        current_date,
    })
}
