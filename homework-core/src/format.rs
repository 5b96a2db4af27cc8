//! Notification text for a single homework record

use serde_json::Value;

use crate::domain::homework::HomeworkStatus;
use crate::error::{FormatError, ShapeError};

/// Renders the status-change message for one homework record
///
/// The record must be a JSON object with `homework_name` and a `status`
/// known to [`HomeworkStatus`].
pub fn format_status(record: &Value) -> Result<String, FormatError> {
    let map = record.as_object().ok_or(ShapeError::RecordNotAMapping)?;

    let name = map
        .get("homework_name")
        .ok_or(ShapeError::MissingHomeworkName)?;
    let status = map.get("status").ok_or(ShapeError::MissingStatus)?;

    let status = status
        .as_str()
        .and_then(HomeworkStatus::lookup)
        .ok_or_else(|| FormatError::UnknownStatus(display_value(status)))?;

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        display_value(name),
        status.verdict()
    ))
}

// Strings render without JSON quotes, anything else as JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_approved_message() {
        let record = json!({"homework_name": "X", "status": "approved"});
        assert_eq!(
            format_status(&record).unwrap(),
            "Изменился статус проверки работы \"X\". Работа проверена: ревьюеру всё понравилось. Ура!"
        );
    }

    #[test]
    fn test_every_status_uses_catalog_verdict() {
        for status in HomeworkStatus::ALL {
            let record = json!({"homework_name": "hw.zip", "status": status.as_str()});
            let message = format_status(&record).unwrap();
            assert!(message.starts_with("Изменился статус проверки работы \"hw.zip\". "));
            assert!(message.ends_with(status.verdict()));
        }
    }

    #[test]
    fn test_unknown_status() {
        let record = json!({"homework_name": "X", "status": "pending"});
        assert_eq!(
            format_status(&record),
            Err(FormatError::UnknownStatus("pending".to_string()))
        );
        assert_eq!(
            format_status(&record).unwrap_err().to_string(),
            "Статус pending не распознан"
        );
    }

    #[test]
    fn test_non_string_status_is_unknown() {
        let record = json!({"homework_name": "X", "status": 3});
        assert_eq!(
            format_status(&record),
            Err(FormatError::UnknownStatus("3".to_string()))
        );
    }

    #[test]
    fn test_record_not_a_mapping() {
        assert_eq!(
            format_status(&json!(["X", "approved"])),
            Err(FormatError::Shape(ShapeError::RecordNotAMapping))
        );
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(
            format_status(&json!({"status": "approved"})),
            Err(FormatError::Shape(ShapeError::MissingHomeworkName))
        );
        assert_eq!(
            format_status(&json!({"homework_name": "X"})),
            Err(FormatError::Shape(ShapeError::MissingStatus))
        );
    }

    #[test]
    fn test_shape_error_display_is_transparent() {
        let err = format_status(&json!({"homework_name": "X"})).unwrap_err();
        assert_eq!(err.to_string(), "В данных о домашке нет ключа \"status\"");
    }
}
