//! Error types for payload validation and formatting

use thiserror::Error;

/// The payload does not have the structure the review API promises
///
/// Display texts are the messages relayed to the recipient.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("Ответ, полученный от API, не является словарем")]
    NotAMapping,

    #[error("В ответе API нет ключа \"homeworks\"")]
    MissingHomeworks,

    #[error("Значение по ключу \"homeworks\" не является списком")]
    HomeworksNotAList,

    #[error("В ответе API нет ключа \"current_date\"")]
    MissingCurrentDate,

    #[error("Значение по ключу \"current_date\" некорректно")]
    CurrentDateNotAnInteger,

    #[error("Данные о домашке не являются словарем")]
    RecordNotAMapping,

    #[error("В данных о домашке нет ключа \"homework_name\"")]
    MissingHomeworkName,

    #[error("В данных о домашке нет ключа \"status\"")]
    MissingStatus,
}

/// Errors produced while rendering a homework record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// Status identifier not present in the catalog
    #[error("Статус {0} не распознан")]
    UnknownStatus(String),
}
