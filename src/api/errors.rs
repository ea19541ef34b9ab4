use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ошибки границы с движком — то, что поднимаем хост-оболочке.
///
/// Контроллер на них не реагирует: при падении вызова он просто не получает
/// новый снимок и продолжает показывать последние известные действия.
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Ответ движка не удалось разобрать.
    #[error("некорректный ответ движка: {0}")]
    BadResponse(String),

    /// Движок отклонил вызов или отказал транспорт.
    #[error("ошибка вызова движка: {0}")]
    EngineFault(String),

    /// Внутренняя ошибка хост-обвязки.
    #[error("внутренняя ошибка: {0}")]
    Internal(String),
}
