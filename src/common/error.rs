//! Обработка ошибок для sqlsema

use thiserror::Error;

/// Основной тип ошибки для sqlsema
///
/// Семантические проблемы анализируемого SQL не являются `Error` —
/// они накапливаются в `DiagnosticCollector` и не прерывают обход дерева.
/// `Error` покрывает границу крейта: I/O и десериализацию дерева.
#[derive(Error, Debug)]
pub enum Error {
    /// Ошибка I/O операций
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Ошибка сериализации/десериализации
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Тип результата для sqlsema
pub type Result<T> = std::result::Result<T, Error>;
