//! Система типов SQL диалекта
//!
//! Типы представлены помеченными вариантами: добавление нового вида типа
//! проверяется компилятором во всех местах потребления. Вид `Error` —
//! сторожевое значение, позволяющее продолжить анализ после ошибки типов
//! без каскада повторных диагностик.

use serde::{Deserialize, Serialize};

/// Вид типа данных
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeKind {
    /// Целочисленные типы (TINYINT, SMALLINT, INTEGER, BIGINT)
    Integer,
    /// Типы с фиксированной точкой (DECIMAL, NUMERIC)
    FixedPoint,
    /// Строковые типы с максимальной длиной (VARCHAR, CHAR)
    String { max_length: u32 },
    /// Булевый тип
    Boolean,
    /// Сторожевой тип ошибки
    Error,
}

/// Тип данных SQL: идентичность задается именем, вид — ровно один
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SqlType {
    name: String,
    kind: TypeKind,
}

impl SqlType {
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Сторожевой тип ошибки
    pub fn error() -> Self {
        Self::new("error", TypeKind::Error)
    }

    /// Стандартный булевый тип
    pub fn boolean() -> Self {
        Self::new("boolean", TypeKind::Boolean)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &TypeKind {
        &self.kind
    }

    pub fn is_integer(&self) -> bool {
        matches!(self.kind, TypeKind::Integer)
    }

    pub fn is_fixed_point(&self) -> bool {
        matches!(self.kind, TypeKind::FixedPoint)
    }

    pub fn is_string(&self) -> bool {
        matches!(self.kind, TypeKind::String { .. })
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self.kind, TypeKind::Boolean)
    }

    pub fn is_error(&self) -> bool {
        matches!(self.kind, TypeKind::Error)
    }

    /// Числовые типы: целочисленные и с фиксированной точкой
    pub fn is_numeric(&self) -> bool {
        self.is_integer() || self.is_fixed_point()
    }

    /// Максимальная длина строкового типа
    pub fn max_length(&self) -> Option<u32> {
        match self.kind {
            TypeKind::String { max_length } => Some(max_length),
            _ => None,
        }
    }

    /// Создает экземпляр строкового типа с конкретной длиной
    ///
    /// Вызывается только для строковых базовых типов.
    pub fn instantiate_string(&self, length: u32) -> Self {
        debug_assert!(self.is_string(), "instantiate_string on non-string type");
        Self::new(self.name.clone(), TypeKind::String { max_length: length })
    }
}
