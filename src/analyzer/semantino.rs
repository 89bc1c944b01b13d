//! Типизированный операнд выражения ("семантино")
//!
//! Неизменяемая пара из разрешенного типа и значения либо символьной
//! ссылки. Производится листовыми правилами выражений и потребляется
//! комбинаторами; живет на стеке операндов вычислителя до объединения.

use crate::symtab::SqlType;
use serde::{Deserialize, Serialize};

/// Значение операнда или символьная ссылка
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SemantinoValue {
    /// Целочисленный литерал
    IntegerLiteral(i64),
    /// Булевый литерал
    BooleanLiteral(bool),
    /// Ссылка на колонку связанной таблицы
    ColumnRef { table_alias: String, column: String },
    /// Результат объединения подвыражений
    Computed,
}

/// Типизированный операнд
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Semantino {
    sql_type: SqlType,
    value: SemantinoValue,
}

impl Semantino {
    pub fn new(sql_type: SqlType, value: SemantinoValue) -> Self {
        Self { sql_type, value }
    }

    /// Сторожевой операнд с типом ошибки
    pub fn error() -> Self {
        Self::new(SqlType::error(), SemantinoValue::Computed)
    }

    pub fn sql_type(&self) -> &SqlType {
        &self.sql_type
    }

    pub fn value(&self) -> &SemantinoValue {
        &self.value
    }

    pub fn is_error(&self) -> bool {
        self.sql_type.is_error()
    }
}
