//! Семантический анализатор для sqlsema
//!
//! Этот модуль отвечает за семантическую проверку SQL запросов за один
//! обход синтаксического дерева: разрешение имен, вывод и проверку типов,
//! совместимость операторов и инкрементальное построение моделей запросов.

pub mod diagnostics;
pub mod expression;
pub mod listener;
pub mod operator;
pub mod query;
pub mod semantino;

#[cfg(test)]
pub mod tests;

// Переэкспортируем основные типы
pub use diagnostics::{DiagnosticCollector, DiagnosticEntry, Severity};
pub use expression::{resolve_column, ColumnLookup, ExpressionEvaluator, TableBinding};
pub use listener::SemanticAnalyzer;
pub use operator::{lookup_operator, Operator, OperatorCategory};
pub use query::{InsertStatement, Projection, SelectQuery};
pub use semantino::{Semantino, SemantinoValue};
