//! Вычислитель выражений одного вложенного контекста
//!
//! Держит стек операндов, привязанный к одному выражению (например, одной
//! клаузуле WHERE), и связывание таблиц охватывающего запроса. Экземпляры
//! живут на явном стеке контекстов у драйвера обхода: push/pop — единственная
//! мутация стека. После ошибки типов на стеке может не хватать операндов;
//! недостающие замещаются сторожевыми, и обход продолжается.

use crate::analyzer::diagnostics::DiagnosticCollector;
use crate::analyzer::operator::{lookup_operator, OperatorCategory};
use crate::analyzer::semantino::{Semantino, SemantinoValue};
use crate::catalog::{Column, Table};
use crate::symtab::SqlType;
use crate::syntax::Position;

/// Привязка таблицы к запросу под псевдонимом
#[derive(Debug, Clone, PartialEq)]
pub struct TableBinding {
    pub alias: String,
    pub table: Table,
}

/// Результат разрешения ссылки на колонку по связанным таблицам
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnLookup {
    /// Однозначно разрешена: псевдоним таблицы и сама колонка
    Resolved { alias: String, column: Column },
    /// Имя не найдено ни в одной связанной таблице
    NotFound,
    /// Неквалифицированное имя встречается в нескольких таблицах
    Ambiguous,
}

/// Ищет колонку среди связанных таблиц
///
/// Квалифицированная ссылка ищется по псевдониму, неквалифицированная —
/// по всем связанным таблицам. Общий алгоритм для вычислителя выражений
/// и валидации проекций.
pub fn resolve_column(
    tables: &[TableBinding],
    qualifier: Option<&str>,
    column: &str,
) -> ColumnLookup {
    if let Some(qualifier) = qualifier {
        let Some(binding) = tables
            .iter()
            .find(|b| b.alias.eq_ignore_ascii_case(qualifier))
        else {
            return ColumnLookup::NotFound;
        };
        return match binding.table.column(column) {
            Some(col) => ColumnLookup::Resolved {
                alias: binding.alias.clone(),
                column: col.clone(),
            },
            None => ColumnLookup::NotFound,
        };
    }

    let mut found: Option<(String, Column)> = None;
    for binding in tables {
        if let Some(col) = binding.table.column(column) {
            if found.is_some() {
                return ColumnLookup::Ambiguous;
            }
            found = Some((binding.alias.clone(), col.clone()));
        }
    }
    match found {
        Some((alias, column)) => ColumnLookup::Resolved { alias, column },
        None => ColumnLookup::NotFound,
    }
}

/// Вычислитель выражений со стеком операндов
#[derive(Debug)]
pub struct ExpressionEvaluator {
    id: usize,
    tables: Vec<TableBinding>,
    operands: Vec<Semantino>,
}

impl ExpressionEvaluator {
    pub fn new(id: usize, tables: Vec<TableBinding>) -> Self {
        Self {
            id,
            tables,
            operands: Vec::new(),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn push_operand(&mut self, operand: Semantino) {
        log::trace!(
            "evaluator {}: push operand of type {}",
            self.id,
            operand.sql_type().name()
        );
        self.operands.push(operand);
    }

    pub fn pop_operand(&mut self) -> Option<Semantino> {
        self.operands.pop()
    }

    pub fn operand_count(&self) -> usize {
        self.operands.len()
    }

    /// Листовой операнд для константы
    pub fn constant(&self, sql_type: SqlType, value: SemantinoValue) -> Semantino {
        Semantino::new(sql_type, value)
    }

    /// Листовой операнд для ссылки на колонку
    ///
    /// Неразрешенные и неоднозначные ссылки дают диагностику в позиции
    /// ссылки и сторожевой операнд с типом ошибки, чтобы вычисление
    /// могло продолжиться.
    pub fn column_semantino(
        &self,
        qualifier: Option<&str>,
        column: &str,
        pos: Position,
        diagnostics: &mut DiagnosticCollector,
    ) -> Semantino {
        match resolve_column(&self.tables, qualifier, column) {
            ColumnLookup::Resolved { alias, column } => Semantino::new(
                column.sql_type.clone(),
                SemantinoValue::ColumnRef {
                    table_alias: alias,
                    column: column.name,
                },
            ),
            ColumnLookup::NotFound => {
                diagnostics.add_error(
                    pos.line,
                    pos.column,
                    format!("Cannot find column {}", display_name(qualifier, column)),
                );
                Semantino::error()
            }
            ColumnLookup::Ambiguous => {
                diagnostics.add_error(
                    pos.line,
                    pos.column,
                    format!("Column {} is ambiguous", column),
                );
                Semantino::error()
            }
        }
    }

    /// Объединяет два верхних операнда бинарным оператором
    ///
    /// Неизвестный оператор дает ошибку до снятия операндов, чтобы не
    /// портить стек. Правый операнд снимается первым: операнды кладутся
    /// в порядке вычисления слева направо, последний — самый правый.
    pub fn combine(&mut self, op_token: &str, pos: Position, diagnostics: &mut DiagnosticCollector) {
        let Some(op) = lookup_operator(op_token) else {
            diagnostics.add_error(
                pos.line,
                pos.column,
                format!("Unknown operator \"{}\"", op_token),
            );
            return;
        };
        // Неудачное объединение ничего не кладет на стек, поэтому у
        // охватывающего выражения операндов может не хватить; вместо
        // отсутствующего снимается сторожевой операнд.
        let right = self.operands.pop().unwrap_or_else(Semantino::error);
        let left = self.operands.pop().unwrap_or_else(Semantino::error);
        let result = match op.category() {
            OperatorCategory::Arithmetic => arithmetic_result(left.sql_type(), right.sql_type()),
            OperatorCategory::Relational => relational_result(left.sql_type(), right.sql_type()),
            OperatorCategory::Boolean => boolean_result(left.sql_type(), right.sql_type()),
        };
        match result {
            Some(sql_type) => {
                self.push_operand(Semantino::new(sql_type, SemantinoValue::Computed));
            }
            None => {
                diagnostics.add_error(
                    pos.line,
                    pos.column,
                    format!(
                        "Incompatible argument types {} and {}",
                        left.sql_type().name(),
                        right.sql_type().name()
                    ),
                );
            }
        }
    }
}

fn display_name(qualifier: Option<&str>, column: &str) -> String {
    match qualifier {
        Some(qualifier) => format!("{}.{}", qualifier, column),
        None => column.to_string(),
    }
}

/// Числовое продвижение для арифметических операторов
///
/// Целое с целым дает целое, тип с фиксированной точкой поглощает второй
/// числовой операнд. Операнд с типом ошибки дает тип ошибки без новой
/// диагностики.
fn arithmetic_result(left: &SqlType, right: &SqlType) -> Option<SqlType> {
    if left.is_error() || right.is_error() {
        return Some(SqlType::error());
    }
    if !left.is_numeric() || !right.is_numeric() {
        return None;
    }
    if left.is_fixed_point() {
        Some(left.clone())
    } else if right.is_fixed_point() {
        Some(right.clone())
    } else {
        Some(left.clone())
    }
}

/// Сравнимость операндов для реляционных операторов
fn relational_result(left: &SqlType, right: &SqlType) -> Option<SqlType> {
    if left.is_error() || right.is_error() {
        return Some(SqlType::error());
    }
    let comparable = (left.is_numeric() && right.is_numeric())
        || (left.is_string() && right.is_string())
        || (left.is_boolean() && right.is_boolean());
    if comparable {
        Some(SqlType::boolean())
    } else {
        None
    }
}

/// Логические операторы требуют булевых операндов с обеих сторон
fn boolean_result(left: &SqlType, right: &SqlType) -> Option<SqlType> {
    if left.is_error() || right.is_error() {
        return Some(SqlType::error());
    }
    if left.is_boolean() && right.is_boolean() {
        Some(SqlType::boolean())
    } else {
        None
    }
}
