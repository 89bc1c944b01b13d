//! Построители моделей запросов
//!
//! Инкрементально наполняемые модели SELECT и INSERT. Построители хранят
//! имена и квалификаторы как есть; проверка проекций по связанным таблицам
//! откладывается до `validate`, связывание колонок и значений INSERT —
//! до вызова байндера.

use crate::analyzer::diagnostics::DiagnosticCollector;
use crate::analyzer::expression::{resolve_column, ColumnLookup, TableBinding};
use crate::analyzer::semantino::Semantino;
use crate::catalog::Table;
use crate::syntax::{ColumnIdent, Position};

/// Проекция запроса SELECT
#[derive(Debug, Clone, PartialEq)]
pub enum Projection {
    /// Проекция '*': фиксируется только позиция
    Wildcard { pos: Position },
    /// Проекция колонки
    Column {
        table: Option<String>,
        column: String,
        alias: Option<String>,
        pos: Position,
    },
}

/// Модель запроса SELECT
#[derive(Debug, Clone)]
pub struct SelectQuery {
    /// Позиция конца оператора (для диагностик по всему запросу)
    pos: Position,
    projections: Vec<Projection>,
    tables: Vec<TableBinding>,
    where_condition: Option<Semantino>,
    /// Идентификатор вычислителя, пока строится фильтр
    active_evaluator: Option<usize>,
}

impl SelectQuery {
    pub fn new(pos: Position) -> Self {
        Self {
            pos,
            projections: Vec::new(),
            tables: Vec::new(),
            where_condition: None,
            active_evaluator: None,
        }
    }

    pub fn pos(&self) -> Position {
        self.pos
    }

    /// Добавляет проекцию '*'
    pub fn add_wildcard_projection(&mut self, pos: Position) {
        self.projections.push(Projection::Wildcard { pos });
    }

    /// Добавляет проекцию колонки; разрешение имени отложено до `validate`
    pub fn add_projection(
        &mut self,
        table: Option<String>,
        column: String,
        alias: Option<String>,
        pos: Position,
    ) {
        self.projections.push(Projection::Column {
            table,
            column,
            alias,
            pos,
        });
    }

    pub fn projections(&self) -> &[Projection] {
        &self.projections
    }

    /// Связывает таблицу с запросом под псевдонимом
    pub fn add_table(&mut self, table: Table, alias: String) {
        self.tables.push(TableBinding { alias, table });
    }

    pub fn tables(&self) -> &[TableBinding] {
        &self.tables
    }

    pub fn set_where_condition(&mut self, condition: Semantino) {
        self.where_condition = Some(condition);
    }

    pub fn where_condition(&self) -> Option<&Semantino> {
        self.where_condition.as_ref()
    }

    pub fn set_active_evaluator(&mut self, id: Option<usize>) {
        self.active_evaluator = id;
    }

    pub fn active_evaluator(&self) -> Option<usize> {
        self.active_evaluator
    }

    /// Проверяет запрос перед передачей дальше
    ///
    /// Запрос без связанных таблиц невалиден, но новая диагностика не
    /// выдается: неразрешенные имена таблиц уже отмечены при разборе FROM.
    /// Каждая непустая проекция разрешается по связанным таблицам; фильтр,
    /// если он есть, булев по построению.
    pub fn validate(&self, diagnostics: &mut DiagnosticCollector) -> bool {
        if self.tables.is_empty() {
            return false;
        }
        let mut valid = true;
        for projection in &self.projections {
            let Projection::Column {
                table, column, pos, ..
            } = projection
            else {
                continue;
            };
            match resolve_column(&self.tables, table.as_deref(), column) {
                ColumnLookup::Resolved { .. } => {}
                ColumnLookup::NotFound => {
                    let shown = match table {
                        Some(table) => format!("{}.{}", table, column),
                        None => column.clone(),
                    };
                    diagnostics.add_error(
                        pos.line,
                        pos.column,
                        format!("Cannot find column {}", shown),
                    );
                    valid = false;
                }
                ColumnLookup::Ambiguous => {
                    diagnostics.add_error(
                        pos.line,
                        pos.column,
                        format!("Column {} is ambiguous", column),
                    );
                    valid = false;
                }
            }
        }
        valid
    }
}

/// Модель оператора INSERT: целевая таблица и пары колонка/значение
#[derive(Debug, Clone, Default)]
pub struct InsertStatement {
    table: String,
    pairs: Vec<(ColumnIdent, String)>,
}

impl InsertStatement {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            pairs: Vec::new(),
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn pairs(&self) -> &[(ColumnIdent, String)] {
        &self.pairs
    }

    /// Сверяет список колонок со списком значений и строит пары
    ///
    /// Расхождение длин — ошибка, но не провал: пары строятся по общему
    /// префиксу, чтобы анализ последующих операторов продолжился. Явно
    /// перечисленные колонки, которых нет в целевой таблице, также
    /// отмечаются ошибкой.
    pub fn bind_columns(
        &mut self,
        pos: Position,
        diagnostics: &mut DiagnosticCollector,
        table: &Table,
        columns: Vec<ColumnIdent>,
        values: Vec<String>,
    ) {
        if columns.len() != values.len() {
            diagnostics.add_error(
                pos.line,
                pos.column,
                format!(
                    "Column list has {} entries but value list has {}",
                    columns.len(),
                    values.len()
                ),
            );
        }
        for ident in &columns {
            if table.column(&ident.name).is_none() {
                diagnostics.add_error(
                    ident.pos.line,
                    ident.pos.column,
                    format!("Undefined column name {}", ident.name),
                );
            }
        }
        self.pairs = columns.into_iter().zip(values).collect();
    }
}
