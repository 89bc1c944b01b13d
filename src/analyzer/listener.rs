//! Драйвер обхода дерева — семантический анализатор
//!
//! Получает уведомления enter/exit за один обход дерева в глубину и ведет
//! все компоненты анализа: каталог, таблицу символов, стек вычислителей
//! выражений и журнал диагностики. Семантическая ошибка никогда не
//! прерывает обход: вместо результата подставляется сторожевое значение,
//! и инварианты стека и обхода сохраняются. Единственный ранний выход —
//! в рамках одного оператора.

use crate::analyzer::diagnostics::DiagnosticCollector;
use crate::analyzer::expression::ExpressionEvaluator;
use crate::analyzer::query::{InsertStatement, SelectQuery};
use crate::analyzer::semantino::SemantinoValue;
use crate::catalog::{Catalog, Column, Table};
use crate::common::constants::DEFAULT_STRING_LENGTH;
use crate::symtab::{SqlType, SymbolTable};
use crate::syntax::{
    walk, ColumnIdent, NodeKind, Position, SyntaxErrorListener, SyntaxListener, SyntaxNode,
    TableRef,
};

/// Переходные флаги атрибутов строящейся колонки
///
/// Живут строго между входом и выходом одного определения колонки;
/// вне его состояние явно отсутствует.
#[derive(Debug, Clone)]
struct ColumnAttributes {
    has_default_value: bool,
    default_value: Option<String>,
    is_primary_key: bool,
    is_unique: bool,
    is_nullable: bool,
    is_explicit_null: bool,
}

impl Default for ColumnAttributes {
    fn default() -> Self {
        Self {
            has_default_value: false,
            default_value: None,
            is_primary_key: false,
            is_unique: false,
            is_nullable: true,
            is_explicit_null: false,
        }
    }
}

/// Семантический анализатор одной единицы компиляции
pub struct SemanticAnalyzer {
    symbol_table: SymbolTable,
    catalog: Catalog,
    diagnostics: DiagnosticCollector,
    /// Стек контекстов вычисления, зеркалящий вложенность выражений
    evaluators: Vec<ExpressionEvaluator>,
    next_evaluator_id: usize,
    /// Строящаяся таблица; DDL не вкладывается, так что не более одной
    current_table: Option<Table>,
    current_column: Option<ColumnAttributes>,
    select_query: Option<SelectQuery>,
    /// Число ошибок на входе в текущий SELECT: передача дальше
    /// возможна только если оператор не добавил новых
    select_error_mark: usize,
    insert_statement: Option<InsertStatement>,
    /// Запросы, прошедшие валидацию и переданные дальше
    validated_queries: Vec<SelectQuery>,
}

impl SemanticAnalyzer {
    /// Создает анализатор со стандартной прелюдией и пустым каталогом
    pub fn new() -> Self {
        Self {
            symbol_table: SymbolTable::standard_prelude(),
            catalog: Catalog::new(),
            diagnostics: DiagnosticCollector::new(),
            evaluators: Vec::new(),
            next_evaluator_id: 0,
            current_table: None,
            current_column: None,
            select_query: None,
            select_error_mark: 0,
            insert_statement: None,
            validated_queries: Vec::new(),
        }
    }

    /// Анализирует синтаксическое дерево одним обходом
    pub fn analyze(&mut self, tree: &SyntaxNode) {
        walk(self, tree);
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn diagnostics(&self) -> &DiagnosticCollector {
        &self.diagnostics
    }

    /// Грубый предикат успеха для единицы компиляции
    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }

    /// Последний разобранный запрос SELECT
    pub fn select_query(&self) -> Option<&SelectQuery> {
        self.select_query.as_ref()
    }

    /// Последний разобранный оператор INSERT
    pub fn insert_statement(&self) -> Option<&InsertStatement> {
        self.insert_statement.as_ref()
    }

    /// Запросы, прошедшие валидацию, в порядке появления
    pub fn validated_queries(&self) -> &[SelectQuery] {
        &self.validated_queries
    }

    fn query_mut(&mut self) -> &mut SelectQuery {
        self.select_query
            .as_mut()
            .expect("no active SELECT statement")
    }

    fn top_evaluator(&mut self) -> &mut ExpressionEvaluator {
        self.evaluators
            .last_mut()
            .expect("evaluator stack is empty")
    }

    // === DDL ===

    fn enter_create_table(&mut self, table_name: &str) {
        self.current_table = Some(Table::new(table_name));
    }

    fn exit_create_table(&mut self, pos: Position) {
        let table = self
            .current_table
            .take()
            .expect("CREATE TABLE exit without entry");
        if self.catalog.table(&table.name).is_some() {
            self.diagnostics.add_error(
                pos.line,
                pos.column,
                format!("Table {} already exists", table.name),
            );
            return;
        }
        log::debug!(
            "registered table {} with {} columns",
            table.name,
            table.len()
        );
        self.catalog.add_table(table);
    }

    fn enter_column_definition(&mut self) {
        self.current_column = Some(ColumnAttributes::default());
    }

    fn exit_column_definition(
        &mut self,
        column_name: &str,
        type_name: &str,
        type_params: &[u32],
        pos: Position,
    ) {
        let attrs = self
            .current_column
            .take()
            .expect("column definition exit without entry");
        let mut col_type = match self.symbol_table.resolve(type_name) {
            Some(sql_type) => sql_type.clone(),
            None => {
                self.diagnostics
                    .add_error(pos.line, pos.column, "Type expected");
                SqlType::error()
            }
        };
        if col_type.is_fixed_point() {
            // Масштаб и точность принимаются, но игнорируются:
            // особенность диалекта, сохраняется как есть.
            if !type_params.is_empty() {
                self.diagnostics.add_warning(
                    pos.line,
                    pos.column,
                    format!(
                        "The type {} has a fixed scale and precision. These arguments will be ignored.",
                        col_type.name().to_uppercase()
                    ),
                );
            }
        } else if col_type.is_string() {
            match type_params.len() {
                // Без параметра базовый тип уже несет длину по умолчанию
                0 => {
                    debug_assert_eq!(col_type.max_length(), Some(DEFAULT_STRING_LENGTH));
                }
                1 => {
                    col_type = col_type.instantiate_string(type_params[0]);
                }
                _ => {
                    self.diagnostics.add_error(
                        pos.line,
                        pos.column,
                        format!(
                            "The string type {} takes only one size parameter.",
                            col_type.name().to_uppercase()
                        ),
                    );
                    col_type = SqlType::error();
                }
            }
        } else if !col_type.is_error() && !type_params.is_empty() {
            self.diagnostics.add_error(
                pos.line,
                pos.column,
                format!(
                    "The type {} takes no type parameters.",
                    col_type.name().to_uppercase()
                ),
            );
            col_type = SqlType::error();
        }

        let mut column = Column::new(column_name, col_type);
        column.has_default_value = attrs.has_default_value;
        column.default_value = attrs.default_value;
        column.is_primary_key = attrs.is_primary_key;
        column.is_unique = attrs.is_unique;
        column.is_nullable = attrs.is_nullable;
        column.is_explicit_null = attrs.is_explicit_null;

        let table = self
            .current_table
            .as_mut()
            .expect("column definition outside CREATE TABLE");
        if !table.add_column(column) {
            self.diagnostics.add_error(
                pos.line,
                pos.column,
                format!("Column {} already defined", column_name),
            );
        }
    }

    fn column_attrs_mut(&mut self) -> &mut ColumnAttributes {
        self.current_column
            .as_mut()
            .expect("column attribute outside column definition")
    }

    // === SELECT ===

    fn enter_select(&mut self, end: Position) {
        self.select_query = Some(SelectQuery::new(end));
        self.select_error_mark = self.diagnostics.number_errors();
    }

    fn exit_select(&mut self) {
        let valid = self
            .select_query
            .as_ref()
            .expect("SELECT exit without entry")
            .validate(&mut self.diagnostics)
            && self.diagnostics.number_errors() == self.select_error_mark;
        if valid {
            let query = self.select_query.clone().expect("SELECT exit without entry");
            log::debug!(
                "validated SELECT over {} table(s) with {} projection(s)",
                query.tables().len(),
                query.projections().len()
            );
            self.validated_queries.push(query);
        }
    }

    fn exit_table_clause(&mut self, refs: &[TableRef]) {
        for table_ref in refs {
            let alias = table_ref
                .alias
                .clone()
                .unwrap_or_else(|| table_ref.name.clone());
            let resolved = self.catalog.table(&table_ref.name).cloned();
            match resolved {
                Some(table) => self.query_mut().add_table(table, alias),
                None => self.diagnostics.add_error(
                    table_ref.pos.line,
                    table_ref.pos.column,
                    format!("Cannot find table {}", table_ref.name),
                ),
            }
        }
    }

    fn enter_where_clause(&mut self) {
        let id = self.next_evaluator_id;
        self.next_evaluator_id += 1;
        let tables = self.query_mut().tables().to_vec();
        self.evaluators.push(ExpressionEvaluator::new(id, tables));
        self.query_mut().set_active_evaluator(Some(id));
    }

    fn exit_where_clause(&mut self, pos: Position) {
        let mut evaluator = self.evaluators.pop().expect("evaluator stack is empty");
        let query = self
            .select_query
            .as_mut()
            .expect("WHERE clause outside SELECT statement");
        assert_eq!(
            Some(evaluator.id()),
            query.active_evaluator(),
            "evaluator does not match the active query context"
        );
        match evaluator.pop_operand() {
            Some(condition) if condition.sql_type().is_boolean() => {
                query.set_where_condition(condition);
            }
            // Любой небулевый результат, включая сторожевой
            _ => {
                self.diagnostics
                    .add_error(pos.line, pos.column, "Boolean expression expected");
            }
        }
        query.set_active_evaluator(None);
    }

    // === Выражения ===

    fn bin_op(&mut self, op_token: &str, pos: Position) {
        let evaluator = self
            .evaluators
            .last_mut()
            .expect("expression outside evaluator context");
        evaluator.combine(op_token, pos, &mut self.diagnostics);
    }

    fn exit_integer_literal(&mut self, value: i64) {
        let int_type = self
            .symbol_table
            .resolve("integer")
            .cloned()
            .expect("integer type missing from prelude");
        let evaluator = self.top_evaluator();
        let operand = evaluator.constant(int_type, SemantinoValue::IntegerLiteral(value));
        evaluator.push_operand(operand);
    }

    fn exit_boolean_literal(&mut self, value: bool) {
        let evaluator = self.top_evaluator();
        let operand = evaluator.constant(SqlType::boolean(), SemantinoValue::BooleanLiteral(value));
        evaluator.push_operand(operand);
    }

    fn exit_column_ref(&mut self, table: Option<&str>, column: &str, pos: Position) {
        let operand = {
            let evaluator = self
                .evaluators
                .last()
                .expect("expression outside evaluator context");
            evaluator.column_semantino(table, column, pos, &mut self.diagnostics)
        };
        self.top_evaluator().push_operand(operand);
    }

    // === INSERT ===

    fn exit_insert(
        &mut self,
        table_name: &str,
        columns: &Option<Vec<ColumnIdent>>,
        values: &Option<Vec<String>>,
        pos: Position,
    ) {
        let Some(table) = self.catalog.table(table_name).cloned() else {
            self.diagnostics.add_error(
                pos.line,
                pos.column,
                format!("Undefined table name {}", table_name),
            );
            return;
        };
        let Some(values) = values else {
            self.diagnostics
                .add_error(pos.line, pos.column, "No values specified.");
            return;
        };
        // Без явного списка берутся все колонки таблицы в порядке
        // объявления, с позицией самого оператора.
        let idents: Vec<ColumnIdent> = match columns {
            Some(columns) => columns.clone(),
            None => table
                .columns()
                .map(|c| ColumnIdent {
                    name: c.name.clone(),
                    pos,
                })
                .collect(),
        };
        let mut statement = InsertStatement::new(table.name.clone());
        statement.bind_columns(pos, &mut self.diagnostics, &table, idents, values.clone());
        log::debug!(
            "bound INSERT into {} with {} pair(s)",
            statement.table(),
            statement.pairs().len()
        );
        self.insert_statement = Some(statement);
    }
}

impl Default for SemanticAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxListener for SemanticAnalyzer {
    fn enter_node(&mut self, node: &SyntaxNode) {
        match &node.kind {
            NodeKind::CreateTable { table_name } => self.enter_create_table(table_name),
            NodeKind::ColumnDefinition { .. } => self.enter_column_definition(),
            NodeKind::Select => self.enter_select(node.end),
            NodeKind::WhereClause => self.enter_where_clause(),
            _ => {}
        }
    }

    fn exit_node(&mut self, node: &SyntaxNode) {
        match &node.kind {
            NodeKind::CreateTable { .. } => self.exit_create_table(node.pos),
            NodeKind::ColumnDefinition {
                column_name,
                type_name,
                type_params,
            } => self.exit_column_definition(column_name, type_name, type_params, node.pos),
            NodeKind::NullableAttribute { not } => {
                let attrs = self.column_attrs_mut();
                attrs.is_nullable = !not;
                attrs.is_explicit_null = !not;
            }
            NodeKind::DefaultValueAttribute { literal } => {
                let attrs = self.column_attrs_mut();
                attrs.has_default_value = true;
                attrs.default_value = Some(literal.clone());
            }
            NodeKind::PrimaryKeyAttribute => {
                self.column_attrs_mut().is_primary_key = true;
            }
            NodeKind::UniqueAttribute => {
                self.column_attrs_mut().is_unique = true;
            }
            NodeKind::Select => self.exit_select(),
            NodeKind::WildcardProjection => {
                let pos = node.pos;
                self.query_mut().add_wildcard_projection(pos);
            }
            NodeKind::Projection {
                table,
                column,
                alias,
            } => {
                self.query_mut().add_projection(
                    table.clone(),
                    column.clone(),
                    alias.clone(),
                    node.pos,
                );
            }
            NodeKind::TableClause { refs } => self.exit_table_clause(refs),
            NodeKind::WhereClause => self.exit_where_clause(node.pos),
            NodeKind::BinaryExpr { op } => self.bin_op(op, node.pos),
            NodeKind::ColumnRef { table, column } => {
                self.exit_column_ref(table.as_deref(), column, node.pos);
            }
            NodeKind::IntegerLiteral { value } => self.exit_integer_literal(*value),
            NodeKind::BooleanLiteral { value } => self.exit_boolean_literal(*value),
            NodeKind::Insert {
                table_name,
                columns,
                values,
            } => self.exit_insert(table_name, columns, values, node.pos),
            _ => {}
        }
    }
}

impl SyntaxErrorListener for SemanticAnalyzer {
    fn syntax_error(&mut self, line: u32, column: u32, message: &str) {
        self.diagnostics.add_error(line, column, message);
    }
}
