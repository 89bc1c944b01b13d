//! Утилиты для тестов: построители синтаксических деревьев
//!
//! Позволяют собирать деревья, которые обычно строит внешний парсер,
//! так, чтобы тесты читались как исходный SQL. Позиции по умолчанию —
//! начало файла; тестам, проверяющим позиции, поля открыты напрямую.

use crate::syntax::{ColumnIdent, NodeKind, Position, SyntaxNode, TableRef};

pub fn pos(line: u32, column: u32) -> Position {
    Position::new(line, column)
}

/// Корень скрипта из списка операторов
pub fn script(statements: Vec<SyntaxNode>) -> SyntaxNode {
    SyntaxNode::new(NodeKind::Script, Position::start()).with_children(statements)
}

/// Оператор CREATE TABLE
pub fn create_table(name: &str, columns: Vec<SyntaxNode>) -> SyntaxNode {
    SyntaxNode::new(
        NodeKind::CreateTable {
            table_name: name.to_string(),
        },
        Position::start(),
    )
    .with_children(columns)
}

/// Определение колонки без атрибутов
pub fn column_def(name: &str, type_name: &str, params: &[u32]) -> SyntaxNode {
    column_def_with(name, type_name, params, Vec::new())
}

/// Определение колонки с узлами атрибутов
pub fn column_def_with(
    name: &str,
    type_name: &str,
    params: &[u32],
    attributes: Vec<SyntaxNode>,
) -> SyntaxNode {
    SyntaxNode::new(
        NodeKind::ColumnDefinition {
            column_name: name.to_string(),
            type_name: type_name.to_string(),
            type_params: params.to_vec(),
        },
        Position::start(),
    )
    .with_children(attributes)
}

pub fn not_null() -> SyntaxNode {
    SyntaxNode::new(NodeKind::NullableAttribute { not: true }, Position::start())
}

pub fn nullable() -> SyntaxNode {
    SyntaxNode::new(
        NodeKind::NullableAttribute { not: false },
        Position::start(),
    )
}

pub fn primary_key() -> SyntaxNode {
    SyntaxNode::new(NodeKind::PrimaryKeyAttribute, Position::start())
}

pub fn unique() -> SyntaxNode {
    SyntaxNode::new(NodeKind::UniqueAttribute, Position::start())
}

pub fn default_value(literal: &str) -> SyntaxNode {
    SyntaxNode::new(
        NodeKind::DefaultValueAttribute {
            literal: literal.to_string(),
        },
        Position::start(),
    )
}

/// Оператор SELECT: проекции, клаузула FROM, необязательная WHERE
pub fn select(
    projections: Vec<SyntaxNode>,
    tables: &[(&str, Option<&str>)],
    where_expr: Option<SyntaxNode>,
) -> SyntaxNode {
    let mut children = projections;
    children.push(table_clause(tables));
    if let Some(expr) = where_expr {
        children.push(where_clause(expr));
    }
    SyntaxNode::new(NodeKind::Select, Position::start()).with_children(children)
}

pub fn table_clause(tables: &[(&str, Option<&str>)]) -> SyntaxNode {
    let refs = tables
        .iter()
        .map(|(name, alias)| TableRef {
            name: name.to_string(),
            alias: alias.map(|a| a.to_string()),
            pos: Position::start(),
        })
        .collect();
    SyntaxNode::new(NodeKind::TableClause { refs }, Position::start())
}

pub fn where_clause(expr: SyntaxNode) -> SyntaxNode {
    SyntaxNode::new(NodeKind::WhereClause, Position::start()).with_child(expr)
}

pub fn wildcard() -> SyntaxNode {
    SyntaxNode::new(NodeKind::WildcardProjection, Position::start())
}

pub fn projection(table: Option<&str>, column: &str, alias: Option<&str>) -> SyntaxNode {
    SyntaxNode::new(
        NodeKind::Projection {
            table: table.map(|t| t.to_string()),
            column: column.to_string(),
            alias: alias.map(|a| a.to_string()),
        },
        Position::start(),
    )
}

/// Бинарное инфиксное выражение
pub fn binary(op: &str, left: SyntaxNode, right: SyntaxNode) -> SyntaxNode {
    SyntaxNode::new(
        NodeKind::BinaryExpr { op: op.to_string() },
        Position::start(),
    )
    .with_children(vec![left, right])
}

pub fn col_ref(table: Option<&str>, column: &str) -> SyntaxNode {
    SyntaxNode::new(
        NodeKind::ColumnRef {
            table: table.map(|t| t.to_string()),
            column: column.to_string(),
        },
        Position::start(),
    )
}

pub fn int_lit(value: i64) -> SyntaxNode {
    SyntaxNode::new(NodeKind::IntegerLiteral { value }, Position::start())
}

pub fn bool_lit(value: bool) -> SyntaxNode {
    SyntaxNode::new(NodeKind::BooleanLiteral { value }, Position::start())
}

/// Оператор INSERT с необязательным списком колонок
pub fn insert(table: &str, columns: Option<&[&str]>, values: &[&str]) -> SyntaxNode {
    SyntaxNode::new(
        NodeKind::Insert {
            table_name: table.to_string(),
            columns: columns.map(|names| {
                names
                    .iter()
                    .map(|name| ColumnIdent {
                        name: name.to_string(),
                        pos: Position::start(),
                    })
                    .collect()
            }),
            values: Some(values.iter().map(|v| v.to_string()).collect()),
        },
        Position::start(),
    )
}

/// INSERT без клаузулы VALUES
pub fn insert_without_values(table: &str) -> SyntaxNode {
    SyntaxNode::new(
        NodeKind::Insert {
            table_name: table.to_string(),
            columns: None,
            values: None,
        },
        Position::start(),
    )
}
