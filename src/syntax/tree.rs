//! Синтаксическое дерево SQL для sqlsema
//!
//! Модель дерева, которое строит внешний парсер. Анализатор получает
//! узлы только на чтение: вид узла, текст токенов, позицию и детей.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Позиция в исходном тексте (строка и колонка считаются с единицы)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    pub fn start() -> Self {
        Self::new(1, 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Ссылка на таблицу в клаузуле FROM
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRef {
    pub name: String,
    pub alias: Option<String>,
    pub pos: Position,
}

/// Ссылка на колонку с позицией (списки колонок в INSERT)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnIdent {
    pub name: String,
    pub pos: Position,
}

/// Вид узла синтаксического дерева
///
/// Помеченное перечисление вместо иерархии контекстов парсера:
/// обход диспетчеризуется одним match по виду узла.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeKind {
    /// Корень скрипта (список операторов)
    Script,
    /// Оператор CREATE TABLE; дети — определения колонок
    CreateTable { table_name: String },
    /// Определение колонки; дети — узлы атрибутов
    ColumnDefinition {
        column_name: String,
        type_name: String,
        type_params: Vec<u32>,
    },
    /// Атрибут NULL / NOT NULL
    NullableAttribute { not: bool },
    /// Атрибут DEFAULT с текстом литерала
    DefaultValueAttribute { literal: String },
    /// Атрибут PRIMARY KEY
    PrimaryKeyAttribute,
    /// Атрибут UNIQUE
    UniqueAttribute,
    /// Оператор SELECT; дети — проекции, клаузула FROM, клаузула WHERE
    Select,
    /// Проекция '*'
    WildcardProjection,
    /// Проекция колонки с необязательным квалификатором и псевдонимом
    Projection {
        table: Option<String>,
        column: String,
        alias: Option<String>,
    },
    /// Клаузула FROM со списком ссылок на таблицы
    TableClause { refs: Vec<TableRef> },
    /// Клаузула WHERE; единственный ребенок — дерево выражения
    WhereClause,
    /// Бинарное инфиксное выражение; дети — левый и правый операнды.
    /// Позиция узла — позиция токена оператора.
    BinaryExpr { op: String },
    /// Ссылка на колонку в выражении
    ColumnRef {
        table: Option<String>,
        column: String,
    },
    /// Целочисленный литерал
    IntegerLiteral { value: i64 },
    /// Булевый литерал TRUE / FALSE
    BooleanLiteral { value: bool },
    /// Оператор INSERT; значения — числовые литералы по позициям
    Insert {
        table_name: String,
        columns: Option<Vec<ColumnIdent>>,
        values: Option<Vec<String>>,
    },
}

/// Узел синтаксического дерева
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    /// Позиция начала конструкции
    pub pos: Position,
    /// Позиция конца конструкции
    pub end: Position,
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    pub fn new(kind: NodeKind, pos: Position) -> Self {
        Self {
            kind,
            pos,
            end: pos,
            children: Vec::new(),
        }
    }

    pub fn with_end(mut self, end: Position) -> Self {
        self.end = end;
        self
    }

    pub fn with_children(mut self, children: Vec<SyntaxNode>) -> Self {
        self.children = children;
        self
    }

    pub fn with_child(mut self, child: SyntaxNode) -> Self {
        self.children.push(child);
        self
    }
}
