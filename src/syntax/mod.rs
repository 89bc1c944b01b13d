//! Синтаксическое дерево и его обход для sqlsema
//!
//! Построение дерева (лексер, парсер, грамматика) лежит вне этого крейта;
//! здесь только модель узлов и однопроходный обход enter/exit.

pub mod tree;
pub mod walker;

pub use tree::{ColumnIdent, NodeKind, Position, SyntaxNode, TableRef};
pub use walker::{walk, SyntaxErrorListener, SyntaxListener};
