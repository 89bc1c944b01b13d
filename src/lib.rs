//! sqlsema - Семантический анализ SQL диалекта на Rust
//!
//! Этот крейт реализует семантическую фазу фронтенда SQL: по готовому
//! синтаксическому дереву за один обход строятся проверенные и
//! типизированные модели операторов DDL (CREATE TABLE) и DML
//! (SELECT, INSERT) вместе с упорядоченным журналом диагностики.

pub mod analyzer;
pub mod catalog;
pub mod cli;
pub mod common;
pub mod symtab;
pub mod syntax;

pub use analyzer::SemanticAnalyzer;
pub use common::error::{Error, Result};

/// Версия библиотеки
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
