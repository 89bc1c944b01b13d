//! Система типов и таблица символов для sqlsema

pub mod symbol_table;
pub mod types;

#[cfg(test)]
pub mod tests;

pub use symbol_table::SymbolTable;
pub use types::{SqlType, TypeKind};
