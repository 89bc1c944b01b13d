//! Каталог метаданных sqlsema
//!
//! Набор объявленных таблиц одной единицы компиляции. Каталог пополняется
//! при обработке DDL и опрашивается при обработке DML; после завершения
//! обхода он считается замороженным и может свободно разделяться на чтение.

use crate::symtab::SqlType;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[cfg(test)]
pub mod tests;

/// Колонка таблицы
///
/// Создается один раз при обработке CREATE TABLE и далее неизменяема.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub sql_type: SqlType,
    pub has_default_value: bool,
    pub default_value: Option<String>,
    pub is_primary_key: bool,
    pub is_unique: bool,
    pub is_nullable: bool,
    pub is_explicit_null: bool,
}

impl Column {
    pub fn new(name: impl Into<String>, sql_type: SqlType) -> Self {
        Self {
            name: name.into(),
            sql_type,
            has_default_value: false,
            default_value: None,
            is_primary_key: false,
            is_unique: false,
            is_nullable: true,
            is_explicit_null: false,
        }
    }
}

/// Таблица: упорядоченное отображение имени колонки в колонку
///
/// Порядок вставки равен порядку объявления. Имена колонок
/// нечувствительны к регистру.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    columns: IndexMap<String, Column>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: IndexMap::new(),
        }
    }

    /// Регистрирует колонку; возвращает false, если имя уже занято
    pub fn add_column(&mut self, column: Column) -> bool {
        let key = column.name.to_ascii_lowercase();
        if self.columns.contains_key(&key) {
            return false;
        }
        self.columns.insert(key, column);
        true
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.get(&name.to_ascii_lowercase())
    }

    /// Колонки в порядке объявления
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.values()
    }

    /// Имена колонок в порядке объявления
    pub fn column_names(&self) -> Vec<String> {
        self.columns.values().map(|c| c.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Каталог объявленных таблиц (только пополняется в рамках одного анализа)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    tables: IndexMap<String, Table>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            tables: IndexMap::new(),
        }
    }

    /// Регистрирует таблицу; проверка коллизии имени лежит на вызывающем
    pub fn add_table(&mut self, table: Table) {
        self.tables.insert(table.name.to_ascii_lowercase(), table);
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.get(&name.to_ascii_lowercase())
    }

    /// Таблицы в порядке регистрации
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.tables.values()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
