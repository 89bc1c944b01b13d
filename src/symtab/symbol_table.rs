//! Таблица символов с областями видимости
//!
//! Разрешение имен типов нечувствительно к регистру. Стандартная прелюдия
//! встроенных имен строится один раз (только для чтения) и клонируется
//! в каждый анализ, поэтому независимые анализы изолированы друг от друга.

use crate::common::constants::DEFAULT_STRING_LENGTH;
use crate::symtab::types::{SqlType, TypeKind};
use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    static ref STANDARD_PRELUDE: SymbolTable = build_prelude();
}

/// Таблица символов: имена типов и встроенных идентификаторов
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    types: HashMap<String, SqlType>,
    parent: Option<Box<SymbolTable>>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            types: HashMap::new(),
            parent: None,
        }
    }

    /// Создает вложенную область видимости поверх родительской
    pub fn with_parent(parent: SymbolTable) -> Self {
        Self {
            types: HashMap::new(),
            parent: Some(Box::new(parent)),
        }
    }

    /// Определяет имя типа в текущей области
    pub fn define(&mut self, name: &str, sql_type: SqlType) {
        self.types.insert(name.to_ascii_lowercase(), sql_type);
    }

    /// Разрешает имя типа, поднимаясь по цепочке областей
    pub fn resolve(&self, name: &str) -> Option<&SqlType> {
        let key = name.to_ascii_lowercase();
        match self.types.get(&key) {
            Some(sql_type) => Some(sql_type),
            None => self.parent.as_deref().and_then(|p| p.resolve(name)),
        }
    }

    /// Стандартная прелюдия встроенных типов
    pub fn standard_prelude() -> SymbolTable {
        STANDARD_PRELUDE.clone()
    }
}

fn build_prelude() -> SymbolTable {
    let mut table = SymbolTable::new();

    table.define("tinyint", SqlType::new("tinyint", TypeKind::Integer));
    table.define("smallint", SqlType::new("smallint", TypeKind::Integer));
    table.define("int", SqlType::new("integer", TypeKind::Integer));
    table.define("integer", SqlType::new("integer", TypeKind::Integer));
    table.define("bigint", SqlType::new("bigint", TypeKind::Integer));

    table.define("decimal", SqlType::new("decimal", TypeKind::FixedPoint));
    table.define("numeric", SqlType::new("numeric", TypeKind::FixedPoint));

    table.define(
        "varchar",
        SqlType::new(
            "varchar",
            TypeKind::String {
                max_length: DEFAULT_STRING_LENGTH,
            },
        ),
    );
    table.define(
        "char",
        SqlType::new(
            "char",
            TypeKind::String {
                max_length: DEFAULT_STRING_LENGTH,
            },
        ),
    );

    table.define("bool", SqlType::boolean());
    table.define("boolean", SqlType::boolean());

    table
}
