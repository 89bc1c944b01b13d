//! Тесты для таблицы символов

use crate::common::constants::DEFAULT_STRING_LENGTH;
use crate::symtab::{SqlType, SymbolTable, TypeKind};

#[test]
fn test_prelude_resolves_builtin_types() {
    let table = SymbolTable::standard_prelude();

    let integer = table.resolve("integer").expect("integer in prelude");
    assert!(integer.is_integer());

    let decimal = table.resolve("decimal").expect("decimal in prelude");
    assert!(decimal.is_fixed_point());

    let boolean = table.resolve("boolean").expect("boolean in prelude");
    assert!(boolean.is_boolean());

    // Разрешение нечувствительно к регистру
    assert!(table.resolve("INTEGER").is_some());
    assert!(table.resolve("VarChar").is_some());
}

#[test]
fn test_prelude_varchar_default_length() {
    let table = SymbolTable::standard_prelude();
    let varchar = table.resolve("varchar").expect("varchar in prelude");
    assert_eq!(varchar.max_length(), Some(DEFAULT_STRING_LENGTH));
}

#[test]
fn test_unknown_type_is_absent() {
    let table = SymbolTable::standard_prelude();
    assert!(table.resolve("geometry").is_none());
}

#[test]
fn test_scoped_resolution() {
    let mut parent = SymbolTable::new();
    parent.define("money", SqlType::new("money", TypeKind::FixedPoint));

    let mut child = SymbolTable::with_parent(parent);
    // Имя из родительской области видно
    assert!(child.resolve("money").is_some());

    // Определение в дочерней области затеняет родительское
    child.define("money", SqlType::new("money", TypeKind::Integer));
    assert!(child.resolve("money").expect("money defined").is_integer());
}

#[test]
fn test_prelude_clones_are_isolated() {
    let mut first = SymbolTable::standard_prelude();
    first.define("custom", SqlType::boolean());

    let second = SymbolTable::standard_prelude();
    assert!(second.resolve("custom").is_none());
}
