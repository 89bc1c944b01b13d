//! Тесты для системы типов и таблицы символов

pub mod symbol_table_tests;
