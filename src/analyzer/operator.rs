//! Реестр операторов выражений
//!
//! Отображение токенов операторов в дескрипторы с категорией. Категория
//! определяет правило объединения типов: числовое продвижение для
//! арифметики, сравнение с булевым результатом для отношений,
//! булево-булево для логических операторов.

use lazy_static::lazy_static;
use std::collections::HashMap;

/// Категория оператора
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorCategory {
    Arithmetic,
    Relational,
    Boolean,
}

/// Дескриптор бинарного инфиксного оператора
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operator {
    token: &'static str,
    category: OperatorCategory,
}

impl Operator {
    const fn new(token: &'static str, category: OperatorCategory) -> Self {
        Self { token, category }
    }

    pub fn token(&self) -> &'static str {
        self.token
    }

    pub fn category(&self) -> OperatorCategory {
        self.category
    }
}

lazy_static! {
    static ref OPERATORS: HashMap<&'static str, Operator> = {
        use OperatorCategory::*;
        let mut map = HashMap::new();
        for op in [
            Operator::new("+", Arithmetic),
            Operator::new("-", Arithmetic),
            Operator::new("*", Arithmetic),
            Operator::new("/", Arithmetic),
            Operator::new("=", Relational),
            Operator::new("<>", Relational),
            Operator::new("!=", Relational),
            Operator::new("<", Relational),
            Operator::new(">", Relational),
            Operator::new("<=", Relational),
            Operator::new(">=", Relational),
            Operator::new("and", Boolean),
            Operator::new("or", Boolean),
        ] {
            map.insert(op.token(), op);
        }
        map
    };
}

/// Разрешает токен оператора (словесные операторы — без учета регистра)
pub fn lookup_operator(token: &str) -> Option<Operator> {
    let lowered = token.to_ascii_lowercase();
    OPERATORS.get(lowered.as_str()).copied()
}
