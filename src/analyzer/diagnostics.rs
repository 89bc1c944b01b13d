//! Журнал диагностики семантического анализа
//!
//! Упорядоченный набор записей (строка, колонка, серьезность, сообщение);
//! порядок записей равен порядку обнаружения за один обход дерева.
//! Журнал принадлежит анализатору одной единицы компиляции и никогда
//! не является глобальным синглтоном.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Серьезность диагностики
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Одна запись диагностики
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticEntry {
    pub line: u32,
    pub column: u32,
    pub severity: Severity,
    pub message: String,
}

/// Коллектор диагностики
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiagnosticCollector {
    entries: Vec<DiagnosticEntry>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Добавляет ошибку
    pub fn add_error(&mut self, line: u32, column: u32, message: impl Into<String>) {
        self.entries.push(DiagnosticEntry {
            line,
            column,
            severity: Severity::Error,
            message: message.into(),
        });
    }

    /// Добавляет предупреждение
    pub fn add_warning(&mut self, line: u32, column: u32, message: impl Into<String>) {
        self.entries.push(DiagnosticEntry {
            line,
            column,
            severity: Severity::Warning,
            message: message.into(),
        });
    }

    /// Количество ошибок
    pub fn number_errors(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.severity == Severity::Error)
            .count()
    }

    /// Количество предупреждений
    pub fn number_warnings(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.severity == Severity::Warning)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.number_errors() > 0
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Записи в порядке обнаружения
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEntry> {
        self.entries.iter()
    }

    /// Человекочитаемый многострочный отчет
    pub fn render(&self) -> String {
        let mut report = String::new();
        let count = self.entries.len();
        report.push_str(&format!(
            "{} problem{} found:\n",
            count,
            if count == 1 { "" } else { "s" }
        ));
        for entry in &self.entries {
            report.push_str(&format!(
                "line {}, column {}: {}: {}\n",
                entry.line, entry.column, entry.severity, entry.message
            ));
        }
        report
    }
}
