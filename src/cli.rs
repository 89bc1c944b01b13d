//! CLI интерфейс для sqlsema
//!
//! Тонкая обертка вокруг анализатора: загружает сериализованное
//! синтаксическое дерево, выполняет один анализ и печатает отчет.
//! Построение дерева из текста SQL — забота внешнего парсера.

use crate::analyzer::SemanticAnalyzer;
use crate::common::Result;
use crate::syntax::SyntaxNode;
use clap::Parser;
use std::path::{Path, PathBuf};

/// sqlsema - Семантический анализатор SQL диалекта
#[derive(Parser)]
#[command(name = "sqlsema")]
#[command(about = "sqlsema - SQL dialect semantic analysis front end")]
#[command(version)]
pub struct Cli {
    /// Файл с синтаксическим деревом в формате JSON
    pub tree: PathBuf,

    /// Печатать сводку каталога после анализа
    #[arg(long)]
    pub summary: bool,
}

/// Загружает синтаксическое дерево из JSON файла
pub fn load_tree(path: &Path) -> Result<SyntaxNode> {
    let data = std::fs::read_to_string(path)?;
    let tree = serde_json::from_str(&data)?;
    Ok(tree)
}

/// Выполняет анализ и возвращает код завершения процесса
pub fn run(cli: &Cli) -> Result<i32> {
    let tree = load_tree(&cli.tree)?;
    let mut analyzer = SemanticAnalyzer::new();
    analyzer.analyze(&tree);

    if !analyzer.diagnostics().is_empty() {
        print!("{}", analyzer.diagnostics().render());
    }
    if cli.summary {
        for table in analyzer.catalog().tables() {
            println!("table {} ({} columns)", table.name, table.len());
        }
    }

    Ok(if analyzer.has_errors() { 1 } else { 0 })
}
