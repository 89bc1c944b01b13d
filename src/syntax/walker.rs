//! Обход синтаксического дерева
//!
//! Один обход в глубину слева направо: для каждого узла сначала вызывается
//! `enter_node`, затем обходятся дети, затем `exit_node`. Вложенность
//! корректна по построению дерева, повторный вход до выхода невозможен.

use crate::syntax::tree::SyntaxNode;

/// Слушатель обхода синтаксического дерева
pub trait SyntaxListener {
    fn enter_node(&mut self, node: &SyntaxNode);
    fn exit_node(&mut self, node: &SyntaxNode);
}

/// Обходит дерево в глубину, уведомляя слушателя о входе и выходе
pub fn walk<L: SyntaxListener + ?Sized>(listener: &mut L, node: &SyntaxNode) {
    listener.enter_node(node);
    for child in &node.children {
        walk(listener, child);
    }
    listener.exit_node(node);
}

/// Контракт слушателя ошибок стадии построения дерева
///
/// Лексические и синтаксические ошибки парсер передает сюда, и они
/// попадают в общий журнал диагностики. Уведомления о неоднозначности
/// грамматики принимаются и намеренно игнорируются.
pub trait SyntaxErrorListener {
    fn syntax_error(&mut self, line: u32, column: u32, message: &str);

    fn report_ambiguity(&mut self, _start_line: u32, _start_column: u32) {
        // Ничего делать не нужно.
    }

    fn report_attempting_full_context(&mut self, _start_line: u32, _start_column: u32) {
        // Ничего делать не нужно.
    }

    fn report_context_sensitivity(&mut self, _start_line: u32, _start_column: u32) {
        // Ничего делать не нужно.
    }
}
