//! Тесты для каталога метаданных
