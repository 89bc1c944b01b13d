//! Константы для sqlsema

/// Длина строкового типа по умолчанию (VARCHAR без параметра)
pub const DEFAULT_STRING_LENGTH: u32 = 64;
