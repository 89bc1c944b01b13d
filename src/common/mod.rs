//! Общие типы и утилиты для sqlsema

pub mod constants;
pub mod error;

#[cfg(test)]
pub mod test_utils;

pub use constants::*;
pub use error::{Error, Result};
