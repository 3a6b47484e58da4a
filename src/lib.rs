//! таблицы ширины символов для терминала: недопустимые кодпоинты, символы нулевой ширины
//! и символы двойной ширины, собранные из extracted/DerivedGeneralCategory.txt и
//! EastAsianWidth.txt

#[macro_use]
extern crate lazy_static;

pub mod classify;
pub mod error;
pub mod merge;
pub mod output;
pub mod range;
pub mod record;
pub mod stats;
pub mod tables;

pub use classify::WidthClass;
pub use error::{Error, RecordError, Result};
pub use output::TableFormat;
pub use range::CodepointRange;
pub use stats::TableStats;
pub use tables::{UcdInput, WidthTables};
