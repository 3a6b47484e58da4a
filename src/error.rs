use std::path::PathBuf;

use thiserror::Error;

use crate::classify::WidthClass;

pub type Result<T> = core::result::Result<T, Error>;

/// ошибка разбора одной строки UCD
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError
{
    #[error("missing `;` separator")]
    MissingSeparator,
    #[error("empty codepoint field")]
    EmptyCodepoint,
    #[error("invalid hex codepoint `{0}`")]
    InvalidHex(String),
    #[error("codepoint {0:#X} is beyond U+10FFFF")]
    OutOfRange(u32),
    #[error("range start {start:#X} is past its stop {stop:#X}")]
    ReversedRange
    {
        start: u32,
        stop: u32,
    },
}

#[derive(Debug, Error)]
pub enum Error
{
    /// строка, не являющаяся пустой или комментарием, не разбирается
    #[error("{source_name}:{line}: malformed record `{text}`: {reason}")]
    MalformedRecord
    {
        source_name: String,
        line: usize,
        text: String,
        #[source]
        reason: RecordError,
    },

    /// проход по файлу не дал ни одного диапазона для класса
    #[error("no codepoint ranges found for class `{0}`")]
    EmptyClass(WidthClass),

    /// таблица нарушает порядок, на который полагается бинарный поиск
    #[error("table `{class}` is not sorted and disjoint at entry {index}")]
    UnorderedTable
    {
        class: WidthClass,
        index: usize,
    },

    #[error("{}: {source}", path.display())]
    Io
    {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error
{
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self
    {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
