use core::fmt;

use crate::classify::WidthClass;
use crate::range::CodepointRange;

/// статистика по таблице класса
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStats
{
    pub class: WidthClass,
    /// количество диапазонов
    pub ranges: usize,
    /// количество кодпоинтов во всех диапазонах
    pub codepoints: u64,
}

impl TableStats
{
    pub fn new(class: WidthClass, ranges: &[CodepointRange]) -> Self
    {
        Self {
            class,
            ranges: ranges.len(),
            codepoints: ranges.iter().map(|r| r.len()).sum(),
        }
    }

    /// размер таблицы: пара u32 на диапазон
    pub fn size(&self) -> usize
    {
        self.ranges * 2 * core::mem::size_of::<u32>()
    }
}

impl fmt::Display for TableStats
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(
            f,
            "{}: {} ranges, {} codepoints, {} b",
            self.class,
            self.ranges,
            self.codepoints,
            self.size()
        )
    }
}
