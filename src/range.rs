use core::fmt;

/// последний допустимый кодпоинт Unicode
pub const LAST_CODEPOINT: u32 = 0x10FFFF;

/// закрытый диапазон кодпоинтов [start, stop]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CodepointRange
{
    start: u32,
    stop: u32,
}

impl CodepointRange
{
    /// диапазон из двух границ, None - если start > stop
    pub fn new(start: u32, stop: u32) -> Option<Self>
    {
        match start <= stop {
            true => Some(Self { start, stop }),
            false => None,
        }
    }

    /// диапазон из одного кодпоинта
    pub fn single(code: u32) -> Self
    {
        Self {
            start: code,
            stop: code,
        }
    }

    #[inline]
    pub fn start(&self) -> u32
    {
        self.start
    }

    #[inline]
    pub fn stop(&self) -> u32
    {
        self.stop
    }

    /// количество кодпоинтов в диапазоне
    pub fn len(&self) -> u64
    {
        (self.stop - self.start) as u64 + 1
    }

    /// next начинается сразу за концом текущего диапазона
    pub fn is_adjacent(&self, next: &Self) -> bool
    {
        self.stop.checked_add(1) == Some(next.start)
    }

    /// диапазоны имеют общие кодпоинты
    pub fn overlaps(&self, other: &Self) -> bool
    {
        self.start <= other.stop && other.start <= self.stop
    }

    /// объединение с диапазоном, который пересекается с текущим или примыкает к нему
    pub fn join(&self, other: &Self) -> Option<Self>
    {
        match self.overlaps(other) || self.is_adjacent(other) || other.is_adjacent(self) {
            true => Some(Self {
                start: self.start.min(other.start),
                stop: self.stop.max(other.stop),
            }),
            false => None,
        }
    }
}

impl fmt::Display for CodepointRange
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self.start == self.stop {
            true => write!(f, "U+{:04X}", self.start),
            false => write!(f, "U+{:04X}..U+{:04X}", self.start, self.stop),
        }
    }
}
