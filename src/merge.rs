use crate::classify::WidthClass;
use crate::error::{Error, Result};
use crate::range::CodepointRange;

/// сортировка и склейка диапазонов класса
///
/// результат упорядочен по началу, диапазоны не пересекаются и не примыкают друг к другу,
/// покрытие совпадает с объединением входных диапазонов. пустой вход - ошибка:
/// пустая таблица сломала бы каждый поиск в ней
pub fn merge(class: WidthClass, mut ranges: Vec<CodepointRange>) -> Result<Vec<CodepointRange>>
{
    ranges.sort_by_key(|r| r.start());

    let mut ranges = ranges.into_iter();
    let mut current = ranges.next().ok_or(Error::EmptyClass(class))?;
    let mut merged = vec![];

    for range in ranges {
        match current.join(&range) {
            Some(joined) => current = joined,
            None => {
                merged.push(current);
                current = range;
            }
        }
    }

    merged.push(current);

    Ok(merged)
}

/// проверка таблицы перед записью: непустая, по возрастанию, без пересечений и смежных диапазонов
pub fn verify(class: WidthClass, ranges: &[CodepointRange]) -> Result<()>
{
    if ranges.is_empty() {
        return Err(Error::EmptyClass(class));
    }

    for (index, pair) in ranges.windows(2).enumerate() {
        let (prev, next) = (&pair[0], &pair[1]);

        if next.start() <= prev.stop().saturating_add(1) {
            return Err(Error::UnorderedTable {
                class,
                index: index + 1,
            });
        }
    }

    Ok(())
}
