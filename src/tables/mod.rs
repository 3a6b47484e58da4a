use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::classify::{Classify, EastAsianWidth, GeneralCategory, WidthClass};
use crate::error::{Error, Result};
use crate::merge::merge;
use crate::range::CodepointRange;
use crate::record::parse_line;
use crate::stats::TableStats;

/// файл UCD: имя для диагностики и поток строк
pub struct UcdInput<R>
{
    pub name: String,
    pub reader: R,
}

impl<R: BufRead> UcdInput<R>
{
    pub fn new(name: impl Into<String>, reader: R) -> Self
    {
        Self {
            name: name.into(),
            reader,
        }
    }
}

impl UcdInput<BufReader<File>>
{
    /// открыть файл на чтение
    pub fn open(path: impl AsRef<Path>) -> Result<Self>
    {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::io(path, e))?;

        Ok(Self::new(path.display().to_string(), BufReader::new(file)))
    }
}

/// итоговые таблицы классов ширины
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidthTables
{
    pub invalid: Vec<CodepointRange>,
    pub zero_width: Vec<CodepointRange>,
    pub double_width: Vec<CodepointRange>,
}

impl WidthTables
{
    /// собрать таблицы из DerivedGeneralCategory.txt и EastAsianWidth.txt
    pub fn build<G, E>(general: UcdInput<G>, east_asian: UcdInput<E>) -> Result<Self>
    where
        G: BufRead,
        E: BufRead,
    {
        let mut general = collect(general, &GeneralCategory)?;
        let mut east_asian = collect(east_asian, &EastAsianWidth)?;

        let mut take = |class: WidthClass| {
            let ranges = match class {
                WidthClass::DoubleWidth => east_asian.remove(&class),
                _ => general.remove(&class),
            };

            let merged = merge(class, ranges.unwrap_or_default())?;
            log::info!("{}", TableStats::new(class, &merged));

            Ok::<_, Error>(merged)
        };

        Ok(Self {
            invalid: take(WidthClass::Invalid)?,
            zero_width: take(WidthClass::ZeroWidth)?,
            double_width: take(WidthClass::DoubleWidth)?,
        })
    }

    pub fn get(&self, class: WidthClass) -> &[CodepointRange]
    {
        match class {
            WidthClass::Invalid => &self.invalid,
            WidthClass::ZeroWidth => &self.zero_width,
            WidthClass::DoubleWidth => &self.double_width,
        }
    }

    /// таблицы в порядке записи
    pub fn iter(&self) -> impl Iterator<Item = (WidthClass, &[CodepointRange])>
    {
        WidthClass::ALL.into_iter().map(move |class| (class, self.get(class)))
    }

    pub fn stats(&self) -> Vec<TableStats>
    {
        self.iter()
            .map(|(class, ranges)| TableStats::new(class, ranges))
            .collect()
    }
}

/// один проход по файлу: несклеенные диапазоны по классам, которые даёт классификатор
fn collect<R: BufRead>(
    input: UcdInput<R>,
    classifier: &dyn Classify,
) -> Result<BTreeMap<WidthClass, Vec<CodepointRange>>>
{
    let UcdInput { name, reader } = input;

    let mut classes: BTreeMap<WidthClass, Vec<CodepointRange>> = classifier
        .classes()
        .iter()
        .map(|&class| (class, vec![]))
        .collect();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| Error::io(&name, e))?;

        let record = match parse_line(&line) {
            Ok(Some(record)) => record,
            Ok(None) => continue,
            Err(reason) => {
                return Err(Error::MalformedRecord {
                    source_name: name,
                    line: index + 1,
                    text: line.trim().to_owned(),
                    reason,
                })
            }
        };

        if let Some(class) = classifier.classify(record.label) {
            classes.entry(class).or_default().push(record.range);
        }
    }

    for (class, ranges) in &classes {
        log::debug!("{}: {} raw ranges of {}", name, ranges.len(), class);
    }

    Ok(classes)
}
