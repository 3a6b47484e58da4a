use std::fmt::Write as FmtWrite;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write as IoWrite};
use std::path::Path;

use indoc::writedoc;

use crate::classify::WidthClass;
use crate::error::{Error, Result};
use crate::merge::verify;
use crate::range::CodepointRange;
use crate::tables::WidthTables;

use format::format_range_vec;

pub mod format;

/// синтаксис, в котором записываются таблицы
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat
{
    /// заголовочный файл C: `struct ucs_range`
    C,
    /// модуль Rust: срезы пар `(u32, u32)`
    Rust,
}

impl TableFormat
{
    /// `.rs` - Rust, всё остальное - C
    pub fn from_path(path: impl AsRef<Path>) -> Self
    {
        match path.as_ref().extension().and_then(|e| e.to_str()) {
            Some("rs") => Self::Rust,
            _ => Self::C,
        }
    }
}

/// текст файла с таблицами. таблицы проверяются до записи
pub fn render(tables: &WidthTables, format: TableFormat) -> Result<String>
{
    let mut output = String::new();

    match format {
        TableFormat::C => {
            _ = writedoc!(
                output,
                "
                #pragma once
                #include <stdint.h>

                struct ucs_range {{
                    uint32_t start;
                    uint32_t stop;
                }};
                "
            );
        }
        TableFormat::Rust => {
            _ = writedoc!(
                output,
                "
                // generated by wcwidth_bakery, do not edit
                // ranges are sorted by start, disjoint and non-adjacent
                "
            );
        }
    }

    for (class, ranges) in tables.iter() {
        verify(class, ranges)?;

        output.push('\n');
        write_range_table(&mut output, format, class, ranges);
    }

    Ok(output)
}

/// записать одну таблицу класса
pub fn write_range_table(
    output: &mut String,
    format: TableFormat,
    class: WidthClass,
    ranges: &[CodepointRange],
)
{
    match format {
        TableFormat::C => {
            _ = writeln!(output, "static const struct ucs_range ucs_{}[] = {{", class);
            output.push_str(format_range_vec(ranges, ("{", "}")).as_str());
            output.push_str("};\n");
        }
        TableFormat::Rust => {
            let name = class.name().to_uppercase();

            _ = writeln!(output, "pub const UCS_{}: &[(u32, u32)] = &[", name);
            output.push_str(format_range_vec(ranges, ("(", ")")).as_str());
            output.push_str("];\n");
        }
    }
}

/// записать таблицы в файл, синтаксис выбирается по расширению
pub fn write(path: impl AsRef<Path>, tables: &WidthTables) -> Result<()>
{
    let path = path.as_ref();
    let output = render(tables, TableFormat::from_path(path))?;

    publish(path, output.as_str())
}

/// запись через временный файл рядом с целевым: при ошибке целевой файл не меняется
pub fn publish(path: impl AsRef<Path>, contents: &str) -> Result<()>
{
    let path = path.as_ref();

    let file_name = path.file_name().ok_or_else(|| {
        Error::io(path, io::Error::new(io::ErrorKind::InvalidInput, "no file name"))
    })?;

    let temp = path.with_file_name(format!(".{}.tmp", file_name.to_string_lossy()));

    let written = write_synced(&temp, contents).and_then(|_| fs::rename(&temp, path));

    if let Err(e) = written {
        _ = fs::remove_file(&temp);
        return Err(Error::io(path, e));
    }

    log::info!("{}: {} bytes written", path.display(), contents.len());

    Ok(())
}

fn write_synced(path: &Path, contents: &str) -> io::Result<()>
{
    let mut file = BufWriter::new(File::create(path)?);
    file.write_all(contents.as_bytes())?;

    let file = file.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()
}
