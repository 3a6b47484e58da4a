use crate::error::RecordError;
use crate::range::{CodepointRange, LAST_CODEPOINT};

/// запись UCD: диапазон кодпоинтов и значение свойства
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<'a>
{
    pub range: CodepointRange,
    pub label: &'a str,
}

/// разбор строки вида `CODE[..CODE] ; LABEL [# комментарий]`
///
/// пустые строки и строки-комментарии дают None, всё остальное - запись или ошибку
pub fn parse_line(line: &str) -> Result<Option<Record<'_>>, RecordError>
{
    let line = line.trim();

    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (codes, details) = line
        .split_once(';')
        .ok_or(RecordError::MissingSeparator)?;

    let range = parse_codes(codes.trim())?;
    let label = parse_label(details);

    Ok(Some(Record { range, label }))
}

/// `0300..036F` или `0300`
fn parse_codes(codes: &str) -> Result<CodepointRange, RecordError>
{
    if codes.is_empty() {
        return Err(RecordError::EmptyCodepoint);
    }

    let (start, stop) = match codes.split_once("..") {
        Some((start, stop)) => (parse_hex(start.trim())?, parse_hex(stop.trim())?),
        None => {
            let code = parse_hex(codes)?;
            (code, code)
        }
    };

    CodepointRange::new(start, stop).ok_or(RecordError::ReversedRange { start, stop })
}

fn parse_hex(code: &str) -> Result<u32, RecordError>
{
    // from_str_radix допускает знак, в UCD его не бывает
    if code.is_empty() || !code.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(RecordError::InvalidHex(code.to_owned()));
    }

    let value =
        u32::from_str_radix(code, 16).map_err(|_| RecordError::InvalidHex(code.to_owned()))?;

    match value <= LAST_CODEPOINT {
        true => Ok(value),
        false => Err(RecordError::OutOfRange(value)),
    }
}

/// значение свойства - всё до комментария. пустое значение не совпадает ни с одним классом
fn parse_label(details: &str) -> &str
{
    details.split('#').next().unwrap_or_default().trim()
}
