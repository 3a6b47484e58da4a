use crate::range::CodepointRange;

/// количество диапазонов в строке таблицы
pub const ENTRIES_PER_ROW: usize = 3;

/// отступ строк таблицы
const INDENT: &str = "    ";

/// представить диапазоны в текстовом виде, по ENTRIES_PER_ROW в строке:
/// `{0x00300, 0x0036f}, ...` - скобки задаются парой brackets
pub fn format_range_vec(ranges: &[CodepointRange], brackets: (&str, &str)) -> String
{
    let (open, close) = brackets;
    let mut output = String::new();

    let rows = ranges.chunks(ENTRIES_PER_ROW);
    let last_row = rows.len().saturating_sub(1);

    for (index, row) in rows.enumerate() {
        let row: Vec<String> = row
            .iter()
            .map(|r| format!("{}0x{:05x}, 0x{:05x}{}", open, r.start(), r.stop(), close))
            .collect();

        output.push_str(INDENT);
        output.push_str(row.join(", ").as_str());

        if index != last_row {
            output.push(',');
        }

        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn ranges(pairs: &[(u32, u32)]) -> Vec<CodepointRange>
    {
        pairs
            .iter()
            .map(|&(start, stop)| CodepointRange::new(start, stop).unwrap())
            .collect()
    }

    #[test]
    fn rows()
    {
        let ranges = ranges(&[(0x378, 0x379), (0x380, 0x383), (0x38B, 0x38B), (0x10FFFE, 0x10FFFF)]);

        assert_eq!(
            format_range_vec(&ranges, ("{", "}")),
            "    {0x00378, 0x00379}, {0x00380, 0x00383}, {0x0038b, 0x0038b},\n    \
             {0x10fffe, 0x10ffff}\n"
        );
    }

    #[test]
    fn full_last_row()
    {
        let ranges = ranges(&[(0, 0), (2, 3), (5, 5)]);

        assert_eq!(
            format_range_vec(&ranges, ("(", ")")),
            "    (0x00000, 0x00000), (0x00002, 0x00003), (0x00005, 0x00005)\n"
        );
    }

    #[test]
    fn empty()
    {
        assert_eq!(format_range_vec(&[], ("{", "}")), "");
    }
}
