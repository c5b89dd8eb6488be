use std::fmt::{self, Display};
use std::io::{self, Write};

use unicode_width::UnicodeWidthStr;

use crate::theme::Palette;

pub(crate) fn display_table<RowType: TableDisplay>(
    rows: &[RowType],
    palette: &Palette,
    mut output: impl Write,
) -> io::Result<()> {
    let column_count = RowType::columns();
    let mut column_widths = (0..column_count)
        .map(|column_index| RowType::column_name(column_index).width())
        .collect::<Vec<_>>();

    for row in rows {
        for (column_index, column_width) in column_widths.iter_mut().enumerate() {
            *column_width = std::cmp::max(row.item(column_index).width(), *column_width);
        }
    }

    output_row(&mut output, column_count, |column_index| {
        palette.header.apply_to(Padded(
            RowType::column_name(column_index),
            column_widths[column_index],
        ))
    })?;
    output_row(&mut output, column_count, |column_index| {
        palette.muted.apply_to(Divider(column_widths[column_index]))
    })?;
    for row in rows {
        output_row(&mut output, column_count, |column_index| {
            let style = if row.emphasized(column_index) {
                &palette.accent
            } else {
                &palette.plain
            };
            style.apply_to(Padded(row.item(column_index), column_widths[column_index]))
        })?;
    }

    Ok(())
}

pub(crate) trait TableDisplay {
    fn columns() -> usize;
    fn column_name(column_index: usize) -> &'static str;
    fn item(&self, column_index: usize) -> &str;

    /// Whether this cell is drawn in the accent colour.
    fn emphasized(&self, _column_index: usize) -> bool {
        false
    }
}

fn output_row<F, D>(
    mut output: impl Write,
    column_count: usize,
    get_column_display: F,
) -> io::Result<()>
where
    D: Display,
    F: Fn(usize) -> D,
{
    for column_index in 0..column_count {
        if column_index != 0 {
            write!(&mut output, "  ")?;
        }
        write!(&mut output, "{}", get_column_display(column_index))?;
    }
    writeln!(&mut output)?;
    Ok(())
}

struct Divider(usize);

impl Display for Divider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.0 {
            write!(f, "─")?;
        }
        Ok(())
    }
}

struct Padded<'a>(&'a str, usize);

impl Display for Padded<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let padding = self.1.saturating_sub(self.0.width());
        write!(f, "{}", self.0)?;
        for _ in 0..padding {
            write!(f, " ")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pwgen::Theme;

    struct Row(&'static str, &'static str);

    impl TableDisplay for Row {
        fn columns() -> usize {
            2
        }

        fn column_name(column_index: usize) -> &'static str {
            match column_index {
                0 => "Setting",
                _ => "Value",
            }
        }

        fn item(&self, column_index: usize) -> &str {
            match column_index {
                0 => self.0,
                _ => self.1,
            }
        }
    }

    #[test]
    fn columns_are_padded_to_widest_cell() {
        console::set_colors_enabled(false);
        let mut out = Vec::new();
        let rows = [Row("Length", "8"), Row("Include Numbers", "no")];
        display_table(&rows, &Palette::for_theme(Theme::Light), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "Setting          Value");
        assert_eq!(lines[1], "───────────────  ─────");
        assert_eq!(lines[2], "Length           8    ");
        assert_eq!(lines[3], "Include Numbers  no   ");
    }
}
