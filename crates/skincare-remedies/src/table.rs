//! Attribute/value table for a single remedy.

use std::fmt;

use crate::catalog::RemedyRecord;

/// Extra characters added to the widest value when sizing the Details column
pub const DETAILS_PADDING: usize = 5;

const ATTRIBUTE_HEADER: &str = "Attribute";
const DETAILS_HEADER: &str = "Details";

/// Two-column, left-aligned table with one row per remedy attribute
#[derive(Debug, Clone)]
pub struct RemedyTable<'a> {
    rows: [(&'static str, &'a str); 8],
    attribute_width: usize,
    details_width: usize,
}

impl<'a> RemedyTable<'a> {
    pub fn from_record(record: &'a RemedyRecord) -> Self {
        let rows = record.attributes();

        let longest_value = rows
            .iter()
            .map(|(_, value)| value.chars().count())
            .max()
            .unwrap_or(0);
        let attribute_width = rows
            .iter()
            .map(|(label, _)| label.chars().count())
            .chain(std::iter::once(ATTRIBUTE_HEADER.len()))
            .max()
            .unwrap_or(0);

        Self {
            rows,
            attribute_width,
            details_width: (longest_value + DETAILS_PADDING).max(DETAILS_HEADER.len()),
        }
    }

    pub fn rows(&self) -> &[(&'static str, &'a str)] {
        &self.rows
    }

    /// Width of the Details column, excluding cell margins
    pub fn details_width(&self) -> usize {
        self.details_width
    }

    pub fn attribute_width(&self) -> usize {
        self.attribute_width
    }

    fn write_border(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "+{}+{}+",
            "-".repeat(self.attribute_width + 2),
            "-".repeat(self.details_width + 2)
        )
    }

    fn write_row(&self, f: &mut fmt::Formatter<'_>, label: &str, value: &str) -> fmt::Result {
        writeln!(
            f,
            "| {:<aw$} | {:<dw$} |",
            label,
            value,
            aw = self.attribute_width,
            dw = self.details_width
        )
    }
}

impl fmt::Display for RemedyTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_border(f)?;
        self.write_row(f, ATTRIBUTE_HEADER, DETAILS_HEADER)?;
        self.write_border(f)?;
        for (label, value) in &self.rows {
            self.write_row(f, label, value)?;
        }
        self.write_border(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RemedyCatalog;

    fn blackhead_scrub() -> RemedyRecord {
        RemedyCatalog::embedded().unwrap().get("blackheads").unwrap()[0].clone()
    }

    #[test]
    fn test_details_width_is_longest_value_plus_padding() {
        let catalog = RemedyCatalog::embedded().unwrap();
        for key in catalog.concerns() {
            for record in catalog.get(key).unwrap() {
                let longest = record
                    .attributes()
                    .iter()
                    .map(|(_, v)| v.chars().count())
                    .max()
                    .unwrap();
                let table = RemedyTable::from_record(record);
                assert_eq!(table.details_width(), longest + DETAILS_PADDING);
            }
        }
    }

    #[test]
    fn test_rows_follow_fixed_order() {
        let record = blackhead_scrub();
        let table = RemedyTable::from_record(&record);
        assert_eq!(table.rows()[0], ("Remedy", "Baking Soda Face Scrub"));
        assert_eq!(table.rows()[1], ("Ingredients", "1 tbsp baking soda, 1 tbsp water"));
        assert_eq!(table.rows()[6], ("How It Works", "Baking soda unclogs pores."));
        assert_eq!(table.rows()[7].0, "Benefits");
    }

    #[test]
    fn test_render_layout() {
        let record = blackhead_scrub();
        let table = RemedyTable::from_record(&record);
        let rendered = table.to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        // border, header, border, 8 rows, border
        assert_eq!(lines.len(), 12);
        assert!(lines[0].starts_with("+-"));
        assert_eq!(lines[0], lines[2]);
        assert_eq!(lines[0], lines[11]);
        assert!(lines[1].starts_with("| Attribute    | Details "));
        assert!(lines[3].starts_with("| Remedy       | Baking Soda Face Scrub "));

        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
        // three separators plus four margin spaces
        assert_eq!(width, table.attribute_width() + table.details_width() + 7);
    }

    #[test]
    fn test_short_values_keep_header_width() {
        let record = RemedyRecord {
            remedy: "a".into(),
            ingredients: "b".into(),
            method: "c".into(),
            application: "d".into(),
            frequency: "e".into(),
            tips: "f".into(),
            how_it_works: "g".into(),
            benefits: "h".into(),
        };
        let table = RemedyTable::from_record(&record);
        assert_eq!(table.details_width(), DETAILS_HEADER.len());
        assert_eq!(table.attribute_width(), "How It Works".len());
    }
}
