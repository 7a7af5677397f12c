use std::io::{self, Write};

use crate::data::model::{Catalog, CourseRecord};

pub const NO_MATCHES: &str = "No Matching Courses Found.";

/// Write a schedule table to `out`.
///
/// `None` prints the whole catalog. An empty selection prints only
/// [`NO_MATCHES`].
pub fn render<W: Write>(
    catalog: &Catalog,
    records: Option<&[&CourseRecord]>,
    out: &mut W,
) -> io::Result<()> {
    let all;
    let records = match records {
        Some(selected) => selected,
        None => {
            all = catalog.all();
            all.as_slice()
        }
    };

    if records.is_empty() {
        return writeln!(out, "{NO_MATCHES}");
    }

    let header = CourseRecord::header_row();
    writeln!(out, "{header}")?;
    writeln!(out, "{}", "-".repeat(header.chars().count()))?;
    for record in records {
        writeln!(out, "{}", record.format_row())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::record;
    use pretty_assertions::assert_eq;

    fn rendered(catalog: &Catalog, records: Option<&[&CourseRecord]>) -> String {
        let mut out = Vec::new();
        render(catalog, records, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn empty_selection_prints_single_message() {
        let mut catalog = Catalog::new();
        catalog.insert_or_replace(record("BIO", "141", "001", "Smith,John"));
        assert_eq!(rendered(&catalog, Some(&[][..])), "No Matching Courses Found.\n");
    }

    #[test]
    fn empty_catalog_prints_single_message() {
        assert_eq!(rendered(&Catalog::new(), None), "No Matching Courses Found.\n");
    }

    #[test]
    fn full_listing_has_header_rule_and_rows() {
        let mut catalog = Catalog::new();
        catalog.insert_or_replace(record("BIO", "141", "001", "Smith,John"));
        catalog.insert_or_replace(record("MTH", "221", "002", "Lee,Ann"));

        let text = rendered(&catalog, None);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], CourseRecord::header_row());
        assert_eq!(lines[1], "-".repeat(82));
        assert!(lines[2].starts_with("BIO     141"));
        assert!(lines[3].starts_with("MTH     221"));
    }

    #[test]
    fn selection_keeps_given_order() {
        let mut catalog = Catalog::new();
        catalog.insert_or_replace(record("BIO", "141", "001", "Smith,John"));
        catalog.insert_or_replace(record("MTH", "221", "002", "Lee,Ann"));
        let all = catalog.all();
        let reversed = vec![all[1], all[0]];

        let text = rendered(&catalog, Some(reversed.as_slice()));
        let rows: Vec<&str> = text.lines().skip(2).collect();
        assert_eq!(rows, vec![all[1].format_row(), all[0].format_row()]);
    }
}
