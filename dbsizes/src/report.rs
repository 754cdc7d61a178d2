use itertools::Itertools;
use lazy_static::lazy_static;
use std::fmt;

const NAME_WIDTH: usize = 30;
const SEPARATOR_WIDTH: usize = 45;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub database: String,
    /// Passed through as printed by the client, e.g. `9.52` or `NULL`.
    pub size: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    pub rows: Vec<Row>,
}

impl Report {
    /// Parses the client's tabular output. The first line is the client's
    /// column header and is always dropped; lines with fewer than two
    /// whitespace separated fields are skipped.
    pub fn from_output(output: &[u8]) -> Self {
        lazy_static! {
            static ref PAT: regex::Regex = regex::Regex::new(r"\p{White_Space}+").unwrap();
        }

        let text = String::from_utf8_lossy(output);
        let rows = text
            .split('\n')
            .skip(1)
            .map(str::trim)
            .filter(|ln| !ln.is_empty())
            .filter_map(|ln| PAT.split(ln).next_tuple())
            .map(|(database, size)| Row {
                database: database.to_owned(),
                size: size.to_owned(),
            })
            .collect();

        Report { rows }
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<width$} {}", self.database, self.size, width = NAME_WIDTH)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<width$} {}", "Database", "Size (MB)", width = NAME_WIDTH)?;
        writeln!(f, "{}", "-".repeat(SEPARATOR_WIDTH))?;
        for row in &self.rows {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
