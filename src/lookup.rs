// 🏙️ City Lookup
// Loads the ZIP,City,State file and finds all records matching a ZIP

use anyhow::{Context, Result};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

// ============================================================================
// CITY RECORD
// ============================================================================

/// One row of the city file: `ZIP,City,State`. Read-only once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CityRecord {
    pub zip: String,
    pub city: String,
    pub state: String,
}

impl CityRecord {
    /// Tab-joined display row, matching the original report format
    pub fn display_line(&self) -> String {
        format!("{}\t{}\t{}", self.zip, self.city, self.state)
    }
}

// ============================================================================
// LOADING
// ============================================================================

/// Load every city record from a comma-delimited file.
///
/// The file has no header row. Rows missing a column are malformed input
/// data, not a reason to abort: they are skipped with a warning on stderr.
pub fn load_city_file(path: &Path) -> Result<Vec<CityRecord>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open city file {}", path.display()))?;
    read_city_records(file)
}

/// Parse city records from any reader (the file in production, an in-memory
/// string in tests).
pub fn read_city_records<R: Read>(reader: R) -> Result<Vec<CityRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();

    for (line, result) in rdr.deserialize::<CityRecord>().enumerate() {
        match result {
            Ok(record) => records.push(record),
            Err(err) => {
                eprintln!(
                    "⚠️  Skipping malformed city record on line {}: {}",
                    line + 1,
                    err
                );
            }
        }
    }

    Ok(records)
}

// ============================================================================
// LOOKUP
// ============================================================================

/// All records whose ZIP column equals `zip`, in file order.
///
/// Single accumulating pass; a ZIP with no match yields an empty vec.
pub fn find_cities<'a>(zip: &str, records: &'a [CityRecord]) -> Vec<&'a CityRecord> {
    records.iter().filter(|record| record.zip == zip).collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<CityRecord> {
        read_city_records(
            "00501,Holtsville,NY\n\
             48104,Ann Arbor,MI\n\
             90210,Beverly Hills,CA\n\
             90210,West Hollywood,CA\n"
                .as_bytes(),
        )
        .unwrap()
    }

    #[test]
    fn test_single_match() {
        let records = sample_records();
        let matches = find_cities("00501", &records);

        assert_eq!(matches.len(), 1);
        assert_eq!(
            matches[0],
            &CityRecord {
                zip: "00501".to_string(),
                city: "Holtsville".to_string(),
                state: "NY".to_string(),
            }
        );
    }

    #[test]
    fn test_multiple_matches_preserve_file_order() {
        let records = sample_records();
        let matches = find_cities("90210", &records);

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].city, "Beverly Hills");
        assert_eq!(matches[1].city, "West Hollywood");
    }

    #[test]
    fn test_no_match_is_empty() {
        let records = sample_records();
        assert!(find_cities("99999", &records).is_empty());
    }

    #[test]
    fn test_malformed_rows_are_skipped() {
        let records = read_city_records(
            "00501,Holtsville,NY\n\
             48104\n\
             90210,Beverly Hills,CA\n"
                .as_bytes(),
        )
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].zip, "00501");
        assert_eq!(records[1].zip, "90210");
    }

    #[test]
    fn test_display_line() {
        let records = sample_records();
        assert_eq!(records[0].display_line(), "00501\tHoltsville\tNY");
    }
}
