// 🖨️ Report Formatting
// Builds the per-ZIP and per-barcode console blocks the driver prints

use crate::barcode::{decode_barcode, Barcode};
use crate::codec::CodecError;
use crate::lookup::{find_cities, CityRecord};

/// Literal line reported when a barcode failed to decode into a ZIP
pub const NO_LOCATION_FOUND: &str = "No Location Found";

// ============================================================================
// CITY RESULT LINES
// ============================================================================

/// City result lines for a decoded ZIP.
///
/// A failed decode yields exactly one line, the literal `No Location Found`;
/// a valid ZIP yields one tab-joined row per matching record (possibly none).
pub fn city_lines(decoded: &Result<String, CodecError>, records: &[CityRecord]) -> Vec<String> {
    match decoded {
        Err(_) => vec![NO_LOCATION_FOUND.to_string()],
        Ok(zip) => find_cities(zip, records)
            .into_iter()
            .map(CityRecord::display_line)
            .collect(),
    }
}

// ============================================================================
// REPORT BLOCKS
// ============================================================================

/// Report block for one ZIP-file entry: matching city rows, the ZIP, then the
/// readable and postable barcode renderings.
pub fn zip_report(zip: &str, records: &[CityRecord]) -> String {
    let mut out = String::new();

    for city in find_cities(zip, records) {
        out.push_str(&city.display_line());
        out.push('\n');
    }

    out.push_str(zip);
    out.push('\n');

    match Barcode::from_zip(zip) {
        Ok(barcode) => {
            out.push_str(&format!("\tReadable Barcode {}\n", barcode.readable()));
            out.push_str(&format!("\tPostable Barcode {}\n", barcode.postable()));
        }
        Err(err) => {
            out.push_str(&format!("\tERROR - {}!\n", err));
        }
    }

    out
}

/// Report block for one barcode-file entry: the decode result, then the
/// matching city rows (or `No Location Found` when the decode failed).
pub fn barcode_report(barcode: &str, records: &[CityRecord]) -> String {
    let decoded = decode_barcode(barcode);

    let mut out = match &decoded {
        Ok(zip) => format!("{} ---> {}\n", barcode, zip),
        Err(err) => format!("{} ---> ERROR - {}!\n", barcode, err),
    };

    for line in city_lines(&decoded, records) {
        out.push_str(&line);
        out.push('\n');
    }

    out
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::read_city_records;

    fn sample_records() -> Vec<CityRecord> {
        read_city_records("00501,Holtsville,NY\n12345,Schenectady,NY\n".as_bytes()).unwrap()
    }

    #[test]
    fn test_city_lines_on_decode_error() {
        let records = sample_records();
        let lines = city_lines(&Err(CodecError::InvalidCheckDigit), &records);

        assert_eq!(lines, vec![NO_LOCATION_FOUND.to_string()]);
    }

    #[test]
    fn test_city_lines_on_match() {
        let records = sample_records();
        let lines = city_lines(&Ok("00501".to_string()), &records);

        assert_eq!(lines, vec!["00501\tHoltsville\tNY".to_string()]);
    }

    #[test]
    fn test_city_lines_empty_for_unknown_zip() {
        let records = sample_records();
        assert!(city_lines(&Ok("99999".to_string()), &records).is_empty());
    }

    #[test]
    fn test_zip_report_block() {
        let records = sample_records();
        let block = zip_report("12345", &records);

        assert_eq!(
            block,
            "12345\tSchenectady\tNY\n\
             12345\n\
             \tReadable Barcode |\t:::||\t::|:|\t::||:\t:|::|\t:|:|:\t:|:|:\t|\n\
             \tPostable Barcode |:::||::|:|::||::|::|:|:|::|:|:|\n"
        );
    }

    #[test]
    fn test_barcode_report_round_trip() {
        let records = sample_records();
        let postable = Barcode::from_zip("00501").unwrap().postable();
        let block = barcode_report(&postable, &records);

        assert_eq!(
            block,
            format!("{} ---> 00501\n00501\tHoltsville\tNY\n", postable)
        );
    }

    #[test]
    fn test_barcode_report_invalid_check_digit() {
        let records = sample_records();
        // ZIP 12345 barcode with its check segment corrupted to "||:|:"
        let corrupted = "|:::||::|:|::||::|::|:|:|:||:|:|";
        let block = barcode_report(corrupted, &records);

        assert_eq!(
            block,
            format!(
                "{} ---> ERROR - invalid check digit!\n{}\n",
                corrupted, NO_LOCATION_FOUND
            )
        );
    }
}
