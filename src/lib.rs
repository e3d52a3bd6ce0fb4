// Zip Barcode System - Core Library
// POSTNET encoding/decoding plus city lookup, shared by the CLI and tests

pub mod codec;
pub mod barcode;
pub mod lookup;
pub mod report;

// Re-export commonly used types
pub use codec::{check_digit, decode_digit, encode_digit, BarPattern, CodecError};
pub use barcode::{decode_barcode, Barcode};
pub use lookup::{find_cities, load_city_file, read_city_records, CityRecord};
pub use report::{barcode_report, city_lines, zip_report, NO_LOCATION_FOUND};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
