use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

use zip_barcode::{barcode_report, load_city_file, zip_report, CityRecord};

// Default input locations, overridable from the command line
const DEFAULT_ZIP_FILE: &str = "data/ZipCodes.txt";
const DEFAULT_BARCODE_FILE: &str = "data/ZipBarCodes.txt";
const DEFAULT_CITY_FILE: &str = "data/ZipCodesCity.txt";

/// Input file locations, resolved from CLI arguments instead of hardcoded
/// globals: `zip-barcode [zip-file] [barcode-file] [city-file]`
struct Config {
    zip_file: PathBuf,
    barcode_file: PathBuf,
    city_file: PathBuf,
}

impl Config {
    fn from_args() -> Config {
        let mut args = env::args().skip(1);

        Config {
            zip_file: path_arg(args.next(), DEFAULT_ZIP_FILE),
            barcode_file: path_arg(args.next(), DEFAULT_BARCODE_FILE),
            city_file: path_arg(args.next(), DEFAULT_CITY_FILE),
        }
    }
}

fn path_arg(arg: Option<String>, default: &str) -> PathBuf {
    arg.map(PathBuf::from).unwrap_or_else(|| PathBuf::from(default))
}

/// Whitespace/line-delimited tokens from an input file
fn read_tokens(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file {}", path.display()))?;

    Ok(contents.split_whitespace().map(str::to_string).collect())
}

fn run_zip_section(zips: &[String], records: &[CityRecord]) {
    println!("OPTION 1 & 2");
    for zip in zips {
        print!("{}", zip_report(zip, records));
        println!();
    }
}

fn run_barcode_section(barcodes: &[String], records: &[CityRecord]) {
    println!("OPTION 3");
    for barcode in barcodes {
        print!("{}", barcode_report(barcode, records));
        println!();
    }
}

fn main() -> Result<()> {
    let config = Config::from_args();

    // City records are loaded once; each lookup is a single in-memory pass
    let records = load_city_file(&config.city_file)?;

    let zips = read_tokens(&config.zip_file)?;
    run_zip_section(&zips, &records);

    let barcodes = read_tokens(&config.barcode_file)?;
    run_barcode_section(&barcodes, &records);

    Ok(())
}
