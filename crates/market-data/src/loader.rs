// In crates/market-data/src/loader.rs

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDate;
use core_types::Bar;
use csv::ReaderBuilder;
use rust_decimal::Decimal;

use crate::{Error, Result};

/// Loads a headerless CSV price file (`YYYYMMDD,open,high,low,close`) into
/// bars, in file order. The caller requires file order to equal
/// chronological order; no re-sorting happens here.
pub fn load_bars(path: &Path) -> Result<Vec<Bar>> {
    let file = File::open(path)?;
    let bars = read_bars(file)?;
    tracing::info!(path = %path.display(), count = bars.len(), "loaded price bars");
    Ok(bars)
}

/// Parses bars from any CSV source. The whole stream is consumed exactly
/// once; the first malformed record aborts the load.
pub fn read_bars<R: Read>(source: R) -> Result<Vec<Bar>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(source);

    let mut bars = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let line = index + 1;
        let record = match record {
            Ok(record) => record,
            // The reader itself rejects rows whose field count differs from
            // the first row's; report those as malformed bars too.
            Err(e) => {
                if let csv::ErrorKind::UnequalLengths { len, .. } = *e.kind() {
                    return Err(Error::MalformedBar {
                        line,
                        reason: format!("expected 5 fields, found {len}"),
                    });
                }
                return Err(Error::Csv(e));
            }
        };
        bars.push(parse_bar(&record, line)?);
    }
    Ok(bars)
}

fn parse_bar(record: &csv::StringRecord, line: usize) -> Result<Bar> {
    if record.len() != 5 {
        return Err(Error::MalformedBar {
            line,
            reason: format!("expected 5 fields, found {}", record.len()),
        });
    }

    let date = NaiveDate::parse_from_str(&record[0], "%Y%m%d").map_err(|e| {
        Error::MalformedBar {
            line,
            reason: format!("bad date {:?}: {e}", &record[0]),
        }
    })?;

    let price = |index: usize, name: &str| -> Result<Decimal> {
        let field = &record[index];
        Decimal::from_str(field).map_err(|e| Error::MalformedBar {
            line,
            reason: format!("bad {name} {field:?}: {e}"),
        })
    };

    Ok(Bar {
        date,
        open: price(1, "open")?,
        high: price(2, "high")?,
        low: price(3, "low")?,
        close: price(4, "close")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parses_records_in_file_order() {
        let data = "\
19900102,359.690,362.340,357.630,360.220
19900103,360.220,364.060,360.060,362.160
";
        let bars = read_bars(data.as_bytes()).unwrap();
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].date, NaiveDate::from_ymd_opt(1990, 1, 2).unwrap());
        assert_eq!(bars[0].open, dec!(359.690));
        assert_eq!(bars[0].close, dec!(360.220));
        assert_eq!(bars[1].high, dec!(364.060));
    }

    #[test]
    fn bad_date_aborts_with_the_failing_line() {
        let data = "\
19900102,359.690,362.340,357.630,360.220
1990-01-03,360.220,364.060,360.060,362.160
";
        let err = read_bars(data.as_bytes()).unwrap_err();
        match err {
            Error::MalformedBar { line, reason } => {
                assert_eq!(line, 2);
                assert!(reason.contains("bad date"));
            }
            other => panic!("expected MalformedBar, got {other:?}"),
        }
    }

    #[test]
    fn bad_price_aborts_with_the_field_name() {
        let data = "19900102,359.690,n/a,357.630,360.220\n";
        let err = read_bars(data.as_bytes()).unwrap_err();
        match err {
            Error::MalformedBar { line, reason } => {
                assert_eq!(line, 1);
                assert!(reason.contains("bad high"));
            }
            other => panic!("expected MalformedBar, got {other:?}"),
        }
    }

    #[test]
    fn short_records_are_rejected() {
        let err = read_bars("19900102,359.690,362.340\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MalformedBar { line: 1, .. }));
    }

    #[test]
    fn a_short_row_after_a_valid_one_is_still_a_malformed_bar() {
        let data = "\
19900102,359.690,362.340,357.630,360.220
19900103,360.220,364.060
";
        let err = read_bars(data.as_bytes()).unwrap_err();
        match err {
            Error::MalformedBar { line, reason } => {
                assert_eq!(line, 2);
                assert!(reason.contains("expected 5 fields, found 3"));
            }
            other => panic!("expected MalformedBar, got {other:?}"),
        }
    }
}
