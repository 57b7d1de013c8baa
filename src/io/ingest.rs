//! CSV ingest of daily case counts.
//!
//! Expected schema: a `date` column (ISO-8601, `YYYY-MM-DD`) and a `count`
//! column (non-negative integer), one row per calendar day.
//!
//! Design goals:
//! - **Strict schema**: missing columns are a clear error, not a guess
//! - **Fail fast**: the estimator refuses bad input outright — no re-sorting,
//!   no gap filling, no silent row skipping — with the offending line number
//! - **Separation of concerns**: ordering/contiguity validation lives in
//!   [`DailyCases::new`]; this module only parses

use std::fs::File;
use std::path::Path;

use chrono::NaiveDate;
use csv::StringRecord;

use crate::domain::DailyCases;
use crate::error::AppError;

/// Load a `date,count` CSV into a validated case series.
pub fn load_daily_cases(path: &Path) -> Result<DailyCases, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::config(format!("Failed to open CSV '{}': {e}", path.display())))?;

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| AppError::config(format!("Failed to read CSV headers: {e}")))?
        .clone();

    let date_col = find_column(&headers, "date")?;
    let count_col = find_column(&headers, "count")?;

    let mut dates = Vec::new();
    let mut counts = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        // Header is line 1; records start on line 2.
        let line = idx + 2;
        let record =
            result.map_err(|e| AppError::invalid_input(format!("CSV parse error on line {line}: {e}")))?;

        dates.push(parse_date(&record, date_col, line)?);
        counts.push(parse_count(&record, count_col, line)?);
    }

    DailyCases::new(dates, counts)
}

fn find_column(headers: &StringRecord, name: &str) -> Result<usize, AppError> {
    headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(name))
        .ok_or_else(|| AppError::config(format!("CSV is missing the required '{name}' column.")))
}

fn parse_date(record: &StringRecord, col: usize, line: usize) -> Result<NaiveDate, AppError> {
    let raw = record
        .get(col)
        .ok_or_else(|| AppError::invalid_input(format!("Missing date field on line {line}.")))?;
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| {
        AppError::invalid_input(format!("Invalid date '{raw}' on line {line}: {e}"))
    })
}

fn parse_count(record: &StringRecord, col: usize, line: usize) -> Result<u32, AppError> {
    let raw = record
        .get(col)
        .ok_or_else(|| AppError::invalid_input(format!("Missing count field on line {line}.")))?;
    let value: i64 = raw
        .parse()
        .map_err(|e| AppError::invalid_input(format!("Invalid count '{raw}' on line {line}: {e}")))?;
    if value < 0 {
        return Err(AppError::invalid_input(format!(
            "Negative count {value} on line {line}."
        )));
    }
    u32::try_from(value)
        .map_err(|_| AppError::invalid_input(format!("Count {value} on line {line} is too large.")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(tag: &str, content: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("rt-ingest-{tag}-{}.csv", std::process::id()));
        let mut f = File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_well_formed_csv() {
        let path = write_temp("ok", "date,count\n2020-03-01,5\n2020-03-02,8\n2020-03-03,13\n");
        let cases = load_daily_cases(&path).unwrap();
        assert_eq!(cases.len(), 3);
        assert_eq!(cases.counts(), &[5, 8, 13]);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn missing_count_column_is_a_config_error() {
        let path = write_temp("no-count", "date,cases\n2020-03-01,5\n");
        assert_eq!(load_daily_cases(&path).unwrap_err().exit_code(), 2);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn negative_count_reports_the_line() {
        let path = write_temp("negative", "date,count\n2020-03-01,5\n2020-03-02,-3\n");
        let err = load_daily_cases(&path).unwrap_err();
        assert_eq!(err.exit_code(), 3);
        assert!(err.to_string().contains("line 3"));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn gapped_dates_are_rejected() {
        let path = write_temp("gapped", "date,count\n2020-03-01,5\n2020-03-03,8\n");
        assert_eq!(load_daily_cases(&path).unwrap_err().exit_code(), 3);
        std::fs::remove_file(path).ok();
    }
}
