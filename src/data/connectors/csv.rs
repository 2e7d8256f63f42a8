use super::{
    types::{DatasetMetadata, RequiredColumn},
    validator::DataValidator,
};
use crate::data::query::date_from_epoch_days;
use crate::error::{Result, StockVizError};
use polars::prelude::*;
use std::path::Path;

pub struct CsvConnector;

impl CsvConnector {
    /// Load CSV file into DataFrame
    pub fn load<P: AsRef<Path>>(path: P) -> Result<DataFrame> {
        let df = CsvReadOptions::default()
            .try_into_reader_with_file_path(Some(path.as_ref().to_path_buf()))?
            .finish()
            .map_err(|e| StockVizError::DataLoading(format!("Failed to read CSV: {}", e)))?;

        Ok(df)
    }

    /// Load a price history: read, validate, normalize column names and
    /// convert the date column to a chronological dtype.
    pub fn load_history<P: AsRef<Path>>(path: P, date_format: &str) -> Result<DataFrame> {
        let df = Self::load(&path)?;
        let df = Self::normalize_columns(df)?;

        // Warn about nulls but don't fail
        let null_report = DataValidator::check_nulls(&df)?;
        if !null_report.is_empty() {
            log::warn!("Null values detected: {:?}", null_report);
        }

        let df = Self::parse_dates(df, date_format)?;
        log::info!(
            "Loaded {} rows from {}",
            df.height(),
            path.as_ref().display()
        );
        Ok(df)
    }

    /// Convert the date column from strings to a Date dtype. Strict: a
    /// malformed date fails the whole load.
    pub fn parse_dates(df: DataFrame, date_format: &str) -> Result<DataFrame> {
        let date_col = RequiredColumn::Date.as_str();
        if df.column(date_col)?.dtype() == &DataType::Date {
            return Ok(df);
        }

        df.lazy()
            .with_column(col(date_col).str().to_date(StrptimeOptions {
                format: Some(date_format.into()),
                ..Default::default()
            }))
            .collect()
            .map_err(|e| {
                StockVizError::DataLoading(format!(
                    "Failed to parse '{}' column as dates: {}",
                    date_col, e
                ))
            })
    }

    /// Normalize column names to the canonical capitalized names
    pub fn normalize_columns(mut df: DataFrame) -> Result<DataFrame> {
        let column_map = DataValidator::validate_history(&df)?;

        for (required, actual_name) in column_map {
            let standard_name = required.as_str();
            if actual_name != standard_name {
                df.rename(&actual_name, standard_name.into()).map_err(|e| {
                    StockVizError::DataLoading(format!("Failed to rename column: {}", e))
                })?;
            }
        }

        Ok(df)
    }

    /// Create metadata for a loaded (normalized, date-parsed) DataFrame
    pub fn create_metadata<P: AsRef<Path>>(path: P, df: &DataFrame) -> Result<DatasetMetadata> {
        let columns: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();

        // The parsed date column is days since epoch underneath.
        let days = df
            .column(RequiredColumn::Date.as_str())?
            .cast(&DataType::Int32)?;
        let days = days.i32()?;
        let date_range = match (days.min(), days.max()) {
            (Some(lo), Some(hi)) => Some((date_from_epoch_days(lo), date_from_epoch_days(hi))),
            _ => None,
        };

        let close = df
            .column(RequiredColumn::Close.as_str())?
            .cast(&DataType::Float64)?;
        let close_f64 = close.f64()?;
        let close_range = (
            close_f64.min().unwrap_or(0.0),
            close_f64.max().unwrap_or(0.0),
        );

        Ok(DatasetMetadata {
            file_path: path.as_ref().to_string_lossy().to_string(),
            num_rows: df.height(),
            num_columns: df.width(),
            columns,
            date_range,
            close_range,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use polars::df;

    fn history_df() -> DataFrame {
        df! {
            "Date" => &["2023-01-02", "2023-01-03", "2023-01-04"],
            "Symbol" => &["TCS", "TCS", "TCS"],
            "Category" => &["IT", "IT", "IT"],
            "Close" => &[3300.5, 3312.0, 3290.25],
        }
        .unwrap()
    }

    #[test]
    fn test_parse_dates_produces_date_dtype() {
        let df = CsvConnector::parse_dates(history_df(), "%Y-%m-%d").unwrap();
        assert_eq!(df.column("Date").unwrap().dtype(), &DataType::Date);
    }

    #[test]
    fn test_parse_dates_is_idempotent() {
        let df = CsvConnector::parse_dates(history_df(), "%Y-%m-%d").unwrap();
        let df = CsvConnector::parse_dates(df, "%Y-%m-%d").unwrap();
        assert_eq!(df.column("Date").unwrap().dtype(), &DataType::Date);
    }

    #[test]
    fn test_parse_dates_rejects_malformed() {
        let df = df! {
            "Date" => &["2023-01-02", "not a date"],
            "Symbol" => &["TCS", "TCS"],
            "Category" => &["IT", "IT"],
            "Close" => &[3300.5, 3312.0],
        }
        .unwrap();

        let result = CsvConnector::parse_dates(df, "%Y-%m-%d");
        assert!(result.is_err());
    }

    #[test]
    fn test_normalize_columns() {
        let df = df! {
            "date" => &["2023-01-02"],
            "ticker" => &["TCS"],
            "sector" => &["IT"],
            "close" => &[3300.5],
        }
        .unwrap();

        let df = CsvConnector::normalize_columns(df).unwrap();
        let cols = df.get_column_names();
        assert!(cols.iter().any(|c| c.as_str() == "Date"));
        assert!(cols.iter().any(|c| c.as_str() == "Symbol"));
        assert!(cols.iter().any(|c| c.as_str() == "Category"));
        assert!(cols.iter().any(|c| c.as_str() == "Close"));
    }

    #[test]
    fn test_load_history_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.csv");
        std::fs::write(
            &path,
            "Date,Symbol,Category,Close\n\
             2023-01-02,TCS,IT,3300.5\n\
             2023-01-03,INFY,IT,1480.0\n",
        )
        .unwrap();

        let df = CsvConnector::load_history(&path, "%Y-%m-%d").unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(df.column("Date").unwrap().dtype(), &DataType::Date);
    }

    #[test]
    fn test_create_metadata() {
        let df = CsvConnector::parse_dates(history_df(), "%Y-%m-%d").unwrap();
        let meta = CsvConnector::create_metadata("history.csv", &df).unwrap();

        assert_eq!(meta.num_rows, 3);
        assert_eq!(meta.num_columns, 4);
        assert_eq!(meta.close_range, (3290.25, 3312.0));
        assert_eq!(
            meta.date_range,
            Some((
                NaiveDate::from_ymd_opt(2023, 1, 2).unwrap(),
                NaiveDate::from_ymd_opt(2023, 1, 4).unwrap()
            ))
        );
    }
}
