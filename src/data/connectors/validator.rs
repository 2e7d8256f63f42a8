use super::types::RequiredColumn;
use crate::error::{Result, StockVizError};
use polars::prelude::*;
use std::collections::HashMap;

pub struct DataValidator;

impl DataValidator {
    /// Validate that DataFrame has the required history columns
    pub fn validate_history(df: &DataFrame) -> Result<HashMap<RequiredColumn, String>> {
        let mut column_map = HashMap::new();

        for required in RequiredColumn::all() {
            match Self::find_column(df, &required) {
                Some(col_name) => {
                    column_map.insert(required, col_name.to_string());
                }
                None => {
                    return Err(StockVizError::Validation(format!(
                        "Missing required column: {} (tried aliases: {:?})",
                        required.as_str(),
                        required.aliases()
                    )));
                }
            }
        }

        // Close must be numeric; Date and the label columns stay strings
        // until the loader parses them.
        let close_name = column_map.get(&RequiredColumn::Close).unwrap();
        let close = df.column(close_name)?;
        if !matches!(
            close.dtype(),
            DataType::Float64
                | DataType::Float32
                | DataType::Int64
                | DataType::Int32
                | DataType::UInt64
                | DataType::UInt32
        ) {
            return Err(StockVizError::Validation(format!(
                "Column '{}' (Close) must be numeric, found {:?}",
                close_name,
                close.dtype()
            )));
        }

        for label in [RequiredColumn::Symbol, RequiredColumn::Category] {
            let name = column_map.get(&label).unwrap();
            let series = df.column(name)?;
            if !matches!(series.dtype(), DataType::String) {
                return Err(StockVizError::Validation(format!(
                    "Column '{}' ({}) must be text, found {:?}",
                    name,
                    label.as_str(),
                    series.dtype()
                )));
            }
        }

        Ok(column_map)
    }

    /// Find column by checking aliases
    fn find_column<'a>(df: &'a DataFrame, required: &RequiredColumn) -> Option<&'a str> {
        let columns = df.get_column_names();
        for alias in required.aliases() {
            if columns.iter().any(|col| col.as_str() == alias) {
                return Some(alias);
            }
        }
        None
    }

    /// Check for null values in any column
    pub fn check_nulls(df: &DataFrame) -> Result<Vec<(String, usize)>> {
        let mut null_report = Vec::new();

        for col_name in df.get_column_names() {
            let series = df.column(col_name)?;
            let null_count = series.null_count();
            if null_count > 0 {
                null_report.push((col_name.to_string(), null_count));
            }
        }

        Ok(null_report)
    }
}
