use super::connectors::{RequiredColumn, TableView};
use crate::error::Result;
use chrono::{Duration, NaiveDate};
use polars::prelude::*;

/// Days-since-epoch to calendar date (the physical representation of the
/// polars Date dtype).
pub fn date_from_epoch_days(days: i32) -> NaiveDate {
    NaiveDate::default() + Duration::days(days as i64)
}

/// Read-only views over a loaded price history. Every function takes the
/// frame by reference and returns a fresh sub-frame or view; nothing here
/// mutates the cached table.
pub struct StockQuery;

impl StockQuery {
    /// Distinct categories in first-seen order
    pub fn categories(df: &DataFrame) -> Result<Vec<String>> {
        Self::distinct_values(df, RequiredColumn::Category.as_str())
    }

    /// Distinct symbols of an (already category-filtered) frame,
    /// first-seen order
    pub fn symbols_in(df: &DataFrame) -> Result<Vec<String>> {
        Self::distinct_values(df, RequiredColumn::Symbol.as_str())
    }

    fn distinct_values(df: &DataFrame, column: &str) -> Result<Vec<String>> {
        let col = df.column(column)?;
        let values = col.str()?;

        let mut seen: Vec<String> = Vec::new();
        for i in 0..values.len() {
            if let Some(value) = values.get(i) {
                if !seen.iter().any(|s| s == value) {
                    seen.push(value.to_string());
                }
            }
        }
        Ok(seen)
    }

    /// Rows whose Category equals the given value. An unknown category
    /// yields an empty frame, not an error.
    pub fn filter_category(df: &DataFrame, category: &str) -> Result<DataFrame> {
        Self::filter_equals(df, RequiredColumn::Category.as_str(), category)
    }

    /// Rows whose Symbol equals the given value, drawn from a frame that
    /// has already been narrowed to one category.
    pub fn filter_symbol(df: &DataFrame, symbol: &str) -> Result<DataFrame> {
        Self::filter_equals(df, RequiredColumn::Symbol.as_str(), symbol)
    }

    fn filter_equals(df: &DataFrame, column: &str, value: &str) -> Result<DataFrame> {
        let filtered = df
            .clone()
            .lazy()
            .filter(col(column).eq(lit(value.to_string())))
            .collect()?;
        Ok(filtered)
    }

    /// The last `n` rows in file order, formatted for a grid widget.
    /// Deliberately NOT re-sorted by date: "recent" means last-in-file.
    pub fn recent_view(df: &DataFrame, n: usize) -> Result<TableView> {
        let tail = df.tail(Some(n));

        let columns: Vec<String> = tail
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();

        // Format column-by-column, then stitch into rows.
        let mut formatted: Vec<Vec<String>> = Vec::with_capacity(columns.len());
        for col_name in tail.get_column_names() {
            let series = tail.column(col_name)?;
            formatted.push(Self::format_column(series)?);
        }

        let mut rows = Vec::with_capacity(tail.height());
        for i in 0..tail.height() {
            rows.push(formatted.iter().map(|col| col[i].clone()).collect());
        }

        Ok(TableView { columns, rows })
    }

    fn format_column(series: &Column) -> Result<Vec<String>> {
        let n = series.len();
        let mut out = Vec::with_capacity(n);

        match series.dtype() {
            DataType::Date => {
                let days = series.cast(&DataType::Int32)?;
                let days = days.i32()?;
                for i in 0..n {
                    out.push(
                        days.get(i)
                            .map(|d| date_from_epoch_days(d).to_string())
                            .unwrap_or_else(|| "null".to_string()),
                    );
                }
            }
            DataType::Float64 | DataType::Float32 => {
                let values = series.cast(&DataType::Float64)?;
                let values = values.f64()?;
                for i in 0..n {
                    out.push(
                        values
                            .get(i)
                            .map(|v| format!("{:.2}", v))
                            .unwrap_or_else(|| "null".to_string()),
                    );
                }
            }
            DataType::Int64 | DataType::Int32 | DataType::UInt64 | DataType::UInt32 => {
                let values = series.cast(&DataType::Int64)?;
                let values = values.i64()?;
                for i in 0..n {
                    out.push(
                        values
                            .get(i)
                            .map(|v| v.to_string())
                            .unwrap_or_else(|| "null".to_string()),
                    );
                }
            }
            DataType::String => {
                let values = series.str()?;
                for i in 0..n {
                    out.push(values.get(i).unwrap_or("null").to_string());
                }
            }
            _ => {
                for _ in 0..n {
                    out.push("?".to_string());
                }
            }
        }

        Ok(out)
    }

    /// `(epoch-day, close)` points sorted chronologically, ready for a
    /// line chart. The table keeps file order; the chart does not.
    pub fn close_series(df: &DataFrame) -> Result<Vec<[f64; 2]>> {
        let date_col = RequiredColumn::Date.as_str();
        let close_col = RequiredColumn::Close.as_str();

        let sorted = df
            .select([date_col, close_col])?
            .sort([date_col], SortMultipleOptions::default())?;

        let days = sorted.column(date_col)?.cast(&DataType::Int32)?;
        let days = days.i32()?;
        let close = sorted.column(close_col)?.cast(&DataType::Float64)?;
        let close = close.f64()?;

        let mut points = Vec::with_capacity(sorted.height());
        for i in 0..sorted.height() {
            if let (Some(d), Some(c)) = (days.get(i), close.get(i)) {
                points.push([d as f64, c]);
            }
        }
        Ok(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::connectors::CsvConnector;
    use polars::df;

    fn nifty_df() -> DataFrame {
        let df = df! {
            "Date" => &[
                "2023-01-02", "2023-01-03", "2023-01-02",
                "2023-01-03", "2023-01-02", "2023-01-03",
            ],
            "Symbol" => &["TCS", "TCS", "INFY", "INFY", "SBIN", "SBIN"],
            "Category" => &["IT", "IT", "IT", "IT", "Banking", "Banking"],
            "Close" => &[3300.5, 3312.0, 1480.0, 1475.5, 612.4, 615.0],
        }
        .unwrap();
        CsvConnector::parse_dates(df, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_categories_first_seen_order() {
        let df = nifty_df();
        let categories = StockQuery::categories(&df).unwrap();
        assert_eq!(categories, vec!["IT".to_string(), "Banking".to_string()]);
    }

    #[test]
    fn test_filter_category_exact_rows() {
        let df = nifty_df();
        let it = StockQuery::filter_category(&df, "IT").unwrap();
        assert_eq!(it.height(), 4);

        let cats = StockQuery::categories(&it).unwrap();
        assert_eq!(cats, vec!["IT".to_string()]);
    }

    #[test]
    fn test_unknown_category_yields_empty_frame() {
        let df = nifty_df();
        let none = StockQuery::filter_category(&df, "Pharma").unwrap();
        assert_eq!(none.height(), 0);
    }

    #[test]
    fn test_symbols_scoped_to_category() {
        let df = nifty_df();
        let it = StockQuery::filter_category(&df, "IT").unwrap();
        let symbols = StockQuery::symbols_in(&it).unwrap();
        assert_eq!(symbols, vec!["TCS".to_string(), "INFY".to_string()]);
    }

    #[test]
    fn test_symbol_filter_is_subset_of_category_filter() {
        let df = nifty_df();
        let it = StockQuery::filter_category(&df, "IT").unwrap();
        let tcs = StockQuery::filter_symbol(&it, "TCS").unwrap();

        assert_eq!(tcs.height(), 2);
        assert_eq!(StockQuery::categories(&tcs).unwrap(), vec!["IT".to_string()]);
        assert_eq!(StockQuery::symbols_in(&tcs).unwrap(), vec!["TCS".to_string()]);
    }

    #[test]
    fn test_no_cross_category_leakage_for_shared_symbol_name() {
        // Same ticker string under two categories: filtering the category
        // first must keep the other category's rows out.
        let df = df! {
            "Date" => &["2023-01-02", "2023-01-02"],
            "Symbol" => &["DUAL", "DUAL"],
            "Category" => &["IT", "Banking"],
            "Close" => &[100.0, 200.0],
        }
        .unwrap();
        let df = CsvConnector::parse_dates(df, "%Y-%m-%d").unwrap();

        let it = StockQuery::filter_category(&df, "IT").unwrap();
        let dual = StockQuery::filter_symbol(&it, "DUAL").unwrap();

        assert_eq!(dual.height(), 1);
        let close = dual.column("Close").unwrap().cast(&DataType::Float64).unwrap();
        assert_eq!(close.f64().unwrap().get(0), Some(100.0));
    }

    #[test]
    fn test_recent_view_caps_rows() {
        let dates: Vec<String> = (1..=15).map(|d| format!("2023-03-{:02}", d)).collect();
        let df = df! {
            "Date" => &dates,
            "Symbol" => &vec!["TCS"; 15],
            "Category" => &vec!["IT"; 15],
            "Close" => &(0..15).map(|i| 3300.0 + i as f64).collect::<Vec<_>>(),
        }
        .unwrap();
        let df = CsvConnector::parse_dates(df, "%Y-%m-%d").unwrap();

        let view = StockQuery::recent_view(&df, 10).unwrap();
        assert_eq!(view.rows.len(), 10);
        // Last row of the file is the last row of the view.
        assert_eq!(view.rows[9][0], "2023-03-15");
    }

    #[test]
    fn test_recent_view_never_pads() {
        let df = nifty_df();
        let it = StockQuery::filter_category(&df, "IT").unwrap();
        let tcs = StockQuery::filter_symbol(&it, "TCS").unwrap();

        let view = StockQuery::recent_view(&tcs, 10).unwrap();
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.columns, vec!["Date", "Symbol", "Category", "Close"]);
    }

    #[test]
    fn test_recent_view_keeps_file_order() {
        // Deliberately unsorted dates: the table must reflect file order.
        let df = df! {
            "Date" => &["2023-01-05", "2023-01-01", "2023-01-03"],
            "Symbol" => &["TCS", "TCS", "TCS"],
            "Category" => &["IT", "IT", "IT"],
            "Close" => &[5.0, 1.0, 3.0],
        }
        .unwrap();
        let df = CsvConnector::parse_dates(df, "%Y-%m-%d").unwrap();

        let view = StockQuery::recent_view(&df, 10).unwrap();
        let dates: Vec<&str> = view.rows.iter().map(|r| r[0].as_str()).collect();
        assert_eq!(dates, vec!["2023-01-05", "2023-01-01", "2023-01-03"]);
    }

    #[test]
    fn test_close_series_sorted_chronologically() {
        let df = df! {
            "Date" => &["2023-01-05", "2023-01-01", "2023-01-03"],
            "Symbol" => &["TCS", "TCS", "TCS"],
            "Category" => &["IT", "IT", "IT"],
            "Close" => &[5.0, 1.0, 3.0],
        }
        .unwrap();
        let df = CsvConnector::parse_dates(df, "%Y-%m-%d").unwrap();

        let points = StockQuery::close_series(&df).unwrap();
        assert_eq!(points.len(), 3);
        assert!(points[0][0] < points[1][0] && points[1][0] < points[2][0]);
        assert_eq!(
            points.iter().map(|p| p[1]).collect::<Vec<_>>(),
            vec![1.0, 3.0, 5.0]
        );
    }

    #[test]
    fn test_close_series_empty_frame() {
        let df = nifty_df();
        let none = StockQuery::filter_category(&df, "Pharma").unwrap();
        let points = StockQuery::close_series(&none).unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn test_date_from_epoch_days() {
        assert_eq!(
            date_from_epoch_days(0),
            NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()
        );
        assert_eq!(
            date_from_epoch_days(19359),
            NaiveDate::from_ymd_opt(2023, 1, 2).unwrap()
        );
    }
}
