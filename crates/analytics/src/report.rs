use core_types::QueryResult;
use serde::{Deserialize, Serialize};

/// The outcome of executing a catalog query.
///
/// "No rows matched" is a valid answer to a valid question, so it is a
/// success variant here; store and validation failures travel separately as
/// `ReportError`. Callers must be able to tell the two apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum QueryOutcome {
    Data(QueryResult),
    NoData,
}

impl QueryOutcome {
    pub fn is_no_data(&self) -> bool {
        matches!(self, QueryOutcome::NoData)
    }

    pub fn into_result(self) -> Option<QueryResult> {
        match self {
            QueryOutcome::Data(result) => Some(result),
            QueryOutcome::NoData => None,
        }
    }
}

/// Fraction of the value span added above and below a charted series.
const PADDING_RATIO: f64 = 0.1;
/// Absolute margin used when every value in the series is identical and the
/// span-proportional padding would collapse to zero.
const DEGENERATE_MARGIN: f64 = 1.0;

/// The display range for a charted value column.
///
/// Padding keeps the series from touching the axis boundary: 10% of the
/// max−min span on each side, or a fixed margin for a flat series (a
/// stablecoin price is the common case) so the range never has zero height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartBounds {
    pub min: f64,
    pub max: f64,
    pub padded_min: f64,
    pub padded_max: f64,
}

impl ChartBounds {
    /// Bounds of a named numeric column. `None` when the column is missing
    /// or holds no numeric values.
    pub fn of_column(result: &QueryResult, column: &str) -> Option<Self> {
        let values = result.numeric_column(column);
        let (&first, rest) = values.split_first()?;
        let (min, max) = rest
            .iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v)));

        let span = max - min;
        let padding = if span == 0.0 {
            DEGENERATE_MARGIN
        } else {
            span * PADDING_RATIO
        };

        Some(Self {
            min,
            max,
            padded_min: min - padding,
            padded_max: max + padding,
        })
    }
}

/// Scalar statistics over one numeric result column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    /// The final value in row order; for a date-ordered series this is the
    /// most recent observation.
    pub last: f64,
}

impl SummaryStats {
    /// Statistics of a named numeric column. `None` when the column is
    /// missing or holds no numeric values.
    pub fn of_column(result: &QueryResult, column: &str) -> Option<Self> {
        let values = result.numeric_column(column);
        let (&first, _) = values.split_first()?;
        let (min, max, sum) = values
            .iter()
            .fold((first, first, 0.0), |(lo, hi, sum), &v| {
                (lo.min(v), hi.max(v), sum + v)
            });

        Some(Self {
            count: values.len(),
            mean: sum / values.len() as f64,
            min,
            max,
            last: *values.last().unwrap_or(&first),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::Value;

    fn series(values: &[f64]) -> QueryResult {
        QueryResult::new(
            vec!["date".into(), "price_usd".into()],
            values
                .iter()
                .enumerate()
                .map(|(i, &v)| {
                    vec![
                        Value::Text(format!("2025-01-{:02}", i + 1)),
                        Value::Float(v),
                    ]
                })
                .collect(),
        )
    }

    #[test]
    fn padding_is_a_tenth_of_the_span_on_each_side() {
        let bounds = ChartBounds::of_column(&series(&[100.0, 110.0, 105.0]), "price_usd").unwrap();
        assert_eq!(bounds.min, 100.0);
        assert_eq!(bounds.max, 110.0);
        assert_eq!(bounds.padded_min, 99.0);
        assert_eq!(bounds.padded_max, 111.0);
    }

    #[test]
    fn a_flat_series_gets_a_fixed_nonzero_margin() {
        let bounds = ChartBounds::of_column(&series(&[1.0, 1.0, 1.0]), "price_usd").unwrap();
        assert_eq!(bounds.padded_min, 0.0);
        assert_eq!(bounds.padded_max, 2.0);
        assert!(bounds.padded_max > bounds.padded_min);
    }

    #[test]
    fn missing_or_empty_columns_have_no_bounds() {
        assert!(ChartBounds::of_column(&series(&[]), "price_usd").is_none());
        assert!(ChartBounds::of_column(&series(&[1.0]), "volume").is_none());
    }

    #[test]
    fn summary_tracks_count_mean_extremes_and_last() {
        let stats = SummaryStats::of_column(&series(&[100.0, 110.0, 105.0]), "price_usd").unwrap();
        assert_eq!(stats.count, 3);
        assert_eq!(stats.mean, 105.0);
        assert_eq!(stats.min, 100.0);
        assert_eq!(stats.max, 110.0);
        assert_eq!(stats.last, 105.0);
    }
}
