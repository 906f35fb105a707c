use serde::{Deserialize, Serialize};
use std::fmt;

/// A single cell of a query result.
///
/// SQLite types values, not columns, so a result column is decoded cell by
/// cell. `Null` carries the "absent" semantics the analytical queries rely
/// on (a first-row delta, an undefined percentage change).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The cell as a number, if it holds one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Integer(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Text(v) => f.write_str(v),
        }
    }
}

/// An ordered, fixed-shape result set produced by one catalog query.
///
/// Column names and order come from the catalog entry, never from the
/// caller, so two executions of the same query are always shaped alike.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl QueryResult {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Self { columns, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a named column, if the result has it.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// All numeric values of a named column, in row order. Null cells and
    /// non-numeric cells are skipped.
    pub fn numeric_column(&self, name: &str) -> Vec<f64> {
        match self.column_index(name) {
            Some(idx) => self
                .rows
                .iter()
                .filter_map(|row| row.get(idx).and_then(Value::as_f64))
                .collect(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> QueryResult {
        QueryResult::new(
            vec!["date".into(), "price_usd".into()],
            vec![
                vec![Value::Text("2025-01-01".into()), Value::Float(100.0)],
                vec![Value::Text("2025-01-02".into()), Value::Null],
                vec![Value::Text("2025-01-03".into()), Value::Integer(105)],
            ],
        )
    }

    #[test]
    fn numeric_column_skips_nulls_and_mixes_integer_widths() {
        let result = sample();
        assert_eq!(result.numeric_column("price_usd"), vec![100.0, 105.0]);
        assert!(result.numeric_column("volume").is_empty());
    }

    #[test]
    fn null_displays_as_the_empty_string() {
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(Value::Float(65432.12).to_string(), "65432.12");
        assert_eq!(Value::Integer(30).to_string(), "30");
    }
}
