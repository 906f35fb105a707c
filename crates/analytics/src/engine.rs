use crate::error::ReportError;
use crate::report::QueryOutcome;
use core_types::{CoinId, IndexTicker, QueryResult};
use database::catalog::{self, ParamKind, QuerySpec};
use database::dates::{self, TrailingWindow};
use database::repository::{BindValue, MarketRepository};
use std::collections::HashMap;

/// Executes catalog queries against the read-only market store.
///
/// The engine owns the order of operations: parameters are validated and
/// bound before the store is touched, relative windows are resolved against
/// the data's own latest date, and the raw row set is shaped into the
/// catalog-declared column order.
#[derive(Debug, Clone)]
pub struct ReportEngine {
    repo: MarketRepository,
}

impl ReportEngine {
    pub fn new(repo: MarketRepository) -> Self {
        Self { repo }
    }

    /// The underlying repository, for store introspection (table counts).
    pub fn repository(&self) -> &MarketRepository {
        &self.repo
    }

    /// The main entry point: runs one catalog query with named parameters.
    ///
    /// # Arguments
    ///
    /// * `query_id` - A stable identifier from the catalog.
    /// * `params` - Raw parameter strings keyed by the declared names.
    ///
    /// # Returns
    ///
    /// `QueryOutcome::Data` with rows in catalog column order,
    /// `QueryOutcome::NoData` when the query matched nothing, or a
    /// `ReportError` describing what was invalid or which store access failed.
    pub async fn execute(
        &self,
        query_id: &str,
        params: &HashMap<String, String>,
    ) -> Result<QueryOutcome, ReportError> {
        let spec = catalog::find(query_id)
            .ok_or_else(|| ReportError::UnknownQuery(query_id.to_string()))?;
        tracing::debug!(query_id, "executing catalog query");

        let binds = match self.bind_params(spec, params).await? {
            Some(binds) => binds,
            // A trailing window over an empty table can match nothing.
            None => return Ok(QueryOutcome::NoData),
        };

        let rows = self
            .repo
            .fetch_rows(spec.sql, &binds)
            .await
            .map_err(|source| ReportError::Store {
                query_id: query_id.to_string(),
                source,
            })?;

        if rows.is_empty() {
            tracing::info!(query_id, "query matched no rows");
            return Ok(QueryOutcome::NoData);
        }

        let columns = spec.columns.iter().map(|c| c.name.to_string()).collect();
        Ok(QueryOutcome::Data(QueryResult::new(columns, rows)))
    }

    /// Validates every declared parameter and produces the bind list, in
    /// declared order. `Ok(None)` means a window anchor table is empty and
    /// the query cannot match any row.
    async fn bind_params(
        &self,
        spec: &QuerySpec,
        params: &HashMap<String, String>,
    ) -> Result<Option<Vec<BindValue>>, ReportError> {
        let mut binds = Vec::with_capacity(spec.params.len());
        for param in spec.params {
            let raw = params
                .get(param.name)
                .ok_or(ReportError::MissingParameter {
                    query_id: spec.id,
                    name: param.name,
                })?;

            let bind = match param.kind {
                ParamKind::Coin => {
                    BindValue::Text(raw.parse::<CoinId>()?.as_str().to_string())
                }
                ParamKind::Ticker => {
                    BindValue::Text(raw.parse::<IndexTicker>()?.as_str().to_string())
                }
                ParamKind::IsoDate => BindValue::Text(dates::canonical_date_key(raw)?),
                ParamKind::TrailingDays => {
                    let days = parse_count(param.name, raw)?;
                    match self.window_start(spec, TrailingWindow::Days(days)).await? {
                        Some(start) => start,
                        None => return Ok(None),
                    }
                }
                ParamKind::TrailingYears => {
                    let years = parse_count(param.name, raw)?;
                    match self.window_start(spec, TrailingWindow::Years(years)).await? {
                        Some(start) => start,
                        None => return Ok(None),
                    }
                }
                ParamKind::Limit => BindValue::Integer(i64::from(parse_count(param.name, raw)?)),
                ParamKind::Threshold => BindValue::Float(parse_threshold(param.name, raw)?),
            };
            binds.push(bind);
        }
        Ok(Some(binds))
    }

    /// Resolves a trailing window to its start key, anchored at the most
    /// recent date present in the entry's anchor table. `Ok(None)` when that
    /// table is empty.
    async fn window_start(
        &self,
        spec: &QuerySpec,
        window: TrailingWindow,
    ) -> Result<Option<BindValue>, ReportError> {
        let anchor = spec
            .date_anchor
            .as_ref()
            .ok_or(ReportError::MissingDateAnchor(spec.id))?;
        let latest = self
            .repo
            .latest_date(anchor)
            .await
            .map_err(|source| ReportError::Store {
                query_id: spec.id.to_string(),
                source,
            })?;

        Ok(latest.map(|date| BindValue::Text(window.start_key_from(date))))
    }
}

fn parse_count(name: &'static str, raw: &str) -> Result<u32, ReportError> {
    match raw.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ReportError::InvalidParameter {
            name,
            value: raw.to_string(),
            expected: "a positive integer",
        }),
    }
}

fn parse_threshold(name: &'static str, raw: &str) -> Result<f64, ReportError> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ReportError::InvalidParameter {
            name,
            value: raw.to_string(),
            expected: "a number",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_must_be_positive_integers() {
        assert_eq!(parse_count("limit", "30").unwrap(), 30);
        for bad in ["0", "-3", "3.5", "many", ""] {
            assert!(matches!(
                parse_count("limit", bad),
                Err(ReportError::InvalidParameter { name: "limit", .. })
            ));
        }
    }

    #[test]
    fn thresholds_must_be_finite_numbers() {
        assert_eq!(parse_threshold("min_supply_pct", "90").unwrap(), 90.0);
        assert!(parse_threshold("min_supply_pct", "NaN").is_err());
        assert!(parse_threshold("min_supply_pct", "1e999").is_err());
    }
}
