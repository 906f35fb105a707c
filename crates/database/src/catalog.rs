//! The catalog of named analytical queries.
//!
//! Each entry is pure data: an identifier, the parameterized SQL, the
//! declared parameter kinds (validated before execution), and the fixed
//! result shape. Queries touching `oil_prices` or `stock_prices` project
//! their timestamp columns through `strftime('%Y-%m-%d', ...)` so every
//! comparison and join happens on the canonical date key.

/// How a single query parameter is validated and bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// A `coin_id` value; must belong to the enumerated coin set.
    Coin,
    /// A `ticker` value; must belong to the enumerated index set.
    Ticker,
    /// A date boundary; normalized to the canonical `YYYY-MM-DD` key.
    IsoDate,
    /// A positive day count, resolved to a window start via the entry's
    /// `date_anchor`.
    TrailingDays,
    /// A positive year count, resolved like `TrailingDays`.
    TrailingYears,
    /// A positive row cap.
    Limit,
    /// A numeric comparison bound (a percentage or a volume floor).
    Threshold,
}

/// A declared query parameter.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
}

/// The semantic type of a result column, for display alignment and export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Date,
    Text,
    Price,
    Integer,
    Percent,
}

#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub kind: ColumnKind,
}

/// Where a trailing window finds "the most recent date present".
#[derive(Debug, Clone, Copy)]
pub struct DateAnchor {
    pub table: &'static str,
    /// SQL expression projecting the table's date column onto the canonical
    /// key. Static text only; never caller input.
    pub date_expr: &'static str,
}

const CRYPTO_DATES: DateAnchor = DateAnchor {
    table: "crypto_prices",
    date_expr: "date",
};
const OIL_DATES: DateAnchor = DateAnchor {
    table: "oil_prices",
    date_expr: "strftime('%Y-%m-%d', Date)",
};

/// One named, parameterized analytical query.
#[derive(Debug, Clone, Copy)]
pub struct QuerySpec {
    pub id: &'static str,
    pub title: &'static str,
    pub params: &'static [ParamSpec],
    pub sql: &'static str,
    pub columns: &'static [ColumnSpec],
    pub date_anchor: Option<DateAnchor>,
}

macro_rules! param {
    ($name:literal, $kind:ident) => {
        ParamSpec {
            name: $name,
            kind: ParamKind::$kind,
        }
    };
}

macro_rules! col {
    ($name:literal, $kind:ident) => {
        ColumnSpec {
            name: $name,
            kind: ColumnKind::$kind,
        }
    };
}

/// Every query the system can run. Ordering here is the listing order.
pub const CATALOG: &[QuerySpec] = &[
    // ----- cryptocurrencies reference table -------------------------------
    QuerySpec {
        id: "top-coins-by-market-cap",
        title: "Top cryptocurrencies by market cap",
        params: &[param!("limit", Limit)],
        sql: "\
SELECT name, symbol, market_cap, market_cap_rank, current_price
FROM cryptocurrencies
ORDER BY market_cap_rank
LIMIT ?",
        columns: &[
            col!("name", Text),
            col!("symbol", Text),
            col!("market_cap", Price),
            col!("market_cap_rank", Integer),
            col!("current_price", Price),
        ],
        date_anchor: None,
    },
    QuerySpec {
        id: "high-supply-coins",
        title: "Coins with circulating supply above a percentage of total",
        params: &[param!("min_supply_pct", Threshold)],
        sql: "\
SELECT name, symbol, circulating_supply, total_supply,
       ROUND((circulating_supply * 100.0 / NULLIF(total_supply, 0)), 2) AS supply_percentage
FROM cryptocurrencies
WHERE total_supply > 0
  AND (circulating_supply * 100.0 / total_supply) > ?
ORDER BY supply_percentage DESC",
        columns: &[
            col!("name", Text),
            col!("symbol", Text),
            col!("circulating_supply", Price),
            col!("total_supply", Price),
            col!("supply_percentage", Percent),
        ],
        date_anchor: None,
    },
    QuerySpec {
        id: "coins-near-ath",
        title: "Coins trading within reach of their all-time high",
        params: &[param!("min_pct_of_ath", Threshold)],
        sql: "\
SELECT name, symbol, current_price, ath,
       ROUND((current_price * 100.0 / ath), 2) AS percent_of_ath
FROM cryptocurrencies
WHERE ath > 0
  AND (current_price * 100.0 / ath) >= ?
ORDER BY percent_of_ath DESC",
        columns: &[
            col!("name", Text),
            col!("symbol", Text),
            col!("current_price", Price),
            col!("ath", Price),
            col!("percent_of_ath", Percent),
        ],
        date_anchor: None,
    },
    QuerySpec {
        id: "avg-rank-high-volume",
        title: "Average market cap rank among high-volume coins",
        params: &[param!("min_volume", Threshold)],
        sql: "\
SELECT ROUND(AVG(market_cap_rank), 2) AS avg_rank,
       COUNT(*) AS coin_count
FROM cryptocurrencies
WHERE total_volume > ?",
        columns: &[col!("avg_rank", Price), col!("coin_count", Integer)],
        date_anchor: None,
    },
    QuerySpec {
        id: "latest-updated-coin",
        title: "Most recently updated coin",
        params: &[],
        sql: "\
SELECT name, symbol, current_price, market_cap, last_updated
FROM cryptocurrencies
ORDER BY last_updated DESC
LIMIT 1",
        columns: &[
            col!("name", Text),
            col!("symbol", Text),
            col!("current_price", Price),
            col!("market_cap", Price),
            col!("last_updated", Date),
        ],
        date_anchor: None,
    },
    // ----- crypto_prices --------------------------------------------------
    QuerySpec {
        id: "coin-peak-price",
        title: "Highest price of a coin over a trailing day window",
        params: &[param!("coin", Coin), param!("window_days", TrailingDays)],
        sql: "\
SELECT date, MAX(price_usd) AS highest_price
FROM crypto_prices
WHERE coin_id = ? AND date >= ?
GROUP BY date
ORDER BY highest_price DESC
LIMIT 1",
        columns: &[col!("date", Date), col!("highest_price", Price)],
        date_anchor: Some(CRYPTO_DATES),
    },
    QuerySpec {
        id: "coin-price-summary",
        title: "Average, minimum and maximum price over a trailing year window",
        params: &[param!("coin", Coin), param!("window_years", TrailingYears)],
        sql: "\
SELECT coin_id,
       ROUND(AVG(price_usd), 2) AS avg_price,
       MIN(price_usd) AS min_price,
       MAX(price_usd) AS max_price
FROM crypto_prices
WHERE coin_id = ? AND date >= ?
GROUP BY coin_id",
        columns: &[
            col!("coin_id", Text),
            col!("avg_price", Price),
            col!("min_price", Price),
            col!("max_price", Price),
        ],
        date_anchor: Some(CRYPTO_DATES),
    },
    QuerySpec {
        id: "coin-daily-trend",
        title: "Daily price trend with previous-day delta",
        params: &[
            param!("coin", Coin),
            param!("from", IsoDate),
            param!("to", IsoDate),
        ],
        sql: "\
SELECT date,
       price_usd,
       LAG(price_usd) OVER (ORDER BY date) AS prev_price,
       ROUND(price_usd - LAG(price_usd) OVER (ORDER BY date), 2) AS price_change
FROM crypto_prices
WHERE coin_id = ? AND date BETWEEN ? AND ?
ORDER BY date",
        columns: &[
            col!("date", Date),
            col!("price_usd", Price),
            col!("prev_price", Price),
            col!("price_change", Price),
        ],
        date_anchor: None,
    },
    QuerySpec {
        id: "top-coin-by-avg-price",
        title: "Coin with the highest average price over a trailing year window",
        params: &[param!("window_years", TrailingYears)],
        sql: "\
SELECT coin_id, ROUND(AVG(price_usd), 2) AS avg_price
FROM crypto_prices
WHERE date >= ?
GROUP BY coin_id
ORDER BY avg_price DESC
LIMIT 1",
        columns: &[col!("coin_id", Text), col!("avg_price", Price)],
        date_anchor: Some(CRYPTO_DATES),
    },
    QuerySpec {
        id: "coin-period-change",
        title: "Percentage change of a coin's peak price between two periods",
        params: &[
            param!("coin", Coin),
            param!("base_start", IsoDate),
            param!("base_end", IsoDate),
            param!("compare_start", IsoDate),
            param!("compare_end", IsoDate),
        ],
        sql: "\
SELECT MAX(CASE WHEN date >= ?2 AND date < ?3 THEN price_usd END) AS base_peak,
       MAX(CASE WHEN date >= ?4 AND date < ?5 THEN price_usd END) AS compare_peak,
       ROUND((MAX(CASE WHEN date >= ?4 AND date < ?5 THEN price_usd END)
            - MAX(CASE WHEN date >= ?2 AND date < ?3 THEN price_usd END)) * 100.0
            / NULLIF(MAX(CASE WHEN date >= ?2 AND date < ?3 THEN price_usd END), 0), 2) AS pct_change
FROM crypto_prices
WHERE coin_id = ?1",
        columns: &[
            col!("base_peak", Price),
            col!("compare_peak", Price),
            col!("pct_change", Percent),
        ],
        date_anchor: None,
    },
    QuerySpec {
        id: "coin-price-series",
        title: "Price series of a coin over a date range",
        params: &[
            param!("coin", Coin),
            param!("from", IsoDate),
            param!("to", IsoDate),
        ],
        sql: "\
SELECT date, price_usd
FROM crypto_prices
WHERE coin_id = ? AND date BETWEEN ? AND ?
ORDER BY date",
        columns: &[col!("date", Date), col!("price_usd", Price)],
        date_anchor: None,
    },
    QuerySpec {
        id: "coin-average-price",
        title: "Average price of a coin over a date range",
        params: &[
            param!("coin", Coin),
            param!("from", IsoDate),
            param!("to", IsoDate),
        ],
        sql: "\
SELECT ROUND(AVG(price_usd), 2) AS avg_price
FROM crypto_prices
WHERE coin_id = ? AND date BETWEEN ? AND ?",
        columns: &[col!("avg_price", Price)],
        date_anchor: None,
    },
    // ----- oil_prices -----------------------------------------------------
    QuerySpec {
        id: "oil-peak-price",
        title: "Highest oil price over a trailing year window",
        params: &[param!("window_years", TrailingYears)],
        sql: "\
SELECT strftime('%Y-%m-%d', Date) AS date, MAX(Price) AS highest_price
FROM oil_prices
WHERE strftime('%Y-%m-%d', Date) >= ?
GROUP BY strftime('%Y-%m-%d', Date)
ORDER BY highest_price DESC
LIMIT 1",
        columns: &[col!("date", Date), col!("highest_price", Price)],
        date_anchor: Some(OIL_DATES),
    },
    QuerySpec {
        id: "oil-lowest-price",
        title: "Lowest oil price over a trailing year window",
        params: &[param!("window_years", TrailingYears)],
        sql: "\
SELECT strftime('%Y-%m-%d', Date) AS date, MIN(Price) AS lowest_price
FROM oil_prices
WHERE strftime('%Y-%m-%d', Date) >= ?
GROUP BY strftime('%Y-%m-%d', Date)
ORDER BY lowest_price ASC
LIMIT 1",
        columns: &[col!("date", Date), col!("lowest_price", Price)],
        date_anchor: Some(OIL_DATES),
    },
    QuerySpec {
        id: "oil-daily-trend",
        title: "Daily oil price trend with previous-day delta",
        params: &[param!("from", IsoDate), param!("to", IsoDate)],
        sql: "\
SELECT strftime('%Y-%m-%d', Date) AS date, Price AS price,
       LAG(Price) OVER (ORDER BY Date) AS prev_price,
       ROUND(Price - LAG(Price) OVER (ORDER BY Date), 2) AS daily_change
FROM oil_prices
WHERE strftime('%Y-%m-%d', Date) BETWEEN ? AND ?
ORDER BY Date",
        columns: &[
            col!("date", Date),
            col!("price", Price),
            col!("prev_price", Price),
            col!("daily_change", Price),
        ],
        date_anchor: None,
    },
    QuerySpec {
        id: "oil-yearly-average",
        title: "Average oil price per year",
        params: &[],
        sql: "\
SELECT strftime('%Y', Date) AS year, ROUND(AVG(Price), 2) AS avg_price
FROM oil_prices
GROUP BY year
ORDER BY year DESC",
        columns: &[col!("year", Text), col!("avg_price", Price)],
        date_anchor: None,
    },
    QuerySpec {
        id: "oil-yearly-volatility",
        title: "Oil price spread (max - min) per year",
        params: &[],
        sql: "\
SELECT strftime('%Y', Date) AS year, ROUND(MAX(Price) - MIN(Price), 2) AS volatility
FROM oil_prices
GROUP BY year
ORDER BY volatility DESC",
        columns: &[col!("year", Text), col!("volatility", Price)],
        date_anchor: None,
    },
    QuerySpec {
        id: "oil-average-price",
        title: "Average oil price over a date range",
        params: &[param!("from", IsoDate), param!("to", IsoDate)],
        sql: "\
SELECT ROUND(AVG(Price), 2) AS avg_price
FROM oil_prices
WHERE strftime('%Y-%m-%d', Date) BETWEEN ? AND ?",
        columns: &[col!("avg_price", Price)],
        date_anchor: None,
    },
    // ----- stock_prices ---------------------------------------------------
    QuerySpec {
        id: "index-recent-quotes",
        title: "Most recent OHLCV quotes for an index",
        params: &[param!("ticker", Ticker), param!("limit", Limit)],
        sql: "\
SELECT strftime('%Y-%m-%d', date) AS date, ticker, open, high, low, close, volume
FROM stock_prices
WHERE ticker = ?
ORDER BY date DESC
LIMIT ?",
        columns: &[
            col!("date", Date),
            col!("ticker", Text),
            col!("open", Price),
            col!("high", Price),
            col!("low", Price),
            col!("close", Price),
            col!("volume", Integer),
        ],
        date_anchor: None,
    },
    QuerySpec {
        id: "index-peak-close",
        title: "Highest close of an index",
        params: &[param!("ticker", Ticker)],
        sql: "\
SELECT strftime('%Y-%m-%d', date) AS date, MAX(close) AS highest_close
FROM stock_prices
WHERE ticker = ?
GROUP BY strftime('%Y-%m-%d', date)
ORDER BY highest_close DESC
LIMIT 1",
        columns: &[col!("date", Date), col!("highest_close", Price)],
        date_anchor: None,
    },
    QuerySpec {
        id: "index-volatile-days",
        title: "Widest intraday ranges of an index",
        params: &[param!("ticker", Ticker), param!("limit", Limit)],
        sql: "\
SELECT strftime('%Y-%m-%d', date) AS date, high, low, ROUND(high - low, 2) AS volatility
FROM stock_prices
WHERE ticker = ?
ORDER BY volatility DESC
LIMIT ?",
        columns: &[
            col!("date", Date),
            col!("high", Price),
            col!("low", Price),
            col!("volatility", Price),
        ],
        date_anchor: None,
    },
    QuerySpec {
        id: "index-monthly-average",
        title: "Monthly average close per index",
        params: &[param!("limit", Limit)],
        sql: "\
SELECT ticker, strftime('%Y-%m', date) AS month, ROUND(AVG(close), 2) AS avg_close
FROM stock_prices
GROUP BY ticker, month
ORDER BY ticker, month DESC
LIMIT ?",
        columns: &[
            col!("ticker", Text),
            col!("month", Text),
            col!("avg_close", Price),
        ],
        date_anchor: None,
    },
    QuerySpec {
        id: "index-average-volume",
        title: "Average traded volume of an index over a date range",
        params: &[
            param!("ticker", Ticker),
            param!("from", IsoDate),
            param!("to", IsoDate),
        ],
        sql: "\
SELECT ROUND(AVG(volume), 0) AS avg_volume
FROM stock_prices
WHERE ticker = ? AND strftime('%Y-%m-%d', date) BETWEEN ? AND ?",
        columns: &[col!("avg_volume", Price)],
        date_anchor: None,
    },
    QuerySpec {
        id: "index-average-close",
        title: "Average close of an index over a date range",
        params: &[
            param!("ticker", Ticker),
            param!("from", IsoDate),
            param!("to", IsoDate),
        ],
        sql: "\
SELECT ROUND(AVG(close), 2) AS avg_close
FROM stock_prices
WHERE ticker = ? AND strftime('%Y-%m-%d', date) BETWEEN ? AND ?",
        columns: &[col!("avg_close", Price)],
        date_anchor: None,
    },
    // ----- cross-table joins on the canonical date key --------------------
    QuerySpec {
        id: "coin-vs-oil",
        title: "Coin price alongside oil price, most recent shared dates",
        params: &[param!("coin", Coin)],
        sql: "\
SELECT cp.date, cp.price_usd AS coin_price, op.Price AS oil_price
FROM crypto_prices cp
JOIN oil_prices op ON cp.date = strftime('%Y-%m-%d', op.Date)
WHERE cp.coin_id = ?
ORDER BY cp.date DESC
LIMIT 30",
        columns: &[
            col!("date", Date),
            col!("coin_price", Price),
            col!("oil_price", Price),
        ],
        date_anchor: None,
    },
    QuerySpec {
        id: "coin-vs-index",
        title: "Coin price alongside an index close, most recent shared dates",
        params: &[param!("coin", Coin), param!("ticker", Ticker)],
        sql: "\
SELECT cp.date, cp.price_usd AS coin_price, sp.close AS index_close
FROM crypto_prices cp
JOIN stock_prices sp ON cp.date = strftime('%Y-%m-%d', sp.date)
WHERE cp.coin_id = ? AND sp.ticker = ?
ORDER BY cp.date DESC
LIMIT 30",
        columns: &[
            col!("date", Date),
            col!("coin_price", Price),
            col!("index_close", Price),
        ],
        date_anchor: None,
    },
    QuerySpec {
        id: "index-vs-oil",
        title: "Index close alongside oil price, most recent shared dates",
        params: &[param!("ticker", Ticker)],
        sql: "\
SELECT strftime('%Y-%m-%d', sp.date) AS date, sp.close AS index_close, op.Price AS oil_price
FROM stock_prices sp
JOIN oil_prices op ON strftime('%Y-%m-%d', sp.date) = strftime('%Y-%m-%d', op.Date)
WHERE sp.ticker = ?
ORDER BY sp.date DESC
LIMIT 30",
        columns: &[
            col!("date", Date),
            col!("index_close", Price),
            col!("oil_price", Price),
        ],
        date_anchor: None,
    },
    QuerySpec {
        id: "coin-oil-index",
        title: "Coin, oil and index prices side by side",
        params: &[param!("coin", Coin), param!("ticker", Ticker)],
        sql: "\
SELECT cp.date, cp.price_usd AS coin_price, op.Price AS oil_price, sp.close AS index_close
FROM crypto_prices cp
JOIN oil_prices op ON cp.date = strftime('%Y-%m-%d', op.Date)
JOIN stock_prices sp ON cp.date = strftime('%Y-%m-%d', sp.date)
WHERE cp.coin_id = ? AND sp.ticker = ?
ORDER BY cp.date DESC
LIMIT 30",
        columns: &[
            col!("date", Date),
            col!("coin_price", Price),
            col!("oil_price", Price),
            col!("index_close", Price),
        ],
        date_anchor: None,
    },
    QuerySpec {
        id: "market-snapshot",
        title: "Daily snapshot: Bitcoin, oil, S&P 500 and NIFTY on shared dates",
        params: &[param!("from", IsoDate), param!("to", IsoDate)],
        sql: "\
SELECT cp.date,
       ROUND(cp.price_usd, 2) AS bitcoin_price,
       ROUND(op.Price, 2) AS oil_price,
       ROUND(sp.close, 2) AS sp500,
       ROUND(sn.close, 2) AS nifty
FROM crypto_prices cp
JOIN oil_prices op ON cp.date = strftime('%Y-%m-%d', op.Date)
JOIN stock_prices sp ON cp.date = strftime('%Y-%m-%d', sp.date) AND sp.ticker = '^GSPC'
JOIN stock_prices sn ON cp.date = strftime('%Y-%m-%d', sn.date) AND sn.ticker = '^NSEI'
WHERE cp.coin_id = 'bitcoin'
  AND cp.date BETWEEN ? AND ?
ORDER BY cp.date DESC
LIMIT 100",
        columns: &[
            col!("date", Date),
            col!("bitcoin_price", Price),
            col!("oil_price", Price),
            col!("sp500", Price),
            col!("nifty", Price),
        ],
        date_anchor: None,
    },
];

/// Looks up a catalog entry by its stable identifier.
pub fn find(id: &str) -> Option<&'static QuerySpec> {
    CATALOG.iter().find(|spec| spec.id == id)
}

/// Every catalog entry, in listing order.
pub fn all() -> &'static [QuerySpec] {
    CATALOG
}
