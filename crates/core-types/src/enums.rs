use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The cryptocurrencies present in the `crypto_prices` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoinId {
    Bitcoin,
    Ethereum,
    Tether,
}

impl CoinId {
    pub const ALL: [CoinId; 3] = [CoinId::Bitcoin, CoinId::Ethereum, CoinId::Tether];

    /// The `coin_id` value as stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            CoinId::Bitcoin => "bitcoin",
            CoinId::Ethereum => "ethereum",
            CoinId::Tether => "tether",
        }
    }
}

impl fmt::Display for CoinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CoinId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bitcoin" => Ok(CoinId::Bitcoin),
            "ethereum" => Ok(CoinId::Ethereum),
            "tether" => Ok(CoinId::Tether),
            other => Err(CoreError::InvalidFilterValue {
                column: "coin_id",
                value: other.to_string(),
                allowed: "bitcoin, ethereum, tether",
            }),
        }
    }
}

/// The stock indices present in the `stock_prices` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndexTicker {
    /// S&P 500
    #[serde(rename = "^GSPC")]
    Gspc,
    /// NASDAQ Composite
    #[serde(rename = "^IXIC")]
    Ixic,
    /// NIFTY 50
    #[serde(rename = "^NSEI")]
    Nsei,
}

impl IndexTicker {
    pub const ALL: [IndexTicker; 3] = [IndexTicker::Gspc, IndexTicker::Ixic, IndexTicker::Nsei];

    /// The `ticker` value as stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            IndexTicker::Gspc => "^GSPC",
            IndexTicker::Ixic => "^IXIC",
            IndexTicker::Nsei => "^NSEI",
        }
    }
}

impl fmt::Display for IndexTicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IndexTicker {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "^GSPC" => Ok(IndexTicker::Gspc),
            "^IXIC" => Ok(IndexTicker::Ixic),
            "^NSEI" => Ok(IndexTicker::Nsei),
            other => Err(CoreError::InvalidFilterValue {
                column: "ticker",
                value: other.to_string(),
                allowed: "^GSPC, ^IXIC, ^NSEI",
            }),
        }
    }
}
