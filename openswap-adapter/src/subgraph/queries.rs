//! GraphQL documents and their variable contracts

use serde::Serialize;

/// Swaps returned per `getSwaps` page; also the `skip` increment
pub const SWAPS_PAGE_SIZE: u32 = 1000;

pub const PAIRS_OPERATION: &str = "getPairs";
pub const SWAPS_OPERATION: &str = "getSwaps";

// `skip: 1` drops the first indexed pair; kept as deployed.
pub const PAIRS_QUERY: &str = r#"
query getPairs($limit: Int!) {
  pairs(first: $limit, skip: 1) {
    id
    token0 {
      symbol
    }
    token1 {
      symbol
    }
  }
}
"#;

pub const SWAPS_QUERY: &str = r#"
query getSwaps($market: String!, $skip: Int!, $since: String) {
  swaps(
    first: 1000
    skip: $skip
    orderBy: timestamp
    where: { pair: $market, id_gt: $since }
  ) {
    id
    amountUSD
    timestamp
    amount0In
    amount0Out
    amount1In
    amount1Out
    pair {
      token0 {
        symbol
        tokenDayData(first: 1, orderBy: date, orderDirection: desc) {
          priceUSD
          date
        }
      }
      token1 {
        symbol
        tokenDayData(first: 1, orderBy: date, orderDirection: desc) {
          priceUSD
          date
        }
      }
    }
    transaction {
      id
    }
  }
}
"#;

#[derive(Debug, Clone, Serialize)]
pub struct PairsVariables {
    pub limit: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SwapsVariables<'a> {
    pub market: &'a str,
    pub skip: u32,
    pub since: &'a str,
}
