//! Skip/offset pagination over `getSwaps`

use tracing::debug;

use crate::core::{SubgraphPort, UpstreamError};
use crate::subgraph::{RawSwap, SWAPS_PAGE_SIZE};

/// Fetch every swap of `market` newer than `since`.
///
/// Pages are requested one after another with `skip` advancing by the page
/// size until the subgraph returns an empty page. At most `max_pages`
/// requests are made, the terminating empty page included; hitting the
/// bound fails with [`UpstreamError::PageLimitExceeded`]. Any page failure
/// discards what was already fetched.
pub async fn collect_swap_history(
    source: &dyn SubgraphPort,
    market: &str,
    since: &str,
    max_pages: u32,
) -> Result<Vec<RawSwap>, UpstreamError> {
    let mut swaps = Vec::new();
    let mut skip = 0u32;

    for page in 0..max_pages {
        let batch = source.fetch_trades_page(market, since, skip).await?;
        debug!(market, skip, page, count = batch.len(), "Fetched swaps page");

        if batch.is_empty() {
            return Ok(swaps);
        }

        swaps.extend(batch);
        skip = skip.saturating_add(SWAPS_PAGE_SIZE);
    }

    Err(UpstreamError::PageLimitExceeded {
        market: market.to_string(),
        pages: max_pages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subgraph::RawPair;
    use async_trait::async_trait;
    use serde_json::json;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Serves pages of the given sizes, then empty pages forever
    struct PagedSource {
        pages: Mutex<VecDeque<usize>>,
        skips: Mutex<Vec<u32>>,
        endless: bool,
    }

    impl PagedSource {
        fn new(sizes: &[usize]) -> Self {
            Self {
                pages: Mutex::new(sizes.iter().copied().collect()),
                skips: Mutex::new(Vec::new()),
                endless: false,
            }
        }

        fn endless() -> Self {
            Self {
                endless: true,
                ..Self::new(&[])
            }
        }

        fn skips(&self) -> Vec<u32> {
            self.skips.lock().unwrap().clone()
        }
    }

    fn raw_swap(index: usize) -> RawSwap {
        serde_json::from_value(json!({
            "id": format!("0xswap-{}", index),
            "amountUSD": "1",
            "timestamp": "1622548800",
            "amount0In": "1",
            "amount0Out": "0",
            "amount1In": "0",
            "amount1Out": "1",
            "pair": {
                "token0": { "symbol": "A", "tokenDayData": [] },
                "token1": { "symbol": "B", "tokenDayData": [] }
            },
            "transaction": { "id": "0xtx" }
        }))
        .unwrap()
    }

    #[async_trait]
    impl SubgraphPort for PagedSource {
        async fn fetch_pairs(&self, _limit: u32) -> Result<Vec<RawPair>, UpstreamError> {
            Ok(Vec::new())
        }

        async fn fetch_trades_page(
            &self,
            _market: &str,
            _since: &str,
            skip: u32,
        ) -> Result<Vec<RawSwap>, UpstreamError> {
            self.skips.lock().unwrap().push(skip);
            let size = if self.endless {
                1
            } else {
                self.pages.lock().unwrap().pop_front().unwrap_or(0)
            };
            Ok((0..size).map(|i| raw_swap(skip as usize + i)).collect())
        }
    }

    #[tokio::test]
    async fn test_pages_until_empty() {
        let source = PagedSource::new(&[1000, 1000, 437, 0]);

        let swaps = collect_swap_history(&source, "0xpair", "", 10).await.unwrap();

        assert_eq!(swaps.len(), 2437);
        assert_eq!(source.skips(), vec![0, 1000, 2000, 3000]);
        assert_eq!(swaps[0].id, "0xswap-0");
        assert_eq!(swaps[2436].id, "0xswap-2436");
    }

    #[tokio::test]
    async fn test_short_page_does_not_stop_loop() {
        let source = PagedSource::new(&[3, 2, 0]);

        let swaps = collect_swap_history(&source, "0xpair", "", 10).await.unwrap();

        assert_eq!(swaps.len(), 5);
        assert_eq!(source.skips(), vec![0, 1000, 2000]);
    }

    #[tokio::test]
    async fn test_empty_history() {
        let source = PagedSource::new(&[]);

        let swaps = collect_swap_history(&source, "0xpair", "0xlast", 10).await.unwrap();

        assert!(swaps.is_empty());
        assert_eq!(source.skips(), vec![0]);
    }

    #[tokio::test]
    async fn test_page_bound() {
        let source = PagedSource::endless();

        let err = collect_swap_history(&source, "0xpair", "", 3).await.unwrap_err();

        assert!(matches!(
            err,
            UpstreamError::PageLimitExceeded { pages: 3, .. }
        ));
        assert_eq!(source.skips(), vec![0, 1000, 2000]);
    }

    #[tokio::test]
    async fn test_bound_counts_terminating_page() {
        let source = PagedSource::new(&[5, 0]);

        let swaps = collect_swap_history(&source, "0xpair", "", 2).await.unwrap();
        assert_eq!(swaps.len(), 5);
    }
}
