//! Static exchange descriptor served by `/info`

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExchangeInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub location: &'static str,
    pub logo: &'static str,
    pub website: &'static str,
    pub twitter: &'static str,
    pub version: &'static str,
    pub capability: Capability,
}

/// Which Nomics resources this adapter serves
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Capability {
    pub markets: bool,
    pub trades: bool,
    pub orders_snapshot: bool,
    pub candles: bool,
    pub ticker: bool,
}

pub const OPENSWAP_INFO: ExchangeInfo = ExchangeInfo {
    name: "OpenSwap",
    description: "OpenSwap is an audited DeFi protocol using Harmony network, with yield farming capabilities, simple-to-use user interface and cross-chain tools for bridging Harmony, Ethereum, and Binance Smart Chain networks.",
    location: "Switzerland",
    logo: "https://app.openswap.one/img/oswap_logo.5eef90b2.png",
    website: "https://app.openswap.one/",
    twitter: "https://twitter.com/OpenSwap_one/",
    version: "1.0",
    capability: Capability {
        markets: true,
        trades: true,
        orders_snapshot: false,
        candles: false,
        ticker: false,
    },
};
