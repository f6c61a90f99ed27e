//! Scripted `MarketSource` for driving the flows without a network.
//!
//! Replies are keyed by query text or asset id. A gate holds a reply back until
//! the test opens it, which is how the race tests order completions.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::json;
use tokio::sync::Notify;

use coinview::domain::asset::wire::{MarketCoin, MarketsQuery, SearchResponse};
use coinview::domain::detail::wire::CoinDetailResponse;
use coinview::domain::price_history::wire::MarketChartResponse;
use coinview::domain::price_history::HistoryWindow;
use coinview::error::HttpError;
use coinview::shared::AssetId;
use coinview::source::MarketSource;

/// A scripted reply: a body, or a non-2xx status with its reason and body.
#[derive(Debug, Clone)]
pub enum Reply<T> {
    Ok(T),
    Status(u16, &'static str, &'static str),
}

impl<T: Clone> Reply<T> {
    fn resolve(&self) -> Result<T, HttpError> {
        match self {
            Reply::Ok(body) => Ok(body.clone()),
            Reply::Status(status, text, body) => Err(HttpError::Status {
                status: *status,
                status_text: text.to_string(),
                body: body.to_string(),
            }),
        }
    }
}

/// Every request the fake has seen, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Markets(MarketsQuery),
    Search(String),
    Coin(String),
    Chart {
        id: String,
        vs_currency: String,
        window: HistoryWindow,
    },
}

#[derive(Default)]
pub struct FakeSource {
    markets: Mutex<Option<Reply<Vec<MarketCoin>>>>,
    searches: Mutex<HashMap<String, Reply<SearchResponse>>>,
    coins: Mutex<HashMap<String, Reply<CoinDetailResponse>>>,
    charts: Mutex<HashMap<String, Reply<MarketChartResponse>>>,
    gates: Mutex<HashMap<String, Arc<Notify>>>,
    calls: Mutex<Vec<Call>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_markets(self, reply: Reply<Vec<MarketCoin>>) -> Self {
        *self.markets.lock().unwrap() = Some(reply);
        self
    }

    /// Replace the listing reply after the explorer has taken ownership.
    pub fn set_markets(&self, reply: Reply<Vec<MarketCoin>>) {
        *self.markets.lock().unwrap() = Some(reply);
    }

    pub fn with_search(self, query: &str, reply: Reply<SearchResponse>) -> Self {
        self.searches
            .lock()
            .unwrap()
            .insert(query.to_string(), reply);
        self
    }

    pub fn with_coin(self, id: &str, reply: Reply<CoinDetailResponse>) -> Self {
        self.coins.lock().unwrap().insert(id.to_string(), reply);
        self
    }

    pub fn with_chart(self, id: &str, reply: Reply<MarketChartResponse>) -> Self {
        self.charts.lock().unwrap().insert(id.to_string(), reply);
        self
    }

    /// Hold back the reply for `key` (`"markets"`, `"search:<q>"`,
    /// `"coin:<id>"`, `"chart:<id>"`) until [`FakeSource::open`] is called.
    pub fn gated(self, key: &str) -> Self {
        self.gates
            .lock()
            .unwrap()
            .insert(key.to_string(), Arc::new(Notify::new()));
        self
    }

    /// Release a gated reply. The permit is stored if nobody waits yet.
    pub fn open(&self, key: &str) {
        if let Some(gate) = self.gates.lock().unwrap().get(key) {
            gate.notify_one();
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    async fn wait(&self, key: &str) {
        let gate = self.gates.lock().unwrap().get(key).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }
    }
}

fn unscripted(what: &str) -> HttpError {
    HttpError::Status {
        status: 404,
        status_text: "Not Found".to_string(),
        body: format!("no reply scripted for {what}"),
    }
}

impl MarketSource for FakeSource {
    async fn markets(&self, query: &MarketsQuery) -> Result<Vec<MarketCoin>, HttpError> {
        self.record(Call::Markets(query.clone()));
        self.wait("markets").await;
        let reply = self.markets.lock().unwrap().clone();
        reply.map_or_else(|| Err(unscripted("markets")), |r| r.resolve())
    }

    async fn search(&self, query: &str) -> Result<SearchResponse, HttpError> {
        self.record(Call::Search(query.to_string()));
        self.wait(&format!("search:{query}")).await;
        let reply = self.searches.lock().unwrap().get(query).cloned();
        reply.map_or_else(|| Err(unscripted(query)), |r| r.resolve())
    }

    async fn coin(&self, id: &AssetId) -> Result<CoinDetailResponse, HttpError> {
        self.record(Call::Coin(id.to_string()));
        self.wait(&format!("coin:{id}")).await;
        let reply = self.coins.lock().unwrap().get(id.as_str()).cloned();
        reply.map_or_else(|| Err(unscripted(id.as_str())), |r| r.resolve())
    }

    async fn market_chart_range(
        &self,
        id: &AssetId,
        vs_currency: &str,
        window: HistoryWindow,
    ) -> Result<MarketChartResponse, HttpError> {
        self.record(Call::Chart {
            id: id.to_string(),
            vs_currency: vs_currency.to_string(),
            window,
        });
        self.wait(&format!("chart:{id}")).await;
        let reply = self.charts.lock().unwrap().get(id.as_str()).cloned();
        reply.map_or_else(|| Err(unscripted(id.as_str())), |r| r.resolve())
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

fn short_symbol(id: &str) -> &str {
    &id[..3.min(id.len())]
}

pub fn market_coin(id: &str, symbol: &str, price: f64, rank: u32) -> MarketCoin {
    let name = format!("{}{}", id[..1].to_uppercase(), &id[1..]);
    serde_json::from_value(json!({
        "id": id,
        "symbol": symbol,
        "name": name,
        "image": format!("https://assets.example/{id}/large.png"),
        "current_price": price,
        "market_cap": price * 1_000_000.0,
        "market_cap_rank": rank,
        "price_change_percentage_24h": 1.5
    }))
    .unwrap()
}

pub fn top_markets() -> Vec<MarketCoin> {
    vec![
        market_coin("bitcoin", "btc", 43000.5, 1),
        market_coin("ethereum", "eth", 2300.25, 2),
        market_coin("tether", "usdt", 1.0, 3),
    ]
}

pub fn search_response(ids: &[&str]) -> SearchResponse {
    let coins: Vec<_> = ids
        .iter()
        .map(|id| {
            let symbol = short_symbol(id).to_uppercase();
            json!({
                "id": id,
                "name": id,
                "symbol": symbol,
                "market_cap_rank": null,
                "thumb": format!("https://assets.example/{id}/thumb.png")
            })
        })
        .collect();
    serde_json::from_value(json!({ "coins": coins, "exchanges": [], "nfts": [] })).unwrap()
}

pub fn coin_detail(id: &str, price: f64) -> CoinDetailResponse {
    let symbol = short_symbol(id);
    serde_json::from_value(json!({
        "id": id,
        "symbol": symbol,
        "name": id,
        "image": {
            "thumb": format!("https://assets.example/{id}/thumb.png"),
            "small": format!("https://assets.example/{id}/small.png"),
            "large": format!("https://assets.example/{id}/large.png")
        },
        "market_cap_rank": 1,
        "market_data": {
            "current_price": { "usd": price },
            "market_cap": { "usd": price * 1_000_000.0 },
            "price_change_percentage_24h": -2.5
        }
    }))
    .unwrap()
}

pub fn chart(prices: &[(f64, f64)]) -> MarketChartResponse {
    let prices: Vec<_> = prices.iter().map(|(t, p)| json!([t, p])).collect();
    serde_json::from_value(json!({ "prices": prices, "market_caps": [], "total_volumes": [] }))
        .unwrap()
}
