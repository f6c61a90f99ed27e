//! Network URL constants for the upstream market-data API.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.coingecko.com/api/v3";

/// Quote currency used when none is configured.
pub const DEFAULT_VS_CURRENCY: &str = "usd";
