//! Conversion: CoinDetailResponse → AssetDetail (TryFrom + validation).

use super::wire::CoinDetailResponse;
use super::{AssetDetail, ValidationError};

/// Converts a detail response, reading prices in the given quote currency.
impl TryFrom<(CoinDetailResponse, &str)> for AssetDetail {
    type Error = ValidationError;

    fn try_from((source, vs_currency): (CoinDetailResponse, &str)) -> Result<Self, Self::Error> {
        let mut errors: Vec<ValidationError> = Vec::new();

        let image_url = source
            .image
            .large
            .or(source.image.small)
            .or(source.image.thumb)
            .unwrap_or_else(|| {
                errors.push(ValidationError::MissingImage);
                String::new()
            });

        let (current_price, market_cap, change) = match source.market_data {
            Some(data) => {
                let price = data.current_price.get(vs_currency).copied().flatten();
                let cap = data.market_cap.get(vs_currency).copied().flatten();
                if price.is_none() {
                    errors.push(ValidationError::MissingPrice(vs_currency.to_string()));
                }
                if cap.is_none() {
                    errors.push(ValidationError::MissingMarketCap(vs_currency.to_string()));
                }
                (price, cap, data.price_change_percentage_24h)
            }
            None => {
                errors.push(ValidationError::MissingMarketData);
                (None, None, None)
            }
        };

        if !errors.is_empty() {
            return Err(ValidationError::Multiple(source.id.to_string(), errors));
        }

        Ok(AssetDetail {
            id: source.id,
            name: source.name,
            symbol: source.symbol,
            image_url,
            current_price: current_price.unwrap_or_default(),
            market_cap: market_cap.unwrap_or_default(),
            price_change_percentage_24h: change,
            market_cap_rank: source.market_cap_rank,
        })
    }
}
