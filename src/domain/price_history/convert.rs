//! Conversion: MarketChartResponse → PricePoint samples → ChartSeries.

use super::wire::{MarketChartResponse, PricePair};
use super::{ChartSeries, PricePoint, ValidationError};
use chrono::{DateTime, Utc};

impl TryFrom<PricePair> for PricePoint {
    type Error = ValidationError;

    fn try_from(pair: PricePair) -> Result<Self, Self::Error> {
        let PricePair(millis, price) = pair;
        if !millis.is_finite() {
            return Err(ValidationError::InvalidTimestamp(millis));
        }
        let time = DateTime::<Utc>::from_timestamp_millis(millis as i64)
            .ok_or(ValidationError::InvalidTimestamp(millis))?;
        Ok(PricePoint { time, price })
    }
}

impl TryFrom<MarketChartResponse> for ChartSeries {
    type Error = ValidationError;

    fn try_from(source: MarketChartResponse) -> Result<Self, Self::Error> {
        let points = source
            .prices
            .into_iter()
            .map(PricePoint::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ChartSeries::from_points(points))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_become_points_in_order() {
        let resp = MarketChartResponse {
            prices: vec![
                PricePair(1_700_000_000_000.0, 100.0),
                PricePair(1_700_086_400_000.0, 110.0),
            ],
        };
        let series = ChartSeries::try_from(resp).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.labels().len(), 2);
        assert_eq!(series.values(), [100.0, 110.0]);
        assert_eq!(series.points()[0].time.timestamp_millis(), 1_700_000_000_000);
        assert_eq!(series.points()[1].time.timestamp_millis(), 1_700_086_400_000);
    }

    #[test]
    fn test_non_finite_timestamp_fails() {
        let err = PricePoint::try_from(PricePair(f64::NAN, 1.0)).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidTimestamp(_)));
    }

    #[test]
    fn test_out_of_range_timestamp_fails() {
        let result = ChartSeries::try_from(MarketChartResponse {
            prices: vec![PricePair(1e20, 1.0)],
        });
        assert!(result.is_err());
    }
}
