//! Commodity price collection: download each ticker, then join on date.

use crate::progress::CollectProgress;
use bricsdata_core::data::{join_closes, CommoditySeries, DataError, PriceProvider};
use bricsdata_core::domain::Commodity;
use chrono::NaiveDate;

/// Download closes for every commodity and join them into one table.
///
/// A ticker that fails or returns no closes is reported and left out of the
/// join; its column is simply absent. Rows missing any of the remaining
/// columns are dropped.
pub fn fetch_prices(
    provider: &dyn PriceProvider,
    progress: &dyn CollectProgress,
    commodities: &[Commodity],
    start: NaiveDate,
    end: NaiveDate,
) -> CommoditySeries {
    let mut fetched = Vec::with_capacity(commodities.len());

    for commodity in commodities {
        progress.on_commodity_start(commodity);

        let result = provider
            .fetch_closes(commodity.symbol, start, end)
            .and_then(|closes| {
                if closes.is_empty() {
                    Err(DataError::SymbolNotFound {
                        symbol: commodity.symbol.to_string(),
                    })
                } else {
                    Ok(closes)
                }
            });

        match result {
            Ok(closes) => {
                tracing::debug!(symbol = commodity.symbol, days = closes.len(), "closes fetched");
                fetched.push((commodity.name.to_string(), closes));
            }
            Err(e) => {
                tracing::warn!(
                    provider = provider.name(),
                    symbol = commodity.symbol,
                    error = %e,
                    "commodity request failed"
                );
                progress.on_commodity_error(commodity, &e);
            }
        }
    }

    let series = join_closes(fetched);
    progress.on_commodities_complete(series.len());
    series
}
