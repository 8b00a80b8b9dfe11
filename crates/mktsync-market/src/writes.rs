//! Stock and price write endpoints.

use mktsync_core::{PriceUpdate, StockUpdate};

use crate::client::MarketClient;
use crate::error::MarketError;
use crate::types::{PricesRequest, StocksRequest};

impl MarketClient {
    /// Replaces stock levels for the given offers in one request.
    ///
    /// The caller is responsible for keeping `stocks` within the endpoint's
    /// payload cap.
    ///
    /// # Errors
    ///
    /// - [`MarketError::Transient`] on timeout or connection failure.
    /// - [`MarketError::Api`] on a non-2xx status or an `"ERROR"` envelope.
    pub async fn update_stocks(
        &self,
        campaign_id: &str,
        stocks: &[StockUpdate],
    ) -> Result<(), MarketError> {
        let url = self.campaign_url(campaign_id, "offers/stocks")?;
        let request = self
            .client()
            .put(url.clone())
            .json(&StocksRequest { skus: stocks });
        self.send(request, &url).await?;
        Ok(())
    }

    /// Sets prices for the given offers in one request.
    ///
    /// # Errors
    ///
    /// - [`MarketError::Transient`] on timeout or connection failure.
    /// - [`MarketError::Api`] on a non-2xx status or an `"ERROR"` envelope.
    pub async fn update_prices(
        &self,
        campaign_id: &str,
        prices: &[PriceUpdate],
    ) -> Result<(), MarketError> {
        let url = self.campaign_url(campaign_id, "offer-prices/updates")?;
        let request = self
            .client()
            .post(url.clone())
            .json(&PricesRequest { offers: prices });
        self.send(request, &url).await?;
        Ok(())
    }
}
