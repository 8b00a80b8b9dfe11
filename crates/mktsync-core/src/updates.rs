//! Records pushed to the marketplace.
//!
//! Both types are flat in Rust and serialize to the nested shape the partner
//! API expects:
//!
//! ```text
//! {"sku": "A1", "warehouseId": "77", "items": [{"count": 5, "type": "FIT", "updatedAt": "2026-01-02T03:04:05Z"}]}
//! {"id": "A1", "price": {"value": 5990, "currencyId": "RUR"}}
//! ```

use chrono::{DateTime, SecondsFormat, Utc};
use serde::ser::{Serialize, Serializer};

/// Fulfillment-type tag for stock supplied by the seller's own warehouse.
pub const FULFILLMENT_FIT: &str = "FIT";

/// Currency code for every price update.
pub const CURRENCY_RUR: &str = "RUR";

/// Stock level for one offer in one warehouse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockUpdate {
    pub sku: String,
    pub warehouse_id: String,
    pub count: i64,
    /// Shared by every update produced in the same reconciliation pass.
    pub updated_at: DateTime<Utc>,
}

impl StockUpdate {
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.count != 0
    }
}

impl Serialize for StockUpdate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(serde::Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Item<'a> {
            count: i64,
            #[serde(rename = "type")]
            kind: &'a str,
            updated_at: String,
        }

        #[derive(serde::Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Wire<'a> {
            sku: &'a str,
            warehouse_id: &'a str,
            items: [Item<'a>; 1],
        }

        Wire {
            sku: &self.sku,
            warehouse_id: &self.warehouse_id,
            items: [Item {
                count: self.count,
                kind: FULFILLMENT_FIT,
                updated_at: self.updated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            }],
        }
        .serialize(serializer)
    }
}

/// Price for one offer, already truncated to whole currency units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceUpdate {
    pub id: String,
    pub value: i64,
}

impl Serialize for PriceUpdate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(serde::Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Price<'a> {
            value: i64,
            currency_id: &'a str,
        }

        #[derive(serde::Serialize)]
        struct Wire<'a> {
            id: &'a str,
            price: Price<'a>,
        }

        Wire {
            id: &self.id,
            price: Price {
                value: self.value,
                currency_id: CURRENCY_RUR,
            },
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;

    #[test]
    fn stock_update_serializes_to_nested_items() {
        let update = StockUpdate {
            sku: "A1".to_string(),
            warehouse_id: "77".to_string(),
            count: 5,
            updated_at: Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap(),
        };
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(
            value,
            json!({
                "sku": "A1",
                "warehouseId": "77",
                "items": [{"count": 5, "type": "FIT", "updatedAt": "2026-01-02T03:04:05Z"}]
            })
        );
    }

    #[test]
    fn stock_update_timestamp_drops_subseconds() {
        let updated_at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap()
            + chrono::Duration::milliseconds(987);
        let update = StockUpdate {
            sku: "A1".to_string(),
            warehouse_id: "77".to_string(),
            count: 0,
            updated_at,
        };
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value["items"][0]["updatedAt"], "2026-01-02T03:04:05Z");
        assert!(!update.is_available());
    }

    #[test]
    fn price_update_serializes_with_currency() {
        let update = PriceUpdate {
            id: "A1".to_string(),
            value: 5990,
        };
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(
            value,
            json!({"id": "A1", "price": {"value": 5990, "currencyId": "RUR"}})
        );
    }
}
