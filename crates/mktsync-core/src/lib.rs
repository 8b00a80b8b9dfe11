pub mod app_config;
pub mod campaigns;
pub mod config;
pub mod error;
pub mod inventory;
pub mod price;
pub mod quantity;
pub mod updates;

pub use app_config::AppConfig;
pub use campaigns::{load_campaigns, CampaignConfig, CampaignsFile};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{ConfigError, CoreError};
pub use inventory::{load_inventory, parse_inventory, InventoryRecord};
pub use price::convert_price;
pub use quantity::{normalize_quantity, MANY_SENTINEL};
pub use updates::{PriceUpdate, StockUpdate, CURRENCY_RUR, FULFILLMENT_FIT};
