pub mod client;
pub mod error;
pub mod pagination;
pub mod types;
mod writes;

pub use client::{MarketClient, PAGE_LIMIT};
pub use error::MarketError;
pub use types::{OfferMappingEntry, OfferMappingPage, Paging};
