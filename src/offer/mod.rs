//! Offer data structures and JSON loading

mod data;
pub mod loader;

pub use data::{EquityPackage, EquityPackages, Offer, SliderDefaults, UnitType, DEFAULT_SHARES_OUTSTANDING};
pub use loader::{load_offers, load_offers_from_reader, parse_offers, OfferRecord};
