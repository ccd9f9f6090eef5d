//! Offer storage behind an explicit repository interface
//!
//! Callers inject a store and hand plain `Offer` values to the projection
//! engine; the engine never reaches into storage itself.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{ProjectionError, Result};
use crate::offer::Offer;

/// Stable identifier of a stored offer
pub type OfferId = u64;

/// An offer together with its storage metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredOffer {
    pub id: OfferId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub offer: Offer,
}

/// Repository interface for offer CRUD
pub trait OfferRepository {
    /// Gets one offer by id.
    fn get(&self, id: OfferId) -> Option<&StoredOffer>;
    /// Stores a new offer and returns its record.
    fn create(&mut self, offer: Offer) -> StoredOffer;
    /// Replaces the grant terms of an existing offer.
    fn update(&mut self, id: OfferId, offer: Offer) -> Result<StoredOffer>;
    /// Removes an offer.
    fn delete(&mut self, id: OfferId) -> Result<()>;
    /// Lists all offers in id order.
    fn list(&self) -> Vec<&StoredOffer>;
}

/// Process-lifetime in-memory store
#[derive(Debug, Default)]
pub struct InMemoryOfferRepository {
    offers: BTreeMap<OfferId, StoredOffer>,
    next_id: OfferId,
}

impl InMemoryOfferRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with offers, e.g. from a loaded JSON file
    pub fn with_offers(offers: impl IntoIterator<Item = Offer>) -> Self {
        let mut repo = Self::new();
        for offer in offers {
            repo.create(offer);
        }
        repo
    }

    pub fn len(&self) -> usize {
        self.offers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }
}

impl OfferRepository for InMemoryOfferRepository {
    fn get(&self, id: OfferId) -> Option<&StoredOffer> {
        self.offers.get(&id)
    }

    fn create(&mut self, offer: Offer) -> StoredOffer {
        self.next_id += 1;
        let now = Utc::now();
        let stored = StoredOffer {
            id: self.next_id,
            created_at: now,
            updated_at: now,
            offer,
        };
        debug!("created offer {}", stored.id);
        self.offers.insert(stored.id, stored.clone());
        stored
    }

    fn update(&mut self, id: OfferId, offer: Offer) -> Result<StoredOffer> {
        let stored = self.offers.get_mut(&id).ok_or(ProjectionError::OfferNotFound { id })?;
        stored.offer = offer;
        stored.updated_at = Utc::now();
        Ok(stored.clone())
    }

    fn delete(&mut self, id: OfferId) -> Result<()> {
        self.offers
            .remove(&id)
            .map(|_| ())
            .ok_or(ProjectionError::OfferNotFound { id })
    }

    fn list(&self) -> Vec<&StoredOffer> {
        self.offers.values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Cents;

    fn offer(salary_cents: i64) -> Offer {
        Offer::new(Cents(salary_cents), 1_000, Cents(100_000_000), Cents(50))
    }

    #[test]
    fn test_create_and_get() {
        let mut repo = InMemoryOfferRepository::new();
        let first = repo.create(offer(10_000_000));
        let second = repo.create(offer(12_000_000));

        assert_ne!(first.id, second.id);
        assert_eq!(repo.len(), 2);
        assert_eq!(repo.get(first.id).unwrap().offer.annual_salary, Cents(10_000_000));
        assert!(repo.get(999).is_none());
    }

    #[test]
    fn test_update_replaces_offer() {
        let mut repo = InMemoryOfferRepository::with_offers([offer(10_000_000)]);
        let id = repo.list()[0].id;

        let updated = repo.update(id, offer(11_000_000)).unwrap();
        assert_eq!(updated.offer.annual_salary, Cents(11_000_000));
        assert!(updated.updated_at >= updated.created_at);
        assert_eq!(repo.get(id).unwrap().offer.annual_salary, Cents(11_000_000));

        assert!(matches!(
            repo.update(42, offer(1)),
            Err(ProjectionError::OfferNotFound { id: 42 })
        ));
    }

    #[test]
    fn test_delete() {
        let mut repo = InMemoryOfferRepository::with_offers([offer(1), offer(2)]);
        let id = repo.list()[0].id;

        repo.delete(id).unwrap();
        assert_eq!(repo.len(), 1);
        assert!(repo.get(id).is_none());
        assert!(repo.delete(id).is_err());

        // Ids are not reused after a delete
        let next = repo.create(offer(3));
        assert!(next.id > id);
    }
}
