//! Storage port for record collections.
//!
//! Every collection is a single serialized list under its own key, so the
//! whole application state fits any string key-value store:
//!
//! ```text
//! invoices            -> [Invoice, ...]
//! accounts_receivable -> [ReceivableEntry, ...]
//! driver_payments     -> [DriverPayment, ...]
//! accounts_payable    -> [PayableEntry, ...]
//! notes               -> [Note, ...]
//! users               -> [User, ...]
//! company_info        -> CompanyInfo
//! ```
//!
//! Writes replace the whole value. There are no transactions; a
//! read-modify-write cycle assumes a single writer.

mod error;
mod memory;

pub use error::StoreError;
pub use memory::MemoryStore;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Named collections kept in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    /// Customer invoices.
    Invoices,
    /// Accounts payable, manual and driver-payment derived.
    AccountsPayable,
    /// Accounts receivable, manual and invoice derived.
    AccountsReceivable,
    /// Payments owed to drivers per trip.
    DriverPayments,
    /// Delivery notes.
    Notes,
    /// User accounts.
    Users,
    /// Company name and logo.
    CompanyInfo,
}

impl Collection {
    /// All collections, in a stable order.
    pub const ALL: [Self; 7] = [
        Self::Invoices,
        Self::AccountsPayable,
        Self::AccountsReceivable,
        Self::DriverPayments,
        Self::Notes,
        Self::Users,
        Self::CompanyInfo,
    ];

    /// Storage key of the collection.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Invoices => "invoices",
            Self::AccountsPayable => "accounts_payable",
            Self::AccountsReceivable => "accounts_receivable",
            Self::DriverPayments => "driver_payments",
            Self::Notes => "notes",
            Self::Users => "users",
            Self::CompanyInfo => "company_info",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// A string key-value store.
///
/// Implementations only move opaque strings; (de)serialization happens in
/// [`load`] / [`save`].
pub trait KeyValueStore {
    /// Reads the raw value under `key`, `None` when never written.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replaces the raw value under `key`.
    fn put(&mut self, key: &str, value: String) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn put(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        (**self).put(key, value)
    }
}

/// A record type owned by exactly one collection.
pub trait Record: Serialize + DeserializeOwned {
    /// Collection holding records of this type.
    const COLLECTION: Collection;
}

/// Loads a list collection; a missing key is an empty list.
pub fn load<T, S>(store: &S) -> Result<Vec<T>, StoreError>
where
    T: Record,
    S: KeyValueStore + ?Sized,
{
    load_value(store, T::COLLECTION).map(Option::unwrap_or_default)
}

/// Persists a list collection, replacing its previous contents.
pub fn save<T, S>(store: &mut S, records: &[T]) -> Result<(), StoreError>
where
    T: Record,
    S: KeyValueStore + ?Sized,
{
    save_value(store, T::COLLECTION, records)
}

/// Loads a single-value collection.
pub fn load_value<T, S>(store: &S, collection: Collection) -> Result<Option<T>, StoreError>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let key = collection.key();
    match store.get(key)? {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Corrupt { key, source }),
    }
}

/// Persists a single value under `collection`.
pub fn save_value<T, S>(store: &mut S, collection: Collection, value: &T) -> Result<(), StoreError>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let key = collection.key();
    let raw = serde_json::to_string(value).map_err(|source| StoreError::Encode { key, source })?;
    tracing::debug!(collection = key, bytes = raw.len(), "persisting collection");
    store.put(key, raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
    }

    impl Record for Sample {
        const COLLECTION: Collection = Collection::Notes;
    }

    #[test]
    fn test_missing_collection_loads_empty() {
        let store = MemoryStore::new();
        let loaded: Vec<Sample> = load(&store).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStore::new();
        let records = vec![Sample {
            name: "NF001".to_string(),
        }];
        save(&mut store, &records).unwrap();

        let loaded: Vec<Sample> = load(&store).unwrap();
        assert_eq!(loaded, records);
        assert!(store.raw("notes").unwrap().contains("NF001"));
    }

    #[test]
    fn test_corrupt_collection_is_reported() {
        let mut store = MemoryStore::new();
        store.put("notes", "{not json".to_string()).unwrap();

        let result: Result<Vec<Sample>, _> = load(&store);
        assert!(matches!(result, Err(StoreError::Corrupt { key: "notes", .. })));
    }

    #[test]
    fn test_collection_keys_are_unique() {
        let mut keys: Vec<_> = Collection::ALL.iter().map(|c| c.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), Collection::ALL.len());
    }
}
