//! Account-data fetch collaborator.
//!
//! Implementations return raw account bytes. A missing account is
//! reported as `AccountNotFound`, never as a decode failure.

use std::collections::HashMap;

use tracing::debug;

use crate::address::Address;
use crate::codec::AccountData;
use crate::error::{CoreError, CoreResult};

pub trait AccountFetcher {
    fn fetch(&self, address: &Address) -> CoreResult<Vec<u8>>;
}

/// Fetch and decode a typed account.
pub fn fetch_account<T: AccountData>(fetcher: &dyn AccountFetcher, address: &Address) -> CoreResult<T> {
    let data = fetcher.fetch(address)?;
    debug!(%address, account_type = T::NAME, len = data.len(), "fetched account");
    T::from_account_data(&data)
}

/// Fetch and decode, mapping absence to `None`.
pub fn fetch_optional<T: AccountData>(fetcher: &dyn AccountFetcher, address: &Address) -> CoreResult<Option<T>> {
    match fetch_account(fetcher, address) {
        Ok(account) => Ok(Some(account)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

/// In-memory account store.
#[derive(Debug, Clone, Default)]
pub struct MemoryFetcher {
    accounts: HashMap<Address, Vec<u8>>,
}

impl MemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, address: Address, data: Vec<u8>) {
        self.accounts.insert(address, data);
    }
}

impl AccountFetcher for MemoryFetcher {
    fn fetch(&self, address: &Address) -> CoreResult<Vec<u8>> {
        self.accounts
            .get(address)
            .cloned()
            .ok_or(CoreError::AccountNotFound { address: *address })
    }
}
