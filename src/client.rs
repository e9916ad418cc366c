use std::{collections::HashMap, sync::Arc};

use crate::{domain::Item, error::CacheError};

/// Operations offered by a memcached-style cache client.
///
/// Implementors own connection handling, server selection and protocol
/// details. [`HookedClient`](crate::HookedClient) forwards to this trait and
/// implements it as well.
pub trait CacheClient: Send + Sync {
    /// Delete every item on every server.
    fn flush_all(&self) -> Result<(), CacheError>;

    /// Fetch the item for `key`. [`CacheError::CacheMiss`] if absent.
    fn get(&self, key: &str) -> Result<Item, CacheError>;

    /// Update the expiration of `key`. `seconds` is a unix timestamp when
    /// larger than one month, otherwise relative. Zero means never expire.
    fn touch(&self, key: &str, seconds: i32) -> Result<(), CacheError>;

    /// Batch version of [`CacheClient::get`]. Misses are left out of the map.
    fn get_multi(&self, keys: &[String]) -> Result<HashMap<String, Item>, CacheError>;

    /// Write the item unconditionally.
    fn set(&self, item: &Item) -> Result<(), CacheError>;

    /// Write the item only if its key is not present yet.
    fn add(&self, item: &Item) -> Result<(), CacheError>;

    /// Write the item only if its key is already present.
    fn replace(&self, item: &Item) -> Result<(), CacheError>;

    /// Write an item previously returned by a read, if it was neither modified
    /// ([`CacheError::CasConflict`]) nor evicted ([`CacheError::NotStored`])
    /// in between.
    fn compare_and_swap(&self, item: &Item) -> Result<(), CacheError>;

    /// Delete `key`. [`CacheError::CacheMiss`] if absent.
    fn delete(&self, key: &str) -> Result<(), CacheError>;

    /// Same effect as [`CacheClient::flush_all`], hooked as its own operation.
    fn delete_all(&self) -> Result<(), CacheError>;

    /// Succeeds only if every backing instance responds.
    fn ping(&self) -> Result<(), CacheError>;

    /// Add `delta` to a decimal value, wrapping on 64-bit overflow.
    fn increment(&self, key: &str, delta: u64) -> Result<u64, CacheError>;

    /// Subtract `delta` from a decimal value, clamping at zero.
    fn decrement(&self, key: &str, delta: u64) -> Result<u64, CacheError>;
}

macro_rules! forward_cache_client {
    ($($ptr:ty),+) => {$(
        impl<T: CacheClient + ?Sized> CacheClient for $ptr {
            fn flush_all(&self) -> Result<(), CacheError> {
                (**self).flush_all()
            }

            fn get(&self, key: &str) -> Result<Item, CacheError> {
                (**self).get(key)
            }

            fn touch(&self, key: &str, seconds: i32) -> Result<(), CacheError> {
                (**self).touch(key, seconds)
            }

            fn get_multi(&self, keys: &[String]) -> Result<HashMap<String, Item>, CacheError> {
                (**self).get_multi(keys)
            }

            fn set(&self, item: &Item) -> Result<(), CacheError> {
                (**self).set(item)
            }

            fn add(&self, item: &Item) -> Result<(), CacheError> {
                (**self).add(item)
            }

            fn replace(&self, item: &Item) -> Result<(), CacheError> {
                (**self).replace(item)
            }

            fn compare_and_swap(&self, item: &Item) -> Result<(), CacheError> {
                (**self).compare_and_swap(item)
            }

            fn delete(&self, key: &str) -> Result<(), CacheError> {
                (**self).delete(key)
            }

            fn delete_all(&self) -> Result<(), CacheError> {
                (**self).delete_all()
            }

            fn ping(&self) -> Result<(), CacheError> {
                (**self).ping()
            }

            fn increment(&self, key: &str, delta: u64) -> Result<u64, CacheError> {
                (**self).increment(key, delta)
            }

            fn decrement(&self, key: &str, delta: u64) -> Result<u64, CacheError> {
                (**self).decrement(key, delta)
            }
        }
    )+};
}

forward_cache_client!(&T, Box<T>, Arc<T>);
