use std::collections::HashMap;

use crate::{
    client::CacheClient,
    domain::Item,
    error::CacheError,
    hooks::{AsOutcome, Call, HookRegistry},
};

/// A [`CacheClient`] wrapper that runs registered hooks around every call.
///
/// Handlers observe the arguments before the wrapped client is called and the
/// arguments plus the result afterwards. The result is returned to the caller
/// exactly as the wrapped client produced it, errors included.
///
/// `C` can be the client itself, a reference to it, a `Box` or an `Arc`, so
/// the caller decides who owns the underlying connection.
pub struct HookedClient<C> {
    client: C,
    hooks: HookRegistry,
}

impl<C: CacheClient> HookedClient<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            hooks: HookRegistry::new(),
        }
    }

    /// Registry used to attach and detach handlers.
    pub fn hooks(&self) -> &HookRegistry {
        &self.hooks
    }

    pub fn inner(&self) -> &C {
        &self.client
    }

    pub fn into_inner(self) -> C {
        self.client
    }

    fn instrumented<T>(
        &self,
        call: Call<'_>,
        delegate: impl FnOnce(&C) -> Result<T, CacheError>,
    ) -> Result<T, CacheError>
    where
        Result<T, CacheError>: AsOutcome,
    {
        let hooks = self.hooks.operation(call.operation());

        hooks.before().invoke(&call, None);
        let result = delegate(&self.client);
        hooks.after().invoke(&call, Some(&result.as_outcome()));

        result
    }
}

impl<C: CacheClient> CacheClient for HookedClient<C> {
    fn flush_all(&self) -> Result<(), CacheError> {
        self.instrumented(Call::FlushAll, |client| client.flush_all())
    }

    fn get(&self, key: &str) -> Result<Item, CacheError> {
        self.instrumented(Call::Get { key }, |client| client.get(key))
    }

    fn touch(&self, key: &str, seconds: i32) -> Result<(), CacheError> {
        self.instrumented(Call::Touch { key, seconds }, |client| {
            client.touch(key, seconds)
        })
    }

    fn get_multi(&self, keys: &[String]) -> Result<HashMap<String, Item>, CacheError> {
        self.instrumented(Call::GetMulti { keys }, |client| client.get_multi(keys))
    }

    fn set(&self, item: &Item) -> Result<(), CacheError> {
        self.instrumented(Call::Set { item }, |client| client.set(item))
    }

    fn add(&self, item: &Item) -> Result<(), CacheError> {
        self.instrumented(Call::Add { item }, |client| client.add(item))
    }

    fn replace(&self, item: &Item) -> Result<(), CacheError> {
        self.instrumented(Call::Replace { item }, |client| client.replace(item))
    }

    fn compare_and_swap(&self, item: &Item) -> Result<(), CacheError> {
        self.instrumented(Call::CompareAndSwap { item }, |client| {
            client.compare_and_swap(item)
        })
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.instrumented(Call::Delete { key }, |client| client.delete(key))
    }

    fn delete_all(&self) -> Result<(), CacheError> {
        self.instrumented(Call::DeleteAll, |client| client.delete_all())
    }

    fn ping(&self) -> Result<(), CacheError> {
        self.instrumented(Call::Ping, |client| client.ping())
    }

    fn increment(&self, key: &str, delta: u64) -> Result<u64, CacheError> {
        self.instrumented(Call::Increment { key, delta }, |client| {
            client.increment(key, delta)
        })
    }

    fn decrement(&self, key: &str, delta: u64) -> Result<u64, CacheError> {
        self.instrumented(Call::Decrement { key, delta }, |client| {
            client.decrement(key, delta)
        })
    }
}
