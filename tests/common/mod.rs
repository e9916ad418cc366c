#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use memcache_hooks::{CacheClient, CacheError, HookedClient, Item, Operation};

pub type Log = Arc<Mutex<Vec<String>>>;

/// Canned result for every operation.
#[derive(Clone)]
pub struct Results {
    pub flush_all: Result<(), CacheError>,
    pub get: Result<Item, CacheError>,
    pub touch: Result<(), CacheError>,
    pub get_multi: Result<HashMap<String, Item>, CacheError>,
    pub set: Result<(), CacheError>,
    pub add: Result<(), CacheError>,
    pub replace: Result<(), CacheError>,
    pub compare_and_swap: Result<(), CacheError>,
    pub delete: Result<(), CacheError>,
    pub delete_all: Result<(), CacheError>,
    pub ping: Result<(), CacheError>,
    pub increment: Result<u64, CacheError>,
    pub decrement: Result<u64, CacheError>,
}

impl Results {
    /// A distinguishable value or error per operation.
    pub fn sentinel() -> Self {
        Self {
            flush_all: Err(CacheError::Server("flush_all sentinel".into())),
            get: Ok(Item::new("sentinel", "get").with_flags(1).with_cas(7)),
            touch: Err(CacheError::CacheMiss),
            get_multi: Ok(HashMap::from([(
                "a".to_string(),
                Item::new("a", "multi").with_cas(9),
            )])),
            set: Ok(()),
            add: Err(CacheError::NotStored),
            replace: Err(CacheError::Server("replace sentinel".into())),
            compare_and_swap: Err(CacheError::CasConflict),
            delete: Err(CacheError::CacheMiss),
            delete_all: Err(CacheError::Connection("delete_all sentinel".into())),
            ping: Err(CacheError::NoServers),
            increment: Ok(15),
            decrement: Err(CacheError::Client("non-numeric value".into())),
        }
    }
}

/// Test double that returns canned results and logs what reached it.
pub struct MockClient {
    pub results: Results,
    pub log: Log,
}

impl MockClient {
    pub fn new(log: Log) -> Self {
        Self {
            results: Results::sentinel(),
            log,
        }
    }

    pub fn sentinel() -> Self {
        Self::new(Log::default())
    }

    fn record(&self, entry: String) {
        self.log.lock().unwrap().push(entry);
    }
}

impl CacheClient for MockClient {
    fn flush_all(&self) -> Result<(), CacheError> {
        self.record("delegate flush_all".into());
        self.results.flush_all.clone()
    }

    fn get(&self, key: &str) -> Result<Item, CacheError> {
        self.record(format!("delegate get {key}"));
        self.results.get.clone()
    }

    fn touch(&self, key: &str, seconds: i32) -> Result<(), CacheError> {
        self.record(format!("delegate touch {key} {seconds}"));
        self.results.touch.clone()
    }

    fn get_multi(&self, keys: &[String]) -> Result<HashMap<String, Item>, CacheError> {
        self.record(format!("delegate get_multi {}", keys.join(",")));
        self.results.get_multi.clone()
    }

    fn set(&self, item: &Item) -> Result<(), CacheError> {
        self.record(format!("delegate set {}", item.key));
        self.results.set.clone()
    }

    fn add(&self, item: &Item) -> Result<(), CacheError> {
        self.record(format!("delegate add {}", item.key));
        self.results.add.clone()
    }

    fn replace(&self, item: &Item) -> Result<(), CacheError> {
        self.record(format!("delegate replace {}", item.key));
        self.results.replace.clone()
    }

    fn compare_and_swap(&self, item: &Item) -> Result<(), CacheError> {
        self.record(format!("delegate compare_and_swap {}", item.key));
        self.results.compare_and_swap.clone()
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.record(format!("delegate delete {key}"));
        self.results.delete.clone()
    }

    fn delete_all(&self) -> Result<(), CacheError> {
        self.record("delegate delete_all".into());
        self.results.delete_all.clone()
    }

    fn ping(&self) -> Result<(), CacheError> {
        self.record("delegate ping".into());
        self.results.ping.clone()
    }

    fn increment(&self, key: &str, delta: u64) -> Result<u64, CacheError> {
        self.record(format!("delegate increment {key} {delta}"));
        self.results.increment.clone()
    }

    fn decrement(&self, key: &str, delta: u64) -> Result<u64, CacheError> {
        self.record(format!("delegate decrement {key} {delta}"));
        self.results.decrement.clone()
    }
}

pub const TEST_KEY: &str = "testKey";

pub fn test_item() -> Item {
    Item::new(TEST_KEY, "test")
}

/// Call `op` with fixed test arguments, discarding the result.
pub fn call<C: CacheClient>(client: &HookedClient<C>, op: Operation) {
    let item = test_item();
    let keys = vec![TEST_KEY.to_string()];

    let _ = match op {
        Operation::FlushAll => client.flush_all(),
        Operation::Get => client.get(TEST_KEY).map(drop),
        Operation::Touch => client.touch(TEST_KEY, 1),
        Operation::GetMulti => client.get_multi(&keys).map(drop),
        Operation::Set => client.set(&item),
        Operation::Add => client.add(&item),
        Operation::Replace => client.replace(&item),
        Operation::CompareAndSwap => client.compare_and_swap(&item),
        Operation::Delete => client.delete(TEST_KEY),
        Operation::DeleteAll => client.delete_all(),
        Operation::Ping => client.ping(),
        Operation::Increment => client.increment(TEST_KEY, 1).map(drop),
        Operation::Decrement => client.decrement(TEST_KEY, 1).map(drop),
    };
}
