use std::collections::HashMap;

use crate::{
    domain::{Item, Operation},
    error::CacheError,
};

/// Arguments of one cache call, as seen by handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call<'a> {
    FlushAll,
    Get { key: &'a str },
    Touch { key: &'a str, seconds: i32 },
    GetMulti { keys: &'a [String] },
    Set { item: &'a Item },
    Add { item: &'a Item },
    Replace { item: &'a Item },
    CompareAndSwap { item: &'a Item },
    Delete { key: &'a str },
    DeleteAll,
    Ping,
    Increment { key: &'a str, delta: u64 },
    Decrement { key: &'a str, delta: u64 },
}

impl<'a> Call<'a> {
    pub fn operation(&self) -> Operation {
        match self {
            Call::FlushAll => Operation::FlushAll,
            Call::Get { .. } => Operation::Get,
            Call::Touch { .. } => Operation::Touch,
            Call::GetMulti { .. } => Operation::GetMulti,
            Call::Set { .. } => Operation::Set,
            Call::Add { .. } => Operation::Add,
            Call::Replace { .. } => Operation::Replace,
            Call::CompareAndSwap { .. } => Operation::CompareAndSwap,
            Call::Delete { .. } => Operation::Delete,
            Call::DeleteAll => Operation::DeleteAll,
            Call::Ping => Operation::Ping,
            Call::Increment { .. } => Operation::Increment,
            Call::Decrement { .. } => Operation::Decrement,
        }
    }

    /// The single key this call addresses, if any.
    pub fn key(&self) -> Option<&'a str> {
        match *self {
            Call::Get { key }
            | Call::Touch { key, .. }
            | Call::Delete { key }
            | Call::Increment { key, .. }
            | Call::Decrement { key, .. } => Some(key),
            Call::Set { item }
            | Call::Add { item }
            | Call::Replace { item }
            | Call::CompareAndSwap { item } => Some(item.key.as_str()),
            Call::FlushAll | Call::GetMulti { .. } | Call::DeleteAll | Call::Ping => None,
        }
    }
}

/// Result of one cache call, borrowed from the value about to be returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<'a> {
    Unit(&'a Result<(), CacheError>),
    Item(&'a Result<Item, CacheError>),
    Items(&'a Result<HashMap<String, Item>, CacheError>),
    Counter(&'a Result<u64, CacheError>),
}

impl<'a> Outcome<'a> {
    pub fn error(&self) -> Option<&'a CacheError> {
        match *self {
            Outcome::Unit(result) => result.as_ref().err(),
            Outcome::Item(result) => result.as_ref().err(),
            Outcome::Items(result) => result.as_ref().err(),
            Outcome::Counter(result) => result.as_ref().err(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error().is_none()
    }
}

/// Result types a wrapped call can produce.
pub(crate) trait AsOutcome {
    fn as_outcome(&self) -> Outcome<'_>;
}

impl AsOutcome for Result<(), CacheError> {
    fn as_outcome(&self) -> Outcome<'_> {
        Outcome::Unit(self)
    }
}

impl AsOutcome for Result<Item, CacheError> {
    fn as_outcome(&self) -> Outcome<'_> {
        Outcome::Item(self)
    }
}

impl AsOutcome for Result<HashMap<String, Item>, CacheError> {
    fn as_outcome(&self) -> Outcome<'_> {
        Outcome::Items(self)
    }
}

impl AsOutcome for Result<u64, CacheError> {
    fn as_outcome(&self) -> Outcome<'_> {
        Outcome::Counter(self)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn call_operation_and_key() {
        let item = Item::new("item-key", "v");
        let keys = vec!["a".to_string()];

        assert_eq!(Call::FlushAll.operation(), Operation::FlushAll);
        assert_eq!(Call::FlushAll.key(), None);
        assert_eq!(Call::GetMulti { keys: &keys }.key(), None);
        assert_eq!(Call::Set { item: &item }.key(), Some("item-key"));
        assert_eq!(
            Call::Decrement { key: "n", delta: 1 }.operation(),
            Operation::Decrement
        );
        assert_eq!(Call::Touch { key: "t", seconds: 0 }.key(), Some("t"));
    }

    #[test]
    fn outcome_error() {
        let miss: Result<Item, CacheError> = Err(CacheError::CacheMiss);
        let counter: Result<u64, CacheError> = Ok(3);

        assert_eq!(miss.as_outcome().error(), Some(&CacheError::CacheMiss));
        assert!(counter.as_outcome().is_ok());
        assert_eq!(counter.as_outcome(), Outcome::Counter(&Ok(3)));
    }
}
