use std::{fmt, str::FromStr};

use serde::Deserialize;
use thiserror::Error;

/// The closed set of cache operations that can be hooked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    FlushAll,
    Get,
    Touch,
    GetMulti,
    Set,
    Add,
    Replace,
    CompareAndSwap,
    Delete,
    DeleteAll,
    Ping,
    Increment,
    Decrement,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown cache operation `{0}`")]
pub struct UnknownOperation(pub String);

impl Operation {
    pub const COUNT: usize = 13;

    /// Every operation, in declaration order.
    pub const ALL: [Operation; Self::COUNT] = [
        Operation::FlushAll,
        Operation::Get,
        Operation::Touch,
        Operation::GetMulti,
        Operation::Set,
        Operation::Add,
        Operation::Replace,
        Operation::CompareAndSwap,
        Operation::Delete,
        Operation::DeleteAll,
        Operation::Ping,
        Operation::Increment,
        Operation::Decrement,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::FlushAll => "flush_all",
            Operation::Get => "get",
            Operation::Touch => "touch",
            Operation::GetMulti => "get_multi",
            Operation::Set => "set",
            Operation::Add => "add",
            Operation::Replace => "replace",
            Operation::CompareAndSwap => "compare_and_swap",
            Operation::Delete => "delete",
            Operation::DeleteAll => "delete_all",
            Operation::Ping => "ping",
            Operation::Increment => "increment",
            Operation::Decrement => "decrement",
        }
    }

    /// Position of the operation in [`Operation::ALL`].
    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == input)
            .ok_or_else(|| UnknownOperation(input.to_string()))
    }
}

/// Invocation point of a handler relative to the wrapped call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Before,
    After,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Before => f.write_str("before"),
            Phase::After => f.write_str("after"),
        }
    }
}
