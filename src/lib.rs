pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod hooked;
pub mod hooks;
pub mod observers;

pub use client::CacheClient;
pub use domain::{Item, Operation, Phase};
pub use error::CacheError;
pub use hooked::HookedClient;
pub use hooks::{Call, Handler, HandlerList, HookRegistry, OperationHooks, Outcome};
