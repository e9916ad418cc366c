use crate::{
    domain::Operation,
    hooks::{Call, HookRegistry, Outcome},
};

pub const TRACING_HANDLER: &str = "tracing";

/// Log the listed operations through `tracing` once they complete.
///
/// Item values are never logged, only keys and metadata.
pub fn install_tracing(registry: &HookRegistry, operations: &[Operation]) {
    for op in operations {
        registry
            .operation(*op)
            .after()
            .register(TRACING_HANDLER, log_call);
    }
}

/// Remove the tracing handler from every operation.
pub fn uninstall_tracing(registry: &HookRegistry) -> usize {
    registry
        .iter()
        .map(|hooks| hooks.after().unregister(TRACING_HANDLER))
        .sum()
}

fn log_call(call: &Call<'_>, outcome: Option<&Outcome<'_>>) {
    let operation = call.operation();
    let args = describe(call);

    match outcome.and_then(Outcome::error) {
        None => tracing::debug!(%operation, %args, "cache call succeeded"),
        Some(e) if e.is_cache_miss() => tracing::debug!(%operation, %args, "cache miss"),
        Some(e) => tracing::warn!(%operation, %args, error = %e, "cache call failed"),
    }
}

fn describe(call: &Call<'_>) -> String {
    match call {
        Call::FlushAll | Call::DeleteAll | Call::Ping => String::new(),
        Call::Get { key } | Call::Delete { key } => format!("key={key}"),
        Call::Touch { key, seconds } => format!("key={key} seconds={seconds}"),
        Call::GetMulti { keys } => format!("keys={}", keys.join(",")),
        Call::Set { item }
        | Call::Add { item }
        | Call::Replace { item }
        | Call::CompareAndSwap { item } => format!(
            "key={} flags={} expiration={} bytes={}",
            item.key,
            item.flags,
            item.expiration,
            item.value.len()
        ),
        Call::Increment { key, delta } | Call::Decrement { key, delta } => {
            format!("key={key} delta={delta}")
        }
    }
}
