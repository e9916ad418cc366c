use std::{
    any::Any,
    fmt,
    panic::{AssertUnwindSafe, catch_unwind},
    sync::Arc,
};

use arc_swap::ArcSwap;

use crate::{
    domain::{Operation, Phase},
    hooks::{Call, Outcome},
};

pub type Callback = dyn Fn(&Call<'_>, Option<&Outcome<'_>>) + Send + Sync;

/// A named callback attached to one phase of one operation.
pub struct Handler {
    name: String,
    callback: Arc<Callback>,
}

impl Handler {
    pub fn new<F>(name: impl Into<String>, callback: F) -> Self
    where
        F: Fn(&Call<'_>, Option<&Outcome<'_>>) + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            callback: Arc::new(callback),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn call(&self, call: &Call<'_>, outcome: Option<&Outcome<'_>>) {
        (self.callback)(call, outcome);
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler").field("name", &self.name).finish()
    }
}

/// Ordered handlers for one phase of one operation.
///
/// The list is a copy-on-write snapshot: mutation swaps in a new vector, and
/// an invocation keeps iterating the snapshot it loaded. Registering or
/// unregistering while calls are in flight is safe and takes effect from the
/// next call.
pub struct HandlerList {
    operation: Operation,
    phase: Phase,
    handlers: ArcSwap<Vec<Arc<Handler>>>,
}

impl HandlerList {
    pub fn new(operation: Operation, phase: Phase) -> Self {
        Self {
            operation,
            phase,
            handlers: ArcSwap::from_pointee(Vec::new()),
        }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Append a handler. Names need not be unique.
    pub fn register<F>(&self, name: impl Into<String>, callback: F)
    where
        F: Fn(&Call<'_>, Option<&Outcome<'_>>) + Send + Sync + 'static,
    {
        let handler = Arc::new(Handler::new(name, callback));
        let previous = self.handlers.rcu(|current| {
            let mut next = Vec::with_capacity(current.len() + 1);
            next.extend(current.iter().cloned());
            next.push(handler.clone());
            next
        });

        tracing::debug!(
            operation = %self.operation,
            phase = %self.phase,
            handler = handler.name(),
            len = previous.len() + 1,
            "registered hook handler"
        );
    }

    /// Remove every handler called `name`, keeping the order of the rest.
    ///
    /// Returns how many handlers were removed.
    pub fn unregister(&self, name: &str) -> usize {
        let previous = self.handlers.rcu(|current| {
            current
                .iter()
                .filter(|handler| handler.name() != name)
                .cloned()
                .collect::<Vec<_>>()
        });
        let removed = previous.iter().filter(|h| h.name() == name).count();

        if removed > 0 {
            tracing::debug!(
                operation = %self.operation,
                phase = %self.phase,
                handler = name,
                removed,
                "unregistered hook handler"
            );
        }

        removed
    }

    pub fn clear(&self) {
        self.handlers.store(Arc::new(Vec::new()));
    }

    pub fn len(&self) -> usize {
        self.handlers.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.load().is_empty()
    }

    /// Names of the registered handlers, in invocation order.
    pub fn names(&self) -> Vec<String> {
        self.handlers
            .load()
            .iter()
            .map(|handler| handler.name().to_string())
            .collect()
    }

    /// Run every handler in order. A panicking handler is logged and skipped.
    pub(crate) fn invoke(&self, call: &Call<'_>, outcome: Option<&Outcome<'_>>) {
        let snapshot = self.handlers.load_full();

        for handler in snapshot.iter() {
            if let Err(payload) = catch_unwind(AssertUnwindSafe(|| handler.call(call, outcome))) {
                tracing::error!(
                    operation = %self.operation,
                    phase = %self.phase,
                    handler = handler.name(),
                    panic = panic_message(payload.as_ref()),
                    "hook handler panicked"
                );
            }
        }
    }
}

impl fmt::Debug for HandlerList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerList")
            .field("operation", &self.operation)
            .field("phase", &self.phase)
            .field("handlers", &self.names())
            .finish()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        *message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "non-string panic payload"
    }
}

#[cfg(test)]
mod test {
    use std::sync::Mutex;

    use super::*;

    fn list() -> HandlerList {
        HandlerList::new(Operation::Get, Phase::Before)
    }

    #[test]
    fn register_appends_in_order() {
        let handlers = list();
        handlers.register("first", |_, _| {});
        handlers.register("second", |_, _| {});
        handlers.register("first", |_, _| {});

        assert_eq!(handlers.len(), 3);
        assert_eq!(handlers.names(), ["first", "second", "first"]);
    }

    #[test]
    fn unregister_removes_every_match() {
        let handlers = list();
        handlers.register("a", |_, _| {});
        handlers.register("dup", |_, _| {});
        handlers.register("dup", |_, _| {});
        handlers.register("b", |_, _| {});
        handlers.register("dup", |_, _| {});

        assert_eq!(handlers.unregister("dup"), 3);
        assert_eq!(handlers.names(), ["a", "b"]);
    }

    #[test]
    fn unregister_without_match_is_noop() {
        let handlers = list();
        handlers.register("a", |_, _| {});

        assert_eq!(handlers.unregister("missing"), 0);
        assert_eq!(handlers.names(), ["a"]);
    }

    #[test]
    fn clear_empties_list() {
        let handlers = list();
        handlers.register("a", |_, _| {});
        handlers.clear();

        assert!(handlers.is_empty());
    }

    #[test]
    fn invoke_runs_in_insertion_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let handlers = list();
        for name in ["one", "two", "three"] {
            let seen = seen.clone();
            handlers.register(name, move |_, _| seen.lock().unwrap().push(name));
        }

        handlers.invoke(&Call::Get { key: "k" }, None);

        assert_eq!(*seen.lock().unwrap(), ["one", "two", "three"]);
    }

    #[test]
    fn panicking_handler_does_not_stop_the_rest() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let handlers = list();
        handlers.register("boom", |_, _| panic!("handler failure"));
        {
            let seen = seen.clone();
            handlers.register("after-boom", move |_, _| {
                seen.lock().unwrap().push("after-boom")
            });
        }

        handlers.invoke(&Call::Get { key: "k" }, None);

        assert_eq!(*seen.lock().unwrap(), ["after-boom"]);
        assert_eq!(handlers.len(), 2);
    }

    #[test]
    fn registration_during_invoke_applies_to_next_call() {
        let handlers = Arc::new(list());
        let seen = Arc::new(Mutex::new(Vec::new()));
        {
            let inner = handlers.clone();
            let seen = seen.clone();
            handlers.register("registrar", move |_, _| {
                seen.lock().unwrap().push("registrar");
                let seen = seen.clone();
                inner.register("late", move |_, _| seen.lock().unwrap().push("late"));
            });
        }

        handlers.invoke(&Call::Get { key: "k" }, None);
        assert_eq!(*seen.lock().unwrap(), ["registrar"]);

        handlers.unregister("registrar");
        handlers.invoke(&Call::Get { key: "k" }, None);
        assert_eq!(*seen.lock().unwrap(), ["registrar", "late"]);
    }
}
