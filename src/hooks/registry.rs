use crate::{
    domain::{Operation, Phase},
    hooks::HandlerList,
};

/// The `before` and `after` handler lists of a single operation.
#[derive(Debug)]
pub struct OperationHooks {
    operation: Operation,
    before: HandlerList,
    after: HandlerList,
}

impl OperationHooks {
    pub fn new(operation: Operation) -> Self {
        Self {
            operation,
            before: HandlerList::new(operation, Phase::Before),
            after: HandlerList::new(operation, Phase::After),
        }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Handlers run with the call arguments before the wrapped client is called.
    pub fn before(&self) -> &HandlerList {
        &self.before
    }

    /// Handlers run with the call arguments and its result after the wrapped
    /// client returned.
    pub fn after(&self) -> &HandlerList {
        &self.after
    }

    pub fn phase(&self, phase: Phase) -> &HandlerList {
        match phase {
            Phase::Before => &self.before,
            Phase::After => &self.after,
        }
    }
}

/// Hook points for every cache operation, allocated up front.
#[derive(Debug)]
pub struct HookRegistry {
    hooks: [OperationHooks; Operation::COUNT],
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl HookRegistry {
    pub fn new() -> Self {
        Self {
            hooks: Operation::ALL.map(OperationHooks::new),
        }
    }

    pub fn operation(&self, operation: Operation) -> &OperationHooks {
        &self.hooks[operation.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &OperationHooks> {
        self.hooks.iter()
    }

    /// Drop every registered handler of every operation.
    pub fn clear(&self) {
        for hooks in &self.hooks {
            hooks.before.clear();
            hooks.after.clear();
        }
    }

    pub fn flush_all(&self) -> &OperationHooks {
        self.operation(Operation::FlushAll)
    }

    pub fn get(&self) -> &OperationHooks {
        self.operation(Operation::Get)
    }

    pub fn touch(&self) -> &OperationHooks {
        self.operation(Operation::Touch)
    }

    pub fn get_multi(&self) -> &OperationHooks {
        self.operation(Operation::GetMulti)
    }

    pub fn set(&self) -> &OperationHooks {
        self.operation(Operation::Set)
    }

    pub fn add(&self) -> &OperationHooks {
        self.operation(Operation::Add)
    }

    pub fn replace(&self) -> &OperationHooks {
        self.operation(Operation::Replace)
    }

    pub fn compare_and_swap(&self) -> &OperationHooks {
        self.operation(Operation::CompareAndSwap)
    }

    pub fn delete(&self) -> &OperationHooks {
        self.operation(Operation::Delete)
    }

    pub fn delete_all(&self) -> &OperationHooks {
        self.operation(Operation::DeleteAll)
    }

    pub fn ping(&self) -> &OperationHooks {
        self.operation(Operation::Ping)
    }

    pub fn increment(&self) -> &OperationHooks {
        self.operation(Operation::Increment)
    }

    pub fn decrement(&self) -> &OperationHooks {
        self.operation(Operation::Decrement)
    }
}
