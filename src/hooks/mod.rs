mod event;
mod handler;
mod registry;

pub(crate) use event::AsOutcome;
pub use event::{Call, Outcome};
pub use handler::{Callback, Handler, HandlerList};
pub use registry::{HookRegistry, OperationHooks};
