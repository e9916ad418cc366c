mod item;
mod operation;

pub use item::Item;
pub use operation::{Operation, Phase, UnknownOperation};
