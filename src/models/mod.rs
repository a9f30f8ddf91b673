pub mod quiz_item;

pub use quiz_item::*;
