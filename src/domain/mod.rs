pub mod book;
pub mod circulation;
pub mod commands;
pub mod errors;
pub mod events;
pub mod inventory;
pub mod member;
pub mod value_objects;

pub use book::Book;
pub use errors::*;
pub use events::*;
pub use inventory::Inventory;
pub use member::Member;
pub use value_objects::*;
