mod errors;
mod linked_list;
mod node;

pub use errors::ListError;
pub use linked_list::{Iter, LinkedList};
