pub mod counters;
pub mod page;

pub use counters::*;
pub use page::*;
