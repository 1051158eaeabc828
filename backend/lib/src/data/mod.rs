//! Data module for the Seufz backend

pub mod counter;
pub mod storage;

pub use counter::Counter;
