//! JSON output writing

pub mod writer;

pub use writer::write_array;
