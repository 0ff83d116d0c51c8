//! Record implementations

pub mod memory;

pub use memory::MemoryRecord;

pub use crate::core::{FieldValue, LookupFailure, RecordLike};
