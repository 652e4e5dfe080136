//! Error untuk varian fallible-allocation
//!
//! API default tidak pernah mengembalikan error: kehabisan memori
//! langsung abort lewat allocator. Varian `try_*` memakai tipe ini.

use std::collections::TryReserveError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueueError {
    #[error("Allocation failed: {requested} slots")]
    AllocFailed {
        requested: usize,
        #[source]
        source: TryReserveError,
    },
    #[error("Capacity overflow: cannot grow beyond {current} slots")]
    CapacityOverflow { current: usize },
}

pub type QueueResult<T> = Result<T, QueueError>;
