//! Core module: Auto-Growing Ring Queue
//!
//! Prinsip desain:
//! - Power-of-two: Kapasitas selalu 2^k, minimum 4 slot
//! - Sentinel slot: Satu slot selalu kosong, jadi `front == back` berarti kosong
//! - Abort-on-exhaustion: Push/grow/shrink tidak pernah mengembalikan error

mod error;
mod handle;
mod ring_queue;

pub use error::{QueueError, QueueResult};
pub use handle::Handle;
pub use ring_queue::{RingQueue, MIN_CAPACITY};
