//! ringq - Auto-Growing Ring Queue of Opaque Handles
//!
//! Arsitektur:
//! - Power-of-two circular buffer dengan satu sentinel slot
//! - Grow in-place yang mempertahankan urutan dan kontinuitas wrap
//! - Shrink-to-fit yang me-relinearize buffer
//! - Abort-on-exhaustion, dengan varian `try_*` untuk alokasi fallible
//!
//! ```
//! use ringq::core::RingQueue;
//!
//! let mut queue: RingQueue<u32> = RingQueue::new();
//! queue.push(1);
//! queue.push(2);
//!
//! assert_eq!(queue.peek(-1), Some(2));
//! assert_eq!(queue.pop(), Some(1));
//! assert_eq!(queue.len(), 1);
//! ```

pub mod core;

pub use crate::core::{Handle, QueueError, QueueResult, RingQueue};
