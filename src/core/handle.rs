//! Opaque Handle - nilai seukuran pointer yang disimpan oleh queue
//!
//! Queue tidak pernah men-dereference atau menginterpretasi handle.
//! Pemilik referent tetap caller, termasuk kewajiban untuk melepasnya.

use std::fmt;

/// Handle opaque seukuran pointer.
///
/// `Handle::NULL` (nilai `0`) adalah sentinel "tidak ada" milik API
/// berbasis handle ([`RingQueue::pop_or_null`](super::RingQueue::pop_or_null)).
/// Handle null tetap boleh di-push; lihat catatan di method tersebut.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Handle(usize);

impl Handle {
    /// Handle null
    pub const NULL: Handle = Handle(0);

    #[inline(always)]
    pub const fn new(raw: usize) -> Self {
        Self(raw)
    }

    /// Membungkus alamat pointer. Provenance tidak ikut disimpan, jadi
    /// pointer dari [`as_ptr`](Self::as_ptr) hanya valid selama caller
    /// sendiri menjamin referent-nya masih hidup.
    #[inline(always)]
    pub fn from_ptr<P>(ptr: *const P) -> Self {
        Self(ptr as usize)
    }

    #[inline(always)]
    pub const fn get(self) -> usize {
        self.0
    }

    #[inline(always)]
    pub fn as_ptr<P>(self) -> *const P {
        self.0 as *const P
    }

    #[inline(always)]
    pub fn as_mut_ptr<P>(self) -> *mut P {
        self.0 as *mut P
    }

    #[inline(always)]
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl From<usize> for Handle {
    fn from(raw: usize) -> Self {
        Self(raw)
    }
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle({:#x})", self.0)
    }
}
