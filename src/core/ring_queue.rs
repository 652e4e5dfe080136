//! Auto-Growing Ring Queue (single-threaded)
//!
//! Circular buffer dengan kapasitas power of 2 yang tumbuh sendiri saat penuh.
//! Satu slot selalu dikosongkan sebagai sentinel, sehingga `front == back`
//! hanya berarti queue kosong dan kondisi "penuh" tidak pernah terlihat.
//!
//! Elemen disimpan sebagai nilai `Copy` (default: [`Handle`]). Queue tidak
//! memiliki referent handle, jadi relokasi saat grow/shrink cukup berupa
//! memmove slot.

use std::fmt;
use std::mem::MaybeUninit;

use tracing::{debug, trace, warn};

use super::error::{QueueError, QueueResult};
use super::handle::Handle;

/// Jumlah slot minimum yang dialokasikan (termasuk sentinel)
pub const MIN_CAPACITY: usize = 1 << 2;

/// Power of 2 pertama yang >= `num` (minimum [`MIN_CAPACITY`]),
/// atau `None` jika tidak muat di `usize`.
#[inline]
fn next_capacity(num: usize) -> Option<usize> {
    num.max(MIN_CAPACITY).checked_next_power_of_two()
}

/// Jumlah slot untuk reserve `min_reserve` elemen. Jika power of 2 tidak
/// muat, ukuran yang diminta dipakai apa adanya.
#[inline]
fn slots_for_reserve(min_reserve: usize) -> usize {
    let wanted = min_reserve.saturating_add(1);
    next_capacity(wanted).unwrap_or(wanted)
}

/// Queue FIFO yang tumbuh otomatis, backed by power-of-two circular buffer
///
/// - `front`: index elemen tertua
/// - `back`: index satu setelah elemen terbaru
/// - Live region: `front..back` modulo jumlah slot, boleh wrap
///
/// Setelah [`shrink`](Self::shrink) jumlah slot sama dengan `len() + 1`
/// (belum tentu power of 2); grow berikutnya mengembalikannya ke power of 2.
#[derive(Clone)]
pub struct RingQueue<T: Copy = Handle> {
    storage: Vec<MaybeUninit<T>>,
    front: usize,
    back: usize,
}

impl<T: Copy> Default for RingQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy> RingQueue<T> {
    /// Membuat queue kosong dengan kapasitas minimum (3 elemen usable)
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Membuat queue yang bisa menampung minimal `min_reserve` elemen
    /// sebelum grow pertama.
    ///
    /// Kehabisan memori meng-abort proses; gunakan
    /// [`try_with_capacity`](Self::try_with_capacity) jika perlu ditangani.
    pub fn with_capacity(min_reserve: usize) -> Self {
        let slots = slots_for_reserve(min_reserve);
        let mut storage = Vec::with_capacity(slots);
        storage.resize(slots, MaybeUninit::uninit());

        debug!("Created ring queue: reserve={}, slots={}", min_reserve, slots);

        Self {
            storage,
            front: 0,
            back: 0,
        }
    }

    /// Seperti [`with_capacity`](Self::with_capacity), tapi kegagalan alokasi
    /// dikembalikan sebagai error.
    pub fn try_with_capacity(min_reserve: usize) -> QueueResult<Self> {
        let slots = slots_for_reserve(min_reserve);
        let mut storage: Vec<MaybeUninit<T>> = Vec::new();
        if let Err(source) = storage.try_reserve_exact(slots) {
            warn!("Ring queue allocation failed: slots={}", slots);
            return Err(QueueError::AllocFailed {
                requested: slots,
                source,
            });
        }
        storage.resize(slots, MaybeUninit::uninit());

        debug!("Created ring queue: reserve={}, slots={}", min_reserve, slots);

        Ok(Self {
            storage,
            front: 0,
            back: 0,
        })
    }

    /// Jumlah slot yang dialokasikan, termasuk sentinel
    #[inline(always)]
    fn slots(&self) -> usize {
        self.storage.len()
    }

    /// Push elemen ke back. Grow otomatis jika slot sentinel terpakai.
    #[inline]
    pub fn push(&mut self, value: T) {
        // Slot `back` selalu bebas (sentinel), aman ditulis sebelum grow
        self.storage[self.back] = MaybeUninit::new(value);

        let advanced = self.back + 1;
        if advanced % self.slots() == self.front {
            let old_slots = self.slots();
            let new_slots = old_slots
                .checked_add(1)
                .and_then(next_capacity)
                .unwrap_or(old_slots + 1);
            self.grow_to(new_slots, advanced);
        }

        self.back = advanced % self.slots();
    }

    /// Seperti [`push`](Self::push), tapi kegagalan alokasi saat grow
    /// dikembalikan sebagai error dan queue tidak berubah.
    pub fn try_push(&mut self, value: T) -> QueueResult<()> {
        let old_slots = self.slots();
        if (self.back + 1) % old_slots == self.front {
            let new_slots = old_slots
                .checked_add(1)
                .and_then(next_capacity)
                .ok_or(QueueError::CapacityOverflow { current: old_slots })?;

            if let Err(source) = self.storage.try_reserve_exact(new_slots - old_slots) {
                warn!(
                    "Ring queue grow failed: slots {} -> {}",
                    old_slots, new_slots
                );
                return Err(QueueError::AllocFailed {
                    requested: new_slots,
                    source,
                });
            }
        }

        // Grow di dalam push tidak realokasi lagi karena sudah di-reserve
        self.push(value);
        Ok(())
    }

    /// Memperbesar storage ke `new_slots`, mempertahankan urutan logis.
    ///
    /// `advanced` adalah nilai `back + 1` (belum di-modulo) yang memicu grow.
    fn grow_to(&mut self, new_slots: usize, advanced: usize) {
        let old_slots = self.slots();
        self.storage.resize(new_slots, MaybeUninit::uninit());

        // Tidak wrap (front == 0): slot baru otomatis jadi free space.
        // Wrap: tail segment [front, old_slots) dipindah ke ujung storage baru.
        if advanced == self.front {
            let tail_len = old_slots - self.front;
            let new_front = new_slots - tail_len;
            self.storage.copy_within(self.front..old_slots, new_front);
            self.front = new_front;
        }

        trace!(
            "Grew ring queue: slots {} -> {}, front={}, back={}",
            old_slots,
            new_slots,
            self.front,
            advanced % new_slots
        );
    }

    /// Pop elemen tertua, atau `None` jika queue kosong.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let value = self.slot(self.front);
        self.front = (self.front + 1) % self.slots();
        Some(value)
    }

    /// Akses elemen berdasarkan offset logis dari front.
    ///
    /// Index negatif dihitung dari back: `-1` adalah elemen terbaru.
    /// Mengembalikan `None` jika di luar `[0, len)`.
    #[inline]
    pub fn peek(&self, index: isize) -> Option<T> {
        let len = self.len();
        let offset = if index < 0 {
            len.checked_sub(index.unsigned_abs())?
        } else {
            index as usize
        };

        if offset >= len {
            return None;
        }
        Some(self.slot((self.front + offset) % self.slots()))
    }

    /// Elemen tertua tanpa menghapusnya
    #[inline]
    pub fn front(&self) -> Option<T> {
        self.peek(0)
    }

    /// Elemen terbaru tanpa menghapusnya
    #[inline]
    pub fn back(&self) -> Option<T> {
        self.peek(-1)
    }

    #[inline(always)]
    fn slot(&self, index: usize) -> T {
        // SAFETY: Caller hanya membaca index di dalam live region, dan setiap
        // slot live sudah ditulis oleh push (relokasi hanya memindah slot live).
        unsafe { self.storage[index].assume_init() }
    }

    /// Cek apakah queue kosong
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.front == self.back
    }

    /// Jumlah elemen dalam queue
    #[inline(always)]
    pub fn len(&self) -> usize {
        if self.back >= self.front {
            self.back - self.front
        } else {
            self.back + self.slots() - self.front
        }
    }

    /// Kapasitas usable (slot sentinel tidak dihitung)
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.slots() - 1
    }

    /// Menghapus semua elemen, alokasi tetap dipertahankan
    pub fn clear(&mut self) {
        self.front = 0;
        self.back = 0;
    }

    /// Melepas semua kapasitas yang tidak terpakai.
    ///
    /// Setelah shrink, jumlah slot tepat `len() + 1`: hanya sentinel yang
    /// tersisa sebagai headroom. Urutan logis tidak berubah. Idempotent.
    pub fn shrink(&mut self) {
        let old_slots = self.slots();
        let new_slots = self.compact();

        self.storage.truncate(new_slots);
        self.storage.shrink_to_fit();

        trace!(
            "Shrank ring queue: slots {} -> {}, front={}, back={}",
            old_slots,
            new_slots,
            self.front,
            self.back
        );
    }

    /// Seperti [`shrink`](Self::shrink), tapi kegagalan alokasi buffer baru
    /// dikembalikan sebagai error dan queue tidak berubah.
    pub fn try_shrink(&mut self) -> QueueResult<()> {
        let old_slots = self.slots();
        let new_slots = self.len() + 1;

        let mut fresh: Vec<MaybeUninit<T>> = Vec::new();
        if let Err(source) = fresh.try_reserve_exact(new_slots) {
            warn!(
                "Ring queue shrink failed: slots {} -> {}",
                old_slots, new_slots
            );
            return Err(QueueError::AllocFailed {
                requested: new_slots,
                source,
            });
        }

        let compacted = self.compact();
        debug_assert_eq!(compacted, new_slots);
        fresh.extend_from_slice(&self.storage[..new_slots]);
        self.storage = fresh;

        trace!(
            "Shrank ring queue: slots {} -> {}, front={}, back={}",
            old_slots,
            new_slots,
            self.front,
            self.back
        );
        Ok(())
    }

    /// Memadatkan live region ke awal storage (in-place, overlap-safe).
    ///
    /// Returns jumlah slot minimum (`len() + 1`) untuk layout hasil compact;
    /// slot setelahnya boleh dibuang.
    fn compact(&mut self) -> usize {
        if self.front <= self.back {
            // Tidak wrap: geser live region ke offset 0
            let len = self.back - self.front;
            self.storage.copy_within(self.front..self.back, 0);
            self.front = 0;
            self.back = len;
            len + 1
        } else {
            // Wrap: head [0, back) tetap, tail ditempel tepat setelah sentinel
            let old_slots = self.slots();
            let tail_len = old_slots - self.front;
            self.storage.copy_within(self.front..old_slots, self.back + 1);
            self.front = self.back + 1;
            self.front + tail_len
        }
    }
}

impl RingQueue<Handle> {
    /// Pop dengan kontrak handle: [`Handle::NULL`] jika kosong.
    ///
    /// Handle null yang pernah di-push juga dikembalikan sebagai
    /// `Handle::NULL`, sehingga tidak bisa dibedakan dari queue kosong.
    /// Gunakan [`pop`](Self::pop) jika queue bisa berisi handle null.
    #[inline]
    pub fn pop_or_null(&mut self) -> Handle {
        self.pop().unwrap_or(Handle::NULL)
    }

    /// Peek dengan kontrak handle: [`Handle::NULL`] jika di luar range.
    ///
    /// Ambiguitas yang sama dengan [`pop_or_null`](Self::pop_or_null)
    /// berlaku untuk handle null yang tersimpan.
    #[inline]
    pub fn peek_or_null(&self, index: isize) -> Handle {
        self.peek(index).unwrap_or(Handle::NULL)
    }
}

impl<T: Copy> Extend<T> for RingQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T: Copy> FromIterator<T> for RingQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut queue = Self::with_capacity(iter.size_hint().0);
        queue.extend(iter);
        queue
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for RingQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Live<'a, T: Copy>(&'a RingQueue<T>);

        impl<T: Copy + fmt::Debug> fmt::Debug for Live<'_, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let queue = self.0;
                let live = (0..queue.len()).map(|i| queue.slot((queue.front + i) % queue.slots()));
                f.debug_list().entries(live).finish()
            }
        }

        f.debug_struct("RingQueue")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .field("items", &Live(self))
            .finish()
    }
}
