//! Match-finder constants, fixed-width loads, the fingerprint hash, and
//! hash-table slot types shared by every level.
//!
//! All positions handed to the loads are block-relative byte offsets. The
//! encoders keep an [`INPUT_MARGIN`]-byte tail out of the search loop so that
//! every `load32`/`load64` they issue stays inside the block.

// ─────────────────────────────────────────────────────────────────────────────
// Table sizing
// ─────────────────────────────────────────────────────────────────────────────

/// Bits used to index the hash table.
pub const TABLE_BITS: u32 = 14;
/// Number of slots in every level's hash table.
pub const TABLE_SIZE: usize = 1 << TABLE_BITS;
/// Mask for table indices.  Redundant after the shift, kept so indexing never
/// depends on the hash being well-formed.
pub const TABLE_MASK: usize = TABLE_SIZE - 1;
/// Right-shift that keeps the `TABLE_BITS` most significant bits of a `u32`.
pub const TABLE_SHIFT: u32 = 32 - TABLE_BITS;

// ─────────────────────────────────────────────────────────────────────────────
// Format limits (owned by the surrounding DEFLATE encoder)
// ─────────────────────────────────────────────────────────────────────────────

/// Smallest match offset.
pub const BASE_MATCH_OFFSET: usize = 1;
/// Smallest match length (RFC 1951 §3.2.5).
pub const BASE_MATCH_LENGTH: usize = 3;
/// Largest match length.
pub const MAX_MATCH_LENGTH: usize = 258;
/// Largest match offset.
pub const MAX_MATCH_OFFSET: usize = 1 << 15;
/// Largest block an encoder accepts, and the cursor advance for skipped blocks.
pub const MAX_STORE_BLOCK_SIZE: usize = 65_535;

/// Bytes at the end of a block that the search loop never probes.
pub const INPUT_MARGIN: usize = 16 - 1;
/// Blocks shorter than this are not searched at all.
pub const MIN_NON_LITERAL_BLOCK_SIZE: usize = 1 + 1 + INPUT_MARGIN;

/// The virtual cursor is folded back to 1 once it passes this value.
pub const CURSOR_LIMIT: i32 = 1 << 30;

/// Multiplier of the fingerprint hash.
const HASH_MUL: u32 = 0x1e35_a7bd;

// ─────────────────────────────────────────────────────────────────────────────
// Loads
// ─────────────────────────────────────────────────────────────────────────────

/// Read 4 bytes at `i` as a little-endian `u32`.
#[inline(always)]
pub fn load32(b: &[u8], i: usize) -> u32 {
    debug_assert!(i + 4 <= b.len(), "load32 past end: {} + 4 > {}", i, b.len());
    u32::from_le_bytes([b[i], b[i + 1], b[i + 2], b[i + 3]])
}

/// Read 8 bytes at `i` as a little-endian `u64`.
#[inline(always)]
pub fn load64(b: &[u8], i: usize) -> u64 {
    debug_assert!(i + 8 <= b.len(), "load64 past end: {} + 8 > {}", i, b.len());
    u64::from_le_bytes([
        b[i],
        b[i + 1],
        b[i + 2],
        b[i + 3],
        b[i + 4],
        b[i + 5],
        b[i + 6],
        b[i + 7],
    ])
}

// ─────────────────────────────────────────────────────────────────────────────
// Hashing and extension
// ─────────────────────────────────────────────────────────────────────────────

/// Multiplicative hash of a 4-byte fingerprint down to `TABLE_BITS` bits.
#[inline(always)]
pub fn hash(fingerprint: u32) -> u32 {
    fingerprint.wrapping_mul(HASH_MUL) >> TABLE_SHIFT
}

/// Table slot for a hash value.
#[inline(always)]
pub(crate) fn slot(h: u32) -> usize {
    h as usize & TABLE_MASK
}

/// Number of equal leading bytes of `a` and `b`.
///
/// Bounded by the shorter slice; callers pass a pre-trimmed `a` to cap the
/// match length.
#[inline]
pub fn match_len(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

// ─────────────────────────────────────────────────────────────────────────────
// Table slots
// ─────────────────────────────────────────────────────────────────────────────

/// One remembered occurrence: its fingerprint and virtual position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TableEntry {
    pub val: u32,
    pub offset: i32,
}

/// Two-deep slot: the most recent insertion and the one before it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TableEntryPrev {
    pub cur: TableEntry,
    pub prev: TableEntry,
}

impl TableEntryPrev {
    /// Insert `entry`, demoting the current entry and dropping the previous one.
    #[inline(always)]
    pub fn push(&mut self, entry: TableEntry) {
        self.prev = self.cur;
        self.cur = entry;
    }
}
