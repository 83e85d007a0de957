//! Bit ranges over a machine word, numbered the way the H-800 manuals number them.
//!
//! Bits are addressed 1-based and MSB-first: in a word of `width` bits, bit 1 is
//! the most significant bit and bit `width` the least significant. A range is
//! inclusive on both ends and is read most-significant-bit first, so its value
//! is the plain unsigned integer formed by those bits.

/// Inclusive, 1-based, MSB-first span of bits inside a word of at most 64 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitRange {
    first: u32,
    last: u32,
}

impl BitRange {
    /// Builds the range `first..=last`. Returns `None` unless `1 <= first <= last <= 64`.
    pub const fn new(first: u32, last: u32) -> Option<Self> {
        if first == 0 || first > last || last > 64 {
            return None;
        }

        Some(BitRange { first, last })
    }

    /// Number of the most significant bit of the range.
    pub const fn first(self) -> u32 {
        self.first
    }

    /// Number of the least significant bit of the range.
    pub const fn last(self) -> u32 {
        self.last
    }

    /// Number of bits covered.
    pub const fn len(self) -> u32 {
        self.last - self.first + 1
    }

    /// Largest value the range can hold.
    pub const fn max_value(self) -> u64 {
        low_mask(self.len())
    }

    /// Whether `value` fits in the range without truncation.
    pub const fn fits(self, value: u64) -> bool {
        value <= self.max_value()
    }

    /// Whether the range lies inside a word of `width` bits.
    pub const fn within(self, width: u32) -> bool {
        width <= 64 && self.last <= width
    }

    /// Distance of the range's least significant bit from bit 0 of the integer.
    const fn shift(self, width: u32) -> u32 {
        width - self.last
    }

    /// Reads the range out of a `width`-bit word.
    pub const fn extract(self, word: u64, width: u32) -> u64 {
        debug_assert!(self.within(width));
        (word >> self.shift(width)) & self.max_value()
    }

    /// Returns `word` with the range replaced by `part`. Bits of `part` beyond the
    /// range length are discarded; callers check [BitRange::fits] first.
    pub const fn deposit(self, word: u64, width: u32, part: u64) -> u64 {
        debug_assert!(self.within(width));
        let shift = self.shift(width);
        let mask = self.max_value() << shift;

        (word & !mask) | ((part << shift) & mask)
    }
}

/// Mask with the low `bits` bits set (`bits` in 0..=64).
pub const fn low_mask(bits: u32) -> u64 {
    if bits >= 64 {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_invalid_ranges() {
        assert_eq!(BitRange::new(0, 12), None);
        assert_eq!(BitRange::new(13, 12), None);
        assert_eq!(BitRange::new(1, 65), None);
        assert!(BitRange::new(1, 64).is_some());
        assert!(BitRange::new(7, 7).is_some());
    }

    #[test]
    fn test_len_and_max_value() {
        let range = BitRange::new(13, 24).unwrap();
        assert_eq!(range.len(), 12);
        assert_eq!(range.max_value(), 4095);

        let full = BitRange::new(1, 64).unwrap();
        assert_eq!(full.max_value(), u64::MAX);
    }

    #[test]
    fn test_extract_msb_first() {
        let word = 0b1011_0000u64;
        assert_eq!(BitRange::new(1, 1).unwrap().extract(word, 8), 1);
        assert_eq!(BitRange::new(2, 2).unwrap().extract(word, 8), 0);
        assert_eq!(BitRange::new(1, 4).unwrap().extract(word, 8), 0b1011);
        assert_eq!(BitRange::new(5, 8).unwrap().extract(word, 8), 0);
    }

    #[test]
    fn test_extract_depends_on_width() {
        let word = 0b1011u64;
        assert_eq!(BitRange::new(1, 4).unwrap().extract(word, 4), 0b1011);
        assert_eq!(BitRange::new(1, 4).unwrap().extract(word, 8), 0);
    }

    #[test]
    fn test_deposit_leaves_other_bits() {
        let range = BitRange::new(3, 6).unwrap();
        let word = 0b1100_0011u64;
        assert_eq!(range.deposit(word, 8, 0b1111), 0b1111_1111);
        assert_eq!(range.deposit(0xFF, 8, 0), 0b1100_0011);
    }

    #[test]
    fn test_deposit_discards_overflow() {
        let range = BitRange::new(5, 8).unwrap();
        assert_eq!(range.deposit(0, 8, 0b1_0001), 0b0000_0001);
        assert!(!range.fits(0b1_0001));
        assert!(range.fits(0b1111));
    }

    #[test]
    fn test_non_byte_aligned_word() {
        let range = BitRange::new(37, 48).unwrap();
        let word = range.deposit(0, 48, 4095);
        assert_eq!(word, 4095);
        assert_eq!(range.extract(word, 48), 4095);
        assert_eq!(BitRange::new(1, 12).unwrap().extract(word, 48), 0);
    }

    #[test]
    fn test_low_mask() {
        assert_eq!(low_mask(0), 0);
        assert_eq!(low_mask(12), 0xFFF);
        assert_eq!(low_mask(48), (1 << 48) - 1);
        assert_eq!(low_mask(64), u64::MAX);
    }
}
