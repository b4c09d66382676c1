use mdfix_util::U8SliceUtils;
use std::cmp;

/// The header occupies everything below this offset and is never summed.
pub const CHECKSUM_START: usize = 0x200;

/// The console only sums the first 4 MiB of cartridge space.
pub const CHECKSUM_LIMIT: usize = 0x40_0000;

pub fn limited_size(padded_size: usize) -> usize {
    cmp::min(padded_size, CHECKSUM_LIMIT)
}

/// Wrapping sum of the big-endian words in `[CHECKSUM_START, limited_size(data.len()))`.
/// A trailing odd byte is ignored.
pub fn calculate(data: &[u8]) -> u16 {
    let end = limited_size(data.len());

    if end <= CHECKSUM_START {
        return 0;
    }

    data[CHECKSUM_START..end]
        .chunks_exact(2)
        .map(|word| word.read_u16())
        .fold(0u16, |sum, word| sum.wrapping_add(word))
}
