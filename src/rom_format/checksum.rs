//! Genesis / Mega Drive ROM checksum calculation
//!
//! The checksum is the 16-bit sum of all big-endian words from the end
//! of the header (0x200) to the end of the ROM.

use crate::rom_format::constants::HEADER_SIZE;

/// Calculate the checksum of a linear image
///
/// Returns 0 for images with an odd number of bytes and for images
/// that end inside the header.
pub fn calculate_checksum(data: &[u8]) -> u16 {
    // file must have even number of bytes
    if data.len() % 2 != 0 || data.len() <= HEADER_SIZE {
        return 0;
    }

    data[HEADER_SIZE..]
        .chunks_exact(2)
        .fold(0u16, |sum, word| {
            sum.wrapping_add(u16::from_be_bytes([word[0], word[1]]))
        })
}

#[cfg(test)]
mod tests {
    use super::calculate_checksum;
    use crate::rom_format::constants::HEADER_SIZE;

    #[test]
    fn checksum_of_header_only_is_zero() {
        let data = vec![0xFFu8; HEADER_SIZE];
        assert_eq!(calculate_checksum(&data), 0);
    }

    #[test]
    fn checksum_sums_big_endian_words() {
        let mut data = vec![0u8; HEADER_SIZE + 4];
        data[HEADER_SIZE] = 0x12;
        data[HEADER_SIZE + 1] = 0x34;
        data[HEADER_SIZE + 2] = 0x56;
        data[HEADER_SIZE + 3] = 0x78;

        // 0x1234 + 0x5678
        assert_eq!(calculate_checksum(&data), 0x68AC);
    }

    #[test]
    fn checksum_ignores_header_bytes() {
        let mut data = vec![0xEEu8; HEADER_SIZE + 2];
        data[HEADER_SIZE] = 0x00;
        data[HEADER_SIZE + 1] = 0x01;

        assert_eq!(calculate_checksum(&data), 0x0001);
    }

    #[test]
    fn checksum_wraps_at_16_bits() {
        let data = [vec![0u8; HEADER_SIZE], vec![0xFF, 0xFF, 0x00, 0x02]].concat();

        // 0xFFFF + 0x0002 = 0x10001
        assert_eq!(calculate_checksum(&data), 0x0001);
    }

    #[test]
    fn checksum_of_odd_length_is_zero() {
        let mut data = vec![0x01u8; HEADER_SIZE + 3];
        data[HEADER_SIZE] = 0x10;

        assert_eq!(calculate_checksum(&data), 0);
    }
}
