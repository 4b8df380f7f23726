//! Compile-time generation of the byte tables used by [`crate::lut`].

/// Every byte dilated to 16 bits, then shifted left by `shift`
/// (0 for the `x` axis, 1 for the `y` axis).
pub const fn dilate_table(shift: u32) -> [u16; 256] {
    let mut table = [0; 256];

    let mut byte = 0;
    while byte < 256 {
        table[byte] = dilate_byte(byte as u8) << shift;
        byte += 1;
    }

    table
}

/// Every byte of a code split into its `(x, y)` nibbles.
pub const fn contract_table() -> [(u8, u8); 256] {
    let mut table = [(0, 0); 256];

    let mut byte = 0;
    while byte < 256 {
        table[byte] = split_byte(byte as u8);
        byte += 1;
    }

    table
}

const fn dilate_byte(value: u8) -> u16 {
    let mut spread: u16 = 0;

    let mut bit = 0;
    while bit < u8::BITS {
        spread |= (((value >> bit) & 1) as u16) << (2 * bit);
        bit += 1;
    }

    spread
}

const fn split_byte(value: u8) -> (u8, u8) {
    let mut x = 0;
    let mut y = 0;

    let mut pair = 0;
    while pair < u8::BITS / 2 {
        x |= ((value >> (2 * pair)) & 1) << pair;
        y |= ((value >> (2 * pair + 1)) & 1) << pair;
        pair += 1;
    }

    (x, y)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    pub fn single_bytes() {
        assert_eq!(dilate_byte(0b1111_1111), 0x5555);
        assert_eq!(dilate_byte(0b1000_0001), 0x4001);
        assert_eq!(split_byte(0b1001_0110), (0b0110, 0b1001));
        assert_eq!(split_byte(0xFF), (0xF, 0xF));
    }

    #[test]
    pub fn tables_match_bytes() {
        let x = dilate_table(0);
        let y = dilate_table(1);
        let split = contract_table();

        for byte in 0..=u8::MAX {
            assert_eq!(x[byte as usize], crate::dilate(byte as u16) as u16);
            assert_eq!(y[byte as usize], (crate::dilate(byte as u16) as u16) << 1);

            let (lo, hi) = split[byte as usize];
            assert_eq!(crate::unmorton(byte as u32), (lo as u16, hi as u16));
        }
    }
}
