use crate::table_gen;

static DILATE_X: [u16; 256] = table_gen::dilate_table(0);
static DILATE_Y: [u16; 256] = table_gen::dilate_table(1);

static CONTRACT: [(u8, u8); 256] = table_gen::contract_table();

/// Table-driven [`crate::morton`]; produces identical codes.
pub fn morton_lut(x: u16, y: u16) -> u32 {
    let [x_lo, x_hi] = x.to_le_bytes();
    let [y_lo, y_hi] = y.to_le_bytes();

    let low = DILATE_X[x_lo as usize] | DILATE_Y[y_lo as usize];
    let high = DILATE_X[x_hi as usize] | DILATE_Y[y_hi as usize];

    low as u32 | (high as u32) << 16
}

/// Table-driven [`crate::unmorton`].
pub fn unmorton_lut(code: u32) -> (u16, u16) {
    let mut x = 0;
    let mut y = 0;

    for (i, byte) in code.to_le_bytes().into_iter().enumerate() {
        let (nx, ny) = CONTRACT[byte as usize];

        x |= (nx as u16) << (4 * i);
        y |= (ny as u16) << (4 * i);
    }

    (x, y)
}
