/// Generates an RGBA frame filled with a single color.
pub fn uniform_rgba(width: u32, height: u32, color: [u8; 4]) -> Vec<u8> {
    assert!(width > 0 && height > 0, "frame dimensions must be positive");

    let pixels = width as usize * height as usize;
    let mut buf = Vec::with_capacity(pixels * 4);
    for _ in 0..pixels {
        buf.extend_from_slice(&color);
    }
    buf
}

/// Generates a simple high-contrast checkerboard RGBA frame.
pub fn checkerboard_rgba(width: u32, height: u32, cell: u32) -> Vec<u8> {
    assert!(width > 0 && height > 0, "frame dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut buf = Vec::with_capacity(width as usize * height as usize * 4);
    for y in 0..height {
        for x in 0..width {
            let sum = x / cell + y / cell;
            let val = if sum & 1 == 0 { 0u8 } else { 255u8 };
            buf.extend_from_slice(&[val, val, val, 255]);
        }
    }
    buf
}
