/// Constant-intensity image.
pub fn uniform_u8(width: usize, height: usize, value: u8) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    vec![value; width * height]
}

/// Vertical step softened by one intermediate column: 0 left of `split_x`,
/// 128 at `split_x`, 255 right of it.
pub fn soft_vertical_step_u8(width: usize, height: usize, split_x: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(split_x < width, "split column must be inside the image");

    let mut img = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            img[y * width + x] = match x.cmp(&split_x) {
                std::cmp::Ordering::Less => 0,
                std::cmp::Ordering::Equal => 128,
                std::cmp::Ordering::Greater => 255,
            };
        }
    }
    img
}

/// Abrupt vertical step: 0 left of `split_x`, 255 from it on.
pub fn hard_vertical_step_u8(width: usize, height: usize, split_x: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(split_x < width, "split column must be inside the image");

    let mut img = vec![0u8; width * height];
    for y in 0..height {
        for x in split_x..width {
            img[y * width + x] = 255;
        }
    }
    img
}

/// Deterministic xorshift texture, for set-relation properties that hold on
/// any input.
pub fn textured_u8(width: usize, height: usize, seed: u32) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    let mut state = seed.max(1);
    let mut img = vec![0u8; width * height];
    for px in img.iter_mut() {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        *px = (state >> 24) as u8;
    }
    img
}
