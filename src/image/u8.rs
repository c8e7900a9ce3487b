//! Borrowed single-channel 8-bit grayscale view over caller-owned data.
#[derive(Clone, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    /// Wrap a caller-owned buffer, checking it covers the declared geometry.
    pub fn new(w: usize, h: usize, stride: usize, data: &'a [u8]) -> Self {
        assert!(stride >= w, "stride {stride} must cover row width {w}");
        assert!(
            h == 0 || data.len() >= stride * (h - 1) + w,
            "buffer of {} bytes too small for {w}x{h} with stride {stride}",
            data.len()
        );
        Self { w, h, stride, data }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.stride + x]
    }
}

impl<'a> crate::image::traits::ImageView for ImageU8<'a> {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}
