//! Packed color conversions.
//!
//! Every color is expanded to 8 bits per channel and stored as `[r, g, b, a]`.

/// A packed color encoding.
pub(crate) trait ColorCodec: 'static {
    /// Size of a color in the stream, in bytes.
    const SIZE: usize;

    fn decode(src: &[u8]) -> [u8; 4];
}

#[inline(always)]
fn expand4(x: u8) -> u8 {
    (x << 4) | x
}

#[inline(always)]
fn expand5(x: u8) -> u8 {
    (x << 3) | (x >> 2)
}

#[inline(always)]
fn expand6(x: u8) -> u8 {
    (x << 2) | (x >> 4)
}

pub(crate) struct Rgb565;

impl ColorCodec for Rgb565 {
    const SIZE: usize = 2;

    #[inline(always)]
    fn decode(src: &[u8]) -> [u8; 4] {
        let value = u16::from_be_bytes([src[0], src[1]]);
        [
            expand5((value >> 11) as u8),
            expand6(((value >> 5) & 0x3F) as u8),
            expand5((value & 0x1F) as u8),
            0xFF,
        ]
    }
}

pub(crate) struct Rgb888;

impl ColorCodec for Rgb888 {
    const SIZE: usize = 3;

    #[inline(always)]
    fn decode(src: &[u8]) -> [u8; 4] {
        [src[0], src[1], src[2], 0xFF]
    }
}

/// 888 padded to 32 bits. Also used for 8888 colors declared as RGB, whose alpha is dropped.
pub(crate) struct Rgb888x;

impl ColorCodec for Rgb888x {
    const SIZE: usize = 4;

    #[inline(always)]
    fn decode(src: &[u8]) -> [u8; 4] {
        [src[0], src[1], src[2], 0xFF]
    }
}

pub(crate) struct Rgba4444;

impl ColorCodec for Rgba4444 {
    const SIZE: usize = 2;

    #[inline(always)]
    fn decode(src: &[u8]) -> [u8; 4] {
        [
            expand4(src[0] >> 4),
            expand4(src[0] & 0xF),
            expand4(src[1] >> 4),
            expand4(src[1] & 0xF),
        ]
    }
}

pub(crate) struct Rgba6666;

impl ColorCodec for Rgba6666 {
    const SIZE: usize = 3;

    #[inline(always)]
    fn decode(src: &[u8]) -> [u8; 4] {
        let value = u32::from_be_bytes([0, src[0], src[1], src[2]]);
        [
            expand6((value >> 18) as u8 & 0x3F),
            expand6((value >> 12) as u8 & 0x3F),
            expand6((value >> 6) as u8 & 0x3F),
            expand6(value as u8 & 0x3F),
        ]
    }
}

pub(crate) struct Rgba8888;

impl ColorCodec for Rgba8888 {
    const SIZE: usize = 4;

    #[inline(always)]
    fn decode(src: &[u8]) -> [u8; 4] {
        [src[0], src[1], src[2], src[3]]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rgb565() {
        assert_eq!(Rgb565::decode(&[0xF8, 0x00]), [0xFF, 0x00, 0x00, 0xFF]);
        assert_eq!(Rgb565::decode(&[0x07, 0xE0]), [0x00, 0xFF, 0x00, 0xFF]);
        assert_eq!(Rgb565::decode(&[0x00, 0x1F]), [0x00, 0x00, 0xFF, 0xFF]);
        // r = 0b10000, g = 0b100000, b = 0b00001
        assert_eq!(Rgb565::decode(&[0x84, 0x01]), [0x84, 0x82, 0x08, 0xFF]);
    }

    #[test]
    fn rgba4444() {
        assert_eq!(Rgba4444::decode(&[0x12, 0x3F]), [0x11, 0x22, 0x33, 0xFF]);
        assert_eq!(Rgba4444::decode(&[0xF0, 0x0A]), [0xFF, 0x00, 0x00, 0xAA]);
    }

    #[test]
    fn rgba6666() {
        // r = 63, g = 0, b = 32, a = 1
        let value: u32 = (63 << 18) | (32 << 6) | 1;
        let [_, a, b, c] = value.to_be_bytes();
        assert_eq!(Rgba6666::decode(&[a, b, c]), [0xFF, 0x00, 0x82, 0x04]);
    }

    #[test]
    fn eight_bit_formats() {
        let src = [0x10, 0x20, 0x30, 0x40];
        assert_eq!(Rgb888::decode(&src), [0x10, 0x20, 0x30, 0xFF]);
        assert_eq!(Rgb888x::decode(&src), [0x10, 0x20, 0x30, 0xFF]);
        assert_eq!(Rgba8888::decode(&src), [0x10, 0x20, 0x30, 0x40]);
    }
}
