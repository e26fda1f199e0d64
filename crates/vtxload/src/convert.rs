//! Numeric conversion primitives.
//!
//! Every component in the attribute stream is big endian. Integer components are converted to
//! float and multiplied by a scale, float components are copied bit for bit.

use crate::format::CoordsFormat;

/// A numeric component type of the attribute stream.
pub trait Component: Copy + 'static {
    const FORMAT: CoordsFormat;
    /// Size of the component in the stream, in bytes.
    const SIZE: usize;
    /// Fixed scale applied to normals of this type.
    const NORMAL_SCALE: f32;

    /// Reads a big endian component from the start of `bytes`.
    fn from_be(bytes: &[u8]) -> Self;

    /// Converts the component to float. Floats ignore `scale`.
    fn convert(self, scale: f32) -> f32;
}

impl Component for u8 {
    const FORMAT: CoordsFormat = CoordsFormat::U8;
    const SIZE: usize = 1;
    const NORMAL_SCALE: f32 = 1.0 / 128.0;

    #[inline(always)]
    fn from_be(bytes: &[u8]) -> Self {
        bytes[0]
    }

    #[inline(always)]
    fn convert(self, scale: f32) -> f32 {
        self as f32 * scale
    }
}

impl Component for i8 {
    const FORMAT: CoordsFormat = CoordsFormat::I8;
    const SIZE: usize = 1;
    const NORMAL_SCALE: f32 = 1.0 / 64.0;

    #[inline(always)]
    fn from_be(bytes: &[u8]) -> Self {
        bytes[0] as i8
    }

    #[inline(always)]
    fn convert(self, scale: f32) -> f32 {
        self as f32 * scale
    }
}

impl Component for u16 {
    const FORMAT: CoordsFormat = CoordsFormat::U16;
    const SIZE: usize = 2;
    const NORMAL_SCALE: f32 = 1.0 / 32768.0;

    #[inline(always)]
    fn from_be(bytes: &[u8]) -> Self {
        u16::from_be_bytes([bytes[0], bytes[1]])
    }

    #[inline(always)]
    fn convert(self, scale: f32) -> f32 {
        self as f32 * scale
    }
}

impl Component for i16 {
    const FORMAT: CoordsFormat = CoordsFormat::I16;
    const SIZE: usize = 2;
    const NORMAL_SCALE: f32 = 1.0 / 16384.0;

    #[inline(always)]
    fn from_be(bytes: &[u8]) -> Self {
        i16::from_be_bytes([bytes[0], bytes[1]])
    }

    #[inline(always)]
    fn convert(self, scale: f32) -> f32 {
        self as f32 * scale
    }
}

impl Component for f32 {
    const FORMAT: CoordsFormat = CoordsFormat::F32;
    const SIZE: usize = 4;
    const NORMAL_SCALE: f32 = 1.0;

    #[inline(always)]
    fn from_be(bytes: &[u8]) -> Self {
        f32::from_bits(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    #[inline(always)]
    fn convert(self, _: f32) -> f32 {
        self
    }
}

/// Converts `N` consecutive components at the start of `src`.
#[inline(always)]
pub fn vec<C: Component, const N: usize>(src: &[u8], scale: f32) -> [f32; N] {
    std::array::from_fn(|i| C::from_be(&src[i * C::SIZE..]).convert(scale))
}

/// The scale of a fixed point value with `bits` fractional bits.
pub fn fraction(bits: u8) -> f32 {
    1.0 / (1u64 << bits.min(31)) as f32
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn normal_fixtures() {
        assert_eq!(i8::from_be(&[0x40]).convert(i8::NORMAL_SCALE), 1.0);
        assert_eq!(i8::from_be(&[0xC0]).convert(i8::NORMAL_SCALE), -1.0);
        assert_eq!(u8::from_be(&[0x80]).convert(u8::NORMAL_SCALE), 1.0);
        assert_eq!(u16::from_be(&[0x80, 0x00]).convert(u16::NORMAL_SCALE), 1.0);
        assert_eq!(i16::from_be(&[0x40, 0x00]).convert(i16::NORMAL_SCALE), 1.0);
        assert_eq!(i16::from_be(&[0xE0, 0x00]).convert(i16::NORMAL_SCALE), -0.5);
    }

    #[test]
    fn byte_order() {
        assert_eq!(u16::from_be(&[0x12, 0x34]), 0x1234);
        assert_eq!(i16::from_be(&[0xFF, 0xFE]), -2);
        assert_eq!(f32::from_be(&[0x3F, 0x80, 0x00, 0x00]), 1.0);
        assert_eq!(f32::from_be(&[0xC1, 0x20, 0x00, 0x00]), -10.0);
    }

    #[test]
    fn floats_are_not_scaled() {
        let snan = f32::from_be(&[0x7F, 0x80, 0x00, 0x01]);
        assert_eq!(snan.convert(0.5).to_bits(), 0x7F80_0001);
        assert_eq!(2.0f32.convert(fraction(4)), 2.0);
    }

    #[test]
    fn vectors() {
        let src = [0x00, 0x10, 0xFF, 0xF0, 0x01, 0x00];
        assert_eq!(vec::<i16, 3>(&src, fraction(4)), [1.0, -1.0, 16.0]);
        assert_eq!(vec::<u8, 2>(&src, 1.0), [0.0, 16.0]);
    }

    #[test]
    fn fractions() {
        assert_eq!(fraction(0), 1.0);
        assert_eq!(fraction(8), 1.0 / 256.0);
        assert_eq!(fraction(31), 1.0 / 2147483648.0);
    }
}
