use super::{Tier, TierLevel};
use crate::{convert::Component, format::CoordsFormat};
use std::arch::x86_64::*;

/// SSSE3 tier. Only instantiated once SSSE3 support has been detected.
pub(crate) struct Ssse3;

/// SSE4.1 tier. Only instantiated once SSE4.1 support has been detected.
pub(crate) struct Sse41;

/// Loads up to 16 bytes of `src` into a zero filled buffer.
#[inline(always)]
fn load(src: &[u8], len: usize) -> [u8; 16] {
    let mut buf = [0; 16];
    let len = len.min(16).min(src.len());
    buf[..len].copy_from_slice(&src[..len]);
    buf
}

/// Byte swaps four 32 bit lanes and reinterprets them as floats.
#[target_feature(enable = "ssse3")]
unsafe fn swap32(src: &[u8], len: usize) -> [f32; 4] {
    let buf = load(src, len);
    let mut out = [0.0f32; 4];

    // SAFETY: buf and out are 16 bytes long, unaligned loads and stores are used
    unsafe {
        let mask = _mm_set_epi8(12, 13, 14, 15, 8, 9, 10, 11, 4, 5, 6, 7, 0, 1, 2, 3);
        let value = _mm_loadu_si128(buf.as_ptr().cast());
        let value = _mm_shuffle_epi8(value, mask);
        _mm_storeu_ps(out.as_mut_ptr(), _mm_castsi128_ps(value));
    }

    out
}

/// Byte swaps four 16 bit lanes, widens them to 32 bits, converts them to float and scales them.
#[target_feature(enable = "sse4.1")]
unsafe fn swap16<const SIGNED: bool>(src: &[u8], len: usize, scale: f32) -> [f32; 4] {
    let buf = load(src, len);
    let mut out = [0.0f32; 4];

    // SAFETY: buf and out are 16 bytes long, unaligned loads and stores are used
    unsafe {
        let mask = _mm_set_epi8(-1, -1, -1, -1, -1, -1, -1, -1, 6, 7, 4, 5, 2, 3, 0, 1);
        let value = _mm_loadu_si128(buf.as_ptr().cast());
        let value = _mm_shuffle_epi8(value, mask);
        let value = if SIGNED {
            _mm_cvtepi16_epi32(value)
        } else {
            _mm_cvtepu16_epi32(value)
        };

        let value = _mm_mul_ps(_mm_cvtepi32_ps(value), _mm_set1_ps(scale));
        _mm_storeu_ps(out.as_mut_ptr(), value);
    }

    out
}

#[inline(always)]
fn lanes<const N: usize>(lanes: [f32; 4]) -> [f32; N] {
    std::array::from_fn(|i| lanes[i])
}

impl Tier for Ssse3 {
    const LEVEL: TierLevel = TierLevel::Ssse3;

    #[inline(always)]
    fn convert<C: Component, const N: usize>(src: &[u8], scale: f32) -> [f32; N] {
        if C::FORMAT == CoordsFormat::F32 && (2..=4).contains(&N) {
            // SAFETY: this tier is only instantiated when SSSE3 is supported
            return lanes(unsafe { swap32(src, N * 4) });
        }

        crate::convert::vec::<C, N>(src, scale)
    }
}

impl Tier for Sse41 {
    const LEVEL: TierLevel = TierLevel::Sse41;

    #[inline(always)]
    fn convert<C: Component, const N: usize>(src: &[u8], scale: f32) -> [f32; N] {
        if (2..=4).contains(&N) {
            // SAFETY: this tier is only instantiated when SSE4.1 (and therefore SSSE3) is
            // supported
            match C::FORMAT {
                CoordsFormat::F32 => return lanes(unsafe { swap32(src, N * 4) }),
                CoordsFormat::I16 => return lanes(unsafe { swap16::<true>(src, N * 2, scale) }),
                CoordsFormat::U16 => return lanes(unsafe { swap16::<false>(src, N * 2, scale) }),
                _ => (),
            }
        }

        crate::convert::vec::<C, N>(src, scale)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        convert::{fraction, vec},
        tier::Scalar,
    };

    fn same<C: Component, const N: usize>(src: &[u8], scale: f32) {
        let expected = Scalar::convert::<C, N>(src, scale).map(f32::to_bits);
        if TierLevel::Ssse3.supported() {
            assert_eq!(Ssse3::convert::<C, N>(src, scale).map(f32::to_bits), expected);
        }
        if TierLevel::Sse41.supported() {
            assert_eq!(Sse41::convert::<C, N>(src, scale).map(f32::to_bits), expected);
        }
    }

    #[test]
    fn every_16_bit_value() {
        for value in 0..=u16::MAX {
            let [hi, lo] = value.to_be_bytes();
            let src = [hi, lo, lo, hi, 0x80, 0x01];
            for bits in [0, 3, 8, 15] {
                same::<i16, 3>(&src, fraction(bits));
                same::<u16, 3>(&src, fraction(bits));
                same::<i16, 2>(&src, fraction(bits));
                same::<u16, 2>(&src, fraction(bits));
            }
        }
    }

    #[test]
    fn floats_keep_their_bits() {
        let patterns: [u32; 8] = [
            0x0000_0000,
            0x8000_0000,
            0x3F80_0000,
            0x7F80_0000,
            0x7F80_0001,
            0xFFC0_1234,
            0x0000_0001,
            0x4049_0FDB,
        ];

        for a in patterns {
            for b in patterns {
                let mut src = [0; 12];
                src[0..4].copy_from_slice(&a.to_be_bytes());
                src[4..8].copy_from_slice(&b.to_be_bytes());
                src[8..12].copy_from_slice(&a.rotate_left(7).to_be_bytes());

                same::<f32, 3>(&src, 0.25);
                same::<f32, 2>(&src, 0.25);
                assert_eq!(vec::<f32, 2>(&src, 0.25)[1].to_bits(), b);
            }
        }
    }

    #[test]
    fn bytes_stay_scalar() {
        let src = [0x7F, 0x80, 0xFF];
        same::<i8, 3>(&src, fraction(6));
        same::<u8, 3>(&src, fraction(7));
        same::<i16, 1>(&src, 1.0);
    }
}
