//! SIMD capability tiers.
//!
//! Decoders are generic over a [`Tier`], which selects the conversion routines they are built
//! from. The SIMD tiers only exist on x86_64 and are only ever instantiated by the dispatch table
//! after [`TierLevel::detect`] reported them as supported.

#[cfg(target_arch = "x86_64")]
mod x86;

use crate::convert::{self, Component};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use strum::{Display, VariantArray};

/// A level of CPU vector instruction support.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Display,
    VariantArray,
    Serialize,
    Deserialize,
)]
pub enum TierLevel {
    /// Plain scalar code.
    #[default]
    Scalar,
    /// SSSE3: byte shuffles for float vectors.
    Ssse3,
    /// SSE4.1: widening conversions for 16 bit vectors.
    Sse41,
}

impl TierLevel {
    /// The highest tier supported by the running CPU. Detected once per process.
    pub fn detect() -> Self {
        static DETECTED: OnceLock<TierLevel> = OnceLock::new();
        *DETECTED.get_or_init(|| {
            let level = Self::query();
            tracing::debug!("detected simd tier {level}");
            level
        })
    }

    #[cfg(target_arch = "x86_64")]
    fn query() -> Self {
        if is_x86_feature_detected!("sse4.1") && is_x86_feature_detected!("ssse3") {
            Self::Sse41
        } else if is_x86_feature_detected!("ssse3") {
            Self::Ssse3
        } else {
            Self::Scalar
        }
    }

    #[cfg(not(target_arch = "x86_64"))]
    fn query() -> Self {
        Self::Scalar
    }

    /// Whether decoders of this tier can run on this CPU.
    pub fn supported(self) -> bool {
        self <= Self::detect()
    }
}

/// A SIMD tier decoders can be instantiated with.
pub(crate) trait Tier: 'static {
    const LEVEL: TierLevel;

    /// Converts `N` consecutive big endian components at the start of `src`.
    #[inline(always)]
    fn convert<C: Component, const N: usize>(src: &[u8], scale: f32) -> [f32; N] {
        convert::vec::<C, N>(src, scale)
    }
}

pub(crate) struct Scalar;

impl Tier for Scalar {
    const LEVEL: TierLevel = TierLevel::Scalar;
}

#[cfg(target_arch = "x86_64")]
pub(crate) use x86::{Sse41, Ssse3};

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn levels_are_ordered() {
        assert!(TierLevel::Scalar < TierLevel::Ssse3);
        assert!(TierLevel::Ssse3 < TierLevel::Sse41);
        assert!(TierLevel::Scalar.supported());
        assert_eq!(TierLevel::VARIANTS.len(), 3);
    }

    #[test]
    fn detection_is_stable() {
        assert_eq!(TierLevel::detect(), TierLevel::detect());
    }
}
