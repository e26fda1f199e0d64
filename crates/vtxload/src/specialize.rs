//! Specialized decoders.
//!
//! A specialized decoder is the straight line sequence of reader calls of one descriptor,
//! monomorphized for every tier. They are generated by `vtxgen` into title tables, which the
//! [`specialize!`] macro expands.

use crate::{
    cursor::{Cursor, DecodeError},
    descriptor::FormatDescriptor,
    tier::TierLevel,
};

/// A decoder of `count` vertices.
pub(crate) type DecodeFn = fn(&mut Cursor<'_>, u32) -> Result<(), DecodeError>;

/// The specialized decoders of a single descriptor.
pub(crate) struct Specialization {
    pub words: [u32; 4],
    pub name: &'static str,
    /// Vertices decoded with this descriptor when the title was profiled.
    pub vertices: u64,
    /// The reader calls of the decoder, `;` terminated.
    pub steps: &'static str,
    pub scalar: DecodeFn,
    /// SSSE3 and SSE4.1 decoders, if the target supports them.
    pub tiers: [Option<DecodeFn>; 2],
}

impl Specialization {
    pub fn descriptor(&self) -> FormatDescriptor {
        FormatDescriptor::from_words(self.words)
    }

    /// The decoder of the highest tier not above `level`.
    pub fn select(&self, level: TierLevel) -> (TierLevel, DecodeFn) {
        match (level, self.tiers) {
            (TierLevel::Sse41, [_, Some(decode)]) => (TierLevel::Sse41, decode),
            (TierLevel::Sse41 | TierLevel::Ssse3, [Some(decode), _]) => (TierLevel::Ssse3, decode),
            _ => (TierLevel::Scalar, self.scalar),
        }
    }
}

/// The specialized decoders of a title.
pub struct TitleTable {
    pub(crate) id: &'static str,
    pub(crate) entries: &'static [Specialization],
}

impl TitleTable {
    /// The game id of the title, such as `GZLE01`.
    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The descriptors of this table, along with their profiled vertex counts.
    pub fn descriptors(&self) -> impl Iterator<Item = (FormatDescriptor, u64)> + '_ {
        self.entries.iter().map(|e| (e.descriptor(), e.vertices))
    }
}

impl std::fmt::Debug for TitleTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TitleTable")
            .field("id", &self.id)
            .field("entries", &self.entries.len())
            .finish()
    }
}

/// Expands a title table.
///
/// Every entry is a descriptor name, its words, its profiled vertex count and its reader calls.
/// Each entry becomes a module with a decoder per tier.
macro_rules! specialize {
    (
        $id:literal;
        $(
            $name:ident
            [$w0:literal, $w1:literal, $w2:literal, $w3:literal] $verts:literal {
                $($step:ident $(<$($arg:tt),*>)?;)*
            }
        )*
    ) => {
        $(
            mod $name {
                #[allow(unused_imports)]
                use $crate::{
                    color::{Rgb565, Rgb888, Rgb888x, Rgba4444, Rgba6666, Rgba8888},
                    cursor::{Cursor, DecodeError},
                    reader::*,
                    specialize::DecodeFn,
                    tier::Tier,
                };

                #[inline(always)]
                fn decode<T: Tier>(cursor: &mut Cursor<'_>, count: u32) -> Result<(), DecodeError> {
                    cursor.run(count, |cursor| {
                        $($step::<T $(, $($arg),*)?>(cursor)?;)*
                        Ok(())
                    })
                }

                pub(super) fn scalar(cursor: &mut Cursor<'_>, count: u32) -> Result<(), DecodeError> {
                    decode::<$crate::tier::Scalar>(cursor, count)
                }

                #[cfg(target_arch = "x86_64")]
                fn ssse3(cursor: &mut Cursor<'_>, count: u32) -> Result<(), DecodeError> {
                    #[target_feature(enable = "ssse3")]
                    unsafe fn inner(cursor: &mut Cursor<'_>, count: u32) -> Result<(), DecodeError> {
                        decode::<$crate::tier::Ssse3>(cursor, count)
                    }

                    debug_assert!($crate::tier::TierLevel::Ssse3.supported());
                    // SAFETY: only selected by the dispatch table once SSSE3 has been detected
                    unsafe { inner(cursor, count) }
                }

                #[cfg(target_arch = "x86_64")]
                fn sse41(cursor: &mut Cursor<'_>, count: u32) -> Result<(), DecodeError> {
                    #[target_feature(enable = "ssse3,sse4.1")]
                    unsafe fn inner(cursor: &mut Cursor<'_>, count: u32) -> Result<(), DecodeError> {
                        decode::<$crate::tier::Sse41>(cursor, count)
                    }

                    debug_assert!($crate::tier::TierLevel::Sse41.supported());
                    // SAFETY: only selected by the dispatch table once SSE4.1 has been detected
                    unsafe { inner(cursor, count) }
                }

                #[cfg(target_arch = "x86_64")]
                pub(super) const TIERS: [Option<DecodeFn>; 2] = [Some(ssse3), Some(sse41)];

                #[cfg(not(target_arch = "x86_64"))]
                pub(super) const TIERS: [Option<DecodeFn>; 2] = [None, None];
            }
        )*

        pub(crate) static TABLE: $crate::specialize::TitleTable = $crate::specialize::TitleTable {
            id: $id,
            entries: &[$(
                $crate::specialize::Specialization {
                    words: [$w0, $w1, $w2, $w3],
                    name: stringify!($name),
                    vertices: $verts,
                    steps: concat!($(stringify!($step $(<$($arg),*>)?), ";"),*),
                    scalar: $name::scalar,
                    tiers: $name::TIERS,
                },
            )*],
        };
    };
}

pub(crate) use specialize;

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        compose::ComposedDecoder,
        cursor::{ArrayDescriptor, Arrays, DecodeParams},
        layout::VertexLayout,
        plan::Plan,
        titles,
    };

    fn strip(s: &str) -> String {
        s.chars().filter(|c| !c.is_whitespace()).collect()
    }

    #[test]
    fn tables_match_plans() {
        for table in titles::all() {
            for entry in table.entries {
                let descriptor = entry.descriptor();
                let plan = Plan::new(&descriptor).unwrap();

                assert_eq!(strip(entry.steps), strip(&plan.to_string()), "{}", entry.name);
                assert_eq!(entry.name, descriptor.name().trim_end_matches('_').to_lowercase());
                assert_eq!(descriptor.words(), entry.words);
            }
        }
    }

    #[test]
    fn tables_are_sorted_by_vertex_count() {
        for table in titles::all() {
            assert!(table.entries.is_sorted_by(|a, b| a.vertices >= b.vertices));
        }
    }

    /// A deterministic pseudo random byte sequence.
    fn noise(len: usize, seed: u32) -> Vec<u8> {
        let mut state = seed;
        (0..len)
            .map(|_| {
                state = state.wrapping_mul(1_103_515_245).wrapping_add(12345);
                (state >> 16) as u8
            })
            .collect()
    }

    #[test]
    fn specialized_and_composed_decoders_agree() {
        const COUNT: u32 = 16;

        // stream bytes are masked to 0x3F, so indices stay below 0x4000
        let array = noise(0x4000 * 36, 7);
        let arrays = Arrays {
            position: ArrayDescriptor::new(&array, 36),
            normal: ArrayDescriptor::new(&array, 36),
            color: [ArrayDescriptor::new(&array, 36); 2],
            tex_coord: [ArrayDescriptor::new(&array, 36); 8],
        };
        let params = DecodeParams::from_fractions(5, [7; 8]);

        for table in titles::all() {
            for entry in table.entries {
                let descriptor = entry.descriptor();
                let plan = Plan::new(&descriptor).unwrap();
                let layout = VertexLayout::from_plan(&plan);
                let src: Vec<u8> = noise(plan.source_size() * COUNT as usize, 3)
                    .into_iter()
                    .map(|b| b & 0x3F)
                    .collect();

                let mut levels = vec![TierLevel::Scalar];
                levels.extend(
                    [TierLevel::Ssse3, TierLevel::Sse41]
                        .into_iter()
                        .filter(|l| l.supported()),
                );

                let mut outputs = Vec::new();
                for level in levels {
                    let (_, specialized) = entry.select(level);
                    let mut dst = vec![0; layout.stride * COUNT as usize];
                    let mut cursor = Cursor::new(&src, &mut dst, &arrays, &params, None, layout.tail);
                    specialized(&mut cursor, COUNT).unwrap();
                    assert_eq!(cursor.finish().written, dst.len());
                    outputs.push(dst);

                    let composed = ComposedDecoder::new(&plan, level);
                    let mut dst = vec![0; layout.stride * COUNT as usize];
                    let mut cursor = Cursor::new(&src, &mut dst, &arrays, &params, None, layout.tail);
                    composed.decode(&mut cursor, COUNT).unwrap();
                    outputs.push(dst);
                }

                assert!(outputs.windows(2).all(|w| w[0] == w[1]), "{}", entry.name);
            }
        }
    }

    #[test]
    fn full_range_indices_decode() {
        const COUNT: u32 = 8;

        let array = vec![0x3F; 0x10000 * 36];
        let arrays = Arrays {
            position: ArrayDescriptor::new(&array, 36),
            normal: ArrayDescriptor::new(&array, 36),
            color: [ArrayDescriptor::new(&array, 36); 2],
            tex_coord: [ArrayDescriptor::new(&array, 36); 8],
        };
        let params = DecodeParams::default();

        for table in titles::all() {
            for entry in table.entries {
                let plan = Plan::new(&entry.descriptor()).unwrap();
                let layout = VertexLayout::from_plan(&plan);
                let src = noise(plan.source_size() * COUNT as usize, 11);

                let mut dst = vec![0; layout.stride * COUNT as usize];
                let mut cursor = Cursor::new(&src, &mut dst, &arrays, &params, None, layout.tail);
                (entry.scalar)(&mut cursor, COUNT).unwrap();
            }
        }
    }
}
