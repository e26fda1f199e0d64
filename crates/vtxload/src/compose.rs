//! Composed decoders, built at runtime from a read plan.
//!
//! These execute the same readers as specialized decoders, in the same order, but through a list
//! of function pointers. They are what the dispatch table falls back to when a title has no
//! specialization for a descriptor.

use crate::{
    color,
    cursor::{Cursor, DecodeError},
    plan::{Access, Codec, Numeric, Plan, Step},
    reader,
    tier::{Scalar, Tier, TierLevel},
};

type StepFn = fn(&mut Cursor<'_>) -> Result<(), DecodeError>;

macro_rules! access {
    ($access:expr, |$a:ident| $body:expr) => {
        match $access {
            Access::Direct => {
                type $a = reader::Direct;
                $body
            }
            Access::Index8 => {
                type $a = reader::Index8;
                $body
            }
            Access::Index16 => {
                type $a = reader::Index16;
                $body
            }
        }
    };
}

macro_rules! numeric {
    ($numeric:expr, |$c:ident| $body:expr) => {
        match $numeric {
            Numeric::U8 => {
                type $c = u8;
                $body
            }
            Numeric::I8 => {
                type $c = i8;
                $body
            }
            Numeric::U16 => {
                type $c = u16;
                $body
            }
            Numeric::I16 => {
                type $c = i16;
                $body
            }
            Numeric::F32 => {
                type $c = f32;
                $body
            }
        }
    };
}

macro_rules! codec {
    ($codec:expr, |$f:ident| $body:expr) => {
        match $codec {
            Codec::Rgb565 => {
                type $f = color::Rgb565;
                $body
            }
            Codec::Rgb888 => {
                type $f = color::Rgb888;
                $body
            }
            Codec::Rgb888x => {
                type $f = color::Rgb888x;
                $body
            }
            Codec::Rgba4444 => {
                type $f = color::Rgba4444;
                $body
            }
            Codec::Rgba6666 => {
                type $f = color::Rgba6666;
                $body
            }
            Codec::Rgba8888 => {
                type $f = color::Rgba8888;
                $body
            }
        }
    };
}

/// Resolves a step to its reader for tier `T`.
fn resolve<T: Tier>(step: Step) -> StepFn {
    match step {
        Step::PosMatrix => reader::pos_matrix::<T>,
        Step::TexMatrix => reader::tex_matrix::<T>,
        Step::BoundsPrepare => reader::bounds_prepare::<T>,
        Step::BoundsUpdate => reader::bounds_update::<T>,
        Step::SkipColor => reader::skip_color::<T>,
        Step::TexMatrixOnly => reader::tex_matrix_only::<T>,
        Step::SkipTexCoord => reader::skip_tex_coord::<T>,
        Step::Position {
            access,
            numeric,
            vec3,
        } => access!(access, |A| numeric!(numeric, |C| if vec3 {
            reader::position::<T, A, C, 3> as StepFn
        } else {
            reader::position::<T, A, C, 2>
        })),
        Step::Normal {
            access,
            numeric,
            nbt,
        } => access!(access, |A| numeric!(numeric, |C| if nbt {
            reader::normal::<T, A, C, 3> as StepFn
        } else {
            reader::normal::<T, A, C, 1>
        })),
        Step::NormalIndex3 { access, numeric } => {
            access!(access, |A| numeric!(numeric, |C| reader::normal_index3::<
                T,
                A,
                C,
            > as StepFn))
        }
        Step::Color { access, codec } => {
            access!(access, |A| codec!(codec, |F| reader::color::<T, A, F> as StepFn))
        }
        Step::TexCoord {
            access,
            numeric,
            vec2,
            matrix,
        } => access!(access, |A| numeric!(numeric, |C| match (vec2, matrix) {
            (false, false) => reader::tex_coord::<T, A, C, 1> as StepFn,
            (true, false) => reader::tex_coord::<T, A, C, 2>,
            (false, true) => reader::tex_coord_matrix::<T, A, C, 1>,
            (true, true) => reader::tex_coord_matrix::<T, A, C, 2>,
        })),
    }
}

/// A decoder executing a read plan step by step.
pub(crate) struct ComposedDecoder {
    level: TierLevel,
    steps: Vec<StepFn>,
}

impl ComposedDecoder {
    /// Builds a decoder for `plan` using readers of the given tier, or of the highest supported
    /// tier below it.
    pub fn new(plan: &Plan, level: TierLevel) -> Self {
        let level = level.min(TierLevel::detect());
        let steps = match level {
            #[cfg(target_arch = "x86_64")]
            TierLevel::Sse41 => Self::build::<crate::tier::Sse41>(plan),
            #[cfg(target_arch = "x86_64")]
            TierLevel::Ssse3 => Self::build::<crate::tier::Ssse3>(plan),
            _ => Self::build::<Scalar>(plan),
        };

        Self { level, steps }
    }

    fn build<T: Tier>(plan: &Plan) -> Vec<StepFn> {
        debug_assert!(T::LEVEL.supported());
        plan.steps().iter().copied().map(resolve::<T>).collect()
    }

    pub fn level(&self) -> TierLevel {
        self.level
    }

    pub fn decode(&self, cursor: &mut Cursor<'_>, count: u32) -> Result<(), DecodeError> {
        cursor.run(count, |cursor| {
            for step in &self.steps {
                step(cursor)?;
            }

            Ok(())
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        cursor::{ArrayDescriptor, Arrays, DecodeParams},
        descriptor::test::Registers,
        format::{
            AttributeMode, ColorFormat, ColorKind, CoordsFormat, NormalKind, PositionKind,
            TexCoordsKind,
        },
        layout::VertexLayout,
    };

    fn floats(bytes: &[u8]) -> Vec<f32> {
        bytes
            .chunks_exact(4)
            .map(|c| f32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
            .collect()
    }

    #[test]
    fn decodes_every_attribute() {
        let descriptor = Registers::default()
            .pos_matrix()
            .tex_matrix(1)
            .position(AttributeMode::Direct, PositionKind::Vec2, CoordsFormat::I8, 2)
            .normal(AttributeMode::Index8, NormalKind::N3, CoordsFormat::I16, false)
            .color(0, AttributeMode::Direct, ColorKind::Rgba, ColorFormat::Rgba4444)
            .tex_coord(0, AttributeMode::Direct, TexCoordsKind::Vec2, CoordsFormat::U16, 8)
            .descriptor();

        let plan = Plan::new(&descriptor).unwrap();
        let layout = VertexLayout::from_plan(&plan);

        // normal element 1: (0.5, -0.25, 1.0)
        let normals = [0, 0, 0, 0, 0, 0, 0x20, 0x00, 0xF0, 0x00, 0x40, 0x00];
        let arrays = Arrays {
            normal: ArrayDescriptor::new(&normals, 6),
            ..Default::default()
        };
        let params = DecodeParams::from_fractions(2, [8; 8]);

        #[rustfmt::skip]
        let src = [
            0x45,                   // posmtx 5
            0xC9,                   // texmtx 9 (top bits dropped)
            0x04, 0xF8,             // position (1, -2)
            0x01,                   // normal index
            0x12, 0x34,             // color
            0x01, 0x00, 0x02, 0x80, // tex0 (1, 2.5)
        ];

        assert_eq!(plan.source_size(), src.len());

        let mut dst = vec![0xAA; layout.stride];
        let decoder = ComposedDecoder::new(&plan, TierLevel::Scalar);
        let mut cursor = Cursor::new(&src, &mut dst, &arrays, &params, None, layout.tail);
        decoder.decode(&mut cursor, 1).unwrap();
        assert_eq!(cursor.finish().written, layout.stride);

        let position = layout.position.unwrap();
        assert_eq!(floats(&dst[position..position + 12]), [1.0, -2.0, 0.0]);

        let normal = layout.normal.unwrap();
        assert_eq!(floats(&dst[normal..normal + 12]), [0.5, -0.25, 1.0]);

        let color = layout.color[0].unwrap();
        assert_eq!(dst[color..color + 4], [0x11, 0x22, 0x33, 0x44]);

        let tex0 = layout.tex_coord[0].unwrap();
        assert_eq!(tex0.floats, 2);
        assert_eq!(floats(&dst[tex0.offset..tex0.offset + 8]), [1.0, 2.5]);

        let tex1 = layout.tex_coord[1].unwrap();
        assert_eq!(floats(&dst[tex1.offset..tex1.offset + 12]), [0.0, 0.0, 9.0]);

        assert_eq!(dst[layout.matrices..], [5, 9, 0, 0]);
    }

    #[test]
    fn levels_are_capped_by_detection() {
        let plan = Plan::new(&Registers::default().descriptor()).unwrap();
        let decoder = ComposedDecoder::new(&plan, TierLevel::Sse41);
        assert!(decoder.level().supported());
    }
}
