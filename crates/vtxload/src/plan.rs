//! Read plans: the ordered list of reader steps a descriptor decodes with.
//!
//! The plan is the single source of truth of the per vertex read sequence. Composed decoders
//! execute it through function pointers, the generator emits it as straight line code for
//! specialized decoders and the host layout is derived from it.

use crate::{
    descriptor::{DescriptorError, FormatDescriptor},
    format::{
        AttributeMode, ColorFormat, ColorKind, CoordsFormat, NormalKind, PositionKind, TexCoordsKind,
    },
};
use seq_macro::seq;
use std::fmt::{self, Display};

/// How an attribute is addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access {
    Direct,
    Index8,
    Index16,
}

impl Access {
    fn new(mode: AttributeMode) -> Option<Self> {
        match mode {
            AttributeMode::None => None,
            AttributeMode::Direct => Some(Self::Direct),
            AttributeMode::Index8 => Some(Self::Index8),
            AttributeMode::Index16 => Some(Self::Index16),
        }
    }

    /// Bytes this access consumes from the stream for an attribute of `size` bytes.
    fn stream_size(self, size: usize) -> usize {
        match self {
            Self::Direct => size,
            Self::Index8 => 1,
            Self::Index16 => 2,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Direct => "Direct",
            Self::Index8 => "Index8",
            Self::Index16 => "Index16",
        }
    }
}

/// A numeric component type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Numeric {
    U8,
    I8,
    U16,
    I16,
    F32,
}

impl Numeric {
    fn new(format: CoordsFormat) -> Option<Self> {
        Some(match format {
            CoordsFormat::U8 => Self::U8,
            CoordsFormat::I8 => Self::I8,
            CoordsFormat::U16 => Self::U16,
            CoordsFormat::I16 => Self::I16,
            CoordsFormat::F32 => Self::F32,
            _ => return None,
        })
    }

    pub fn size(self) -> usize {
        match self {
            Self::U8 | Self::I8 => 1,
            Self::U16 | Self::I16 => 2,
            Self::F32 => 4,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::I8 => "i8",
            Self::U16 => "u16",
            Self::I16 => "i16",
            Self::F32 => "f32",
        }
    }
}

/// A packed color codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Codec {
    Rgb565,
    Rgb888,
    Rgb888x,
    Rgba4444,
    Rgba6666,
    Rgba8888,
}

impl Codec {
    fn new(kind: ColorKind, format: ColorFormat) -> Option<Self> {
        Some(match (format, kind) {
            (ColorFormat::Rgb565, _) => Self::Rgb565,
            (ColorFormat::Rgb888, _) => Self::Rgb888,
            (ColorFormat::Rgb888x, _) | (ColorFormat::Rgba8888, ColorKind::Rgb) => Self::Rgb888x,
            (ColorFormat::Rgba4444, _) => Self::Rgba4444,
            (ColorFormat::Rgba6666, _) => Self::Rgba6666,
            (ColorFormat::Rgba8888, ColorKind::Rgba) => Self::Rgba8888,
            _ => return None,
        })
    }

    pub fn size(self) -> usize {
        match self {
            Self::Rgb565 | Self::Rgba4444 => 2,
            Self::Rgb888 | Self::Rgba6666 => 3,
            Self::Rgb888x | Self::Rgba8888 => 4,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Rgb565 => "Rgb565",
            Self::Rgb888 => "Rgb888",
            Self::Rgb888x => "Rgb888x",
            Self::Rgba4444 => "Rgba4444",
            Self::Rgba6666 => "Rgba6666",
            Self::Rgba8888 => "Rgba8888",
        }
    }
}

/// A single reader step of a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    PosMatrix,
    TexMatrix,
    BoundsPrepare,
    Position {
        access: Access,
        numeric: Numeric,
        vec3: bool,
    },
    BoundsUpdate,
    Normal {
        access: Access,
        numeric: Numeric,
        nbt: bool,
    },
    NormalIndex3 {
        access: Access,
        numeric: Numeric,
    },
    Color {
        access: Access,
        codec: Codec,
    },
    SkipColor,
    TexCoord {
        access: Access,
        numeric: Numeric,
        vec2: bool,
        matrix: bool,
    },
    TexMatrixOnly,
    SkipTexCoord,
}

impl Step {
    /// Bytes this step consumes from the attribute stream.
    pub fn source_size(&self) -> usize {
        match *self {
            Self::PosMatrix | Self::TexMatrix => 1,
            Self::Position {
                access,
                numeric,
                vec3,
            } => access.stream_size(numeric.size() * if vec3 { 3 } else { 2 }),
            Self::Normal {
                access,
                numeric,
                nbt,
            } => access.stream_size(numeric.size() * if nbt { 9 } else { 3 }),
            Self::NormalIndex3 { access, numeric } => 3 * access.stream_size(numeric.size() * 3),
            Self::Color { access, codec } => access.stream_size(codec.size()),
            Self::TexCoord {
                access,
                numeric,
                vec2,
                ..
            } => access.stream_size(numeric.size() * if vec2 { 2 } else { 1 }),
            Self::BoundsPrepare
            | Self::BoundsUpdate
            | Self::SkipColor
            | Self::TexMatrixOnly
            | Self::SkipTexCoord => 0,
        }
    }

    /// Bytes this step writes to the destination.
    pub fn output_size(&self) -> usize {
        match *self {
            Self::Position { .. } => 12,
            Self::Normal { nbt, .. } => 12 * if nbt { 3 } else { 1 },
            Self::NormalIndex3 { .. } => 36,
            Self::Color { .. } => 4,
            Self::TexCoord { matrix: true, .. } | Self::TexMatrixOnly => 12,
            Self::TexCoord { vec2, .. } => 4 * if vec2 { 2 } else { 1 },
            Self::PosMatrix
            | Self::TexMatrix
            | Self::BoundsPrepare
            | Self::BoundsUpdate
            | Self::SkipColor
            | Self::SkipTexCoord => 0,
        }
    }
}

/// Formats the step as the reader call a specialized decoder makes, without the tier parameter.
impl Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::PosMatrix => write!(f, "pos_matrix"),
            Self::TexMatrix => write!(f, "tex_matrix"),
            Self::BoundsPrepare => write!(f, "bounds_prepare"),
            Self::BoundsUpdate => write!(f, "bounds_update"),
            Self::SkipColor => write!(f, "skip_color"),
            Self::TexMatrixOnly => write!(f, "tex_matrix_only"),
            Self::SkipTexCoord => write!(f, "skip_tex_coord"),
            Self::Position {
                access,
                numeric,
                vec3,
            } => write!(
                f,
                "position<{}, {}, {}>",
                access.name(),
                numeric.name(),
                if vec3 { 3 } else { 2 }
            ),
            Self::Normal {
                access,
                numeric,
                nbt,
            } => write!(
                f,
                "normal<{}, {}, {}>",
                access.name(),
                numeric.name(),
                if nbt { 3 } else { 1 }
            ),
            Self::NormalIndex3 { access, numeric } => {
                write!(f, "normal_index3<{}, {}>", access.name(), numeric.name())
            }
            Self::Color { access, codec } => {
                write!(f, "color<{}, {}>", access.name(), codec.name())
            }
            Self::TexCoord {
                access,
                numeric,
                vec2,
                matrix,
            } => write!(
                f,
                "{}<{}, {}, {}>",
                if matrix { "tex_coord_matrix" } else { "tex_coord" },
                access.name(),
                numeric.name(),
                if vec2 { 2 } else { 1 }
            ),
        }
    }
}

/// The read plan of a descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    steps: Vec<Step>,
}

impl Plan {
    /// Builds the plan of a descriptor, rejecting descriptors that use reserved formats.
    pub fn new(descriptor: &FormatDescriptor) -> Result<Self, DescriptorError> {
        descriptor.validate()?;

        let vcd = descriptor.vcd();
        let vat = descriptor.vat();
        let mut steps = Vec::with_capacity(16);

        if vcd.pos_mat_index() {
            steps.push(Step::PosMatrix);
        }

        seq! {
            N in 0..8 {
                if vcd.tex_matrix_present(N) {
                    steps.push(Step::TexMatrix);
                }
            }
        }

        let position = vat.a.position();
        if let Some(access) = Access::new(vcd.position())
            && let Some(numeric) = Numeric::new(position.format())
        {
            steps.push(Step::BoundsPrepare);
            steps.push(Step::Position {
                access,
                numeric,
                vec3: position.kind() == PositionKind::Vec3,
            });
            steps.push(Step::BoundsUpdate);
        }

        let normal = vat.a.normal();
        if let Some(access) = Access::new(vcd.normal())
            && let Some(numeric) = Numeric::new(normal.format())
        {
            let nbt = normal.kind() == NormalKind::N9;
            steps.push(if nbt && descriptor.normal_index3() {
                Step::NormalIndex3 { access, numeric }
            } else {
                Step::Normal {
                    access,
                    numeric,
                    nbt,
                }
            });
        }

        let last_color = (0..2).rev().find(|&s| vcd.color_mode(s).present());
        for slot in 0..=last_color.unwrap_or(0) {
            let attr = vat.color(slot);
            match Access::new(vcd.color_mode(slot)) {
                Some(access) => {
                    if let Some(codec) = Codec::new(attr.kind(), attr.format()) {
                        steps.push(Step::Color { access, codec });
                    }
                }
                None if last_color.is_some() => steps.push(Step::SkipColor),
                None => (),
            }
        }

        let present =
            |slot: usize| vcd.tex_coord_mode(slot).present() || vcd.tex_matrix_present(slot);
        if let Some(last) = (0..8).rev().find(|&s| present(s)) {
            for slot in 0..=last {
                let matrix = vcd.tex_matrix_present(slot);
                let attr = vat.tex(slot).unwrap_or_default();
                let access = Access::new(vcd.tex_coord_mode(slot));
                let numeric = Numeric::new(attr.format());

                steps.push(match (access, numeric) {
                    (Some(access), Some(numeric)) => Step::TexCoord {
                        access,
                        numeric,
                        vec2: attr.kind() == TexCoordsKind::Vec2,
                        matrix,
                    },
                    _ if matrix => Step::TexMatrixOnly,
                    _ => Step::SkipTexCoord,
                });
            }
        }

        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Size of a vertex in the attribute stream.
    pub fn source_size(&self) -> usize {
        self.steps.iter().map(Step::source_size).sum()
    }

    /// Number of texture matrix indices read per vertex.
    pub fn tex_matrices(&self) -> usize {
        self.steps.iter().filter(|s| **s == Step::TexMatrix).count()
    }
}

/// Formats the plan as `;` separated reader calls.
impl Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            write!(f, "{step};")?;
        }

        Ok(())
    }
}

impl FormatDescriptor {
    /// Size of a vertex of this format in the attribute stream.
    pub fn vertex_size(&self) -> Result<usize, DescriptorError> {
        Plan::new(self).map(|plan| plan.source_size())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::descriptor::test::Registers;

    #[test]
    fn read_order() {
        let descriptor = Registers::default()
            .pos_matrix()
            .tex_matrix(1)
            .position(AttributeMode::Index16, PositionKind::Vec3, CoordsFormat::F32, 0)
            .normal(AttributeMode::Direct, NormalKind::N3, CoordsFormat::I8, false)
            .color(1, AttributeMode::Direct, ColorKind::Rgba, ColorFormat::Rgba8888)
            .tex_coord(2, AttributeMode::Index8, TexCoordsKind::Vec2, CoordsFormat::I16, 7)
            .descriptor();

        let plan = Plan::new(&descriptor).unwrap();
        assert_eq!(
            plan.to_string(),
            "pos_matrix;tex_matrix;bounds_prepare;position<Index16, f32, 3>;bounds_update;\
             normal<Direct, i8, 1>;skip_color;color<Direct, Rgba8888>;skip_tex_coord;\
             tex_matrix_only;tex_coord<Index8, i16, 2>;"
        );

        // posmtx + texmtx + position index + normal + color + tex index
        assert_eq!(plan.source_size(), 1 + 1 + 2 + 3 + 4 + 1);
        assert_eq!(descriptor.vertex_size().unwrap(), 12);
        assert_eq!(plan.tex_matrices(), 1);
    }

    #[test]
    fn normal_variants() {
        let base = Registers::default().position(
            AttributeMode::Direct,
            PositionKind::Vec2,
            CoordsFormat::U8,
            0,
        );

        let nbt = base.normal(AttributeMode::Index16, NormalKind::N9, CoordsFormat::I16, false);
        let plan = Plan::new(&nbt.descriptor()).unwrap();
        assert_eq!(plan.steps()[3].to_string(), "normal<Index16, i16, 3>");
        assert_eq!(plan.source_size(), 2 + 2);

        let nbt3 = base.normal(AttributeMode::Index16, NormalKind::N9, CoordsFormat::I16, true);
        let plan = Plan::new(&nbt3.descriptor()).unwrap();
        assert_eq!(plan.steps()[3].to_string(), "normal_index3<Index16, i16>");
        assert_eq!(plan.source_size(), 2 + 6);

        let direct = base.normal(AttributeMode::Direct, NormalKind::N9, CoordsFormat::F32, true);
        let plan = Plan::new(&direct.descriptor()).unwrap();
        assert_eq!(plan.steps()[3].to_string(), "normal<Direct, f32, 3>");
        assert_eq!(plan.source_size(), 2 + 36);
    }

    #[test]
    fn rgb_8888_drops_alpha() {
        let descriptor = Registers::default()
            .color(0, AttributeMode::Index8, ColorKind::Rgb, ColorFormat::Rgba8888)
            .descriptor();

        let plan = Plan::new(&descriptor).unwrap();
        assert_eq!(plan.to_string(), "color<Index8, Rgb888x>;");
    }

    #[test]
    fn absent_position_reads_nothing() {
        let plan = Plan::new(&Registers::default().descriptor()).unwrap();
        assert!(plan.steps().is_empty());
        assert_eq!(plan.source_size(), 0);
    }

    #[test]
    fn reserved_formats_have_no_plan() {
        let descriptor = Registers::default()
            .position(AttributeMode::Direct, PositionKind::Vec3, CoordsFormat::Reserved2, 0)
            .descriptor();

        assert!(Plan::new(&descriptor).is_err());
        assert!(descriptor.vertex_size().is_err());
    }
}
