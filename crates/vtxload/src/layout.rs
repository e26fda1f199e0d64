//! Canonical host vertex layout.

use crate::{
    descriptor::{DescriptorError, FormatDescriptor},
    plan::{Plan, Step},
};

/// Location of a texture coordinate slot in the host vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TexCoordLayout {
    pub offset: usize,
    /// Number of floats written: 1 or 2, or 3 when the matrix index is passed along.
    pub floats: usize,
}

/// Byte offsets of every output of a decoded vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VertexLayout {
    /// Size of a decoded vertex.
    pub stride: usize,
    pub position: Option<usize>,
    pub normal: Option<usize>,
    /// Number of normal vectors, 1 or 3 (normal, binormal and tangent).
    pub normal_vectors: usize,
    pub color: [Option<usize>; 2],
    pub tex_coord: [Option<TexCoordLayout>; 8],
    /// Offset of the matrix index tail.
    pub matrices: usize,
    /// Size of the matrix index tail.
    pub tail: usize,
}

impl VertexLayout {
    pub fn new(descriptor: &FormatDescriptor) -> Result<Self, DescriptorError> {
        Ok(Self::from_plan(&Plan::new(descriptor)?))
    }

    pub fn from_plan(plan: &Plan) -> Self {
        let mut layout = Self::default();
        let mut offset = 0;
        let mut color = 0;
        let mut tex = 0;

        for step in plan.steps() {
            match *step {
                Step::Position { .. } => layout.position = Some(offset),
                Step::Normal { nbt, .. } => {
                    layout.normal = Some(offset);
                    layout.normal_vectors = if nbt { 3 } else { 1 };
                }
                Step::NormalIndex3 { .. } => {
                    layout.normal = Some(offset);
                    layout.normal_vectors = 3;
                }
                Step::Color { .. } => {
                    if let Some(slot) = layout.color.get_mut(color) {
                        *slot = Some(offset);
                    }
                    color += 1;
                }
                Step::SkipColor => color += 1,
                Step::TexCoord { .. } | Step::TexMatrixOnly => {
                    if let Some(slot) = layout.tex_coord.get_mut(tex) {
                        *slot = Some(TexCoordLayout {
                            offset,
                            floats: step.output_size() / 4,
                        });
                    }
                    tex += 1;
                }
                Step::SkipTexCoord => tex += 1,
                _ => (),
            }

            offset += step.output_size();
        }

        layout.matrices = offset;
        layout.tail = tail_size(plan.tex_matrices());
        layout.stride = offset + layout.tail;
        layout
    }
}

/// Size of the matrix index tail: the position matrix byte and one byte per texture matrix,
/// padded to a multiple of 4.
pub fn tail_size(tex_matrices: usize) -> usize {
    (1 + tex_matrices.min(8)).next_multiple_of(4)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        descriptor::test::Registers,
        format::{
            AttributeMode, ColorFormat, ColorKind, CoordsFormat, NormalKind, PositionKind,
            TexCoordsKind,
        },
    };

    #[test]
    fn tail_sizes() {
        assert_eq!(tail_size(0), 4);
        assert_eq!(tail_size(3), 4);
        assert_eq!(tail_size(4), 8);
        assert_eq!(tail_size(8), 12);
    }

    #[test]
    fn offsets() {
        let descriptor = Registers::default()
            .tex_matrix(0)
            .tex_matrix(3)
            .position(AttributeMode::Direct, PositionKind::Vec2, CoordsFormat::I16, 0)
            .normal(AttributeMode::Index8, NormalKind::N9, CoordsFormat::I8, true)
            .color(1, AttributeMode::Direct, ColorKind::Rgb, ColorFormat::Rgb565)
            .tex_coord(0, AttributeMode::Direct, TexCoordsKind::Vec1, CoordsFormat::U8, 0)
            .tex_coord(1, AttributeMode::Direct, TexCoordsKind::Vec1, CoordsFormat::U8, 0)
            .descriptor();

        let layout = VertexLayout::new(&descriptor).unwrap();
        assert_eq!(layout.position, Some(0));
        assert_eq!(layout.normal, Some(12));
        assert_eq!(layout.normal_vectors, 3);
        assert_eq!(layout.color, [None, Some(48)]);
        assert_eq!(
            layout.tex_coord[0],
            Some(TexCoordLayout {
                offset: 52,
                floats: 3
            })
        );
        assert_eq!(
            layout.tex_coord[1],
            Some(TexCoordLayout {
                offset: 64,
                floats: 1
            })
        );
        assert_eq!(layout.tex_coord[2], None);
        assert_eq!(
            layout.tex_coord[3],
            Some(TexCoordLayout {
                offset: 68,
                floats: 3
            })
        );
        assert_eq!(layout.matrices, 80);
        assert_eq!(layout.tail, 4);
        assert_eq!(layout.stride, 84);
    }
}
