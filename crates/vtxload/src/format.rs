//! Register-level layout of the GX vertex descriptor and vertex attribute tables.
use bitos::{bitos, integer::u5};

#[bitos(2)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AttributeMode {
    /// Not present
    #[default]
    None = 0b00,
    /// Directly in the vertex attribute stream
    Direct = 0b01,
    /// Indirectly through a 8 bit index in the vertex attribute stream
    Index8 = 0b10,
    /// Indirectly through a 16 bit index in the vertex attribute stream
    Index16 = 0b11,
}

impl AttributeMode {
    pub fn present(self) -> bool {
        self != AttributeMode::None
    }

    pub fn indexed(self) -> bool {
        matches!(self, Self::Index8 | Self::Index16)
    }

    /// Size of the index in the attribute stream, if this mode is indexed.
    pub fn index_size(self) -> Option<u32> {
        match self {
            Self::Index8 => Some(1),
            Self::Index16 => Some(2),
            _ => None,
        }
    }
}

/// Describes which attributes are present in the vertices of primitives and how they are present.
///
/// The low word mirrors `VCD_LO`, the high word mirrors `VCD_HI`.
#[bitos(64)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VertexDescriptor {
    /// Whether the position/normal matrix index is present.
    #[bits(0)]
    pub pos_mat_index: bool,
    /// Whether the texture coordinate matrix N index is present.
    #[bits(1..9)]
    pub tex_coord_mat_index: [bool; 8],
    /// Whether the position attribute is present.
    #[bits(9..11)]
    pub position: AttributeMode,
    /// Whether the normal attribute is present.
    #[bits(11..13)]
    pub normal: AttributeMode,
    /// Whether the color N attribute is present.
    #[bits(13..17)]
    pub color: [AttributeMode; 2],
    /// Whether the texture coordinate N attribute is present.
    #[bits(32..48)]
    pub tex_coord: [AttributeMode; 8],
}

impl VertexDescriptor {
    pub fn from_words(low: u32, high: u32) -> Self {
        Self::from_bits(low as u64 | ((high as u64) << 32))
    }

    pub fn low(&self) -> u32 {
        self.to_bits() as u32
    }

    pub fn high(&self) -> u32 {
        (self.to_bits() >> 32) as u32
    }

    pub fn color_mode(&self, slot: usize) -> AttributeMode {
        self.color_at(slot).unwrap_or_default()
    }

    pub fn tex_coord_mode(&self, slot: usize) -> AttributeMode {
        self.tex_coord_at(slot).unwrap_or_default()
    }

    pub fn tex_matrix_present(&self, slot: usize) -> bool {
        self.tex_coord_mat_index_at(slot).unwrap_or_default()
    }

    /// Number of texture matrix indices present in the stream.
    pub fn tex_matrix_count(&self) -> usize {
        (0..8).filter(|&slot| self.tex_matrix_present(slot)).count()
    }
}

#[bitos(1)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PositionKind {
    /// Two components (x, y).
    #[default]
    Vec2 = 0b0,
    /// Three components (x, y, z).
    Vec3 = 0b1,
}

impl PositionKind {
    pub fn components(self) -> u32 {
        match self {
            Self::Vec2 => 2,
            Self::Vec3 => 3,
        }
    }
}

#[bitos(3)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CoordsFormat {
    #[default]
    U8 = 0b000,
    I8 = 0b001,
    U16 = 0b010,
    I16 = 0b011,
    F32 = 0b100,
    Reserved0 = 0b101,
    Reserved1 = 0b110,
    Reserved2 = 0b111,
}

impl CoordsFormat {
    pub fn reserved(self) -> bool {
        matches!(self, Self::Reserved0 | Self::Reserved1 | Self::Reserved2)
    }

    /// Size of a single component, or `None` for reserved formats.
    pub fn size(self) -> Option<u32> {
        match self {
            Self::U8 | Self::I8 => Some(1),
            Self::U16 | Self::I16 => Some(2),
            Self::F32 => Some(4),
            _ => None,
        }
    }
}

#[bitos(9)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PositionAttribute {
    #[bits(0)]
    pub kind: PositionKind,
    #[bits(1..4)]
    pub format: CoordsFormat,
    #[bits(4..9)]
    pub shift: u5,
}

#[bitos(1)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NormalKind {
    /// A single normal.
    #[default]
    N3 = 0b0,
    /// Normal, binormal and tangent.
    N9 = 0b1,
}

impl NormalKind {
    pub fn vectors(self) -> u32 {
        match self {
            Self::N3 => 1,
            Self::N9 => 3,
        }
    }
}

#[bitos(4)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NormalAttribute {
    #[bits(0)]
    pub kind: NormalKind,
    #[bits(1..4)]
    pub format: CoordsFormat,
}

#[bitos(1)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorKind {
    /// Three components (r, g, b).
    #[default]
    Rgb = 0b0,
    /// Four components (r, g, b, a).
    Rgba = 0b1,
}

#[bitos(3)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorFormat {
    #[default]
    Rgb565 = 0b000,
    Rgb888 = 0b001,
    Rgb888x = 0b010,
    Rgba4444 = 0b011,
    Rgba6666 = 0b100,
    Rgba8888 = 0b101,
    Reserved0 = 0b110,
    Reserved1 = 0b111,
}

impl ColorFormat {
    pub fn reserved(self) -> bool {
        matches!(self, Self::Reserved0 | Self::Reserved1)
    }

    pub fn size(self) -> Option<u32> {
        match self {
            Self::Rgb565 | Self::Rgba4444 => Some(2),
            Self::Rgb888 | Self::Rgba6666 => Some(3),
            Self::Rgb888x | Self::Rgba8888 => Some(4),
            _ => None,
        }
    }
}

#[bitos(4)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorAttribute {
    #[bits(0)]
    pub kind: ColorKind,
    #[bits(1..4)]
    pub format: ColorFormat,
}

#[bitos(1)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TexCoordsKind {
    /// One components (s).
    #[default]
    Vec1 = 0b0,
    /// Two components (s, t).
    Vec2 = 0b1,
}

impl TexCoordsKind {
    pub fn components(self) -> u32 {
        match self {
            Self::Vec1 => 1,
            Self::Vec2 => 2,
        }
    }
}

#[bitos(9)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TexCoordsAttribute {
    #[bits(0)]
    pub kind: TexCoordsKind,
    #[bits(1..4)]
    pub format: CoordsFormat,
    #[bits(4..9)]
    pub shift: u5,
}

#[bitos(32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VertexAttributeTableA {
    #[bits(0..9)]
    pub position: PositionAttribute,
    #[bits(9..13)]
    pub normal: NormalAttribute,
    #[bits(13..21)]
    pub color: [ColorAttribute; 2],
    #[bits(21..30)]
    pub tex0: TexCoordsAttribute,
    #[bits(30)]
    pub byte_dequant: bool,
    /// Whether indexed NBT normals use one index per vector.
    #[bits(31)]
    pub normal_index3: bool,
}

#[bitos(32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VertexAttributeTableB {
    #[bits(0..27)]
    pub tex1to3: [TexCoordsAttribute; 3],

    #[bits(27)]
    pub tex4_kind: TexCoordsKind,
    #[bits(28..31)]
    pub tex4_format: CoordsFormat,

    #[bits(31)]
    pub vcache_enhance: bool,
}

#[bitos(32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VertexAttributeTableC {
    #[bits(0..5)]
    pub tex4_shift: u5,
    #[bits(5..32)]
    pub tex5to7: [TexCoordsAttribute; 3],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VertexAttributeTable {
    pub a: VertexAttributeTableA,
    pub b: VertexAttributeTableB,
    pub c: VertexAttributeTableC,
}

impl VertexAttributeTable {
    pub fn from_words(a: u32, b: u32, c: u32) -> Self {
        Self {
            a: VertexAttributeTableA::from_bits(a),
            b: VertexAttributeTableB::from_bits(b),
            c: VertexAttributeTableC::from_bits(c),
        }
    }

    pub fn words(&self) -> [u32; 3] {
        [self.a.to_bits(), self.b.to_bits(), self.c.to_bits()]
    }

    pub fn color(&self, slot: usize) -> ColorAttribute {
        self.a.color_at(slot).unwrap_or_default()
    }

    pub fn tex(&self, index: usize) -> Option<TexCoordsAttribute> {
        Some(match index {
            0 => self.a.tex0(),
            1..4 => self.b.tex1to3_at(index - 1)?,
            4 => TexCoordsAttribute::default()
                .with_kind(self.b.tex4_kind())
                .with_format(self.b.tex4_format())
                .with_shift(self.c.tex4_shift()),
            5..8 => self.c.tex5to7_at(index - 5)?,
            _ => return None,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn tex4_is_split_across_tables() {
        // tex4: Vec2, I16, shift 7
        let vat = VertexAttributeTable::from_words(0, (1 << 27) | (0b011 << 28), 7);
        let tex4 = vat.tex(4).unwrap();

        assert_eq!(tex4.kind(), TexCoordsKind::Vec2);
        assert_eq!(tex4.format(), CoordsFormat::I16);
        assert_eq!(tex4.shift().value(), 7);
        assert!(vat.tex(8).is_none());
    }

    #[test]
    fn descriptor_words() {
        // position indexed u16, color1 direct, tex3 indexed u8
        let vcd = VertexDescriptor::from_words((0b11 << 9) | (0b01 << 15), 0b10 << 6);

        assert_eq!(vcd.position(), AttributeMode::Index16);
        assert_eq!(vcd.color_mode(0), AttributeMode::None);
        assert_eq!(vcd.color_mode(1), AttributeMode::Direct);
        assert_eq!(vcd.tex_coord_mode(3), AttributeMode::Index8);
        assert_eq!(vcd.low(), (0b11 << 9) | (0b01 << 15));
        assert_eq!(vcd.high(), 0b10 << 6);
    }
}
