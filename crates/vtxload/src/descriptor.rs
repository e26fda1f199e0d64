//! Canonical format descriptors.
//!
//! A [`FormatDescriptor`] is the register state that fully determines how a vertex is laid out in
//! the attribute stream, with every bit that does not affect the layout cleared.

use crate::format::{
    AttributeMode, ColorFormat, CoordsFormat, NormalKind, VertexAttributeTable, VertexDescriptor,
};
use bitut::BitUtils;
use easyerr::Error;
use std::fmt::Write;

/// Identifies one attribute slot of a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeSlot {
    Position,
    Normal,
    Color(u8),
    TexCoord(u8),
}

#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("{f0:?} uses reserved coordinate format {f1:?}")]
    ReservedCoordsFormat(AttributeSlot, CoordsFormat),
    #[error("{f0:?} uses reserved color format {f1:?}")]
    ReservedColorFormat(AttributeSlot, ColorFormat),
}

const VCD_LOW_MASK: u32 = 0x0001_FFFF;
const VCD_HIGH_MASK: u32 = 0x0000_FFFF;

// kind and format bits of each attribute, fractions excluded
const VAT_A_POSITION: u32 = 0x0000_000F;
const VAT_A_NORMAL: u32 = 0x0000_1E00;
const VAT_A_COLOR: [u32; 2] = [0x0001_E000, 0x001E_0000];
const VAT_A_NORMAL_INDEX3: u32 = 0x8000_0000;
const VAT_TEX: [(usize, u32); 8] = [
    (0, 0x01E0_0000),
    (1, 0x0000_000F),
    (1, 0x0000_1E00),
    (1, 0x003C_0000),
    (1, 0x7800_0000),
    (2, 0x0000_01E0),
    (2, 0x0003_C000),
    (2, 0x0780_0000),
];

const POS_MATRIX_FLAG: u32 = 1 << 31;

/// A canonical vertex format descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormatDescriptor {
    vcd: VertexDescriptor,
    vat: VertexAttributeTable,
}

impl FormatDescriptor {
    /// Builds a canonical descriptor from raw register state.
    pub fn new(vcd: &VertexDescriptor, vat: &VertexAttributeTable) -> Self {
        let vcd = VertexDescriptor::from_words(vcd.low() & VCD_LOW_MASK, vcd.high() & VCD_HIGH_MASK);

        let mut words = [0u32; 3];
        let raw = vat.words();
        let mut keep = |word: usize, mask: u32| words[word] |= raw[word] & mask;

        if vcd.position().present() {
            keep(0, VAT_A_POSITION);
        }

        if vcd.normal().present() {
            keep(0, VAT_A_NORMAL);
            if vcd.normal().indexed() && vat.a.normal().kind() == NormalKind::N9 {
                keep(0, VAT_A_NORMAL_INDEX3);
            }
        }

        for (slot, mask) in VAT_A_COLOR.into_iter().enumerate() {
            if vcd.color_mode(slot).present() {
                keep(0, mask);
            }
        }

        for (slot, (word, mask)) in VAT_TEX.into_iter().enumerate() {
            if vcd.tex_coord_mode(slot).present() {
                keep(word, mask);
            }
        }

        Self {
            vcd,
            vat: VertexAttributeTable::from_words(words[0], words[1], words[2]),
        }
    }

    /// Rebuilds a descriptor from its [`words`](Self::words).
    pub fn from_words(words: [u32; 4]) -> Self {
        let [packed, a, b, c] = words;
        let low = ((packed << 1) & VCD_LOW_MASK) | (b >> 31);
        let high = (packed >> 16) & VCD_HIGH_MASK;

        Self::new(
            &VertexDescriptor::from_words(low, high),
            &VertexAttributeTable::from_words(a, b & !POS_MATRIX_FLAG, c),
        )
    }

    pub fn vcd(&self) -> &VertexDescriptor {
        &self.vcd
    }

    pub fn vat(&self) -> &VertexAttributeTable {
        &self.vat
    }

    /// The four word identifier of this descriptor.
    ///
    /// The first word is the packed descriptor (texture coordinate modes right after the color
    /// modes) without the position matrix bit, which is moved to the top bit of the third word.
    pub fn words(&self) -> [u32; 4] {
        let packed = ((self.vcd.low() as u64) | ((self.vcd.high() as u64) << 17)) >> 1;
        let [a, b, c] = self.vat.words();
        let b = b.with_bit(31, self.vcd.pos_mat_index());

        [packed as u32, a, b, c]
    }

    /// A 64 bit digest of the [`words`](Self::words) of this descriptor.
    ///
    /// Only the canonical fields take part, so keys differ from digests of raw register words.
    pub fn key(&self) -> u64 {
        self.words()
            .into_iter()
            .fold(u64::MAX, |h, w| h.wrapping_mul(137).wrapping_add(w as u64))
    }

    /// Checks that every present attribute uses a defined format.
    pub fn validate(&self) -> Result<(), DescriptorError> {
        let coords = |slot, format: CoordsFormat| {
            if format.reserved() {
                Err(DescriptorError::ReservedCoordsFormat(slot, format))
            } else {
                Ok(())
            }
        };

        if self.vcd.position().present() {
            coords(AttributeSlot::Position, self.vat.a.position().format())?;
        }

        if self.vcd.normal().present() {
            coords(AttributeSlot::Normal, self.vat.a.normal().format())?;
        }

        for slot in 0..2 {
            let format = self.vat.color(slot).format();
            if self.vcd.color_mode(slot).present() && format.reserved() {
                return Err(DescriptorError::ReservedColorFormat(
                    AttributeSlot::Color(slot as u8),
                    format,
                ));
            }
        }

        for slot in 0..8 {
            if self.vcd.tex_coord_mode(slot).present() {
                let format = self.vat.tex(slot).unwrap_or_default().format();
                coords(AttributeSlot::TexCoord(slot as u8), format)?;
            }
        }

        Ok(())
    }

    /// Whether NBT normals are read through three separate indices.
    pub fn normal_index3(&self) -> bool {
        self.vat.a.normal_index3()
    }

    /// A human readable name of this descriptor, such as `P_mtx0_3_I16_flt_C0_1_Dir_8888_`.
    pub fn name(&self) -> String {
        fn mode(mode: AttributeMode) -> &'static str {
            match mode {
                AttributeMode::None => "Inv",
                AttributeMode::Direct => "Dir",
                AttributeMode::Index8 => "I8",
                AttributeMode::Index16 => "I16",
            }
        }

        fn coords(format: CoordsFormat) -> &'static str {
            match format {
                CoordsFormat::U8 => "u8",
                CoordsFormat::I8 => "s8",
                CoordsFormat::U16 => "u16",
                CoordsFormat::I16 => "s16",
                CoordsFormat::F32 => "flt",
                _ => "Inv",
            }
        }

        fn color(format: ColorFormat) -> &'static str {
            match format {
                ColorFormat::Rgb565 => "565",
                ColorFormat::Rgb888 => "888",
                ColorFormat::Rgb888x => "888x",
                ColorFormat::Rgba4444 => "4444",
                ColorFormat::Rgba6666 => "6666",
                ColorFormat::Rgba8888 => "8888",
                _ => "Inv",
            }
        }

        let vcd = &self.vcd;
        let vat = &self.vat;
        let mut name = String::new();

        let position = vat.a.position();
        _ = write!(
            name,
            "P_mtx{}_{}_{}_{}_",
            vcd.pos_mat_index() as u8,
            position.kind().components(),
            mode(vcd.position()),
            coords(position.format())
        );

        if vcd.normal().present() {
            let normal = vat.a.normal();
            _ = write!(
                name,
                "Nrm_{}_{}_{}_{}_",
                normal.kind() as u8,
                self.normal_index3() as u8,
                mode(vcd.normal()),
                coords(normal.format())
            );
        }

        for slot in 0..2 {
            let attr = vat.color(slot);
            if vcd.color_mode(slot).present() {
                _ = write!(
                    name,
                    "C{slot}_{}_{}_{}_",
                    attr.kind() as u8,
                    mode(vcd.color_mode(slot)),
                    color(attr.format())
                );
            }
        }

        for slot in 0..8 {
            let matrix = vcd.tex_matrix_present(slot);
            let tex_mode = vcd.tex_coord_mode(slot);
            if tex_mode.present() || matrix {
                let attr = vat.tex(slot).unwrap_or_default();
                _ = write!(
                    name,
                    "T{slot}_mtx{}_{}_{}_{}_",
                    matrix as u8,
                    attr.kind() as u8,
                    mode(tex_mode),
                    coords(attr.format())
                );
            }
        }

        name
    }
}

impl std::fmt::Display for FormatDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [w0, w1, w2, w3] = self.words();
        write!(f, "{} [{w0:08X} {w1:08X} {w2:08X} {w3:08X}]", self.name())
    }
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;
    use crate::format::{ColorKind, PositionKind, TexCoordsKind};

    fn set(word: &mut u32, start: u32, len: u32, value: u32) {
        let mask = ((1 << len) - 1) << start;
        *word = (*word & !mask) | ((value << start) & mask);
    }

    /// Small builder for register state used across the crate's tests.
    #[derive(Default, Clone, Copy)]
    pub struct Registers {
        pub vcd_low: u32,
        pub vcd_high: u32,
        pub vat: [u32; 3],
    }

    impl Registers {
        pub fn pos_matrix(mut self) -> Self {
            self.vcd_low |= 1;
            self
        }

        pub fn tex_matrix(mut self, slot: u32) -> Self {
            self.vcd_low |= 1 << (1 + slot);
            self
        }

        pub fn position(
            mut self,
            mode: AttributeMode,
            kind: PositionKind,
            format: CoordsFormat,
            shift: u32,
        ) -> Self {
            set(&mut self.vcd_low, 9, 2, mode as u32);
            let raw = kind as u32 | (format as u32) << 1 | shift << 4;
            set(&mut self.vat[0], 0, 9, raw);
            self
        }

        pub fn normal(
            mut self,
            mode: AttributeMode,
            kind: NormalKind,
            format: CoordsFormat,
            index3: bool,
        ) -> Self {
            set(&mut self.vcd_low, 11, 2, mode as u32);
            set(&mut self.vat[0], 9, 4, kind as u32 | (format as u32) << 1);
            set(&mut self.vat[0], 31, 1, index3 as u32);
            self
        }

        pub fn color(
            mut self,
            slot: u32,
            mode: AttributeMode,
            kind: ColorKind,
            format: ColorFormat,
        ) -> Self {
            set(&mut self.vcd_low, 13 + 2 * slot, 2, mode as u32);
            let raw = kind as u32 | (format as u32) << 1;
            set(&mut self.vat[0], 13 + 4 * slot, 4, raw);
            self
        }

        pub fn tex_coord(
            mut self,
            slot: u32,
            mode: AttributeMode,
            kind: TexCoordsKind,
            format: CoordsFormat,
            shift: u32,
        ) -> Self {
            set(&mut self.vcd_high, 2 * slot, 2, mode as u32);

            let raw = kind as u32 | (format as u32) << 1 | shift << 4;
            match slot {
                0 => set(&mut self.vat[0], 21, 9, raw),
                1..4 => set(&mut self.vat[1], 9 * (slot - 1), 9, raw),
                4 => {
                    set(&mut self.vat[1], 27, 4, raw);
                    set(&mut self.vat[2], 0, 5, raw >> 4);
                }
                _ => set(&mut self.vat[2], 5 + 9 * (slot - 5), 9, raw),
            }
            self
        }

        pub fn vcd(&self) -> VertexDescriptor {
            VertexDescriptor::from_words(self.vcd_low, self.vcd_high)
        }

        pub fn vat(&self) -> VertexAttributeTable {
            VertexAttributeTable::from_words(self.vat[0], self.vat[1], self.vat[2])
        }

        pub fn descriptor(&self) -> FormatDescriptor {
            FormatDescriptor::new(&self.vcd(), &self.vat())
        }
    }

    #[test]
    fn canonical_ignores_fractions_and_absent_attributes() {
        let base = Registers::default()
            .position(AttributeMode::Index16, PositionKind::Vec3, CoordsFormat::I16, 0)
            .tex_coord(0, AttributeMode::Direct, TexCoordsKind::Vec2, CoordsFormat::U8, 0);

        let mut noisy = base
            .position(AttributeMode::Index16, PositionKind::Vec3, CoordsFormat::I16, 9)
            .tex_coord(0, AttributeMode::Direct, TexCoordsKind::Vec2, CoordsFormat::U8, 12);
        // absent color0 and tex5 with garbage formats, byte dequant, vcache enhance
        noisy.vat[0] |= 0b1011 << 13 | 1 << 30;
        noisy.vat[1] |= 1 << 31;
        noisy.vat[2] |= 0x1FF << 14;

        assert_eq!(base.descriptor(), noisy.descriptor());
        assert_eq!(base.descriptor().key(), noisy.descriptor().key());
    }

    #[test]
    fn key_digest() {
        // P_mtx0_3_Dir_s8_T0_mtx0_1_Dir_u8_
        let words = [0x0001_0100, 0x0020_0003, 0, 0];
        let descriptor = FormatDescriptor::from_words(words);
        assert_eq!(descriptor.words(), words);
        assert_eq!(descriptor.key(), 208_183_683_410);

        // byte dequant is not part of the key
        let dequant = FormatDescriptor::from_words([words[0], words[1] | 1 << 30, 0, 0]);
        assert_eq!(dequant.key(), descriptor.key());
    }

    #[test]
    fn index3_only_matters_for_indexed_nbt() {
        let direct = Registers::default()
            .position(AttributeMode::Direct, PositionKind::Vec3, CoordsFormat::F32, 0)
            .normal(AttributeMode::Direct, NormalKind::N9, CoordsFormat::I8, false);
        let direct3 = direct.normal(AttributeMode::Direct, NormalKind::N9, CoordsFormat::I8, true);
        assert_eq!(direct.descriptor(), direct3.descriptor());

        let indexed = direct.normal(AttributeMode::Index8, NormalKind::N9, CoordsFormat::I8, false);
        let indexed3 = direct.normal(AttributeMode::Index8, NormalKind::N9, CoordsFormat::I8, true);
        assert_ne!(indexed.descriptor(), indexed3.descriptor());
        assert!(indexed3.descriptor().normal_index3());
    }

    #[test]
    fn words_roundtrip() {
        let regs = Registers::default()
            .pos_matrix()
            .tex_matrix(2)
            .position(AttributeMode::Index8, PositionKind::Vec3, CoordsFormat::F32, 0)
            .color(1, AttributeMode::Direct, ColorKind::Rgba, ColorFormat::Rgba6666)
            .tex_coord(7, AttributeMode::Index16, TexCoordsKind::Vec1, CoordsFormat::I8, 3);

        let descriptor = regs.descriptor();
        let words = descriptor.words();
        assert_eq!(words[2] >> 31, 1);
        assert_eq!(FormatDescriptor::from_words(words), descriptor);
    }

    #[test]
    fn names() {
        let descriptor = Registers::default()
            .position(AttributeMode::Index8, PositionKind::Vec3, CoordsFormat::F32, 0)
            .color(0, AttributeMode::Index8, ColorKind::Rgba, ColorFormat::Rgba8888)
            .tex_coord(0, AttributeMode::Index8, TexCoordsKind::Vec2, CoordsFormat::F32, 0)
            .descriptor();
        assert_eq!(
            descriptor.name(),
            "P_mtx0_3_I8_flt_C0_1_I8_8888_T0_mtx0_1_I8_flt_"
        );

        let descriptor = Registers::default()
            .pos_matrix()
            .position(AttributeMode::Index16, PositionKind::Vec3, CoordsFormat::F32, 0)
            .normal(AttributeMode::Index16, NormalKind::N3, CoordsFormat::I16, false)
            .tex_coord(0, AttributeMode::Index16, TexCoordsKind::Vec2, CoordsFormat::I16, 0)
            .descriptor();
        assert_eq!(
            descriptor.name(),
            "P_mtx1_3_I16_flt_Nrm_0_0_I16_s16_T0_mtx0_1_I16_s16_"
        );
    }

    #[test]
    fn reserved_formats_are_rejected() {
        let regs = Registers::default()
            .position(AttributeMode::Direct, PositionKind::Vec3, CoordsFormat::F32, 0)
            .tex_coord(3, AttributeMode::Direct, TexCoordsKind::Vec2, CoordsFormat::Reserved1, 0);
        assert!(matches!(
            regs.descriptor().validate(),
            Err(DescriptorError::ReservedCoordsFormat(AttributeSlot::TexCoord(3), _))
        ));

        let regs = Registers::default()
            .position(AttributeMode::Direct, PositionKind::Vec3, CoordsFormat::F32, 0)
            .color(1, AttributeMode::Index8, ColorKind::Rgba, ColorFormat::Reserved0);
        assert!(matches!(
            regs.descriptor().validate(),
            Err(DescriptorError::ReservedColorFormat(AttributeSlot::Color(1), _))
        ));

        // reserved formats on absent attributes are fine
        let regs = Registers::default()
            .position(AttributeMode::Direct, PositionKind::Vec3, CoordsFormat::F32, 0)
            .color(1, AttributeMode::None, ColorKind::Rgba, ColorFormat::Reserved0);
        assert!(regs.descriptor().validate().is_ok());
    }
}
