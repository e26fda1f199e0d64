//! The pipeline cursor and the inputs of a decode call.

use crate::{
    bbox::BoundingBox,
    convert::fraction,
    descriptor::AttributeSlot,
    format::VertexAttributeTable,
};
use easyerr::Error;
use tinyvec::TinyVec;
use zerocopy::IntoBytes;

/// An attribute array in guest memory, addressed by indexed attributes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrayDescriptor<'a> {
    /// The array contents, starting at the array base.
    pub data: &'a [u8],
    /// Distance between consecutive elements, in bytes.
    pub stride: u32,
}

impl<'a> ArrayDescriptor<'a> {
    pub fn new(data: &'a [u8], stride: u32) -> Self {
        Self { data, stride }
    }
}

/// The attribute arrays of a decode call.
#[derive(Debug, Clone, Copy, Default)]
pub struct Arrays<'a> {
    pub position: ArrayDescriptor<'a>,
    pub normal: ArrayDescriptor<'a>,
    pub color: [ArrayDescriptor<'a>; 2],
    pub tex_coord: [ArrayDescriptor<'a>; 8],
}

impl<'a> Arrays<'a> {
    pub fn get(&self, slot: AttributeSlot) -> Option<&ArrayDescriptor<'a>> {
        match slot {
            AttributeSlot::Position => Some(&self.position),
            AttributeSlot::Normal => Some(&self.normal),
            AttributeSlot::Color(i) => self.color.get(i as usize),
            AttributeSlot::TexCoord(i) => self.tex_coord.get(i as usize),
        }
    }
}

/// Scales and defaults of a decode call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecodeParams {
    /// Scale applied to integer positions.
    pub pos_scale: f32,
    /// Scale applied to integer texture coordinates, per slot.
    pub tex_scale: [f32; 8],
    /// Position matrix index used when the stream carries none.
    pub default_pos_matrix: u8,
}

impl Default for DecodeParams {
    fn default() -> Self {
        Self {
            pos_scale: 1.0,
            tex_scale: [1.0; 8],
            default_pos_matrix: 0,
        }
    }
}

impl DecodeParams {
    /// Builds the scales from fixed point fraction bit counts.
    pub fn from_fractions(pos: u8, tex: [u8; 8]) -> Self {
        Self {
            pos_scale: fraction(pos),
            tex_scale: tex.map(fraction),
            ..Default::default()
        }
    }

    /// Builds the scales from the fraction fields of a raw vertex attribute table.
    pub fn from_vat(vat: &VertexAttributeTable) -> Self {
        let pos = vat.a.position().shift().value() as u8;
        let tex = std::array::from_fn(|i| vat.tex(i).unwrap_or_default().shift().value() as u8);
        Self::from_fractions(pos, tex)
    }
}

/// Errors caused by buffers violating the decode call contract.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("source stream holds {f0} bytes, {f1} are required")]
    SourceTooShort(usize, usize),
    #[error("destination holds {f0} bytes, {f1} are required")]
    DestinationTooSmall(usize, usize),
    #[error("index {f1} is outside of the {f0:?} array")]
    IndexOutOfBounds(AttributeSlot, u16),
}

/// Result of a decode call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeOutput {
    /// Number of bytes written to the destination.
    pub written: usize,
    /// Vertices with an attribute index equal to the sentinel value.
    pub skipped: TinyVec<[u32; 8]>,
}

/// State threaded through every attribute reader of a decode call.
pub(crate) struct Cursor<'a> {
    src: &'a [u8],
    read: usize,
    dst: &'a mut [u8],
    write: usize,
    arrays: &'a Arrays<'a>,
    params: &'a DecodeParams,
    bbox: Option<&'a mut BoundingBox>,
    bbox_offset: usize,
    bbox_pending: bool,
    tail: usize,

    vertex: u32,
    skip: bool,
    skipped: TinyVec<[u32; 8]>,

    pub tc_index: usize,
    pub col_index: usize,
    pub pos_matrix: u8,
    pub tex_matrix: [u8; 8],
    pub tex_matrix_read: usize,
    pub tex_matrix_write: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor over the given buffers. `tail` is the size of the matrix index tail.
    pub fn new(
        src: &'a [u8],
        dst: &'a mut [u8],
        arrays: &'a Arrays<'a>,
        params: &'a DecodeParams,
        bbox: Option<&'a mut BoundingBox>,
        tail: usize,
    ) -> Self {
        Self {
            src,
            read: 0,
            dst,
            write: 0,
            arrays,
            params,
            bbox,
            bbox_offset: 0,
            bbox_pending: false,
            tail,

            vertex: 0,
            skip: false,
            skipped: TinyVec::new(),

            tc_index: 0,
            col_index: 0,
            pos_matrix: params.default_pos_matrix,
            tex_matrix: [0; 8],
            tex_matrix_read: 0,
            tex_matrix_write: 0,
        }
    }

    #[inline(always)]
    pub fn params(&self) -> &'a DecodeParams {
        self.params
    }

    #[inline(always)]
    pub fn tex_scale(&self, slot: usize) -> f32 {
        self.params.tex_scale.get(slot).copied().unwrap_or(1.0)
    }

    /// Reads `len` bytes from the attribute stream.
    #[inline(always)]
    pub fn read(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        let src = self.src;
        let end = self.read + len;
        let bytes = src
            .get(self.read..end)
            .ok_or(DecodeError::SourceTooShort(src.len(), end))?;

        self.read = end;
        Ok(bytes)
    }

    #[inline(always)]
    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        Ok(self.read(1)?[0])
    }

    #[inline(always)]
    pub fn read_u16(&mut self) -> Result<u16, DecodeError> {
        let bytes = self.read(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    /// Reads `len` bytes of element `index` of the array of `slot`, starting `offset` bytes into
    /// the element.
    #[inline(always)]
    pub fn fetch(
        &self,
        slot: AttributeSlot,
        index: u16,
        offset: usize,
        len: usize,
    ) -> Result<&'a [u8], DecodeError> {
        let arrays = self.arrays;
        let array = arrays
            .get(slot)
            .ok_or(DecodeError::IndexOutOfBounds(slot, index))?;

        let start = index as usize * array.stride as usize + offset;
        array
            .data
            .get(start..start + len)
            .ok_or(DecodeError::IndexOutOfBounds(slot, index))
    }

    /// Writes raw bytes to the destination.
    #[inline(always)]
    pub fn write(&mut self, bytes: &[u8]) -> Result<(), DecodeError> {
        let end = self.write + bytes.len();
        let len = self.dst.len();
        self.dst
            .get_mut(self.write..end)
            .ok_or(DecodeError::DestinationTooSmall(len, end))?
            .copy_from_slice(bytes);

        self.write = end;
        Ok(())
    }

    #[inline(always)]
    pub fn write_floats<const N: usize>(&mut self, values: [f32; N]) -> Result<(), DecodeError> {
        self.write(values.as_bytes())
    }

    /// Flags the current vertex as skipped.
    #[inline(always)]
    pub fn skip_vertex(&mut self) {
        self.skip = true;
    }

    #[inline(always)]
    pub fn skipping(&self) -> bool {
        self.skip
    }

    /// Marks the destination offset the position of the current vertex is written to.
    #[inline(always)]
    pub fn bounds_prepare(&mut self) {
        self.bbox_offset = self.write;
    }

    /// Schedules the position written since [`bounds_prepare`](Self::bounds_prepare) to be folded
    /// into the bounding box once the vertex is complete.
    #[inline(always)]
    pub fn bounds_update(&mut self) {
        self.bbox_pending = self.bbox.is_some();
    }

    /// Folds the pending position into the bounding box, unless the vertex is skipped.
    #[inline(always)]
    fn fold_bounds(&mut self) {
        if !std::mem::take(&mut self.bbox_pending) || self.skip {
            return;
        }

        let Some(bbox) = self.bbox.as_deref_mut() else {
            return;
        };

        let Some(bytes) = self.dst.get(self.bbox_offset..self.bbox_offset + 8) else {
            return;
        };

        let x = f32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        let y = f32::from_ne_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
        bbox.fold(x, y);
    }

    #[inline(always)]
    fn begin_vertex(&mut self) {
        self.tc_index = 0;
        self.col_index = 0;
        self.tex_matrix_read = 0;
        self.tex_matrix_write = 0;
        self.skip = false;
    }

    /// Writes the matrix index tail of the current vertex.
    #[inline(always)]
    fn end_vertex(&mut self) -> Result<(), DecodeError> {
        self.fold_bounds();

        let mut tail = [0u8; 12];
        tail[0] = self.pos_matrix;
        let count = self.tex_matrix_read.min(8);
        tail[1..1 + count].copy_from_slice(&self.tex_matrix[..count]);

        let len = self.tail.min(tail.len());
        self.write(&tail[..len])?;

        if self.skip {
            self.skipped.push(self.vertex);
        }

        self.vertex += 1;
        Ok(())
    }

    /// Runs `body` once per vertex, between the per vertex bookkeeping.
    #[inline(always)]
    pub fn run(
        &mut self,
        count: u32,
        mut body: impl FnMut(&mut Self) -> Result<(), DecodeError>,
    ) -> Result<(), DecodeError> {
        for _ in 0..count {
            self.begin_vertex();
            body(self)?;
            self.end_vertex()?;
        }

        Ok(())
    }

    pub fn finish(self) -> DecodeOutput {
        DecodeOutput {
            written: self.write,
            skipped: self.skipped,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reads_and_writes() {
        let src = [0x12, 0x34, 0x56];
        let mut dst = [0u8; 16];
        let arrays = Arrays::default();
        let params = DecodeParams::default();
        let mut cursor = Cursor::new(&src, &mut dst, &arrays, &params, None, 4);

        assert_eq!(cursor.read_u16().unwrap(), 0x1234);
        assert_eq!(cursor.read_u8().unwrap(), 0x56);
        assert!(matches!(
            cursor.read_u8(),
            Err(DecodeError::SourceTooShort(3, 4))
        ));

        cursor.write_floats([1.0f32, 2.0]).unwrap();
        cursor.write_floats([3.0f32, 4.0]).unwrap();
        assert!(matches!(
            cursor.write_floats([5.0f32]),
            Err(DecodeError::DestinationTooSmall(16, 20))
        ));
        assert_eq!(cursor.finish().written, 16);
    }

    #[test]
    fn indexed_fetch_is_bounded() {
        let positions = [0u8, 1, 2, 3, 4, 5, 6, 7];
        let arrays = Arrays {
            position: ArrayDescriptor::new(&positions, 4),
            ..Default::default()
        };
        let params = DecodeParams::default();
        let mut dst = [];
        let cursor = Cursor::new(&[], &mut dst, &arrays, &params, None, 4);

        assert_eq!(cursor.fetch(AttributeSlot::Position, 1, 0, 4).unwrap(), &[4, 5, 6, 7]);
        assert_eq!(cursor.fetch(AttributeSlot::Position, 1, 2, 2).unwrap(), &[6, 7]);
        assert!(matches!(
            cursor.fetch(AttributeSlot::Position, 2, 0, 4),
            Err(DecodeError::IndexOutOfBounds(AttributeSlot::Position, 2))
        ));
        assert!(cursor.fetch(AttributeSlot::TexCoord(9), 0, 0, 1).is_err());
    }

    #[test]
    fn fraction_params() {
        let params = DecodeParams::from_fractions(4, [0, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(params.pos_scale, 1.0 / 16.0);
        assert_eq!(params.tex_scale[7], 1.0 / 128.0);

        let vat = VertexAttributeTable::from_words(5 << 4, 0, 3);
        let params = DecodeParams::from_vat(&vat);
        assert_eq!(params.pos_scale, 1.0 / 32.0);
        assert_eq!(params.tex_scale[4], 1.0 / 8.0);
        assert_eq!(params.tex_scale[0], 1.0);
    }
}
