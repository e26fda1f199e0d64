//! Attribute readers.
//!
//! Every reader performs one step of a vertex: it reads one attribute (or matrix index) through
//! the cursor and writes its host representation. All readers share the same signature, so that
//! they can be called inline by specialized decoders or through function pointers by composed
//! ones.

use crate::{
    color::ColorCodec,
    convert::Component,
    cursor::{Cursor, DecodeError},
    descriptor::AttributeSlot,
    tier::Tier,
};

/// How an attribute is addressed in the stream.
pub(crate) trait Addressing: 'static {
    /// Index value marking a vertex to be skipped, if any.
    const SENTINEL: Option<u16>;

    /// Reads the index of the attribute from the stream, or `None` if the attribute is direct.
    fn index(cursor: &mut Cursor<'_>) -> Result<Option<u16>, DecodeError>;
}

pub(crate) struct Direct;

impl Addressing for Direct {
    const SENTINEL: Option<u16> = None;

    #[inline(always)]
    fn index(_: &mut Cursor<'_>) -> Result<Option<u16>, DecodeError> {
        Ok(None)
    }
}

pub(crate) struct Index8;

impl Addressing for Index8 {
    const SENTINEL: Option<u16> = Some(0xFF);

    #[inline(always)]
    fn index(cursor: &mut Cursor<'_>) -> Result<Option<u16>, DecodeError> {
        cursor.read_u8().map(|i| Some(i as u16))
    }
}

pub(crate) struct Index16;

impl Addressing for Index16 {
    const SENTINEL: Option<u16> = Some(0xFFFF);

    #[inline(always)]
    fn index(cursor: &mut Cursor<'_>) -> Result<Option<u16>, DecodeError> {
        cursor.read_u16().map(Some)
    }
}

/// Stands in for the data of sentinel indices. Large enough for three f32 vectors.
static ZEROS: [u8; 36] = [0; 36];

/// Reads `len` bytes of element `index` of the array of `slot`, starting `offset` bytes into the
/// element.
///
/// An index equal to the sentinel of its index type is not dereferenced: the vertex is flagged as
/// skipped and zeroed bytes are returned instead.
#[inline(always)]
fn fetch<'a, A: Addressing>(
    cursor: &mut Cursor<'a>,
    slot: AttributeSlot,
    index: u16,
    offset: usize,
    len: usize,
) -> Result<&'a [u8], DecodeError> {
    if Some(index) == A::SENTINEL {
        cursor.skip_vertex();
        return ZEROS
            .get(..len)
            .ok_or(DecodeError::IndexOutOfBounds(slot, index));
    }

    cursor.fetch(slot, index, offset, len)
}

/// Reads the `len` bytes of an attribute, either from the stream or from its array.
#[inline(always)]
fn locate<'a, A: Addressing>(
    cursor: &mut Cursor<'a>,
    slot: AttributeSlot,
    len: usize,
) -> Result<&'a [u8], DecodeError> {
    match A::index(cursor)? {
        None => cursor.read(len),
        Some(index) => fetch::<A>(cursor, slot, index, 0, len),
    }
}

/// Reads the position matrix index.
#[inline(always)]
pub(crate) fn pos_matrix<T: Tier>(cursor: &mut Cursor<'_>) -> Result<(), DecodeError> {
    cursor.pos_matrix = cursor.read_u8()? & 0x3F;
    Ok(())
}

/// Reads the next texture matrix index.
#[inline(always)]
pub(crate) fn tex_matrix<T: Tier>(cursor: &mut Cursor<'_>) -> Result<(), DecodeError> {
    let value = cursor.read_u8()? & 0x3F;
    if let Some(slot) = cursor.tex_matrix.get_mut(cursor.tex_matrix_read) {
        *slot = value;
    }

    cursor.tex_matrix_read += 1;
    Ok(())
}

#[inline(always)]
pub(crate) fn bounds_prepare<T: Tier>(cursor: &mut Cursor<'_>) -> Result<(), DecodeError> {
    cursor.bounds_prepare();
    Ok(())
}

#[inline(always)]
pub(crate) fn bounds_update<T: Tier>(cursor: &mut Cursor<'_>) -> Result<(), DecodeError> {
    cursor.bounds_update();
    Ok(())
}

/// Reads a position of `N` components and writes it as three floats.
#[inline(always)]
pub(crate) fn position<T: Tier, A: Addressing, C: Component, const N: usize>(
    cursor: &mut Cursor<'_>,
) -> Result<(), DecodeError> {
    let src = locate::<A>(cursor, AttributeSlot::Position, N * C::SIZE)?;
    let values = T::convert::<C, N>(src, cursor.params().pos_scale);
    let mut out = [0.0f32; 3];
    for (out, value) in out.iter_mut().zip(values) {
        *out = value;
    }

    cursor.write_floats(out)
}

/// Reads `V` normal vectors (1 or 3) through a single index.
#[inline(always)]
pub(crate) fn normal<T: Tier, A: Addressing, C: Component, const V: usize>(
    cursor: &mut Cursor<'_>,
) -> Result<(), DecodeError> {
    let vector = 3 * C::SIZE;
    let src = locate::<A>(cursor, AttributeSlot::Normal, V * vector)?;
    for i in 0..V {
        let values = T::convert::<C, 3>(&src[i * vector..], C::NORMAL_SCALE);
        cursor.write_floats(values)?;
    }

    Ok(())
}

/// Reads normal, binormal and tangent through one index each.
#[inline(always)]
pub(crate) fn normal_index3<T: Tier, A: Addressing, C: Component>(
    cursor: &mut Cursor<'_>,
) -> Result<(), DecodeError> {
    let vector = 3 * C::SIZE;
    for i in 0..3 {
        let src = match A::index(cursor)? {
            None => cursor.read(vector)?,
            Some(index) => fetch::<A>(cursor, AttributeSlot::Normal, index, i * vector, vector)?,
        };

        let values = T::convert::<C, 3>(src, C::NORMAL_SCALE);
        cursor.write_floats(values)?;
    }

    Ok(())
}

/// Reads the next color and writes it as `[r, g, b, a]`.
#[inline(always)]
pub(crate) fn color<T: Tier, A: Addressing, F: ColorCodec>(
    cursor: &mut Cursor<'_>,
) -> Result<(), DecodeError> {
    let slot = AttributeSlot::Color(cursor.col_index as u8);
    let src = locate::<A>(cursor, slot, F::SIZE)?;
    cursor.write(&F::decode(src))?;
    cursor.col_index += 1;
    Ok(())
}

/// Moves past an absent color slot.
#[inline(always)]
pub(crate) fn skip_color<T: Tier>(cursor: &mut Cursor<'_>) -> Result<(), DecodeError> {
    cursor.col_index += 1;
    Ok(())
}

#[inline(always)]
fn read_tex_coord<'a, T: Tier, A: Addressing, C: Component, const N: usize>(
    cursor: &mut Cursor<'a>,
) -> Result<[f32; N], DecodeError> {
    let slot = cursor.tc_index;
    let src = locate::<A>(cursor, AttributeSlot::TexCoord(slot as u8), N * C::SIZE)?;
    Ok(T::convert::<C, N>(src, cursor.tex_scale(slot)))
}

#[inline(always)]
fn next_tex_matrix(cursor: &mut Cursor<'_>) -> f32 {
    let value = cursor
        .tex_matrix
        .get(cursor.tex_matrix_write)
        .copied()
        .unwrap_or_default();

    cursor.tex_matrix_write += 1;
    value as f32
}

/// Reads the next texture coordinate of `N` components.
#[inline(always)]
pub(crate) fn tex_coord<T: Tier, A: Addressing, C: Component, const N: usize>(
    cursor: &mut Cursor<'_>,
) -> Result<(), DecodeError> {
    let values = read_tex_coord::<T, A, C, N>(cursor)?;
    cursor.write_floats(values)?;
    cursor.tc_index += 1;
    Ok(())
}

/// Reads the next texture coordinate of `N` components and writes it along with its texture
/// matrix index as `(s, t, m)`.
#[inline(always)]
pub(crate) fn tex_coord_matrix<T: Tier, A: Addressing, C: Component, const N: usize>(
    cursor: &mut Cursor<'_>,
) -> Result<(), DecodeError> {
    let values = read_tex_coord::<T, A, C, N>(cursor)?;
    let mut out = [0.0f32; 3];
    for (out, value) in out[..2].iter_mut().zip(values) {
        *out = value;
    }

    out[2] = next_tex_matrix(cursor);
    cursor.write_floats(out)?;
    cursor.tc_index += 1;
    Ok(())
}

/// Writes the texture matrix index of a slot without texture coordinates as `(0, 0, m)`.
#[inline(always)]
pub(crate) fn tex_matrix_only<T: Tier>(cursor: &mut Cursor<'_>) -> Result<(), DecodeError> {
    let matrix = next_tex_matrix(cursor);
    cursor.write_floats([0.0, 0.0, matrix])?;
    cursor.tc_index += 1;
    Ok(())
}

/// Moves past an absent texture coordinate slot.
#[inline(always)]
pub(crate) fn skip_tex_coord<T: Tier>(cursor: &mut Cursor<'_>) -> Result<(), DecodeError> {
    cursor.tc_index += 1;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        color::Rgb565,
        cursor::{ArrayDescriptor, Arrays, DecodeParams},
        tier::Scalar,
    };

    fn floats(bytes: &[u8]) -> Vec<f32> {
        bytes
            .chunks_exact(4)
            .map(|c| f32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
            .collect()
    }

    #[test]
    fn direct_position_is_padded() {
        let src = [0x00, 0x10, 0xFF, 0xF0];
        let mut dst = [0xAA; 12];
        let arrays = Arrays::default();
        let params = DecodeParams::from_fractions(4, [0; 8]);
        let mut cursor = Cursor::new(&src, &mut dst, &arrays, &params, None, 4);

        position::<Scalar, Direct, i16, 2>(&mut cursor).unwrap();
        assert_eq!(cursor.finish().written, 12);
        assert_eq!(floats(&dst), [1.0, -1.0, 0.0]);
    }

    #[test]
    fn position_sentinel_is_not_dereferenced() {
        let src = [0xFF, 0xFF];
        let mut dst = [0xAA; 12];
        let arrays = Arrays::default();
        let params = DecodeParams::default();
        let mut cursor = Cursor::new(&src, &mut dst, &arrays, &params, None, 4);

        position::<Scalar, Index16, f32, 3>(&mut cursor).unwrap();
        assert!(cursor.skipping());
        assert_eq!(floats(&dst), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn sentinel_normals_are_zeroed() {
        let normals = [64, 0, 0, 0, 64, 0, 0, 0, 64];
        let arrays = Arrays {
            normal: ArrayDescriptor::new(&normals, 9),
            ..Default::default()
        };
        let src = [0xFF, 0, 0xFF];
        let mut dst = [0xAA; 36];
        let params = DecodeParams::default();
        let mut cursor = Cursor::new(&src, &mut dst, &arrays, &params, None, 4);

        normal_index3::<Scalar, Index8, i8>(&mut cursor).unwrap();
        assert!(cursor.skipping());
        assert_eq!(
            floats(&dst),
            [0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0]
        );
    }

    #[test]
    fn sentinel_tex_coord_is_not_dereferenced() {
        let tex_coords = [0x3F, 0x80, 0x00, 0x00];
        let arrays = Arrays {
            tex_coord: [ArrayDescriptor::new(&tex_coords, 4); 8],
            ..Default::default()
        };
        let src = [0xFF, 0xFF];
        let mut dst = [0xAA; 4];
        let params = DecodeParams::default();
        let mut cursor = Cursor::new(&src, &mut dst, &arrays, &params, None, 4);

        tex_coord::<Scalar, Index16, f32, 1>(&mut cursor).unwrap();
        assert!(cursor.skipping());
        assert_eq!(cursor.tc_index, 1);
        assert_eq!(floats(&dst), [0.0]);
    }

    #[test]
    fn normal_index3_offsets() {
        // three s8 vectors of one element: N, B and T
        let normals = [64, 0, 0, 0, 64, 0, 0, 0, 64];
        let arrays = Arrays {
            normal: ArrayDescriptor::new(&normals, 9),
            ..Default::default()
        };
        let src = [0, 0, 0];
        let mut dst = [0; 36];
        let params = DecodeParams::default();
        let mut cursor = Cursor::new(&src, &mut dst, &arrays, &params, None, 4);

        normal_index3::<Scalar, Index8, i8>(&mut cursor).unwrap();
        assert_eq!(
            floats(&dst),
            [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]
        );
    }

    #[test]
    fn indexed_colors_follow_the_color_counter() {
        let color0 = [0xF8, 0x00];
        let color1 = [0x00, 0x1F];
        let arrays = Arrays {
            color: [ArrayDescriptor::new(&color0, 2), ArrayDescriptor::new(&color1, 2)],
            ..Default::default()
        };
        let src = [0, 0];
        let mut dst = [0; 8];
        let params = DecodeParams::default();
        let mut cursor = Cursor::new(&src, &mut dst, &arrays, &params, None, 4);

        color::<Scalar, Index8, Rgb565>(&mut cursor).unwrap();
        color::<Scalar, Index8, Rgb565>(&mut cursor).unwrap();
        assert_eq!(dst, [0xFF, 0, 0, 0xFF, 0, 0, 0xFF, 0xFF]);
    }

    #[test]
    fn truncated_colors_are_errors() {
        let arrays = Arrays {
            color: [ArrayDescriptor::new(&[0xF8], 2); 2],
            ..Default::default()
        };
        let params = DecodeParams::default();
        let mut dst = [0; 8];

        let mut cursor = Cursor::new(&[0xF8], &mut dst, &arrays, &params, None, 4);
        assert!(matches!(
            color::<Scalar, Direct, Rgb565>(&mut cursor),
            Err(DecodeError::SourceTooShort(1, 2))
        ));

        let mut cursor = Cursor::new(&[0], &mut dst, &arrays, &params, None, 4);
        assert!(matches!(
            color::<Scalar, Index8, Rgb565>(&mut cursor),
            Err(DecodeError::IndexOutOfBounds(AttributeSlot::Color(0), 0))
        ));
    }

    #[test]
    fn tex_coords_use_their_slot_scale() {
        let src = [0x10, 0x20, 0x40];
        let mut dst = [0; 32];
        let arrays = Arrays::default();
        let params = DecodeParams::from_fractions(0, [4, 0, 5, 0, 0, 0, 0, 0]);
        let mut cursor = Cursor::new(&src, &mut dst, &arrays, &params, None, 4);
        cursor.tex_matrix = [0, 0, 7, 0, 0, 0, 0, 0];

        tex_coord::<Scalar, Direct, u8, 2>(&mut cursor).unwrap();
        skip_tex_coord::<Scalar>(&mut cursor).unwrap();
        cursor.tex_matrix_write = 2;
        tex_coord_matrix::<Scalar, Direct, u8, 1>(&mut cursor).unwrap();
        tex_matrix_only::<Scalar>(&mut cursor).unwrap();

        assert_eq!(cursor.tc_index, 4);
        assert_eq!(
            floats(&dst),
            [1.0, 2.0, 2.0, 0.0, 7.0, 0.0, 0.0, 0.0]
        );
    }
}
