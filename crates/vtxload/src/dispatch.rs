//! The format dispatch table.

use crate::{
    bbox::BoundingBox,
    compose::ComposedDecoder,
    cursor::{Arrays, Cursor, DecodeError, DecodeOutput, DecodeParams},
    descriptor::{DescriptorError, FormatDescriptor},
    layout::VertexLayout,
    plan::Plan,
    profile::Profile,
    specialize::{DecodeFn, TitleTable},
    tier::TierLevel,
    titles,
};
use easyerr::{Error, ResultExt};
use rustc_hash::FxHashMap;
use std::collections::hash_map;
use tracing::{debug, info};

/// Settings of a [`DispatchTable`].
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    /// Highest tier decoders may use. Tiers above the detected one are never used.
    pub max_tier: Option<TierLevel>,
    /// Whether to use the specialized decoders of the title.
    pub precompiled: bool,
    /// Whether to count the vertices decoded with each descriptor.
    pub record_stats: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_tier: None,
            precompiled: true,
            record_stats: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Descriptor { source: DescriptorError },
    #[error(transparent)]
    Decode { source: DecodeError },
}

/// The inputs of a draw call.
#[derive(Debug, Clone, Copy)]
pub struct Draw<'a> {
    pub descriptor: FormatDescriptor,
    /// Number of vertices to decode.
    pub count: u32,
    /// The attribute stream.
    pub src: &'a [u8],
    pub arrays: Arrays<'a>,
    pub params: DecodeParams,
}

enum Decoder {
    Specialized(DecodeFn),
    Composed(ComposedDecoder),
}

struct Entry {
    decoder: Decoder,
    level: TierLevel,
    layout: VertexLayout,
    vertex_size: usize,
    vertices: u64,
}

impl Entry {
    fn specialized(&self) -> bool {
        matches!(self.decoder, Decoder::Specialized(_))
    }
}

/// Usage statistics of a descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub descriptor: FormatDescriptor,
    pub name: String,
    pub specialized: bool,
    pub level: TierLevel,
    pub vertices: u64,
}

/// Maps descriptors to the best decoder available for them.
///
/// Tables start out with the specialized decoders of a title, if any. Descriptors without one get
/// a composed decoder the first time they are seen, which is kept for subsequent draw calls.
pub struct DispatchTable {
    settings: Settings,
    level: TierLevel,
    title: Option<&'static TitleTable>,
    entries: FxHashMap<FormatDescriptor, Entry>,
}

impl DispatchTable {
    /// Creates an empty table.
    pub fn new(settings: Settings) -> Self {
        let detected = TierLevel::detect();
        let level = settings
            .max_tier
            .map_or(detected, |max| max.min(detected));

        Self {
            settings,
            level,
            title: None,
            entries: FxHashMap::default(),
        }
    }

    /// Creates a table holding the specialized decoders of the title with the given game id.
    pub fn for_title(id: &str, settings: Settings) -> Self {
        let mut table = Self::new(settings);
        let Some(title) = titles::find(id) else {
            info!("no specialized decoders for title {id}");
            return table;
        };

        table.title = Some(title);
        if !settings.precompiled {
            info!("specialized decoders of {} disabled", title.id);
            return table;
        }

        for entry in title.entries {
            let descriptor = entry.descriptor();
            let plan = match Plan::new(&descriptor) {
                Ok(plan) => plan,
                Err(e) => {
                    debug!("skipping specialization {}: {e}", entry.name);
                    continue;
                }
            };

            let (level, decode) = entry.select(table.level);
            debug!("specialization {} at tier {level}: {}", entry.name, entry.steps);

            table.entries.insert(
                descriptor,
                Entry {
                    decoder: Decoder::Specialized(decode),
                    level,
                    layout: VertexLayout::from_plan(&plan),
                    vertex_size: plan.source_size(),
                    vertices: 0,
                },
            );
        }

        info!(
            "loaded {} specialized decoders for {} at tier {}",
            table.entries.len(),
            title.id,
            table.level
        );

        table
    }

    /// The tier decoders of this table are capped at.
    pub fn level(&self) -> TierLevel {
        self.level
    }

    /// The title this table was created for, if it has specialized decoders.
    pub fn title(&self) -> Option<&'static TitleTable> {
        self.title
    }

    fn entry(&mut self, descriptor: &FormatDescriptor) -> Result<&mut Entry, DispatchError> {
        match self.entries.entry(*descriptor) {
            hash_map::Entry::Occupied(o) => Ok(o.into_mut()),
            hash_map::Entry::Vacant(v) => {
                let plan = Plan::new(descriptor).context(DispatchCtx::Descriptor)?;
                let decoder = ComposedDecoder::new(&plan, self.level);
                debug!(
                    "composed decoder for {} at tier {}: {plan}",
                    descriptor.name(),
                    decoder.level()
                );

                Ok(v.insert(Entry {
                    level: decoder.level(),
                    decoder: Decoder::Composed(decoder),
                    layout: VertexLayout::from_plan(&plan),
                    vertex_size: plan.source_size(),
                    vertices: 0,
                }))
            }
        }
    }

    /// The host layout vertices of `descriptor` are decoded to.
    pub fn layout(
        &mut self,
        descriptor: &FormatDescriptor,
    ) -> Result<VertexLayout, DispatchError> {
        self.entry(descriptor).map(|e| e.layout)
    }

    /// Decodes the vertices of a draw call into `dst`.
    ///
    /// `bbox` is updated with the decoded positions if it is active.
    pub fn decode(
        &mut self,
        draw: &Draw<'_>,
        dst: &mut [u8],
        bbox: &mut BoundingBox,
    ) -> Result<DecodeOutput, DispatchError> {
        let record = self.settings.record_stats;
        let entry = self.entry(&draw.descriptor)?;

        let count = draw.count as usize;
        let required = count * entry.vertex_size;
        if draw.src.len() < required {
            return Err(DecodeError::SourceTooShort(draw.src.len(), required))
                .context(DispatchCtx::Decode);
        }

        let required = count * entry.layout.stride;
        if dst.len() < required {
            return Err(DecodeError::DestinationTooSmall(dst.len(), required))
                .context(DispatchCtx::Decode);
        }

        let bbox = if bbox.active { Some(bbox) } else { None };
        let mut cursor = Cursor::new(
            draw.src,
            dst,
            &draw.arrays,
            &draw.params,
            bbox,
            entry.layout.tail,
        );

        let result = match &entry.decoder {
            Decoder::Specialized(decode) => decode(&mut cursor, draw.count),
            Decoder::Composed(decoder) => decoder.decode(&mut cursor, draw.count),
        };
        result.context(DispatchCtx::Decode)?;

        if record {
            entry.vertices += draw.count as u64;
        }

        Ok(cursor.finish())
    }

    /// Every descriptor seen by this table, most used first.
    pub fn stats(&self) -> Vec<Stat> {
        let mut stats: Vec<_> = self
            .entries
            .iter()
            .map(|(descriptor, entry)| Stat {
                descriptor: *descriptor,
                name: descriptor.name(),
                specialized: entry.specialized(),
                level: entry.level,
                vertices: entry.vertices,
            })
            .collect();

        stats.sort_by(|a, b| {
            b.vertices
                .cmp(&a.vertices)
                .then(a.descriptor.words().cmp(&b.descriptor.words()))
        });

        stats
    }

    /// A profile of the descriptors without a specialized decoder.
    pub fn profile(&self, title: &str) -> Profile {
        let mut profile = Profile::new(title);
        for stat in self.stats() {
            if !stat.specialized && stat.vertices > 0 {
                profile.record(&stat.descriptor, stat.vertices);
            }
        }

        profile
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        cursor::ArrayDescriptor,
        descriptor::test::Registers,
        format::{
            AttributeMode, ColorFormat, ColorKind, CoordsFormat, PositionKind, TexCoordsKind,
        },
    };

    fn floats(bytes: &[u8]) -> Vec<f32> {
        bytes
            .chunks_exact(4)
            .map(|c| f32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
            .collect()
    }

    fn fixture() -> FormatDescriptor {
        Registers::default()
            .position(AttributeMode::Index16, PositionKind::Vec3, CoordsFormat::F32, 0)
            .color(0, AttributeMode::Direct, ColorKind::Rgba, ColorFormat::Rgba8888)
            .tex_coord(0, AttributeMode::Index16, TexCoordsKind::Vec2, CoordsFormat::F32, 0)
            .descriptor()
    }

    #[rustfmt::skip]
    const POSITIONS: [u8; 24] = [
        0x3F, 0x80, 0x00, 0x00, 0x40, 0x00, 0x00, 0x00, 0x40, 0x40, 0x00, 0x00, // (1, 2, 3)
        0xBF, 0x00, 0x00, 0x00, 0x41, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // (-0.5, 10, 0)
    ];

    #[rustfmt::skip]
    const TEX_COORDS: [u8; 16] = [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x3E, 0x80, 0x00, 0x00, 0x3F, 0x40, 0x00, 0x00, // (0.25, 0.75)
    ];

    fn draw<'a>(src: &'a [u8], count: u32) -> Draw<'a> {
        Draw {
            descriptor: fixture(),
            count,
            src,
            arrays: Arrays {
                position: ArrayDescriptor::new(&POSITIONS, 12),
                tex_coord: [ArrayDescriptor::new(&TEX_COORDS, 8); 8],
                ..Default::default()
            },
            params: DecodeParams::default(),
        }
    }

    #[rustfmt::skip]
    const SRC: [u8; 16] = [
        0x00, 0x00, 0x11, 0x22, 0x33, 0x44, 0x00, 0x01,
        0x00, 0x01, 0xAA, 0xBB, 0xCC, 0xDD, 0x00, 0x00,
    ];

    fn settings() -> Settings {
        Settings {
            record_stats: true,
            ..Default::default()
        }
    }

    #[test]
    fn round_trip_fixture() {
        let mut table = DispatchTable::new(settings());
        let layout = table.layout(&fixture()).unwrap();
        assert_eq!(layout.stride, 12 + 4 + 8 + 4);

        let mut dst = vec![0xEE; layout.stride];
        let output = table
            .decode(&draw(&SRC[..8], 1), &mut dst, &mut BoundingBox::default())
            .unwrap();

        assert_eq!(output.written, layout.stride);
        assert!(output.skipped.is_empty());
        assert_eq!(floats(&dst[0..12]), [1.0, 2.0, 3.0]);
        assert_eq!(dst[12..16], [0x11, 0x22, 0x33, 0x44]);
        assert_eq!(floats(&dst[16..24]), [0.25, 0.75]);
        assert_eq!(dst[24..28], [0, 0, 0, 0]);
    }

    #[test]
    fn decoding_is_deterministic() {
        let mut table = DispatchTable::new(settings());
        let stride = table.layout(&fixture()).unwrap().stride;

        let mut first = vec![0; stride * 2];
        let mut second = vec![0xFF; stride * 2];
        let draw = draw(&SRC, 2);
        table.decode(&draw, &mut first, &mut BoundingBox::default()).unwrap();
        table.decode(&draw, &mut second, &mut BoundingBox::default()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn sentinel_skips_vertex() {
        let mut src = SRC;
        src[8] = 0xFF;
        src[9] = 0xFF;

        let mut table = DispatchTable::new(settings());
        let stride = table.layout(&fixture()).unwrap().stride;
        let mut dst = vec![0xEE; stride * 2];
        let mut bbox = BoundingBox::active();
        let output = table.decode(&draw(&src, 2), &mut dst, &mut bbox).unwrap();

        assert_eq!(output.skipped.as_slice(), [1]);
        assert_eq!(floats(&dst[stride..stride + 12]), [0.0, 0.0, 0.0]);
        assert_eq!(dst[stride + 12..stride + 16], [0xAA, 0xBB, 0xCC, 0xDD]);
        assert_eq!(bbox.extrema(), [1.0, 1.0, 2.0, 2.0]);
    }

    #[test]
    fn sentinel_on_every_index() {
        let mut src = SRC;
        src[8..10].copy_from_slice(&[0xFF, 0xFF]);
        src[14..16].copy_from_slice(&[0xFF, 0xFF]);

        let mut table = DispatchTable::new(settings());
        let stride = table.layout(&fixture()).unwrap().stride;
        let mut dst = vec![0xEE; stride * 2];
        let output = table
            .decode(&draw(&src, 2), &mut dst, &mut BoundingBox::default())
            .unwrap();

        assert_eq!(output.skipped.as_slice(), [1]);
        assert_eq!(floats(&dst[stride..stride + 12]), [0.0, 0.0, 0.0]);
        assert_eq!(dst[stride + 12..stride + 16], [0xAA, 0xBB, 0xCC, 0xDD]);
        assert_eq!(floats(&dst[stride + 16..stride + 24]), [0.0, 0.0]);
    }

    #[test]
    fn tex_coord_sentinel_skips_vertex() {
        let mut src = SRC;
        src[14..16].copy_from_slice(&[0xFF, 0xFF]);

        let mut table = DispatchTable::new(settings());
        let stride = table.layout(&fixture()).unwrap().stride;
        let mut dst = vec![0xEE; stride * 2];
        let mut bbox = BoundingBox::active();
        let output = table.decode(&draw(&src, 2), &mut dst, &mut bbox).unwrap();

        assert_eq!(output.skipped.as_slice(), [1]);
        assert_eq!(floats(&dst[stride..stride + 12]), [-0.5, 10.0, 0.0]);
        assert_eq!(bbox.extrema(), [1.0, 1.0, 2.0, 2.0]);
    }

    #[test]
    fn bounding_box() {
        let mut table = DispatchTable::new(settings());
        let stride = table.layout(&fixture()).unwrap().stride;
        let mut dst = vec![0; stride * 2];

        let mut bbox = BoundingBox::active();
        table.decode(&draw(&SRC, 2), &mut dst, &mut bbox).unwrap();
        assert_eq!(bbox.extrema(), [-0.5, 1.0, 2.0, 10.0]);

        let mut inactive = BoundingBox::default();
        table.decode(&draw(&SRC, 2), &mut dst, &mut inactive).unwrap();
        assert_eq!(inactive, BoundingBox::default());
    }

    #[test]
    fn buffers_are_checked() {
        let mut table = DispatchTable::new(settings());
        let stride = table.layout(&fixture()).unwrap().stride;

        let mut dst = vec![0; stride * 2];
        assert!(matches!(
            table.decode(&draw(&SRC[..12], 2), &mut dst, &mut BoundingBox::default()),
            Err(DispatchError::Decode {
                source: DecodeError::SourceTooShort(12, 16)
            })
        ));

        let mut dst = vec![0; stride];
        assert!(matches!(
            table.decode(&draw(&SRC, 2), &mut dst, &mut BoundingBox::default()),
            Err(DispatchError::Decode {
                source: DecodeError::DestinationTooSmall(..)
            })
        ));
    }

    #[test]
    fn out_of_bounds_index() {
        let mut src = SRC;
        src[1] = 0x02;

        let mut table = DispatchTable::new(settings());
        let stride = table.layout(&fixture()).unwrap().stride;
        let mut dst = vec![0; stride * 2];
        assert!(matches!(
            table.decode(&draw(&src, 2), &mut dst, &mut BoundingBox::default()),
            Err(DispatchError::Decode {
                source: DecodeError::IndexOutOfBounds(crate::descriptor::AttributeSlot::Position, 2)
            })
        ));
    }

    #[test]
    fn reserved_descriptor() {
        let descriptor = Registers::default()
            .position(AttributeMode::Direct, PositionKind::Vec3, CoordsFormat::Reserved0, 0)
            .descriptor();

        let mut table = DispatchTable::new(settings());
        assert!(matches!(
            table.layout(&descriptor),
            Err(DispatchError::Descriptor {
                source: DescriptorError::ReservedCoordsFormat(..)
            })
        ));
        assert!(table.stats().is_empty());
    }

    #[test]
    fn cache_misses_match_specializations() {
        let title = titles::find("GZLE01").unwrap();
        let (descriptor, _) = title.descriptors().next().unwrap();

        let mut specialized = DispatchTable::for_title("GZLE01", settings());
        let mut composed = DispatchTable::for_title(
            "GZLE01",
            Settings {
                precompiled: false,
                ..settings()
            },
        );

        let layout = specialized.layout(&descriptor).unwrap();
        assert_eq!(composed.layout(&descriptor).unwrap(), layout);

        let array: Vec<u8> = (0..=255u8).cycle().take(64 * 64).collect();
        let arrays = Arrays {
            position: ArrayDescriptor::new(&array, 64),
            normal: ArrayDescriptor::new(&array, 64),
            color: [ArrayDescriptor::new(&array, 64); 2],
            tex_coord: [ArrayDescriptor::new(&array, 64); 8],
        };

        let vertex_size = descriptor.vertex_size().unwrap();
        let src: Vec<u8> = (0..vertex_size * 8).map(|i| (i % 48) as u8).collect();
        let draw = Draw {
            descriptor,
            count: 8,
            src: &src,
            arrays,
            params: DecodeParams::from_fractions(3, [4; 8]),
        };

        let mut a = vec![0; layout.stride * 8];
        let mut b = vec![0; layout.stride * 8];
        specialized.decode(&draw, &mut a, &mut BoundingBox::active()).unwrap();
        composed.decode(&draw, &mut b, &mut BoundingBox::active()).unwrap();
        assert_eq!(a, b);

        assert!(specialized.stats()[0].specialized);
        assert!(!composed.stats()[0].specialized);
    }

    #[test]
    fn stats_and_profile() {
        let other = Registers::default()
            .position(AttributeMode::Direct, PositionKind::Vec2, CoordsFormat::I8, 0)
            .descriptor();

        let mut table = DispatchTable::new(settings());
        let stride = table.layout(&other).unwrap().stride;
        let mut dst = vec![0; stride * 4];
        let draw_other = Draw {
            descriptor: other,
            count: 4,
            src: &[0; 8],
            arrays: Arrays::default(),
            params: DecodeParams::default(),
        };

        table.decode(&draw_other, &mut dst, &mut BoundingBox::default()).unwrap();

        let mut dst = vec![0; 28];
        table.decode(&draw(&SRC, 1), &mut dst, &mut BoundingBox::default()).unwrap();

        let stats = table.stats();
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].descriptor, other);
        assert_eq!(stats[0].vertices, 4);
        assert_eq!(stats[1].vertices, 1);

        let profile = table.profile("GALE01");
        assert_eq!(profile.entries.len(), 2);
        assert_eq!(profile.entries[0].vertices, 4);
    }

    #[test]
    fn tier_cap() {
        let table = DispatchTable::new(Settings {
            max_tier: Some(TierLevel::Scalar),
            ..Default::default()
        });
        assert_eq!(table.level(), TierLevel::Scalar);

        let table = DispatchTable::new(Settings::default());
        assert_eq!(table.level(), TierLevel::detect());
    }
}
