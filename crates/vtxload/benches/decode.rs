use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use vtxload::{
    ArrayDescriptor, Arrays, BoundingBox, DecodeParams, DispatchTable, Draw, Settings, TierLevel,
    titles,
};

const COUNT: u32 = 4096;
const STRIDE: u32 = 64;

fn title(c: &mut Criterion, id: &str) {
    let table = titles::find(id).unwrap();
    let (descriptor, _) = table.descriptors().next().unwrap();

    // room for every 16 bit index
    let array: Vec<u8> = (0..=255u8)
        .cycle()
        .take(0x10000 * STRIDE as usize)
        .collect();
    let arrays = Arrays {
        position: ArrayDescriptor::new(&array, STRIDE),
        normal: ArrayDescriptor::new(&array, STRIDE),
        color: [ArrayDescriptor::new(&array, STRIDE); 2],
        tex_coord: [ArrayDescriptor::new(&array, STRIDE); 8],
    };

    let vertex_size = descriptor.vertex_size().unwrap();
    let src: Vec<u8> = (0..vertex_size * COUNT as usize)
        .map(|i| (i * 7 % 200) as u8)
        .collect();

    let draw = Draw {
        descriptor,
        count: COUNT,
        src: &src,
        arrays,
        params: DecodeParams::from_fractions(6, [8; 8]),
    };

    let mut group = c.benchmark_group(format!("{id} {}", descriptor.name()));
    group.throughput(Throughput::Elements(COUNT as u64));

    let levels = [TierLevel::Scalar, TierLevel::Ssse3, TierLevel::Sse41];
    for level in levels.into_iter().filter(|l| l.supported()) {
        for precompiled in [true, false] {
            let mut table = DispatchTable::for_title(
                id,
                Settings {
                    max_tier: Some(level),
                    precompiled,
                    record_stats: false,
                },
            );

            let stride = table.layout(&descriptor).unwrap().stride;
            let mut dst = vec![0; stride * COUNT as usize];
            let mut bbox = BoundingBox::active();

            let kind = if precompiled { "Specialized" } else { "Composed" };
            group.bench_function(BenchmarkId::new(kind, level), |b| {
                b.iter(|| {
                    table
                        .decode(black_box(&draw), &mut dst, &mut bbox)
                        .unwrap()
                })
            });
        }
    }

    group.finish();
}

fn gzle01(c: &mut Criterion) {
    title(c, "GZLE01");
}

fn gmse01(c: &mut Criterion) {
    title(c, "GMSE01");
}

criterion_group!(benches, gzle01, gmse01);
criterion_main!(benches);
