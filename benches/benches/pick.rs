// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::Path;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use understory_uv_editor::pointer::PointerButton;
use understory_uv_editor::{UvEditor, UvEditorConfig};
use understory_uv_mesh::TextureCache;
use understory_uv_mesh::memory::{BlockId, MemoryDocument};
use understory_uv_pick::{PickName, PickResolver};

struct NoTextures;

impl TextureCache for NoTextures {
    fn bind(&mut self, _path: &Path) -> u32 {
        0
    }
}

/// A `side` x `side` lattice over the unit square, one strip per row pair.
fn lattice(side: u32) -> (MemoryDocument, BlockId) {
    let step = 1.0 / f64::from(side - 1);
    let uvs = (0..side * side)
        .map(|i| Point::new(f64::from(i % side) * step, f64::from(i / side) * step))
        .collect();
    let strips = (0..side - 1)
        .map(|row| {
            (0..side)
                .flat_map(|col| [row * side + col, (row + 1) * side + col])
                .collect()
        })
        .collect();
    let mut doc = MemoryDocument::new("");
    let shape = doc.add_tri_strips(uvs, strips);
    (doc, shape)
}

fn bench_pick_lattice(c: &mut Criterion) {
    let mut group = c.benchmark_group("uv_pick/editor");

    for side in [16_u32, 64, 256] {
        let (doc, shape) = lattice(side);
        let config = UvEditorConfig {
            initial_zoom: 1.0,
            ..UvEditorConfig::default()
        };
        let mut editor = UvEditor::with_config(Size::new(512.0, 512.0), NoTextures, config);
        let _ = editor.bind(&doc, shape);
        group.throughput(Throughput::Elements(u64::from(side * side)));

        group.bench_with_input(BenchmarkId::new("hits_at", side), &side, |b, _| {
            b.iter(|| black_box(editor.hits_at(black_box(Point::new(256.0, 256.0)))));
        });

        group.bench_with_input(BenchmarkId::new("click", side), &side, |b, _| {
            b.iter(|| {
                editor.pointer_down(black_box(Point::new(256.0, 256.0)), PointerButton::Primary)
            });
        });
    }

    group.finish();
}

fn bench_resolver_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("uv_pick/resolver");

    for len in [1_024_usize, 16_384, 131_072] {
        let points: Vec<Point> = (0..len)
            .map(|i| Point::new((i % 512) as f64, (i / 512) as f64))
            .collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("points", len), &points, |b, points| {
            let resolver = PickResolver::default();
            b.iter(|| {
                resolver.pick_at(black_box(Point::new(100.0, 100.0)), |pass| {
                    for (i, pt) in points.iter().enumerate() {
                        if let Some(name) = PickName::new(i + 1) {
                            pass.point(name, *pt);
                        }
                    }
                })
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pick_lattice, bench_resolver_points);
criterion_main!(benches);
