// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::Path;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use understory_uv_editor::pointer::{PointerButton, PointerButtons};
use understory_uv_editor::{UvEditor, UvEditorConfig};
use understory_uv_mesh::TextureCache;
use understory_uv_mesh::memory::MemoryDocument;

struct NoTextures;

impl TextureCache for NoTextures {
    fn bind(&mut self, _path: &Path) -> u32 {
        0
    }
}

fn triangle_soup(count: u32) -> (MemoryDocument, understory_uv_mesh::memory::BlockId) {
    let uvs = (0..count * 3)
        .map(|i| {
            let t = f64::from(i) / f64::from(count * 3);
            Point::new(t, (t * 7.0).fract())
        })
        .collect();
    let triangles = (0..count).map(|f| [3 * f, 3 * f + 1, 3 * f + 2]).collect();
    let mut doc = MemoryDocument::new("");
    let shape = doc.add_tri_shape(uvs, triangles);
    (doc, shape)
}

fn bench_scene(c: &mut Criterion) {
    let mut group = c.benchmark_group("uv_editor/scene");

    for faces in [256_u32, 4_096, 32_768] {
        let (doc, shape) = triangle_soup(faces);
        let mut editor = UvEditor::new(Size::new(1024.0, 768.0), NoTextures);
        let _ = editor.bind(&doc, shape);
        group.throughput(Throughput::Elements(u64::from(faces)));

        group.bench_with_input(BenchmarkId::new("build", faces), &faces, |b, _| {
            b.iter(|| black_box(editor.scene()));
        });
    }

    group.finish();
}

fn bench_drag(c: &mut Criterion) {
    let (mut doc, shape) = triangle_soup(4_096);
    let config = UvEditorConfig {
        initial_zoom: 1.0,
        ..UvEditorConfig::default()
    };
    let mut editor = UvEditor::with_config(Size::new(512.0, 512.0), NoTextures, config);
    let _ = editor.bind(&doc, shape);
    // The first point sits at UV (0, 0).
    editor.pointer_down(Point::new(0.0, 512.0), PointerButton::Primary);

    let mut flip = false;
    c.bench_function("uv_editor/drag_write_back", |b| {
        b.iter(|| {
            flip = !flip;
            let to = if flip {
                Point::new(1.0, 511.0)
            } else {
                Point::new(0.0, 512.0)
            };
            editor.pointer_move(&mut doc, black_box(to), PointerButtons::PRIMARY)
        });
    });
}

criterion_group!(benches, bench_scene, bench_drag);
criterion_main!(benches);
