use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use std::hint::black_box;
use taktikboard_editor::core::element_at;
use taktikboard_editor::render::build_draw_list;
use taktikboard_editor::{
    Arrow, ArrowKind, Board, EditorOptions, HeadStyle, RenderScene, Selection, Shape, ShapeKind,
    BOARD_HEIGHT, BOARD_WIDTH,
};

fn build_synthetic_board(shape_count: usize, arrow_count: usize) -> Board {
    let mut board = Board::new();

    for index in 0..shape_count {
        let id = (index as u64) + 1;
        let x = (index as f32 * 37.0) % (BOARD_WIDTH - 60.0);
        let y = (index as f32 * 23.0) % (BOARD_HEIGHT - 60.0);
        board.shapes.push(Shape {
            id,
            kind: if index % 2 == 0 {
                ShapeKind::Rectangle
            } else {
                ShapeKind::Circle
            },
            pos: Vec2::new(x, y),
            size: Vec2::new(40.0, 40.0),
            color: [76, 175, 80],
            text: String::new(),
            rotation: 0.0,
            locked: false,
            group_id: None,
        });
    }

    for index in 0..arrow_count {
        let id = (shape_count + index) as u64 + 1;
        let x = (index as f32 * 41.0) % (BOARD_WIDTH - 120.0);
        let y = (index as f32 * 29.0) % (BOARD_HEIGHT - 40.0);
        board.arrows.push(Arrow {
            id,
            start: Vec2::new(x, y),
            end: Vec2::new(x + 100.0, y + 20.0),
            kind: ArrowKind::Straight,
            head_style: HeadStyle::Triangle,
            color: [37, 99, 235],
            curved: false,
            control: None,
            line_width: 2.0,
            rotation: 0.0,
            locked: false,
            group_id: None,
            length: 100.0,
            width: 2.0,
        });
    }

    board
}

fn build_query_points(count: usize) -> Vec<Vec2> {
    (0..count)
        .map(|i| {
            let x = ((i * 13) % 800) as f32 + 0.37;
            let y = ((i * 7) % 500) as f32 + 0.63;
            Vec2::new(x, y)
        })
        .collect()
}

fn bench_hit_testing(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit_testing");

    for &element_count in &[50usize, 500usize] {
        let board = build_synthetic_board(element_count / 2, element_count / 2);
        let query_points = build_query_points(1024);

        group.bench_with_input(
            BenchmarkId::new("element_at_batch", element_count),
            &board,
            |b, board| {
                b.iter(|| {
                    let mut hits = 0usize;
                    for point in &query_points {
                        if element_at(&board.shapes, &board.arrows, black_box(*point)).is_some() {
                            hits += 1;
                        }
                    }
                    black_box(hits)
                })
            },
        );
    }

    group.finish();
}

fn bench_draw_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_list");
    let options = EditorOptions::default();

    for &element_count in &[10usize, 100usize, 500usize] {
        let board = build_synthetic_board(element_count / 2, element_count / 2);

        group.bench_with_input(
            BenchmarkId::new("build", element_count),
            &board,
            |b, board| {
                b.iter(|| {
                    let scene = RenderScene {
                        board: black_box(board),
                        selection: Selection::None,
                        options: &options,
                    };
                    black_box(build_draw_list(&scene).len())
                })
            },
        );
    }

    group.finish();
}

fn bench_png_raster(c: &mut Criterion) {
    let board = build_synthetic_board(25, 25);
    let options = EditorOptions::default();

    c.bench_function("png_raster_800x500", |b| {
        b.iter(|| {
            let scene = RenderScene {
                board: black_box(&board),
                selection: Selection::None,
                options: &options,
            };
            let ops = build_draw_list(&scene);
            let image =
                taktikboard_raster::render_ops(BOARD_WIDTH as u32, BOARD_HEIGHT as u32, &ops);
            black_box(image.dimensions())
        })
    });
}

criterion_group!(core_benches, bench_hit_testing, bench_draw_list, bench_png_raster);
criterion_main!(core_benches);
