//! Benchmarks for grid placement operations.
//!
//! Measures first-fit packing and placement checks on inventory-sized grids.

use backpack_grid::{can_place, organize, Catalog, GridConfig, ItemType, PlacedItem, Shape};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn catalog() -> Catalog {
    let parse = |rows: &str| Shape::parse(rows).unwrap();
    Catalog::new()
        .with_item(ItemType::new("potion", parse("#\n#")))
        .with_item(ItemType::new("boots", parse("##\n#.")))
        .with_item(ItemType::new("sword", parse("#\n#\n#")))
        .with_item(ItemType::new("shield", Shape::rectangle(2, 2).unwrap()))
        .with_item(ItemType::new("ring", Shape::unit()))
}

fn bag(n: usize) -> Vec<PlacedItem> {
    const TYPES: [&str; 5] = ["potion", "boots", "sword", "shield", "ring"];
    (0..n)
        .map(|i| PlacedItem::new(format!("I{}", i), TYPES[i % TYPES.len()], 0, 0))
        .collect()
}

fn bench_organize(c: &mut Criterion) {
    let mut group = c.benchmark_group("organize");
    let catalog = catalog();

    for &(side, n) in &[(8, 10), (8, 30), (16, 80)] {
        let grid = GridConfig::with_size(side, side);
        let items = bag(n);

        group.bench_with_input(
            BenchmarkId::new(format!("{}x{}", side, side), n),
            &(items, grid),
            |b, (items, grid)| b.iter(|| black_box(organize(black_box(items), &catalog, grid))),
        );
    }
    group.finish();
}

fn bench_can_place(c: &mut Criterion) {
    let catalog = catalog();
    let grid = GridConfig::default();
    let items = organize(&bag(20), &catalog, &grid);
    let shield = Shape::rectangle(2, 2).unwrap();

    c.bench_function("can_place_8x8", |b| {
        b.iter(|| {
            can_place(
                black_box(&shield),
                black_box(6),
                black_box(6),
                &grid,
                &items,
                &catalog,
                None,
            )
        })
    });
}

criterion_group!(benches, bench_organize, bench_can_place);
criterion_main!(benches);
