//! Performance benchmarks for rove

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rove::{DirectoryWalker, WalkerConfig};
use std::fs;
use tempfile::TempDir;

/// Build a tree `depth` levels deep with `fan_out` files and `fan_out`
/// subdirectories per level.
fn create_tree(depth: usize, fan_out: usize) -> TempDir {
    let dir = TempDir::new().unwrap();
    let mut level = vec![dir.path().to_path_buf()];

    for d in 0..depth {
        let mut next = Vec::new();
        for parent in &level {
            for i in 0..fan_out {
                let file = parent.join(format!("file_{}_{}.txt", d, i));
                fs::write(&file, "benchmark content").unwrap();
                let sub = parent.join(format!("dir_{}_{}", d, i));
                fs::create_dir(&sub).unwrap();
                next.push(sub);
            }
        }
        level = next;
    }

    dir
}

fn create_flat_dir(file_count: usize) -> TempDir {
    let dir = TempDir::new().unwrap();
    for i in 0..file_count {
        fs::write(dir.path().join(format!("file_{}.txt", i)), "x").unwrap();
    }
    dir
}

fn bench_list_children(c: &mut Criterion) {
    let walker = DirectoryWalker::default();

    let mut group = c.benchmark_group("list_children");

    let small = create_flat_dir(10);
    group.bench_function("flat_10_files", |b| {
        b.iter(|| {
            walker
                .list_children(black_box(small.path()))
                .unwrap()
                .count()
        })
    });

    let medium = create_flat_dir(100);
    group.bench_function("flat_100_files", |b| {
        b.iter(|| {
            walker
                .list_children(black_box(medium.path()))
                .unwrap()
                .count()
        })
    });

    let large = create_flat_dir(1000);
    group.bench_function("flat_1000_files", |b| {
        b.iter(|| {
            walker
                .list_children(black_box(large.path()))
                .unwrap()
                .count()
        })
    });

    group.finish();
}

fn bench_search_tree(c: &mut Criterion) {
    let walker = DirectoryWalker::default();

    let mut group = c.benchmark_group("search_tree");

    let shallow = create_tree(2, 5);
    group.bench_function("shallow_wide", |b| {
        b.iter(|| walker.search_tree(black_box(shallow.path()), black_box("file_1_3.txt")))
    });

    let deep = create_tree(5, 2);
    group.bench_function("deep_narrow", |b| {
        b.iter(|| walker.search_tree(black_box(deep.path()), black_box("file_4_1.txt")))
    });

    group.bench_function("deep_narrow_no_match", |b| {
        b.iter(|| walker.search_tree(black_box(deep.path()), black_box("absent.txt")))
    });

    group.finish();
}

fn bench_search_with_depth_bound(c: &mut Criterion) {
    let deep = create_tree(5, 2);

    let bounded = DirectoryWalker::new(WalkerConfig {
        max_depth: Some(2),
        follow_links: false,
    });

    c.bench_function("search_depth_bounded", |b| {
        b.iter(|| bounded.search_tree(black_box(deep.path()), black_box("file_1_0.txt")))
    });
}

criterion_group!(
    benches,
    bench_list_children,
    bench_search_tree,
    bench_search_with_depth_bound,
);
criterion_main!(benches);
