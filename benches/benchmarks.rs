//! Performance benchmarks for dirtree

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use dirtree::test_utils::TestTree;
use dirtree::tree::compare_names;
use dirtree::{OutputMode, PlainFormatter, RenderRequest, TreeWalker, WalkerConfig};

fn create_wide_tree(file_count: usize) -> TestTree {
    let tree = TestTree::new("wide");
    for i in 0..file_count {
        tree.add_file(&format!("File_{}.txt", i), "");
    }
    tree
}

fn create_nested_tree(dirs: usize, files_per_dir: usize) -> TestTree {
    let tree = TestTree::new("nested");
    for d in 0..dirs {
        for f in 0..files_per_dir {
            tree.add_file(&format!("dir_{}/sub_{}/file_{}.rs", d, d % 3, f), "");
        }
    }
    tree
}

fn bench_compare_names(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare_names");

    group.bench_function("ascii_mixed_case", |b| {
        b.iter(|| compare_names(black_box("README.md"), black_box("readme.txt")))
    });

    group.bench_function("unicode", |b| {
        b.iter(|| compare_names(black_box("Éclair.md"), black_box("éclair.md")))
    });

    group.finish();
}

fn bench_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk");
    let walker = TreeWalker::new(WalkerConfig::default());

    // One directory with many entries: dominated by sorting
    let wide = create_wide_tree(1000);
    group.bench_function("wide_1000_files", |b| {
        b.iter(|| {
            let mut out = PlainFormatter::new(Vec::with_capacity(64 * 1024));
            walker.walk(black_box(wide.path()), &mut out).unwrap()
        })
    });

    // Many small directories: dominated by listing
    let nested = create_nested_tree(50, 10);
    group.bench_function("nested_50_dirs", |b| {
        b.iter(|| {
            let mut out = PlainFormatter::new(Vec::with_capacity(64 * 1024));
            walker.walk(black_box(nested.path()), &mut out).unwrap()
        })
    });

    group.finish();
}

fn bench_dual_sink(c: &mut Criterion) {
    let mut group = c.benchmark_group("dual_sink");
    let tree = create_nested_tree(50, 10);
    let out_path = tree.workdir().join("bench_tree.txt");

    for (name, mode) in [("file_only", OutputMode::FileOnly), ("both", OutputMode::Both)] {
        let request = RenderRequest::new(
            tree.path().to_path_buf(),
            mode,
            WalkerConfig::default(),
            Default::default(),
        )
        .with_output_path(&out_path);

        group.bench_function(name, |b| {
            b.iter(|| {
                let mut console = PlainFormatter::new(Vec::new());
                dirtree::run_with_console(black_box(&request), &mut console)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compare_names, bench_walk, bench_dual_sink);
criterion_main!(benches);
