use criterion::{criterion_group, criterion_main, Criterion};
use protmap::format::{load_from_file, save_to_file};
use protmap::map::TopDownMap;
use protmap::Protein;
use std::hint::black_box;
use std::time::Duration;

/// Atoms on a loose helix, enough to make the linear scans measurable
fn helix(n_atoms: usize) -> Protein {
    let mut protein = Protein::new("helix");
    for i in 0..n_atoms {
        let t = i as f64 * 100.0_f64.to_radians();
        protein.add_atom(format!("A{i}"), 2.3 * t.cos(), 2.3 * t.sin(), 1.5 * i as f64);
    }
    protein
}

fn criterion_benchmark(c: &mut Criterion) {
    let protein = helix(10_000);
    let mut group = c.benchmark_group("my_group");
    group.measurement_time(Duration::from_secs(6));

    group.bench_function("find nearby atoms", |b| {
        b.iter(|| black_box(protein.find_nearby_atoms(black_box(5_000), 8.0).unwrap()))
    });

    group.bench_function("render top-down map", |b| {
        b.iter(|| black_box(TopDownMap::render(&protein, 50, 20).unwrap()))
    });

    let file = tempfile::NamedTempFile::new().unwrap();
    save_to_file(&protein, file.path()).unwrap();
    group.bench_function("load 10k atoms", |b| {
        b.iter(|| black_box(load_from_file(file.path()).unwrap().size()))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
