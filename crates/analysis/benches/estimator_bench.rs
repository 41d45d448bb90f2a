use aestivo_analysis::{allele_frequencies, linkage_r};
use aestivo_sim::base::RandomStreams;
use aestivo_sim::simulation::initialize;
use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

fn bench_estimators(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimators");
    let n = 30_000;
    let loci = 40;
    let mut streams = RandomStreams::seeded(9);
    let buffer = initialize(&vec![0.4; loci], n, &mut streams).unwrap();

    group.throughput(Throughput::Elements((2 * n * loci) as u64));

    group.bench_function("allele_frequencies", |b| {
        b.iter(|| black_box(allele_frequencies(black_box(&buffer))))
    });

    group.bench_function("linkage_r", |b| {
        b.iter(|| black_box(linkage_r(black_box(&buffer)).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_estimators);
criterion_main!(benches);
