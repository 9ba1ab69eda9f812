use criterion::{Criterion, criterion_group, criterion_main};
use mailsort_engine::allow_list::AllowList;
use mailsort_engine::classifier::Classifier;
use mailsort_engine::output::MemoryOpener;
use mailsort_engine::processor::process_lines;
use mailsort_engine::router::OutputRegistry;
use mailsort_engine::stats::LineCounts;
use std::hint::black_box;
use std::io::Cursor;
use std::path::Path;

fn sample_input(lines: usize) -> Vec<u8> {
    let hosts = ["gmail.com", "yahoo.co.uk", "example.org", "mail.ru", "corp.local"];
    let mut buf = Vec::new();
    for i in 0..lines {
        let host = hosts[i % hosts.len()];
        if i % 7 == 0 {
            buf.extend_from_slice(b"garbage line without address\n");
        } else {
            buf.extend_from_slice(format!("user{i}@{host}:password{i}\n").as_bytes());
        }
    }
    buf
}

fn benchmark_classify(c: &mut Criterion) {
    let classifier = Classifier::new().unwrap();
    c.bench_function("classify_match", |b| {
        b.iter(|| classifier.classify(black_box(b"id=1 john.doe@gmail.com:secret")));
    });
    c.bench_function("classify_miss", |b| {
        b.iter(|| classifier.classify(black_box(b"nothing to see here, move along")));
    });
}

fn benchmark_pipeline(c: &mut Criterion) {
    let input = sample_input(10_000);
    let classifier = Classifier::new().unwrap();
    c.bench_function("route_10k_lines", |b| {
        b.iter(|| {
            let mut registry =
                OutputRegistry::open(MemoryOpener::new(), AllowList::builtin()).unwrap();
            let mut counts = LineCounts::default();
            let mut reader = Cursor::new(black_box(&input));
            process_lines(&mut reader, Path::new("bench"), &classifier, &mut registry, &mut counts)
                .unwrap();
            counts
        });
    });
}

criterion_group!(benches, benchmark_classify, benchmark_pipeline);
criterion_main!(benches);
