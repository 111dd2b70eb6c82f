//! Insertion Benchmark
//!
//! Measures the cost of splicing declarations into files of growing size.
//! Every edit re-parses the whole file, so cost grows with the file length.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use tsedit::{ClassStructure, FunctionStructure, SourceFile, StatementedStructure};

// =============================================================================
// Test Sources
// =============================================================================

fn generated_source(classes: usize) -> String {
    let mut source = String::new();
    for i in 0..classes {
        source.push_str(&format!(
            "export class Service{i} {{\n    run(value: number): number {{\n        return value * {i};\n    }}\n}}\n\n"
        ));
    }
    source
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_add_class(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_class");
    for classes in [10usize, 100, 500] {
        let source = generated_source(classes);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(classes), &source, |b, source| {
            b.iter(|| {
                let mut file = SourceFile::new("bench.ts", source.as_str());
                let class = file
                    .statements()
                    .add_class(&ClassStructure::new("Added"))
                    .unwrap();
                black_box(class);
            });
        });
    }
    group.finish();
}

fn bench_insert_and_remove_in_body(c: &mut Criterion) {
    let source = "function main() {\n}\n";
    c.bench_function("insert_remove_function_body", |b| {
        b.iter(|| {
            let mut file = SourceFile::new("bench.ts", source);
            let main = file.statements().get_statements().unwrap()[0];
            let mut body = file.statemented(main).unwrap();
            for i in 0..10 {
                body.add_statements(format!("step{i}();")).unwrap();
            }
            body.remove_statements((0, 9)).unwrap();
            black_box(file.text().len());
        });
    });
}

fn bench_set(c: &mut Criterion) {
    let source = generated_source(50);
    let structure = StatementedStructure {
        functions: Some((0..10).map(|i| FunctionStructure::new(format!("f{i}"))).collect()),
        ..StatementedStructure::default()
    };
    c.bench_function("set_functions", |b| {
        b.iter(|| {
            let mut file = SourceFile::new("bench.ts", source.as_str());
            file.statements().set(&structure).unwrap();
            black_box(file.text().len());
        });
    });
}

criterion_group!(
    benches,
    bench_add_class,
    bench_insert_and_remove_in_body,
    bench_set
);
criterion_main!(benches);
