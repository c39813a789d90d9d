use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use docrecord::{from_str, to_string, Alias, Case, Function, Module, TypeDecl, Version};

fn module(index: usize, declarations: usize) -> Module {
    let mut module = Module::new(format!("Module{}", index));

    for i in 0..declarations {
        module.aliases.push(
            Alias::new(format!("Alias{}", i), "{ x : Int, y : Int }")
                .with_args(["a"])
                .with_comment(" A record alias. "),
        );
        module.types.push(
            TypeDecl::new(format!("Type{}", i))
                .with_case(Case::new("First", ["Int", "String"]))
                .with_case(Case::nullary("Second"))
                .with_case(Case::new("Third", ["(List a)"]))
                .with_comment(" A union. "),
        );
        module.values.push(
            Function::new(format!("fn{}", i), "Int -> String -> Maybe a")
                .with_comment(" Does something useful. "),
        );
    }

    module
}

fn benchmark_render_module(c: &mut Criterion) {
    let module = module(0, 20);

    c.bench_function("render_module", |b| b.iter(|| to_string(black_box(&module))));
}

fn benchmark_render_version(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_version");

    for size in [1, 10, 50].iter() {
        let version = Version::new("1.0.0", (0..*size).map(|i| module(i, 20)).collect());

        group.bench_with_input(BenchmarkId::from_parameter(size), &version, |b, version| {
            b.iter(|| to_string(black_box(version)))
        });
    }

    group.finish();
}

fn benchmark_parse_version(c: &mut Criterion) {
    let version = Version::new("1.0.0", (0..10).map(|i| module(i, 20)).collect());
    let text = to_string(&version).unwrap();

    c.bench_function("parse_version", |b| b.iter(|| from_str(black_box(&text))));
}

criterion_group!(
    benches,
    benchmark_render_module,
    benchmark_render_version,
    benchmark_parse_version
);
criterion_main!(benches);
