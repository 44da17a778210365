use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sift_parser::{parse, Lexer};

const MODULE: &str = r#"
import { readFile } from "fs/promises";

export async function loadConfigAsync(path: string): Promise<Config | undefined> {
    try {
        const text = await readFile(path, "utf8");
        const parsed = JSON.parse(text);
        return parsed?.config ?? undefined;
    } catch (err) {
        throw new Error(`could not load ${path}: ${err}`);
    }
}

export class Registry<T> {
    private items: Map<string, T> = new Map();

    register(name: string, item: T): void {
        if (this.items.has(name)) {
            return;
        }
        this.items.set(name, item);
    }

    names(): string[] {
        return [...this.items.keys()].filter((n) => n.length > 0);
    }
}
"#;

fn bench_lexer(c: &mut Criterion) {
    c.bench_function("lex_module", |b| {
        b.iter(|| Lexer::new(black_box(MODULE)).tokenize().unwrap());
    });
}

fn bench_parser(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for copies in [1usize, 10, 100] {
        let source = MODULE.repeat(copies);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::new("module", copies), &source, |b, source| {
            b.iter(|| parse(black_box(source)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_lexer, bench_parser);
criterion_main!(benches);
