use criterion::{black_box, criterion_group, criterion_main, Criterion};
use horario::normalize_reader;
use horario::normalizer::rewrite_line;
use std::io::Cursor;

const LINES: [&str; 4] = [
    "La reunión es a las 5h30m y la cena a las 25h10m.",
    "Nos vemos a las 12 de la mañana y volvemos a las 9 de la tarde.",
    "La clase empieza a las 8 en punto y termina a las 10 menos cuarto.",
    "Una línea sin ninguna expresión horaria que reconocer.",
];

fn bench_rewrite_line(c: &mut Criterion) {
    c.bench_function("rewrite_line", |b| {
        b.iter(|| {
            for line in LINES {
                black_box(rewrite_line(black_box(line)));
            }
        })
    });
}

fn bench_normalize_reader(c: &mut Criterion) {
    let text = format!("{}\n", LINES.join("\n")).repeat(250);
    c.bench_function("normalize_reader_1000_lines", |b| {
        b.iter(|| {
            let mut output = Vec::with_capacity(text.len());
            normalize_reader(Cursor::new(text.as_bytes()), &mut output).unwrap();
            black_box(output)
        })
    });
}

criterion_group!(benches, bench_rewrite_line, bench_normalize_reader);
criterion_main!(benches);
