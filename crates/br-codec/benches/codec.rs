use br_codec::alphabet;
use br_codec::decoder::Decoder;
use br_codec::encoder::Encoder;
use br_codec::mirror::mirror;
use br_codec::notation::{format_notation, parse_notation};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

const SAMPLE: &str = "El Braille se lee con la yema de los dedos. \
    En 1825 Louis Braille publicó su sistema: 63 combinaciones de 6 puntos. \
    ¿Cuántas letras caben en una línea de 40 celdas?";

fn bench_encode(c: &mut Criterion) {
    let encoder = Encoder::new(alphabet::standard().unwrap());
    let text = SAMPLE.repeat(20);
    c.bench_function("encode_4k_chars", |b| {
        b.iter(|| encoder.encode(black_box(&text)));
    });
}

fn bench_decode(c: &mut Criterion) {
    let table = alphabet::standard().unwrap();
    let cells = Encoder::new(table).encode(&SAMPLE.repeat(20)).output;
    let decoder = Decoder::new(table);
    c.bench_function("decode_4k_cells", |b| {
        b.iter(|| decoder.decode(black_box(&cells)));
    });
}

fn bench_notation(c: &mut Criterion) {
    let cells = Encoder::new(alphabet::standard().unwrap())
        .encode(&SAMPLE.replace(' ', ""))
        .output;
    let notation = format_notation(&cells);
    c.bench_function("parse_notation", |b| {
        b.iter(|| parse_notation(black_box(&notation)));
    });
    c.bench_function("mirror", |b| {
        b.iter(|| mirror(black_box(&cells)));
    });
}

criterion_group!(benches, bench_encode, bench_decode, bench_notation);
criterion_main!(benches);
