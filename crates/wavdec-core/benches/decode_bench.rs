//! Benchmarks for in-memory WAV decoding across sample encodings.

use std::io::Cursor;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use wavdec_core::{decode_into, decode_to_vec, probe, DecodeBuffer, DecoderConfig};

/// One second of stereo audio at 48 kHz.
const FRAMES: usize = 48000;

/// Build a stereo 48 kHz WAV in memory with the given integer bit depth,
/// or 32-bit float when `bits` is `None`.
fn generate_wav(bits: Option<u16>) -> Vec<u8> {
    let spec = match bits {
        Some(bits) => hound::WavSpec {
            channels: 2,
            sample_rate: 48000,
            bits_per_sample: bits,
            sample_format: hound::SampleFormat::Int,
        },
        None => hound::WavSpec {
            channels: 2,
            sample_rate: 48000,
            bits_per_sample: 32,
            sample_format: hound::SampleFormat::Float,
        },
    };

    let mut bytes = Vec::new();
    let mut writer = hound::WavWriter::new(Cursor::new(&mut bytes), spec).unwrap();
    for i in 0..FRAMES * 2 {
        let sample = (2.0 * std::f32::consts::PI * 440.0 * i as f32 / 48000.0).sin() * 0.5;
        match bits {
            Some(bits) => {
                let full_scale = (1u64 << (bits - 1)) as f32;
                writer.write_sample((sample * full_scale) as i32).unwrap();
            }
            None => writer.write_sample(sample).unwrap(),
        }
    }
    writer.finalize().unwrap();
    bytes
}

fn bench_decode_into(c: &mut Criterion) {
    let mut out = vec![0.0_f32; wavdec_core::DEFAULT_CAPACITY];

    let mut group = c.benchmark_group("decode_into");
    for (label, bits) in [
        ("i8", Some(8)),
        ("i16", Some(16)),
        ("i24", Some(24)),
        ("f32", None),
    ] {
        let wav = generate_wav(bits);
        group.bench_with_input(BenchmarkId::new("encoding", label), &wav, |b, wav| {
            b.iter(|| {
                let format = decode_into(black_box(wav), &mut out).unwrap();
                black_box(format);
            });
        });
    }
    group.finish();
}

fn bench_buffer_vs_vec(c: &mut Criterion) {
    let wav = generate_wav(Some(16));
    let config = DecoderConfig::default();
    let mut arena = DecodeBuffer::from_config(&config);

    let mut group = c.benchmark_group("ownership");
    group.bench_function("arena", |b| {
        b.iter(|| {
            let audio = arena.decode(black_box(&wav)).unwrap();
            black_box(audio.samples().len());
        });
    });
    group.bench_function("per_call_vec", |b| {
        b.iter(|| {
            let (_, samples) = decode_to_vec(black_box(&wav), &config).unwrap();
            black_box(samples);
        });
    });
    group.finish();
}

fn bench_probe(c: &mut Criterion) {
    let wav = generate_wav(Some(16));
    c.bench_function("probe_header", |b| {
        b.iter(|| black_box(probe(black_box(&wav)).unwrap()));
    });
}

criterion_group!(benches, bench_decode_into, bench_buffer_vs_vec, bench_probe);
criterion_main!(benches);
