use criterion::{
    BenchmarkId, Criterion, Throughput, {criterion_group, criterion_main},
};
use streamhash::{DigestHashFunction, HashFunction, Hasher, Murmur3_128, PrimitiveSink, SipHashFunction};

fn input(size: usize) -> Vec<u8> {
    (0..size).map(|i| i as u8).collect()
}

fn one_shot(c: &mut Criterion) {
    let murmur = Murmur3_128::new(0);
    let sip = SipHashFunction::new(0, 0);
    let sha3 = DigestHashFunction::sha3_256();

    let mut group = c.benchmark_group("hash_bytes");
    for size in [16_usize, 256, 4096].iter() {
        let data = input(*size);
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::new("murmur3_128", size), &data, |b, data| {
            b.iter(|| murmur.hash_bytes(data))
        });
        group.bench_with_input(BenchmarkId::new("siphash24", size), &data, |b, data| {
            b.iter(|| sip.hash_bytes(data))
        });
        group.bench_with_input(BenchmarkId::new("sha3_256", size), &data, |b, data| {
            b.iter(|| sha3.hash_bytes(data))
        });
    }
    group.finish();
}

fn primitive_stream(c: &mut Criterion) {
    let murmur = Murmur3_128::new(0);
    let mut group = c.benchmark_group("put_u64");
    for count in [1_u64, 64, 1024].iter() {
        group.throughput(Throughput::Elements(*count));
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &count| {
            b.iter(|| {
                let mut hasher = murmur.new_hasher();
                for v in 0..count {
                    hasher.put_u64(v);
                }
                hasher.hash()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, one_shot, primitive_stream);
criterion_main!(benches);
