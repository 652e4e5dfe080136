//! Criterion benchmark untuk Ring Queue
//!
//! Run dengan: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use ringq::RingQueue;

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring_queue");
    group.throughput(Throughput::Elements(1));

    // Benchmark push tanpa grow (kapasitas sudah di-reserve)
    group.bench_function("push_reserved", |b| {
        b.iter_batched(
            || RingQueue::<u64>::with_capacity(65536),
            |mut rq| {
                for i in 0..1024u64 {
                    rq.push(black_box(i));
                }
                rq
            },
            BatchSize::SmallInput,
        );
    });

    // Benchmark pop
    group.bench_function("pop", |b| {
        let mut rq: RingQueue<u64> = RingQueue::with_capacity(65536);
        // Pre-fill
        for i in 0..32768 {
            rq.push(i);
        }
        b.iter(|| {
            if let Some(v) = rq.pop() {
                rq.push(black_box(v));
            }
        });
    });

    // Benchmark push+pop cycle (wrap terus-menerus tanpa grow)
    group.bench_function("push_pop_cycle", |b| {
        let mut rq: RingQueue<u64> = RingQueue::new();
        let mut i = 0u64;
        b.iter(|| {
            rq.push(black_box(i));
            let _ = rq.pop();
            i = i.wrapping_add(1);
        });
    });

    // Benchmark peek acak
    group.bench_function("peek", |b| {
        let rq: RingQueue<u64> = (0..4096).collect();
        let mut i = 0isize;
        b.iter(|| {
            black_box(rq.peek(black_box(i % 4096 - 2048)));
            i = i.wrapping_add(7);
        });
    });

    group.finish();
}

fn bench_growth(c: &mut Criterion) {
    let mut group = c.benchmark_group("growth");

    // Grow dari kapasitas minimum, dengan dan tanpa wrap
    for batch_size in [100, 1000, 10000].iter() {
        group.throughput(Throughput::Elements(*batch_size as u64));
        group.bench_function(format!("grow_{}", batch_size), |b| {
            b.iter(|| {
                let mut rq: RingQueue<u64> = RingQueue::new();
                for i in 0..*batch_size {
                    rq.push(black_box(i as u64));
                }
                rq
            });
        });
        group.bench_function(format!("grow_wrapped_{}", batch_size), |b| {
            b.iter(|| {
                let mut rq: RingQueue<u64> = RingQueue::new();
                for i in 0..*batch_size {
                    rq.push(black_box(i as u64));
                    if i % 3 == 0 {
                        black_box(rq.pop());
                    }
                }
                rq
            });
        });
    }

    group.bench_function("shrink_wrapped_4096", |b| {
        b.iter_batched(
            || {
                let mut rq: RingQueue<u64> = RingQueue::with_capacity(8191);
                for i in 0..6000 {
                    rq.push(i);
                }
                for _ in 0..5000 {
                    rq.pop();
                }
                for i in 0..3096 {
                    rq.push(i);
                }
                rq
            },
            |mut rq| {
                rq.shrink();
                rq
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_push_pop, bench_growth);
criterion_main!(benches);
