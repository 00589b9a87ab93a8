use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use linear_collections::{BoundedQueue, DoublyLinkedList, SinglyLinkedList};
use rand::Rng;

const SIZES: [usize; 3] = [100, 1_000, 10_000];

fn append_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");
    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("singly", size), &size, |b, &size| {
            b.iter(|| {
                let mut list = SinglyLinkedList::with_capacity(size);
                for i in 0..size {
                    list.add(black_box(i));
                }
                list
            });
        });
        group.bench_with_input(BenchmarkId::new("doubly", size), &size, |b, &size| {
            b.iter(|| {
                let mut list = DoublyLinkedList::with_capacity(size);
                for i in 0..size {
                    list.add(black_box(i));
                }
                list
            });
        });
    }
    group.finish();
}

fn random_index_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_index");
    let mut rng = rand::rng();

    for size in SIZES {
        let indices: Vec<usize> = (0..256).map(|_| rng.random_range(0..size)).collect();
        let list: SinglyLinkedList<usize> = (0..size).collect();

        group.throughput(Throughput::Elements(indices.len() as u64));
        group.bench_with_input(BenchmarkId::new("get", size), &indices, |b, indices| {
            b.iter(|| {
                for &index in indices {
                    let _ = black_box(list.get(index));
                }
            });
        });
    }
    group.finish();
}

fn cursor_filter_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("cursor_filter");
    let mut rng = rand::rng();

    for size in SIZES {
        let values: Vec<u32> = (0..size).map(|_| rng.random()).collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("doubly", size), &values, |b, values| {
            b.iter_with_setup(
                || values.iter().copied().collect::<DoublyLinkedList<u32>>(),
                |mut list| {
                    let mut cursor = list.cursor();
                    while cursor.has_next() {
                        if let Ok(value) = cursor.move_next() {
                            if *value % 2 == 0 {
                                let _ = cursor.remove();
                            }
                        }
                    }
                    list
                },
            );
        });
    }
    group.finish();
}

fn unzip_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("unzip");
    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("singly", size), &size, |b, &size| {
            b.iter_with_setup(
                || (0..size).collect::<SinglyLinkedList<usize>>(),
                |mut list| {
                    list.unzip();
                    list
                },
            );
        });
        group.bench_with_input(BenchmarkId::new("doubly", size), &size, |b, &size| {
            b.iter_with_setup(
                || (0..size).collect::<DoublyLinkedList<usize>>(),
                |mut list| {
                    list.unzip();
                    list
                },
            );
        });
    }
    group.finish();
}

fn queue_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("bounded_queue");
    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64 * 2));
        group.bench_with_input(BenchmarkId::new("offer_poll", size), &size, |b, &size| {
            let mut queue = BoundedQueue::new(64);
            b.iter(|| {
                for i in 0..size {
                    if queue.offer(black_box(i)).is_err() {
                        black_box(queue.poll());
                        let _ = queue.offer(i);
                    }
                }
                queue.clear();
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    append_benchmark,
    random_index_benchmark,
    cursor_filter_benchmark,
    unzip_benchmark,
    queue_benchmark
);
criterion_main!(benches);
