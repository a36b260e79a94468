//! Input path benchmarks
//!
//! Cost of pulling one 1500-byte frame through the staging buffer at
//! different capacities, with a host that always has data queued.

use core::hint::black_box;
use criterion::{criterion_group, criterion_main, Criterion};
use semislip_syscalls::{HostGateway, InputPath, ResultCode, SyscallRequest};

const FRAME: usize = 1500;

/// Host that fills every READ completely.
struct BusyHost;

impl HostGateway for BusyHost {
    fn call(&self, request: SyscallRequest<'_>) -> ResultCode {
        if let SyscallRequest::Read { buf, .. } = request {
            buf.fill(0xA5);
        }
        0
    }
}

fn pull_frame<const N: usize>(input: &mut InputPath<BusyHost, N>) -> usize {
    let mut sum = 0usize;
    for _ in 0..FRAME {
        if let Some(byte) = input.poll() {
            sum += byte as usize;
        }
    }
    sum
}

fn bench_staging_capacity(c: &mut Criterion) {
    let mut group = c.benchmark_group("input_path_frame");
    group.bench_function("capacity_1", |b| {
        let mut input: InputPath<_, 1> = InputPath::new(BusyHost);
        b.iter(|| black_box(pull_frame(&mut input)))
    });
    group.bench_function("capacity_64", |b| {
        let mut input: InputPath<_, 64> = InputPath::new(BusyHost);
        b.iter(|| black_box(pull_frame(&mut input)))
    });
    group.bench_function("capacity_1500", |b| {
        let mut input: InputPath<_, FRAME> = InputPath::new(BusyHost);
        b.iter(|| black_box(pull_frame(&mut input)))
    });
    group.finish();
}

criterion_group!(input_path_benchmarks, bench_staging_capacity);
criterion_main!(input_path_benchmarks);
