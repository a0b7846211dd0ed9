use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fft_workbench::signal::{fill_demo_complex, fill_demo_real};
use fft_workbench::transform::{Direction, PlanningEffort, TransformBuffer};
use num_complex::Complex;

const EFFORTS: [PlanningEffort; 3] = [PlanningEffort::Estimate, PlanningEffort::Measure, PlanningEffort::Exhaustive];

fn bench_complex(c: &mut Criterion) {
    let mut group = c.benchmark_group("c2c_execute");
    for effort in EFFORTS {
        let mut fft = TransformBuffer::<Complex<f64>, Complex<f64>>::new(1024, Direction::Forward, effort).unwrap();
        fill_demo_complex(fft.input_mut());
        group.bench_function(BenchmarkId::from_parameter(format!("{:?}", effort)), |b| {
            b.iter(|| {
                fft.execute();
                black_box(fft.output()[0]);
            })
        });
    }
    group.finish();
}

fn bench_real(c: &mut Criterion) {
    let mut group = c.benchmark_group("r2c_execute");
    for effort in EFFORTS {
        let mut fft = TransformBuffer::<f64, Complex<f64>>::new(1024, Direction::Forward, effort).unwrap();
        fill_demo_real(fft.input_mut());
        group.bench_function(BenchmarkId::from_parameter(format!("{:?}", effort)), |b| {
            b.iter(|| {
                fft.execute();
                black_box(fft.output()[0]);
            })
        });
    }
    group.finish();
}

fn bench_planning(c: &mut Criterion) {
    let mut group = c.benchmark_group("c2c_plan");
    for effort in EFFORTS {
        group.bench_function(BenchmarkId::from_parameter(format!("{:?}", effort)), |b| {
            b.iter(|| TransformBuffer::<Complex<f64>, Complex<f64>>::new(black_box(1024), Direction::Forward, effort).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_complex, bench_real, bench_planning);
criterion_main!(benches);
