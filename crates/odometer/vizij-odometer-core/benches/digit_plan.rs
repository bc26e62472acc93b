use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vizij_odometer_core::{compute_digit_plan, Config, CurrentPosition, Odometer, RawValue};

fn bench_digit_plan(c: &mut Criterion) {
    let from = RawValue::from(1_999_999.5);
    let to = RawValue::from(2_000_000.125);

    c.bench_function("compute_digit_plan/8_digits", |b| {
        b.iter(|| compute_digit_plan(black_box(Some(&from)), black_box(Some(&to)), true, false))
    });

    c.bench_function("compute_digit_plan/reverse", |b| {
        b.iter(|| compute_digit_plan(black_box(Some(&from)), black_box(Some(&to)), true, true))
    });

    let mut odo = Odometer::new(Config::default());
    odo.set_values(Some(&from), Some(&to));
    c.bench_function("odometer/frame", |b| {
        b.iter(|| odo.frame(black_box(CurrentPosition::To)))
    });
}

criterion_group!(benches, bench_digit_plan);
criterion_main!(benches);
