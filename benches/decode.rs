//! Benchmarks for polynomial arithmetic and syndrome decoding

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mceliece_algorithms::{
    find_roots_brute, find_roots_trace, goppa_error_locator, Gf2m, Poly, SqrtTable,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

fn random_poly(degree: usize, fld: &Gf2m, rng: &mut ChaCha20Rng) -> Poly {
    let mut coeffs: Vec<u16> = (0..degree).map(|_| rng.gen_range(0..fld.n() as u16)).collect();
    coeffs.push(1);
    Poly::from_coeffs(&coeffs)
}

fn locator_from_roots(roots: &[u16], fld: &Gf2m) -> Poly {
    let mut sigma = Poly::one();
    for &r in roots {
        sigma = sigma.mul(&Poly::from_coeffs(&[r, 1]), fld);
    }
    sigma
}

fn bench_poly_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("poly");
    let fld = Gf2m::new(11).unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    let a = random_poly(32, &fld, &mut rng);
    let b = random_poly(32, &fld, &mut rng);
    let m = random_poly(16, &fld, &mut rng);

    group.bench_function("mul_32x32", |bencher| {
        bencher.iter(|| black_box(&a).mul(black_box(&b), &fld))
    });

    group.bench_function("divmod_64_by_16", |bencher| {
        let p = a.mul(&b, &fld);
        bencher.iter(|| black_box(&p).divmod(black_box(&m), &fld).unwrap())
    });

    group.bench_function("gcd_32_32", |bencher| {
        bencher.iter(|| black_box(&a).gcd(black_box(&b), &fld).unwrap())
    });
    group.finish();
}

fn bench_root_finders(c: &mut Criterion) {
    let mut group = c.benchmark_group("roots");
    let fld = Gf2m::new(8).unwrap();
    let roots: Vec<u16> = (1..=16).collect();
    let sigma = locator_from_roots(&roots, &fld);

    group.bench_function("brute_t16_gf256", |bencher| {
        bencher.iter(|| find_roots_brute(black_box(&sigma), &fld).unwrap())
    });

    group.bench_function("trace_t16_gf256", |bencher| {
        bencher.iter(|| find_roots_trace(black_box(&sigma), &fld).unwrap())
    });
    group.finish();
}

fn bench_patterson(c: &mut Criterion) {
    let fld = Gf2m::new(5).unwrap();
    let goppa = Poly::from_coeffs(&[1, 1, 1]);
    let table = SqrtTable::new(&goppa, &fld).unwrap();

    let mut syndrome = Poly::default();
    for alpha in [3u16, 20] {
        let inv = Poly::from_coeffs(&[alpha, 1]).inv_mod(&goppa, &fld).unwrap();
        syndrome.add(&inv, &fld);
    }

    c.bench_function("patterson_t2_gf32", |bencher| {
        bencher.iter(|| goppa_error_locator(black_box(&syndrome), &fld, &goppa, &table).unwrap())
    });
}

criterion_group!(
    benches,
    bench_poly_arithmetic,
    bench_root_finders,
    bench_patterson
);
criterion_main!(benches);
