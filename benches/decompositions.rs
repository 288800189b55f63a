use criterion::{criterion_group, criterion_main, Criterion};
use zmatrix::{linalg, Complex, Matrix};

// ---------------------------------------------------------------------------
// Helpers: deterministic test matrices
// ---------------------------------------------------------------------------

fn general(n: usize) -> Matrix {
    Matrix::from_fn(n, n, |i, j| {
        Complex::from(((i + 1) * (j + 1)) as f64 + if i == j { 10.0 } else { 0.0 })
    })
}

fn symmetric(n: usize) -> Matrix {
    let a = general(n);
    a.try_mul(&a.transpose()).unwrap()
}

fn complex(n: usize) -> Matrix {
    Matrix::from_fn(n, n, |i, j| Complex::new((i * n + j + 1) as f64, (i + j) as f64 - 2.0))
}

const SIZES: [usize; 3] = [4, 10, 30];

// ---------------------------------------------------------------------------
// Matrix multiply
// ---------------------------------------------------------------------------

fn matmul(c: &mut Criterion) {
    let mut g = c.benchmark_group("matmul");

    for n in SIZES {
        g.bench_function(format!("real_{n}"), |b| {
            let a = general(n);
            let m = symmetric(n);
            b.iter(|| std::hint::black_box(&a) * std::hint::black_box(&m))
        });

        g.bench_function(format!("complex_{n}"), |b| {
            let a = complex(n);
            let m = complex(n).t();
            b.iter(|| std::hint::black_box(&a) * std::hint::black_box(&m))
        });
    }

    g.finish();
}

// ---------------------------------------------------------------------------
// Decompositions
// ---------------------------------------------------------------------------

fn lup(c: &mut Criterion) {
    let mut g = c.benchmark_group("lup");
    for n in SIZES {
        g.bench_function(format!("{n}x{n}"), |b| {
            let a = general(n);
            b.iter(|| linalg::lup(std::hint::black_box(&a)))
        });
    }
    g.finish();
}

fn det_and_solve(c: &mut Criterion) {
    let mut g = c.benchmark_group("solve");
    for n in SIZES {
        let a = general(n);
        let rhs = Matrix::from_fn(n, 1, |i, _| Complex::from(i as f64 + 1.0));
        g.bench_function(format!("det_{n}"), |b| {
            b.iter(|| linalg::det(std::hint::black_box(&a)))
        });
        g.bench_function(format!("linsolve_{n}"), |b| {
            b.iter(|| linalg::linsolve(std::hint::black_box(&a), std::hint::black_box(&rhs)))
        });
        g.bench_function(format!("inv_{n}"), |b| {
            b.iter(|| linalg::inv(std::hint::black_box(&a)))
        });
    }
    g.finish();
}

fn qr(c: &mut Criterion) {
    let mut g = c.benchmark_group("qr");
    for n in SIZES {
        g.bench_function(format!("real_{n}"), |b| {
            let a = general(n);
            b.iter(|| linalg::qr(std::hint::black_box(&a)))
        });
        g.bench_function(format!("complex_{n}"), |b| {
            let a = complex(n);
            b.iter(|| linalg::qr(std::hint::black_box(&a)))
        });
    }
    // rank one forces basis completion
    g.bench_function("rank_one_10", |b| {
        let a = Matrix::ones(10, 10);
        b.iter(|| linalg::qr(std::hint::black_box(&a)))
    });
    g.finish();
}

fn eig(c: &mut Criterion) {
    let mut g = c.benchmark_group("eig");
    for n in SIZES {
        g.bench_function(format!("{n}x{n}"), |b| {
            let a = symmetric(n);
            b.iter(|| linalg::eig(std::hint::black_box(&a)))
        });
    }
    g.finish();
}

fn svd(c: &mut Criterion) {
    let mut g = c.benchmark_group("svd");
    for n in SIZES {
        g.bench_function(format!("{n}x{n}"), |b| {
            let a = general(n);
            b.iter(|| linalg::svd(std::hint::black_box(&a)))
        });
    }
    g.bench_function("pinv_tall_20x5", |b| {
        let a = Matrix::from_fn(20, 5, |i, j| Complex::from((i * 5 + j) as f64 % 7.0 + if i == j { 3.0 } else { 0.0 }));
        b.iter(|| linalg::pinv(std::hint::black_box(&a)))
    });
    g.finish();
}

criterion_group!(benches, matmul, lup, det_and_solve, qr, eig, svd);
criterion_main!(benches);
