use bls12_381::Scalar;
use criterion::{criterion_group, criterion_main, Criterion};
use peerdas_kzg::{
    constants::{BYTES_PER_BLOB, FIELD_ELEMENTS_PER_BLOB},
    DASContext, TrustedSetup,
};

fn das_context() -> DASContext {
    let trusted_setup = TrustedSetup::insecure_ephemeral(FIELD_ELEMENTS_PER_BLOB, 65);
    #[cfg(feature = "multithreaded")]
    {
        DASContext::with_threads(&trusted_setup, peerdas_kzg::ThreadCount::SensibleDefault)
    }
    #[cfg(not(feature = "multithreaded"))]
    {
        DASContext::new(&trusted_setup)
    }
}

pub fn bench_compute_cells_and_proofs(c: &mut Criterion) {
    let ctx = das_context();

    let polynomial: Vec<_> = (0..FIELD_ELEMENTS_PER_BLOB)
        .map(|i| -Scalar::from(i as u64))
        .collect();

    let blob_bytes: Vec<u8> = polynomial
        .into_iter()
        .flat_map(|scalar| scalar.to_bytes_be())
        .collect();
    let blob: Box<[u8; BYTES_PER_BLOB]> = blob_bytes.into_boxed_slice().try_into().unwrap();

    c.bench_function("compute_cells_and_proofs", |b| {
        b.iter(|| ctx.prover_ctx().compute_cells_and_proofs(&blob))
    });
}

criterion_group!(benches, bench_compute_cells_and_proofs);
criterion_main!(benches);
