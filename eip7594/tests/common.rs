use bls12_381::{ff::Field, Scalar};
use peerdas_kzg::{
    constants::{BYTES_PER_BLOB, FIELD_ELEMENTS_PER_BLOB, FIELD_ELEMENTS_PER_CELL},
    DASContext, TrustedSetup,
};
use rand::{rngs::StdRng, SeedableRng};

pub fn test_context() -> DASContext {
    let trusted_setup =
        TrustedSetup::insecure_ephemeral(FIELD_ELEMENTS_PER_BLOB, FIELD_ELEMENTS_PER_CELL + 1);

    #[cfg(feature = "multithreaded")]
    {
        DASContext::with_threads(&trusted_setup, peerdas_kzg::ThreadCount::Single)
    }
    #[cfg(not(feature = "multithreaded"))]
    {
        DASContext::new(&trusted_setup)
    }
}

/// Fills every field element of a blob with `value`.
pub fn constant_blob(value: u64) -> Box<[u8; BYTES_PER_BLOB]> {
    let scalar = Scalar::from(value);
    let bytes: Vec<u8> = (0..FIELD_ELEMENTS_PER_BLOB)
        .flat_map(|_| scalar.to_bytes_be())
        .collect();
    bytes
        .into_boxed_slice()
        .try_into()
        .expect("exactly BYTES_PER_BLOB bytes")
}

/// Deterministically generates a blob of canonical field elements from `seed`.
pub fn random_blob_from_seed(seed: u64) -> Box<[u8; BYTES_PER_BLOB]> {
    let mut rng = StdRng::seed_from_u64(seed);
    let bytes: Vec<u8> = (0..FIELD_ELEMENTS_PER_BLOB)
        .flat_map(|_| Scalar::random(&mut rng).to_bytes_be())
        .collect();
    bytes
        .into_boxed_slice()
        .try_into()
        .expect("exactly BYTES_PER_BLOB bytes")
}

/// Installs a `tracing-forest` formatter so instrumented spans print while debugging a
/// failing end-to-end scenario. No-op unless the `tracing` feature is enabled.
#[cfg(feature = "tracing")]
pub fn init_tracing() {
    use tracing_forest::{util::LevelFilter, ForestLayer};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    let _ = Registry::default()
        .with(env_filter)
        .with(ForestLayer::default())
        .try_init();
}

#[cfg(not(feature = "tracing"))]
pub fn init_tracing() {}
