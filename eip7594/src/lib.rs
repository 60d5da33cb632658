#[cfg(all(feature = "singlethreaded", feature = "multithreaded"))]
compile_error!("feature_a and feature_b cannot be enabled simultaneously");

pub mod constants;
mod errors;
mod prover;
mod recovery;
mod serialization;
mod trusted_setup;
mod verifier;
#[macro_use]
pub(crate) mod macros;

// Exported types
//
pub use errors::{ProverError, SerializationError, VerifierError};
/// Computes the gossip subnet a data column sidecar's column index is distributed on.
pub use constants::compute_subnet_for_data_column_sidecar;
/// TrustedSetup contains the Structured Reference String(SRS)
/// needed to make and verify proofs.
pub use trusted_setup::TrustedSetup;
/// BlobRef denotes a references to an opaque Blob.
///
/// Note: This library never returns a Blob, which is why we
/// do not have a Blob type.
pub type BlobRef<'a> = &'a [u8; BYTES_PER_BLOB];

/// Bytes48Ref denotes a reference to an untrusted cryptographic type
/// that can be represented in 48 bytes. This will be either a
/// purported KZGProof or a purported KZGCommitment.
pub type Bytes48Ref<'a> = &'a [u8; 48];

/// Cell contains a group of evaluations on a coset that one would like to
/// make and verify opening proofs about.
///
/// Note: These are heap allocated.
pub type Cell = Box<[u8; BYTES_PER_CELL]>;

/// CellRef contains a reference to a Cell.
///
/// Note: Similar to Blob, the library takes in references
/// to Cell and returns heap allocated instances as return types.
pub type CellRef<'a> = &'a [u8; BYTES_PER_CELL];

/// KZGProof denotes a 48 byte commitment to a polynomial
/// that one can use to prove that a polynomial f(x) was
/// correctly evaluated on a coset `H` and returned a set of points.
pub type KZGProof = [u8; BYTES_PER_COMMITMENT];

/// KZGCommitment denotes a 48 byte commitment to a polynomial f(x)
/// that we would like to make and verify opening proofs about.
pub type KZGCommitment = [u8; BYTES_PER_COMMITMENT];

/// CellIndex is reference to the coset/set of points that were used to create that Cell,
/// on a particular polynomial, f(x).
///
/// Note: Since the verifier and prover both know what cosets will be used
/// to evaluate the polynomials being used in opening proofs, the protocol
/// only requires an index to reference them.
pub type CellIndex = u64;

use constants::{
    BYTES_PER_BLOB, BYTES_PER_CELL, BYTES_PER_COMMITMENT, FIELD_ELEMENTS_PER_BLOB,
    FIELD_ELEMENTS_PER_CELL,
};
use prover::ProverContext;
use verifier::VerifierContext;

#[cfg(feature = "multithreaded")]
use rayon::ThreadPool;
#[cfg(feature = "multithreaded")]
use std::sync::Arc;

/// ThreadCount indicates whether we want to use a single thread or multiple threads
#[derive(Debug, Copy, Clone)]
pub enum ThreadCount {
    /// Initializes the threadpool with a single thread
    Single,
    /// Initializes the threadpool with the number of threads
    /// denoted by this enum variant.
    #[cfg(feature = "multithreaded")]
    Multi(usize),
    /// Initializes the threadpool with a sensible default number of
    /// threads. This is currently set to `RAYON_NUM_THREADS`.
    #[cfg(feature = "multithreaded")]
    SensibleDefault,
}

impl From<ThreadCount> for usize {
    fn from(value: ThreadCount) -> Self {
        match value {
            ThreadCount::Single => 1,
            #[cfg(feature = "multithreaded")]
            ThreadCount::Multi(num_threads) => num_threads,
            // Setting this to `0` will tell ThreadPool to use
            // `RAYON_NUM_THREADS`.
            #[cfg(feature = "multithreaded")]
            ThreadCount::SensibleDefault => 0,
        }
    }
}

/// The context that will be used to create and verify opening proofs.
#[derive(Debug)]
pub struct DASContext {
    #[cfg(feature = "multithreaded")]
    thread_pool: Arc<ThreadPool>,
    pub prover_ctx: ProverContext,
    pub verifier_ctx: VerifierContext,
}

#[cfg(feature = "multithreaded")]
impl Default for DASContext {
    fn default() -> Self {
        let trusted_setup = TrustedSetup::insecure_ephemeral(
            FIELD_ELEMENTS_PER_BLOB,
            FIELD_ELEMENTS_PER_CELL + 1,
        );
        const DEFAULT_NUM_THREADS: ThreadCount = ThreadCount::Single;
        DASContext::with_threads(&trusted_setup, DEFAULT_NUM_THREADS)
    }
}
#[cfg(not(feature = "multithreaded"))]
impl Default for DASContext {
    fn default() -> Self {
        let trusted_setup = TrustedSetup::insecure_ephemeral(
            FIELD_ELEMENTS_PER_BLOB,
            FIELD_ELEMENTS_PER_CELL + 1,
        );

        Self::new(&trusted_setup)
    }
}

impl DASContext {
    #[cfg(feature = "multithreaded")]
    pub fn with_threads(trusted_setup: &TrustedSetup, num_threads: ThreadCount) -> Self {
        let thread_pool = std::sync::Arc::new(
            rayon::ThreadPoolBuilder::new()
                .num_threads(num_threads.into())
                .build()
                .unwrap(),
        );

        Self {
            thread_pool,
            prover_ctx: ProverContext::new(trusted_setup),
            verifier_ctx: VerifierContext::new(trusted_setup),
        }
    }

    #[cfg(not(feature = "multithreaded"))]
    pub fn new(trusted_setup: &TrustedSetup) -> Self {
        Self {
            prover_ctx: ProverContext::new(trusted_setup),
            verifier_ctx: VerifierContext::new(trusted_setup),
        }
    }

    pub const fn prover_ctx(&self) -> &ProverContext {
        &self.prover_ctx
    }

    pub const fn verifier_ctx(&self) -> &VerifierContext {
        &self.verifier_ctx
    }
}
