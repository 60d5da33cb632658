use bls12_381::{ff::Field, Scalar};
use polynomial::domain::Domain;

/// Reverses the least significant `bits` of the given number `n`.
///
/// Taken and modified from: https://github.com/Plonky3/Plonky3/blob/a374139abead1008f84a439e95bb495e81ea4be5/util/src/lib.rs#L67-L76
pub const fn reverse_bits(n: usize, bits: u32) -> usize {
    n.reverse_bits().overflowing_shr(usize::BITS - bits).0
}

/// Computes log2 of an integer.
///
/// Panics if the integer is not a power of two
pub const fn log2(x: u32) -> u32 {
    assert!(x > 0 && x.is_power_of_two(), "x must be a power of two.");
    x.trailing_zeros()
}

/// In-place bit-reversal permutation of a slice.
///
/// Reorders the elements of the slice `a` in-place by reversing the binary representation of
/// their indices. This transformation is its own inverse.
///
/// # Panics
/// Panics if the slice length is not a power of two.
///
/// Taken and modified from: https://github.com/filecoin-project/ec-gpu/blob/bdde768d0613ae546524c5612e2ad576a646e036/ec-gpu-gen/src/fft_cpu.rs#L10C8-L10C18
pub fn reverse_bit_order<T>(a: &mut [T]) {
    let n = a.len() as u32;
    assert!(n.is_power_of_two(), "n must be a power of two");

    let log_n = log2(n);

    for k in 0..n {
        let rk = reverse_bits(k as usize, log_n) as u32;
        if k < rk {
            a.swap(rk as usize, k as usize);
        }
    }
}

/// Computes the `W`-sized coset of roots of unity that cell `cell_index` is opened against.
///
/// This is `bit_reversal_permutation(roots_of_unity(extended_domain.size()))[c*W, (c+1)*W)`,
/// where `W = extended_domain.size() / num_cells`.
///
/// Callers on a hot path should memoize the bit-reversed roots table rather than call this
/// per cell, since the permutation does not depend on the cell index.
pub fn coset_for_cell(cell_index: usize, extended_domain: &Domain, num_cells: usize) -> Vec<bls12_381::Scalar> {
    let mut roots = extended_domain.roots.clone();
    reverse_bit_order(&mut roots);

    let coset_size = roots.len() / num_cells;
    let start = cell_index * coset_size;
    roots[start..start + coset_size].to_vec()
}

/// Given a group of coset evaluations indexed by cell, places them into domain order
/// (the order the full evaluation vector would be in had it been produced by an FFT over
/// the extended domain, without the bit-reversal permutation).
///
/// Missing cosets are filled with zeroes. Returns the new (domain-order) cell indices
/// alongside the flattened, reordered evaluations. Returns `None` if the coset evaluations
/// are not all the same length, or if a coset index is out of range.
///
/// It is the caller's responsibility to ensure there are no duplicate cell indices.
pub fn recover_evaluations_in_domain_order(
    domain_size: usize,
    coset_indices: Vec<usize>,
    coset_evaluations: Vec<Vec<Scalar>>,
) -> Option<(Vec<usize>, Vec<Scalar>)> {
    assert_eq!(coset_indices.len(), coset_evaluations.len());

    if coset_indices.is_empty() {
        return None;
    }

    let mut elements = vec![Scalar::ZERO; domain_size];

    let coset_len = coset_evaluations[0].len();
    let same_len = coset_evaluations
        .iter()
        .all(|coset| coset.len() == coset_len);
    if !same_len {
        return None;
    }

    let coset_capacity = domain_size / coset_len;
    if coset_indices.iter().any(|&i| i >= coset_capacity) {
        return None;
    }

    for (&coset_index, coset_evals) in coset_indices.iter().zip(coset_evaluations) {
        let start = coset_index * coset_len;
        elements[start..start + coset_len].copy_from_slice(&coset_evals);
    }

    // Bit-reverse the result so it reads as though it came directly from an FFT.
    reverse_bit_order(&mut elements);

    let num_bits_coset_per_full_domain = log2(coset_capacity as u32);
    let new_coset_indices = coset_indices
        .into_iter()
        .map(|rbo_coset_index| reverse_bits(rbo_coset_index, num_bits_coset_per_full_domain))
        .collect();

    Some((new_coset_indices, elements))
}
