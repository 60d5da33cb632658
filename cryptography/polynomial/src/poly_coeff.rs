use bls12_381::{ff::Field, Scalar};

/// A polynomial in monomial form where the lowest degree term is first.
///
/// ```text
/// Layout: x^0 * a_0 + x^1 * a_1 + ... + x^(n-1) * a_(n-1)
/// ```
pub type PolyCoeff = Vec<Scalar>;

/// For two polynomials, `f(x)` and `g(x)`, this method computes
/// the result of `f(x) + g(x)` and returns the result.
///
/// Note: Polynomials can be of different lengths.
pub fn poly_add(a: PolyCoeff, b: PolyCoeff) -> PolyCoeff {
    let (smaller_poly, mut larger_poly) = if a.len() < b.len() { (a, b) } else { (b, a) };

    for i in 0..smaller_poly.len() {
        larger_poly[i] += smaller_poly[i];
    }

    truncate_leading_zeros(&mut larger_poly);
    larger_poly
}

/// Removes trailing zero coefficients, ie the coefficients of the highest-degree terms.
fn truncate_leading_zeros(poly: &mut PolyCoeff) {
    while poly.last().is_some_and(|c| bool::from(c.is_zero())) {
        poly.pop();
    }
}

/// For a polynomial, `f(x)`, this method computes the result of `-f(x)`
/// and returns the result.
pub fn poly_neg(mut a: PolyCoeff) -> PolyCoeff {
    for coeff in &mut a {
        *coeff = -*coeff;
    }
    a
}

/// For two polynomials, `f(x)` and `g(x)`, this method computes
/// the result of `f(x) - g(x)` and returns the result.
///
/// Note: Polynomials can be of different lengths.
pub fn poly_sub(a: PolyCoeff, b: PolyCoeff) -> PolyCoeff {
    let neg_b = poly_neg(b);
    poly_add(a, neg_b)
}

/// Multiplies two polynomials via standard convolution.
///
/// The result has degree `a.degree() + b.degree()`.
pub fn poly_mul(a: &[Scalar], b: &[Scalar]) -> PolyCoeff {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut result = vec![Scalar::ZERO; a.len() + b.len() - 1];
    for (i, a_i) in a.iter().enumerate() {
        for (j, b_j) in b.iter().enumerate() {
            result[i + j] += a_i * b_j;
        }
    }
    result
}

/// Given a polynomial `f(x)` and a scalar `z`. This method will compute
/// the result of `f(z)` and return the result.
///
/// Uses Horner's method for efficient evaluation.
pub fn poly_eval(poly: &[Scalar], value: &Scalar) -> Scalar {
    let mut result = Scalar::ZERO;
    for coeff in poly.iter().rev() {
        result = result * value + coeff;
    }
    result
}

/// Divides `a(x)` by `b(x)` over the field, returning the quotient and
/// discarding the remainder.
///
/// Only well-defined when `b` divides `a` exactly; callers rely on this in
/// settings where that is guaranteed by construction (the quotient-polynomial
/// identity in the multi-proof scheme, and disjoint-support division during
/// recovery). Implemented via Ruffini's rule when dividing by a linear
/// factor, and via general long division otherwise.
///
/// # Panics
///
/// Panics if `b` is empty or its leading coefficient is zero.
pub fn poly_div(a: &[Scalar], b: &[Scalar]) -> PolyCoeff {
    assert!(
        !b.is_empty() && !bool::from(b.last().unwrap().is_zero()),
        "divisor must have a nonzero leading coefficient"
    );

    if b.len() == 2 && b[1] == Scalar::ONE {
        return divide_by_linear(a, -b[0]);
    }

    let mut remainder: PolyCoeff = a.to_vec();
    let mut quotient = vec![Scalar::ZERO; remainder.len().saturating_sub(b.len() - 1)];

    let b_lead_inv = b
        .last()
        .unwrap()
        .invert()
        .expect("leading coefficient of divisor must be nonzero");

    for i in (0..quotient.len()).rev() {
        let remainder_degree = i + b.len() - 1;
        let coeff = remainder[remainder_degree] * b_lead_inv;
        quotient[i] = coeff;
        for (j, b_j) in b.iter().enumerate() {
            remainder[i + j] -= coeff * b_j;
        }
    }

    quotient
}

/// Divides `poly(x)` by the linear factor `(x - z)` using Ruffini's rule,
/// discarding the remainder.
fn divide_by_linear(poly: &[Scalar], z: Scalar) -> PolyCoeff {
    let mut quotient: Vec<Scalar> = Vec::with_capacity(poly.len());
    let mut k = Scalar::ZERO;

    for coeff in poly.iter().rev() {
        let t = *coeff + k;
        quotient.push(t);
        k = z * t;
    }

    // Last pushed value is the remainder; discard it.
    quotient.pop();
    quotient.reverse();
    quotient
}

/// Returns `g(x) = p(k * x)`, i.e. scales the input to the polynomial by `k`.
///
/// Multiplies coefficient `i` by `k^i`, so `poly_eval(&poly_shift(p, k), x) ==
/// poly_eval(p, k * x)` for all `x`.
///
/// # Panics
///
/// Panics if `k` is zero.
pub fn poly_shift(poly: &[Scalar], k: &Scalar) -> PolyCoeff {
    assert!(!bool::from(k.is_zero()), "shift factor must be nonzero");

    let mut power = Scalar::ONE;
    poly.iter()
        .map(|coeff| {
            let scaled = coeff * power;
            power *= k;
            scaled
        })
        .collect()
}

/// Given a list of points, this method will compute the polynomial
/// Z(x) which is equal to zero when evaluated at each point.
///
/// Example: vanishing_poly([1, 2, 3]) = (x - 1)(x - 2)(x - 3)
pub fn vanishing_poly(roots: &[Scalar]) -> PolyCoeff {
    let mut poly = vec![Scalar::ONE];
    for root in roots {
        poly = poly_mul(&poly, &[-root, Scalar::ONE]);
    }
    poly
}

/// Interpolates a set of points to a given polynomial in monomial form.
///
/// Given a list of points (x_i, y_i), this method will return the lowest degree polynomial
/// in monomial form that passes through all the points.
///
/// A simple O(n^2) algorithm (lagrange interpolation)
///
/// Note: This method is only used when the evaluation points do not have roots-of-unity
/// structure; when they do, an IFFT is preferred.
pub fn lagrange_interpolate(points: &[(Scalar, Scalar)]) -> Option<PolyCoeff> {
    let max_degree_plus_one = points.len();
    assert!(
        max_degree_plus_one >= 2,
        "should interpolate for degree >= 1"
    );
    let mut coeffs = vec![Scalar::ZERO; max_degree_plus_one];
    // external iterator
    for (k, p_k) in points.iter().enumerate() {
        let (x_k, y_k) = p_k;
        // coeffs from 0 to max_degree - 1
        let mut contribution = vec![Scalar::ZERO; max_degree_plus_one];
        let mut denominator = Scalar::ONE;
        let mut max_contribution_degree = 0;
        // internal iterator
        for (j, p_j) in points.iter().enumerate() {
            let (x_j, _) = p_j;
            if j == k {
                continue;
            }

            let mut diff = *x_k;
            diff -= x_j;
            denominator *= diff;

            if max_contribution_degree == 0 {
                max_contribution_degree = 1;
                *contribution
                    .get_mut(0)
                    .expect("must have enough coefficients") -= x_j;
                *contribution
                    .get_mut(1)
                    .expect("must have enough coefficients") += Scalar::from(1u64);
            } else {
                let mul_by_minus_x_j: Vec<Scalar> = contribution
                    .iter()
                    .map(|el| {
                        let mut tmp = *el;
                        tmp *= x_j;

                        -tmp
                    })
                    .collect();

                contribution.insert(0, Scalar::ZERO);
                contribution.truncate(max_degree_plus_one);

                assert_eq!(mul_by_minus_x_j.len(), max_degree_plus_one);
                for (i, c) in contribution.iter_mut().enumerate() {
                    let other = mul_by_minus_x_j
                        .get(i)
                        .expect("should have enough elements");
                    *c += other;
                }
            }
        }

        denominator = denominator
            .invert()
            .expect("unexpected zero in denominator");
        for (i, this_contribution) in contribution.into_iter().enumerate() {
            let c = coeffs.get_mut(i).expect("should have enough coefficients");
            let mut tmp = this_contribution;
            tmp *= denominator;
            tmp *= y_k;
            *c += tmp;
        }
    }

    Some(coeffs)
}
