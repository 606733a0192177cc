//! The reduction from R1CS to a quadratic arithmetic program.
//!
//! Row `i < m` of the domain carries constraint `i`. Rows `m..=m + l` are
//! input-consistency rows with `A_k(w^(m + k)) = 1` for the constant and
//! each of the `l` primary inputs, which keeps the input polynomials
//! linearly independent.

use crate::errors::Result;
use crate::poly::{EvaluationDomain, FpPolynomial};
use crate::r1cs::ConstraintSystem;
use crate::reduction::{accumulate, evaluate_rows};
use ark_std::{end_timer, start_timer};
use zeroize::Zeroize;
use zkt_algebra::{prelude::*, traits::Domain};

/// The smallest domain covering the constraints and the input-consistency rows.
pub fn get_domain<F: Domain>(cs: &ConstraintSystem<F>) -> Result<EvaluationDomain<F>> {
    EvaluationDomain::new(cs.num_constraints() + cs.num_inputs() + 1)
}

/// The zero-knowledge terms added to the witness polynomials:
/// `A + d1 * Z`, `B + d2 * Z` and `C + d3 * Z`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct QapBlinding<F> {
    /// The multiple of `Z` added to `A`.
    pub d1: F,
    /// The multiple of `Z` added to `B`.
    pub d2: F,
    /// The multiple of `Z` added to `C`.
    pub d3: F,
}

impl<F: Scalar> QapBlinding<F> {
    /// No blinding.
    pub fn zero() -> Self {
        Self {
            d1: F::zero(),
            d2: F::zero(),
            d3: F::zero(),
        }
    }

    /// Fresh random blinding.
    pub fn random<R: CryptoRng + RngCore>(prng: &mut R) -> Self {
        Self {
            d1: F::random(prng),
            d2: F::random(prng),
            d3: F::random(prng),
        }
    }
}

/// The program in polynomial form, one `A_i`, `B_i`, `C_i` per variable.
#[derive(Clone, Debug)]
pub struct QapInstance<F: Domain> {
    /// The evaluation domain.
    pub domain: EvaluationDomain<F>,
    /// The number of primary inputs.
    pub num_inputs: usize,
    /// `A_i`
    pub a: Vec<FpPolynomial<F>>,
    /// `B_i`
    pub b: Vec<FpPolynomial<F>>,
    /// `C_i`
    pub c: Vec<FpPolynomial<F>>,
}

/// The program evaluated at a single point `t`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QapInstanceEvaluation<F> {
    /// The size of the evaluation domain.
    pub degree: usize,
    /// The number of primary inputs.
    pub num_inputs: usize,
    /// `A_i(t)`
    pub at: Vec<F>,
    /// `B_i(t)`
    pub bt: Vec<F>,
    /// `C_i(t)`
    pub ct: Vec<F>,
    /// `t^i` for `i` in `0..=degree`
    pub ht: Vec<F>,
    /// `Z(t)`
    pub zt: F,
}

/// The full assignment with the coefficients of `H`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QapWitness<F> {
    /// The size of the evaluation domain.
    pub degree: usize,
    /// The number of primary inputs.
    pub num_inputs: usize,
    /// The blinding used for `H`.
    pub blinding: QapBlinding<F>,
    /// `[1, primary.., auxiliary..]`
    pub assignment: Vec<F>,
    /// The coefficients of `H`, `degree + 1` of them.
    pub coefficients_for_h: Vec<F>,
}

/// The evaluations on the domain of every column, as `[variable][row]`.
fn column_evaluations<F: Domain>(
    cs: &ConstraintSystem<F>,
    domain: &EvaluationDomain<F>,
) -> (Vec<Vec<F>>, Vec<Vec<F>>, Vec<Vec<F>>) {
    let n = domain.size();
    let num_variables = cs.num_variables();
    let mut a = vec![vec![F::zero(); n]; num_variables];
    let mut b = vec![vec![F::zero(); n]; num_variables];
    let mut c = vec![vec![F::zero(); n]; num_variables];

    for (row, constraint) in cs.constraints().iter().enumerate() {
        for (index, coeff) in constraint.a.terms() {
            a[*index][row].add_assign(coeff);
        }
        for (index, coeff) in constraint.b.terms() {
            b[*index][row].add_assign(coeff);
        }
        for (index, coeff) in constraint.c.terms() {
            c[*index][row].add_assign(coeff);
        }
    }
    for i in 0..=cs.num_inputs() {
        a[i][cs.num_constraints() + i].add_assign(&F::one());
    }
    (a, b, c)
}

/// Interpolate every column into its polynomial.
pub fn instance_map<F: Domain>(cs: &ConstraintSystem<F>) -> Result<QapInstance<F>> {
    cs.check()?;
    let domain = get_domain(cs)?;
    let (a, b, c) = column_evaluations(cs, &domain);
    let interpolate = |cols: Vec<Vec<F>>| -> Vec<FpPolynomial<F>> {
        cols.iter()
            .map(|col| FpPolynomial::ifft_with_domain(&domain, col))
            .collect()
    };
    Ok(QapInstance {
        num_inputs: cs.num_inputs(),
        a: interpolate(a),
        b: interpolate(b),
        c: interpolate(c),
        domain,
    })
}

/// Evaluate every `A_i`, `B_i`, `C_i` at `t` through the Lagrange
/// coefficients of the domain, without building the polynomials.
pub fn instance_map_with_evaluation<F: Domain>(
    cs: &ConstraintSystem<F>,
    t: &F,
) -> Result<QapInstanceEvaluation<F>> {
    cs.check()?;
    let timer = start_timer!(|| "QAP instance map with evaluation");
    let domain = get_domain(cs)?;
    let degree = domain.size();
    let num_variables = cs.num_variables();

    let u = domain.evaluate_all_lagrange_coefficients(t);
    let zt = domain.evaluate_vanishing_polynomial(t);

    let mut at = vec![F::zero(); num_variables];
    let mut bt = vec![F::zero(); num_variables];
    let mut ct = vec![F::zero(); num_variables];

    for i in 0..=cs.num_inputs() {
        at[i].add_assign(&u[cs.num_constraints() + i]);
    }
    for (row, constraint) in cs.constraints().iter().enumerate() {
        accumulate(&mut at, &constraint.a, &u[row]);
        accumulate(&mut bt, &constraint.b, &u[row]);
        accumulate(&mut ct, &constraint.c, &u[row]);
    }

    let mut ht = Vec::with_capacity(degree + 1);
    let mut ti = F::one();
    for _ in 0..=degree {
        ht.push(ti);
        ti.mul_assign(t);
    }
    end_timer!(timer);

    Ok(QapInstanceEvaluation {
        degree,
        num_inputs: cs.num_inputs(),
        at,
        bt,
        ct,
        ht,
        zt,
    })
}

/// Compute `H` with `(A + d1 Z)(B + d2 Z) - (C + d3 Z) = H Z`.
///
/// The assignment must satisfy the system. Otherwise the division by `Z`
/// is not exact and the output is meaningless.
pub fn witness_map<F: Domain>(
    cs: &ConstraintSystem<F>,
    primary: &[F],
    auxiliary: &[F],
    blinding: &QapBlinding<F>,
    parallelism: usize,
) -> Result<QapWitness<F>> {
    let timer = start_timer!(|| "QAP witness map");
    let full = cs.full_assignment(primary, auxiliary)?;
    let domain = get_domain(cs)?;
    let n = domain.size();
    let m = cs.num_constraints();
    let l = cs.num_inputs();

    let eval_timer = start_timer!(|| "Evaluate the rows");
    let constraints = cs.constraints();
    let a_evals = evaluate_rows(
        n,
        |row| {
            if row < m {
                constraints[row].a.evaluate(&full)
            } else if row <= m + l {
                full[row - m]
            } else {
                F::zero()
            }
        },
        parallelism,
    );
    let b_evals = evaluate_rows(
        n,
        |row| {
            if row < m {
                constraints[row].b.evaluate(&full)
            } else {
                F::zero()
            }
        },
        parallelism,
    );
    let c_evals = evaluate_rows(
        n,
        |row| {
            if row < m {
                constraints[row].c.evaluate(&full)
            } else {
                F::zero()
            }
        },
        parallelism,
    );
    end_timer!(eval_timer);

    let quotient_timer = start_timer!(|| "Divide by the vanishing polynomial");
    let a_coefs = domain.ifft(&a_evals);
    let b_coefs = domain.ifft(&b_evals);
    let c_coefs = domain.ifft(&c_evals);

    let a_coset = domain.coset_fft(&a_coefs);
    let b_coset = domain.coset_fft(&b_coefs);
    let c_coset = domain.coset_fft(&c_coefs);

    let z_inv = domain.coset_vanishing_inverse()?;
    let h_coset: Vec<F> = a_coset
        .iter()
        .zip(b_coset.iter())
        .zip(c_coset.iter())
        .map(|((a, b), c)| a.mul(b).sub(c).mul(&z_inv))
        .collect();
    let h_tmp = domain.coset_ifft(&h_coset)?;
    end_timer!(quotient_timer);

    // H + d2 * A + d1 * B + d1 * d2 * Z - d3
    let QapBlinding { d1, d2, d3 } = *blinding;
    let mut coefficients_for_h = vec![F::zero(); n + 1];
    for i in 0..n {
        coefficients_for_h[i] = d2.mul(&a_coefs[i]).add(&d1.mul(&b_coefs[i])).add(&h_tmp[i]);
    }
    coefficients_for_h[0].sub_assign(&d3);
    domain.add_poly_z(&d1.mul(&d2), &mut coefficients_for_h);
    end_timer!(timer);

    Ok(QapWitness {
        degree: n,
        num_inputs: l,
        blinding: *blinding,
        assignment: full,
        coefficients_for_h,
    })
}

impl<F: Scalar> Zeroize for QapInstanceEvaluation<F> {
    fn zeroize(&mut self) {
        self.at.zeroize();
        self.bt.zeroize();
        self.ct.zeroize();
        self.ht.zeroize();
        self.zt.zeroize();
    }
}

impl<F: Scalar> QapInstanceEvaluation<F> {
    /// The number of variables, the constant one included.
    pub fn num_variables(&self) -> usize {
        self.at.len()
    }

    /// Check `(A + d1 Z)(B + d2 Z) - (C + d3 Z) = H Z` at `t`.
    pub fn is_satisfied(&self, witness: &QapWitness<F>) -> bool {
        if witness.assignment.len() != self.num_variables()
            || witness.num_inputs != self.num_inputs
            || witness.degree != self.degree
            || witness.coefficients_for_h.len() != self.ht.len()
        {
            return false;
        }

        let inner = |column: &[F]| -> F {
            column
                .iter()
                .zip_eq(witness.assignment.iter())
                .map(|(x, w)| x.mul(w))
                .sum()
        };
        let b = &witness.blinding;
        let ans_a = inner(&self.at).add(&b.d1.mul(&self.zt));
        let ans_b = inner(&self.bt).add(&b.d2.mul(&self.zt));
        let ans_c = inner(&self.ct).add(&b.d3.mul(&self.zt));
        let ans_h: F = witness
            .coefficients_for_h
            .iter()
            .zip_eq(self.ht.iter())
            .map(|(h, t)| h.mul(t))
            .sum();

        ans_a.mul(&ans_b).sub(&ans_c) == ans_h.mul(&self.zt)
    }
}

impl<F: Domain> QapInstance<F> {
    /// Evaluate every polynomial at `t`.
    pub fn evaluate(&self, t: &F) -> QapInstanceEvaluation<F> {
        let n = self.domain.size();
        let mut ht = Vec::with_capacity(n + 1);
        let mut ti = F::one();
        for _ in 0..=n {
            ht.push(ti);
            ti.mul_assign(t);
        }
        QapInstanceEvaluation {
            degree: n,
            num_inputs: self.num_inputs,
            at: self.a.iter().map(|p| p.eval(t)).collect(),
            bt: self.b.iter().map(|p| p.eval(t)).collect(),
            ct: self.c.iter().map(|p| p.eval(t)).collect(),
            ht,
            zt: self.domain.evaluate_vanishing_polynomial(t),
        }
    }

    /// Check the polynomial identity itself.
    pub fn is_satisfied(&self, witness: &QapWitness<F>) -> bool {
        if witness.assignment.len() != self.a.len() {
            return false;
        }
        let combine = |polys: &[FpPolynomial<F>], d: &F| -> FpPolynomial<F> {
            let mut acc = FpPolynomial::zero();
            for (p, w) in polys.iter().zip(witness.assignment.iter()) {
                acc = acc.add(&p.mul_scalar(w));
            }
            let mut z = vec![];
            self.domain.add_poly_z(d, &mut z);
            acc.add(&FpPolynomial::from_coefs(z))
        };
        let b = &witness.blinding;
        let a = combine(&self.a, &b.d1);
        let bb = combine(&self.b, &b.d2);
        let c = combine(&self.c, &b.d3);
        let h = FpPolynomial::from_coefs(witness.coefficients_for_h.clone());
        let z = FpPolynomial::vanishing(&self.domain);
        a.mul(&bb).sub(&c) == h.mul(&z)
    }
}
