//! The reduction from R1CS to a square span program.
//!
//! Every constraint `a * b = c` becomes two squares through the identity
//! `(a + b)^2 = 4c + (a - b)^2`, with `x' = (a - b)^2` as a fresh variable.
//! Every primary input `x_i` is bound the same way through
//! `(x_i + 1)^2 = 4x_i + (x_i - 1)^2` with `x'' = (x_i - 1)^2`, and one more
//! row forces the constant to square to itself.
//!
//! With `N` the number of R1CS variables, `m` constraints and `l` inputs,
//! the SAP has `N + m + l` variables laid out as
//! `[1, primary.., auxiliary.., x'_0..x'_(m-1), x''_1..x''_l]`.

use crate::errors::Result;
use crate::poly::{EvaluationDomain, FpPolynomial};
use crate::r1cs::ConstraintSystem;
use crate::reduction::{accumulate, evaluate_rows};
use ark_std::{end_timer, start_timer};
use zeroize::Zeroize;
use zkt_algebra::{prelude::*, traits::Domain};

/// The smallest domain covering the `2m + 2l + 1` rows.
pub fn get_domain<F: Domain>(cs: &ConstraintSystem<F>) -> Result<EvaluationDomain<F>> {
    EvaluationDomain::new(2 * cs.num_constraints() + 2 * cs.num_inputs() + 1)
}

/// The number of SAP variables, the constant one included.
pub fn num_sap_variables<F: Scalar>(cs: &ConstraintSystem<F>) -> usize {
    cs.num_variables() + cs.num_constraints() + cs.num_inputs()
}

/// The zero-knowledge terms: `A + d1 * Z` and `C + d2 * Z`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SapBlinding<F> {
    /// The multiple of `Z` added to `A`.
    pub d1: F,
    /// The multiple of `Z` added to `C`.
    pub d2: F,
}

impl<F: Scalar> SapBlinding<F> {
    /// No blinding.
    pub fn zero() -> Self {
        Self {
            d1: F::zero(),
            d2: F::zero(),
        }
    }

    /// Fresh random blinding.
    pub fn random<R: CryptoRng + RngCore>(prng: &mut R) -> Self {
        Self {
            d1: F::random(prng),
            d2: F::random(prng),
        }
    }
}

/// The program in polynomial form, one `A_i` and `C_i` per SAP variable.
#[derive(Clone, Debug)]
pub struct SapInstance<F: Domain> {
    /// The evaluation domain.
    pub domain: EvaluationDomain<F>,
    /// The number of primary inputs.
    pub num_inputs: usize,
    /// `A_i`
    pub a: Vec<FpPolynomial<F>>,
    /// `C_i`
    pub c: Vec<FpPolynomial<F>>,
}

/// The program evaluated at a single point `t`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SapInstanceEvaluation<F> {
    /// The size of the evaluation domain.
    pub degree: usize,
    /// The number of primary inputs.
    pub num_inputs: usize,
    /// `A_i(t)`
    pub at: Vec<F>,
    /// `C_i(t)`
    pub ct: Vec<F>,
    /// `t^i` for `i` in `0..=degree`
    pub ht: Vec<F>,
    /// `Z(t)`
    pub zt: F,
}

/// The extended assignment with the coefficients of `H`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SapWitness<F> {
    /// The size of the evaluation domain.
    pub degree: usize,
    /// The number of primary inputs.
    pub num_inputs: usize,
    /// The blinding used for `H`.
    pub blinding: SapBlinding<F>,
    /// The full SAP assignment, starting with `[1, primary..]`.
    pub assignment: Vec<F>,
    /// The coefficients of `H`, `degree + 1` of them.
    pub coefficients_for_h: Vec<F>,
}

/// Row indices of a constraint system laid out as a SAP.
struct Layout {
    num_variables: usize,
    num_constraints: usize,
}

impl Layout {
    fn new<F: Scalar>(cs: &ConstraintSystem<F>) -> Self {
        Self {
            num_variables: cs.num_variables(),
            num_constraints: cs.num_constraints(),
        }
    }

    /// The variable `x'` of constraint `i`.
    fn constraint_extra(&self, i: usize) -> usize {
        self.num_variables + i
    }

    /// The variable `x''` of input `i`, for `i` in `1..=l`.
    fn input_extra(&self, i: usize) -> usize {
        self.num_variables + self.num_constraints + i - 1
    }

    /// The row forcing the constant.
    fn constant_row(&self) -> usize {
        2 * self.num_constraints
    }
}

/// `A_i(t)` and `C_i(t)` given the Lagrange coefficients `u` at `t`.
fn evaluate_columns<F: Scalar>(cs: &ConstraintSystem<F>, u: &[F]) -> (Vec<F>, Vec<F>) {
    let layout = Layout::new(cs);
    let num_variables = num_sap_variables(cs);
    let mut at = vec![F::zero(); num_variables];
    let mut ct = vec![F::zero(); num_variables];
    let four = F::from(4u32);

    for (i, constraint) in cs.constraints().iter().enumerate() {
        let (even, odd) = (u[2 * i], u[2 * i + 1]);
        accumulate(&mut at, &constraint.a, &even.add(&odd));
        accumulate(&mut at, &constraint.b, &even.sub(&odd));
        accumulate(&mut ct, &constraint.c, &four.mul(&even));
        ct[layout.constraint_extra(i)].add_assign(&even.add(&odd));
    }

    let row = layout.constant_row();
    at[0].add_assign(&u[row]);
    ct[0].add_assign(&u[row]);

    for i in 1..=cs.num_inputs() {
        let (plus, minus) = (u[row + 2 * i - 1], u[row + 2 * i]);
        at[i].add_assign(&plus.add(&minus));
        at[0].add_assign(&plus.sub(&minus));
        ct[i].add_assign(&four.mul(&plus));
        ct[layout.input_extra(i)].add_assign(&plus.add(&minus));
    }
    (at, ct)
}

/// Interpolate every column into its polynomial.
pub fn instance_map<F: Domain>(cs: &ConstraintSystem<F>) -> Result<SapInstance<F>> {
    cs.check()?;
    let domain = get_domain(cs)?;
    let n = domain.size();
    let num_variables = num_sap_variables(cs);

    // Column `i` on row `r` is the coefficient of `L_r`, i.e. column `i` of
    // the evaluation at the unit vector `e_r`.
    let mut a = vec![vec![F::zero(); n]; num_variables];
    let mut c = vec![vec![F::zero(); n]; num_variables];
    let mut unit = vec![F::zero(); n];
    for r in 0..n {
        unit[r] = F::one();
        let (at, ct) = evaluate_columns(cs, &unit);
        for i in 0..num_variables {
            a[i][r] = at[i];
            c[i][r] = ct[i];
        }
        unit[r] = F::zero();
    }

    let interpolate = |cols: Vec<Vec<F>>| -> Vec<FpPolynomial<F>> {
        cols.iter()
            .map(|col| FpPolynomial::ifft_with_domain(&domain, col))
            .collect()
    };
    Ok(SapInstance {
        num_inputs: cs.num_inputs(),
        a: interpolate(a),
        c: interpolate(c),
        domain,
    })
}

/// Evaluate every `A_i` and `C_i` at `t` through the Lagrange coefficients.
pub fn instance_map_with_evaluation<F: Domain>(
    cs: &ConstraintSystem<F>,
    t: &F,
) -> Result<SapInstanceEvaluation<F>> {
    cs.check()?;
    let timer = start_timer!(|| "SAP instance map with evaluation");
    let domain = get_domain(cs)?;
    let degree = domain.size();
    let u = domain.evaluate_all_lagrange_coefficients(t);
    let (at, ct) = evaluate_columns(cs, &u);

    let mut ht = Vec::with_capacity(degree + 1);
    let mut ti = F::one();
    for _ in 0..=degree {
        ht.push(ti);
        ti.mul_assign(t);
    }
    end_timer!(timer);

    Ok(SapInstanceEvaluation {
        degree,
        num_inputs: cs.num_inputs(),
        at,
        ct,
        ht,
        zt: domain.evaluate_vanishing_polynomial(t),
    })
}

/// Extend an R1CS assignment with `x'_i = (a_i - b_i)^2` and
/// `x''_i = (x_i - 1)^2`.
pub fn extend_assignment<F: Scalar>(
    cs: &ConstraintSystem<F>,
    primary: &[F],
    auxiliary: &[F],
) -> Result<Vec<F>> {
    let mut full = cs.full_assignment(primary, auxiliary)?;
    let mut extra = Vec::with_capacity(cs.num_constraints() + cs.num_inputs());
    for constraint in cs.constraints() {
        let diff = constraint
            .a
            .evaluate(&full)
            .sub(&constraint.b.evaluate(&full));
        extra.push(diff.square());
    }
    for x in primary {
        extra.push(x.sub(&F::one()).square());
    }
    full.extend(extra);
    Ok(full)
}

/// Compute `H` with `(A + d1 Z)^2 - (C + d2 Z) = H Z`.
///
/// The assignment must satisfy the system. Otherwise the division by `Z`
/// is not exact and the output is meaningless.
pub fn witness_map<F: Domain>(
    cs: &ConstraintSystem<F>,
    primary: &[F],
    auxiliary: &[F],
    blinding: &SapBlinding<F>,
    parallelism: usize,
) -> Result<SapWitness<F>> {
    let timer = start_timer!(|| "SAP witness map");
    let full = extend_assignment(cs, primary, auxiliary)?;
    let domain = get_domain(cs)?;
    let layout = Layout::new(cs);
    let n = domain.size();
    let m = cs.num_constraints();
    let l = cs.num_inputs();
    let four = F::from(4u32);

    let eval_timer = start_timer!(|| "Evaluate the rows");
    let constraints = cs.constraints();
    let a_evals = evaluate_rows(
        n,
        |row| {
            if row < 2 * m {
                let constraint = &constraints[row / 2];
                let a = constraint.a.evaluate(&full);
                let b = constraint.b.evaluate(&full);
                if row % 2 == 0 {
                    a.add(&b)
                } else {
                    a.sub(&b)
                }
            } else if row == 2 * m {
                F::one()
            } else if row <= 2 * m + 2 * l {
                let i = (row - 2 * m + 1) / 2;
                if row % 2 == 1 {
                    full[i].add(&F::one())
                } else {
                    full[i].sub(&F::one())
                }
            } else {
                F::zero()
            }
        },
        parallelism,
    );
    let c_evals = evaluate_rows(
        n,
        |row| {
            if row < 2 * m {
                let i = row / 2;
                let extra = full[layout.constraint_extra(i)];
                if row % 2 == 0 {
                    four.mul(&constraints[i].c.evaluate(&full)).add(&extra)
                } else {
                    extra
                }
            } else if row == 2 * m {
                F::one()
            } else if row <= 2 * m + 2 * l {
                let i = (row - 2 * m + 1) / 2;
                let extra = full[layout.input_extra(i)];
                if row % 2 == 1 {
                    four.mul(&full[i]).add(&extra)
                } else {
                    extra
                }
            } else {
                F::zero()
            }
        },
        parallelism,
    );
    end_timer!(eval_timer);

    let quotient_timer = start_timer!(|| "Divide by the vanishing polynomial");
    let a_coefs = domain.ifft(&a_evals);
    let c_coefs = domain.ifft(&c_evals);
    let a_coset = domain.coset_fft(&a_coefs);
    let c_coset = domain.coset_fft(&c_coefs);

    let z_inv = domain.coset_vanishing_inverse()?;
    let h_coset: Vec<F> = a_coset
        .iter()
        .zip(c_coset.iter())
        .map(|(a, c)| a.square().sub(c).mul(&z_inv))
        .collect();
    let h_tmp = domain.coset_ifft(&h_coset)?;
    end_timer!(quotient_timer);

    // H + 2 d1 A + d1^2 Z - d2
    let SapBlinding { d1, d2 } = *blinding;
    let two_d1 = d1.add(&d1);
    let mut coefficients_for_h = vec![F::zero(); n + 1];
    for i in 0..n {
        coefficients_for_h[i] = two_d1.mul(&a_coefs[i]).add(&h_tmp[i]);
    }
    coefficients_for_h[0].sub_assign(&d2);
    domain.add_poly_z(&d1.square(), &mut coefficients_for_h);
    end_timer!(timer);

    Ok(SapWitness {
        degree: n,
        num_inputs: l,
        blinding: *blinding,
        assignment: full,
        coefficients_for_h,
    })
}

impl<F: Scalar> Zeroize for SapInstanceEvaluation<F> {
    fn zeroize(&mut self) {
        self.at.zeroize();
        self.ct.zeroize();
        self.ht.zeroize();
        self.zt.zeroize();
    }
}

impl<F: Scalar> SapInstanceEvaluation<F> {
    /// The number of SAP variables, the constant one included.
    pub fn num_variables(&self) -> usize {
        self.at.len()
    }

    /// Check `(A + d1 Z)^2 - (C + d2 Z) = H Z` at `t`.
    pub fn is_satisfied(&self, witness: &SapWitness<F>) -> bool {
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
        let ans_c = inner(&self.ct).add(&b.d2.mul(&self.zt));
        let ans_h: F = witness
            .coefficients_for_h
            .iter()
            .zip_eq(self.ht.iter())
            .map(|(h, t)| h.mul(t))
            .sum();

        ans_a.square().sub(&ans_c) == ans_h.mul(&self.zt)
    }
}

impl<F: Domain> SapInstance<F> {
    /// Evaluate every polynomial at `t`.
    pub fn evaluate(&self, t: &F) -> SapInstanceEvaluation<F> {
        let n = self.domain.size();
        let mut ht = Vec::with_capacity(n + 1);
        let mut ti = F::one();
        for _ in 0..=n {
            ht.push(ti);
            ti.mul_assign(t);
        }
        SapInstanceEvaluation {
            degree: n,
            num_inputs: self.num_inputs,
            at: self.a.iter().map(|p| p.eval(t)).collect(),
            ct: self.c.iter().map(|p| p.eval(t)).collect(),
            ht,
            zt: self.domain.evaluate_vanishing_polynomial(t),
        }
    }

    /// Check the polynomial identity itself.
    pub fn is_satisfied(&self, witness: &SapWitness<F>) -> bool {
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
        let a = combine(&self.a, &witness.blinding.d1);
        let c = combine(&self.c, &witness.blinding.d2);
        let h = FpPolynomial::from_coefs(witness.coefficients_for_h.clone());
        let z = FpPolynomial::vanishing(&self.domain);
        a.mul(&a).sub(&c) == h.mul(&z)
    }
}

#[cfg(test)]
mod test {
    use super::{
        extend_assignment, get_domain, instance_map, instance_map_with_evaluation,
        num_sap_variables, witness_map, SapBlinding,
    };
    use crate::errors::SnarkError;
    use crate::r1cs::{ConstraintSystem, LinearCombination, Variable};
    use zeroize::Zeroize;
    use zkt_algebra::{bls12_381::BLSScalar, bn254::BN254Scalar, prelude::*, traits::Domain};

    // x * y = z with public x and z, plus (y + 2) * 1 = w
    fn product<F: Domain>() -> (ConstraintSystem<F>, Vec<F>, Vec<F>) {
        let mut cs = ConstraintSystem::new(2, 2);
        let x = cs.input_variable(0);
        let z = cs.input_variable(1);
        let y = cs.auxiliary_variable(0);
        let w = cs.auxiliary_variable(1);
        cs.add_constraint(
            LinearCombination::from_variable(x),
            LinearCombination::from_variable(y),
            LinearCombination::from_variable(z),
        )
        .unwrap();
        cs.add_constraint(
            LinearCombination::from_variable(y).add_term(Variable::one(), F::from(2u32)),
            LinearCombination::constant(F::one()),
            LinearCombination::from_variable(w),
        )
        .unwrap();
        let primary = vec![F::from(6u32), F::from(42u32)];
        let aux = vec![F::from(7u32), F::from(9u32)];
        (cs, primary, aux)
    }

    fn check_identity<F: Domain>() {
        let mut prng = test_rng();
        let (cs, primary, aux) = product::<F>();
        assert!(cs.is_satisfied(&primary, &aux));
        // 2 * 2 + 2 * 2 + 1 rows
        assert_eq!(get_domain(&cs).unwrap().size(), 16);

        for blinding in [SapBlinding::zero(), SapBlinding::random(&mut prng)] {
            let witness = witness_map(&cs, &primary, &aux, &blinding, 4).unwrap();
            assert_eq!(witness.assignment.len(), num_sap_variables(&cs));
            for _ in 0..3 {
                let t = F::random(&mut prng);
                let eval = instance_map_with_evaluation(&cs, &t).unwrap();
                assert!(eval.is_satisfied(&witness));
            }
            assert!(instance_map(&cs).unwrap().is_satisfied(&witness));
        }
    }

    #[test]
    fn sap_identity_holds() {
        check_identity::<BN254Scalar>();
        check_identity::<BLSScalar>();
    }

    #[test]
    fn extended_assignment_layout() {
        type F = BN254Scalar;
        let (cs, primary, aux) = product::<F>();
        let full = extend_assignment(&cs, &primary, &aux).unwrap();
        assert_eq!(full.len(), 5 + 2 + 2);
        // (x - y)^2 and ((y + 2) - 1)^2
        assert_eq!(full[5], F::one());
        assert_eq!(full[6], F::from(64u32));
        // (x_i - 1)^2
        assert_eq!(full[7], F::from(25u32));
        assert_eq!(full[8], F::from(41u32 * 41));
    }

    #[test]
    fn evaluation_matches_polynomials() {
        let mut prng = test_rng();
        let (cs, _, _) = product::<BN254Scalar>();
        let t = BN254Scalar::random(&mut prng);
        assert_eq!(
            instance_map(&cs).unwrap().evaluate(&t),
            instance_map_with_evaluation(&cs, &t).unwrap()
        );
    }

    #[test]
    fn evaluation_is_wiped() {
        let mut prng = test_rng();
        let (cs, _, _) = product::<BN254Scalar>();
        let t = BN254Scalar::random(&mut prng);
        let mut eval = instance_map_with_evaluation(&cs, &t).unwrap();
        assert_eq!(eval.ht[1], t);
        eval.zeroize();
        assert!(eval.at.is_empty() && eval.ct.is_empty() && eval.ht.is_empty());
        assert!(eval.zt.is_zero());
    }

    #[test]
    fn out_of_range_terms_are_rejected() {
        // index 5 is past the R1CS variables but inside the SAP layout
        let (cs, _, _) = product::<BN254Scalar>();
        let mut value = serde_json::to_value(&cs).unwrap();
        value["constraints"][1]["b"]["terms"][0][0] = serde_json::json!(5);
        let cs: ConstraintSystem<BN254Scalar> = serde_json::from_value(value).unwrap();
        let err = SnarkError::IndexOutOfBounds {
            index: 5,
            num_variables: 5,
        };
        assert_eq!(instance_map(&cs).err(), Some(err.clone()));
        assert_eq!(
            instance_map_with_evaluation(&cs, &BN254Scalar::from(2u32)).err(),
            Some(err)
        );
    }

    #[test]
    fn unsatisfied_witness_fails_the_identity() {
        let mut prng = test_rng();
        let (cs, primary, mut aux) = product::<BN254Scalar>();
        aux[0] = BN254Scalar::from(8u32);
        let witness = witness_map(&cs, &primary, &aux, &SapBlinding::zero(), 1).unwrap();
        let t = BN254Scalar::random(&mut prng);
        let eval = instance_map_with_evaluation(&cs, &t).unwrap();
        assert!(!eval.is_satisfied(&witness));
    }
}
