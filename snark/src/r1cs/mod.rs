use crate::errors::{Result, SnarkError};
use zkt_algebra::prelude::*;

/// An index into the full assignment `[1, primary.., auxiliary..]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Variable(pub usize);

impl Variable {
    /// The variable bound to the constant one.
    pub const fn one() -> Self {
        Variable(0)
    }

    /// The position in the full assignment.
    pub const fn index(&self) -> usize {
        self.0
    }
}

/// A sparse linear combination of variables.
/// Terms on the same variable add up.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinearCombination<F> {
    terms: Vec<(usize, F)>,
}

impl<F: Scalar> LinearCombination<F> {
    /// The empty combination, which evaluates to zero.
    pub fn zero() -> Self {
        Self { terms: vec![] }
    }

    /// Build from `(variable, coefficient)` pairs.
    pub fn new(terms: Vec<(Variable, F)>) -> Self {
        Self {
            terms: terms.into_iter().map(|(v, c)| (v.0, c)).collect(),
        }
    }

    /// The combination `1 * var`.
    pub fn from_variable(var: Variable) -> Self {
        Self {
            terms: vec![(var.0, F::one())],
        }
    }

    /// The constant combination `coeff * 1`.
    pub fn constant(coeff: F) -> Self {
        Self {
            terms: vec![(0, coeff)],
        }
    }

    /// Append a term, builder style.
    pub fn add_term(mut self, var: Variable, coeff: F) -> Self {
        self.push_term(var, coeff);
        self
    }

    /// Append a term.
    pub fn push_term(&mut self, var: Variable, coeff: F) {
        self.terms.push((var.0, coeff));
    }

    /// The raw `(index, coefficient)` terms, in insertion order.
    pub fn terms(&self) -> &[(usize, F)] {
        &self.terms
    }

    /// The largest variable index referenced, if any.
    pub fn max_index(&self) -> Option<usize> {
        self.terms.iter().map(|(i, _)| *i).max()
    }

    /// Evaluate over a full assignment. Out-of-range indices read as zero.
    pub fn evaluate(&self, full_assignment: &[F]) -> F {
        let mut acc = F::zero();
        for (index, coeff) in self.terms.iter() {
            if let Some(value) = full_assignment.get(*index) {
                acc.add_assign(&coeff.mul(value));
            }
        }
        acc
    }

    fn mark_nonzero(&self, touched: &mut [bool]) {
        for (index, coeff) in self.terms.iter() {
            if !coeff.is_zero() {
                if let Some(t) = touched.get_mut(*index) {
                    *t = true;
                }
            }
        }
    }
}

/// The constraint `<a, x> * <b, x> = <c, x>`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraint<F> {
    /// The left factor.
    pub a: LinearCombination<F>,
    /// The right factor.
    pub b: LinearCombination<F>,
    /// The product.
    pub c: LinearCombination<F>,
}

impl<F: Scalar> Constraint<F> {
    /// Check the constraint on a full assignment.
    pub fn is_satisfied(&self, full_assignment: &[F]) -> bool {
        self.a.evaluate(full_assignment).mul(&self.b.evaluate(full_assignment))
            == self.c.evaluate(full_assignment)
    }
}

/// A rank-1 constraint system over `num_inputs` primary and
/// `num_auxiliary` auxiliary variables, plus the constant at index 0.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintSystem<F> {
    constraints: Vec<Constraint<F>>,
    num_inputs: usize,
    num_auxiliary: usize,
}

impl<F: Scalar> ConstraintSystem<F> {
    /// An empty system with the given variable counts.
    pub fn new(num_inputs: usize, num_auxiliary: usize) -> Self {
        Self {
            constraints: vec![],
            num_inputs,
            num_auxiliary,
        }
    }

    /// The number of primary (public) inputs.
    pub fn num_inputs(&self) -> usize {
        self.num_inputs
    }

    /// The number of auxiliary (private) variables.
    pub fn num_auxiliary(&self) -> usize {
        self.num_auxiliary
    }

    /// The number of variables including the constant one.
    pub fn num_variables(&self) -> usize {
        1 + self.num_inputs + self.num_auxiliary
    }

    /// The number of constraints.
    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// The constraints in insertion order.
    pub fn constraints(&self) -> &[Constraint<F>] {
        &self.constraints
    }

    /// The variable of the `i`-th primary input.
    pub fn input_variable(&self, i: usize) -> Variable {
        Variable(1 + i)
    }

    /// The variable of the `j`-th auxiliary value.
    pub fn auxiliary_variable(&self, j: usize) -> Variable {
        Variable(1 + self.num_inputs + j)
    }

    /// Append the constraint `a * b = c`.
    pub fn add_constraint(
        &mut self,
        a: LinearCombination<F>,
        b: LinearCombination<F>,
        c: LinearCombination<F>,
    ) -> Result<()> {
        let constraint = Constraint { a, b, c };
        self.check_bounds(&constraint)?;
        self.constraints.push(constraint);
        Ok(())
    }

    fn check_bounds(&self, constraint: &Constraint<F>) -> Result<()> {
        let num_variables = self.num_variables();
        for lc in [&constraint.a, &constraint.b, &constraint.c] {
            if let Some(index) = lc.max_index() {
                if index >= num_variables {
                    return Err(SnarkError::IndexOutOfBounds {
                        index,
                        num_variables,
                    });
                }
            }
        }
        Ok(())
    }

    /// Check that every constraint only refers to existing variables,
    /// reporting the first index out of range.
    pub fn check(&self) -> Result<()> {
        self.constraints
            .iter()
            .try_for_each(|c| self.check_bounds(c))
    }

    /// [`ConstraintSystem::check`] as a predicate.
    pub fn is_valid(&self) -> bool {
        self.check().is_ok()
    }

    /// Build `[1, primary.., auxiliary..]`.
    pub fn full_assignment(&self, primary: &[F], auxiliary: &[F]) -> Result<Vec<F>> {
        if primary.len() != self.num_inputs || auxiliary.len() != self.num_auxiliary {
            return Err(SnarkError::InputLengthMismatch {
                expected: (self.num_inputs, self.num_auxiliary),
                actual: (primary.len(), auxiliary.len()),
            });
        }
        let mut full = Vec::with_capacity(self.num_variables());
        full.push(F::one());
        full.extend_from_slice(primary);
        full.extend_from_slice(auxiliary);
        Ok(full)
    }

    /// Check the assignment against every constraint, stopping at the first
    /// violation. An assignment of the wrong shape is not satisfying.
    pub fn is_satisfied(&self, primary: &[F], auxiliary: &[F]) -> bool {
        match self.full_assignment(primary, auxiliary) {
            Ok(full) => self.constraints.iter().all(|c| c.is_satisfied(&full)),
            Err(_) => false,
        }
    }

    /// Swap `a` and `b` in every constraint when `b` touches more variables
    /// than `a`. The statement is unchanged, and fewer variables in `b`
    /// means a shorter G2 query.
    pub fn swap_ab_if_beneficial(&mut self) -> bool {
        let n = self.num_variables();
        let mut touched_a = vec![false; n];
        let mut touched_b = vec![false; n];
        for c in self.constraints.iter() {
            c.a.mark_nonzero(&mut touched_a);
            c.b.mark_nonzero(&mut touched_b);
        }
        let count_a = touched_a.iter().filter(|t| **t).count();
        let count_b = touched_b.iter().filter(|t| **t).count();
        if count_b > count_a {
            for c in self.constraints.iter_mut() {
                core::mem::swap(&mut c.a, &mut c.b);
            }
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod test {
    use super::{ConstraintSystem, LinearCombination, Variable};
    use crate::errors::SnarkError;
    use zkt_algebra::{bn254::BN254Scalar, prelude::*};

    type F = BN254Scalar;

    // x * x = y, y * x = z with public z
    fn cube() -> ConstraintSystem<F> {
        let mut cs = ConstraintSystem::new(1, 2);
        let z = cs.input_variable(0);
        let x = cs.auxiliary_variable(0);
        let y = cs.auxiliary_variable(1);
        cs.add_constraint(
            LinearCombination::from_variable(x),
            LinearCombination::from_variable(x),
            LinearCombination::from_variable(y),
        )
        .unwrap();
        cs.add_constraint(
            LinearCombination::from_variable(y),
            LinearCombination::from_variable(x),
            LinearCombination::from_variable(z),
        )
        .unwrap();
        cs
    }

    #[test]
    fn satisfiability() {
        let cs = cube();
        assert_eq!(cs.num_variables(), 4);
        assert_eq!(cs.num_constraints(), 2);
        assert!(cs.is_satisfied(&[F::from(27u32)], &[F::from(3u32), F::from(9u32)]));
        assert!(!cs.is_satisfied(&[F::from(28u32)], &[F::from(3u32), F::from(9u32)]));
        assert!(!cs.is_satisfied(&[F::from(27u32)], &[F::from(3u32)]));
        assert!(!cs.is_satisfied(&[], &[F::from(3u32), F::from(9u32)]));
    }

    #[test]
    fn duplicate_terms_accumulate() {
        let x = Variable(1);
        let lc = LinearCombination::from_variable(x)
            .add_term(x, F::from(2u32))
            .add_term(Variable::one(), F::from(5u32));
        let full = vec![F::one(), F::from(10u32)];
        assert_eq!(lc.evaluate(&full), F::from(35u32));
        assert_eq!(LinearCombination::<F>::zero().evaluate(&full), F::zero());
    }

    #[test]
    fn index_bounds_are_checked() {
        let mut cs = ConstraintSystem::<F>::new(1, 1);
        let res = cs.add_constraint(
            LinearCombination::from_variable(Variable(3)),
            LinearCombination::constant(F::one()),
            LinearCombination::zero(),
        );
        assert_eq!(
            res,
            Err(SnarkError::IndexOutOfBounds {
                index: 3,
                num_variables: 3
            })
        );
        assert_eq!(cs.num_constraints(), 0);
        assert!(cs.is_valid());
    }

    #[test]
    fn deserialized_system_is_checked() {
        let mut value = serde_json::to_value(cube()).unwrap();
        value["constraints"][1]["a"]["terms"][0][0] = serde_json::json!(9);
        let cs: ConstraintSystem<F> = serde_json::from_value(value).unwrap();
        assert!(!cs.is_valid());
        assert_eq!(
            cs.check(),
            Err(SnarkError::IndexOutOfBounds {
                index: 9,
                num_variables: 4
            })
        );
        assert_eq!(cube().check(), Ok(()));
    }

    #[test]
    fn full_assignment_shape() {
        let cs = cube();
        let full = cs
            .full_assignment(&[F::from(27u32)], &[F::from(3u32), F::from(9u32)])
            .unwrap();
        assert_eq!(full[0], F::one());
        assert_eq!(full.len(), 4);
        assert!(matches!(
            cs.full_assignment(&[], &[]),
            Err(SnarkError::InputLengthMismatch { .. })
        ));
    }

    #[test]
    fn swap_keeps_the_statement() {
        let mut cs = ConstraintSystem::<F>::new(0, 3);
        let x = cs.auxiliary_variable(0);
        let y = cs.auxiliary_variable(1);
        let z = cs.auxiliary_variable(2);
        // b touches x and y, a only the constant
        cs.add_constraint(
            LinearCombination::constant(F::from(2u32)),
            LinearCombination::from_variable(x).add_term(y, F::one()),
            LinearCombination::from_variable(z),
        )
        .unwrap();
        let aux = [F::from(3u32), F::from(4u32), F::from(14u32)];
        assert!(cs.is_satisfied(&[], &aux));
        assert!(cs.swap_ab_if_beneficial());
        assert!(cs.is_satisfied(&[], &aux));
        assert!(!cs.swap_ab_if_beneficial());
    }
}
