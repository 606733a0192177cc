#![allow(dead_code)]

use zkt_algebra::prelude::*;
use zkt_snark::r1cs::{ConstraintSystem, LinearCombination, Variable};

/// A constraint system with a satisfying assignment.
pub struct Circuit<F> {
    pub cs: ConstraintSystem<F>,
    pub primary: Vec<F>,
    pub auxiliary: Vec<F>,
}

/// `x^3 + x + 5 = out` with public `out`, over four constraints.
pub fn cubic<F: Scalar>(x: F) -> Circuit<F> {
    let mut cs = ConstraintSystem::new(1, 4);
    let out = cs.input_variable(0);
    let v_x = cs.auxiliary_variable(0);
    let v_x2 = cs.auxiliary_variable(1);
    let v_x3 = cs.auxiliary_variable(2);
    let v_s = cs.auxiliary_variable(3);
    let one = LinearCombination::from_variable(Variable::one());

    cs.add_constraint(
        LinearCombination::from_variable(v_x),
        LinearCombination::from_variable(v_x),
        LinearCombination::from_variable(v_x2),
    )
    .unwrap();
    cs.add_constraint(
        LinearCombination::from_variable(v_x2),
        LinearCombination::from_variable(v_x),
        LinearCombination::from_variable(v_x3),
    )
    .unwrap();
    cs.add_constraint(
        LinearCombination::from_variable(v_x3).add_term(v_x, F::one()),
        one.clone(),
        LinearCombination::from_variable(v_s),
    )
    .unwrap();
    cs.add_constraint(
        LinearCombination::from_variable(v_s).add_term(Variable::one(), F::from(5u32)),
        one,
        LinearCombination::from_variable(out),
    )
    .unwrap();

    let x2 = x.mul(&x);
    let x3 = x2.mul(&x);
    let s = x3.add(&x);
    let out = s.add(&F::from(5u32));
    Circuit {
        cs,
        primary: vec![out],
        auxiliary: vec![x, x2, x3, s],
    }
}

/// Public `x` and `y` with `x * x = w` and `y * y = y`, satisfied by `y = 0`.
pub fn two_inputs<F: Scalar>(x: F) -> Circuit<F> {
    let mut cs = ConstraintSystem::new(2, 1);
    let v_x = cs.input_variable(0);
    let v_y = cs.input_variable(1);
    let v_w = cs.auxiliary_variable(0);
    cs.add_constraint(
        LinearCombination::from_variable(v_x),
        LinearCombination::from_variable(v_x),
        LinearCombination::from_variable(v_w),
    )
    .unwrap();
    cs.add_constraint(
        LinearCombination::from_variable(v_y),
        LinearCombination::from_variable(v_y),
        LinearCombination::from_variable(v_y),
    )
    .unwrap();
    Circuit {
        cs,
        primary: vec![x, F::zero()],
        auxiliary: vec![x.mul(&x)],
    }
}

/// A random chain `v_(i+1) = (v_i + k_i) * u_i` over `num_inputs` public
/// seeds and `num_constraints` constraints, with the last value public too.
pub fn random_chain<F: Scalar, R: CryptoRng + RngCore>(
    prng: &mut R,
    num_inputs: usize,
    num_constraints: usize,
) -> Circuit<F> {
    assert!(num_inputs >= 1);
    // the last primary input is the output
    let mut cs = ConstraintSystem::new(num_inputs + 1, 2 * num_constraints);
    let primary_seeds: Vec<F> = (0..num_inputs).map(|_| F::random(prng)).collect();

    let mut auxiliary = Vec::with_capacity(2 * num_constraints);
    let mut current = LinearCombination::zero();
    let mut value = F::zero();
    for (i, seed) in primary_seeds.iter().enumerate() {
        current.push_term(cs.input_variable(i), F::one());
        value.add_assign(seed);
    }

    for j in 0..num_constraints {
        let k = F::random(prng);
        let u = F::random(prng);
        let u_var = cs.auxiliary_variable(2 * j);
        let next_var = cs.auxiliary_variable(2 * j + 1);
        let next = value.add(&k).mul(&u);
        auxiliary.push(u);
        auxiliary.push(next);

        cs.add_constraint(
            current.clone().add_term(Variable::one(), k),
            LinearCombination::from_variable(u_var),
            LinearCombination::from_variable(next_var),
        )
        .unwrap();
        current = LinearCombination::from_variable(next_var);
        value = next;
    }

    let output = cs.input_variable(num_inputs);
    cs.add_constraint(
        current,
        LinearCombination::constant(F::one()),
        LinearCombination::from_variable(output),
    )
    .unwrap();

    let mut primary = primary_seeds;
    primary.push(value);
    Circuit {
        cs,
        primary,
        auxiliary,
    }
}

/// `cs` after a serde round trip in which the first `a` term of
/// `constraint` was rewritten to `index`, bypassing `add_constraint`.
pub fn with_a_index<F: Scalar>(
    cs: &ConstraintSystem<F>,
    constraint: usize,
    index: usize,
) -> ConstraintSystem<F> {
    let mut value = serde_json::to_value(cs).unwrap();
    value["constraints"][constraint]["a"]["terms"][0][0] = serde_json::json!(index);
    serde_json::from_value(value).unwrap()
}
