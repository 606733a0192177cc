use crate::r1cs::ConstraintSystem;
use zkt_algebra::prelude::*;

/// The data structure of a proof.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Proof<P: Pairing> {
    /// `A` in G1.
    pub a: P::G1,
    /// `B` in G2.
    pub b: P::G2,
    /// `C` in G1.
    pub c: P::G1,
}

impl<P: Pairing> Proof<P> {
    /// A proof with an identity element is rejected before any pairing.
    pub fn is_well_formed(&self) -> bool {
        !self.a.is_identity() && !self.b.is_identity() && !self.c.is_identity()
    }
}

/// The verifying key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct VerifyingKey<P: Pairing> {
    /// `alpha * G`
    pub alpha_g1: P::G1,
    /// `beta * H`
    pub beta_g2: P::G2,
    /// `gamma * H`
    pub gamma_g2: P::G2,
    /// `delta * H`
    pub delta_g2: P::G2,
    /// `(beta * A_i(t) + alpha * B_i(t) + C_i(t)) / gamma * G` for the
    /// constant and every primary input.
    pub gamma_abc_g1: Vec<P::G1>,
}

impl<P: Pairing> VerifyingKey<P> {
    /// The number of primary inputs the key accepts.
    pub fn num_inputs(&self) -> usize {
        self.gamma_abc_g1.len().saturating_sub(1)
    }
}

/// The verifying key with its pairing operands prepared.
#[derive(Clone, Debug)]
pub struct ProcessedVerifyingKey<P: Pairing> {
    /// `-alpha * G`, prepared.
    pub neg_alpha_g1: P::G1Prepared,
    /// `beta * H`, prepared.
    pub beta_g2: P::G2Prepared,
    /// `-gamma * H`, prepared.
    pub neg_gamma_g2: P::G2Prepared,
    /// `-delta * H`, prepared.
    pub neg_delta_g2: P::G2Prepared,
    /// The input accumulator basis.
    pub gamma_abc_g1: Vec<P::G1>,
}

impl<P: Pairing> ProcessedVerifyingKey<P> {
    /// The number of primary inputs the key accepts.
    pub fn num_inputs(&self) -> usize {
        self.gamma_abc_g1.len().saturating_sub(1)
    }
}

/// The proving key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct ProvingKey<P: Pairing> {
    /// `alpha * G`
    pub alpha_g1: P::G1,
    /// `beta * G`
    pub beta_g1: P::G1,
    /// `beta * H`
    pub beta_g2: P::G2,
    /// `delta * G`
    pub delta_g1: P::G1,
    /// `delta * H`
    pub delta_g2: P::G2,
    /// `A_i(t) * G` for every variable.
    pub a_query: Vec<P::G1>,
    /// `B_i(t) * G` for every variable.
    pub b_g1_query: Vec<P::G1>,
    /// `B_i(t) * H` for every variable.
    pub b_g2_query: Vec<P::G2>,
    /// `t^i * Z(t) / delta * G`
    pub h_query: Vec<P::G1>,
    /// `(beta * A_i(t) + alpha * B_i(t) + C_i(t)) / delta * G` for every
    /// auxiliary variable.
    pub l_query: Vec<P::G1>,
    /// The verifying key.
    pub vk: VerifyingKey<P>,
    /// The constraint system the key was generated for, after the A/B swap.
    pub cs: ConstraintSystem<P::ScalarField>,
}

impl<P: Pairing> ProvingKey<P> {
    /// The verifying key.
    pub fn verifying_key(&self) -> &VerifyingKey<P> {
        &self.vk
    }

    /// The number of G1 elements.
    pub fn g1_size(&self) -> usize {
        4 + self.a_query.len()
            + self.b_g1_query.len()
            + self.h_query.len()
            + self.l_query.len()
            + self.vk.gamma_abc_g1.len()
    }

    /// The number of G2 elements.
    pub fn g2_size(&self) -> usize {
        5 + self.b_g2_query.len()
    }
}
