use crate::r1cs::ConstraintSystem;
use zkt_algebra::prelude::*;

/// The data structure of a proof.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Proof<P: Pairing> {
    /// `A` in G1.
    pub a: P::G1,
    /// `B` in G2, committing to the same polynomial as `A`.
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
    /// The G2 generator `H`.
    pub h: P::G2,
    /// `alpha * G`
    pub g_alpha: P::G1,
    /// `beta * H`
    pub h_beta: P::G2,
    /// `gamma * G`
    pub g_gamma: P::G1,
    /// `gamma * H`
    pub h_gamma: P::G2,
    /// `(gamma * C_i(t) + (alpha + beta) * A_i(t)) * G` for the constant
    /// and every primary input.
    pub query: Vec<P::G1>,
}

impl<P: Pairing> VerifyingKey<P> {
    /// The number of primary inputs the key accepts.
    pub fn num_inputs(&self) -> usize {
        self.query.len().saturating_sub(1)
    }
}

/// The verifying key with its pairing operands prepared.
#[derive(Clone, Debug)]
pub struct ProcessedVerifyingKey<P: Pairing> {
    /// `alpha * G`, added to `A`.
    pub g_alpha: P::G1,
    /// `beta * H`, added to `B`.
    pub h_beta: P::G2,
    /// `-alpha * G`, prepared.
    pub neg_g_alpha_prepared: P::G1Prepared,
    /// `beta * H`, prepared.
    pub h_beta_prepared: P::G2Prepared,
    /// `-gamma * G`, prepared.
    pub neg_g_gamma_prepared: P::G1Prepared,
    /// `gamma * H`, prepared.
    pub h_gamma_prepared: P::G2Prepared,
    /// `H`, prepared.
    pub h_prepared: P::G2Prepared,
    /// The input accumulator basis.
    pub query: Vec<P::G1>,
}

impl<P: Pairing> ProcessedVerifyingKey<P> {
    /// The number of primary inputs the key accepts.
    pub fn num_inputs(&self) -> usize {
        self.query.len().saturating_sub(1)
    }
}

/// The proving key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct ProvingKey<P: Pairing> {
    /// `gamma * A_i(t) * G` for every SAP variable.
    pub a_query: Vec<P::G1>,
    /// `gamma * A_i(t) * H` for every SAP variable.
    pub b_query: Vec<P::G2>,
    /// `gamma * (gamma * C_i(t) + (alpha + beta) * A_i(t)) * G` for every
    /// SAP variable after the primary inputs.
    pub c_query: Vec<P::G1>,
    /// `gamma * Z(t) * G`
    pub g_gamma_z: P::G1,
    /// `gamma * Z(t) * H`
    pub h_gamma_z: P::G2,
    /// `(alpha + beta) * gamma * Z(t) * G`
    pub g_ab_gamma_z: P::G1,
    /// `gamma^2 * Z(t) * t^i * G`
    pub g_gamma2_z_t: Vec<P::G1>,
    /// The verifying key.
    pub vk: VerifyingKey<P>,
    /// The constraint system the key was generated for.
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
            + self.c_query.len()
            + self.g_gamma2_z_t.len()
            + self.vk.query.len()
    }

    /// The number of G2 elements.
    pub fn g2_size(&self) -> usize {
        4 + self.b_query.len()
    }
}
