/// Power-of-two multiplicative subgroups and their transforms.
pub mod domain;

/// Polynomials in coefficient form.
pub mod field_polynomial;

pub use domain::EvaluationDomain;
pub use field_polynomial::FpPolynomial;
