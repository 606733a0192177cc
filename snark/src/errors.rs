use ark_std::{boxed::Box, error, fmt, format, string::String};
use zkt_algebra::prelude::AlgebraError;

pub(crate) type Result<T> = core::result::Result<T, SnarkError>;

#[derive(Debug, Clone, Eq, PartialEq)]
/// The errors of setup and proving. Verification never errors, it rejects.
pub enum SnarkError {
    /// Algebra error
    Algebra(AlgebraError),
    /// Error with message
    Message(String),
    /// The field has no multiplicative subgroup of the requested size.
    DomainTooLarge(usize),
    /// A linear combination refers to a variable outside the system.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// The number of variables, the constant one included.
        num_variables: usize,
    },
    /// The assignment does not have the shape of the constraint system.
    InputLengthMismatch {
        /// The expected numbers of primary and auxiliary values.
        expected: (usize, usize),
        /// The given numbers of primary and auxiliary values.
        actual: (usize, usize),
    },
    /// The assignment does not satisfy the constraint system.
    UnsatisfiedWitness,
    /// Scalars and bases of a multi-exponentiation differ in length.
    MultiExpLengthMismatch,
}

impl fmt::Display for SnarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use SnarkError::*;
        match self {
            Algebra(e) => write!(f, "Algebra: {}", e),
            Message(e) => f.write_str(e),
            DomainTooLarge(n) => write!(f, "No evaluation domain of size at least {}.", n),
            IndexOutOfBounds {
                index,
                num_variables,
            } => write!(
                f,
                "Variable index {} out of bounds for {} variables.",
                index, num_variables
            ),
            InputLengthMismatch { expected, actual } => write!(
                f,
                "Assignment of shape {:?} given, {:?} expected.",
                actual, expected
            ),
            UnsatisfiedWitness => f.write_str("The witness does not satisfy the constraints."),
            MultiExpLengthMismatch => f.write_str("Multi-exponentiation length mismatch."),
        }
    }
}

impl error::Error for SnarkError {
    #[cfg(feature = "std")]
    fn description(&self) -> &str {
        Box::leak(format!("{}", self).into_boxed_str())
    }
}

impl From<AlgebraError> for SnarkError {
    fn from(e: AlgebraError) -> SnarkError {
        match e {
            AlgebraError::MultiExpLengthMismatch => SnarkError::MultiExpLengthMismatch,
            e => SnarkError::Algebra(e),
        }
    }
}
