pub mod algebra;
pub mod error;
pub mod input;
pub mod options;
pub mod structures;
pub mod utils;

pub use algebra::field::Field;
pub use algebra::ring::Ring;

pub use error::{CoefficientPosition, DivisionError};
pub use input::coefficients_from_entries;
pub use options::{DivisionOptions, RootTest, ZeroCoefficientPolicy};
pub use structures::candidates::{generate_candidates, Candidate};
pub use structures::factors::factors_of;
pub use structures::poly::Polynomial;
pub use structures::ratio::Ratio;
pub use structures::synthetic::{
    divide, synthetic_divide, Division, DivisionStep, SyntheticDivisionEngine,
};
pub use utils::gcd;
