pub mod candidates;
pub mod factors;
pub mod poly;
pub mod ratio;
pub mod synthetic;
