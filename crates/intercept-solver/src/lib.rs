//! Ballistic intercept solver.
//!
//! Motion is represented as a truncated Taylor series: a sequence of
//! 3-component position derivatives, each pre-divided by its factorial.
//! Given a target series and a launch-point series, the solver finds the
//! initial value of a chosen derivative order of the projectile's motion
//! such that the projectile meets the target at some positive time, picking
//! the time that minimizes the squared magnitude of that derivative.
//!
//! The pipeline is pure polynomial algebra: the squared distance between
//! the two trajectories expands (by discrete convolution) into a scalar
//! polynomial, the derivative-order normalization turns it into a Laurent
//! polynomial, and the critical times are the positive roots of the
//! differentiated numerator. Every call is stateless and re-entrant.

pub mod error;
pub mod laurent;
pub mod polynomial;
pub mod roots;
pub mod series;
pub mod solver;


pub use error::SolveError;
pub use laurent::LaurentPolynomial;
pub use polynomial::Polynomial;
pub use series::ScaledSeries;
pub use solver::{solve_intercept_derivative, InterceptSolution, ROOT_TOLERANCE};
