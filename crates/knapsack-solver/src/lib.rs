mod dynamic;
mod error;
mod knapsack;
mod solution;
mod solver;

pub use dynamic::DynamicSolver;
pub use error::KnapsackError;
pub use knapsack::{ItemGroup, Knapsack, STANDARD_GROUP_NAME};
pub use solution::{Solution, SolverStatus};
pub use solver::KnapsackSolver;
