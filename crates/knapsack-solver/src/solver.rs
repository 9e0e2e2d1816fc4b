use crate::error::KnapsackError;
use crate::knapsack::Knapsack;
use crate::solution::{Solution, SolverStatus};

/// Operations every knapsack solving strategy exposes.
///
/// A solver links one [`Knapsack`] at a time. Linking by reference borrows
/// the model for `'a`; the model is never mutated, so callers can keep
/// reading it or link it into other solvers.
pub trait KnapsackSolver<'a> {
    /// Drop any previous link and solution, attach `knapsack` and move to
    /// [`SolverStatus::Linked`]
    fn link(&mut self, knapsack: &'a Knapsack);

    /// Decode a standard encoding into a model owned by the solver and link
    /// it. On error the solver is left untouched.
    fn link_standard(&mut self, kp_std: &[i64]) -> Result<(), KnapsackError>;

    /// Run the strategy. Returns `false` without changing anything when the
    /// solver is not in the [`SolverStatus::Linked`] state.
    fn optimize(&mut self) -> bool;

    fn status(&self) -> SolverStatus;

    /// The linked model, if any
    fn knapsack(&self) -> Option<&Knapsack>;

    /// The optimal selection, only present once optimized
    fn solution(&self) -> Option<&Solution>;

    /// Optimal value in the standard result form
    fn result_standard(&self) -> Option<Vec<i64>> {
        self.solution().map(Solution::to_standard)
    }

    /// Optimal value and chosen indices as text
    fn result_strings(&self) -> Option<[String; 2]> {
        self.solution().map(Solution::to_strings)
    }

    /// Multi-line human readable summary of the current state
    fn describe_status(&self) -> String {
        let status = self.status();
        let mut out = format!("{}\n", status);
        if let Some(knapsack) = self.knapsack() {
            out.push_str("The linked knapsack is:\n");
            out.push_str(&knapsack.to_string());
        }
        if let (SolverStatus::Optimal, Some(solution)) = (status, self.solution()) {
            out.push_str(&format!("Optimal value: {}\n", solution.value));
            out.push_str(&format!("Optimal solution: {:?}\n", solution.items));
        }
        out
    }
}
