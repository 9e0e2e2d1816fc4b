use std::borrow::Cow;

use log::{debug, info, warn};

use crate::error::KnapsackError;
use crate::knapsack::Knapsack;
use crate::solution::{Solution, SolverStatus};
use crate::solver::KnapsackSolver;

/// Exact 0/1 knapsack solver over the full `(n + 1) x (C + 1)` table.
///
/// Time and memory are both `O(n * C)`; callers are responsible for keeping
/// the capacity and item count within what they are willing to allocate.
/// The whole table is kept so the selection can be traced back afterwards.
#[derive(Debug, Default)]
pub struct DynamicSolver<'a> {
    knapsack: Option<Cow<'a, Knapsack>>,
    status: SolverStatus,
    solution: Option<Solution>,
}

impl<'a> DynamicSolver<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Solver already linked to `knapsack`
    pub fn with_problem(knapsack: &'a Knapsack) -> Self {
        let mut solver = Self::new();
        solver.link(knapsack);
        solver
    }

    /// Solver linked to a model decoded from the standard encoding
    pub fn from_standard(kp_std: &[i64]) -> Result<Self, KnapsackError> {
        let mut solver = Self::new();
        solver.link_standard(kp_std)?;
        Ok(solver)
    }

    fn attach(&mut self, knapsack: Cow<'a, Knapsack>) {
        debug!(
            "Linking knapsack: capacity = {}, items = {}",
            knapsack.capacity(),
            knapsack.item_count()
        );
        self.solution = None;
        self.knapsack = Some(knapsack);
        self.status = SolverStatus::Linked;
    }
}

impl<'a> KnapsackSolver<'a> for DynamicSolver<'a> {
    fn link(&mut self, knapsack: &'a Knapsack) {
        self.attach(Cow::Borrowed(knapsack));
    }

    fn link_standard(&mut self, kp_std: &[i64]) -> Result<(), KnapsackError> {
        let knapsack = Knapsack::from_standard(kp_std)?;
        self.attach(Cow::Owned(knapsack));
        Ok(())
    }

    fn optimize(&mut self) -> bool {
        if self.status != SolverStatus::Linked {
            warn!("optimize called while solver is {}", self.status);
            return false;
        }
        let Some(knapsack) = self.knapsack.as_deref() else {
            return false;
        };
        let Ok(capacity) = usize::try_from(knapsack.capacity()) else {
            warn!("Cannot size the table for capacity {}", knapsack.capacity());
            return false;
        };

        let solution = solve(capacity, knapsack.weights(), knapsack.values());
        info!(
            "Optimal value {} with {} of {} items",
            solution.value,
            solution.items.len(),
            knapsack.item_count()
        );

        self.solution = Some(solution);
        self.status = SolverStatus::Optimal;
        true
    }

    fn status(&self) -> SolverStatus {
        self.status
    }

    fn knapsack(&self) -> Option<&Knapsack> {
        self.knapsack.as_deref()
    }

    fn solution(&self) -> Option<&Solution> {
        match self.status {
            SolverStatus::Optimal => self.solution.as_ref(),
            _ => None,
        }
    }
}

/// Fill the value and decision tables, then trace the selection back from
/// `(n, capacity)`.
///
/// An item is only taken when it strictly improves the cell, so ties resolve
/// to leaving the later item out. Sums that overflow `i64` never improve a
/// cell, so the reported value is always the exact sum of the selection.
fn solve(capacity: usize, weights: &[i64], values: &[i64]) -> Solution {
    let n = weights.len();
    // A weight that does not fit in usize can never be taken
    let sizes: Vec<usize> = weights
        .iter()
        .map(|&w| usize::try_from(w).unwrap_or(usize::MAX))
        .collect();

    debug!("Filling DP table of {} x {}", n + 1, capacity + 1);
    let mut dp = vec![vec![0i64; capacity + 1]; n + 1];
    let mut taken = vec![vec![false; capacity + 1]; n + 1];

    for i in 1..=n {
        let weight = sizes[i - 1];
        let value = values[i - 1];
        for j in 0..=capacity {
            dp[i][j] = dp[i - 1][j];
            if j < weight {
                continue;
            }
            // An overflowing sum is treated as no improvement
            if let Some(with_item) = dp[i - 1][j - weight].checked_add(value) {
                if with_item > dp[i][j] {
                    dp[i][j] = with_item;
                    taken[i][j] = true;
                }
            }
        }
    }

    let mut items = Vec::new();
    let mut remaining = capacity;
    for i in (1..=n).rev() {
        if taken[i][remaining] {
            items.push(i - 1);
            remaining -= sizes[i - 1];
        }
    }
    items.reverse();
    debug!("Traceback selected {:?}, {} capacity left", items, remaining);

    Solution {
        value: dp[n][capacity],
        items,
    }
}
