use std::fmt;

use crate::knapsack::Knapsack;

/// Lifecycle state of a solver
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SolverStatus {
    /// No problem is linked
    #[default]
    Empty,
    /// A problem is linked and has not been optimized yet
    Linked,
    /// An optimal selection was found
    Optimal,
    /// Reserved for strategies that can prove infeasibility
    Infeasible,
    /// Reserved for strategies over unbounded relaxations
    Unbounded,
    /// Reserved for strategies that can stop without a proof
    Indeterminate,
}

impl fmt::Display for SolverStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SolverStatus::Empty => "EMPTY",
            SolverStatus::Linked => "LINKED",
            SolverStatus::Optimal => "OPTIMAL",
            SolverStatus::Infeasible => "INFEASIBLE",
            SolverStatus::Unbounded => "UNBOUNDED",
            SolverStatus::Indeterminate => "INDETERMINATE",
        };
        f.write_str(name)
    }
}

/// An optimal selection of items
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Optimal objective value
    pub value: i64,
    /// Selected flat item indices, ascending
    pub items: Vec<usize>,
}

impl Solution {
    /// Sum of the selected weights in `knapsack`
    pub fn total_weight(&self, knapsack: &Knapsack) -> i64 {
        self.items.iter().map(|&i| knapsack.weights()[i]).sum()
    }

    /// Sum of the selected values in `knapsack`
    pub fn total_value(&self, knapsack: &Knapsack) -> i64 {
        self.items.iter().map(|&i| knapsack.values()[i]).sum()
    }

    /// Standard result form: just the optimal value
    pub fn to_standard(&self) -> Vec<i64> {
        vec![self.value]
    }

    /// Text result form: the value, and the chosen indices separated by spaces
    pub fn to_strings(&self) -> [String; 2] {
        let items = self
            .items
            .iter()
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        [self.value.to_string(), items]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_names() {
        assert_eq!(SolverStatus::default(), SolverStatus::Empty);
        assert_eq!(SolverStatus::Optimal.to_string(), "OPTIMAL");
        assert_eq!(SolverStatus::Indeterminate.to_string(), "INDETERMINATE");
    }

    #[test]
    fn test_result_forms() {
        let solution = Solution {
            value: 9,
            items: vec![0, 2, 4],
        };
        assert_eq!(solution.to_standard(), vec![9]);
        assert_eq!(solution.to_strings(), ["9".to_string(), "0 2 4".to_string()]);

        let none = Solution {
            value: 0,
            items: Vec::new(),
        };
        assert_eq!(none.to_strings()[1], "");
    }

    #[test]
    fn test_totals() {
        let mut kp = Knapsack::new(10).unwrap();
        kp.add_item_group("A", &[1, 2, 3], &[4, 5, 6]).unwrap();
        let solution = Solution {
            value: 10,
            items: vec![0, 2],
        };
        assert_eq!(solution.total_weight(&kp), 4);
        assert_eq!(solution.total_value(&kp), 10);
    }
}
