use thiserror::Error;

/// Invalid-argument conditions raised by the problem model.
///
/// These are hard failures: they are returned at the point of the offending
/// call and nothing is modified. A solver that is merely not ready to optimize
/// reports that through a `false` return instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KnapsackError {
    #[error("Invalid capacity: {0}")]
    NegativeCapacity(i64),
    #[error("Item already exists: {0}")]
    DuplicateName(String),
    #[error(
        "Weights and values must have the same length ({weights} weights, {values} values)"
    )]
    LengthMismatch { weights: usize, values: usize },
    #[error(
        "Invalid standard encoding: length {len} does not match declared item count {declared}"
    )]
    MalformedEncoding { len: usize, declared: i64 },
    #[error("Item with name '{0}' not found")]
    UnknownName(String),
    #[error("Index {index} out of range for item '{name}' with {count} entries")]
    IndexOutOfRange {
        name: String,
        index: usize,
        count: usize,
    },
    #[error("Negative weight {weight} for item '{name}'")]
    NegativeWeight { name: String, weight: i64 },
    #[error("Item '{0}' does not start where the previous item ends")]
    GroupLayout(String),
    #[error("{0} items do not belong to any named item")]
    UngroupedItems(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offender() {
        let err = KnapsackError::DuplicateName("Sun".to_string());
        assert_eq!(err.to_string(), "Item already exists: Sun");

        let err = KnapsackError::MalformedEncoding { len: 5, declared: 2 };
        assert!(err.to_string().contains("length 5"));
        assert!(err.to_string().contains("item count 2"));
    }
}
