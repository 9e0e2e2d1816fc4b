use std::collections::HashMap;
use std::fmt;

use crate::error::KnapsackError;

/// Group name given to the items decoded from a standard encoding
pub const STANDARD_GROUP_NAME: &str = "*";

/// Number of item rows printed by the non-verbose description
const SUMMARY_ROWS: usize = 10;

/// A named batch of items occupying `[location, location + count)` in the
/// flat weight/value arrays of a [`Knapsack`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemGroup {
    /// Name, unique within the model
    pub name: String,
    /// Index of the first item of the group
    pub location: usize,
    /// Number of items in the group
    pub count: usize,
}

impl ItemGroup {
    /// Flat item indices covered by this group
    pub fn range(&self) -> std::ops::Range<usize> {
        self.location..self.location + self.count
    }
}

/// A 0/1 knapsack problem instance.
///
/// Items are stored in two parallel flat arrays in insertion order and are
/// only ever appended, one named group at a time. Weights must be
/// non-negative. Values may be negative; the solver does the arithmetic but
/// a selection containing negative values is rarely a meaningful answer.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawKnapsack"))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Knapsack {
    capacity: i64,
    weights: Vec<i64>,
    values: Vec<i64>,
    groups: Vec<ItemGroup>,
    /// Group name -> position in `groups`
    #[cfg_attr(feature = "serde", serde(skip))]
    index: HashMap<String, usize>,
}

/// Deserialized form of [`Knapsack`], rebuilt through the checked mutators
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawKnapsack {
    capacity: i64,
    weights: Vec<i64>,
    values: Vec<i64>,
    groups: Vec<ItemGroup>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawKnapsack> for Knapsack {
    type Error = KnapsackError;

    fn try_from(raw: RawKnapsack) -> Result<Self, Self::Error> {
        if raw.weights.len() != raw.values.len() {
            return Err(KnapsackError::LengthMismatch {
                weights: raw.weights.len(),
                values: raw.values.len(),
            });
        }

        let mut knapsack = Self::new(raw.capacity)?;
        for group in &raw.groups {
            // Groups must tile the item arrays in order
            let fits = group
                .location
                .checked_add(group.count)
                .is_some_and(|end| end <= raw.weights.len());
            if group.location != knapsack.item_count() || !fits {
                return Err(KnapsackError::GroupLayout(group.name.clone()));
            }
            knapsack.add_item_group(
                group.name.clone(),
                &raw.weights[group.range()],
                &raw.values[group.range()],
            )?;
        }
        if knapsack.item_count() != raw.weights.len() {
            let ungrouped = raw.weights.len() - knapsack.item_count();
            return Err(KnapsackError::UngroupedItems(ungrouped));
        }
        Ok(knapsack)
    }
}

impl Knapsack {
    /// Empty knapsack with the given capacity
    pub fn new(capacity: i64) -> Result<Self, KnapsackError> {
        if capacity < 0 {
            return Err(KnapsackError::NegativeCapacity(capacity));
        }
        Ok(Self {
            capacity,
            ..Self::default()
        })
    }

    /// Decode the standard integer-array form:
    /// `[n, capacity, w_0 .. w_{n-1}, v_0 .. v_{n-1}]`.
    ///
    /// All items land in one group named [`STANDARD_GROUP_NAME`].
    pub fn from_standard(kp_std: &[i64]) -> Result<Self, KnapsackError> {
        let declared = kp_std.first().copied().unwrap_or(0);
        let malformed = KnapsackError::MalformedEncoding {
            len: kp_std.len(),
            declared,
        };

        let n = usize::try_from(declared).map_err(|_| malformed.clone())?;
        let expected = n.checked_mul(2).and_then(|m| m.checked_add(2));
        if expected != Some(kp_std.len()) {
            return Err(malformed);
        }

        let mut knapsack = Self::new(kp_std[1])?;
        let (weights, values) = kp_std[2..].split_at(n);
        knapsack.add_item_group(STANDARD_GROUP_NAME, weights, values)?;
        Ok(knapsack)
    }

    /// Export to the standard integer-array form.
    ///
    /// The item section is interleaved as `value, weight` pairs, which is not
    /// the block layout [`Knapsack::from_standard`] reads. Feeding this output
    /// back into the decoder does not reproduce the model.
    pub fn to_standard(&self) -> Vec<i64> {
        let mut result = Vec::with_capacity(2 + 2 * self.item_count());
        result.push(self.item_count() as i64);
        result.push(self.capacity);
        for (&weight, &value) in self.weights.iter().zip(&self.values) {
            result.push(value);
            result.push(weight);
        }
        result
    }

    pub fn capacity(&self) -> i64 {
        self.capacity
    }

    /// Replace the capacity. Not validated; see [`Knapsack::check_consistency`].
    pub fn set_capacity(&mut self, capacity: i64) {
        self.capacity = capacity;
    }

    /// Append a single item as its own group
    pub fn add_item(
        &mut self,
        name: impl Into<String>,
        weight: i64,
        value: i64,
    ) -> Result<(), KnapsackError> {
        self.add_item_group(name, &[weight], &[value])
    }

    /// Append a group of items sharing one name.
    ///
    /// Nothing is modified when an error is returned.
    pub fn add_item_group(
        &mut self,
        name: impl Into<String>,
        weights: &[i64],
        values: &[i64],
    ) -> Result<(), KnapsackError> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(KnapsackError::DuplicateName(name));
        }
        if weights.len() != values.len() {
            return Err(KnapsackError::LengthMismatch {
                weights: weights.len(),
                values: values.len(),
            });
        }
        if let Some(&weight) = weights.iter().find(|&&w| w < 0) {
            return Err(KnapsackError::NegativeWeight { name, weight });
        }

        let location = self.weights.len();
        self.weights.extend_from_slice(weights);
        self.values.extend_from_slice(values);
        self.index.insert(name.clone(), self.groups.len());
        self.groups.push(ItemGroup {
            name,
            location,
            count: weights.len(),
        });
        Ok(())
    }

    /// Weight of the `index`-th item (0-based) of the named group
    pub fn get_weight(&self, name: &str, index: usize) -> Result<i64, KnapsackError> {
        self.locate(name, index).map(|i| self.weights[i])
    }

    /// Value of the `index`-th item (0-based) of the named group
    pub fn get_value(&self, name: &str, index: usize) -> Result<i64, KnapsackError> {
        self.locate(name, index).map(|i| self.values[i])
    }

    fn locate(&self, name: &str, index: usize) -> Result<usize, KnapsackError> {
        let group = self
            .group(name)
            .ok_or_else(|| KnapsackError::UnknownName(name.to_string()))?;
        if index >= group.count {
            return Err(KnapsackError::IndexOutOfRange {
                name: name.to_string(),
                index,
                count: group.count,
            });
        }
        Ok(group.location + index)
    }

    /// Total number of items across all groups
    pub fn item_count(&self) -> usize {
        self.weights.len()
    }

    /// Number of items in the named group, 0 when the name is unknown
    pub fn group_count(&self, name: &str) -> usize {
        self.group(name).map_or(0, |g| g.count)
    }

    pub fn num_groups(&self) -> usize {
        self.groups.len()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn group(&self, name: &str) -> Option<&ItemGroup> {
        self.index.get(name).map(|&g| &self.groups[g])
    }

    /// Groups in insertion order
    pub fn groups(&self) -> impl Iterator<Item = &ItemGroup> {
        self.groups.iter()
    }

    /// Flat weights in item order
    pub fn weights(&self) -> &[i64] {
        &self.weights
    }

    /// Flat values in item order
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Re-verify the structural invariants of the model.
    ///
    /// Mutators keep these true on their own; this exists for callers that
    /// want to double-check, and it also catches a negative capacity set
    /// through [`Knapsack::set_capacity`].
    pub fn check_consistency(&self) -> bool {
        if self.capacity < 0 || self.weights.len() != self.values.len() {
            return false;
        }
        if self.index.len() != self.groups.len() {
            return false;
        }

        let mut end = 0;
        for (position, group) in self.groups.iter().enumerate() {
            if self.index.get(&group.name) != Some(&position) {
                return false;
            }
            // Groups are appended, so ranges are ordered and disjoint
            if group.location < end || group.location + group.count > self.weights.len() {
                return false;
            }
            end = group.location + group.count;
        }
        true
    }

    /// Display label of an item row: the bare name for singletons,
    /// `name[k/count]` (1-based) inside larger groups
    fn row_label(group: &ItemGroup, k: usize) -> String {
        if group.count == 1 {
            group.name.clone()
        } else {
            format!("{}[{}/{}]", group.name, k + 1, group.count)
        }
    }
}

/// `{}` prints a summary limited to the first rows, `{:#}` prints every item.
impl fmt::Display for Knapsack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verbose = f.alternate();
        writeln!(
            f,
            "Knapsack Problem Data ({}): capacity = {}, items count = {}",
            if verbose { "Verbose" } else { "Standard" },
            self.capacity,
            self.item_count()
        )?;
        writeln!(f, "{:<20} {:<10} {:<10}", "Items[ID/CNT]", "Weight", "Value")?;

        let mut shown = 0;
        for group in &self.groups {
            for (k, i) in group.range().enumerate() {
                if !verbose && shown >= SUMMARY_ROWS {
                    return writeln!(f, "... (use the verbose form to view all items)");
                }
                shown += 1;
                writeln!(
                    f,
                    "{:<20} {:<10} {:<10}",
                    Self::row_label(group, k),
                    self.weights[i],
                    self.values[i]
                )?;
            }
        }
        Ok(())
    }
}
