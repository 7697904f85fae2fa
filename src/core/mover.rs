//! Move every zero in a sequence to its tail while keeping the non-zero values in order.
//!
//! Two equivalent strategies are offered:
//!
//! * [`move_zeros_in_place`] compacts the caller's slice with a write cursor. It mutates
//!   the slice, uses no extra storage and performs exactly `N` reads and at most `N` writes.
//! * [`move_zeros`] filters the non-zero values into a new vector and pads it with zeros.
//!   The input is left untouched.
//!
//! "Zero" is `T::default()`, which is `0` for every primitive integer type.

use serde::{Deserialize, Serialize};

/// Which of the two algorithms to run. Both always produce the same output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// In-place two-pointer compaction.
    #[default]
    Compact,
    /// Copy the non-zero values, then append the zeros.
    FilterPad,
}

impl Strategy {
    pub fn apply(self, mut values: Vec<i64>) -> Vec<i64> {
        match self {
            Strategy::Compact => {
                move_zeros_in_place(&mut values);
                values
            }
            Strategy::FilterPad => move_zeros(&values),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Compact => "compact",
            Strategy::FilterPad => "filter-pad",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compacts the non-zero values to the front of `values` and zero-fills the rest.
///
/// Returns the final write cursor, i.e. the number of non-zero values.
pub fn move_zeros_in_place<T>(values: &mut [T]) -> usize
where
    T: Copy + Default + PartialEq,
{
    let zero = T::default();
    let mut cursor = 0;

    for i in 0..values.len() {
        let value = values[i];
        if value != zero {
            values[cursor] = value;
            cursor += 1;
        }
    }

    values[cursor..].fill(zero);
    cursor
}

/// Returns a new vector with the non-zero values of `values` in order, followed by its zeros.
#[must_use]
pub fn move_zeros<T>(values: &[T]) -> Vec<T>
where
    T: Copy + Default + PartialEq,
{
    let zero = T::default();

    let mut moved: Vec<T> = Vec::with_capacity(values.len());
    moved.extend(values.iter().copied().filter(|v| *v != zero));
    // 補回被濾掉的零
    moved.resize(values.len(), zero);
    moved
}

pub fn count_zeros<T>(values: &[T]) -> usize
where
    T: Default + PartialEq,
{
    let zero = T::default();
    values.iter().filter(|v| **v == zero).count()
}

/// True when no non-zero value appears after a zero.
pub fn is_zeros_trailing<T>(values: &[T]) -> bool
where
    T: Default + PartialEq,
{
    let zero = T::default();
    match values.iter().position(|v| *v == zero) {
        Some(first_zero) => values[first_zero..].iter().all(|v| *v == zero),
        None => true,
    }
}
