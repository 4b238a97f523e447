//! Absent-value aware comparison.

use std::cmp::Ordering;

use canopy_shared::AbsentOrder;

/// Compares two optional values under an absent-value policy.
///
/// Present values are compared with `compare`; absent values sort
/// before or after all present values according to `absent`, and two
/// absent values are equal. The result is a total order as long as
/// `compare` is one over present values.
///
/// # Arguments
///
/// * `a`, `b` - The values to compare
/// * `absent` - Where absent values sort relative to present ones
/// * `compare` - Comparison for two present values
pub fn compare_optional<T>(
    a: Option<&T>,
    b: Option<&T>,
    absent: AbsentOrder,
    compare: impl FnOnce(&T, &T) -> Ordering,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => compare(a, b),
        (None, None) => Ordering::Equal,
        (None, Some(_)) => match absent {
            AbsentOrder::First => Ordering::Less,
            AbsentOrder::Last => Ordering::Greater,
        },
        (Some(_), None) => match absent {
            AbsentOrder::First => Ordering::Greater,
            AbsentOrder::Last => Ordering::Less,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_values_use_the_comparison() {
        let ordering = compare_optional(Some(&1), Some(&2), AbsentOrder::First, Ord::cmp);
        assert_eq!(ordering, Ordering::Less);
    }

    #[test]
    fn absent_first_sorts_none_before_some() {
        assert_eq!(
            compare_optional::<i32>(None, Some(&1), AbsentOrder::First, Ord::cmp),
            Ordering::Less
        );
        assert_eq!(
            compare_optional::<i32>(Some(&1), None, AbsentOrder::First, Ord::cmp),
            Ordering::Greater
        );
    }

    #[test]
    fn absent_last_sorts_none_after_some() {
        assert_eq!(
            compare_optional::<i32>(None, Some(&1), AbsentOrder::Last, Ord::cmp),
            Ordering::Greater
        );
        assert_eq!(
            compare_optional::<i32>(Some(&1), None, AbsentOrder::Last, Ord::cmp),
            Ordering::Less
        );
    }

    #[test]
    fn two_absent_values_are_equal() {
        assert_eq!(
            compare_optional::<i32>(None, None, AbsentOrder::First, Ord::cmp),
            Ordering::Equal
        );
    }
}
