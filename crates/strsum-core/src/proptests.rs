// this_file: crates/strsum-core/src/proptests.rs

use super::*;
use proptest::prelude::*;

fn join(values: &[i64], separator: &str) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

// Property: in-bound non-negative values joined by the default
// separators sum arithmetically.
proptest! {
    #[test]
    fn prop_default_delimiters_sum(values in prop::collection::vec(0i64..=1000, 0..32)) {
        let input = join(&values, ",");
        prop_assert_eq!(add(&input).unwrap(), values.iter().sum::<i64>());

        let input = join(&values, "\n");
        prop_assert_eq!(add(&input).unwrap(), values.iter().sum::<i64>());
    }
}

// Property: the same holds under any declared custom delimiter,
// single-character or bracketed multi-character.
proptest! {
    #[test]
    fn prop_custom_delimiters_sum(
        values in prop::collection::vec(0i64..=1000, 1..32),
        delimiter in prop::sample::select(vec![";", "|", "***", "abc", "sep"]),
    ) {
        let expected = values.iter().sum::<i64>();

        let input = if delimiter.len() == 1 {
            format!("//{}\n{}", delimiter, join(&values, delimiter))
        } else {
            format!("//[{}]\n{}", delimiter, join(&values, delimiter))
        };
        prop_assert_eq!(add(&input).unwrap(), expected);
    }
}

// Property: any negative occurrence fails the call, and the report
// lists exactly the negatives, in order, duplicates preserved.
proptest! {
    #[test]
    fn prop_negatives_always_rejected(values in prop::collection::vec(-50i64..=1000, 1..32)) {
        let input = join(&values, ",");
        let negatives: Vec<i64> = values.iter().copied().filter(|v| *v < 0).collect();

        match add(&input) {
            Ok(total) => {
                prop_assert!(negatives.is_empty());
                prop_assert_eq!(
                    total,
                    values.iter().filter(|v| **v <= UPPER_BOUND).sum::<i64>()
                );
            }
            Err(err) => {
                prop_assert_eq!(err, SumError::NegativesNotAllowed(negatives));
            }
        }
    }
}

// Property: values above the bound contribute nothing.
proptest! {
    #[test]
    fn prop_out_of_bound_values_contribute_zero(
        small in prop::collection::vec(0i64..=1000, 0..16),
        big in prop::collection::vec(1001i64..=1_000_000, 1..8),
    ) {
        let mut all: Vec<i64> = small.clone();
        all.extend(&big);
        let input = join(&all, ",");
        prop_assert_eq!(add(&input).unwrap(), small.iter().sum::<i64>());
    }
}

// Property: blank tokens from doubled or trailing separators never
// error and never change the total.
proptest! {
    #[test]
    fn prop_blank_tokens_are_inert(values in prop::collection::vec(0i64..=1000, 0..16)) {
        let expected = values.iter().sum::<i64>();
        let doubled = format!("{},", join(&values, ",,"));
        prop_assert_eq!(add(&doubled).unwrap(), expected);
    }
}
