//! Random non-empty subsets.
//!
//! Every sampler takes the random source explicitly so seeded runs are
//! reproducible.

use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;
use travel_api::types::{Category, OpenDay};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SampleError {
    #[error("Cannot sample from an empty list")]
    Empty,
    #[error("Sample bound {bound} must be between 1 and the list length {len}")]
    BoundOutOfRange { bound: usize, len: usize },
}

/// Picks between 1 and `bound` distinct elements of `items`.
///
/// The subset size is uniform over `1..=bound`; elements are chosen
/// without replacement.
pub fn sample_items<'a, T>(
    items: &'a [T],
    bound: usize,
    rng: &mut impl Rng,
) -> Result<Vec<&'a T>, SampleError> {
    if items.is_empty() {
        return Err(SampleError::Empty);
    }
    if bound == 0 || bound > items.len() {
        return Err(SampleError::BoundOutOfRange {
            bound,
            len: items.len(),
        });
    }

    let size = rng.gen_range(1..=bound);
    Ok(items.choose_multiple(rng, size).collect())
}

/// Ids of a random non-empty subset of `categories`.
pub fn sample_category_ids(
    categories: &[Category],
    rng: &mut impl Rng,
) -> Result<Vec<String>, SampleError> {
    let picked = sample_items(categories, categories.len(), rng)?;
    Ok(picked.into_iter().map(|c| c.id.clone()).collect())
}

/// A random non-empty set of weekdays, Monday first.
pub fn sample_open_days(rng: &mut impl Rng) -> Result<Vec<OpenDay>, SampleError> {
    let mut days: Vec<OpenDay> = sample_items(&OpenDay::ALL, OpenDay::ALL.len(), rng)?
        .into_iter()
        .copied()
        .collect();
    days.sort();
    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn categories(n: usize) -> Vec<Category> {
        (0..n)
            .map(|i| Category {
                id: format!("cat-{i}"),
                title: format!("Category {i}"),
            })
            .collect()
    }

    #[test]
    fn test_category_ids_are_distinct_subset() {
        let mut rng = rand::thread_rng();

        for n in 1..=8 {
            let all = categories(n);
            let known: HashSet<&str> = all.iter().map(|c| c.id.as_str()).collect();

            for _ in 0..50 {
                let ids = sample_category_ids(&all, &mut rng).unwrap();
                assert!((1..=n).contains(&ids.len()));

                let unique: HashSet<&str> = ids.iter().map(String::as_str).collect();
                assert_eq!(unique.len(), ids.len(), "duplicate ids in {ids:?}");
                assert!(unique.is_subset(&known));
            }
        }
    }

    #[test]
    fn test_empty_categories_fail() {
        let mut rng = rand::thread_rng();
        assert_eq!(
            sample_category_ids(&[], &mut rng).unwrap_err(),
            SampleError::Empty
        );
    }

    #[test]
    fn test_items_respect_bound() {
        let mut rng = rand::thread_rng();
        let items: Vec<u32> = (0..10).collect();

        for bound in 1..=items.len() {
            for _ in 0..30 {
                let picked = sample_items(&items, bound, &mut rng).unwrap();
                assert!((1..=bound).contains(&picked.len()));

                let unique: HashSet<u32> = picked.iter().map(|v| **v).collect();
                assert_eq!(unique.len(), picked.len());
                assert!(unique.iter().all(|v| items.contains(v)));
            }
        }
    }

    #[test]
    fn test_items_reject_bad_bounds() {
        let mut rng = rand::thread_rng();
        let items = ["a", "b", "c"];

        assert_eq!(
            sample_items(&items, 4, &mut rng).unwrap_err(),
            SampleError::BoundOutOfRange { bound: 4, len: 3 }
        );
        assert_eq!(
            sample_items(&items, 0, &mut rng).unwrap_err(),
            SampleError::BoundOutOfRange { bound: 0, len: 3 }
        );
        assert_eq!(
            sample_items::<u8>(&[], 1, &mut rng).unwrap_err(),
            SampleError::Empty
        );
    }

    #[test]
    fn test_bound_of_one_picks_single_item() {
        let mut rng = rand::thread_rng();
        let picked = sample_items(&["only"], 1, &mut rng).unwrap();
        assert_eq!(picked, vec![&"only"]);
    }

    #[test]
    fn test_open_days_keep_week_order() {
        let mut rng = rand::thread_rng();

        for _ in 0..200 {
            let days = sample_open_days(&mut rng).unwrap();
            assert!(!days.is_empty());
            assert!(days.windows(2).all(|w| w[0] < w[1]), "{days:?}");

            let positions: Vec<usize> = days
                .iter()
                .map(|d| OpenDay::ALL.iter().position(|a| a == d).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
