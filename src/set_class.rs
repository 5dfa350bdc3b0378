use itertools::Itertools;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use tracing::debug;

use crate::{rotated, Advisory, PitchClass, Universe};

/// Returns true if `a` is less right-packed than `b`: scanning from the end, the
/// first position where they differ holds the smaller value in `a`. Ties are not
/// less.
pub fn is_less_right_packed(a: &[PitchClass], b: &[PitchClass]) -> bool {
    Advisory::report_if(length_mismatch_advisory(a, b));
    for (x, y) in a.iter().rev().zip(b.iter().rev()) {
        match x.cmp(y) {
            Ordering::Less => return true,
            Ordering::Greater => return false,
            Ordering::Equal => {}
        }
    }
    false
}

pub fn length_mismatch_advisory(a: &[PitchClass], b: &[PitchClass]) -> Option<Advisory> {
    if a.len() != b.len() {
        Some(Advisory::LengthMismatch {
            left: a.len(),
            right: b.len(),
        })
    } else {
        None
    }
}

impl Universe {
    /// The prime form of `patt`: among every rotation of the collection and of its
    /// inversion, each transposed to start on 0, the least right-packed one.
    pub fn prime_form(&self, patt: &[PitchClass]) -> Vec<PitchClass> {
        let coll = self.collection(patt);
        let coll_inv = self.collection(&self.invert(&coll, 0));
        let mut prime_form = coll.clone();
        for candidate in [&coll, &coll_inv] {
            for r in 0..candidate.len() {
                let rotation = rotated(candidate, r);
                let test = self.transpose(&rotation, -rotation[0]);
                if is_less_right_packed(&test, &prime_form) {
                    prime_form = test;
                }
            }
        }
        prime_form
    }

    /// Every distinct set class with cardinality in `low..=high`, smallest
    /// cardinality first.
    pub fn set_classes_by_cardinality(&self, low: usize, high: usize) -> Vec<Vec<PitchClass>> {
        let mut seen = BTreeSet::new();
        let mut result = vec![];
        for card in low..=high {
            for combination in self.aggregate().into_iter().combinations(card) {
                let prime_form = self.prime_form(&combination);
                if seen.insert(prime_form.clone()) {
                    result.push(prime_form);
                }
            }
        }
        debug!("{} set classes with cardinality {low}..={high}", result.len());
        result
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        is_less_right_packed, length_mismatch_advisory, rotated, Advisory, PitchClass, Universe,
    };
    use rand::seq::SliceRandom;
    use rand::Rng;

    const NUM_RANDOM_TESTS: usize = 20;

    #[test]
    fn test_right_packing() {
        assert!(is_less_right_packed(&[0, 1, 5], &[0, 4, 6]));
        assert!(!is_less_right_packed(&[0, 4, 6], &[0, 1, 5]));
        assert!(is_less_right_packed(&[0, 1, 4, 7], &[0, 3, 4, 7]));
        assert!(!is_less_right_packed(&[0, 3, 7], &[0, 3, 7]));
        assert!(!is_less_right_packed(&[5], &[5]));
        assert!(is_less_right_packed(&[4], &[5]));
        assert!(!is_less_right_packed(&[], &[]));
    }

    #[test]
    fn test_length_mismatch() {
        assert_eq!(length_mismatch_advisory(&[0, 1], &[0, 1]), None);
        assert_eq!(
            length_mismatch_advisory(&[0, 1, 2], &[0, 2]),
            Some(Advisory::LengthMismatch { left: 3, right: 2 })
        );
        assert!(is_less_right_packed(&[0, 3, 5], &[6]));
        assert!(!is_less_right_packed(&[0, 1, 6], &[6]));
    }

    #[test]
    fn test_prime_forms() {
        let u = Universe::default();
        assert_eq!(u.prime_form(&[0, 4, 7]), vec![0, 3, 7]);
        assert_eq!(u.prime_form(&[0, 3, 7]), vec![0, 3, 7]);
        assert_eq!(u.prime_form(&[7, 11, 2]), vec![0, 3, 7]);
        assert_eq!(u.prime_form(&[2, 4, 7, 9, 0]), vec![0, 2, 4, 7, 9]);
        assert_eq!(u.prime_form(&[0, 2, 4, 5, 7, 9, 11]), vec![0, 1, 3, 5, 6, 8, 10]);
        assert_eq!(u.prime_form(&[0, 4, 8]), vec![0, 4, 8]);
        assert_eq!(u.prime_form(&[0, 1, 4, 6]), vec![0, 1, 4, 6]);
        assert_eq!(u.prime_form(&[0, 1, 3, 7]), vec![0, 1, 3, 7]);
        assert_eq!(u.prime_form(&[0, 0, 4, 4, 7, 19]), vec![0, 3, 7]);
    }

    #[test]
    fn test_degenerate_prime_forms() {
        let u = Universe::default();
        assert_eq!(u.prime_form(&[]), Vec::<PitchClass>::new());
        assert_eq!(u.prime_form(&[0]), vec![0]);
        assert_eq!(u.prime_form(&[5]), vec![0]);
        assert_eq!(u.prime_form(&u.aggregate()), u.aggregate());
    }

    #[test]
    fn test_prime_form_invariance() {
        let mut rng = rand::thread_rng();
        for size in [7, 12] {
            let u = Universe::new(size).unwrap();
            for _ in 0..NUM_RANDOM_TESTS {
                let mut patt = u.aggregate();
                patt.shuffle(&mut rng);
                patt.truncate(rng.gen_range(1..=u.size_usize()));
                let prime = u.prime_form(&patt);
                for k in 0..size {
                    assert_eq!(prime, u.prime_form(&u.transpose(&patt, k)));
                }
                for r in 0..patt.len() {
                    assert_eq!(prime, u.prime_form(&rotated(&patt, r)));
                }
                assert_eq!(prime, u.prime_form(&u.invert(&patt, 0)));
                assert_eq!(prime[0], 0);
            }
        }
    }

    #[test]
    fn test_set_class_counts() {
        let u = Universe::default();
        let expected = [1, 1, 6, 12, 29, 38, 50, 38, 29, 12, 6, 1, 1];
        for (card, count) in expected.iter().enumerate() {
            assert_eq!(u.set_classes_by_cardinality(card, card).len(), *count);
        }
        let trichords = u.set_classes_by_cardinality(3, 3);
        println!("{trichords:?}");
        assert_eq!(trichords[0], vec![0, 1, 2]);
        assert!(trichords.contains(&vec![0, 3, 7]));
        assert!(!trichords.contains(&vec![0, 4, 7]));
        assert_eq!(u.set_classes_by_cardinality(3, 4).len(), 12 + 29);
    }
}
