use std::collections::BTreeSet;

use crate::{PitchClass, Universe};

impl Universe {
    /// Every transposition and inversion of `patt`, each as a sorted collection,
    /// without duplicates and in lexicographic order.
    pub fn all_transformations(&self, patt: &[PitchClass]) -> Vec<Vec<PitchClass>> {
        let mut tf_set = BTreeSet::new();
        for level in 0..self.size() {
            let tp = self.transpose(patt, level);
            tf_set.insert(sorted(self.invert(&tp, 0)));
            tf_set.insert(sorted(tp));
        }
        tf_set.into_iter().collect()
    }

    /// How many times `a` can be embedded in `b`, counting every transposition
    /// (or only T0) and optionally the inversion as well.
    pub fn embeddings(
        &self,
        a: &[PitchClass],
        b: &[PitchClass],
        check_transpositions: bool,
        check_inversions: bool,
    ) -> usize {
        let b = self.reduced(b);
        let tp_range = if check_transpositions { self.size() } else { 1 };
        let mut count = 0;
        for forms in [Some(a.to_vec()), check_inversions.then(|| self.invert(a, 0))] {
            if let Some(form) = forms {
                count += (0..tp_range)
                    .filter(|level| self.transpose(&form, *level).iter().all(|pc| b.contains(pc)))
                    .count();
            }
        }
        count
    }
}

fn sorted(mut patt: Vec<PitchClass>) -> Vec<PitchClass> {
    patt.sort();
    patt
}

#[cfg(test)]
mod tests {
    use crate::{PitchClass, Universe, DIATONIC, PENTATONIC, TRIAD};
    use rand::seq::SliceRandom;
    use rand::Rng;
    use std::collections::BTreeSet;

    const NUM_RANDOM_TESTS: usize = 20;

    #[test]
    fn test_triad_transformations() {
        let u = Universe::default();
        let tfs = u.all_transformations(&TRIAD);
        assert_eq!(tfs.len(), 24);
        assert_eq!(tfs[0], vec![0, 3, 7]);
        assert!(tfs.contains(&vec![0, 4, 7]));
        assert!(tfs.contains(&vec![0, 4, 9]));
        assert!(tfs.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_symmetric_transformations() {
        let u = Universe::default();
        assert_eq!(u.all_transformations(&[0, 4, 8]).len(), 4);
        assert_eq!(u.all_transformations(&[0, 3, 6, 9]).len(), 3);
        assert_eq!(u.all_transformations(&PENTATONIC).len(), 12);
        assert_eq!(u.all_transformations(&u.aggregate()), vec![u.aggregate()]);
        assert_eq!(u.all_transformations(&[]), vec![Vec::<PitchClass>::new()]);
    }

    #[test]
    fn test_transformation_closure() {
        let mut rng = rand::thread_rng();
        for size in [5, 12] {
            let u = Universe::new(size).unwrap();
            for _ in 0..NUM_RANDOM_TESTS {
                let mut patt = u.aggregate();
                patt.shuffle(&mut rng);
                patt.truncate(rng.gen_range(1..=u.size_usize()));
                let tfs = u.all_transformations(&patt);
                assert!(tfs.len() <= 2 * u.size_usize());
                let members = tfs.iter().cloned().collect::<BTreeSet<_>>();
                for tf in tfs.iter() {
                    for level in 0..size {
                        assert!(members.contains(&u.collection(&u.transpose(tf, level))));
                        assert!(members.contains(&u.collection(&u.invert(tf, level))));
                    }
                }
            }
        }
    }

    #[test]
    fn test_embeddings() {
        let u = Universe::default();
        let major_scale = [0, 2, 4, 5, 7, 9, 11];
        assert_eq!(u.embeddings(&[0, 4, 7], &major_scale, true, false), 3);
        assert_eq!(u.embeddings(&[0, 4, 7], &major_scale, true, true), 6);
        assert_eq!(u.embeddings(&[0, 4, 7], &major_scale, false, true), 1);
        assert_eq!(u.embeddings(&[0, 4, 7], &major_scale, false, false), 1);
        assert_eq!(u.embeddings(&[0, 1], &DIATONIC, true, false), 2);
        assert_eq!(u.embeddings(&[0, 4, 7], &[1, 2, 3], true, true), 0);
    }
}
