use std::fmt::{Display, Formatter};
use tracing::{debug, info};
use vecmap::VecMap;

use crate::{explained_by_patt, find_instances, Melody, PitchClass, Universe};

/// Every set class in `catalog` that explains `melody` at `deficiency`, in catalog
/// order.
pub fn deficiency_given_set_classes(
    universe: Universe,
    catalog: &[Vec<PitchClass>],
    melody: &Melody,
    deficiency: usize,
) -> Vec<Vec<PitchClass>> {
    catalog
        .iter()
        .filter(|sc| explained_by_patt(universe, sc, melody, deficiency))
        .cloned()
        .collect()
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SearchRound {
    pub deficiency: usize,
    pub set_classes: Vec<Vec<PitchClass>>,
}

impl Display for SearchRound {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "deficiency = {}", self.deficiency)?;
        for sc in self.set_classes.iter() {
            writeln!(f, "{sc:?}")?;
        }
        Ok(())
    }
}

/// Finds the explanatory set classes at `deficiency`, then keeps lowering the
/// deficiency over only the survivors of the previous round. Stops after an empty
/// round or after deficiency 0.
pub fn exhaustive_search(
    universe: Universe,
    catalog: &[Vec<PitchClass>],
    melody: &Melody,
    deficiency: usize,
) -> Vec<SearchRound> {
    let mut rounds = vec![];
    let mut working = catalog.to_vec();
    let mut deficiency = deficiency;
    loop {
        working = deficiency_given_set_classes(universe, &working, melody, deficiency);
        info!("deficiency {deficiency}: {} set classes", working.len());
        let done = working.is_empty() || deficiency == 0;
        rounds.push(SearchRound {
            deficiency,
            set_classes: working.clone(),
        });
        if done {
            return rounds;
        }
        deficiency -= 1;
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CountGroup {
    pub count: usize,
    pub set_classes: Vec<Vec<PitchClass>>,
}

impl Display for CountGroup {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.count)?;
        for sc in self.set_classes.iter() {
            writeln!(f, "{sc:?}")?;
        }
        Ok(())
    }
}

/// The explanatory set classes grouped by how many instances each has in
/// `melody`, most instances first.
pub fn covering_sets_by_count(
    universe: Universe,
    catalog: &[Vec<PitchClass>],
    melody: &Melody,
    deficiency: usize,
) -> Vec<CountGroup> {
    let mut count2classes = VecMap::new();
    for sc in deficiency_given_set_classes(universe, catalog, melody, deficiency) {
        let count = find_instances(universe, &sc, melody, deficiency).len();
        debug!("{sc:?}: {count} instances");
        match count2classes.get_mut(&count) {
            None => {
                count2classes.insert(count, vec![sc]);
            }
            Some(classes) => classes.push(sc),
        }
    }
    let mut groups = count2classes
        .drain(..)
        .map(|(count, set_classes)| CountGroup { count, set_classes })
        .collect::<Vec<_>>();
    groups.sort_by(|a, b| b.count.cmp(&a.count));
    groups
}
