use std::fmt::{Display, Formatter};

use crate::{Melody, Onset, PitchClass, Universe};

/// A pattern whose pitch classes each carry a "found" flag. A fresh one is built
/// for every matching attempt.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FlaggedPattern {
    pcs: Vec<(PitchClass, bool)>,
}

impl FlaggedPattern {
    pub fn new(universe: Universe, patt: &[PitchClass]) -> Self {
        FlaggedPattern {
            pcs: patt.iter().map(|pc| (universe.pc(*pc), false)).collect(),
        }
    }

    /// Flags every pattern pitch class sounding in `onset`. Returns true if the
    /// onset held any pattern pitch class at all, whether or not it was already
    /// found.
    fn mark(&mut self, universe: Universe, onset: &Onset) -> bool {
        let mut match_in_onset = false;
        for (pc, found) in self.pcs.iter_mut() {
            if onset.iter().any(|note| universe.pc(*note) == *pc) {
                *found = true;
                match_in_onset = true;
            }
        }
        match_in_onset
    }

    pub fn all_found(&self) -> bool {
        self.pcs.iter().all(|(_, found)| *found)
    }

    pub fn found(&self) -> Vec<PitchClass> {
        self.pcs
            .iter()
            .filter(|(_, found)| *found)
            .map(|(pc, _)| *pc)
            .collect()
    }
}

/// Scans `onsets` from the start, flagging pattern pitch classes as they sound.
/// The first onset must contribute to the instance. Every later onset that
/// contributes nothing uses up one unit of `deficiency`; the scan fails once the
/// budget is overdrawn or the onsets run out.
pub fn patt_in_mel(
    universe: Universe,
    flagged: &mut FlaggedPattern,
    onsets: &[Onset],
    deficiency: usize,
) -> bool {
    let mut remaining = deficiency as isize;
    for (i, onset) in onsets.iter().enumerate() {
        if remaining < 0 {
            return false;
        }
        let match_in_onset = flagged.mark(universe, onset);
        if flagged.all_found() {
            return true;
        } else if i == 0 && !match_in_onset {
            return false;
        } else if !match_in_onset {
            remaining -= 1;
        }
    }
    false
}

pub fn instance_check(
    universe: Universe,
    patt: &[PitchClass],
    onsets: &[Onset],
    deficiency: usize,
) -> bool {
    patt_in_mel(
        universe,
        &mut FlaggedPattern::new(universe, patt),
        onsets,
        deficiency,
    )
}

/// One occurrence of a set class in a melody: the transformation that matched and
/// the onset where it begins.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Instance {
    expansion: Vec<PitchClass>,
    start: usize,
}

impl Instance {
    pub fn new(expansion: Vec<PitchClass>, start: usize) -> Self {
        Instance { expansion, start }
    }

    pub fn expansion(&self) -> &[PitchClass] {
        &self.expansion
    }

    pub fn start(&self) -> usize {
        self.start
    }
}

impl Display for Instance {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?}", self.start, self.expansion)
    }
}

/// Every (transformation, start) pair of `patt` found in `melody`. Overlapping
/// instances are all kept.
pub fn find_instances(
    universe: Universe,
    patt: &[PitchClass],
    melody: &Melody,
    deficiency: usize,
) -> Vec<Instance> {
    let expansions = universe.all_transformations(patt);
    let mut result = vec![];
    for start in 0..melody.len() {
        for tf in expansions.iter() {
            if instance_check(universe, tf, melody.suffix(start), deficiency) {
                result.push(Instance::new(tf.clone(), start));
            }
        }
    }
    result
}

/// Tracks which pitch of which onset has taken part in an instance.
#[derive(Clone, Debug)]
struct Coverage {
    flags: Vec<Vec<bool>>,
}

impl Coverage {
    fn new(melody: &Melody) -> Self {
        Coverage {
            flags: melody.iter().map(|onset| vec![false; onset.len()]).collect(),
        }
    }

    /// Claims every pitch in `expansion` from `start` to the end of the melody,
    /// stopping once more than `deficiency` onsets contributed nothing.
    fn claim(
        &mut self,
        universe: Universe,
        expansion: &[PitchClass],
        melody: &Melody,
        start: usize,
        deficiency: usize,
    ) {
        let mut misses = 0;
        for x in start..melody.len() {
            let mut in_onset = false;
            for (y, note) in melody[x].iter().enumerate() {
                if expansion.contains(&universe.pc(*note)) {
                    self.flags[x][y] = true;
                    in_onset = true;
                }
            }
            if !in_onset {
                misses += 1;
                if misses > deficiency {
                    break;
                }
            }
        }
    }

    fn complete(&self) -> bool {
        self.flags.iter().all(|onset| onset.iter().all(|f| *f))
    }
}

/// Whether every pitch of `melody` belongs to some instance of `patt`.
pub fn explained_by_patt(
    universe: Universe,
    patt: &[PitchClass],
    melody: &Melody,
    deficiency: usize,
) -> bool {
    let expansions = universe.all_transformations(patt);
    let mut coverage = Coverage::new(melody);
    for start in 0..melody.len() {
        for tf in expansions.iter() {
            if instance_check(universe, tf, melody.suffix(start), deficiency) {
                coverage.claim(universe, tf, melody, start, deficiency);
            }
        }
    }
    coverage.complete()
}
