use anyhow::bail;
use bare_metal_modulo::{MNum, ModNum};
use std::collections::BTreeSet;

use crate::Advisory;

pub type PitchClass = i32;

pub const DEFAULT_UNIVERSE_SIZE: PitchClass = 12;

/// The cyclic pitch-class space `{0 .. size - 1}`. Every operation takes its
/// results mod `size`, so callers may pass any integers in.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Universe {
    size: PitchClass,
}

impl Default for Universe {
    fn default() -> Self {
        Universe {
            size: DEFAULT_UNIVERSE_SIZE,
        }
    }
}

impl Universe {
    pub fn new(size: PitchClass) -> anyhow::Result<Self> {
        if size <= 0 {
            bail!("Universe size must be positive, not {size}");
        }
        Ok(Universe { size })
    }

    pub fn size(&self) -> PitchClass {
        self.size
    }

    pub fn size_usize(&self) -> usize {
        self.size as usize
    }

    pub fn pc(&self, value: PitchClass) -> PitchClass {
        self.wrap(value as i64)
    }

    /// Reduces a widened intermediate. Operands are reduced before they are
    /// combined, so sums, differences and products of two pitch classes fit.
    fn wrap(&self, value: i64) -> PitchClass {
        ModNum::new(value, self.size as i64).a() as PitchClass
    }

    /// `a - b` as a pitch class.
    pub fn difference(&self, a: PitchClass, b: PitchClass) -> PitchClass {
        self.wrap(self.pc(a) as i64 - self.pc(b) as i64)
    }

    pub fn reduced(&self, patt: &[PitchClass]) -> Vec<PitchClass> {
        patt.iter().map(|p| self.pc(*p)).collect()
    }

    /// Sorted, duplicate-free pitch classes of `patt`.
    pub fn collection(&self, patt: &[PitchClass]) -> Vec<PitchClass> {
        patt.iter()
            .map(|p| self.pc(*p))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn aggregate(&self) -> Vec<PitchClass> {
        (0..self.size).collect()
    }

    pub fn max_distributed(&self, cardinality: usize) -> Vec<PitchClass> {
        Advisory::report_if(self.cardinality_advisory(cardinality));
        (0..cardinality)
            .map(|x| (x * self.size_usize() / cardinality) as PitchClass)
            .collect()
    }

    pub fn cardinality_advisory(&self, cardinality: usize) -> Option<Advisory> {
        if cardinality > self.size_usize() {
            Some(Advisory::CardinalityExceeded {
                cardinality,
                universe: self.size,
            })
        } else {
            None
        }
    }

    pub fn transpose(&self, patt: &[PitchClass], index: PitchClass) -> Vec<PitchClass> {
        patt.iter().map(|note| self.wrap(self.pc(*note) as i64 + self.pc(index) as i64)).collect()
    }

    pub fn invert(&self, patt: &[PitchClass], index: PitchClass) -> Vec<PitchClass> {
        patt.iter().map(|note| self.difference(index, *note)).collect()
    }

    pub fn retrograde(&self, patt: &[PitchClass]) -> Vec<PitchClass> {
        patt.iter().rev().copied().collect()
    }

    /// The M operation. Non-coprime multipliers collapse pitch classes together;
    /// that is reported but still carried out.
    pub fn multiply(&self, patt: &[PitchClass], index: PitchClass) -> Vec<PitchClass> {
        Advisory::report_if(self.multiplier_advisory(index));
        patt.iter().map(|note| self.wrap(self.pc(*note) as i64 * self.pc(index) as i64)).collect()
    }

    pub fn multiplier_advisory(&self, index: PitchClass) -> Option<Advisory> {
        if num::integer::gcd(self.pc(index), self.size) != 1 {
            Some(Advisory::NonInvertibleMultiplier {
                index,
                universe: self.size,
            })
        } else {
            None
        }
    }

    pub fn complement(&self, patt: &[PitchClass]) -> Vec<PitchClass> {
        let present = self.reduced(patt);
        (0..self.size).filter(|pc| !present.contains(pc)).collect()
    }

    /// Intervals between successive pitches. Unordered intervals fold anything
    /// above half the universe back down.
    pub fn intervals(&self, patt: &[PitchClass], ordered: bool) -> Vec<PitchClass> {
        let half = self.size / 2 + self.size % 2;
        patt.windows(2)
            .map(|pair| {
                let interval = self.difference(pair[1], pair[0]);
                if !ordered && interval > half {
                    self.size - interval
                } else {
                    interval
                }
            })
            .collect()
    }

    pub fn modes(&self, patt: &[PitchClass], fixed_pitch: bool) -> Vec<Vec<PitchClass>> {
        let mut result = vec![patt.to_vec()];
        for n in 1..patt.len() {
            let mode = rotated(patt, n);
            if fixed_pitch {
                result.push(self.transpose(&mode, self.difference(patt[0], mode[0])));
            } else {
                result.push(mode);
            }
        }
        result
    }

    /// Row `i` is `prime_form` transposed by the `i`th note of its inversion
    /// about its first note.
    pub fn matrix(&self, prime_form: &[PitchClass]) -> Vec<Vec<PitchClass>> {
        match prime_form.first() {
            None => vec![],
            Some(first) => self
                .invert(prime_form, *first)
                .iter()
                .map(|level| self.transpose(prime_form, *level))
                .collect(),
        }
    }
}

/// `patt` starting from index `start`, wrapping around.
pub fn rotated(patt: &[PitchClass], start: usize) -> Vec<PitchClass> {
    let mut result = patt[start..].to_vec();
    result.extend_from_slice(&patt[..start]);
    result
}
