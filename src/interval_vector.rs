use ordered_float::OrderedFloat;

use crate::{Advisory, PitchClass, Universe};

/// Counts of each interval class, from 1 up to half the universe.
pub type IntervalVector = Vec<usize>;

impl Universe {
    pub fn interval_vector(&self, patt: &[PitchClass]) -> Result<IntervalVector, Advisory> {
        let patt = self.reduced(patt);
        if self.collection(&patt).len() != patt.len() {
            let advisory = Advisory::InvalidSet(patt);
            advisory.report();
            return Err(advisory);
        }
        let half = self.size() / 2;
        let mut result = vec![0; half as usize];
        for a in 0..patt.len() {
            for b in a + 1..patt.len() {
                let up = self.pc(patt[b] - patt[a]);
                let class = if up <= half { up } else { self.size() - up };
                result[class as usize - 1] += 1;
            }
        }
        Ok(result)
    }

    pub fn are_z_related(&self, a: &[PitchClass], b: &[PitchClass]) -> Result<bool, Advisory> {
        Ok(self.interval_vector(a)? == self.interval_vector(b)?)
    }

    /// Morris' SIM: the total difference between the interval vectors.
    pub fn similarity(&self, a: &[PitchClass], b: &[PitchClass]) -> Result<usize, Advisory> {
        let a_vec = self.interval_vector(a)?;
        let b_vec = self.interval_vector(b)?;
        Ok(a_vec.iter().zip(b_vec.iter()).map(|(x, y)| x.abs_diff(*y)).sum())
    }

    /// Morris' ASIM: SIM scaled by the combined size of both vectors. Two sets
    /// without any intervals are identical.
    pub fn absolute_similarity(
        &self,
        a: &[PitchClass],
        b: &[PitchClass],
    ) -> Result<OrderedFloat<f64>, Advisory> {
        let sim = self.similarity(a, b)?;
        let total: usize = self.interval_vector(a)?.iter().sum::<usize>()
            + self.interval_vector(b)?.iter().sum::<usize>();
        if total == 0 {
            Ok(OrderedFloat(0.0))
        } else {
            Ok(OrderedFloat(sim as f64 / total as f64))
        }
    }
}
