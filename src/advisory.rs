use thiserror::Error;
use tracing::warn;

use crate::PitchClass;

/// Conditions that are worth telling the user about but never stop an analysis.
/// Partial or approximate answers are still useful, so every operation that can
/// raise one of these keeps going after reporting it.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum Advisory {
    #[error("set {0:?} contains duplicate pitch classes")]
    InvalidSet(Vec<PitchClass>),
    #[error("multiplier {index} and universe size {universe} are not coprime")]
    NonInvertibleMultiplier {
        index: PitchClass,
        universe: PitchClass,
    },
    #[error("comparing right-packing of sequences with lengths {left} and {right}")]
    LengthMismatch { left: usize, right: usize },
    #[error("cardinality {cardinality} exceeds universe size {universe}")]
    CardinalityExceeded {
        cardinality: usize,
        universe: PitchClass,
    },
}

impl Advisory {
    pub fn report(&self) {
        warn!("{self}");
    }

    pub fn report_if(advisory: Option<Advisory>) {
        if let Some(advisory) = advisory {
            advisory.report();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Advisory;

    #[test]
    fn test_messages() {
        assert_eq!(
            Advisory::InvalidSet(vec![0, 4, 4]).to_string(),
            "set [0, 4, 4] contains duplicate pitch classes"
        );
        assert_eq!(
            Advisory::NonInvertibleMultiplier { index: 2, universe: 12 }.to_string(),
            "multiplier 2 and universe size 12 are not coprime"
        );
        assert_eq!(
            Advisory::CardinalityExceeded { cardinality: 13, universe: 12 }.to_string(),
            "cardinality 13 exceeds universe size 12"
        );
    }
}
