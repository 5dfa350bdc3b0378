use anyhow::bail;
use enum_iterator::Sequence;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::PitchClass;

pub const TRIAD: [PitchClass; 3] = [0, 3, 7];
pub const PENTATONIC: [PitchClass; 5] = [0, 2, 4, 7, 9];
pub const DIATONIC: [PitchClass; 7] = [0, 1, 3, 5, 6, 8, 10];

const TWINKLE: &[&[PitchClass]] = &[
    &[0], &[0], &[7], &[7], &[9], &[9], &[7], &[5], &[5], &[4], &[4], &[2], &[2], &[0],
];

const KLAVIERSTUCK_III: &[&[PitchClass]] = &[
    &[9], &[11], &[2], &[8], &[10], &[9], &[8], &[11], &[5], &[3], &[2], &[4], &[8, 7], &[6],
    &[5], &[4], &[10], &[2], &[3, 11], &[8, 5, 9], &[1, 10], &[4], &[5], &[6], &[3], &[7],
    &[4], &[11, 8, 10], &[0], &[9], &[7, 1, 4], &[8], &[5], &[3], &[6], &[11], &[4], &[3],
    &[2], &[1, 10], &[8], &[7], &[0], &[9], &[11],
];

/// The pitch classes sounding at one moment of a melody: a single note or a chord.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Onset {
    pcs: Vec<PitchClass>,
}

impl Onset {
    pub fn note(pc: PitchClass) -> Self {
        Onset { pcs: vec![pc] }
    }

    pub fn chord(pcs: &[PitchClass]) -> anyhow::Result<Self> {
        if pcs.is_empty() {
            bail!("An onset needs at least one pitch class");
        }
        Ok(Onset { pcs: pcs.to_vec() })
    }

    pub fn pcs(&self) -> &[PitchClass] {
        &self.pcs
    }

    pub fn len(&self) -> usize {
        self.pcs.len()
    }

    pub fn is_chord(&self) -> bool {
        self.pcs.len() > 1
    }

    pub fn iter(&self) -> impl Iterator<Item = &PitchClass> {
        self.pcs.iter()
    }
}

impl Display for Onset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_chord() {
            let inner = self.pcs.iter().map(|pc| pc.to_string()).collect::<Vec<_>>();
            write!(f, "({})", inner.join(" "))
        } else {
            write!(f, "{}", self.pcs[0])
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Default)]
pub struct Melody {
    onsets: Vec<Onset>,
}

impl Melody {
    pub fn new() -> Self {
        Melody { onsets: vec![] }
    }

    pub fn from_onsets(onsets: Vec<Onset>) -> Self {
        Melody { onsets }
    }

    /// One single-note onset per pitch.
    pub fn from_notes(notes: &[PitchClass]) -> Self {
        Melody {
            onsets: notes.iter().map(|pc| Onset::note(*pc)).collect(),
        }
    }

    fn packed(onsets: &[&[PitchClass]]) -> Self {
        Melody {
            onsets: onsets.iter().map(|pcs| Onset { pcs: pcs.to_vec() }).collect(),
        }
    }

    pub fn add(&mut self, onset: Onset) {
        self.onsets.push(onset);
    }

    pub fn onsets(&self) -> &[Onset] {
        &self.onsets
    }

    /// The melody from onset `start` onward.
    pub fn suffix(&self, start: usize) -> &[Onset] {
        &self.onsets[start..]
    }

    pub fn len(&self) -> usize {
        self.onsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.onsets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Onset> {
        self.onsets.iter()
    }

    pub fn num_pitches(&self) -> usize {
        self.onsets.iter().map(|o| o.len()).sum()
    }
}

impl std::ops::Index<usize> for Melody {
    type Output = Onset;

    fn index(&self, index: usize) -> &Self::Output {
        &self.onsets[index]
    }
}

impl Display for Melody {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let onsets = self.onsets.iter().map(|o| o.to_string()).collect::<Vec<_>>();
        write!(f, "{}", onsets.join(" "))
    }
}

fn tokens(s: &str) -> Vec<String> {
    s.replace('(', " ( ")
        .replace(')', " ) ")
        .replace(',', " ")
        .split_whitespace()
        .map(|t| t.to_owned())
        .collect()
}

/// Parses literals like `9 11 2 (8 7) 6`, where a parenthesised group is a chord.
/// Commas are treated as whitespace.
impl FromStr for Melody {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut melody = Melody::new();
        let mut chord: Option<Vec<PitchClass>> = None;
        for token in tokens(s) {
            match token.as_str() {
                "(" => {
                    if chord.is_some() {
                        bail!("Nested chord in \"{s}\"");
                    }
                    chord = Some(vec![]);
                }
                ")" => match chord.take() {
                    Some(pcs) => melody.add(Onset::chord(&pcs)?),
                    None => bail!("Unmatched ')' in \"{s}\""),
                },
                number => {
                    let pc = match number.parse::<PitchClass>() {
                        Ok(pc) => pc,
                        Err(_) => bail!("\"{number}\" is not a pitch class"),
                    };
                    match chord.as_mut() {
                        Some(pcs) => pcs.push(pc),
                        None => melody.add(Onset::note(pc)),
                    }
                }
            }
        }
        if chord.is_some() {
            bail!("Unclosed chord in \"{s}\"");
        }
        Ok(melody)
    }
}

/// Parses a single pattern or set, e.g. `0 4 7` or `0,4,7`.
pub fn parse_pattern(s: &str) -> anyhow::Result<Vec<PitchClass>> {
    let melody = s.parse::<Melody>()?;
    if melody.iter().any(|o| o.is_chord()) {
        bail!("A pattern cannot contain chords: \"{s}\"");
    }
    Ok(melody.iter().map(|o| o.pcs()[0]).collect())
}

#[derive(Copy, Clone, Eq, PartialEq, Sequence, Debug)]
pub enum Preset {
    Twinkle,
    KlavierstuckIII,
}

impl Preset {
    pub fn melody(&self) -> Melody {
        match self {
            Preset::Twinkle => Melody::packed(TWINKLE),
            Preset::KlavierstuckIII => Melody::packed(KLAVIERSTUCK_III),
        }
    }
}

impl Display for Preset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl FromStr for Preset {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match enum_iterator::all::<Preset>().find(|p| p.to_string().eq_ignore_ascii_case(s)) {
            Some(preset) => Ok(preset),
            None => bail!("No match for {s}"),
        }
    }
}
