//! Wins bucketed by the number of guesses used

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

use crate::consts::MAX_GUESSES;
use crate::record::GameRecord;

const BUCKETS: usize = MAX_GUESSES as usize;

/// Count of won games per guess count (1 through 6)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Distribution {
    counts: [u32; BUCKETS],
}

impl Distribution {
    /// Tally won games. Records with a guess count outside 1..=6 land in no bucket.
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a GameRecord>) -> Self {
        let mut distribution = Self::default();
        for record in records.into_iter().filter(|r| r.won) {
            if let Some(slot) = Self::index(record.guesses) {
                distribution.counts[slot] += 1;
            }
        }
        distribution
    }

    fn index(guesses: i32) -> Option<usize> {
        (1..=MAX_GUESSES)
            .contains(&guesses)
            .then(|| (guesses - 1) as usize)
    }

    /// Wins with exactly `guesses` guesses (0 outside 1..=6)
    pub fn get(&self, guesses: i32) -> u32 {
        Self::index(guesses).map(|i| self.counts[i]).unwrap_or(0)
    }

    /// `(guesses, count)` pairs in ascending guess order
    pub fn iter(&self) -> impl Iterator<Item = (i32, u32)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(i, &count)| (i as i32 + 1, count))
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Largest bucket, used to scale distribution bars
    pub fn max(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

// Keyed "1".."6" to match the shape the UI has always rendered
impl Serialize for Distribution {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let map: BTreeMap<i32, u32> = self.iter().collect();
        map.serialize(serializer)
    }
}
