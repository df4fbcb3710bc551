//! Schedule value types.

use crate::airplane::AirplaneId;

/// One landing slot in a schedule.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LandingRecord {
    pub airplane_id: AirplaneId,
    /// Hours from the scheduling epoch.
    pub actual_landing_time: f64,
    /// Urgency of the airplane when the record was built.
    pub is_urgent: bool,
    /// 1-based runway number.
    pub runway: usize,
    /// `None` until the record has been scored.
    pub score: Option<f64>,
}

/// An ordered sequence of landing records.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schedule {
    records: Vec<LandingRecord>,
}

impl Schedule {
    pub fn new(records: Vec<LandingRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[LandingRecord] {
        &self.records
    }

    pub(crate) fn records_mut(&mut self) -> &mut [LandingRecord] {
        &mut self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LandingRecord> {
        self.records.iter()
    }

    /// Returns a copy with the records at `i` and `j` exchanged verbatim.
    pub fn swapped(&self, i: usize, j: usize) -> Schedule {
        let mut next = self.clone();
        next.records.swap(i, j);
        next
    }

    /// Sum of the scores that are present.
    ///
    /// Unscored records contribute nothing; stale scores are counted as is.
    pub fn total_score(&self) -> f64 {
        self.records.iter().filter_map(|r| r.score).sum()
    }

    /// Ordered airplane ids, the structural identity of a schedule.
    pub fn key(&self) -> Vec<AirplaneId> {
        self.records.iter().map(|r| r.airplane_id).collect()
    }

    /// Position of the first record for `id`.
    pub fn position_of(&self, id: AirplaneId) -> Option<usize> {
        self.records.iter().position(|r| r.airplane_id == id)
    }
}

impl From<Vec<LandingRecord>> for Schedule {
    fn from(records: Vec<LandingRecord>) -> Self {
        Schedule::new(records)
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a LandingRecord;
    type IntoIter = std::slice::Iter<'a, LandingRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
