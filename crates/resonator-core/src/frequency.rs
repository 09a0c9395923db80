//! Frequency axis helpers
//!
//! Unit multipliers for scaling file frequencies to Hz, and the position
//! search used when trimming a spectrum to a frequency range.

/// Frequency unit enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrequencyUnit {
    #[default]
    Hz,
    KHz,
    MHz,
    GHz,
    THz,
}

impl FrequencyUnit {
    /// Get the multiplier to convert to Hz
    pub fn multiplier(&self) -> f64 {
        match self {
            FrequencyUnit::Hz => 1.0,
            FrequencyUnit::KHz => 1e3,
            FrequencyUnit::MHz => 1e6,
            FrequencyUnit::GHz => 1e9,
            FrequencyUnit::THz => 1e12,
        }
    }
}

/// Index of the last sample whose frequency is strictly below `target`.
///
/// Scans the whole slice, so the result does not depend on the data being
/// sorted. Returns `0` when no sample qualifies, which makes a bound below
/// the first sample behave like an exact lower bound. This is not a
/// `partition_point`: for ascending data `[1, 2, 3]` and `target = 2.5` it
/// returns `1`, not `2`.
pub fn last_index_below<'a, I>(frequencies: I, target: f64) -> usize
where
    I: IntoIterator<Item = &'a f64>,
{
    let mut pos = 0;
    for (i, &f) in frequencies.into_iter().enumerate() {
        if f < target {
            pos = i;
        }
    }
    pos
}
