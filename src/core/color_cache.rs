// Assigns a stable random color to each distinct classification outcome so
// that every basin of attraction renders in a single color.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::fractals::newtons_method::PointOutcome;

/// Two converged roots closer than this (on both components) share a color.
pub const COLOR_MATCH_TOLERANCE: f64 = 1e-2;

pub type Rgb = [u8; 3];

struct CacheEntry {
    outcome: PointOutcome,
    color: Rgb,
}

/// Append-only cache from classification outcome to assigned color. Lookup
/// is a linear scan in insertion order; the first entry that matches the
/// outcome tag (and, for converged roots, both components within
/// `COLOR_MATCH_TOLERANCE`) wins. Entries live for one render.
///
/// The colors are cosmetic: the cache must never feed back into the
/// classification itself, and there is no reproducibility guarantee across
/// runs.
pub struct OutcomeColorCache {
    entries: Vec<CacheEntry>,
    rng: StdRng,
}

impl OutcomeColorCache {
    /// Cache with a fresh time-based seed, one per run.
    pub fn new() -> OutcomeColorCache {
        let seed = chrono::Local::now().timestamp_millis() as u64;
        OutcomeColorCache::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Caller-provided generator, used by tests that need fixed colors.
    pub fn with_rng(rng: StdRng) -> OutcomeColorCache {
        OutcomeColorCache {
            entries: Vec::new(),
            rng,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return the color already assigned to a matching outcome, or draw a
    /// new uniform random color and remember it.
    pub fn lookup_or_assign(&mut self, outcome: PointOutcome) -> Rgb {
        for entry in &self.entries {
            if outcomes_match(&entry.outcome, &outcome) {
                return entry.color;
            }
        }
        let color = [
            self.rng.gen_range(0..=255),
            self.rng.gen_range(0..=255),
            self.rng.gen_range(0..=255),
        ];
        self.entries.push(CacheEntry { outcome, color });
        color
    }
}

impl Default for OutcomeColorCache {
    fn default() -> Self {
        Self::new()
    }
}

fn outcomes_match(a: &PointOutcome, b: &PointOutcome) -> bool {
    match (a, b) {
        (PointOutcome::Converged(u), PointOutcome::Converged(v)) => {
            (u.re - v.re).abs() <= COLOR_MATCH_TOLERANCE
                && (u.im - v.im).abs() <= COLOR_MATCH_TOLERANCE
        }
        (PointOutcome::Diverged, PointOutcome::Diverged) => true,
        (PointOutcome::Inconclusive, PointOutcome::Inconclusive) => true,
        _ => false,
    }
}
