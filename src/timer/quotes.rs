//! Motivational quote catalog and selection.
//!
//! Selection is abstracted behind the `QuoteSelector` trait so the
//! controller can be driven deterministically in tests while the
//! application uses a uniform random pick.

use rand::seq::SliceRandom;

/// The fixed quote catalog. Shown only during work intervals.
pub const QUOTE_CATALOG: [&str; 10] = [
    "Focus on being productive instead of busy.",
    "Don't watch the clock; do what it does. Keep going.",
    "Success is the sum of small efforts repeated day in and day out.",
    "Take breaks, recharge, and come back stronger.",
    "You don't have to be great to start, but you have to start to be great.",
    "Discipline is the bridge between goals and accomplishment.",
    "Small steps every day lead to big results.",
    "Your future is created by what you do today, not tomorrow.",
    "Clear your mind and stay focused.",
    "Stay positive, work hard, make it happen.",
];

/// Trait for quote selection implementations.
pub trait QuoteSelector {
    /// Picks a quote from the catalog.
    fn select(&mut self) -> &'static str;
}

/// Selects a quote uniformly at random.
#[derive(Debug, Default)]
pub struct RandomQuoteSelector;

impl RandomQuoteSelector {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl QuoteSelector for RandomQuoteSelector {
    fn select(&mut self) -> &'static str {
        let mut rng = rand::thread_rng();
        // The catalog is non-empty, so choose always yields a value
        QUOTE_CATALOG
            .choose(&mut rng)
            .copied()
            .unwrap_or(QUOTE_CATALOG[0])
    }
}

/// Deterministic selector for testing.
///
/// Returns catalog entries starting at the given index, advancing by one
/// on each call and wrapping around.
#[derive(Debug, Default)]
pub struct FixedQuoteSelector {
    next_index: usize,
}

impl FixedQuoteSelector {
    /// Creates a selector that starts at the given catalog index.
    #[must_use]
    pub fn new(start_index: usize) -> Self {
        Self {
            next_index: start_index % QUOTE_CATALOG.len(),
        }
    }
}

impl QuoteSelector for FixedQuoteSelector {
    fn select(&mut self) -> &'static str {
        let quote = QUOTE_CATALOG[self.next_index];
        self.next_index = (self.next_index + 1) % QUOTE_CATALOG.len();
        quote
    }
}

// ============================================================================
// Tests
// ============================================================================
