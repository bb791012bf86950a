mod estimator;

pub use estimator::ReachEstimator;

use core::fmt;
use serde::{Deserialize, Serialize};

/// The six tracked hand categories, weakest first. The order is fixed:
/// probability vectors, win-rate weight tables and showdown ranking all
/// index by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum HandCategory {
    OnePair = 0,
    TwoPair = 1,
    ThreeOfAKind = 2,
    FourOfAKind = 3,
    Straight = 4,
    Flush = 5,
}

impl HandCategory {
    pub const ALL: [HandCategory; 6] = [
        HandCategory::OnePair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::FourOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn label(self) -> &'static str {
        match self {
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Reach probabilities for one evaluation viewpoint. Every value lies in
/// [0, 1] except `flush`, whose four suit terms are not mutually exclusive
/// and may sum past 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandChances {
    pub one_pair: f64,
    pub two_pair: f64,
    pub three_of_a_kind: f64,
    pub four_of_a_kind: f64,
    pub straight: f64,
    pub flush: f64,
}

impl HandChances {
    pub const fn from_array(values: [f64; 6]) -> Self {
        Self {
            one_pair: values[0],
            two_pair: values[1],
            three_of_a_kind: values[2],
            four_of_a_kind: values[3],
            straight: values[4],
            flush: values[5],
        }
    }

    pub const fn as_array(&self) -> [f64; 6] {
        [
            self.one_pair,
            self.two_pair,
            self.three_of_a_kind,
            self.four_of_a_kind,
            self.straight,
            self.flush,
        ]
    }

    pub const fn get(&self, category: HandCategory) -> f64 {
        self.as_array()[category.index()]
    }

    /// The highest-indexed category whose value is exactly 1.0. Showdown
    /// ranking compares on this.
    pub fn guaranteed(&self) -> Option<HandCategory> {
        HandCategory::ALL
            .iter()
            .copied()
            .rev()
            .find(|category| self.get(*category) == 1.0)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
