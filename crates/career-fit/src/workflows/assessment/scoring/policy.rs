use serde::{Deserialize, Serialize};

/// Lower bound of the "strong" band, shared by every bucketed rule.
pub const STRONG_THRESHOLD: u8 = 80;
/// Lower bound of the "moderate" band.
pub const MODERATE_THRESHOLD: u8 = 60;
/// Below this a section gets targeted improvement steps in the `Maybe` plan.
pub const IMPROVEMENT_THRESHOLD: u8 = 70;

/// Categorical verdict gated on the confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recommendation {
    Yes,
    Maybe,
    No,
}

impl Recommendation {
    pub fn from_confidence(confidence: u8) -> Self {
        match Band::of(confidence) {
            Band::Strong => Recommendation::Yes,
            Band::Moderate => Recommendation::Maybe,
            Band::Weak => Recommendation::No,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Recommendation::Yes => "Yes",
            Recommendation::Maybe => "Maybe",
            Recommendation::No => "No",
        }
    }

    pub const fn summary(self) -> &'static str {
        match self {
            Recommendation::Yes => "Excellent fit for CSR Management!",
            Recommendation::Maybe => "Good potential with some development needed",
            Recommendation::No => "Consider alternative career paths",
        }
    }
}

/// Three-way split used for the verdict, section insights, and career tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Band {
    Strong,
    Moderate,
    Weak,
}

impl Band {
    pub(crate) fn of(score: u8) -> Self {
        if score >= STRONG_THRESHOLD {
            Band::Strong
        } else if score >= MODERATE_THRESHOLD {
            Band::Moderate
        } else {
            Band::Weak
        }
    }
}
