use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The closed classification vocabulary. Every analysis result ultimately
/// carries one of these three values; anything else coming back from the
/// model is a validation failure, not a fourth state.
///
/// The display order (halal, suspect, haram) is used for grouping only and
/// carries no ranking semantics.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[serde(alias = "حلال")]
    Halal,
    #[serde(alias = "مشبوه")]
    Suspect,
    #[serde(alias = "حرام")]
    Haram,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Halal => "halal",
            Status::Suspect => "suspect",
            Status::Haram => "haram",
        }
    }

    /// Arabic label used in prompts and rendered verdicts.
    pub fn label_ar(&self) -> &'static str {
        match self {
            Status::Halal => "حلال",
            Status::Suspect => "مشبوه",
            Status::Haram => "حرام",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Status::Halal => Tone::Positive,
            Status::Suspect => Tone::Warning,
            Status::Haram => Tone::Danger,
        }
    }
}

impl FromStr for Status {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "halal" | "حلال" => Ok(Status::Halal),
            "suspect" | "مشبوه" => Ok(Status::Suspect),
            "haram" | "حرام" => Ok(Status::Haram),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation tone attached to a status when it is rendered. Labels
/// originate from an untrusted external source, so the free-form mapping
/// keeps a neutral fallback instead of panicking on surprises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Positive,
    Warning,
    Danger,
    Neutral,
}

pub fn tone_for_label(label: &str) -> Tone {
    match Status::from_str(label) {
        Ok(status) => status.tone(),
        Err(()) => Tone::Neutral,
    }
}
