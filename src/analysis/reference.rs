//! Fixed reference tables for color-preference scoring.
//!
//! Everything in this module is immutable, process-wide data: the canonical
//! color vocabulary with its synonym and emotion tables, Jung's four color
//! energies, and the five bipolar personality dimensions. The scorers never
//! mutate these tables; there is no runtime registration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the closed set of canonical color tokens that all free-text color
/// input is normalized to.
///
/// Declaration order is load-bearing: the normalizer's substring fallback
/// scans colors in this order and the first match wins, so ambiguous input
/// (e.g. `"amber"`, listed under both yellow and orange) resolves to the
/// earlier entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CanonicalColor {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Orange,
    Pink,
    Black,
    White,
    Brown,
    Gray,
}

impl CanonicalColor {
    /// All canonical colors, in the fixed declaration order used for
    /// normalization precedence.
    pub const ALL: [CanonicalColor; 11] = [
        CanonicalColor::Red,
        CanonicalColor::Blue,
        CanonicalColor::Green,
        CanonicalColor::Yellow,
        CanonicalColor::Purple,
        CanonicalColor::Orange,
        CanonicalColor::Pink,
        CanonicalColor::Black,
        CanonicalColor::White,
        CanonicalColor::Brown,
        CanonicalColor::Gray,
    ];

    /// The canonical lowercase token for this color.
    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalColor::Red => "red",
            CanonicalColor::Blue => "blue",
            CanonicalColor::Green => "green",
            CanonicalColor::Yellow => "yellow",
            CanonicalColor::Purple => "purple",
            CanonicalColor::Orange => "orange",
            CanonicalColor::Pink => "pink",
            CanonicalColor::Black => "black",
            CanonicalColor::White => "white",
            CanonicalColor::Brown => "brown",
            CanonicalColor::Gray => "gray",
        }
    }

    /// Accepted spellings for this color, including the canonical token
    /// itself. Exact matches against any of these normalize to the canonical
    /// token; the substring fallback also scans these.
    pub fn synonyms(&self) -> &'static [&'static str] {
        match self {
            CanonicalColor::Red => &["red", "crimson", "scarlet", "maroon", "burgundy", "ruby"],
            CanonicalColor::Blue => {
                &["blue", "navy", "teal", "cyan", "indigo", "azure", "cobalt"]
            }
            CanonicalColor::Green => {
                &["green", "olive", "sage", "mint", "emerald", "forest", "lime"]
            }
            CanonicalColor::Yellow => &["yellow", "gold", "amber", "lemon", "mustard"],
            CanonicalColor::Purple => {
                &["purple", "violet", "lavender", "plum", "magenta", "mauve"]
            }
            CanonicalColor::Orange => &["orange", "peach", "coral", "amber", "tangerine"],
            CanonicalColor::Pink => &["pink", "rose", "fuchsia", "salmon", "blush"],
            CanonicalColor::Black => &["black", "charcoal", "onyx", "ebony"],
            CanonicalColor::White => &["white", "ivory", "cream", "eggshell"],
            CanonicalColor::Brown => &["brown", "tan", "beige", "khaki", "chocolate", "coffee"],
            CanonicalColor::Gray => &["gray", "grey", "silver", "slate", "ash"],
        }
    }

    /// The fixed emotion tags associated with this color. Gray carries no
    /// emotion associations and yields an empty slice.
    pub fn emotions(&self) -> &'static [&'static str] {
        match self {
            CanonicalColor::Red => &["passion", "excitement", "love", "anger", "energy", "danger"],
            CanonicalColor::Blue => &["calm", "trust", "wisdom", "peace", "loyalty", "sadness"],
            CanonicalColor::Green => {
                &["growth", "harmony", "nature", "balance", "fertility", "envy"]
            }
            CanonicalColor::Yellow => {
                &["joy", "optimism", "happiness", "intellect", "attention", "anxiety"]
            }
            CanonicalColor::Purple => &[
                "creativity",
                "mystery",
                "spirituality",
                "luxury",
                "ambition",
                "introspection",
            ],
            CanonicalColor::Orange => &[
                "enthusiasm",
                "warmth",
                "sociability",
                "energy",
                "stimulation",
                "aggression",
            ],
            CanonicalColor::Pink => &[
                "love",
                "nurturing",
                "femininity",
                "compassion",
                "playfulness",
                "immaturity",
            ],
            CanonicalColor::Black => &["power", "elegance", "formality", "death", "evil", "mystery"],
            CanonicalColor::White => &[
                "purity",
                "innocence",
                "cleanliness",
                "simplicity",
                "sterility",
                "emptiness",
            ],
            CanonicalColor::Brown => &[
                "reliability",
                "stability",
                "earthiness",
                "warmth",
                "dullness",
                "heaviness",
            ],
            CanonicalColor::Gray => &[],
        }
    }

    /// Look up a canonical color by its exact lowercase token.
    pub fn from_token(token: &str) -> Option<CanonicalColor> {
        CanonicalColor::ALL
            .iter()
            .copied()
            .find(|color| color.as_str() == token)
    }
}

impl fmt::Display for CanonicalColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Emotion tags for an arbitrary color word. Unrecognized words (including
/// anything that is not an exact canonical token) have no associations.
pub fn emotions_for(color: &str) -> &'static [&'static str] {
    CanonicalColor::from_token(color)
        .map(|c| c.emotions())
        .unwrap_or(&[])
}

/// One of Jung's four color energies.
///
/// Declaration order doubles as the tie-break order when two energies score
/// equally: Cool Blue beats Earth Green beats Sunshine Yellow beats Fiery Red.
/// `Ord` follows declaration order, so `BTreeMap<ColorEnergy, _>` iterates and
/// serializes in that fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ColorEnergy {
    #[serde(rename = "Cool Blue")]
    CoolBlue,
    #[serde(rename = "Earth Green")]
    EarthGreen,
    #[serde(rename = "Sunshine Yellow")]
    SunshineYellow,
    #[serde(rename = "Fiery Red")]
    FieryRed,
}

impl ColorEnergy {
    /// All four energies in declaration (tie-break) order.
    pub const ALL: [ColorEnergy; 4] = [
        ColorEnergy::CoolBlue,
        ColorEnergy::EarthGreen,
        ColorEnergy::SunshineYellow,
        ColorEnergy::FieryRed,
    ];

    /// Human-readable energy name.
    pub fn name(&self) -> &'static str {
        match self {
            ColorEnergy::CoolBlue => "Cool Blue",
            ColorEnergy::EarthGreen => "Earth Green",
            ColorEnergy::SunshineYellow => "Sunshine Yellow",
            ColorEnergy::FieryRed => "Fiery Red",
        }
    }

    /// The fixed descriptive trait tags for this energy, returned verbatim by
    /// the energy scorer.
    pub fn traits(&self) -> &'static [&'static str] {
        match self {
            ColorEnergy::CoolBlue => &[
                "analytical",
                "objective",
                "detached",
                "logical",
                "methodical",
                "precise",
            ],
            ColorEnergy::EarthGreen => &[
                "supportive",
                "harmonious",
                "calming",
                "nurturing",
                "patient",
                "reliable",
            ],
            ColorEnergy::SunshineYellow => &[
                "enthusiastic",
                "sociable",
                "dynamic",
                "persuasive",
                "optimistic",
                "creative",
            ],
            ColorEnergy::FieryRed => &[
                "decisive",
                "assertive",
                "bold",
                "competitive",
                "direct",
                "action-oriented",
            ],
        }
    }

    /// Member color words for this energy.
    ///
    /// These are the scoring membership lists and deliberately include
    /// variant words (navy, crimson, ...) beyond the canonical tokens, kept
    /// verbatim from the reference data. Scores double-count if a word ever
    /// appears in more than one list; the current table is disjoint.
    pub fn members(&self) -> &'static [&'static str] {
        match self {
            ColorEnergy::CoolBlue => &["blue", "navy", "teal", "cyan", "indigo"],
            ColorEnergy::EarthGreen => &["green", "olive", "sage", "mint", "emerald"],
            ColorEnergy::SunshineYellow => &["yellow", "gold", "amber", "lemon", "mustard"],
            ColorEnergy::FieryRed => &["red", "crimson", "scarlet", "maroon", "burgundy"],
        }
    }

    /// The energy a color word belongs to, if any. First match in declaration
    /// order wins (the current membership lists are disjoint).
    pub fn of(color: &str) -> Option<ColorEnergy> {
        ColorEnergy::ALL
            .iter()
            .copied()
            .find(|energy| energy.members().contains(&color))
    }
}

impl fmt::Display for ColorEnergy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the five bipolar personality axes.
///
/// Each axis has a first and a second pole; the computed dimension value is
/// negative when the first pole dominates and positive when the second does.
/// `Ord` follows declaration order for stable map iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    IntroversionExtraversion,
    ThinkingFeeling,
    StabilityAdaptability,
    TaskPeople,
    AnalyticalCreative,
}

impl Dimension {
    /// All five axes in declaration order.
    pub const ALL: [Dimension; 5] = [
        Dimension::IntroversionExtraversion,
        Dimension::ThinkingFeeling,
        Dimension::StabilityAdaptability,
        Dimension::TaskPeople,
        Dimension::AnalyticalCreative,
    ];

    /// Color set for the first (negative) pole.
    pub fn first_pole(&self) -> &'static [&'static str] {
        match self {
            Dimension::IntroversionExtraversion => &["blue", "purple", "green", "black", "brown"],
            Dimension::ThinkingFeeling => &["blue", "black", "white", "gray"],
            Dimension::StabilityAdaptability => &["blue", "green", "brown", "black"],
            Dimension::TaskPeople => &["blue", "black", "red", "white"],
            Dimension::AnalyticalCreative => &["blue", "black", "white", "gray"],
        }
    }

    /// Color set for the second (positive) pole.
    pub fn second_pole(&self) -> &'static [&'static str] {
        match self {
            Dimension::IntroversionExtraversion => &["red", "orange", "yellow", "pink"],
            Dimension::ThinkingFeeling => &["red", "pink", "purple", "green"],
            Dimension::StabilityAdaptability => &["yellow", "orange", "red", "purple"],
            Dimension::TaskPeople => &["green", "pink", "yellow", "purple"],
            Dimension::AnalyticalCreative => &["purple", "yellow", "orange", "pink"],
        }
    }

    /// Dominant-trait label emitted when the dimension value falls below -20.
    pub fn low_label(&self) -> &'static str {
        match self {
            Dimension::IntroversionExtraversion => "introverted",
            Dimension::ThinkingFeeling => "analytical thinker",
            Dimension::StabilityAdaptability => "stability-focused",
            Dimension::TaskPeople => "task-oriented",
            Dimension::AnalyticalCreative => "methodical",
        }
    }

    /// Dominant-trait label emitted when the dimension value rises above +20.
    pub fn high_label(&self) -> &'static str {
        match self {
            Dimension::IntroversionExtraversion => "extraverted",
            Dimension::ThinkingFeeling => "empathetic feeler",
            Dimension::StabilityAdaptability => "adaptability-focused",
            Dimension::TaskPeople => "people-oriented",
            Dimension::AnalyticalCreative => "creative",
        }
    }
}

/// Emotion tags counted as positive by the emotional-pattern rule.
pub const POSITIVE_EMOTIONS: [&str; 9] = [
    "love",
    "joy",
    "optimism",
    "happiness",
    "calm",
    "trust",
    "peace",
    "growth",
    "harmony",
];

/// Emotion tags counted as negative by the emotional-pattern rule.
pub const NEGATIVE_EMOTIONS: [&str; 6] =
    ["anger", "sadness", "anxiety", "envy", "aggression", "fear"];

/// Positional weight for a ranking entry: 10, 8, 6, 4, 2 for ranks 0..=4,
/// nothing beyond the fifth entry.
pub fn rank_weight(index: usize) -> i64 {
    if index < 5 {
        10 - 2 * index as i64
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_weights() {
        assert_eq!(
            (0..7).map(rank_weight).collect::<Vec<_>>(),
            vec![10, 8, 6, 4, 2, 0, 0]
        );
    }

    #[test]
    fn test_every_color_has_itself_as_synonym() {
        for color in CanonicalColor::ALL {
            assert!(
                color.synonyms().contains(&color.as_str()),
                "{} missing from its own synonym list",
                color
            );
        }
    }

    #[test]
    fn test_energy_membership_lists_are_disjoint() {
        for (i, a) in ColorEnergy::ALL.iter().enumerate() {
            for b in &ColorEnergy::ALL[i + 1..] {
                for word in a.members() {
                    assert!(
                        !b.members().contains(word),
                        "{} appears in both {} and {}",
                        word,
                        a,
                        b
                    );
                }
            }
        }
    }

    #[test]
    fn test_energy_of_variant_words() {
        assert_eq!(ColorEnergy::of("navy"), Some(ColorEnergy::CoolBlue));
        assert_eq!(ColorEnergy::of("crimson"), Some(ColorEnergy::FieryRed));
        assert_eq!(ColorEnergy::of("purple"), None);
    }

    #[test]
    fn test_gray_has_no_emotions() {
        assert!(CanonicalColor::Gray.emotions().is_empty());
        assert!(emotions_for("turquoise").is_empty());
    }

    #[test]
    fn test_energy_serde_names() {
        let json = serde_json::to_string(&ColorEnergy::CoolBlue).unwrap();
        assert_eq!(json, "\"Cool Blue\"");
        let json = serde_json::to_string(&Dimension::TaskPeople).unwrap();
        assert_eq!(json, "\"task_people\"");
    }
}
