//! Bipolar personality-dimension scoring.

use std::collections::BTreeMap;

use crate::analysis::reference::{rank_weight, Dimension};
use crate::analysis::types::{ColorPreferences, DimensionAnalysis};

/// Score the five bipolar axes from the ranked color list.
///
/// Each axis value is `((second - first) / (first + second)) * 100` over the
/// two pole scores, which keeps it in [-100, +100]; it is exactly 0 when no
/// ranked color matched either pole.
pub fn analyze_dimensions(prefs: &ColorPreferences) -> DimensionAnalysis {
    let ranked = prefs.ranked_colors();

    let mut dimension_scores = BTreeMap::new();
    for dimension in Dimension::ALL {
        let mut first_score = 0i64;
        let mut second_score = 0i64;

        for (index, color) in ranked.iter().take(5).enumerate() {
            let weight = rank_weight(index);
            if dimension.first_pole().contains(&color.as_str()) {
                first_score += weight;
            }
            if dimension.second_pole().contains(&color.as_str()) {
                second_score += weight;
            }
        }

        let total = first_score + second_score;
        let value = if total > 0 {
            ((second_score - first_score) as f64 / total as f64) * 100.0
        } else {
            0.0
        };
        dimension_scores.insert(dimension, value);
    }

    let mut dominant_traits = Vec::new();
    for dimension in Dimension::ALL {
        let value = dimension_scores[&dimension];
        if value < -20.0 {
            dominant_traits.push(dimension.low_label().to_string());
        } else if value > 20.0 {
            dominant_traits.push(dimension.high_label().to_string());
        }
    }

    DimensionAnalysis {
        dimension_scores,
        dominant_traits,
    }
}
