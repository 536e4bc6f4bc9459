//! Cross-context consistency scoring and per-context insights.

use std::collections::HashSet;

use crate::analysis::reference::ColorEnergy;
use crate::analysis::types::{ColorPreferences, ContextAnalysis};

/// Score how uniform the stated color choice is across the five life
/// contexts and derive the per-context insight phrases.
///
/// Creative and stress colors count toward the consistency score but drive
/// no insight list of their own.
pub fn analyze_context(prefs: &ColorPreferences) -> ContextAnalysis {
    let colors = prefs.context_colors();
    let (work, relaxation, social) = (&colors[0], &colors[1], &colors[2]);

    let given: Vec<&String> = colors.iter().filter(|c| !c.is_empty()).collect();
    let n = given.len();
    let u = given.iter().copied().collect::<HashSet<_>>().len();

    // With one or zero non-empty contexts there is no variation to measure.
    let consistency_score = if n <= 1 {
        1.0
    } else {
        1.0 - (u as f64 - 1.0) / (n as f64 - 1.0)
    };

    let mut contextual_patterns = Vec::new();
    if consistency_score > 0.7 {
        contextual_patterns.push("high consistency across contexts".to_string());
    } else if consistency_score < 0.3 {
        contextual_patterns.push("strong contextual adaptation".to_string());
    }

    let work_insights = match ColorEnergy::of(work) {
        Some(ColorEnergy::CoolBlue) => vec![
            "analytical work approach".to_string(),
            "values structure and clarity in work environment".to_string(),
        ],
        Some(ColorEnergy::EarthGreen) => vec![
            "supportive work approach".to_string(),
            "values harmony and collaboration in work environment".to_string(),
        ],
        Some(ColorEnergy::SunshineYellow) => vec![
            "enthusiastic work approach".to_string(),
            "values creativity and stimulation in work environment".to_string(),
        ],
        Some(ColorEnergy::FieryRed) => vec![
            "decisive work approach".to_string(),
            "values efficiency and results in work environment".to_string(),
        ],
        None => Vec::new(),
    };

    let relaxation_insights = match ColorEnergy::of(relaxation) {
        Some(ColorEnergy::CoolBlue) => {
            vec!["mental relaxation through intellectual activities".to_string()]
        }
        Some(ColorEnergy::EarthGreen) => {
            vec!["relaxation through connection with nature and harmony".to_string()]
        }
        Some(ColorEnergy::SunshineYellow) => {
            vec!["relaxation through social and stimulating activities".to_string()]
        }
        Some(ColorEnergy::FieryRed) => {
            vec!["relaxation through physical activities and challenges".to_string()]
        }
        None => Vec::new(),
    };

    let social_insights = match ColorEnergy::of(social) {
        Some(ColorEnergy::CoolBlue) => {
            vec!["values depth and meaning in social interactions".to_string()]
        }
        Some(ColorEnergy::EarthGreen) => {
            vec!["values harmony and connection in social settings".to_string()]
        }
        Some(ColorEnergy::SunshineYellow) => {
            vec!["values enthusiasm and energy in social settings".to_string()]
        }
        Some(ColorEnergy::FieryRed) => {
            vec!["values directness and action in social settings".to_string()]
        }
        None => Vec::new(),
    };

    ContextAnalysis {
        consistency_score,
        contextual_patterns,
        work_insights,
        relaxation_insights,
        social_insights,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_contexts_score_one() {
        let prefs = ColorPreferences {
            work_color: Some("blue".to_string()),
            relaxation_color: Some("blue".to_string()),
            social_color: Some("blue".to_string()),
            ..Default::default()
        };
        let result = analyze_context(&prefs);

        assert_eq!(result.consistency_score, 1.0);
        assert!(result
            .contextual_patterns
            .contains(&"high consistency across contexts".to_string()));
    }

    #[test]
    fn test_all_distinct_contexts_score_zero() {
        let prefs = ColorPreferences {
            work_color: Some("blue".to_string()),
            relaxation_color: Some("green".to_string()),
            social_color: Some("yellow".to_string()),
            creative_color: Some("purple".to_string()),
            stress_color: Some("red".to_string()),
            ..Default::default()
        };
        let result = analyze_context(&prefs);

        assert_eq!(result.consistency_score, 0.0);
        assert!(result
            .contextual_patterns
            .contains(&"strong contextual adaptation".to_string()));
    }

    #[test]
    fn test_single_context_scores_one() {
        let prefs = ColorPreferences {
            work_color: Some("blue".to_string()),
            ..Default::default()
        };
        let result = analyze_context(&prefs);
        assert_eq!(result.consistency_score, 1.0);
    }

    #[test]
    fn test_present_but_empty_contexts_score_one() {
        let prefs = ColorPreferences {
            work_color: Some(String::new()),
            ..Default::default()
        };
        let result = analyze_context(&prefs);
        assert_eq!(result.consistency_score, 1.0);
    }

    #[test]
    fn test_score_stays_in_unit_interval() {
        let prefs = ColorPreferences {
            work_color: Some("blue".to_string()),
            relaxation_color: Some("blue".to_string()),
            social_color: Some("green".to_string()),
            ..Default::default()
        };
        let result = analyze_context(&prefs);

        assert!((0.0..=1.0).contains(&result.consistency_score));
        assert_eq!(result.consistency_score, 0.5);
        assert!(result.contextual_patterns.is_empty());
    }

    #[test]
    fn test_insights_keyed_by_energy_membership() {
        let prefs = ColorPreferences {
            work_color: Some("navy".to_string()),
            relaxation_color: Some("green".to_string()),
            social_color: Some("turquoise".to_string()),
            ..Default::default()
        };
        let result = analyze_context(&prefs);

        assert_eq!(
            result.work_insights,
            vec![
                "analytical work approach",
                "values structure and clarity in work environment"
            ]
        );
        assert_eq!(
            result.relaxation_insights,
            vec!["relaxation through connection with nature and harmony"]
        );
        assert!(result.social_insights.is_empty());
    }
}
