//! Marker-based segmentation of narrative responses.
//!
//! The narrative backend returns free text with known section headings; this
//! module cuts it into the structured shapes the rest of the system consumes.
//! Extraction is forgiving: a missing marker yields an empty section, never
//! an error.

use serde::{Deserialize, Serialize};

/// Case-insensitive `find` over ASCII marker text.
fn find_ci(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    haystack[from..]
        .to_lowercase()
        .find(&needle.to_lowercase())
        .map(|i| from + i)
}

/// Extract the text between two markers.
///
/// Markers match case-insensitively. An empty `end_marker`, or one that does
/// not occur after the start, extends the section to the end of the text. A
/// missing `start_marker` yields an empty string.
pub fn extract_section(text: &str, start_marker: &str, end_marker: &str) -> String {
    let Some(found) = find_ci(text, start_marker, 0) else {
        return String::new();
    };
    let start = found + start_marker.len();

    let end = if end_marker.is_empty() {
        text.len()
    } else {
        find_ci(text, end_marker, start).unwrap_or(text.len())
    };
    text[start..end].trim().to_string()
}

/// Extract a labeled single-line value, e.g. `Primary Color Energy: Cool Blue`.
///
/// The label matches case-sensitively; the value runs to the delimiter or the
/// end of text. Missing label yields an empty string.
pub fn extract_value(text: &str, label: &str, delimiter: &str) -> String {
    let Some(found) = text.find(label) else {
        return String::new();
    };
    let start = found + label.len();
    let end = text[start..]
        .find(delimiter)
        .map(|i| start + i)
        .unwrap_or(text.len());
    text[start..end].trim().to_string()
}

/// Break a section into list items.
///
/// Recognizes `-`, `*`, and `•` bullets plus numbered items, and keeps plain
/// lines that do not look like headings. A section with no recognizable items
/// becomes a single-item list of the whole trimmed text.
pub fn format_list(text: &str) -> Vec<String> {
    let mut items = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(item) = line
            .strip_prefix("- ")
            .or_else(|| line.strip_prefix("* "))
            .or_else(|| line.strip_prefix("\u{2022} "))
        {
            items.push(item.trim().to_string());
        } else if let Some(dot) = line.find(". ") {
            if line[..dot].chars().all(|c| c.is_ascii_digit()) && dot > 0 {
                items.push(line[dot + 2..].trim().to_string());
            } else if !line.contains(':') && !line.contains("**") && !line.contains('#') {
                items.push(line.to_string());
            }
        } else if !line.contains(':') && !line.contains("**") && !line.contains('#') {
            items.push(line.to_string());
        }
    }

    if items.is_empty() && !text.trim().is_empty() {
        return vec![text.trim().to_string()];
    }
    items
}

/// Structured free-form preference analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceNarrative {
    pub personality_traits: Vec<String>,
    pub emotional_tendencies: Vec<String>,
    pub behavioral_patterns: Vec<String>,
    pub strengths: Vec<String>,
    pub growth_areas: Vec<String>,
    /// The unsegmented response.
    pub full_analysis: String,
}

/// Segment a free-form preference analysis response.
pub fn parse_preference_analysis(raw: &str) -> PreferenceNarrative {
    PreferenceNarrative {
        personality_traits: format_list(&extract_section(
            raw,
            "personality traits",
            "emotional tendencies",
        )),
        emotional_tendencies: format_list(&extract_section(
            raw,
            "emotional tendencies",
            "behavioral patterns",
        )),
        behavioral_patterns: format_list(&extract_section(raw, "behavioral patterns", "strengths")),
        strengths: format_list(&extract_section(raw, "strengths", "growth areas")),
        growth_areas: format_list(&extract_section(raw, "growth areas", "")),
        full_analysis: raw.to_string(),
    }
}

/// Structured Jung color-energy narrative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JungEnergyNarrative {
    pub primary_energy: String,
    pub secondary_energy: String,
    pub communication_style: String,
    pub decision_making: String,
    pub relationship_dynamics: String,
    pub work_preferences: String,
    pub stress_responses: String,
    /// The unsegmented response.
    pub full_analysis: String,
}

/// Segment a Jung color-energy response.
pub fn parse_jung_energy_analysis(raw: &str) -> JungEnergyNarrative {
    JungEnergyNarrative {
        primary_energy: extract_value(raw, "Primary Color Energy:", "\n"),
        secondary_energy: extract_value(raw, "Secondary Color Energy:", "\n"),
        communication_style: extract_section(
            raw,
            "Communication Style:",
            "Decision-making Approach:",
        ),
        decision_making: extract_section(
            raw,
            "Decision-making Approach:",
            "Relationship Dynamics:",
        ),
        relationship_dynamics: extract_section(raw, "Relationship Dynamics:", "Work Preferences:"),
        work_preferences: extract_section(raw, "Work Preferences:", "Stress Responses:"),
        stress_responses: extract_section(raw, "Stress Responses:", ""),
        full_analysis: raw.to_string(),
    }
}

/// The Jung section inside a comprehensive profile narrative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JungEnergySection {
    pub primary_energy: String,
    pub secondary_energy: String,
    pub full_description: String,
}

/// Structured comprehensive profile narrative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileNarrative {
    pub personality_overview: String,
    pub jung_energy: JungEnergySection,
    pub emotional_landscape: String,
    pub interpersonal_dynamics: String,
    pub environmental_preferences: String,
    pub growth_opportunities: String,
    pub practical_applications: String,
    /// The unsegmented response.
    pub full_profile: String,
}

/// Segment a comprehensive profile response by its numbered headings.
pub fn parse_comprehensive_profile(raw: &str) -> ProfileNarrative {
    let jung_section = extract_section(raw, "## 2. Jung Color Energy Distribution", "## 3.");

    ProfileNarrative {
        personality_overview: extract_section(raw, "## 1. Personality Overview", "## 2."),
        jung_energy: JungEnergySection {
            primary_energy: extract_value(&jung_section, "Primary Energy:", "\n"),
            secondary_energy: extract_value(&jung_section, "Secondary Energy:", "\n"),
            full_description: jung_section,
        },
        emotional_landscape: extract_section(raw, "## 3. Emotional Landscape", "## 4."),
        interpersonal_dynamics: extract_section(raw, "## 4. Interpersonal Dynamics", "## 5."),
        environmental_preferences: extract_section(
            raw,
            "## 5. Environmental Preferences",
            "## 6.",
        ),
        growth_opportunities: extract_section(raw, "## 6. Growth Opportunities", "## 7."),
        practical_applications: extract_section(raw, "## 7. Practical Applications", ""),
        full_profile: raw.to_string(),
    }
}

/// Work-environment recommendations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentRecommendation {
    pub colors: String,
    pub layout: String,
    pub lighting: String,
}

/// Structured personalized recommendations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    pub environment: EnvironmentRecommendation,
    pub communication_strategies: Vec<String>,
    pub decision_making_approaches: Vec<String>,
    pub stress_management: Vec<String>,
    pub personal_development: Vec<String>,
    pub relationship_dynamics: Vec<String>,
    pub daily_practices: Vec<String>,
    /// The unsegmented response.
    pub full_recommendations: String,
}

/// Segment a recommendations response by its numbered headings.
pub fn parse_recommendations(raw: &str) -> Recommendations {
    let work_environment = extract_section(raw, "## 1. Optimal Work Environment", "## 2.");

    Recommendations {
        environment: EnvironmentRecommendation {
            colors: extract_section(&work_environment, "**Colors:**", "**Layout:**"),
            layout: extract_section(&work_environment, "**Layout:**", "**Lighting:**"),
            lighting: extract_section(&work_environment, "**Lighting:**", ""),
        },
        communication_strategies: format_list(&extract_section(
            raw,
            "## 2. Communication Strategies",
            "## 3.",
        )),
        decision_making_approaches: format_list(&extract_section(
            raw,
            "## 3. Decision-Making Approaches",
            "## 4.",
        )),
        stress_management: format_list(&extract_section(
            raw,
            "## 4. Stress Management Techniques",
            "## 5.",
        )),
        personal_development: format_list(&extract_section(
            raw,
            "## 5. Personal Development Opportunities",
            "## 6.",
        )),
        relationship_dynamics: format_list(&extract_section(
            raw,
            "## 6. Relationship Dynamics",
            "## 7.",
        )),
        daily_practices: format_list(&extract_section(
            raw,
            "## 7. Daily Practices for Well-Being",
            "",
        )),
        full_recommendations: raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_section_between_markers() {
        let text = "Intro\nStart: alpha beta\nEnd: rest";
        assert_eq!(extract_section(text, "Start:", "End:"), "alpha beta");
    }

    #[test]
    fn test_extract_section_is_case_insensitive() {
        let text = "HEADING ONE body text HEADING TWO";
        assert_eq!(extract_section(text, "heading one", "heading two"), "body text");
    }

    #[test]
    fn test_extract_section_missing_start_marker() {
        assert_eq!(extract_section("no markers here", "Start:", ""), "");
    }

    #[test]
    fn test_extract_section_missing_end_marker_runs_to_eof() {
        assert_eq!(extract_section("Start: tail", "Start:", "Absent"), "tail");
    }

    #[test]
    fn test_extract_value() {
        let text = "Primary Color Energy: Cool Blue\nmore";
        assert_eq!(extract_value(text, "Primary Color Energy:", "\n"), "Cool Blue");
        assert_eq!(extract_value(text, "Absent:", "\n"), "");
    }

    #[test]
    fn test_format_list_bullets_and_numbers() {
        let text = "- first\n* second\n1. third\nHeading:\nplain line";
        assert_eq!(format_list(text), vec!["first", "second", "third", "plain line"]);
    }

    #[test]
    fn test_format_list_falls_back_to_whole_text() {
        assert_eq!(format_list("Only: headings"), vec!["Only: headings"]);
        assert!(format_list("   ").is_empty());
    }

    #[test]
    fn test_parse_jung_energy_from_simulated_response() {
        let raw = include_str!("responses/jung_energy.md");
        let parsed = parse_jung_energy_analysis(raw);

        assert_eq!(parsed.primary_energy, "Cool Blue");
        assert_eq!(parsed.secondary_energy, "Earth Green");
        assert!(parsed.communication_style.starts_with("The user likely communicates"));
        assert!(parsed.stress_responses.contains("analysis paralysis"));
    }

    #[test]
    fn test_parse_comprehensive_profile_sections() {
        let raw = include_str!("responses/comprehensive_profile.md");
        let parsed = parse_comprehensive_profile(raw);

        assert!(parsed.personality_overview.contains("analytical thinking"));
        assert_eq!(parsed.jung_energy.primary_energy, "Cool Blue (Analytical)**");
        assert!(parsed.practical_applications.contains("written reflection"));
        assert!(!parsed.growth_opportunities.is_empty());
    }

    #[test]
    fn test_parse_recommendations_structure() {
        let raw = include_str!("responses/recommendations.md");
        let parsed = parse_recommendations(raw);

        assert!(parsed.environment.colors.contains("Soft blues"));
        assert!(parsed.environment.lighting.contains("Natural light"));
        assert_eq!(parsed.communication_strategies.len(), 6);
        assert!(parsed
            .daily_practices
            .contains(&"Maintain a reflection journal to process experiences".to_string()));
    }
}
