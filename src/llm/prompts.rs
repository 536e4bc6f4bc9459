//! Prompt templates for the narrative-generation stage.
//!
//! Templates carry `{name}` placeholders that the builder functions fill in;
//! missing input fields render as "Unknown" rather than failing.

use crate::analysis::types::ColorPreferences;

/// System prompt framing every narrative request.
pub const SYSTEM_PROMPT: &str = "\
You are a psychological analysis assistant specializing in color psychology.
Your task is to analyze color preferences and provide insights into personality traits,
emotional tendencies, and behavioral patterns based on established color psychology frameworks.

Use the following frameworks in your analysis:
1. Jung's Four Color Energies (Cool Blue, Earth Green, Sunshine Yellow, Fiery Red)
2. Color-Emotion Associations
3. Color-Personality Correlations
4. Color-in-Context Theory

Provide thoughtful, nuanced analysis that considers the complexity of human psychology.
Avoid overgeneralizations and acknowledge the limitations of color psychology.
Focus on providing actionable insights that can help the individual understand themselves better.";

const COLOR_PREFERENCE_ANALYSIS: &str = "\
Based on the user's color preferences:

Primary color preference: {primary_color}
Secondary color preference: {secondary_color}

Context-specific preferences:
- Work environment: {work_color}
- Relaxation space: {relaxation_color}
- Social settings: {social_color}

Please analyze what these preferences suggest about the user's personality traits,
emotional tendencies, and behavioral patterns. Consider:

1. What do these preferences suggest about their dominant Jung color energy?
2. What personality traits are associated with these color preferences?
3. What emotional tendencies might these preferences indicate?
4. How might these preferences influence their behavior in different contexts?
5. What strengths and potential growth areas do these preferences suggest?

Provide a comprehensive analysis with specific insights rather than general statements.";

const JUNG_COLOR_ENERGY_ANALYSIS: &str = "\
Based on the user's color preference data, analyze their Jung's Four Color Energy distribution:

Color preference ranking: {color_ranking}

Please determine:

1. The user's primary color energy (Cool Blue, Earth Green, Sunshine Yellow, or Fiery Red)
2. Their secondary color energy
3. The balance between the four energies
4. How this energy distribution might manifest in their:
   - Communication style
   - Decision-making approach
   - Relationship dynamics
   - Work preferences
   - Stress responses

Provide specific insights about how their color energy distribution influences their
psychological functioning and interpersonal dynamics.";

const COMPREHENSIVE_PROFILE: &str = "\
Based on all the color preference data provided:

{all_color_data}

Please generate a comprehensive psychological profile that includes:

1. Personality Overview: Key traits and tendencies
2. Jung Color Energy Distribution: Primary and secondary energies
3. Emotional Landscape: Emotional patterns and tendencies
4. Interpersonal Dynamics: Communication and relationship styles
5. Environmental Preferences: Optimal settings for productivity and well-being
6. Growth Opportunities: Areas for personal development
7. Practical Applications: Actionable insights for daily life

Provide a detailed, nuanced analysis that integrates insights from multiple
color psychology frameworks while acknowledging the complexity of human psychology.";

const RECOMMENDATIONS: &str = "\
Based on the psychological profile derived from color preferences:

{profile_summary}

Please provide specific recommendations for:

1. Optimal work environment (colors, layout, lighting)
2. Communication strategies that align with their color energy
3. Decision-making approaches that leverage their strengths
4. Stress management techniques suited to their profile
5. Personal development opportunities based on their color psychology
6. Relationship dynamics they might find most fulfilling
7. Daily practices that could enhance their well-being

Provide practical, actionable recommendations that the user can implement
to optimize their environments and interactions.";

fn field_or_unknown(field: &Option<String>) -> &str {
    match field.as_deref() {
        Some(value) if !value.is_empty() => value,
        _ => "Unknown",
    }
}

/// Prompt for free-form color-preference analysis.
pub fn color_preference_prompt(prefs: &ColorPreferences) -> String {
    COLOR_PREFERENCE_ANALYSIS
        .replace("{primary_color}", field_or_unknown(&prefs.primary_color))
        .replace("{secondary_color}", field_or_unknown(&prefs.secondary_color))
        .replace("{work_color}", field_or_unknown(&prefs.work_color))
        .replace(
            "{relaxation_color}",
            field_or_unknown(&prefs.relaxation_color),
        )
        .replace("{social_color}", field_or_unknown(&prefs.social_color))
}

/// Prompt for Jung color-energy narrative, from an ordered ranking.
pub fn jung_energy_prompt(color_ranking: &[String]) -> String {
    JUNG_COLOR_ENERGY_ANALYSIS.replace("{color_ranking}", &color_ranking.join(", "))
}

/// Prompt for the comprehensive profile, from the flat profile-data map.
pub fn comprehensive_profile_prompt(profile_data: &serde_json::Map<String, serde_json::Value>) -> String {
    let data_lines: Vec<String> = profile_data
        .iter()
        .map(|(key, value)| format!("{}: {}", key, value))
        .collect();
    COMPREHENSIVE_PROFILE.replace("{all_color_data}", &data_lines.join("\n"))
}

/// Prompt for personalized recommendations, from a one-paragraph summary.
pub fn recommendations_prompt(profile_summary: &str) -> String {
    RECOMMENDATIONS.replace("{profile_summary}", profile_summary)
}
