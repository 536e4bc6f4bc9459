//! Emotion-association ranking and pattern derivation.

use crate::analysis::reference::{
    emotions_for, rank_weight, NEGATIVE_EMOTIONS, POSITIVE_EMOTIONS,
};
use crate::analysis::types::{ColorPreferences, EmotionAnalysis};

/// Score emotion tags from the ranked color list and derive pattern phrases.
///
/// Unlike the energy scorer, the primary/secondary emotion lists always come
/// from the `primary_color`/`secondary_color` fields; the ranking does not
/// override them here.
pub fn analyze_emotions(prefs: &ColorPreferences) -> EmotionAnalysis {
    let primary_emotions: Vec<String> = emotions_for(&prefs.primary())
        .iter()
        .map(|e| e.to_string())
        .collect();
    let secondary_emotions: Vec<String> = emotions_for(&prefs.secondary())
        .iter()
        .map(|e| e.to_string())
        .collect();

    // Accumulate in first-seen order so that equal-weight ties in the top
    // list resolve deterministically.
    let mut emotion_scores: Vec<(String, i64)> = Vec::new();
    for (index, color) in prefs.ranked_colors().iter().take(5).enumerate() {
        let weight = rank_weight(index);
        for emotion in emotions_for(color) {
            match emotion_scores.iter_mut().find(|(name, _)| name == emotion) {
                Some((_, score)) => *score += weight,
                None => emotion_scores.push((emotion.to_string(), weight)),
            }
        }
    }

    let mut sorted = emotion_scores.clone();
    sorted.sort_by(|a, b| b.1.cmp(&a.1));
    let top_emotions: Vec<String> = sorted.iter().take(5).map(|(name, _)| name.clone()).collect();

    let score_of = |emotion: &str| -> i64 {
        emotion_scores
            .iter()
            .find(|(name, _)| name == emotion)
            .map(|(_, score)| *score)
            .unwrap_or(0)
    };
    let positive_score: i64 = POSITIVE_EMOTIONS.iter().map(|e| score_of(e)).sum();
    let negative_score: i64 = NEGATIVE_EMOTIONS.iter().map(|e| score_of(e)).sum();

    let mut emotional_patterns = Vec::new();
    if positive_score > negative_score * 2 {
        emotional_patterns.push("predominantly positive emotional outlook".to_string());
    } else if negative_score > positive_score * 2 {
        emotional_patterns.push("tendency toward emotional caution".to_string());
    } else {
        emotional_patterns.push("balanced emotional perspective".to_string());
    }

    let in_top = |emotion: &str| top_emotions.iter().any(|e| e == emotion);
    if in_top("calm") && in_top("peace") {
        emotional_patterns.push("values emotional stability".to_string());
    }
    if in_top("passion") && in_top("energy") {
        emotional_patterns.push("emotionally expressive".to_string());
    }
    if in_top("trust") && in_top("loyalty") {
        emotional_patterns.push("values emotional consistency in relationships".to_string());
    }

    EmotionAnalysis {
        primary_emotions,
        secondary_emotions,
        top_emotions,
        emotional_patterns,
    }
}
