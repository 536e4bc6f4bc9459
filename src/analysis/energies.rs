//! Jung color-energy affinity scoring.

use std::collections::BTreeMap;

use crate::analysis::reference::{rank_weight, ColorEnergy};
use crate::analysis::types::{ColorPreferences, EnergyAnalysis};

/// Score the four color energies from the input's color preferences.
///
/// When an explicit ranking is present, its first two entries stand in for
/// the primary/secondary colors and receive the fixed +10/+5 on top of their
/// positional ranking weights. The two weighting paths are summed by design,
/// so a ranked color's score can exceed its nominal positional weight.
pub fn analyze_energies(prefs: &ColorPreferences) -> EnergyAnalysis {
    let mut primary = prefs.primary();
    let mut secondary = prefs.secondary();

    let ranking = prefs.ranking_list();
    if let Some(first) = ranking.first() {
        primary = first.clone();
    }
    if let Some(second) = ranking.get(1) {
        secondary = second.clone();
    }

    let mut scores: BTreeMap<ColorEnergy, i64> =
        ColorEnergy::ALL.iter().map(|e| (*e, 0)).collect();

    for energy in ColorEnergy::ALL {
        let members = energy.members();
        if members.contains(&primary.as_str()) {
            *scores.entry(energy).or_insert(0) += 10;
        }
        if members.contains(&secondary.as_str()) {
            *scores.entry(energy).or_insert(0) += 5;
        }
    }

    for (index, color) in ranking.iter().take(5).enumerate() {
        let weight = rank_weight(index);
        for energy in ColorEnergy::ALL {
            if energy.members().contains(&color.as_str()) {
                *scores.entry(energy).or_insert(0) += weight;
            }
        }
    }

    // Stable descending sort; equal scores keep declaration order.
    let mut ordered = ColorEnergy::ALL;
    ordered.sort_by(|a, b| scores[b].cmp(&scores[a]));
    let primary_energy = ordered[0];
    let secondary_energy = ordered[1];

    let total: i64 = scores.values().sum();
    let energy_distribution: BTreeMap<ColorEnergy, f64> = scores
        .iter()
        .map(|(energy, score)| {
            let share = if total > 0 {
                (*score as f64 / total as f64) * 100.0
            } else {
                25.0
            };
            (*energy, share)
        })
        .collect();

    EnergyAnalysis {
        primary_energy,
        secondary_energy,
        energy_distribution,
        primary_traits: primary_energy.traits().iter().map(|t| t.to_string()).collect(),
        secondary_traits: secondary_energy
            .traits()
            .iter()
            .map(|t| t.to_string())
            .collect(),
    }
}
