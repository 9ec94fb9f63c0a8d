//! Watering schedule and care advice.
//!
//! Everything here is pure: the current date is always passed in.

use chrono::{Days, NaiveDate};

use crate::models::PlantType;

/// Days remaining at or below which a plant should be watered soon.
pub const SOON_THRESHOLD_DAYS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WateringStatus {
    Urgent,
    Soon,
    Ok,
}

/// Whole days until the next watering, clamped at zero.
///
/// Returns `None` when the plant has never been watered.
pub fn days_until_next_watering(
    last_watered: Option<NaiveDate>,
    interval_days: u32,
    today: NaiveDate,
) -> Option<u32> {
    let last = last_watered?;
    let remaining = match last.checked_add_days(Days::new(u64::from(interval_days))) {
        Some(next) => (next - today).num_days(),
        None => i64::from(interval_days) - (today - last).num_days(),
    };
    Some(u32::try_from(remaining.max(0)).unwrap_or(u32::MAX))
}

/// Urgency for a number of days remaining; unknown counts as `Ok`.
pub fn classify(days_remaining: Option<u32>) -> WateringStatus {
    match days_remaining {
        None => WateringStatus::Ok,
        Some(0) => WateringStatus::Urgent,
        Some(d) if d <= SOON_THRESHOLD_DAYS => WateringStatus::Soon,
        Some(_) => WateringStatus::Ok,
    }
}

// Checked in order; first keyword found in the lowercased name wins.
const SPECIES_TIPS: &[(&str, &str)] = &[
    ("sansevieria", "Riego cada 2-3 semanas, poca luz, muy resistente."),
    ("cactus", "Mucho sol, riego muy escaso, evitar exceso de agua."),
    ("rosa", "Sol directo, riego frecuente, podar flores secas."),
    ("helecho", "Ambiente húmedo, sombra parcial, riego regular."),
];

const TYPE_TIPS: &[(PlantType, &str)] = &[
    (PlantType::Interior, "Prefiere luz indirecta, riego moderado."),
    (PlantType::Exterior, "Tolera más sol, riego frecuente."),
    (PlantType::Succulent, "Mucho sol, poco riego, tierra bien drenada."),
    (PlantType::Ornamental, "Riego cada semana y buena iluminación."),
];

pub const DEFAULT_TIP: &str = "Riego moderado y luz indirecta recomendada.";

/// Care tip for a plant name and raw type name. Never fails.
pub fn care_advice(name: &str, kind: &str) -> &'static str {
    care_advice_for(name, kind.parse().ok())
}

pub fn care_advice_for(name: &str, kind: Option<PlantType>) -> &'static str {
    let name = name.to_lowercase();
    if let Some((_, tip)) = SPECIES_TIPS.iter().find(|(key, _)| name.contains(*key)) {
        return *tip;
    }
    kind.and_then(|k| TYPE_TIPS.iter().find(|(t, _)| *t == k))
        .map(|(_, tip)| *tip)
        .unwrap_or(DEFAULT_TIP)
}
