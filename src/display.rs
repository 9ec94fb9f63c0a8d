//! Display boundary: derived values shown on a plant card.

use std::fmt::Write;

use chrono::{DateTime, NaiveDate, Utc};

use crate::care::{self, days_until_next_watering, WateringStatus};
use crate::models::Plant;

pub const NOTES_PREVIEW_CHARS: usize = 80;
pub const PLACEHOLDER_IMAGE: &str = "img/placeholder.jpg";

pub fn upper_name(name: &str) -> String {
    name.to_uppercase()
}

/// First `max` characters of `text`, with an ellipsis if anything was cut.
pub fn shorten(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}…", &text[..cut]),
        None => text.to_string(),
    }
}

/// `dd/mm/yyyy`, or a dash when there is no date.
pub fn format_date(date: Option<DateTime<Utc>>) -> String {
    match date {
        Some(d) => d.format("%d/%m/%Y").to_string(),
        None => "—".to_string(),
    }
}

pub fn image_or_default(image: Option<&str>) -> &str {
    match image {
        Some(url) if !url.trim().is_empty() => url,
        _ => PLACEHOLDER_IMAGE,
    }
}

pub fn status_label(status: WateringStatus) -> &'static str {
    match status {
        WateringStatus::Urgent => "Necesita riego ahora",
        WateringStatus::Soon => "Regar pronto",
        WateringStatus::Ok => "Riego OK",
    }
}

/// Everything a card shows, computed for a given day.
#[derive(Debug, Clone, PartialEq)]
pub struct PlantCard {
    pub id: String,
    pub title: String,
    pub plant_type: &'static str,
    pub difficulty: &'static str,
    pub notes: String,
    pub care_advice: String,
    pub watering_interval_days: u32,
    pub days_remaining: Option<u32>,
    pub status: WateringStatus,
    pub added: String,
    pub image: String,
    pub favorite: bool,
}

impl PlantCard {
    pub fn from_plant(plant: &Plant, today: NaiveDate) -> Self {
        let days_remaining = days_until_next_watering(
            plant.last_watered_date(),
            plant.watering_interval_days(),
            today,
        );
        // Records written without advice get it recomputed.
        let care_advice = if plant.care_advice().is_empty() {
            care::care_advice_for(plant.name(), Some(plant.plant_type())).to_string()
        } else {
            plant.care_advice().to_string()
        };
        Self {
            id: plant.id().to_string(),
            title: upper_name(plant.name()),
            plant_type: plant.plant_type().label(),
            difficulty: plant.care_difficulty().label(),
            notes: shorten(plant.notes().unwrap_or_default(), NOTES_PREVIEW_CHARS),
            care_advice,
            watering_interval_days: plant.watering_interval_days(),
            days_remaining,
            status: care::classify(days_remaining),
            added: format_date(Some(plant.added_date())),
            image: image_or_default(plant.image_reference()).to_string(),
            favorite: plant.is_favorite(),
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let star = if self.favorite { "★ " } else { "" };
        let _ = writeln!(out, "{}{}", star, self.title);
        let _ = writeln!(out, "  Tipo: {}  Dificultad: {}", self.plant_type, self.difficulty);
        if !self.notes.is_empty() {
            let _ = writeln!(out, "  Notas: {}", self.notes);
        }
        let _ = writeln!(out, "  Cuidados: {}", self.care_advice);
        let _ = writeln!(out, "  Se riega cada {} días.", self.watering_interval_days);
        match self.days_remaining {
            Some(days) => {
                let _ = writeln!(out, "  Estado: {} ({} días)", status_label(self.status), days);
            }
            None => {
                let _ = writeln!(out, "  Estado: {}", status_label(self.status));
            }
        }
        let _ = writeln!(out, "  Imagen: {}", self.image);
        let _ = writeln!(out, "  Agregada: {}", self.added);
        let _ = write!(out, "  ID: {}", self.id);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CareDifficulty, NewPlant, PlantType};
    use chrono::TimeZone;

    #[test]
    fn shorten_counts_chars_not_bytes() {
        assert_eq!(shorten("corto", 80), "corto");
        assert_eq!(shorten("ñandú", 3), "ñan…");
        assert_eq!(shorten("abc", 3), "abc");
        assert_eq!(shorten("", 80), "");
    }

    #[test]
    fn format_date_and_placeholder() {
        let d = Utc.with_ymd_and_hms(2024, 3, 7, 23, 0, 0).unwrap();
        assert_eq!(format_date(Some(d)), "07/03/2024");
        assert_eq!(format_date(None), "—");
        assert_eq!(image_or_default(None), PLACEHOLDER_IMAGE);
        assert_eq!(image_or_default(Some("   ")), PLACEHOLDER_IMAGE);
        assert_eq!(image_or_default(Some("fotos/aloe.png")), "fotos/aloe.png");
    }

    #[test]
    fn card_reflects_plant() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
        let plant = NewPlant {
            name: "Cactus".to_string(),
            plant_type: PlantType::Succulent,
            care_difficulty: CareDifficulty::Easy,
            last_watered_date: NaiveDate::from_ymd_opt(2024, 5, 1),
            notes: Some("x".repeat(100)),
            image_reference: None,
        }
        .into_plant(now, &[]);

        let card = PlantCard::from_plant(&plant, NaiveDate::from_ymd_opt(2024, 5, 13).unwrap());
        assert_eq!(card.title, "CACTUS");
        assert_eq!(card.plant_type, "Suculenta");
        assert_eq!(card.days_remaining, Some(2));
        assert_eq!(card.status, WateringStatus::Soon);
        assert_eq!(card.notes.chars().count(), NOTES_PREVIEW_CHARS + 1);
        assert_eq!(card.added, "01/05/2024");

        let text = card.render();
        assert!(text.starts_with("CACTUS\n"));
        assert!(text.contains("  Estado: Regar pronto (2 días)\n"));
        assert!(text.contains("  Se riega cada 14 días.\n"));
        assert!(text.contains("Mucho sol, riego muy escaso"));
    }
}
