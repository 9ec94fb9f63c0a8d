//! Input boundary: raw form values and their validation.

use std::fmt;

use chrono::NaiveDate;

use crate::models::{parse_date, CareDifficulty, NewPlant, PlantType};

pub const MIN_NAME_CHARS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Type,
    Difficulty,
    LastWatered,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "nombre",
            Field::Type => "tipo",
            Field::Difficulty => "dificultad",
            Field::LastWatered => "ultimoRiego",
        }
    }
}

/// Field-scoped validation messages, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<(Field, String)>,
}

impl ValidationErrors {
    fn push(&mut self, field: Field, message: impl Into<String>) {
        self.errors.push((field, message.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, m)| m.as_str())
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  - {}: {}", field.label(), message)?;
        }
        Ok(())
    }
}

/// A candidate plant exactly as entered.
#[derive(Debug, Clone, Default)]
pub struct PlantForm {
    pub name: String,
    pub plant_type: Option<String>,
    pub difficulty: Option<String>,
    pub image: Option<String>,
    pub last_watered: Option<String>,
    pub notes: Option<String>,
}

impl PlantForm {
    /// Check every required field, collecting all failures.
    pub fn validate(&self) -> Result<NewPlant, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let name = self.name.trim();
        if name.chars().count() < MIN_NAME_CHARS {
            errors.push(Field::Name, "El nombre debe tener al menos 2 caracteres.");
        }

        let plant_type = match non_blank(&self.plant_type) {
            None => {
                errors.push(Field::Type, "Selecciona un tipo de planta.");
                None
            }
            Some(raw) => match raw.parse::<PlantType>() {
                Ok(t) => Some(t),
                Err(_) => {
                    errors.push(Field::Type, format!("Tipo de planta desconocido: {}.", raw));
                    None
                }
            },
        };

        let care_difficulty = match non_blank(&self.difficulty) {
            None => {
                errors.push(Field::Difficulty, "Selecciona un nivel de dificultad.");
                None
            }
            Some(raw) => match raw.parse::<CareDifficulty>() {
                Ok(d) => Some(d),
                Err(_) => {
                    errors.push(
                        Field::Difficulty,
                        format!("Nivel de dificultad desconocido: {}.", raw),
                    );
                    None
                }
            },
        };

        let last_watered_date: Option<NaiveDate> = match non_blank(&self.last_watered) {
            None => None,
            Some(raw) => match parse_date(raw) {
                Ok(d) => Some(d),
                Err(_) => {
                    errors.push(
                        Field::LastWatered,
                        "Fecha de último riego inválida (use AAAA-MM-DD).",
                    );
                    None
                }
            },
        };

        match (plant_type, care_difficulty) {
            (Some(plant_type), Some(care_difficulty)) if errors.is_empty() => Ok(NewPlant {
                name: name.to_string(),
                plant_type,
                care_difficulty,
                last_watered_date,
                notes: non_blank(&self.notes).map(str::to_string),
                image_reference: non_blank(&self.image).map(str::to_string),
            }),
            _ => Err(errors),
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> PlantForm {
        PlantForm {
            name: "  Sansevieria ".to_string(),
            plant_type: Some("Interior".to_string()),
            difficulty: Some("Fácil".to_string()),
            image: Some("".to_string()),
            last_watered: Some("2024-05-01".to_string()),
            notes: Some("Junto a la ventana".to_string()),
        }
    }

    #[test]
    fn valid_form_produces_new_plant() {
        let plant = filled().validate().unwrap();
        assert_eq!(plant.name, "Sansevieria");
        assert_eq!(plant.plant_type, PlantType::Interior);
        assert_eq!(plant.care_difficulty, CareDifficulty::Easy);
        assert_eq!(plant.last_watered_date, NaiveDate::from_ymd_opt(2024, 5, 1));
        assert_eq!(plant.notes.as_deref(), Some("Junto a la ventana"));
        assert_eq!(plant.image_reference, None);
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = PlantForm::default().validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(
            errors.get(Field::Name),
            Some("El nombre debe tener al menos 2 caracteres.")
        );
        assert_eq!(errors.get(Field::Type), Some("Selecciona un tipo de planta."));
        assert_eq!(
            errors.get(Field::Difficulty),
            Some("Selecciona un nivel de dificultad.")
        );
        assert_eq!(errors.get(Field::LastWatered), None);
    }

    #[test]
    fn one_char_name_is_rejected_after_trim() {
        let form = PlantForm {
            name: " a ".to_string(),
            ..filled()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.get(Field::Name).is_some());
    }

    #[test]
    fn two_multibyte_chars_are_enough() {
        let form = PlantForm {
            name: "Ñu".to_string(),
            ..filled()
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn unknown_type_and_bad_date() {
        let form = PlantForm {
            plant_type: Some("Trepadora".to_string()),
            last_watered: Some("01/05/2024".to_string()),
            ..filled()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.get(Field::Type),
            Some("Tipo de planta desconocido: Trepadora.")
        );
        assert!(errors.get(Field::LastWatered).is_some());
        assert_eq!(
            errors.to_string(),
            "  - tipo: Tipo de planta desconocido: Trepadora.\n  - ultimoRiego: Fecha de último riego inválida (use AAAA-MM-DD)."
        );
    }
}
