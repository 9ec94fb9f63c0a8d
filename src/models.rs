use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::PlantError;

/// Watering interval used when the plant type is not recognized.
pub const DEFAULT_WATERING_INTERVAL_DAYS: u32 = 7;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlantType {
    Interior,
    Exterior,
    #[serde(alias = "Suculenta")]
    Succulent,
    Ornamental,
}

impl PlantType {
    pub const ALL: [PlantType; 4] = [
        PlantType::Interior,
        PlantType::Exterior,
        PlantType::Succulent,
        PlantType::Ornamental,
    ];

    /// Days between waterings for this type.
    pub fn watering_interval_days(self) -> u32 {
        match self {
            PlantType::Interior => 5,
            PlantType::Exterior => 3,
            PlantType::Succulent => 14,
            PlantType::Ornamental => 7,
        }
    }

    /// English name, as written in the stored snapshot.
    pub fn name(self) -> &'static str {
        match self {
            PlantType::Interior => "Interior",
            PlantType::Exterior => "Exterior",
            PlantType::Succulent => "Succulent",
            PlantType::Ornamental => "Ornamental",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PlantType::Interior => "Interior",
            PlantType::Exterior => "Exterior",
            PlantType::Succulent => "Suculenta",
            PlantType::Ornamental => "Ornamental",
        }
    }
}

impl fmt::Display for PlantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PlantType {
    type Err = PlantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "interior" => Ok(PlantType::Interior),
            "exterior" => Ok(PlantType::Exterior),
            "succulent" | "suculenta" => Ok(PlantType::Succulent),
            "ornamental" => Ok(PlantType::Ornamental),
            _ => Err(PlantError::UnknownPlantType {
                value: s.to_string(),
            }),
        }
    }
}

/// Watering interval for a raw type name, falling back to
/// [`DEFAULT_WATERING_INTERVAL_DAYS`] for anything unrecognized.
pub fn watering_interval_for(kind: &str) -> u32 {
    kind.parse::<PlantType>()
        .map(PlantType::watering_interval_days)
        .unwrap_or(DEFAULT_WATERING_INTERVAL_DAYS)
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CareDifficulty {
    #[serde(alias = "Fácil")]
    Easy,
    #[serde(alias = "Medio")]
    Medium,
    #[serde(alias = "Difícil")]
    Hard,
}

impl CareDifficulty {
    pub fn label(self) -> &'static str {
        match self {
            CareDifficulty::Easy => "Fácil",
            CareDifficulty::Medium => "Medio",
            CareDifficulty::Hard => "Difícil",
        }
    }
}

impl fmt::Display for CareDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CareDifficulty {
    type Err = PlantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "fácil" | "facil" => Ok(CareDifficulty::Easy),
            "medium" | "medio" => Ok(CareDifficulty::Medium),
            "hard" | "difícil" | "dificil" => Ok(CareDifficulty::Hard),
            _ => Err(PlantError::UnknownDifficulty {
                value: s.to_string(),
            }),
        }
    }
}

/// A tracked plant as stored in the collection.
///
/// `id` and `added_date` are fixed at creation and the watering interval
/// always follows `plant_type`; the only mutation after that is the
/// favorite flag.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", from = "StoredPlant")]
pub struct Plant {
    id: String,
    name: String,
    #[serde(rename = "type")]
    plant_type: PlantType,
    care_difficulty: CareDifficulty,
    watering_interval_days: u32,
    last_watered_date: Option<NaiveDate>,
    added_date: DateTime<Utc>,
    is_favorite: bool,
    notes: Option<String>,
    image_reference: Option<String>,
    care_advice: String,
}

/// On-disk shape of a plant. A stored `wateringIntervalDays` is ignored and
/// re-derived from the type.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredPlant {
    id: String,
    name: String,
    #[serde(rename = "type")]
    plant_type: PlantType,
    care_difficulty: CareDifficulty,
    #[serde(default)]
    last_watered_date: Option<NaiveDate>,
    added_date: DateTime<Utc>,
    #[serde(default)]
    is_favorite: bool,
    #[serde(default)]
    notes: Option<String>,
    #[serde(default)]
    image_reference: Option<String>,
    #[serde(default)]
    care_advice: String,
}

impl From<StoredPlant> for Plant {
    fn from(stored: StoredPlant) -> Self {
        Plant {
            watering_interval_days: stored.plant_type.watering_interval_days(),
            id: stored.id,
            name: stored.name,
            plant_type: stored.plant_type,
            care_difficulty: stored.care_difficulty,
            last_watered_date: stored.last_watered_date,
            added_date: stored.added_date,
            is_favorite: stored.is_favorite,
            notes: stored.notes,
            image_reference: stored.image_reference,
            care_advice: stored.care_advice,
        }
    }
}

/// Field values of a plant not yet assigned an identity.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPlant {
    pub name: String,
    pub plant_type: PlantType,
    pub care_difficulty: CareDifficulty,
    pub last_watered_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub image_reference: Option<String>,
}

impl NewPlant {
    /// Stamp identity and derived fields. The interval and care advice come
    /// from the type and name only.
    pub fn into_plant(self, now: DateTime<Utc>, existing: &[Plant]) -> Plant {
        let care_advice =
            crate::care::care_advice_for(&self.name, Some(self.plant_type)).to_string();
        Plant {
            id: next_plant_id(now, existing),
            watering_interval_days: self.plant_type.watering_interval_days(),
            name: self.name,
            plant_type: self.plant_type,
            care_difficulty: self.care_difficulty,
            last_watered_date: self.last_watered_date,
            added_date: now,
            is_favorite: false,
            notes: self.notes,
            image_reference: self.image_reference,
            care_advice,
        }
    }
}

impl Plant {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn plant_type(&self) -> PlantType {
        self.plant_type
    }

    pub fn care_difficulty(&self) -> CareDifficulty {
        self.care_difficulty
    }

    pub fn watering_interval_days(&self) -> u32 {
        self.watering_interval_days
    }

    pub fn last_watered_date(&self) -> Option<NaiveDate> {
        self.last_watered_date
    }

    pub fn added_date(&self) -> DateTime<Utc> {
        self.added_date
    }

    pub fn is_favorite(&self) -> bool {
        self.is_favorite
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn image_reference(&self) -> Option<&str> {
        self.image_reference.as_deref()
    }

    pub fn care_advice(&self) -> &str {
        &self.care_advice
    }

    pub(crate) fn toggle_favorite(&mut self) -> bool {
        self.is_favorite = !self.is_favorite;
        self.is_favorite
    }
}

/// `p-<unix millis>`, bumped past any id already taken in `existing`.
pub fn next_plant_id(now: DateTime<Utc>, existing: &[Plant]) -> String {
    let mut millis = now.timestamp_millis();
    loop {
        let candidate = format!("p-{}", millis);
        if !existing.iter().any(|p| p.id == candidate) {
            return candidate;
        }
        millis += 1;
    }
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(value: &str) -> Result<NaiveDate, PlantError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| PlantError::InvalidDate {
        value: value.to_string(),
    })
}
