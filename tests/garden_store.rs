//! Whole-list persistence through the file-backed store.

use chrono::{NaiveDate, TimeZone, Utc};
use tempfile::tempdir;

use mis_plantas::db::DEFAULT_STORE_KEY;
use mis_plantas::form::PlantForm;
use mis_plantas::{FileStore, Garden, KeyValueStore, PlantType};

fn form(name: &str, kind: &str) -> PlantForm {
    PlantForm {
        name: name.to_string(),
        plant_type: Some(kind.to_string()),
        difficulty: Some("Medio".to_string()),
        last_watered: Some("2024-04-20".to_string()),
        notes: Some("Regalo de la abuela".to_string()),
        image: Some("data:image/png;base64,AAAA".to_string()),
    }
}

#[test]
fn reload_yields_equal_list() {
    let dir = tempdir().unwrap();
    let now = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();

    let mut garden = Garden::load(FileStore::new(dir.path()), DEFAULT_STORE_KEY);
    for (name, kind) in [("Ficus", "Interior"), ("Aloe", "Suculenta"), ("Rosa", "Exterior")] {
        garden.add(form(name, kind).validate().unwrap(), now).unwrap();
    }
    let fav_id = garden.plants()[1].id().to_string();
    garden.toggle_favorite(&fav_id).unwrap();

    let reloaded = Garden::load(FileStore::new(dir.path()), DEFAULT_STORE_KEY);
    assert_eq!(reloaded.plants(), garden.plants());

    let names: Vec<_> = reloaded.plants().iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["Rosa", "Aloe", "Ficus"]);
    assert!(reloaded.find(&fav_id).unwrap().is_favorite());
}

#[test]
fn succulent_interval_ignores_everything_else() {
    let dir = tempdir().unwrap();
    let mut garden = Garden::load(FileStore::new(dir.path()), DEFAULT_STORE_KEY);
    let plant = garden
        .add(form("Ficus suculento", "Suculenta").validate().unwrap(), Utc::now())
        .unwrap();

    assert_eq!(plant.plant_type(), PlantType::Succulent);
    assert_eq!(plant.watering_interval_days(), 14);
    assert_eq!(plant.last_watered_date(), NaiveDate::from_ymd_opt(2024, 4, 20));
}

#[test]
fn corrupted_file_degrades_to_empty_and_is_overwritten() {
    let dir = tempdir().unwrap();
    let mut store = FileStore::new(dir.path());
    store.put(DEFAULT_STORE_KEY, "[{\"id\": 3").unwrap();

    let mut garden = Garden::load(store, DEFAULT_STORE_KEY);
    assert!(garden.is_empty());

    garden
        .add(form("Helecho", "Interior").validate().unwrap(), Utc::now())
        .unwrap();
    let reloaded = Garden::load(FileStore::new(dir.path()), DEFAULT_STORE_KEY);
    assert_eq!(reloaded.len(), 1);
    assert_eq!(
        reloaded.plants()[0].care_advice(),
        "Ambiente húmedo, sombra parcial, riego regular."
    );
}

#[test]
fn snapshot_uses_documented_field_names() {
    let dir = tempdir().unwrap();
    let store = FileStore::new(dir.path());
    let path = store.path_for(DEFAULT_STORE_KEY);
    let mut garden = Garden::load(store, DEFAULT_STORE_KEY);
    garden
        .add(form("Ficus", "Interior").validate().unwrap(), Utc::now())
        .unwrap();

    let raw = std::fs::read_to_string(path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let first = &value.as_array().unwrap()[0];
    assert_eq!(first["type"], "Interior");
    assert_eq!(first["careDifficulty"], "Medium");
    assert_eq!(first["wateringIntervalDays"], 5);
    assert_eq!(first["lastWateredDate"], "2024-04-20");
    assert_eq!(first["isFavorite"], false);
    assert!(first["id"].as_str().unwrap().starts_with("p-"));
}

#[test]
fn removing_unknown_id_keeps_list() {
    let dir = tempdir().unwrap();
    let mut garden = Garden::load(FileStore::new(dir.path()), DEFAULT_STORE_KEY);
    garden
        .add(form("Ficus", "Interior").validate().unwrap(), Utc::now())
        .unwrap();

    assert!(garden.remove("p-no-existe").unwrap().is_none());
    let reloaded = Garden::load(FileStore::new(dir.path()), DEFAULT_STORE_KEY);
    assert_eq!(reloaded.len(), 1);
}
