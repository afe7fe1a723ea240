use std::fs;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::DishCatalog;
use crate::error::Result;
use crate::models::{Dish, DishRecord, UserPreferences};
use crate::planner::PriceListCostSource;

/// Load the dish catalog from a CSV file.
///
/// Duplicate names (case-insensitive) keep the last row.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<DishCatalog> {
    let file = fs::File::open(path.as_ref())?;
    let catalog = read_catalog(file)?;
    debug!(path = %path.as_ref().display(), dishes = catalog.len(), "loaded catalog");
    Ok(catalog)
}

/// Read catalog rows from any CSV source with a header row.
pub fn read_catalog<R: Read>(reader: R) -> Result<DishCatalog> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut dishes = Vec::new();
    for row in rdr.deserialize::<DishRecord>() {
        dishes.push(Dish::from(row?));
    }
    Ok(DishCatalog::new(dishes))
}

/// Load and validate preferences from a JSON file.
pub fn load_preferences<P: AsRef<Path>>(path: P) -> Result<UserPreferences> {
    let content = fs::read_to_string(path)?;
    let prefs: UserPreferences = serde_json::from_str(&content)?;
    prefs.validate()?;
    Ok(prefs)
}

pub fn save_preferences<P: AsRef<Path>>(path: P, prefs: &UserPreferences) -> Result<()> {
    save_json(path, prefs)
}

/// Write any serialisable value as pretty JSON.
pub fn save_json<P: AsRef<Path>, T: Serialize + ?Sized>(path: P, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

#[derive(Debug, Deserialize)]
struct PriceRow {
    item: String,
    price_per_kg: f64,
}

/// Load a per-kg price list (`item,price_per_kg`).
///
/// Items are matched case-insensitively; the last row for an item wins.
pub fn load_price_list<P: AsRef<Path>>(path: P) -> Result<PriceListCostSource> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut prices = Vec::new();
    for row in rdr.deserialize::<PriceRow>() {
        let row = row?;
        prices.push((row.item, row.price_per_kg));
    }
    Ok(PriceListCostSource::new(prices))
}
