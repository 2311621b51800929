//! Cut and preset catalog
//!
//! Cooks only reference cuts and presets by numeric id. The app resolves
//! them through a `meats.json` catalog nested as
//! categories → animals → cut types → cuts → temperature ranges.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

use crate::error::Result;

/// Recommended temperature range for a cut (a "preset")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureRange {
    /// Preset id
    pub id: i32,
    /// Doneness name
    pub name: String,
    /// Owning animal
    pub animal_id: i32,
    /// Owning cut
    pub cut_id: i32,
    /// Lower bound in °C
    pub min_temp_c: i32,
    /// Upper bound in °C
    pub max_temp_c: i32,
    /// Target in °C
    pub target_temp_c: i32,
    /// Lower bound in °F
    pub min_temp_f: i32,
    /// Upper bound in °F
    pub max_temp_f: i32,
    /// Target in °F
    pub target_temp_f: i32,
    /// Gradient start color
    #[serde(default)]
    pub start_hex: Option<String>,
    /// Gradient end color
    #[serde(default)]
    pub end_hex: Option<String>,
    /// Description
    pub description: String,
    /// Image asset
    pub image_name: String,
    /// Meets USDA safe minimum
    pub usda_safe: bool,
}

/// A cut of meat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cut {
    /// Cut id
    pub id: i32,
    /// Short name
    pub name: String,
    /// Full name
    pub name_long: String,
    /// Owning animal
    pub animal_id: i32,
    /// Owning cut type
    pub cut_type_id: i32,
    /// Typical thickness
    #[serde(default)]
    pub estimated_thickness: Option<f64>,
    /// USDA safe minimum in °C
    #[serde(default)]
    pub usda_safe_c: Option<i32>,
    /// USDA safe minimum in °F
    #[serde(default)]
    pub usda_safe_f: Option<i32>,
    /// Preset chosen most often
    #[serde(default)]
    pub most_popular_temp_range_id: Option<i32>,
    /// Sort order
    pub cut_order: i32,
    /// Probe insertion hint
    #[serde(default)]
    pub insertion_instruction: Option<String>,
    /// Presets for this cut
    pub temperature_ranges: Vec<TemperatureRange>,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    categories: Vec<Category>,
}

#[derive(Debug, Deserialize)]
struct Category {
    #[serde(default)]
    animals: Vec<Animal>,
}

#[derive(Debug, Deserialize)]
struct Animal {
    #[serde(default)]
    cut_types: Vec<CutType>,
}

#[derive(Debug, Deserialize)]
struct CutType {
    #[serde(default)]
    cuts: Vec<Cut>,
}

/// Id lookup over cuts and presets
#[derive(Debug, Clone, Default)]
pub struct MeatCatalog {
    cuts: HashMap<i32, Cut>,
    presets: HashMap<i32, TemperatureRange>,
}

impl MeatCatalog {
    /// Catalog without entries; every lookup misses
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse catalog JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        let mut catalog = Self::default();

        let cuts = file
            .categories
            .into_iter()
            .flat_map(|category| category.animals)
            .flat_map(|animal| animal.cut_types)
            .flat_map(|cut_type| cut_type.cuts);

        for cut in cuts {
            for range in &cut.temperature_ranges {
                catalog.presets.insert(range.id, range.clone());
            }
            catalog.cuts.insert(cut.id, cut);
        }

        Ok(catalog)
    }

    /// Read and parse a catalog file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let catalog = Self::from_json(&contents)?;
        debug!(
            "Loaded {} cuts and {} presets from {}",
            catalog.cuts.len(),
            catalog.presets.len(),
            path.as_ref().display()
        );
        Ok(catalog)
    }

    /// Look up a cut
    pub fn cut(&self, id: i32) -> Option<&Cut> {
        self.cuts.get(&id)
    }

    /// Look up a preset
    pub fn preset(&self, id: i32) -> Option<&TemperatureRange> {
        self.presets.get(&id)
    }

    /// Number of cuts
    pub fn len(&self) -> usize {
        self.cuts.len()
    }

    /// True when no cuts are known
    pub fn is_empty(&self) -> bool {
        self.cuts.is_empty()
    }
}
