use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;

use crate::error::Result;
use crate::models::FlavorStats;

/// One precomputed recipe from the golden fixture.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenRow {
    /// Space-separated berry names in drop order.
    pub berries: String,
    pub rpm: f64,
    pub spicy: u8,
    pub dry: u8,
    pub sweet: u8,
    pub bitter: u8,
    pub sour: u8,
}

impl GoldenRow {
    pub fn names(&self) -> Vec<&str> {
        self.berries.split_whitespace().collect()
    }

    pub fn expected(&self) -> FlavorStats {
        FlavorStats {
            spicy: self.spicy,
            dry: self.dry,
            sweet: self.sweet,
            bitter: self.bitter,
            sour: self.sour,
        }
    }
}

/// Load the golden fixture CSV
/// (`berries,rpm,spicy,dry,sweet,bitter,sour`).
pub fn load_golden<P: AsRef<Path>>(path: P) -> Result<Vec<GoldenRow>> {
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_path(path)?;
    let mut rows = Vec::new();
    for row in rdr.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}
