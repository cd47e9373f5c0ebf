use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::terrain::Terrain;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SectionError {
    #[error("{0} is not a valid typing")]
    InvalidType(String),
}

/// One of the seven parts of a tile: a terrain plus how many elements of it
/// are drawn there (trees in a forest, houses in a village, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Section {
    terrain: Terrain,
    count: i32,
}

impl Section {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(typing: &str) -> Result<Self, SectionError> {
        Self::with_type_and_count(typing, 0)
    }

    pub fn with_type_and_count(typing: &str, count: i32) -> Result<Self, SectionError> {
        Ok(Self {
            terrain: typing.parse()?,
            count,
        })
    }

    pub const fn from_terrain(terrain: Terrain, count: i32) -> Self {
        Self { terrain, count }
    }

    pub fn terrain(&self) -> Terrain {
        self.terrain
    }

    /// Canonical uppercase name of the terrain, `""` when empty.
    pub fn typing(&self) -> &'static str {
        self.terrain.as_str()
    }

    pub fn count(&self) -> i32 {
        self.count
    }

    /// Leaves the current terrain untouched when `typing` is rejected.
    pub fn set_type(&mut self, typing: &str) -> Result<(), SectionError> {
        self.terrain = typing.parse()?;
        Ok(())
    }

    pub fn set_terrain(&mut self, terrain: Terrain) {
        self.terrain = terrain;
    }

    /// Not range-checked; negative values are accepted.
    pub fn set_count(&mut self, count: i32) {
        self.count = count;
    }
}
