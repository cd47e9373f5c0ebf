use std::collections::HashMap;

use rand::{SeedableRng, rngs::StdRng};
use thiserror::Error;

use crate::coords::Coordinate;
use crate::tile::{EDGE_COUNT, Tile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("direction {0} is outside 1..=6")]
    DirectionOutOfRange(usize),
    #[error("radius {0} exceeds the generation limit of 1024")]
    RadiusTooLarge(u32),
}

/// Largest radius accepted by [`TileMap::from_seed`].
pub const MAX_SEED_RADIUS: u32 = 1024;

/// Unit steps for directions 1..=6, in the same clockwise order as tile
/// edges: direction `d` leads to the tile beyond edge `d`.
pub const DIRECTIONS: [Coordinate; EDGE_COUNT] = [
    Coordinate::from_axial(0, -1),
    Coordinate::from_axial(1, -1),
    Coordinate::from_axial(1, 0),
    Coordinate::from_axial(0, 1),
    Coordinate::from_axial(-1, 1),
    Coordinate::from_axial(-1, 0),
];

pub fn direction_vector(direction: usize) -> Result<Coordinate, MapError> {
    match direction {
        1..=EDGE_COUNT => Ok(DIRECTIONS[direction - 1]),
        _ => Err(MapError::DirectionOutOfRange(direction)),
    }
}

/// 1↔4, 2↔5, 3↔6.
pub fn opposite_direction(direction: usize) -> Result<usize, MapError> {
    direction_vector(direction)?;
    Ok((direction + 2) % EDGE_COUNT + 1)
}

pub fn neighbor_coordinate(home: Coordinate, direction: usize) -> Result<Coordinate, MapError> {
    Ok(home + direction_vector(direction)?)
}

/// Sparse hex grid. Positions without an entry have no tile placed.
#[derive(Debug, Clone, Default)]
pub struct TileMap {
    tiles: HashMap<Coordinate, Tile>,
}

impl TileMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fills every position within `radius` steps of the origin with a random
    /// tile. The same seed always yields the same map.
    pub fn from_seed(radius: u32, seed: u64) -> Result<Self, MapError> {
        if radius > MAX_SEED_RADIUS {
            return Err(MapError::RadiusTooLarge(radius));
        }
        let radius = i32::try_from(radius).map_err(|_| MapError::RadiusTooLarge(radius))?;
        let mut map = Self::new();
        let mut rng = StdRng::seed_from_u64(seed);
        for q in -radius..=radius {
            let r_min = (-radius).max(-q - radius);
            let r_max = radius.min(-q + radius);
            for r in r_min..=r_max {
                map.insert(Coordinate::from_axial(q, r), Tile::random(&mut rng));
            }
        }
        log::debug!("generated {} tiles within radius {radius} from seed {seed}", map.len());
        Ok(map)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn contains(&self, at: Coordinate) -> bool {
        self.tiles.contains_key(&at)
    }

    pub fn get(&self, at: Coordinate) -> Option<&Tile> {
        self.tiles.get(&at)
    }

    pub fn get_mut(&mut self, at: Coordinate) -> Option<&mut Tile> {
        self.tiles.get_mut(&at)
    }

    /// Places `tile` at `at`, handing back whatever was there before.
    pub fn insert(&mut self, at: Coordinate, tile: Tile) -> Option<Tile> {
        let previous = self.tiles.insert(at, tile);
        if previous.is_some() {
            log::debug!("replaced tile at {at}");
        }
        previous
    }

    pub fn remove(&mut self, at: Coordinate) -> Option<Tile> {
        self.tiles.remove(&at)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Coordinate, &Tile)> {
        self.tiles.iter()
    }

    /// `Ok(None)` when the neighbouring position is empty.
    pub fn neighbor_tile(&self, home: Coordinate, direction: usize) -> Result<Option<&Tile>, MapError> {
        Ok(self.get(neighbor_coordinate(home, direction)?))
    }

    /// Occupied neighbours of `home` with the direction leading to each.
    pub fn neighbors(&self, home: Coordinate) -> impl Iterator<Item = (usize, &Tile)> + '_ {
        (1..=EDGE_COUNT)
            .filter_map(move |d| self.get(home + DIRECTIONS[d - 1]).map(|t| (d, t)))
    }
}
