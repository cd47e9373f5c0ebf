pub mod coords;
pub mod describe;
pub mod section;
pub mod terrain;
pub mod tile;
pub mod tile_map;

// Re-exports for convenience in tests and integration users.
pub use coords::{CoordError, Coordinate};
pub use describe::{format_groups, format_tile};
pub use section::{Section, SectionError};
pub use terrain::Terrain;
pub use tile::{
    EDGE_COUNT, Group, SECTION_COUNT, SUBTILE, Tile, TileError, clockwise_edge,
    counterclockwise_edge,
};
pub use tile_map::{
    DIRECTIONS, MAX_SEED_RADIUS, MapError, TileMap, direction_vector, neighbor_coordinate,
    opposite_direction,
};
