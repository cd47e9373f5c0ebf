use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::section::{Section, SectionError};
use crate::terrain::Terrain;

/// Number of edge sections around the subtile.
pub const EDGE_COUNT: usize = 6;
/// Subtile plus edges.
pub const SECTION_COUNT: usize = EDGE_COUNT + 1;
/// Canonical index of the subtile; edges are `1..=EDGE_COUNT`, clockwise from the top.
pub const SUBTILE: usize = 0;

const MAX_RANDOM_COUNT: i32 = 6;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TileError {
	#[error("a tile needs exactly 7 sections, got {0}")]
	SectionCountMismatch(usize),
	#[error("section index {0} is outside 0..=6")]
	IndexRange(usize),
	#[error("rotation count must not be negative, got {0}")]
	InvalidArgument(i32),
	#[error(transparent)]
	Section(#[from] SectionError),
}

/// Edge reached by stepping clockwise from `edge` (6 wraps to 1), `None` when
/// `edge` is not in `1..=6`.
pub fn clockwise_edge(edge: usize) -> Option<usize> {
	is_edge(edge).then(|| step_clockwise(edge))
}

/// Edge reached by stepping counter-clockwise from `edge` (1 wraps to 6),
/// `None` when `edge` is not in `1..=6`.
pub fn counterclockwise_edge(edge: usize) -> Option<usize> {
	is_edge(edge).then(|| step_counterclockwise(edge))
}

fn is_edge(edge: usize) -> bool {
	(1..=EDGE_COUNT).contains(&edge)
}

// Callers guarantee `edge` is in 1..=6.
fn step_clockwise(edge: usize) -> usize {
	edge % EDGE_COUNT + 1
}

fn step_counterclockwise(edge: usize) -> usize {
	(edge + EDGE_COUNT - 2) % EDGE_COUNT + 1
}

/// A hexagonal tile: a subtile in the middle, adjacent to every edge, and six
/// edges each adjacent to its clockwise and counter-clockwise neighbours.
///
/// Equality and hashing are structural over the seven sections in canonical
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Tile {
	subtile: Section,
	edges: [Section; EDGE_COUNT],
}

impl Tile {
	pub fn new() -> Self {
		Self::default()
	}

	/// Empty edges around a typed subtile.
	pub fn with_subtile(typing: &str, count: i32) -> Result<Self, TileError> {
		Ok(Self {
			subtile: Section::with_type_and_count(typing, count)?,
			..Self::default()
		})
	}

	/// Builds a tile from exactly seven sections, subtile first.
	pub fn from_sections<I>(sections: I) -> Result<Self, TileError>
	where
		I: IntoIterator<Item = Section>,
	{
		let sections: Vec<Section> = sections.into_iter().collect();
		if sections.len() != SECTION_COUNT {
			return Err(TileError::SectionCountMismatch(sections.len()));
		}
		let mut tile = Self::default();
		for (index, section) in sections.into_iter().enumerate() {
			tile.set_section(index, section);
		}
		Ok(tile)
	}

	pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
		let subtile = random_section(rng);
		let edges = std::array::from_fn(|_| random_section(rng));
		Self { subtile, edges }
	}

	pub fn subtile(&self) -> &Section {
		&self.subtile
	}

	pub fn edges(&self) -> &[Section; EDGE_COUNT] {
		&self.edges
	}

	fn slot(&self, index: usize) -> Option<&Section> {
		match index {
			SUBTILE => Some(&self.subtile),
			_ => self.edges.get(index.checked_sub(1)?),
		}
	}

	fn slot_mut(&mut self, index: usize) -> Option<&mut Section> {
		match index {
			SUBTILE => Some(&mut self.subtile),
			_ => self.edges.get_mut(index.checked_sub(1)?),
		}
	}

	fn edge_at(&self, edge: usize) -> &Section {
		&self.edges[edge - 1]
	}

	pub fn get_section(&self, index: usize) -> Result<&Section, TileError> {
		self.slot(index).ok_or(TileError::IndexRange(index))
	}

	pub fn get_section_mut(&mut self, index: usize) -> Result<&mut Section, TileError> {
		self.slot_mut(index).ok_or(TileError::IndexRange(index))
	}

	/// Returns `false` instead of failing when `index` is outside `0..=6`.
	pub fn set_section(&mut self, index: usize, section: Section) -> bool {
		match self.slot_mut(index) {
			Some(slot) => {
				*slot = section;
				true
			}
			None => false,
		}
	}

	/// Returns `false` when `index` is out of range or `typing` is not a terrain.
	pub fn set_edge(&mut self, index: usize, typing: &str, count: i32) -> bool {
		match Section::with_type_and_count(typing, count) {
			Ok(section) => self.set_section(index, section),
			Err(_) => false,
		}
	}

	/// Sections in canonical order, subtile first.
	pub fn iter(&self) -> impl Iterator<Item = &Section> {
		std::iter::once(&self.subtile).chain(self.edges.iter())
	}

	pub fn to_list(&self) -> Vec<Section> {
		self.iter().copied().collect()
	}

	/// Partitions the seven sections into groups of connected, same-terrain
	/// sections. The subtile's group always comes first, followed by one group
	/// per remaining run of edges, seeded from the lowest unvisited edge.
	pub fn get_groups(&self) -> Vec<Group> {
		let mut visited = EdgeMask::default();
		let center = self.subtile.terrain();

		let mut subtile_group = Group::seed(SUBTILE, self.subtile);
		for edge in 1..=EDGE_COUNT {
			if self.edge_at(edge).terrain() == center {
				visited.insert(edge);
				subtile_group.push(edge, *self.edge_at(edge));
			}
		}
		let mut groups = vec![subtile_group];

		while let Some(seed) = visited.first_unvisited() {
			visited.insert(seed);
			let mut group = Group::seed(seed, *self.edge_at(seed));
			self.absorb_run(seed, step_clockwise, &mut visited, &mut group);
			self.absorb_run(seed, step_counterclockwise, &mut visited, &mut group);
			groups.push(group);
		}

		log::trace!("tile split into {} groups", groups.len());
		groups
	}

	// Chains from `seed` in one direction while each next edge is unvisited and
	// matches the edge before it.
	fn absorb_run(
		&self,
		seed: usize,
		step: fn(usize) -> usize,
		visited: &mut EdgeMask,
		group: &mut Group,
	) {
		let mut current = seed;
		loop {
			let next = step(current);
			if visited.contains(next) || self.edge_at(next).terrain() != self.edge_at(current).terrain() {
				break;
			}
			visited.insert(next);
			group.push(next, *self.edge_at(next));
			current = next;
		}
	}

	/// Moves the edge at position `i` to `((i - 1 + rotations) mod 6) + 1`.
	/// The subtile stays put.
	pub fn rotate_clockwise(&mut self, rotations: i32) -> Result<(), TileError> {
		let steps = rotation_steps(rotations)?;
		self.edges.rotate_right(steps);
		log::trace!("rotated tile clockwise by {rotations}");
		Ok(())
	}

	/// Same as rotating clockwise by `(6 - rotations mod 6) mod 6`.
	pub fn rotate_counterclockwise(&mut self, rotations: i32) -> Result<(), TileError> {
		let steps = rotation_steps(rotations)?;
		self.edges.rotate_right((EDGE_COUNT - steps) % EDGE_COUNT);
		log::trace!("rotated tile counter-clockwise by {rotations}");
		Ok(())
	}
}

fn rotation_steps(rotations: i32) -> Result<usize, TileError> {
	let rotations = usize::try_from(rotations).map_err(|_| TileError::InvalidArgument(rotations))?;
	Ok(rotations % EDGE_COUNT)
}

fn random_section<R: Rng + ?Sized>(rng: &mut R) -> Section {
	let terrain = Terrain::random(rng);
	Section::from_terrain(terrain, rng.gen_range(0..=MAX_RANDOM_COUNT))
}

// Visited edges, bit `edge - 1` per edge.
#[derive(Debug, Clone, Copy, Default)]
struct EdgeMask(u8);

impl EdgeMask {
	fn bit(edge: usize) -> u8 {
		1 << (edge - 1)
	}

	fn insert(&mut self, edge: usize) {
		self.0 |= Self::bit(edge);
	}

	fn contains(self, edge: usize) -> bool {
		self.0 & Self::bit(edge) != 0
	}

	fn first_unvisited(self) -> Option<usize> {
		(1..=EDGE_COUNT).find(|&edge| !self.contains(edge))
	}
}

/// Sections of one tile that are connected and share a terrain, each paired
/// with its canonical index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
	members: Vec<(usize, Section)>,
}

impl Group {
	fn seed(index: usize, section: Section) -> Self {
		Self { members: vec![(index, section)] }
	}

	fn push(&mut self, index: usize, section: Section) {
		self.members.push((index, section));
	}

	pub fn members(&self) -> &[(usize, Section)] {
		&self.members
	}

	pub fn len(&self) -> usize {
		self.members.len()
	}

	pub fn is_empty(&self) -> bool {
		self.members.is_empty()
	}

	pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
		self.members.iter().map(|(i, _)| *i)
	}

	pub fn sections(&self) -> impl Iterator<Item = &Section> {
		self.members.iter().map(|(_, s)| s)
	}

	pub fn contains(&self, index: usize) -> bool {
		self.indices().any(|i| i == index)
	}

	pub fn terrain(&self) -> Terrain {
		self.members.first().map(|(_, s)| s.terrain()).unwrap_or_default()
	}

	/// Sum of the member counts.
	pub fn total_count(&self) -> i32 {
		self.sections().map(|s| s.count()).sum()
	}
}
