use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::section::SectionError;

/// Terrain carried by a section. `Empty` means nothing has been assigned yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Terrain {
	#[default]
	Empty,
	Plain,
	Forest,
	House,
	Field,
	River,
	Track,
	Station,
}

impl Terrain {
	/// The seven assignable terrains, in canonical order.
	pub const VALID: [Terrain; 7] = [
		Terrain::Plain,
		Terrain::Forest,
		Terrain::House,
		Terrain::Field,
		Terrain::River,
		Terrain::Track,
		Terrain::Station,
	];

	pub fn as_str(self) -> &'static str {
		match self {
			Terrain::Empty => "",
			Terrain::Plain => "PLAIN",
			Terrain::Forest => "FOREST",
			Terrain::House => "HOUSE",
			Terrain::Field => "FIELD",
			Terrain::River => "RIVER",
			Terrain::Track => "TRACK",
			Terrain::Station => "STATION",
		}
	}

	pub fn is_empty(self) -> bool {
		matches!(self, Terrain::Empty)
	}

	pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
		Self::VALID[rng.gen_range(0..Self::VALID.len())]
	}
}

impl FromStr for Terrain {
	type Err = SectionError;

	/// Case-insensitive; the empty string parses to [`Terrain::Empty`].
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let normalized = s.to_uppercase();
		match normalized.as_str() {
			"" => Ok(Terrain::Empty),
			"PLAIN" => Ok(Terrain::Plain),
			"FOREST" => Ok(Terrain::Forest),
			"HOUSE" => Ok(Terrain::House),
			"FIELD" => Ok(Terrain::Field),
			"RIVER" => Ok(Terrain::River),
			"TRACK" => Ok(Terrain::Track),
			"STATION" => Ok(Terrain::Station),
			_ => Err(SectionError::InvalidType(normalized)),
		}
	}
}

impl TryFrom<String> for Terrain {
	type Error = SectionError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}

impl From<Terrain> for String {
	fn from(t: Terrain) -> Self {
		t.as_str().to_string()
	}
}

impl fmt::Display for Terrain {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parse_normalizes_case() {
		assert_eq!("Plain".parse::<Terrain>().unwrap(), Terrain::Plain);
		assert_eq!("forest".parse::<Terrain>().unwrap(), Terrain::Forest);
		assert_eq!("STATION".parse::<Terrain>().unwrap(), Terrain::Station);
		assert_eq!("".parse::<Terrain>().unwrap(), Terrain::Empty);
	}

	#[test]
	fn parse_rejects_unknown() {
		match "Sation".parse::<Terrain>() {
			Err(SectionError::InvalidType(s)) => assert_eq!(s, "SATION"),
			other => panic!("unexpected {:?}", other),
		}
		assert!("Water".parse::<Terrain>().is_err());
	}

	#[test]
	fn display_is_canonical() {
		for t in Terrain::VALID {
			assert_eq!(t.to_string().parse::<Terrain>().unwrap(), t);
			assert_eq!(t.to_string(), t.to_string().to_uppercase());
		}
		assert_eq!(Terrain::Empty.to_string(), "");
	}

	#[test]
	fn serde_uses_canonical_strings() {
		let json = serde_json::to_string(&Terrain::River).unwrap();
		assert_eq!(json, "\"RIVER\"");
		let back: Terrain = serde_json::from_str("\"track\"").unwrap();
		assert_eq!(back, Terrain::Track);
		assert!(serde_json::from_str::<Terrain>("\"WATER\"").is_err());
	}
}
