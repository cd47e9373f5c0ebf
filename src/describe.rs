use crate::section::Section;
use crate::tile::{Group, Tile};

fn section_label(s: &Section) -> String {
	if s.terrain().is_empty() {
		"-".to_string()
	} else {
		format!("{} x{}", s.typing(), s.count())
	}
}

/// One line: subtile, then the six edges clockwise from the top.
pub fn format_tile(tile: &Tile) -> String {
	let edges: Vec<String> = tile.edges().iter().map(section_label).collect();
	format!("[{}] {}", section_label(tile.subtile()), edges.join(" | "))
}

pub fn format_groups(groups: &[Group]) -> Vec<String> {
	let mut out = Vec::new();
	out.push("[Groups]".to_string());
	for g in groups {
		let terrain = if g.terrain().is_empty() { "(empty)" } else { g.terrain().as_str() };
		let indices: Vec<String> = g.indices().map(|i| i.to_string()).collect();
		let noun = if g.len() == 1 { "section" } else { "sections" };
		out.push(format!(
			"{} – {} {} [{}] – total {}",
			terrain,
			g.len(),
			noun,
			indices.join(","),
			g.total_count()
		));
	}
	out
}
