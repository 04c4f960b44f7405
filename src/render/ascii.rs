//! Text rendering of the explored map
//!
//! Diagnostic only: a fixed-width window centred on the explorer, rows from
//! north (high y) to south. Even rows are indented half a cell because they
//! sit east of odd rows.

use crate::hex::coord::HexCoord;
use crate::hex::direction::Direction;
use crate::map::biome::Biome;
use crate::map::knowledge::TileKnowledgeMap;
use crate::map::occupier::OccupantClass;

pub const POSITION_GLYPH: char = '@';
pub const EXPLORER_GLYPH: char = 'X';
pub const STRUCTURE_GLYPH: char = '#';
pub const UNEXPLORED_GLYPH: char = '?';

/// Renders a square window of the knowledge map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsciiRenderer {
    pub radius: u32,
    pub legend: bool,
}

impl Default for AsciiRenderer {
    fn default() -> Self {
        Self {
            radius: 5,
            legend: true,
        }
    }
}

impl AsciiRenderer {
    pub fn new(radius: u32) -> Self {
        Self {
            radius,
            ..Self::default()
        }
    }

    pub fn without_legend(mut self) -> Self {
        self.legend = false;
        self
    }

    /// Glyph for a single coordinate
    pub fn glyph_at(&self, map: &TileKnowledgeMap, center: HexCoord, coord: HexCoord) -> char {
        if coord == center {
            return POSITION_GLYPH;
        }
        match map.get(&coord) {
            None => UNEXPLORED_GLYPH,
            Some(tile) => match tile.occupant.and_then(|o| o.kind.class()) {
                Some(OccupantClass::Explorer) => EXPLORER_GLYPH,
                Some(OccupantClass::Structure) => STRUCTURE_GLYPH,
                None => tile.biome.glyph(),
            },
        }
    }

    pub fn render(&self, map: &TileKnowledgeMap, center: HexCoord) -> String {
        let r = i64::from(self.radius);
        let label_width = [center.y - r, center.y + r]
            .iter()
            .map(|y| y.to_string().len())
            .max()
            .unwrap_or(1);

        let mut out = String::new();
        for y in ((center.y - r)..=(center.y + r)).rev() {
            out.push_str(&format!("{y:>label_width$} "));
            if y & 1 == 0 {
                out.push(' ');
            }
            let row: Vec<String> = ((center.x - r)..=(center.x + r))
                .map(|x| self.glyph_at(map, center, HexCoord::new(x, y)).to_string())
                .collect();
            out.push_str(&row.join(" "));
            out.push('\n');
        }

        if self.legend {
            out.push_str(&self.legend_text(map, center));
        }
        out
    }

    fn legend_text(&self, map: &TileKnowledgeMap, center: HexCoord) -> String {
        let mut legend = format!(
            "\n{POSITION_GLYPH} you {center}  {EXPLORER_GLYPH} explorer  {STRUCTURE_GLYPH} structure  {UNEXPLORED_GLYPH} unexplored\n"
        );

        // Only list biomes that actually appear in the window
        let r = i64::from(self.radius);
        let visible: Vec<Biome> = Biome::ALL
            .into_iter()
            .filter(|biome| {
                map.iter().any(|t| {
                    t.biome == *biome
                        && !t.is_occupied()
                        && (t.coord.x - center.x).abs() <= r
                        && (t.coord.y - center.y).abs() <= r
                })
            })
            .collect();
        if !visible.is_empty() {
            let entries: Vec<String> = visible
                .iter()
                .map(|b| format!("{} {:?}", b.glyph(), b))
                .collect();
            legend.push_str(&entries.join("  "));
            legend.push('\n');
        }

        let compass: Vec<String> = Direction::all()
            .iter()
            .map(|d| format!("{}={}", d.index(), d.label()))
            .collect();
        legend.push_str(&format!("directions: {}\n", compass.join(" ")));
        legend
    }
}
