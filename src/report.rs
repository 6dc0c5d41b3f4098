use crate::*;
use std::fmt;

/// A read-only summary of a [`Building`], see [`Building::describe`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Report {
    pub walls: Vec<WallEntry>,
    pub levels: Vec<LevelEntry>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct WallEntry {
    pub index: usize,
    pub level: usize,
    pub coordinates: Vec<Coordinate>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LevelEntry {
    pub index: usize,
    pub elevation: f64,
    pub category: Option<String>,
    pub has_category: bool,
}

impl Report {
    pub fn new(building: &Building) -> Self {
        let walls = building
            .walls()
            .iter()
            .enumerate()
            .map(|(index, w)| WallEntry {
                index,
                level: w.level(),
                coordinates: w.coordinates().to_vec(),
            })
            .collect();
        let levels = building
            .levels()
            .iter()
            .enumerate()
            .map(|(index, l)| LevelEntry {
                index,
                elevation: l.elevation(),
                category: l.category().map(ToString::to_string),
                has_category: l.has_category(),
            })
            .collect();

        Self { walls, levels }
    }

    /// The rendered report, one entry per line.
    ///
    /// Flags render as `True`/`False`.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec!["Walls:".to_string()];
        for w in &self.walls {
            lines.push(format!("   Wall index: {}", w.index));
            lines.push(format!("      Level: {}", w.level));
            lines.push(format!("      Coordinates: {}", w.coordinates.len()));
            lines.extend(w.coordinates.iter().map(|c| format!("         {}", c)));
        }
        lines.push("Levels:".to_string());
        for l in &self.levels {
            lines.push(format!("   Level index: {}", l.index));
            lines.push(format!("      Elevation: {}", l.elevation));
            lines.push(format!(
                "      Category: {}",
                l.category.as_deref().unwrap_or_default()
            ));
            lines.push(format!(
                "      has_category: {}",
                if l.has_category { "True" } else { "False" }
            ));
        }
        lines
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
