//! JSON interop for buildings and segment loops.
//!
//! Buildings are read and written in the shape automation payloads use:
//!
//! ```text
//! {
//!   "walls":  [ { "level": 0, "coordinates": [ { "x": 1, "y": 0 }, ... ] }, ... ],
//!   "levels": [ { "elevation": 10, "category": null, "has_category": false }, ... ]
//! }
//! ```
use crate::*;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
struct BuildingRecord {
    #[serde(default)]
    walls: Vec<WallRecord>,
    #[serde(default)]
    levels: Vec<LevelRecord>,
}

#[derive(Serialize, Deserialize)]
struct WallRecord {
    level: usize,
    #[serde(default)]
    coordinates: Vec<Coordinate>,
}

#[derive(Serialize, Deserialize)]
struct LevelRecord {
    elevation: f64,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    has_category: Option<bool>,
}

impl From<LevelRecord> for Level {
    fn from(r: LevelRecord) -> Self {
        let LevelRecord {
            elevation,
            category,
            has_category,
        } = r;
        // an explicit flag wins over the category field
        match (has_category, category) {
            (Some(false), _) | (None, None) => Level::new(elevation),
            (Some(true), c) => Level::with_category(elevation, c.unwrap_or_default()),
            (None, Some(c)) => Level::with_category(elevation, c),
        }
    }
}

impl From<&Level> for LevelRecord {
    fn from(l: &Level) -> Self {
        LevelRecord {
            elevation: l.elevation(),
            category: l.category().map(ToString::to_string),
            has_category: Some(l.has_category()),
        }
    }
}

/// Deserialize a building.
///
/// `has_category` is optional. When `false` any category is dropped, when `true` a `null`
/// category becomes an empty one, and when missing a category is present if it is not `null`.
pub fn from_json(json: &[u8]) -> Result<Building> {
    let record: BuildingRecord = serde_json::from_slice(json)?;

    let walls = record
        .walls
        .into_iter()
        .map(|w| Wall::new(w.level, w.coordinates))
        .collect::<Vec<_>>();
    let levels = record
        .levels
        .into_iter()
        .map(Level::from)
        .collect::<Vec<_>>();
    log::debug!(
        "read building with {} walls and {} levels",
        walls.len(),
        levels.len()
    );

    Ok(Building::new(walls, levels))
}

/// Serialize a building, with explicit `has_category` flags.
///
/// NaN and infinite values are written as `null`, which [`from_json`] rejects. Use
/// [`Building::check_finite`] first if the output must read back.
pub fn to_json(building: &Building) -> Vec<u8> {
    let record = BuildingRecord {
        walls: building
            .walls()
            .iter()
            .map(|w| WallRecord {
                level: w.level(),
                coordinates: w.coordinates().to_vec(),
            })
            .collect(),
        levels: building.levels().iter().map(LevelRecord::from).collect(),
    };

    serde_json::to_vec(&record).expect("building serializes to json")
}

/// Serialize a segment loop as `[ { "start": { "x", "y" }, "end": { "x", "y" } }, ... ]`.
pub fn segments_to_json(segments: &[Segment]) -> Vec<u8> {
    serde_json::to_vec(segments).expect("segments serialize to json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_flag_handling() {
        let json = br#"{
            "walls": [],
            "levels": [
                { "elevation": 10, "category": null, "has_category": false },
                { "elevation": 20, "category": "Ignored", "has_category": false },
                { "elevation": 30, "category": null, "has_category": true },
                { "elevation": 40, "category": "Lobby", "has_category": true },
                { "elevation": 50, "category": "Roof" },
                { "elevation": 60 }
            ]
        }"#;
        let b = from_json(json).unwrap();
        assert_eq!(
            b.levels(),
            &[
                Level::new(10.0),
                Level::new(20.0),
                Level::with_category(30.0, ""),
                Level::with_category(40.0, "Lobby"),
                Level::with_category(50.0, "Roof"),
                Level::new(60.0),
            ]
        );
    }

    #[test]
    fn missing_sections_are_empty() {
        let b = from_json(b"{}").unwrap();
        assert_eq!(b, Building::default());

        let b = from_json(br#"{ "walls": [ { "level": 1 } ] }"#).unwrap();
        assert_eq!(b.walls(), &[Wall::new(1, Vec::<Coordinate>::new())]);
    }

    #[test]
    fn malformed_json() {
        assert!(matches!(from_json(b"{ \"walls\": 3 }"), Err(Error::Json(_))));
        assert!(matches!(
            from_json(br#"{ "walls": [ { "level": -1 } ] }"#),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn writes_category_flags() {
        let b = Building::new(
            vec![Wall::new(0, [[1.0, 0.0]])],
            vec![Level::new(10.0), Level::with_category(40.0, "Lobby")],
        );
        let v: serde_json::Value = serde_json::from_slice(&to_json(&b)).unwrap();
        assert_eq!(
            v,
            serde_json::json!({
                "walls": [ { "level": 0, "coordinates": [ { "x": 1.0, "y": 0.0 } ] } ],
                "levels": [
                    { "elevation": 10.0, "category": null, "has_category": false },
                    { "elevation": 40.0, "category": "Lobby", "has_category": true }
                ]
            })
        );
        assert_eq!(from_json(&to_json(&b)).unwrap(), b);
    }

    #[test]
    fn segment_loop_json() {
        let segs = segments(&triangle());
        let v: serde_json::Value = serde_json::from_slice(&segments_to_json(&segs)).unwrap();
        assert_eq!(v.as_array().map(Vec::len), Some(3));
        assert_eq!(
            v[2],
            serde_json::json!({ "start": { "x": 0.0, "y": 0.0 }, "end": { "x": 1.0, "y": 0.0 } })
        );
    }

    #[test]
    fn non_finite_values_do_not_read_back() {
        let b = Building::new(
            vec![Wall::new(0, [[f64::NAN, 0.0], [1.0, 1.0]])],
            vec![Level::new(f64::INFINITY)],
        );
        assert!(b.check_finite().is_err());
        assert!(matches!(from_json(&to_json(&b)), Err(Error::Json(_))));
    }
}
