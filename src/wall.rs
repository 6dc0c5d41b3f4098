use crate::*;

/// A wall footprint on a level.
///
/// The coordinates describe a polygon which is closed back to the first point when
/// [segmented](Wall::segments).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Wall {
    level: usize,
    coordinates: Vec<Coordinate>,
}

impl Wall {
    /// Create a wall on the level at position `level`.
    ///
    /// The level reference is not checked here, see [`Building::validate`].
    pub fn new<I, P>(level: usize, coordinates: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: ToCoordinate,
    {
        let coordinates = coordinates
            .into_iter()
            .map(ToCoordinate::to_coord)
            .collect();
        Self { level, coordinates }
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The boundary loop of this wall. See [`segments`].
    pub fn segments(&self) -> Vec<Segment> {
        segments(&self.coordinates)
    }
}
