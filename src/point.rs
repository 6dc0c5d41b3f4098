use std::fmt;

/// 2D plan coordinate (X,Y).
#[derive(Copy, Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin `(0, 0)`.
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    pub fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }

    pub fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }

    /// Calculate the magnitude of the vector.
    pub fn mag(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Renders as `x, y`.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.x, self.y)
    }
}

pub trait ToCoordinate {
    fn to_coord(self) -> Coordinate;
}

impl ToCoordinate for Coordinate {
    fn to_coord(self) -> Coordinate {
        self
    }
}
impl ToCoordinate for &Coordinate {
    fn to_coord(self) -> Coordinate {
        *self
    }
}
impl ToCoordinate for [f64; 2] {
    fn to_coord(self) -> Coordinate {
        let [x, y] = self;
        Coordinate { x, y }
    }
}
impl ToCoordinate for &[f64; 2] {
    fn to_coord(self) -> Coordinate {
        (*self).to_coord()
    }
}
impl ToCoordinate for (f64, f64) {
    fn to_coord(self) -> Coordinate {
        Coordinate::new(self.0, self.1)
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from(p: [f64; 2]) -> Self {
        p.to_coord()
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(c: Coordinate) -> Self {
        [c.x, c.y]
    }
}
