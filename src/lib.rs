//! Building sketches to BIM authoring calls.
//!
//! A [`Building`] is a list of [`Wall`] polygons, each referencing a [`Level`] by position.
//! Walls are turned into closed loops of directed [`Segment`]s, and [`Building::convert`] hands
//! the segments and levels to an authoring [`Host`].
#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

pub mod author;
mod building;
mod config;
mod error;
#[cfg(feature = "io")]
pub mod io;
mod level;
mod point;
mod report;
mod segment;
mod wall;

pub use author::{Document, Host, UnitSystem};
pub use building::*;
pub use config::*;
pub use error::*;
pub use level::*;
pub use point::*;
pub use report::*;
pub use segment::*;
pub use wall::*;

#[cfg(test)]
fn triangle() -> Vec<Coordinate> {
    vec![
        Coordinate::new(1.0, 0.0),
        Coordinate::new(0.0, 1.0),
        Coordinate::new(0.0, 0.0),
    ]
}

#[cfg(test)]
#[derive(Clone, Debug)]
struct FiniteCoords {
    pub coords: Vec<Coordinate>,
}

#[cfg(test)]
impl quickcheck::Arbitrary for FiniteCoords {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let coords = <Vec<(f64, f64)> as quickcheck::Arbitrary>::arbitrary(g)
            .into_iter()
            .map(ToCoordinate::to_coord)
            .filter(Coordinate::is_finite)
            .collect();
        Self { coords }
    }
}
