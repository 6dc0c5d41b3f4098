//! The authoring host seam.
//!
//! Conversion only ever talks to a host through [`Host`] and [`Document`], so the building model
//! and segment loops carry no dependency on any particular BIM engine.
//! [`memory`] provides a host that records every call, which is what the tests drive.
use crate::*;

pub mod memory;

/// Unit system a new document is created with.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
    #[default]
    Imperial,
    Metric,
}

/// An authoring application able to open new documents.
pub trait Host {
    type Document: Document;

    /// Create a new, empty project document.
    ///
    /// `None` signals the host could not provide a document.
    fn new_document(&mut self, units: UnitSystem) -> Option<Self::Document>;
}

/// A model document in an authoring host.
pub trait Document {
    /// Handle to a created level.
    type Level;
    /// Handle to a created wall.
    type Wall;

    /// Create a level at `elevation`. `None` signals the host failed to create it.
    fn create_level(&mut self, elevation: f64) -> Option<Self::Level>;

    fn set_level_name(&mut self, level: &Self::Level, name: &str) -> Result<()>;

    fn set_level_category(&mut self, level: &Self::Level, category: &str) -> Result<()>;

    /// Open a transaction. Walls are only created inside a transaction.
    fn begin_transaction(&mut self, name: &str) -> Result<()>;

    /// Commit the open transaction.
    fn commit(&mut self) -> Result<()>;

    /// Create a straight wall along `segment` on the level at position `level`.
    fn create_wall(&mut self, segment: &Segment, level: usize) -> Result<Self::Wall>;

    fn save_as(&mut self, path: &str) -> Result<()>;
}
