use crate::UnitSystem;

/// The path a converted model is saved to when none is given.
pub const DEFAULT_OUTPUT_PATH: &str = "sketchIt.rvt";

/// Which entities are handed to the host first.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Order {
    #[default]
    WallsFirst,
    LevelsFirst,
}

/// What to do when the host fails to create a level.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelFailure {
    /// Stop the conversion with [`Error::LevelCreation`](crate::Error::LevelCreation).
    #[default]
    Abort,
    /// Log, note the level index and carry on.
    Skip,
}

/// Options for [`Building::convert`](crate::Building::convert).
///
/// Every field has a default, so a partial JSON object is accepted.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    pub output_path: String,
    pub units: UnitSystem,
    pub order: Order,
    pub on_level_failure: LevelFailure,
    /// Reject walls referencing a level outside the level list before authoring anything.
    pub check_level_refs: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            units: UnitSystem::Imperial,
            order: Order::WallsFirst,
            on_level_failure: LevelFailure::Abort,
            check_level_refs: true,
        }
    }
}
