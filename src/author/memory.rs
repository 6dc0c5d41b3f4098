//! An in-memory authoring host.
use super::*;
use rustc_hash::FxHashSet as HashSet;

/// A call made against a [`MemoryDocument`], in the order it was made.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Call {
    CreateLevel { elevation: f64 },
    SetLevelName { level: LevelId, name: String },
    SetLevelCategory { level: LevelId, category: String },
    BeginTransaction(String),
    Commit,
    CreateWall { segment: Segment, level: usize },
    SaveAs(String),
}

/// The fallible [`Document`] calls, for [`MemoryHost::fail_call`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CallKind {
    SetLevelName,
    SetLevelCategory,
    BeginTransaction,
    Commit,
    CreateWall,
    SaveAs,
}

/// Position of a level in [`MemoryDocument::levels`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct LevelId(pub usize);

/// Position of a wall in [`MemoryDocument::walls`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct WallId(pub usize);

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AuthoredLevel {
    pub elevation: f64,
    pub name: Option<String>,
    pub category: Option<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AuthoredWall {
    pub segment: Segment,
    pub level: usize,
}

/// Hands out [`MemoryDocument`]s.
#[derive(Clone, Debug, Default)]
pub struct MemoryHost {
    refuse_documents: bool,
    failing_levels: HashSet<usize>,
    failing_calls: HashSet<CallKind>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// A host which never provides a document.
    pub fn refusing() -> Self {
        Self {
            refuse_documents: true,
            ..Self::default()
        }
    }

    /// Make the `nth` (zero based) level creation of each document fail.
    pub fn fail_level(mut self, nth: usize) -> Self {
        self.failing_levels.insert(nth);
        self
    }

    /// Make every `kind` call of each document return [`Error::Host`], without effect.
    pub fn fail_call(mut self, kind: CallKind) -> Self {
        self.failing_calls.insert(kind);
        self
    }
}

impl Host for MemoryHost {
    type Document = MemoryDocument;

    fn new_document(&mut self, units: UnitSystem) -> Option<MemoryDocument> {
        (!self.refuse_documents).then(|| MemoryDocument {
            units,
            failing_levels: self.failing_levels.clone(),
            failing_calls: self.failing_calls.clone(),
            ..MemoryDocument::default()
        })
    }
}

#[derive(Clone, Debug, Default)]
pub struct MemoryDocument {
    units: UnitSystem,
    calls: Vec<Call>,
    levels: Vec<AuthoredLevel>,
    walls: Vec<AuthoredWall>,
    transaction: Option<String>,
    transactions: usize,
    saved_as: Option<String>,
    level_attempts: usize,
    failing_levels: HashSet<usize>,
    failing_calls: HashSet<CallKind>,
}

impl MemoryDocument {
    pub fn units(&self) -> UnitSystem {
        self.units
    }

    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    pub fn levels(&self) -> &[AuthoredLevel] {
        &self.levels
    }

    pub fn walls(&self) -> &[AuthoredWall] {
        &self.walls
    }

    /// Number of committed transactions.
    pub fn transactions(&self) -> usize {
        self.transactions
    }

    pub fn saved_as(&self) -> Option<&str> {
        self.saved_as.as_deref()
    }

    fn check(&self, kind: CallKind) -> Result<()> {
        if self.failing_calls.contains(&kind) {
            Err(Error::Host(format!("{:?} failed", kind)))
        } else {
            Ok(())
        }
    }

    fn level_mut(&mut self, level: LevelId) -> Result<&mut AuthoredLevel> {
        self.levels
            .get_mut(level.0)
            .ok_or_else(|| Error::Host(format!("no level with id {}", level.0)))
    }
}

impl Document for MemoryDocument {
    type Level = LevelId;
    type Wall = WallId;

    fn create_level(&mut self, elevation: f64) -> Option<LevelId> {
        self.calls.push(Call::CreateLevel { elevation });
        let attempt = self.level_attempts;
        self.level_attempts += 1;
        if self.failing_levels.contains(&attempt) {
            return None;
        }

        self.levels.push(AuthoredLevel {
            elevation,
            name: None,
            category: None,
        });
        Some(LevelId(self.levels.len() - 1))
    }

    fn set_level_name(&mut self, level: &LevelId, name: &str) -> Result<()> {
        self.check(CallKind::SetLevelName)?;
        self.level_mut(*level)?.name = Some(name.to_string());
        self.calls.push(Call::SetLevelName {
            level: *level,
            name: name.to_string(),
        });
        Ok(())
    }

    fn set_level_category(&mut self, level: &LevelId, category: &str) -> Result<()> {
        self.check(CallKind::SetLevelCategory)?;
        self.level_mut(*level)?.category = Some(category.to_string());
        self.calls.push(Call::SetLevelCategory {
            level: *level,
            category: category.to_string(),
        });
        Ok(())
    }

    fn begin_transaction(&mut self, name: &str) -> Result<()> {
        self.check(CallKind::BeginTransaction)?;
        if let Some(open) = &self.transaction {
            return Err(Error::Host(format!("transaction '{}' is still open", open)));
        }
        self.transaction = Some(name.to_string());
        self.calls.push(Call::BeginTransaction(name.to_string()));
        Ok(())
    }

    fn commit(&mut self) -> Result<()> {
        self.check(CallKind::Commit)?;
        self.transaction
            .take()
            .ok_or_else(|| Error::Host("no transaction to commit".to_string()))?;
        self.transactions += 1;
        self.calls.push(Call::Commit);
        Ok(())
    }

    fn create_wall(&mut self, segment: &Segment, level: usize) -> Result<WallId> {
        self.check(CallKind::CreateWall)?;
        if self.transaction.is_none() {
            return Err(Error::Host(
                "walls can only be created inside a transaction".to_string(),
            ));
        }
        self.walls.push(AuthoredWall {
            segment: *segment,
            level,
        });
        self.calls.push(Call::CreateWall {
            segment: *segment,
            level,
        });
        Ok(WallId(self.walls.len() - 1))
    }

    fn save_as(&mut self, path: &str) -> Result<()> {
        self.check(CallKind::SaveAs)?;
        if let Some(open) = &self.transaction {
            return Err(Error::Host(format!(
                "cannot save with transaction '{}' open",
                open
            )));
        }
        self.saved_as = Some(path.to_string());
        self.calls.push(Call::SaveAs(path.to_string()));
        Ok(())
    }
}
