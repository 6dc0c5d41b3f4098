use crate::*;

/// Name of the transaction each wall is authored in.
pub const WALL_TRANSACTION: &str = "Create walls";

/// Walls and the levels they sit on.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Building {
    walls: Vec<Wall>,
    levels: Vec<Level>,
}

/// Outcome of a successful [`Building::convert`].
#[derive(Debug)]
pub struct Conversion<D> {
    /// The authored and saved document.
    pub document: D,
    pub walls_created: usize,
    pub levels_created: usize,
    /// Level indices the host failed to create, with [`LevelFailure::Skip`].
    pub skipped_levels: Vec<usize>,
    pub path: String,
}

impl Building {
    /// Neither wall level references nor finiteness are checked, use [`Building::validate`].
    pub fn new(walls: Vec<Wall>, levels: Vec<Level>) -> Self {
        Self { walls, levels }
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// Indices of walls referencing a level outside the level list.
    pub fn dangling_walls(&self) -> impl Iterator<Item = usize> + '_ {
        self.walls
            .iter()
            .enumerate()
            .filter(|(_, w)| w.level() >= self.levels.len())
            .map(|(i, _)| i)
    }

    /// Check every wall coordinate and level elevation is a finite number.
    ///
    /// Fails with [`Error::NonFiniteCoordinate`] or [`Error::NonFiniteElevation`] for the
    /// first value that is NaN or infinite, walls before levels.
    pub fn check_finite(&self) -> Result<()> {
        for (wall, w) in self.walls.iter().enumerate() {
            if let Some(index) = w.coordinates().iter().position(|c| !c.is_finite()) {
                return Err(Error::NonFiniteCoordinate { wall, index });
            }
        }
        match self.levels.iter().position(|l| !l.elevation().is_finite()) {
            Some(level) => Err(Error::NonFiniteElevation { level }),
            None => Ok(()),
        }
    }

    /// Check every wall references an existing level.
    ///
    /// Fails with [`Error::DanglingLevel`] for the first wall that does not.
    pub fn check_level_refs(&self) -> Result<()> {
        match self.dangling_walls().next() {
            Some(wall) => Err(Error::DanglingLevel {
                wall,
                level: self.walls[wall].level(),
                levels: self.levels.len(),
            }),
            None => Ok(()),
        }
    }

    /// [`Building::check_finite`] then [`Building::check_level_refs`].
    pub fn validate(&self) -> Result<()> {
        self.check_finite()?;
        self.check_level_refs()
    }

    pub fn describe(&self) -> Report {
        Report::new(self)
    }

    /// Write the [report](Building::describe) to the log, a line at a time.
    pub fn log_details(&self) {
        for line in self.describe().lines() {
            log::info!("{}", line);
        }
    }

    /// Author this building into a new document of `host`, and save it.
    ///
    /// `host` is the caller's session with the authoring application, `None` if the automation
    /// payload did not carry one.
    ///
    /// Each wall is [segmented](Wall::segments) and its segments created inside a single
    /// transaction. Each level is created at its elevation, named by its position
    /// (`Level 0`, `Level 1`, ...) and tagged with its category when it has one.
    ///
    /// # Errors
    /// - [`Error::InvalidDependency`] if there is no host, or it gives no document.
    /// - [`Error::NonFiniteCoordinate`] or [`Error::NonFiniteElevation`] for NaN or infinite
    ///   values, before anything is authored.
    /// - [`Error::DanglingLevel`] if level references are checked and one is out of range.
    /// - [`Error::LevelCreation`] if a level fails and `options` say to abort.
    /// - any error a host call returns.
    pub fn convert<H: Host>(
        &self,
        host: Option<&mut H>,
        options: &ConvertOptions,
    ) -> Result<Conversion<H::Document>> {
        let host = host.ok_or(Error::InvalidDependency("application"))?;
        let mut doc = host
            .new_document(options.units)
            .ok_or(Error::InvalidDependency("document"))?;

        self.check_finite()?;
        if options.check_level_refs {
            self.check_level_refs()?;
        }

        let (walls_created, (levels_created, skipped_levels)) = match options.order {
            Order::WallsFirst => {
                let walls = self.author_walls(&mut doc)?;
                (walls, self.author_levels(&mut doc, options.on_level_failure)?)
            }
            Order::LevelsFirst => {
                let levels = self.author_levels(&mut doc, options.on_level_failure)?;
                (self.author_walls(&mut doc)?, levels)
            }
        };

        doc.save_as(&options.output_path)?;
        log::info!(
            "saved {} walls and {} levels to '{}'",
            walls_created,
            levels_created,
            options.output_path
        );

        Ok(Conversion {
            document: doc,
            walls_created,
            levels_created,
            skipped_levels,
            path: options.output_path.clone(),
        })
    }

    /// Returns the number of wall segments created.
    fn author_walls<D: Document>(&self, doc: &mut D) -> Result<usize> {
        let mut created = 0;
        for (index, wall) in self.walls.iter().enumerate() {
            log::debug!("wall index: {}", index);
            let segments = wall.segments();

            doc.begin_transaction(WALL_TRANSACTION)?;
            for segment in &segments {
                doc.create_wall(segment, wall.level())?;
            }
            doc.commit()?;

            created += segments.len();
        }
        Ok(created)
    }

    /// Returns the number of levels created, and the indices of any skipped.
    fn author_levels<D: Document>(
        &self,
        doc: &mut D,
        on_failure: LevelFailure,
    ) -> Result<(usize, Vec<usize>)> {
        let mut created = 0;
        let mut skipped = Vec::new();
        for (index, level) in self.levels.iter().enumerate() {
            let elevation = level.elevation();
            log::debug!("level {} elevation: {}", index, elevation);

            let Some(handle) = doc.create_level(elevation) else {
                match on_failure {
                    LevelFailure::Abort => return Err(Error::LevelCreation { index, elevation }),
                    LevelFailure::Skip => {
                        log::warn!("creating level {} failed, skipping", index);
                        skipped.push(index);
                        continue;
                    }
                }
            };

            doc.set_level_name(&handle, &level_name(index))?;
            if let Some(category) = level.category() {
                log::debug!("level {} category: {}", index, category);
                doc.set_level_category(&handle, category)?;
            }
            created += 1;
        }
        Ok((created, skipped))
    }
}
