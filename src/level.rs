/// A building story.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Level {
    elevation: f64,
    category: Option<String>,
}

impl Level {
    /// A level without a category.
    pub fn new(elevation: f64) -> Self {
        Self {
            elevation,
            category: None,
        }
    }

    /// A level tagged with `category`.
    ///
    /// An empty category is still a category, [`Level::has_category`] will be `true`.
    pub fn with_category<S: Into<String>>(elevation: f64, category: S) -> Self {
        Self {
            elevation,
            category: Some(category.into()),
        }
    }

    pub fn elevation(&self) -> f64 {
        self.elevation
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn has_category(&self) -> bool {
        self.category.is_some()
    }
}

/// The name an authored level receives from its position in the level list.
pub fn level_name(index: usize) -> String {
    format!("Level {}", index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_presence() {
        let l = Level::new(10.0);
        assert_eq!(l.elevation(), 10.0);
        assert_eq!(l.category(), None);
        assert!(!l.has_category());

        let l = Level::with_category(40.0, "Lobby");
        assert_eq!(l.category(), Some("Lobby"));
        assert!(l.has_category());

        let l = Level::with_category(0.0, "");
        assert_eq!(l.category(), Some(""));
        assert!(l.has_category());
        assert_ne!(l, Level::new(0.0));
    }

    #[test]
    fn positional_names() {
        assert_eq!(level_name(0), "Level 0");
        assert_eq!(level_name(12), "Level 12");
    }
}
