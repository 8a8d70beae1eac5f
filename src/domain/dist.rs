//! Path arithmetic for the front-end build output directory.

use std::path::{Path, PathBuf};

use crate::domain::{AppError, BuildSettings};

/// Resolved layout of the build output tree for one project root.
#[derive(Debug, Clone)]
pub struct DistLayout {
    root: PathBuf,
    dist_dir: String,
    app_dir: String,
    versions: Vec<String>,
    entry_point: String,
}

/// A versioned build selected for promotion to the dist root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromotedBuild {
    /// Version label, e.g. `v0`.
    pub version: String,
    /// Path to that version's `index.html`.
    pub index: PathBuf,
}

impl DistLayout {
    pub fn new(root: &Path, settings: &BuildSettings) -> Self {
        Self {
            root: root.to_path_buf(),
            dist_dir: settings.build.dist_dir.clone(),
            app_dir: settings.build.app_dir.clone(),
            versions: settings.build.versions.clone(),
            entry_point: settings.build.entry_point.clone(),
        }
    }

    /// Build output directory, e.g. `<root>/dist`.
    pub fn dist_dir(&self) -> PathBuf {
        self.root.join(&self.dist_dir)
    }

    /// `index.html` of one versioned build, e.g. `<root>/dist/simulatorvue/v0/index.html`.
    pub fn versioned_index(&self, version: &str) -> PathBuf {
        self.dist_dir().join(&self.app_dir).join(version).join("index.html")
    }

    /// Root entry point served to the desktop shell, `<root>/dist/index.html`.
    pub fn root_index(&self) -> PathBuf {
        self.dist_dir().join("index.html")
    }

    /// Entry-point HTML checked in at the project root.
    pub fn entry_point_source(&self) -> PathBuf {
        self.root.join(&self.entry_point)
    }

    /// Entry-point HTML staged inside the dist directory.
    pub fn staged_entry_point(&self) -> PathBuf {
        self.dist_dir().join(&self.entry_point)
    }

    /// Every versioned index path this layout accepts, in promotion order.
    pub fn expected_indexes(&self) -> Vec<PathBuf> {
        self.versions.iter().map(|version| self.versioned_index(version)).collect()
    }

    /// Scan for the first version whose `index.html` exists.
    pub fn find_build(&self) -> Option<PromotedBuild> {
        self.versions.iter().find_map(|version| {
            let index = self.versioned_index(version);
            index.exists().then(|| PromotedBuild { version: version.clone(), index })
        })
    }

    /// Like [`find_build`](Self::find_build), but a missing build is an error
    /// naming every path that was checked.
    pub fn require_build(&self) -> Result<PromotedBuild, AppError> {
        self.find_build().ok_or_else(|| AppError::NoBuildFound {
            expected: self
                .expected_indexes()
                .iter()
                .map(|path| path.display().to_string())
                .collect(),
        })
    }
}
