//! Include/exclude rule evaluation
//!
//! Rules, in precedence order:
//! 1. any directory component on the exclude-dir denylist excludes the path
//! 2. any manifest glob pattern match excludes the path
//! 3. top-level files are included by extension
//! 4. deeper files are included when under an include directory
//!
//! Everything else is simply not selected.

use std::path::Path;

use wax::{CandidatePath, Glob, Pattern};

use crate::config::ArchiveSection;
use crate::error::{Result, archive};

/// Outcome of evaluating one path against the rule set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleDecision {
    /// Path goes into the archive
    Include,
    /// Path is under a denylisted directory name
    ExcludedDir(String),
    /// Path matches a manifest exclude pattern
    ExcludedPattern(String),
    /// Path matches no include rule
    NotSelected,
}

/// Compiled rule set, built from the manifest once per run
pub struct RuleSet {
    include_dirs: Vec<String>,
    include_extensions: Vec<String>,
    exclude_dirs: Vec<String>,
    exclude_globs: Vec<(String, Glob<'static>)>,
}

impl RuleSet {
    pub fn from_manifest(section: &ArchiveSection) -> Result<Self> {
        let mut exclude_globs = Vec::with_capacity(section.exclude_patterns.len());
        for pattern in &section.exclude_patterns {
            let glob = Glob::new(pattern)
                .map_err(|e| archive::invalid_pattern(pattern, e.to_string()))?
                .into_owned();
            exclude_globs.push((pattern.clone(), glob));
        }

        Ok(Self {
            include_dirs: section.include_dirs.clone(),
            include_extensions: section.include_extensions.clone(),
            exclude_dirs: section.exclude_dirs.clone(),
            exclude_globs,
        })
    }

    /// One-line description of the rule set for the audit log
    pub fn describe(&self) -> String {
        format!(
            "include dirs [{}], top-level extensions [{}], exclude dirs [{}], exclude patterns [{}]",
            self.include_dirs.join(", "),
            self.include_extensions.join(", "),
            self.exclude_dirs.join(", "),
            self.exclude_globs
                .iter()
                .map(|(p, _)| p.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        )
    }

    /// Evaluate a project-relative path
    ///
    /// Directory decisions drive traversal pruning: an excluded or
    /// not-selected directory is never descended into.
    pub fn evaluate(&self, rel: &Path, is_dir: bool) -> RuleDecision {
        let components: Vec<String> = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();

        // Denylisted directory names apply wherever they appear
        let dir_components = if is_dir {
            &components[..]
        } else {
            &components[..components.len().saturating_sub(1)]
        };
        for component in dir_components {
            if self.exclude_dirs.iter().any(|d| d == component) {
                return RuleDecision::ExcludedDir(component.clone());
            }
        }
        if is_dir {
            // A directory itself named on the denylist is covered above;
            // descent decisions below only need the include rules.
            return self.evaluate_dir(&components);
        }

        let path_str = components.join("/");
        let candidate = CandidatePath::from(path_str.as_str());
        for (pattern, glob) in &self.exclude_globs {
            if glob.matched(&candidate).is_some() {
                return RuleDecision::ExcludedPattern(pattern.clone());
            }
        }

        if components.len() == 1 {
            let included = rel
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|ext| self.include_extensions.iter().any(|i| i == ext));
            if included {
                return RuleDecision::Include;
            }
            return RuleDecision::NotSelected;
        }

        if self.include_dirs.iter().any(|d| d == &components[0]) {
            return RuleDecision::Include;
        }

        RuleDecision::NotSelected
    }

    fn evaluate_dir(&self, components: &[String]) -> RuleDecision {
        // Only top-level directories can be ruled out of traversal; nested
        // directories under an include dir stay traversable.
        if components.len() == 1 && !self.include_dirs.iter().any(|d| d == &components[0]) {
            return RuleDecision::NotSelected;
        }
        RuleDecision::Include
    }
}
