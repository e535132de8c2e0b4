//! Archive command implementation
//!
//! Assembles the filtered source archive for distribution:
//! 1. Verify every required source file exists (abort before any output)
//! 2. Compile the manifest's include/exclude rules into one rule set
//! 3. Evaluate the rule set over a single traversal, logging decisions
//! 4. Write the zip and report entry count and final size

use std::path::PathBuf;

use walkdir::WalkDir;

use crate::archive::{RuleDecision, RuleSet, write_archive};
use crate::cli::ArchiveArgs;
use crate::commands::helpers;
use crate::common::format::human_size;
use crate::config;
use crate::error::{Result, VoicepackError, archive as archive_error};
use crate::progress::ArchiveProgress;
use crate::ui::display;

/// Run archive command
pub fn run(project: Option<PathBuf>, verbose: bool, args: ArchiveArgs) -> Result<()> {
    let project_root = helpers::resolve_project_root(project)?;
    let manifest = config::load_manifest(&project_root)?;

    let missing: Vec<&String> = manifest
        .archive
        .required_files
        .iter()
        .filter(|rel| !project_root.join(rel.as_str()).is_file())
        .collect();
    if !missing.is_empty() {
        return Err(archive_error::required_missing(
            missing.iter().map(|s| s.as_str()),
        ));
    }

    let rules = RuleSet::from_manifest(&manifest.archive)?;
    display::step("Evaluating archive rules");
    display::detail(&rules.describe());

    let selection = select_files(&project_root, &rules, verbose)?;
    display::ok(&format!(
        "{} files selected, {} excluded by rule, {} not selected",
        selection.included.len(),
        selection.excluded,
        selection.not_selected
    ));

    let output = match args.output {
        Some(path) if path.is_absolute() => path,
        Some(path) => project_root.join(path),
        None => {
            let name = helpers::project_display_name(&project_root);
            project_root.join(format!("{name}.zip"))
        }
    };

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            archive_error::write_failed(output.display().to_string(), e.to_string())
        })?;
    }

    display::step(&format!("Writing {}", output.display()));
    let progress = ArchiveProgress::new(selection.included.len() as u64);
    let result = write_archive(&project_root, &selection.included, &output, |rel| {
        progress.update_entry(&rel.display().to_string());
    });
    match &result {
        Ok(_) => progress.finish(),
        Err(_) => progress.abandon(),
    }
    let summary = result?;

    display::summary("Release archive:", &output.display().to_string());
    display::summary(
        "Contents:",
        &format!("{} entries, {}", summary.entries, human_size(summary.bytes)),
    );

    Ok(())
}

struct Selection {
    included: Vec<PathBuf>,
    excluded: usize,
    not_selected: usize,
}

/// Walk the project once, applying the rule set to every entry
///
/// Excluded and not-selected directories are pruned from traversal, so a
/// denylisted tree is never even read.
fn select_files(
    project_root: &std::path::Path,
    rules: &RuleSet,
    verbose: bool,
) -> Result<Selection> {
    let mut included = Vec::new();
    let mut excluded = 0;
    let mut not_selected = 0;

    let mut walker = WalkDir::new(project_root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter();

    while let Some(entry) = walker.next() {
        let entry = entry.map_err(|e| VoicepackError::IoError {
            message: format!("Failed to walk project: {e}"),
        })?;
        let rel = entry
            .path()
            .strip_prefix(project_root)
            .map_err(|e| VoicepackError::IoError {
                message: format!("Failed to relativize path: {e}"),
            })?
            .to_path_buf();
        let is_dir = entry.file_type().is_dir();

        match rules.evaluate(&rel, is_dir) {
            RuleDecision::Include => {
                if !is_dir {
                    included.push(rel);
                }
            }
            RuleDecision::ExcludedDir(name) => {
                excluded += 1;
                if verbose {
                    display::detail(&format!("excluded {} (denylisted: {name})", rel.display()));
                }
                if is_dir {
                    walker.skip_current_dir();
                }
            }
            RuleDecision::ExcludedPattern(pattern) => {
                excluded += 1;
                if verbose {
                    display::detail(&format!("excluded {} (pattern: {pattern})", rel.display()));
                }
            }
            RuleDecision::NotSelected => {
                not_selected += 1;
                if verbose {
                    display::detail(&format!("not selected {}", rel.display()));
                }
                if is_dir {
                    walker.skip_current_dir();
                }
            }
        }
    }

    Ok(Selection {
        included,
        excluded,
        not_selected,
    })
}
