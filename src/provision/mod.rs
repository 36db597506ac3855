//! Provisioning of resolved archives
//!
//! Copies every runtime classpath archive into one flat directory, the way a
//! distribution's `lib/` folder is laid out. Each archive is staged in a
//! temporary file inside the target directory and renamed into place. Any
//! failure rolls back every file written, replaced or removed by the run.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::domain::{Classpaths, ResolvedArtifact};
use crate::error::{Result, fs, provision as provision_error};
use crate::hash;
use crate::progress::ProgressDisplay;
use crate::transaction::Transaction;

/// Options for a provisioning run
#[derive(Debug, Clone, Copy, Default)]
pub struct ProvisionOptions {
    /// Remove `.jar` files in the target that are not on the runtime classpath
    pub clean: bool,
}

/// What happened to one archive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Created,
    Updated,
    UpToDate,
}

/// One archive placed in the target directory
#[derive(Debug, Clone)]
pub struct ProvisionedFile {
    pub name: String,
    pub source: PathBuf,
    pub destination: PathBuf,
    pub hash: String,
    pub status: FileStatus,
}

/// Summary of a provisioning run
#[derive(Debug, Clone, Default)]
pub struct ProvisionReport {
    pub files: Vec<ProvisionedFile>,
    pub removed: Vec<PathBuf>,
}

impl ProvisionReport {
    pub fn count(&self, status: FileStatus) -> usize {
        self.files.iter().filter(|f| f.status == status).count()
    }
}

/// Copy the runtime classpath into `target`
///
/// # Errors
///
/// `ProvisionConflict` if two archives share a file name; file system errors
/// otherwise. On error the target directory is restored.
pub fn provision(
    classpaths: &Classpaths,
    target: &Path,
    options: ProvisionOptions,
    progress: &ProgressDisplay,
) -> Result<ProvisionReport> {
    let report = match provision_into(classpaths, target, options, progress) {
        Ok(report) => report,
        Err(e) => {
            progress.abandon();
            return Err(e);
        }
    };
    progress.finish();

    tracing::info!(
        target = %target.display(),
        created = report.count(FileStatus::Created),
        updated = report.count(FileStatus::Updated),
        up_to_date = report.count(FileStatus::UpToDate),
        removed = report.removed.len(),
        "provisioned"
    );
    Ok(report)
}

/// Every step of a run; dropping the transaction on error restores the target
fn provision_into(
    classpaths: &Classpaths,
    target: &Path,
    options: ProvisionOptions,
    progress: &ProgressDisplay,
) -> Result<ProvisionReport> {
    let plan = plan_destinations(&classpaths.artifacts)?;
    let mut transaction = Transaction::new();

    create_target_dir(target, &mut transaction)?;

    let mut report = ProvisionReport::default();
    for (file_name, artifact) in &plan {
        progress.update(file_name);
        report
            .files
            .push(copy_archive(artifact, &target.join(file_name), &mut transaction)?);
        progress.inc();
    }

    if options.clean {
        let keep: HashSet<&str> = plan.iter().map(|(name, _)| name.as_str()).collect();
        report.removed = remove_stale(target, &keep, &mut transaction)?;
    }

    transaction.commit();
    Ok(report)
}

/// Map every artifact to its destination file name, rejecting collisions
fn plan_destinations(artifacts: &[ResolvedArtifact]) -> Result<Vec<(String, &ResolvedArtifact)>> {
    let mut seen: HashMap<String, &Path> = HashMap::new();
    let mut plan = Vec::with_capacity(artifacts.len());

    for artifact in artifacts {
        let file_name = artifact
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| {
                fs::io_error(format!("Archive has no file name: {}", artifact.path.display()))
            })?;

        if let Some(first) = seen.get(&file_name) {
            return Err(provision_error::conflict(
                file_name,
                first.display().to_string(),
                artifact.path.display().to_string(),
            ));
        }

        seen.insert(file_name.clone(), &artifact.path);
        plan.push((file_name, artifact));
    }

    Ok(plan)
}

/// Create `target` one directory at a time, tracking each one as it appears
fn create_target_dir(target: &Path, transaction: &mut Transaction) -> Result<()> {
    let missing: Vec<&Path> = target
        .ancestors()
        .take_while(|dir| !dir.as_os_str().is_empty() && !dir.exists())
        .collect();

    for dir in missing.into_iter().rev() {
        match std::fs::create_dir(dir) {
            Ok(()) => transaction.track_dir_created(dir),
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists && dir.is_dir() => {}
            Err(e) => {
                return Err(fs::write_failed(dir.display().to_string(), e.to_string()));
            }
        }
    }

    if target.is_dir() {
        Ok(())
    } else {
        Err(fs::write_failed(
            target.display().to_string(),
            "not a directory",
        ))
    }
}

fn copy_archive(
    artifact: &ResolvedArtifact,
    destination: &Path,
    transaction: &mut Transaction,
) -> Result<ProvisionedFile> {
    let hash = hash::hash_file(&artifact.path)?;
    let existed = destination.exists();

    let up_to_date = destination.is_file() && hash::hash_file(destination)? == hash;

    let status = if up_to_date {
        FileStatus::UpToDate
    } else {
        if existed {
            transaction.backup_file(destination)?;
        }
        stage_and_persist(&artifact.path, destination)?;
        if existed {
            FileStatus::Updated
        } else {
            transaction.track_file_created(destination);
            FileStatus::Created
        }
    };

    tracing::debug!(
        name = %artifact.name,
        destination = %destination.display(),
        ?status,
        "archive provisioned"
    );

    Ok(ProvisionedFile {
        name: artifact.name.clone(),
        source: artifact.path.clone(),
        destination: destination.to_path_buf(),
        hash,
        status,
    })
}

fn stage_and_persist(source: &Path, destination: &Path) -> Result<()> {
    let dir = destination.parent().unwrap_or_else(|| Path::new("."));
    let write_failed =
        |reason: String| fs::write_failed(destination.display().to_string(), reason);

    let mut staged = NamedTempFile::new_in(dir).map_err(|e| write_failed(e.to_string()))?;
    let mut reader = File::open(source)
        .map_err(|e| fs::read_failed(source.display().to_string(), e.to_string()))?;
    std::io::copy(&mut reader, staged.as_file_mut()).map_err(|e| write_failed(e.to_string()))?;
    staged
        .persist(destination)
        .map_err(|e| write_failed(e.error.to_string()))?;
    Ok(())
}

fn remove_stale(
    target: &Path,
    keep: &HashSet<&str>,
    transaction: &mut Transaction,
) -> Result<Vec<PathBuf>> {
    let mut removed = Vec::new();

    for entry in std::fs::read_dir(target)? {
        let path = entry?.path();
        let is_jar = path.extension().is_some_and(|ext| ext == "jar");
        let kept = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| keep.contains(n));

        if path.is_file() && is_jar && !kept {
            transaction.backup_file(&path)?;
            std::fs::remove_file(&path)
                .map_err(|e| fs::write_failed(path.display().to_string(), e.to_string()))?;
            tracing::debug!(path = %path.display(), "removed stale archive");
            removed.push(path);
        }
    }

    removed.sort();
    Ok(removed)
}
