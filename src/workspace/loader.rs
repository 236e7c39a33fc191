//! Concurrent workspace loading.
//!
//! Components, standards, and the certification load in three parallel
//! phases, with one thread per component directory and per standard file.
//! Everything joins before [`WorkspaceLoader::load`] returns.
//!
//! Component and standard failures are collected into the workspace's
//! [`ErrorList`] without stopping sibling loads. A certification failure is
//! returned as the error of the whole load. Callers that must reject a bad
//! certification before anything else is read parse it with
//! [`read_certification`] and hand it over with
//! [`WorkspaceLoader::with_certification`].

use std::io;
use std::path::{Path, PathBuf};
use std::thread::{self, ScopedJoinHandle};
use tracing::{debug, warn};

use super::fs::{DirEntryInfo, FileSystem, LocalFileSystem};
use super::Workspace;
use crate::config::Layout;
use crate::error::{ErrorList, MasonryError, Result};
use crate::models::{Certification, ComponentSchema, Standard};
use crate::schema::parse_component;

/// Builds a [`Workspace`] from a directory tree.
pub struct WorkspaceLoader<'a> {
    root: PathBuf,
    certification: Option<CertificationSource>,
    layout: Layout,
    fs: &'a dyn FileSystem,
}

/// Where the certification comes from.
enum CertificationSource {
    /// Read and parsed as the third load phase.
    File(PathBuf),
    /// Already parsed by the caller.
    Parsed(Certification),
}

/// Read and parse one certification file.
pub fn read_certification(file: &Path) -> Result<Certification> {
    read_certification_with(&LocalFileSystem, file)
}

fn read_certification_with(fs: &dyn FileSystem, file: &Path) -> Result<Certification> {
    let data = fs
        .read_file(file)
        .map_err(|source| MasonryError::ReadFileFailed {
            path: file.to_path_buf(),
            source,
        })?;
    let certification = Certification::from_yaml(&data, file)?;
    debug!("Loaded certification {}", certification.key());
    Ok(certification)
}

impl WorkspaceLoader<'static> {
    /// A loader over the local file system with the default layout.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            certification: None,
            layout: Layout::default(),
            fs: &LocalFileSystem,
        }
    }
}

impl<'a> WorkspaceLoader<'a> {
    /// Load this certification file alongside components and standards.
    pub fn certification(mut self, path: impl Into<PathBuf>) -> Self {
        self.certification = Some(CertificationSource::File(path.into()));
        self
    }

    /// Use a certification that was already parsed. No certification phase
    /// runs.
    pub fn with_certification(mut self, certification: Certification) -> Self {
        self.certification = Some(CertificationSource::Parsed(certification));
        self
    }

    /// Override folder and file names.
    pub fn layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Read through a different file system.
    pub fn file_system<'b>(self, fs: &'b dyn FileSystem) -> WorkspaceLoader<'b> {
        WorkspaceLoader {
            root: self.root,
            certification: self.certification,
            layout: self.layout,
            fs,
        }
    }

    /// Run all load phases and wait for them.
    pub fn load(mut self) -> Result<Workspace> {
        let mut workspace = Workspace::empty(self.root.clone());
        debug!("Loading workspace from {}", self.root.display());

        let (file, parsed) = match self.certification.take() {
            Some(CertificationSource::File(path)) => (Some(path), None),
            Some(CertificationSource::Parsed(certification)) => (None, Some(certification)),
            None => (None, None),
        };

        let this = &self;
        let ws = &workspace;
        let file = file.as_deref();
        let (component_errors, standard_errors, certification) = thread::scope(|scope| {
            let components = scope.spawn(move || this.load_components(ws));
            let standards = scope.spawn(move || this.load_standards(ws));
            let certification =
                file.map(|path| scope.spawn(move || read_certification_with(this.fs, path)));

            (
                join_phase(components, "component").unwrap_or_else(ErrorList::from),
                join_phase(standards, "standard").unwrap_or_else(ErrorList::from),
                certification.map(|handle| join_phase(handle, "certification").and_then(|r| r)),
            )
        });

        workspace.certification = certification.transpose()?.or(parsed);

        let mut errors = component_errors;
        errors.extend(standard_errors);
        debug!(
            "Workspace loaded: {} components, {} standards, {} claims, {} errors",
            workspace.components.len(),
            workspace.standards.len(),
            workspace.justifications.total(),
            errors.len()
        );
        workspace.load_errors = errors;
        Ok(workspace)
    }

    fn load_components(&self, workspace: &Workspace) -> ErrorList {
        let dir = self.layout.components_dir(&self.root);
        let entries = match self.list(&dir) {
            Ok(entries) => entries,
            Err(e) => return e.into(),
        };

        let mut errors = ErrorList::new();
        thread::scope(|scope| {
            let handles: Vec<_> = entries
                .iter()
                .filter(|entry| entry.is_dir)
                .map(|entry| scope.spawn(move || self.load_component(entry, workspace)))
                .collect();
            for handle in handles {
                if let Err(e) = join_phase(handle, "component").and_then(|r| r) {
                    warn!("{}", e);
                    errors.push(e);
                }
            }
        });
        errors
    }

    fn load_component(&self, entry: &DirEntryInfo, workspace: &Workspace) -> Result<()> {
        let file = self.layout.component_file(&entry.path);
        let data = self.fs.read_file(&file).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => MasonryError::ComponentFileMissing { path: file.clone() },
            _ => MasonryError::ReadFileFailed {
                path: file.clone(),
                source,
            },
        })?;

        let mut component = parse_component(&data, &file)?;
        if component.key().is_empty() {
            component.set_key(entry.name.clone());
        }
        let component = workspace
            .components
            .compare_and_add(component, &workspace.justifications)?;
        debug!(
            "Loaded component {} (schema {})",
            component.key(),
            component.version()
        );
        Ok(())
    }

    fn load_standards(&self, workspace: &Workspace) -> ErrorList {
        let dir = self.layout.standards_dir(&self.root);
        let entries = match self.list(&dir) {
            Ok(entries) => entries,
            Err(e) => return e.into(),
        };

        let mut errors = ErrorList::new();
        thread::scope(|scope| {
            let handles: Vec<_> = entries
                .iter()
                .filter(|entry| !entry.is_dir)
                .map(|entry| scope.spawn(move || self.load_standard(&entry.path, workspace)))
                .collect();
            for handle in handles {
                if let Err(e) = join_phase(handle, "standard").and_then(|r| r) {
                    warn!("{}", e);
                    errors.push(e);
                }
            }
        });
        errors
    }

    fn load_standard(&self, file: &Path, workspace: &Workspace) -> Result<()> {
        let data = self.read(file)?;
        let standard = Standard::from_yaml(&data, file)?;
        debug!(
            "Loaded standard {} ({} controls)",
            standard.name,
            standard.control_count()
        );
        workspace.standards.add(standard);
        Ok(())
    }

    fn list(&self, dir: &Path) -> Result<Vec<DirEntryInfo>> {
        self.fs
            .read_dir(dir)
            .map_err(|source| MasonryError::ReadDirectoryFailed {
                path: dir.to_path_buf(),
                source,
            })
            .inspect_err(|e| warn!("{}", e))
    }

    fn read(&self, file: &Path) -> Result<Vec<u8>> {
        self.fs
            .read_file(file)
            .map_err(|source| MasonryError::ReadFileFailed {
                path: file.to_path_buf(),
                source,
            })
    }
}

fn join_phase<T>(handle: ScopedJoinHandle<'_, T>, what: &str) -> Result<T> {
    handle
        .join()
        .map_err(|_| MasonryError::Other(anyhow::anyhow!("{} loader thread panicked", what)))
}
