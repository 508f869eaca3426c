//! Artifact sinks.
//!
//! A `Filer` hands out one writable sink per qualified type name. The pass
//! only asks for a sink once an artifact is fully rendered, so a failed type
//! never produces a partial file.

use crate::{Artifact, artifact::source_path};
use std::{
    collections::BTreeMap,
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

///
/// Filer
///

pub trait Filer {
    /// Open a sink for the source of `qualified_name`, replacing any previous
    /// contents.
    ///
    /// Callers flush the sink to commit it and observe write errors; a sink
    /// dropped unflushed is committed on a best-effort basis.
    fn create_source(&mut self, qualified_name: &str) -> io::Result<Box<dyn Write + '_>>;
}

/// Write a finished artifact through `filer`.
pub fn write_artifact<F: Filer + ?Sized>(filer: &mut F, artifact: &Artifact) -> io::Result<()> {
    let mut sink = filer.create_source(artifact.qualified_name())?;
    sink.write_all(artifact.contents().as_bytes())?;
    sink.flush()
}

///
/// MemoryFiler
/// Keeps artifacts in memory, keyed by qualified name.
///

#[derive(Clone, Debug, Default)]
pub struct MemoryFiler {
    files: BTreeMap<String, Vec<u8>>,
}

impl MemoryFiler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, qualified_name: &str) -> Option<&[u8]> {
        self.files.get(qualified_name).map(Vec::as_slice)
    }

    /// Contents as text; `None` if absent or not UTF-8.
    #[must_use]
    pub fn source(&self, qualified_name: &str) -> Option<&str> {
        self.get(qualified_name)
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl Filer for MemoryFiler {
    fn create_source(&mut self, qualified_name: &str) -> io::Result<Box<dyn Write + '_>> {
        let buf = self.files.entry(qualified_name.to_string()).or_default();
        buf.clear();

        Ok(Box::new(buf))
    }
}

///
/// DirFiler
///
/// Writes artifacts under a root directory following their package path.
/// Files whose bytes would not change are left untouched so repeated passes
/// keep their modification times.
///

#[derive(Clone, Debug)]
pub struct DirFiler {
    root: PathBuf,
}

impl DirFiler {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn path_for(&self, qualified_name: &str) -> PathBuf {
        self.root.join(source_path(qualified_name))
    }
}

impl Filer for DirFiler {
    fn create_source(&mut self, qualified_name: &str) -> io::Result<Box<dyn Write + '_>> {
        let path = self.path_for(qualified_name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(Box::new(PendingFile {
            path,
            buf: Vec::new(),
            dirty: false,
        }))
    }
}

///
/// PendingFile
/// Buffers a file and commits it on flush, or on drop if never flushed.
///

struct PendingFile {
    path: PathBuf,
    buf: Vec<u8>,
    dirty: bool,
}

impl PendingFile {
    fn commit(&self) -> io::Result<()> {
        match fs::read(&self.path) {
            Ok(existing) if existing == self.buf => {
                tracing::debug!(path = %self.path.display(), "artifact unchanged");
                Ok(())
            }
            _ => fs::write(&self.path, &self.buf),
        }
    }
}

impl Write for PendingFile {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        self.dirty = true;

        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.commit()?;
        self.dirty = false;

        Ok(())
    }
}

impl Drop for PendingFile {
    fn drop(&mut self) {
        if self.dirty
            && let Err(err) = self.commit()
        {
            tracing::warn!(path = %self.path.display(), error = %err, "unflushed artifact lost");
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use std::{thread::sleep, time::Duration};

    #[test]
    fn memory_filer_replaces_contents() {
        let mut filer = MemoryFiler::new();

        write_artifact(&mut filer, &Artifact::new("a.CarAudit", "first")).unwrap();
        write_artifact(&mut filer, &Artifact::new("a.CarAudit", "second")).unwrap();

        assert_eq!(filer.len(), 1);
        assert_eq!(filer.source("a.CarAudit"), Some("second"));
        assert_eq!(filer.source("a.BoatAudit"), None);
    }

    #[test]
    fn dir_filer_writes_package_path() {
        let dir = tempfile::tempdir().unwrap();
        let mut filer = DirFiler::new(dir.path());
        let artifact = Artifact::new("com.lsq.CarAudit", "class CarAudit {}\n");

        write_artifact(&mut filer, &artifact).unwrap();

        let path = dir.path().join("com/lsq/CarAudit.java");
        assert_eq!(filer.path_for("com.lsq.CarAudit"), path);
        assert_eq!(fs::read_to_string(path).unwrap(), "class CarAudit {}\n");
    }

    #[test]
    fn dir_filer_skips_unchanged_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut filer = DirFiler::new(dir.path());
        let artifact = Artifact::new("a.CarAudit", "same");
        let path = filer.path_for("a.CarAudit");

        write_artifact(&mut filer, &artifact).unwrap();
        let before = fs::metadata(&path).unwrap().modified().unwrap();

        sleep(Duration::from_millis(20));
        write_artifact(&mut filer, &artifact).unwrap();
        let after = fs::metadata(&path).unwrap().modified().unwrap();
        assert_eq!(before, after);

        write_artifact(&mut filer, &Artifact::new("a.CarAudit", "changed")).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "changed");
    }

    #[test]
    fn dir_filer_commits_unflushed_sink_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let mut filer = DirFiler::new(dir.path());

        {
            let mut sink = filer.create_source("a.CarAudit").unwrap();
            sink.write_all(b"class CarAudit {}").unwrap();
        }

        let path = filer.path_for("a.CarAudit");
        assert_eq!(fs::read_to_string(path).unwrap(), "class CarAudit {}");
    }

    #[test]
    fn dir_filer_reports_unwritable_root() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let mut filer = DirFiler::new(&blocker);
        let err = write_artifact(&mut filer, &Artifact::new("a.CarAudit", "x"));

        assert!(err.is_err());
    }
}
