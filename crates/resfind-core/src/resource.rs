//! Resolved resource handle.
//!
//! A `ResolvedResource` owns the open stream of one successful resolution.
//! The stream can be read directly, materialized once into a JSON object
//! view, or copied to a destination file. Materializing the view consumes
//! and closes the stream.

use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::Value;

use crate::error::ResourceError;
use crate::ports::{DiagnosticSink, ResourceStream, Severity};

/// Key/value view of a JSON resource.
pub type StructuredView = serde_json::Map<String, Value>;

/// Which resolution tier produced a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceSource {
    /// Found relative to the working directory.
    WorkingDirectory,
    /// Found under the search directory at `index`.
    SearchPath { index: usize },
    /// Served by a bundled provider.
    Bundled,
}

impl fmt::Display for ResourceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WorkingDirectory => f.write_str("working directory"),
            Self::SearchPath { index } => write!(f, "search path #{index}"),
            Self::Bundled => f.write_str("bundled"),
        }
    }
}

/// An open resource bound to the first location that matched.
pub struct ResolvedResource {
    logical_name: String,
    location: String,
    source: ResourceSource,
    path: Option<PathBuf>,
    stream: Option<BufReader<ResourceStream>>,
    view: Option<StructuredView>,
    last_error: Option<ResourceError>,
    sink: Arc<dyn DiagnosticSink>,
}

impl ResolvedResource {
    pub(crate) fn new(
        logical_name: &str,
        location: String,
        source: ResourceSource,
        path: Option<PathBuf>,
        stream: ResourceStream,
        sink: Arc<dyn DiagnosticSink>,
    ) -> Self {
        Self {
            logical_name: logical_name.to_string(),
            location,
            source,
            path,
            stream: Some(BufReader::new(stream)),
            view: None,
            last_error: None,
            sink,
        }
    }

    /// The name that was requested.
    pub fn logical_name(&self) -> &str {
        &self.logical_name
    }

    /// Where the name was found: a filesystem path for the working directory
    /// and search-path tiers, the logical name for bundled resources.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Which tier matched.
    pub const fn source(&self) -> ResourceSource {
        self.source
    }

    /// Filesystem path of the match, if it came from the filesystem tiers.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Whether the stream is still held by this handle.
    pub const fn is_open(&self) -> bool {
        self.stream.is_some()
    }

    /// The open byte stream, or `None` once closed or consumed.
    pub fn stream(&mut self) -> Option<&mut (dyn BufRead + Send)> {
        self.stream
            .as_mut()
            .map(|reader| reader as &mut (dyn BufRead + Send))
    }

    /// Most recent failure masked by `structured_view` or `copy_to`.
    pub const fn last_error(&self) -> Option<&ResourceError> {
        self.last_error.as_ref()
    }

    /// Parse the remaining stream as a JSON object, once.
    ///
    /// The first call consumes and closes the stream; later calls return the
    /// cached map. Malformed content or a read failure produces an empty map,
    /// reported to the diagnostic sink and kept in `last_error`. Returns
    /// `None` when the handle was closed (or drained by `copy_to`) before
    /// any view existed.
    pub fn structured_view(&mut self) -> Option<&StructuredView> {
        if self.view.is_none() {
            let reader = self.stream.take()?;
            let location = self.location.clone();
            let view = match serde_json::from_reader::<_, Value>(reader) {
                Ok(Value::Object(map)) => map,
                Ok(other) => {
                    self.mask(
                        Severity::Error,
                        "Parsing JSON",
                        ResourceError::Content {
                            location,
                            reason: format!("expected a JSON object, found {}", kind(&other)),
                        },
                    );
                    StructuredView::new()
                }
                Err(e) if e.is_io() => {
                    self.mask(
                        Severity::Error,
                        "Reading JSON",
                        ResourceError::Io {
                            location,
                            source: io::Error::from(e),
                        },
                    );
                    StructuredView::new()
                }
                Err(e) => {
                    self.mask(
                        Severity::Error,
                        "Parsing JSON",
                        ResourceError::Content {
                            location,
                            reason: e.to_string(),
                        },
                    );
                    StructuredView::new()
                }
            };
            self.view = Some(view);
        }
        self.view.as_ref()
    }

    /// Stream the remaining content to `dest`, overwriting it.
    ///
    /// Best effort: failures are logged and kept in `last_error`, and a
    /// partially written destination is left as is. Copying onto the file
    /// the handle was resolved from is refused and leaves it untouched. A
    /// completed copy closes the stream. Returns whether the copy completed.
    pub fn copy_to(&mut self, dest: &Path) -> bool {
        if self.stream.is_none() {
            self.mask(
                Severity::Warning,
                "Copying resource",
                ResourceError::Closed {
                    location: self.location.clone(),
                },
            );
            return false;
        }

        if self.is_source_file(dest) {
            self.mask(
                Severity::Warning,
                "Copying resource",
                ResourceError::SameFile {
                    location: self.location.clone(),
                },
            );
            return false;
        }

        let file = match File::create(dest) {
            Ok(file) => file,
            Err(e) => {
                self.mask(
                    Severity::Warning,
                    "Cannot open output file",
                    ResourceError::Io {
                        location: dest.display().to_string(),
                        source: e,
                    },
                );
                return false;
            }
        };

        let mut out = BufWriter::new(file);
        let result = match self.stream.as_mut() {
            Some(reader) => io::copy(reader, &mut out).and_then(|n| out.flush().map(|()| n)),
            None => Ok(0),
        };

        match result {
            Ok(bytes) => {
                tracing::debug!(
                    from = %self.location,
                    to = %dest.display(),
                    bytes,
                    "copied resource"
                );
                self.close();
                true
            }
            Err(e) => {
                self.mask(
                    Severity::Warning,
                    "Copying resource",
                    ResourceError::Io {
                        location: format!("{} -> {}", self.location, dest.display()),
                        source: e,
                    },
                );
                false
            }
        }
    }

    /// Release the stream. Safe to call any number of times.
    pub fn close(&mut self) {
        if self.stream.take().is_some() {
            tracing::trace!(location = %self.location, "closed resource");
        }
    }

    // A destination that does not exist yet cannot be the source.
    fn is_source_file(&self, dest: &Path) -> bool {
        let Some(source) = self.path.as_deref() else {
            return false;
        };
        match (fs::canonicalize(source), fs::canonicalize(dest)) {
            (Ok(source), Ok(dest)) => source == dest,
            _ => false,
        }
    }

    fn mask(&mut self, severity: Severity, context: &str, error: ResourceError) {
        self.sink.log(severity, context, Some(&error));
        self.last_error = Some(error);
    }
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl fmt::Display for ResolvedResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.location)
    }
}

impl fmt::Debug for ResolvedResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedResource")
            .field("logical_name", &self.logical_name)
            .field("location", &self.location)
            .field("source", &self.source)
            .field("open", &self.is_open())
            .field("view", &self.view.as_ref().map(serde_json::Map::len))
            .finish_non_exhaustive()
    }
}
