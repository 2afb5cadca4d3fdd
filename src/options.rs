use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File name the archive is written to when no other is given.
pub const DEFAULT_OUTPUT: &str = "directory_contents.txt";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveOptions {
    pub root: PathBuf,
    pub output: PathBuf,
    pub follow_links: bool,
    pub sort_by_name: bool,
    /// Keep the output file itself out of the walk.
    pub exclude_output: bool,
}
impl Default for ArchiveOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: PathBuf::from(DEFAULT_OUTPUT),
            follow_links: false,
            sort_by_name: false,
            exclude_output: true,
        }
    }
}
#[derive(Debug, Default)]
pub struct ArchiveBuilder {
    options: ArchiveOptions,
}
impl ArchiveBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: ArchiveOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.output = path.into();
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn sort_by_name(mut self, yes: bool) -> Self {
        self.options.sort_by_name = yes;
        self
    }
    pub fn exclude_output(mut self, yes: bool) -> Self {
        self.options.exclude_output = yes;
        self
    }
    pub fn build(self) -> ArchiveOptions {
        self.options
    }
}
