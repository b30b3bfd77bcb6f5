// Sysfs-style file access helpers

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Outcome of reading a single attribute file from the sensor tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attribute {
    /// File content, untrimmed
    Value(String),
    /// The file does not exist
    Absent,
    /// The file exists but could not be read (permissions, I/O error, invalid UTF-8)
    Unreadable,
}

impl Attribute {
    pub fn value(self) -> Option<String> {
        match self {
            Attribute::Value(content) => Some(content),
            Attribute::Absent | Attribute::Unreadable => None,
        }
    }
}

/// Read an attribute file without treating absence as an error.
pub fn read_attribute(path: &Path) -> Attribute {
    match fs::read_to_string(path) {
        Ok(content) => Attribute::Value(content),
        Err(e) if e.kind() == ErrorKind::NotFound => Attribute::Absent,
        Err(e) => {
            log::trace!("Failed to read {}: {}", path.display(), e);
            Attribute::Unreadable
        }
    }
}

/// First whitespace-delimited token of a file's content.
pub fn first_token(content: &str) -> Option<&str> {
    content.split_whitespace().next()
}
