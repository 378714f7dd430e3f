use crate::cursor::Cursor;
use std::io::{self, Read};

/// Display name used when the caller does not name its input
pub const DEFAULT_NAME: &str = "(temporary string)";

/// An input buffer together with the name shown in diagnostics
///
/// The whole input is materialized up front; cursors borrow from it and the
/// buffer is never mutated while a parse is running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    content: String,
    name: String,
}

impl Source {
    pub fn new(content: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            name: name.into(),
        }
    }

    /// Wrap a string under the default display name
    pub fn from_string(content: impl Into<String>) -> Self {
        Self::new(content, DEFAULT_NAME)
    }

    /// Read everything from `reader` before any parsing takes place
    pub fn from_reader(mut reader: impl Read, name: impl Into<String>) -> io::Result<Self> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Ok(Self::new(content, name))
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Cursor positioned at the first character
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(self)
    }
}
