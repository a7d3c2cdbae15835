use regex::{NoExpand, Regex};
use std::fs;
use std::io;
use std::path::Path;

use crate::story::fields::{CHECKED_TASK, UNCHECKED_TASK};

/// A story document held fully in memory.
///
/// Every edit is a plain substring or pattern replacement on the buffer.
/// An edit whose pattern does not occur leaves the buffer untouched;
/// callers treat that as a silent skip, not an error.
#[derive(Debug)]
pub struct Document {
    text: String,
}

impl Document {
    /// Read the whole file into a new document
    pub fn load(path: &Path) -> io::Result<Self> {
        Ok(Document {
            text: fs::read_to_string(path)?,
        })
    }

    /// Write the buffer back, overwriting the file
    pub fn save(&self, path: &Path) -> io::Result<()> {
        fs::write(path, &self.text)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Append `block` directly after the first occurrence of `anchor`.
    /// Returns false (and changes nothing) when the anchor is absent.
    pub fn insert_after(&mut self, anchor: &str, block: &str) -> bool {
        match self.text.find(anchor) {
            Some(pos) => {
                self.text.insert_str(pos + anchor.len(), block);
                true
            }
            None => false,
        }
    }

    /// Replace every line exactly equal to `line` with `replacement`.
    /// A line that merely starts with `line` is not touched.
    pub fn replace_line(&mut self, line: &str, replacement: &str) -> bool {
        let re = Regex::new(&format!("(?m)^{}$", regex::escape(line))).unwrap();
        if !re.is_match(&self.text) {
            return false;
        }
        let updated = re.replace_all(&self.text, NoExpand(replacement)).into_owned();
        self.text = updated;
        true
    }

    /// Replace every occurrence of the literal `from` with `to`.
    /// Returns the number of occurrences replaced.
    pub fn replace_literal(&mut self, from: &str, to: &str) -> usize {
        let count = self.text.matches(from).count();
        if count > 0 {
            let updated = self.text.replace(from, to);
            self.text = updated;
        }
        count
    }

    /// Flip every unchecked task marker to checked, anywhere in the
    /// document (code fences and quoted examples included).
    pub fn check_all_tasks(&mut self) -> usize {
        let re = Regex::new(&regex::escape(UNCHECKED_TASK)).unwrap();
        let count = re.find_iter(&self.text).count();
        if count > 0 {
            let updated = re.replace_all(&self.text, NoExpand(CHECKED_TASK)).into_owned();
            self.text = updated;
        }
        count
    }
}
