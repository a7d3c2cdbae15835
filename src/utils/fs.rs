use std::path::Path;

/// Story file targeted by every command, relative to the working directory
pub fn story_path() -> &'static Path {
    Path::new("story-1.2.md")
}
