use std::io;
use std::path::Path;

use crate::story::document::Document;
use crate::templates::{CHANGELOG_ENTRY, COMPLETION_NOTES, FILE_LIST};
use crate::utils::fs::story_path;

const NOTES_ANCHOR: &str = "### Completion Notes List\n";
const FILE_LIST_ANCHOR: &str = "### File List\n";
const CHANGELOG_ANCHOR: &str =
    "**2025-11-01:** Story created by SM agent (create-story workflow)\n";

pub fn run() -> io::Result<()> {
    run_in_dir(Path::new("."))
}

fn run_in_dir(base_dir: &Path) -> io::Result<()> {
    let story_file = base_dir.join(story_path());

    // 1. Validate environment
    if !story_file.exists() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            "story-1.2.md not found in the current directory",
        ));
    }

    // 2. Load the story
    let mut doc = Document::load(&story_file)?;

    // 3. Insert the prepared blocks after their headers.
    //    A missing anchor skips that block.
    doc.insert_after(NOTES_ANCHOR, COMPLETION_NOTES);
    doc.insert_after(FILE_LIST_ANCHOR, FILE_LIST);

    // 4. Record the implementation in the change log
    doc.insert_after(CHANGELOG_ANCHOR, CHANGELOG_ENTRY);

    // 5. Write back
    doc.save(&story_file)?;

    println!("Notes inserted: {}", story_path().display());

    Ok(())
}
