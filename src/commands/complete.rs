use std::io;
use std::path::Path;

use crate::story::document::Document;
use crate::story::fields::MODEL_PLACEHOLDER;
use crate::utils::fs::story_path;

const STATUS_READY: &str = "Status: ready-for-dev";
const STATUS_REVIEW: &str = "Status: review";
const AGENT_MODEL: &str = "claude-sonnet-4-5-20250929 (Claude Sonnet 4.5)";

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

    // 3. Move the story into review
    doc.replace_line(STATUS_READY, STATUS_REVIEW);

    // 4. Close out every task checkbox
    doc.check_all_tasks();

    // 5. Record the implementing agent model
    doc.replace_literal(MODEL_PLACEHOLDER, AGENT_MODEL);

    // 6. Write back
    doc.save(&story_file)?;

    println!("Story updated: {}", story_path().display());

    Ok(())
}
