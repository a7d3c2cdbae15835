use std::io;
use std::path::Path;

use crate::story::document::Document;
use crate::story::fields::{count_checked, count_unchecked, has_model_placeholder, parse_status};
use crate::utils::fs::story_path;

pub fn run() -> io::Result<()> {
    run_status_in_dir(Path::new("."))
}

fn run_status_in_dir(base_dir: &Path) -> io::Result<()> {
    let story_file = base_dir.join(story_path());

    if !story_file.exists() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            "story-1.2.md not found in the current directory",
        ));
    }

    let doc = Document::load(&story_file)?;
    let content = doc.as_str();

    // Print header
    println!("Story Status");
    println!("────────────");

    let status = parse_status(content).unwrap_or_else(|| "unknown".to_string());
    println!("Status:  {}", status);

    let open = count_unchecked(content);
    let done = count_checked(content);
    println!("Tasks:   {}/{} complete", done, done + open);

    println!();

    if has_model_placeholder(content) {
        println!("Model:   unresolved placeholder");
    } else {
        println!("Model:   recorded");
    }

    Ok(())
}
