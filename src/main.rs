use clap::{Parser, Subcommand};

mod commands;
mod story;
mod templates;
mod utils;

const LONG_ABOUT: &str = "\
Storymark applies the development-agent markup pass to a story file.

Story files move through an agent documentation workflow: a story is created
in the ready-for-dev state with an open task checklist, a development agent
implements it, and the story document is then marked up to reflect the
finished work. Storymark performs that markup against story-1.2.md in the
current directory.

Every edit is a plain text substitution on the document. An edit whose
anchor text is missing is skipped silently; the rest of the document is
preserved byte for byte.";

const AFTER_HELP: &str = "\
EXAMPLES:
    Insert the prepared completion notes and file list:
        $ storymark annotate

    Move the story into review and close out the checklist:
        $ storymark complete

    Inspect the story's current state:
        $ storymark status

WORKFLOW:
    1. The SM agent creates story-1.2.md (status ready-for-dev)
    2. The DEV agent implements the story
    3. Run 'storymark annotate' to record the completion notes
    4. Run 'storymark complete' to flip the checklist and set review status
    5. Use 'storymark status' to inspect the story at any point

NOTES:
    Commands overwrite story-1.2.md in place. There is no backup and no
    duplicate guard; running 'annotate' twice inserts the notes twice.";

#[derive(Parser)]
#[command(name = "storymark")]
#[command(version)]
#[command(about = "Markup passes for development-agent story files")]
#[command(long_about = LONG_ABOUT)]
#[command(after_help = AFTER_HELP)]
#[command(arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Insert the completion notes, file list, and change log entry
    #[command(
        long_about = "\
Insert the completion notes, file list, and change log entry.

Reads story-1.2.md and appends the prepared markup directly after three
anchor lines:
  • '### Completion Notes List'  - the DEV completion notes block
  • '### File List'              - the created/pending file list
  • the story-created change log line - the story-implemented entry

Each insertion is independent. An anchor that does not appear verbatim in
the document is skipped without a diagnostic; the remaining insertions
still run and the file is still written.",
        after_help = "\
EXAMPLES:
    After the DEV agent finishes implementation:
        $ storymark annotate

OUTPUT:
    Notes inserted: story-1.2.md"
    )]
    Annotate,

    /// Set review status, check every task, record the agent model
    #[command(
        long_about = "\
Set review status, check every task, and record the agent model.

Applies three substitutions to story-1.2.md:
  • the line 'Status: ready-for-dev' becomes 'Status: review'
  • every '- [ ]' task marker becomes '- [x]', anywhere in the document
  • every '{{agent_model_name_version}}' placeholder becomes the
    implementing model identifier

The checkbox substitution is global and unconditional: markers inside code
fences or quoted examples are flipped too. A pattern that does not occur
is skipped without a diagnostic.",
        after_help = "\
EXAMPLES:
    Once all story tasks are done:
        $ storymark complete

OUTPUT:
    Story updated: story-1.2.md"
    )]
    Complete,

    /// Display the story's current state
    #[command(
        long_about = "\
Display the story's current state.

Reads story-1.2.md and reports:
  • the Status field value
  • task progress (checked vs. open checklist markers)
  • whether the agent model placeholder is still unresolved

This command never modifies the story file.",
        after_help = "\
EXAMPLES:
    Check the story before or after a markup pass:
        $ storymark status

OUTPUT:
    Story Status
    ────────────
    Status:  ready-for-dev
    Tasks:   1/6 complete

    Model:   unresolved placeholder"
    )]
    Status,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Annotate => commands::annotate::run(),
        Commands::Complete => commands::complete::run(),
        Commands::Status => commands::status::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
