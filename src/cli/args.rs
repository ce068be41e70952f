// src/cli/args.rs
use crate::domain::Category;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Directory holding notes.json and quiz.json (optional)
    #[arg(short, long, value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Path to TOML config file (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Accepts a menu key (1-5), an ASCII slug or the Korean label
fn parse_category(input: &str) -> Result<Category, String> {
    Category::parse(input).map_err(|e| e.to_string())
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Add a study note
    Add {
        /// Exam subject
        #[arg(long, value_parser = parse_category)]
        category: Category,

        /// Note title
        #[arg(long)]
        title: String,

        /// Note body; `-` reads it from stdin
        #[arg(long)]
        content: String,

        /// Sub-topic within the subject
        #[arg(long, default_value = "")]
        subcategory: String,

        /// Comma separated keywords
        #[arg(long)]
        keywords: Option<String>,

        /// Importance 1-5 (invalid input falls back to 3)
        #[arg(long)]
        importance: Option<String>,
    },

    /// List notes, grouped by subject
    List {
        /// Only list notes of this subject
        #[arg(long, value_parser = parse_category)]
        category: Option<Category>,
    },

    /// Search notes by title, content or keyword
    Search {
        #[arg(value_name = "KEYWORD")]
        keyword: String,
    },

    /// Show a note in detail (counts as a review)
    View {
        /// Note ID to view
        #[arg(value_name = "NOTE_ID")]
        note_id: String,

        /// Output note as JSON
        #[arg(long)]
        json: bool,

        /// Flip the mastered flag after viewing
        #[arg(long)]
        toggle_mastered: bool,
    },

    /// Edit fields of a note
    Edit {
        /// Note ID to edit
        #[arg(value_name = "NOTE_ID")]
        note_id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        subcategory: Option<String>,

        /// New body; `-` reads it from stdin
        #[arg(long)]
        content: Option<String>,

        /// Comma separated keywords, replaces the current list
        #[arg(long)]
        keywords: Option<String>,

        #[arg(long)]
        importance: Option<String>,
    },

    /// Delete a note
    Delete {
        /// Note ID to delete
        #[arg(value_name = "NOTE_ID")]
        note_id: String,
    },

    /// Add a quiz question
    AddQuiz {
        #[arg(long, value_parser = parse_category)]
        category: Category,

        #[arg(long)]
        question: String,

        /// Answer choice, repeat for each; omit for a short-answer question
        #[arg(long = "choice", value_name = "CHOICE")]
        choices: Vec<String>,

        /// Correct choice number (1-based) or answer text
        #[arg(long)]
        answer: String,

        #[arg(long, default_value = "")]
        explanation: String,
    },

    /// Take a quiz on the terminal
    Quiz {
        /// Only ask questions of this subject
        #[arg(long, value_parser = parse_category)]
        category: Option<Category>,

        /// Number of questions (defaults to the whole pool)
        #[arg(long)]
        count: Option<String>,
    },

    /// Show study statistics
    Stats {
        /// Output statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the subject taxonomy
    Categories,

    /// Replace notes and questions with generated sample data
    Seed {
        #[arg(long)]
        notes: Option<usize>,

        #[arg(long)]
        quizzes: Option<usize>,

        /// RNG seed for reproducible data
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Run a simulated exam and write a Markdown report
    Simulate {
        /// Number of questions (defaults to the configured exam size)
        #[arg(long)]
        count: Option<usize>,

        /// Report path; printed to stdout when omitted
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// RNG seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,
    },
}
