//! Command-line argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// AskZen study assistant
#[derive(Parser)]
#[command(name = "askzen")]
#[command(about = "AskZen - answers, history and notes for students", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Chat-completion API key (overrides $ASKZEN_API_KEY)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Storage directory (overrides storage.dir)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ask a question about a subject
    Ask {
        /// math, science, science_physics, english, reasoning, ...
        subject: String,
        /// The question
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
        /// Send the question to the chat-completion API
        #[arg(long)]
        remote: bool,
    },

    /// Browse and manage conversation history
    History {
        #[command(subcommand)]
        action: HistoryCommands,
    },

    /// Manage study notes
    Notes {
        #[command(subcommand)]
        action: NotesCommands,
    },

    /// Look up a term in the glossary
    Define {
        term: String,
    },
}

#[derive(Subcommand)]
pub enum HistoryCommands {
    /// List threads, most recently updated first
    List,
    /// Print a thread's messages (defaults to the current thread)
    Show { thread_id: Option<String> },
    /// Make a thread current
    Switch { thread_id: String },
    /// Delete a thread
    Delete { thread_id: String },
    /// Search questions and answers
    Search { query: String },
    /// Export all threads as JSON
    Export {
        /// Output file (defaults to askzen-conversations-YYYY-MM-DD.json)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Replace history with threads from an exported file
    Import { file: PathBuf },
    /// Delete all threads
    Clear,
}

#[derive(Subcommand)]
pub enum NotesCommands {
    /// Create a note
    Add {
        subject: String,
        title: String,
        content: String,
    },
    /// List notes, newest first
    List {
        #[arg(long)]
        subject: Option<String>,
    },
    /// Replace a note's title and content
    Edit {
        id: String,
        title: String,
        content: String,
    },
    /// Delete a note
    Delete { id: String },
}
