//! Subcommand execution

use anyhow::{bail, Context, Result};
use askzen::{export_file_name, AskZen, Backend, Subject};
use chrono::Utc;
use std::fs;

use crate::cli::{HistoryCommands, NotesCommands};

pub async fn ask(app: &mut AskZen, subject: &str, query: &[String], remote: bool) -> Result<()> {
    if remote {
        app.engine_mut().set_backend(Backend::Remote);
    }
    let subject = Subject::from(subject);
    let answer = app.ask(&query.join(" "), &subject).await;

    println!("{}", answer.text);
    if let Some(error) = &answer.error {
        eprintln!("\n{}", error);
        return Ok(());
    }

    let meta = &answer.metadata;
    println!(
        "\n[{} • {} min read • confidence {:.0}%]",
        meta.difficulty,
        meta.read_time_minutes,
        meta.confidence * 100.0
    );
    if !meta.follow_up_questions.is_empty() {
        println!("\nYou might also ask:");
        for q in &meta.follow_up_questions {
            println!("  - {}", q);
        }
    }
    Ok(())
}

pub fn history(app: &mut AskZen, action: HistoryCommands) -> Result<()> {
    match action {
        HistoryCommands::List => {
            let current = app.conversations().current_thread_id().map(str::to_string);
            let threads = app.conversations().threads();
            if threads.is_empty() {
                println!("No conversations yet.");
            }
            for thread in threads {
                let marker = if current.as_deref() == Some(thread.id.as_str()) { "*" } else { " " };
                println!(
                    "{} {}  {}  ({} messages, updated {})",
                    marker,
                    thread.id,
                    thread.title,
                    thread.messages.len(),
                    thread.updated_at.format("%Y-%m-%d %H:%M")
                );
                if let Some(last) = thread.last_message() {
                    println!("      last: {}", last.query);
                }
            }
        }
        HistoryCommands::Show { thread_id } => {
            let store = app.conversations();
            let thread = match thread_id.as_deref() {
                Some(id) => store.thread(id),
                None => store.current_thread(),
            };
            let Some(thread) = thread else {
                println!("No such thread.");
                return Ok(());
            };
            println!("# {}\n", thread.title);
            for message in &thread.messages {
                println!("> {}  ({})\n", message.query, message.timestamp.format("%Y-%m-%d %H:%M"));
                println!("{}\n", message.response);
            }
        }
        HistoryCommands::Switch { thread_id } => {
            match app.conversations_mut().switch_thread(&thread_id) {
                Ok(()) => println!("Switched to {}", thread_id),
                Err(e) => println!("{}", e),
            }
        }
        HistoryCommands::Delete { thread_id } => {
            match app.conversations_mut().delete_thread(&thread_id) {
                Ok(thread) => println!("Deleted \"{}\"", thread.title),
                Err(e) => println!("{}", e),
            }
        }
        HistoryCommands::Search { query } => {
            let results = app.conversations().search(&query);
            println!("{} result(s)", results.len());
            for message in results {
                println!(
                    "- [{}] {} ({})",
                    message.subject,
                    message.query,
                    message.timestamp.format("%Y-%m-%d %H:%M")
                );
            }
        }
        HistoryCommands::Export { out } => {
            let json = app.conversations().export_all()?;
            let path = out.unwrap_or_else(|| export_file_name(Utc::now().date_naive()).into());
            fs::write(&path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Exported {} thread(s) to {}", app.conversations().len(), path.display());
        }
        HistoryCommands::Import { file } => {
            let json = fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            if !app.conversations_mut().import_all(&json) {
                bail!("Import failed: {} is not a valid conversation export", file.display());
            }
            println!("Imported {} thread(s)", app.conversations().len());
        }
        HistoryCommands::Clear => {
            app.conversations_mut().clear_all();
            println!("History cleared.");
        }
    }
    Ok(())
}

pub fn notes(app: &mut AskZen, action: NotesCommands) -> Result<()> {
    match action {
        NotesCommands::Add { subject, title, content } => {
            let note = app.notes_mut().create(&title, &content, &Subject::from(subject))?;
            println!("Created note {}", note.id);
        }
        NotesCommands::List { subject } => {
            let subject = subject.map(Subject::from);
            let notes = app.notes().list(subject.as_ref());
            if notes.is_empty() {
                println!("No notes yet.");
            }
            for note in notes {
                println!("{}  [{}] {}", note.id, note.subject, note.title);
                println!("    {}", note.content.replace('\n', "\n    "));
            }
        }
        NotesCommands::Edit { id, title, content } => {
            let note = app.notes_mut().update(&id, &title, &content)?;
            println!("Updated \"{}\"", note.title);
        }
        NotesCommands::Delete { id } => {
            let note = app.notes_mut().delete(&id)?;
            println!("Deleted \"{}\"", note.title);
        }
    }
    Ok(())
}

pub fn define(app: &AskZen, term: &str) {
    let definitions = app.engine().definitions();
    if let Some(def) = definitions.lookup(term) {
        println!("{} ({})\n  {}", def.term, def.context, def.meaning);
        if !def.examples.is_empty() {
            println!("  Examples: {}", def.examples.join("; "));
        }
        if !def.related_terms.is_empty() {
            println!("  Related: {}", def.related_terms.join(", "));
        }
        return;
    }

    let matches = definitions.search(term);
    if matches.is_empty() {
        println!("No definition found for \"{}\".", term);
    }
    for def in matches {
        println!("{}: {}", def.term, def.meaning);
    }
}
