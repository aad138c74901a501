//! CLI module for the notebook application
//!
//! This module handles the interactive shell: it reads command lines from
//! stdin, dispatches them against the in-memory notebook and formats the
//! results for display.
use std::io::{stdin, stdout, Write};

use clap::Parser;
use log::{debug, info};
use shell_words::split;

use crate::{Cli, Commands, Config, Note, Notebook, NotebookError, Result, ShellLine};

/// CLI application handler - processes shell commands and interfaces with
/// the Notebook registry
pub struct App {
    /// The note registry for this session
    notebook: Notebook,

    /// Application configuration
    config: Config,

    /// Whether to display verbose output
    verbose: bool,
}

impl App {
    /// Create a new CLI application with the given notebook and config
    pub fn new(notebook: Notebook, config: Config, verbose: bool) -> Self {
        Self {
            notebook,
            config,
            verbose,
        }
    }

    /// Builds an App from parsed command-line arguments.
    pub fn from_cli(cli: Cli) -> Self {
        let mut config = Config::default();
        if let Some(prompt) = cli.prompt {
            config.prompt = prompt;
        }
        if cli.no_color {
            config.use_color = false;
        }
        if let Some(importance) = cli.importance {
            config.default_importance = importance;
        }
        Self::new(Notebook::new(), config, cli.verbose)
    }

    /// Read-eval loop: one command per line until quit or EOF.
    pub fn run_session(&mut self) -> Result<()> {
        console::set_colors_enabled(self.config.use_color);
        println!(
            "{}",
            console::style("Type a command, 'help' for the list, 'quit' to leave.").dim()
        );

        loop {
            print!("{} ", self.config.prompt);
            stdout().flush()?;

            let mut line = String::new();
            if stdin().read_line(&mut line)? == 0 {
                // EOF
                break;
            }

            let words = match split(line.trim()) {
                Ok(words) => words,
                Err(e) => {
                    eprintln!("Invalid input: {}", e);
                    continue;
                }
            };
            if words.is_empty() {
                continue;
            }

            let parsed = match ShellLine::try_parse_from(&words) {
                Ok(parsed) => parsed,
                Err(e) => {
                    // clap renders its own usage/help output
                    let _ = e.print();
                    continue;
                }
            };

            match parsed.command {
                Commands::Quit => break,
                command => {
                    debug!("Dispatching command: {:?}", command);
                    if let Err(e) = self.run(command) {
                        eprintln!("{}", console::style(format!("Error: {}", e)).red());
                    }
                }
            }
        }

        info!("Session ended with {} notes in memory", self.notebook.len());
        Ok(())
    }

    /// Run a single command against the notebook
    pub fn run(&mut self, command: Commands) -> Result<()> {
        match command {
            Commands::Add {
                title,
                text,
                importance,
            } => self.create_note(title, text, importance)?,

            Commands::List { json, detailed } => {
                let notes = self.notebook.list_notes();
                self.display_notes(&notes, json, detailed)?;
            }

            Commands::Important { json } => {
                let notes = self.notebook.important_notes();
                self.display_notes(&notes, json, false)?;
            }

            Commands::Tag { code, tag } => self.handle_tag(code, tag)?,

            Commands::Delete { code, force } => self.handle_delete(code, force)?,

            Commands::Tags => self.handle_tags(),

            Commands::Quit => {}
        }

        Ok(())
    }

    fn create_note(
        &mut self,
        title: String,
        text: String,
        importance: Option<String>,
    ) -> Result<()> {
        let importance = self.config.importance_or_default(importance);
        let code = self.notebook.add_note(title, text, importance);
        println!("Note created with code: {}", code);
        Ok(())
    }

    fn handle_tag(&mut self, code: u64, tag: String) -> Result<()> {
        self.notebook.add_tag(code, &tag)?;
        println!("Tag '{}' added to note {}", tag, code);
        if self.verbose {
            if let Some(note) = self.notebook.note(code) {
                println!("Tags: {}", note.tags.join(", "));
            }
        }
        Ok(())
    }

    fn handle_delete(&mut self, code: u64, force: bool) -> Result<()> {
        // Fetch the note first to show details in the prompt
        let note = match self.notebook.note(code) {
            Some(note) => note,
            None => return Err(NotebookError::NoteNotFound { code }),
        };

        if !force {
            println!("You are about to delete the following note:");
            println!("{}", note);
            if !note.tags.is_empty() {
                println!("Tags:   {}", note.tags.join(", "));
            }

            println!("\nThis action cannot be undone!");
            print!("Are you sure you want to delete this note? [y/N]: ");
            stdout().flush()?;

            let mut input = String::new();
            stdin().read_line(&mut input)?;

            let input = input.trim().to_lowercase();
            if input != "y" && input != "yes" {
                println!("Deletion cancelled.");
                return Ok(());
            }
        }

        let note = self.notebook.delete_note(code)?;
        println!("Note '{}' ({}) has been deleted.", note.title, note.code);

        Ok(())
    }

    fn handle_tags(&self) {
        let counts = self.notebook.tag_counts();
        if counts.is_empty() {
            println!("No tags in use.");
            return;
        }

        for (tag, count) in counts {
            println!(
                "#{}: {} note{}",
                tag,
                count,
                if count == 1 { "" } else { "s" }
            );
        }
    }

    /// Display notes in the requested format
    fn display_notes(&self, notes: &[&Note], json: bool, detailed: bool) -> Result<()> {
        if notes.is_empty() {
            println!("No notes found matching the criteria.");
            return Ok(());
        }

        if json {
            self.display_notes_json(notes, detailed)?;
        } else {
            self.display_notes_text(notes, detailed);
        }

        // Print count at the end
        println!(
            "\nFound {} note{}",
            notes.len(),
            if notes.len() == 1 { "" } else { "s" }
        );

        Ok(())
    }

    /// Display notes in JSON format
    fn display_notes_json(&self, notes: &[&Note], detailed: bool) -> Result<()> {
        if detailed {
            // Full notes with all fields
            println!("{}", serde_json::to_string_pretty(notes)?);
        } else {
            // Simplified notes with just code, title, importance and tags
            let simplified_notes: Vec<serde_json::Value> = notes
                .iter()
                .map(|note| {
                    serde_json::json!({
                        "code": note.code,
                        "title": note.title,
                        "importance": note.importance,
                        "created_at": note.created_at,
                        "tags": note.tags,
                    })
                })
                .collect();

            println!("{}", serde_json::to_string_pretty(&simplified_notes)?);
        }

        Ok(())
    }

    /// Display notes in text format
    fn display_notes_text(&self, notes: &[&Note], detailed: bool) {
        // Use terminal width for formatting if available
        let term_width = terminal_size::terminal_size()
            .map(|(w, _)| w.0 as usize)
            .unwrap_or(80);

        for (i, note) in notes.iter().enumerate() {
            // Add separator between notes (except before the first)
            if i > 0 {
                println!("{}", "-".repeat(term_width.min(50)));
            }

            let created_at = note.created_at.format("%Y-%m-%d %H:%M");

            println!("Code: {} | Created: {}", note.code, created_at);
            println!(
                "Title: {} [{}]",
                console::style(&note.title).bold(),
                note.importance
            );

            if detailed && !note.tags.is_empty() {
                let tags = note
                    .tags
                    .iter()
                    .map(|tag| format!("#{}", tag))
                    .collect::<Vec<_>>()
                    .join(" ");

                println!("Tags: {}", console::style(tags).cyan());
            }

            if detailed {
                println!("\n{}", note.text);
            } else {
                let preview = self.get_content_preview(&note.text, 100);
                if !preview.is_empty() {
                    println!("{}", preview);
                }
            }
        }
    }

    /// Generate a content preview for displaying brief notes
    fn get_content_preview(&self, content: &str, max_len: usize) -> String {
        // Get first non-empty line
        let first_line = content
            .lines()
            .find(|line| !line.trim().is_empty())
            .unwrap_or("");

        if first_line.len() <= max_len {
            first_line.to_string()
        } else {
            let cut = first_line
                .char_indices()
                .map(|(i, _)| i)
                .take_while(|&i| i <= max_len)
                .last()
                .unwrap_or(0);
            format!("{}...", &first_line[..cut])
        }
    }
}
