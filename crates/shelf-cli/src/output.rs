//! How commands print books
//!
//! `--json` prints records as serialized JSON, `--quiet` prints only ids,
//! and the default is an aligned table or a labelled detail page.

use shelf_core::views::meta_line;
use shelf_core::{Book, DetailView};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output
    Json,
    /// Quiet mode - minimal output
    Quiet,
}

impl OutputFormat {
    /// Create format from CLI flags
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if quiet {
            OutputFormat::Quiet
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Output helper for consistent formatting
pub struct Output {
    /// The output format
    pub format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Check if output is in quiet mode
    pub fn is_quiet(&self) -> bool {
        matches!(self.format, OutputFormat::Quiet)
    }

    /// Check if output is JSON
    pub fn is_json(&self) -> bool {
        matches!(self.format, OutputFormat::Json)
    }

    /// Print one record as its detail page
    pub fn print_detail(&self, book: &Book, view: &DetailView) {
        match self.format {
            OutputFormat::Human => {
                println!("ID:          {}", view.id);
                println!("Title:       {}", view.title);
                println!("By:          {}", view.meta);
                println!("ISBN:        {}", view.isbn);
                if !view.cover.is_empty() {
                    println!("Cover:       {}", view.cover);
                }
                println!("Description: {}", view.description);
                if let Some(ref url) = view.external_url {
                    println!("External:    {}", url);
                }
            }
            OutputFormat::Json => match serde_json::to_string_pretty(book) {
                Ok(json) => println!("{}", json),
                Err(e) => eprintln!("Failed to serialize book: {}", e),
            },
            OutputFormat::Quiet => {
                println!("{}", book.id);
            }
        }
    }

    /// Print a list of records
    pub fn print_books(&self, books: &[Book]) {
        match self.format {
            OutputFormat::Human => {
                if books.is_empty() {
                    println!("No books found.");
                    return;
                }
                for book in books {
                    println!(
                        "{:<9} | {} | {} | {}",
                        truncate(book.id.as_str(), 9),
                        truncate(&book.title, 35),
                        truncate(&meta_line(book), 30),
                        book.isbn().unwrap_or("-")
                    );
                }
                println!("\n{} book(s)", books.len());
            }
            OutputFormat::Json => match serde_json::to_string_pretty(books) {
                Ok(json) => println!("{}", json),
                Err(e) => eprintln!("Failed to serialize books: {}", e),
            },
            OutputFormat::Quiet => {
                for book in books {
                    println!("{}", book.id);
                }
            }
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Human => println!("✓ {}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({"status": "success", "message": message})
                );
            }
            OutputFormat::Quiet => {}
        }
    }

    /// Print an informational message
    pub fn message(&self, msg: &str) {
        match self.format {
            OutputFormat::Human => println!("{}", msg),
            OutputFormat::Json => {
                println!("{}", serde_json::json!({"message": msg}));
            }
            OutputFormat::Quiet => {}
        }
    }
}

/// Truncate a string to max characters, adding "..." if truncated
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
