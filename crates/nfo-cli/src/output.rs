use clap::ValueEnum;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, Table};
use owo_colors::OwoColorize;
use serde_json::Value;
use tokio::io::AsyncWriteExt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    #[value(name = "json-pretty")]
    JsonPretty,
}

/// Outcome marker of a status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Warning,
    Failed,
}

/// Sink for command results
///
/// Human mode gets status lines and tables, the JSON modes get exactly one
/// document per command. Converted NFO bytes go to stdout in every mode.
pub struct Output {
    format: OutputFormat,
    quiet: bool,
}

impl Output {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    pub fn is_human(&self) -> bool {
        self.format == OutputFormat::Human
    }

    /// `✓`/`⚠` lines on stdout, `✗` lines on stderr even when quiet
    pub fn status(&self, status: Status, msg: impl AsRef<str>) {
        if !self.is_human() {
            return;
        }
        match status {
            Status::Failed => eprintln!("{} {}", "✗".red(), msg.as_ref()),
            _ if self.quiet => {}
            Status::Ok => println!("{} {}", "✓".green(), msg.as_ref()),
            Status::Warning => println!("{} {}", "⚠".yellow(), msg.as_ref()),
        }
    }

    /// Plain summary line
    pub fn line(&self, msg: impl AsRef<str>) {
        if self.is_human() && !self.quiet {
            println!("{}", msg.as_ref());
        }
    }

    /// Two-column label/value table; rows with an empty value are left out
    pub fn table<'a>(&self, title: &str, kind: &str, rows: impl IntoIterator<Item = (&'a str, String)>) {
        if !self.is_human() || self.quiet {
            return;
        }

        let mut table = Table::new();
        table.set_header(vec![
            Cell::new(title).add_attribute(Attribute::Bold),
            Cell::new(kind).fg(Color::Cyan),
        ]);
        for (label, value) in rows {
            if !value.is_empty() {
                table.add_row(vec![Cell::new(label), Cell::new(value)]);
            }
        }
        table.load_preset(UTF8_FULL);
        table.apply_modifier(UTF8_ROUND_CORNERS);
        println!("{}", table);
    }

    /// The command's JSON document; nothing in human mode
    pub fn document(&self, data: &Value) {
        if self.quiet {
            return;
        }
        match self.format {
            OutputFormat::Human => {}
            OutputFormat::Json => println!("{}", data),
            OutputFormat::JsonPretty => println!("{:#}", data),
        }
    }

    /// Serialized NFO on stdout, terminated by a newline
    pub async fn nfo(&self, bytes: &[u8]) -> std::io::Result<()> {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(bytes).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_human_format_is_human() {
        assert!(Output::new(OutputFormat::Human, false).is_human());
        assert!(Output::new(OutputFormat::Human, true).is_human());
        assert!(!Output::new(OutputFormat::Json, false).is_human());
        assert!(!Output::new(OutputFormat::JsonPretty, false).is_human());
    }

    #[test]
    fn test_format_parses_from_cli_names() {
        assert_eq!(OutputFormat::from_str("json-pretty", false), Ok(OutputFormat::JsonPretty));
        assert_eq!(OutputFormat::from_str("human", false), Ok(OutputFormat::Human));
    }
}
