use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::{self, Write};

use super::traits::Renderer;
use crate::presentation::view_models::{CommandResultViewModel, CreateView, OutputFormat, ViewMode};

pub struct ConsoleRenderer {
    format: OutputFormat,
    mode: ViewMode,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat, mode: ViewMode) -> Self {
        Self { format, mode }
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let stdout = io::stdout();
        let mut out = stdout.lock();

        if self.format == OutputFormat::Json {
            writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
            return Ok(());
        }

        // Minimal output is for pipes: ids only, no decoration
        if let Some(badge) = &result.badge
            && self.mode != ViewMode::Minimal
        {
            writeln!(out, "{} {}", badge.icon(), badge.label.bold())?;
            writeln!(out)?;
        }

        write!(out, "{}", result.content.create_view(self.mode))?;

        if !result.suggestions.is_empty() && self.mode != ViewMode::Minimal {
            writeln!(out, "\n{}", "💡 Tips:".yellow().bold())?;
            for tip in &result.suggestions {
                write!(out, "  • {}", tip.description)?;
                if let Some(cmd) = &tip.command {
                    write!(out, ": {}", cmd.cyan())?;
                }
                writeln!(out)?;
            }
        }

        Ok(())
    }
}
