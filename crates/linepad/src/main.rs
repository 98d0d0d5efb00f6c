use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use linepad_config::Settings;
use linepad_core::{run_text_command, Region, TextBuffer, TextCommand};

/// Shift the leading whitespace of selected lines.
#[derive(Parser, Debug)]
#[command(name = "linepad", version, about)]
struct Cli {
    /// Command to run.
    #[arg(value_enum)]
    command: CommandArg,

    /// File to edit. Reads stdin when omitted.
    file: Option<PathBuf>,

    /// Char region `START:END` (either order) or a cursor `OFFSET`.
    /// Repeatable. Defaults to the whole buffer.
    #[arg(short, long = "region")]
    regions: Vec<Region>,

    /// Tab size; overrides the settings file.
    #[arg(long, allow_negative_numbers = true)]
    tab_size: Option<i64>,

    /// Indent with spaces instead of tabs; overrides the settings file.
    #[arg(long)]
    translate_tabs_to_spaces: Option<bool>,

    /// Settings file. Defaults to `<config dir>/linepad/settings.json`.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Write the result back to FILE instead of stdout.
    #[arg(short, long, requires = "file")]
    in_place: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CommandArg {
    Indent,
    Unindent,
}

impl From<CommandArg> for TextCommand {
    fn from(arg: CommandArg) -> Self {
        match arg {
            CommandArg::Indent => TextCommand::Indent,
            CommandArg::Unindent => TextCommand::Unindent,
        }
    }
}

impl Cli {
    fn effective_settings(&self) -> Settings {
        let path = self.settings.clone().unwrap_or_else(Settings::default_path);
        let overrides = Settings::new(self.translate_tabs_to_spaces, self.tab_size);
        Settings::load(&path).merged_with(&overrides)
    }
}

/// Selects every line with content. The empty line after a final `\n` is
/// left out so a whole-file indent does not leave a stray unit at the end.
fn whole_text_region(text: &str) -> Region {
    let len = text.chars().count();
    if text.ends_with('\n') {
        Region::new(0, len - 1)
    } else {
        Region::new(0, len)
    }
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the edited text
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let settings = cli.effective_settings();
    let text = read_input(cli.file.as_ref())?;
    let mut buffer = TextBuffer::from(text.as_str());

    let regions = if cli.regions.is_empty() {
        vec![whole_text_region(&text)]
    } else {
        cli.regions.clone()
    };

    let command = TextCommand::from(cli.command);
    let changed = run_text_command(&mut buffer, command, &regions, &settings)?;
    tracing::info!("{command}: {changed} line(s) changed");

    match (&cli.file, cli.in_place) {
        (Some(path), true) => std::fs::write(path, buffer.to_string())
            .with_context(|| format!("failed to write {}", path.display()))?,
        _ => {
            let mut stdout = std::io::stdout().lock();
            write!(stdout, "{buffer}")?;
            stdout.flush()?;
        }
    }

    Ok(())
}
