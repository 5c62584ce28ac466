use std::io::{BufRead, Write};

use act_config::ActConfig;
use act_core::{Action, Change, Controller, LoadError, SessionState};
use anyhow::{Context, bail};

use crate::cli::root_commands::ReviewArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::input::read_input;
use crate::output::{cards, render, render_items};
use crate::ui;

const HELP: &str = "\
commands:
  load <path>      load a payload file (replaces the current session)
  paste            read a payload from the next lines, end with a line holding '.'
  list             list items with their kept flag
  show <id>        print one item as a card
  keep <id>        keep an item for export
  drop <id>        leave an item out of the export
  delete <id>      remove an item
  export [path]    write kept items ('-' prints them)
  stats            item and kept counts
  raw              print the text of the last successful load
  reset            clear everything
  help             this text
  quit             leave";

/// One line of review input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewCommand {
    Load(String),
    Paste,
    List,
    Show(String),
    Keep(String),
    Drop(String),
    Delete(String),
    Export(Option<String>),
    Stats,
    Raw,
    Reset,
    Help,
    Quit,
}

impl ReviewCommand {
    /// Parse a non-empty input line.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(verb, rest)| (verb, rest.trim()));
        let argument = |name: &str| {
            if rest.is_empty() {
                Err(format!("'{verb}' needs {name}"))
            } else {
                Ok(rest.to_string())
            }
        };

        match verb {
            "load" => argument("a path").map(Self::Load),
            "paste" => Ok(Self::Paste),
            "list" | "ls" => Ok(Self::List),
            "show" => argument("an id").map(Self::Show),
            "keep" => argument("an id").map(Self::Keep),
            "drop" => argument("an id").map(Self::Drop),
            "delete" | "rm" => argument("an id").map(Self::Delete),
            "export" => Ok(Self::Export((!rest.is_empty()).then(|| rest.to_string()))),
            "stats" => Ok(Self::Stats),
            "raw" => Ok(Self::Raw),
            "reset" => Ok(Self::Reset),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(format!("unknown command '{other}' (type 'help')")),
        }
    }
}

/// Interactive surface driving a [`Controller`].
pub struct Review {
    controller: Controller,
    export_path: String,
    format: OutputFormat,
    color: bool,
    prompt: bool,
}

impl Review {
    #[must_use]
    pub fn new(config: &ActConfig, format: OutputFormat, color: bool) -> Self {
        Self {
            controller: Controller::new(config.load_options()),
            export_path: config.general.export_path.clone(),
            format,
            color,
            prompt: true,
        }
    }

    /// Do not print `act> ` before each line.
    #[must_use]
    pub const fn without_prompt(mut self) -> Self {
        self.prompt = false;
        self
    }

    #[cfg(test)]
    #[must_use]
    pub const fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Read commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> anyhow::Result<()> {
        let mut lines = input.lines();
        loop {
            if self.prompt {
                write!(out, "act> ")?;
                out.flush()?;
            }
            let Some(line) = lines.next() else {
                break;
            };
            let line = line.context("failed to read review input")?;
            if line.trim().is_empty() {
                continue;
            }

            let command = match ReviewCommand::parse(&line) {
                Ok(command) => command,
                Err(message) => {
                    writeln!(out, "{message}")?;
                    continue;
                }
            };

            match command {
                ReviewCommand::Quit => break,
                ReviewCommand::Paste => {
                    let mut raw = String::new();
                    for line in lines.by_ref() {
                        let line = line.context("failed to read pasted payload")?;
                        if line.trim() == "." {
                            break;
                        }
                        raw.push_str(&line);
                        raw.push('\n');
                    }
                    self.load_text(raw, out)?;
                }
                other => self.execute(other, out)?,
            }
        }
        Ok(())
    }

    /// Load a payload and report the outcome to `out`.
    pub fn load_text<W: Write>(&mut self, raw: String, out: &mut W) -> anyhow::Result<()> {
        match self.controller.apply(Action::Load(raw)) {
            Ok(update) => {
                if let Change::Loaded(report) = &update.change {
                    writeln!(out, "loaded {} items", report.loaded)?;
                    for entry in &report.ignored {
                        writeln!(out, "  skipped entry #{}: {}", entry.index, entry.reason)?;
                    }
                    if report.loaded == 0 {
                        writeln!(out, "warning: no item has a usable 'id'")?;
                    }
                }
                writeln!(out, "{}", render_items(update.session, self.format)?)?;
            }
            Err(error) => report_load_error(&error, out)?,
        }
        Ok(())
    }

    fn execute<W: Write>(&mut self, command: ReviewCommand, out: &mut W) -> anyhow::Result<()> {
        match command {
            ReviewCommand::Load(path) => match read_input(&path) {
                Ok(raw) => self.load_text(raw, out)?,
                Err(error) => writeln!(out, "error: {error:#}")?,
            },
            ReviewCommand::List => {
                if self.require_loaded(out)? {
                    let session = self.controller.session();
                    writeln!(out, "{}", render_items(session, self.format)?)?;
                }
            }
            ReviewCommand::Show(id) => match self.controller.session().item(&id) {
                Some(item) => {
                    let kept = self.controller.session().is_kept(&id);
                    writeln!(out, "{}", cards::render_card(item, kept, self.color))?;
                }
                None => writeln!(out, "no item '{id}'")?,
            },
            ReviewCommand::Keep(id) => self.set_kept(id, true, out)?,
            ReviewCommand::Drop(id) => self.set_kept(id, false, out)?,
            ReviewCommand::Delete(id) => {
                let update = self.controller.apply(Action::Delete(id.clone()))?;
                let stats = update.session.stats();
                if update.change == Change::Deleted(true) {
                    writeln!(out, "deleted {id} ({} items, {} kept)", stats.total, stats.kept)?;
                } else {
                    writeln!(out, "no item '{id}'")?;
                }
            }
            ReviewCommand::Export(path) => self.export(path, out)?,
            ReviewCommand::Stats => {
                let stats = self.controller.session().stats();
                writeln!(out, "{} items, {} kept", stats.total, stats.kept)?;
            }
            ReviewCommand::Raw => {
                if let Some(raw) = self.controller.session().raw_input() {
                    writeln!(out, "{}", raw.trim_end())?;
                } else {
                    self.require_loaded(out)?;
                }
            }
            ReviewCommand::Reset => {
                self.controller.apply(Action::Reset)?;
                writeln!(out, "session cleared")?;
            }
            ReviewCommand::Help => writeln!(out, "{HELP}")?,
            ReviewCommand::Paste | ReviewCommand::Quit => {}
        }
        Ok(())
    }

    fn set_kept<W: Write>(&mut self, id: String, keep: bool, out: &mut W) -> anyhow::Result<()> {
        let update = self.controller.apply(Action::SetKept {
            id: id.clone(),
            keep,
        })?;
        if !update.session.contains(&id) {
            writeln!(out, "no item '{id}'")?;
            return Ok(());
        }
        let stats = update.session.stats();
        let verb = if keep { "kept" } else { "dropped" };
        writeln!(out, "{verb} {id} ({} of {} kept)", stats.kept, stats.total)?;
        Ok(())
    }

    fn export<W: Write>(&self, path: Option<String>, out: &mut W) -> anyhow::Result<()> {
        if !self.require_loaded(out)? {
            return Ok(());
        }
        let export = self.controller.session().export_filtered();
        if export.is_empty() {
            writeln!(out, "warning: no item is kept")?;
        }

        let path = path.unwrap_or_else(|| self.export_path.clone());
        if path == "-" {
            writeln!(out, "{}", render(&export, self.format)?)?;
            return Ok(());
        }

        let rendered = export.to_json_pretty()?;
        match std::fs::write(&path, format!("{rendered}\n")) {
            Ok(()) => writeln!(out, "wrote {} items to {path}", export.items.len())?,
            Err(error) => {
                tracing::warn!(%path, %error, "export failed");
                writeln!(out, "error: cannot write '{path}': {error}")?;
            }
        }
        Ok(())
    }

    fn require_loaded<W: Write>(&self, out: &mut W) -> anyhow::Result<bool> {
        if self.controller.session().state() == SessionState::Empty {
            writeln!(out, "nothing loaded; use 'load <path>' or 'paste'")?;
            return Ok(false);
        }
        Ok(true)
    }
}

fn report_load_error<W: Write>(error: &LoadError, out: &mut W) -> anyhow::Result<()> {
    tracing::debug!(%error, "load rejected");
    writeln!(out, "error: {error}")?;
    writeln!(out, "the current session is unchanged")?;
    Ok(())
}

/// Handle `act review`.
pub fn handle(args: &ReviewArgs, config: &ActConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut review = Review::new(config, flags.format, ui::prefs().color);
    if flags.quiet {
        review = review.without_prompt();
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Some(input) = &args.input {
        if input == "-" {
            bail!("review reads commands from stdin; pass the payload as a file path");
        }
        let raw = read_input(input)?;
        review.load_text(raw, &mut out)?;
    }

    review.run(std::io::stdin().lock(), &mut out)
}
