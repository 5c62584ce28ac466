use clap::{Args, Subcommand, ValueEnum};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Load a payload and print its items.
    Show(ShowArgs),
    /// Load a payload, apply deletions and keep flags, write the export.
    Filter(FilterArgs),
    /// Review items interactively, one command per line on stdin.
    Review(ReviewArgs),
    /// Print the prompt that asks a model for a payload.
    Prompt(PromptArgs),
    /// Dump the JSON schema of a payload.
    Schema(SchemaArgs),
}

/// Arguments for `act show`.
#[derive(Clone, Debug, Args)]
pub struct ShowArgs {
    /// Payload file, or `-` for stdin.
    pub input: String,
}

/// Arguments for `act filter`.
#[derive(Clone, Debug, Args)]
pub struct FilterArgs {
    /// Payload file, or `-` for stdin.
    pub input: String,
    /// Remove an item entirely (repeatable).
    #[arg(long = "delete", value_name = "ID")]
    pub delete: Vec<String>,
    /// Leave an item out of the export (repeatable).
    #[arg(long = "drop", value_name = "ID")]
    pub drop: Vec<String>,
    /// Put an item back into the export (repeatable).
    #[arg(long = "keep", value_name = "ID")]
    pub keep: Vec<String>,
    /// Write the export here instead of stdout.
    #[arg(short, long)]
    pub out: Option<String>,
}

/// Arguments for `act review`.
#[derive(Clone, Debug, Args)]
pub struct ReviewArgs {
    /// Payload to load before the first prompt.
    pub input: Option<String>,
}

/// Arguments for `act prompt`.
#[derive(Clone, Debug, Args)]
pub struct PromptArgs {
    /// Intent text; words are joined with spaces.
    pub intent: Vec<String>,
}

/// Arguments for `act schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    #[arg(value_enum)]
    pub kind: SchemaKind,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaKind {
    Input,
    Export,
}
