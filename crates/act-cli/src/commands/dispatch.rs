use act_config::ActConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, config: &ActConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Show(args) => commands::show::handle(&args, config, flags),
        Commands::Filter(args) => commands::filter::handle(&args, config, flags),
        Commands::Review(args) => commands::review::handle(&args, config, flags),
        Commands::Prompt(args) => commands::prompt::handle(&args, config),
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
