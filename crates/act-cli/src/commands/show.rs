use act_config::ActConfig;
use act_core::Session;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ShowArgs;
use crate::commands::shared::input::read_input;
use crate::output::render_session;

/// Handle `act show`.
pub fn handle(args: &ShowArgs, config: &ActConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let raw = read_input(&args.input)?;
    let (session, report) = Session::load_with(&raw, config.load_options())?;

    if !report.ignored.is_empty() {
        tracing::warn!(
            ignored = report.ignored.len(),
            "some entries were skipped"
        );
    }

    println!("{}", render_session(&session, flags.format)?);
    Ok(())
}
