use act_config::ActConfig;
use act_core::prompt::{build_prompt, build_prompt_with};

use crate::cli::root_commands::PromptArgs;

/// Handle `act prompt`.
pub fn handle(args: &PromptArgs, config: &ActConfig) -> anyhow::Result<()> {
    let intent = args.intent.join(" ");
    let prompt = match config.prompt.load_template()? {
        Some(template) => build_prompt_with(&template, &intent),
        None => build_prompt(&intent),
    };
    println!("{prompt}");
    Ok(())
}
