use act_config::ActConfig;
use act_core::{Action, Change, Controller, ExportPayload, LoadOptions};
use anyhow::Context;

use crate::cli::root_commands::FilterArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::input::read_input;

/// Handle `act filter`.
pub fn handle(args: &FilterArgs, config: &ActConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let raw = read_input(&args.input)?;
    let export = apply_filter(&raw, args, config.load_options())?;

    if export.is_empty() {
        tracing::warn!("no items kept; the export has an empty item list");
    }

    let rendered = match flags.format {
        OutputFormat::Raw => export.to_json()?,
        OutputFormat::Json | OutputFormat::Table => export.to_json_pretty()?,
    };

    match &args.out {
        Some(path) => {
            std::fs::write(path, format!("{rendered}\n"))
                .with_context(|| format!("failed to write export to '{path}'"))?;
            if !flags.quiet {
                eprintln!("wrote {} items to {path}", export.items.len());
            }
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

/// Load `raw`, then apply deletions, drops and keeps in that order.
pub fn apply_filter(
    raw: &str,
    args: &FilterArgs,
    options: LoadOptions,
) -> anyhow::Result<ExportPayload> {
    let mut controller = Controller::new(options);
    let update = controller.apply(Action::Load(raw.to_string()))?;
    if let Change::Loaded(report) = &update.change {
        for entry in &report.ignored {
            tracing::info!(index = entry.index, reason = %entry.reason, "skipped entry");
        }
    }

    for id in &args.delete {
        let update = controller.apply(Action::Delete(id.clone()))?;
        if update.change == Change::Deleted(false) {
            tracing::warn!(%id, "no item with this id to delete");
        }
    }

    for (ids, keep) in [(&args.drop, false), (&args.keep, true)] {
        for id in ids {
            let update = controller.apply(Action::SetKept {
                id: id.clone(),
                keep,
            })?;
            if !update.session.contains(id) {
                tracing::warn!(%id, keep, "no item with this id");
            }
        }
    }

    Ok(controller.session().export_filtered())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const PAYLOAD: &str = r#"{"seed_intent":"Ship v1","items":[{"id":"a","titre":"A"},{"titre":"no id"},{"id":"b","titre":"B"},{"id":"c"}]}"#;

    fn owned(ids: &[&str]) -> Vec<String> {
        ids.iter().map(ToString::to_string).collect()
    }

    fn args(delete: &[&str], drop: &[&str], keep: &[&str]) -> FilterArgs {
        FilterArgs {
            input: "-".into(),
            delete: owned(delete),
            drop: owned(drop),
            keep: owned(keep),
            out: None,
        }
    }

    fn export_ids(export: &ExportPayload) -> Vec<&str> {
        export.items.iter().map(|item| item.id.as_str()).collect()
    }

    #[test]
    fn no_operations_exports_everything() {
        let export = apply_filter(PAYLOAD, &args(&[], &[], &[]), LoadOptions::default()).unwrap();
        assert_eq!(export.seed_intent, "Ship v1");
        assert_eq!(export_ids(&export), vec!["a", "b", "c"]);
    }

    #[test]
    fn delete_and_drop_remove_items_from_export() {
        let export =
            apply_filter(PAYLOAD, &args(&["a"], &["c"], &[]), LoadOptions::default()).unwrap();
        assert_eq!(
            export.to_json().unwrap(),
            r#"{"seed_intent":"Ship v1","items":[{"id":"b","titre":"B"}]}"#
        );
    }

    #[test]
    fn keep_wins_over_drop_but_not_over_delete() {
        let export = apply_filter(
            PAYLOAD,
            &args(&["a"], &["b"], &["b", "a"]),
            LoadOptions::default(),
        )
        .unwrap();
        assert_eq!(export_ids(&export), vec!["b", "c"]);
    }

    #[test]
    fn opt_in_mode_exports_only_kept() {
        let options = LoadOptions {
            keep_by_default: false,
        };
        let export = apply_filter(PAYLOAD, &args(&[], &[], &["c"]), options).unwrap();
        assert_eq!(export_ids(&export), vec!["c"]);
    }

    #[test]
    fn invalid_payload_is_an_error() {
        let error = apply_filter("not json", &args(&[], &[], &[]), LoadOptions::default())
            .unwrap_err();
        assert!(error.to_string().starts_with("Invalid JSON"));
    }
}
