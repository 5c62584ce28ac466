use act_core::Session;

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Column headers of the item table.
pub const ITEM_HEADERS: [&str; 6] = ["id", "kept", "priority", "minutes", "effort", "title"];

/// One row per item, in sequence order.
#[must_use]
pub fn item_rows(session: &Session) -> Vec<Vec<String>> {
    session
        .items()
        .iter()
        .map(|item| {
            vec![
                item.id.clone(),
                if session.is_kept(&item.id) { "yes" } else { "no" }.to_string(),
                item.priority()
                    .map_or_else(|| "-".to_string(), |priority| priority.to_string()),
                item.estimated_minutes()
                    .map_or_else(|| "-".to_string(), |minutes| minutes.to_string()),
                item.effort()
                    .map_or_else(|| "-".to_string(), |effort| effort.to_string()),
                item.title().unwrap_or("-").to_string(),
            ]
        })
        .collect()
}

/// Render a simple aligned table for string rows.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.len())
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| pad(&truncate_text(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(header_line.chars().count());

    let row_lines = rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let truncated = truncate_text(value, *width);
                let numeric = looks_numeric(&truncated);
                let padded = pad(&truncated, *width, numeric);
                if options.color {
                    colorize(&truncated, padded)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    });

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line.trim_end().to_string());
    lines.push(divider);
    lines.extend(row_lines);
    lines.join("\n")
}

/// Shrink the widest columns until the table fits, never below the header.
fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let candidate = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > headers[*idx].len().max(6))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);

        let Some(idx) = candidate else {
            break;
        };

        widths[idx] -= 1;
        total -= 1;
    }
}

pub fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.chars().all(|ch| ch.is_ascii_digit())
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(value.chars().count()));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

/// ANSI code for cells that carry a priority or kept flag.
pub fn ansi_code(value: &str) -> Option<&'static str> {
    match value {
        "high" => Some("31"),
        "medium" => Some("33"),
        "low" => Some("34"),
        "yes" => Some("32"),
        "no" => Some("2"),
        _ => None,
    }
}

fn colorize(value: &str, padded: String) -> String {
    match ansi_code(value.trim()) {
        Some(code) => format!("\u{1b}[{code}m{padded}\u{1b}[0m"),
        None => padded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn alignment_handles_mixed_widths() {
        let rows = vec![
            vec!["it-1".to_string(), "yes".to_string(), "short".to_string()],
            vec![
                "it-200".to_string(),
                "no".to_string(),
                "a much longer title".to_string(),
            ],
        ];

        let table = render_table(&["id", "kept", "title"], &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("id"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[3].ends_with("a much longer title"));
    }

    #[test]
    fn max_width_truncates_widest_column() {
        let rows = vec![vec!["a".to_string(), "x".repeat(80)]];
        let table = render_table(
            &["id", "title"],
            &rows,
            TableOptions {
                max_width: Some(40),
                color: false,
            },
        );
        let last = table.lines().last().unwrap();
        assert!(last.chars().count() <= 40);
        assert!(last.ends_with('…'));
    }

    #[test]
    fn color_wraps_priority_cells() {
        let rows = vec![vec!["a".to_string(), "high".to_string()]];
        let table = render_table(
            &["id", "priority"],
            &rows,
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        assert!(table.contains("\u{1b}[31mhigh"));
    }

    #[test]
    fn item_rows_mark_kept_state() {
        let (mut session, _) =
            Session::load(r#"{"items":[{"id":"a","priorite":"haute","temps_estime_min":15},{"id":"b"}]}"#)
                .unwrap();
        session.set_kept("b", false);
        let rows = item_rows(&session);
        assert_eq!(rows[0], vec!["a", "yes", "high", "15", "-", "-"]);
        assert_eq!(rows[1][1], "no");
    }
}
