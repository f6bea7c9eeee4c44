//! Inspect command implementation

use crate::api::TeamResponse;
use crate::cli::logging::log;
use crate::cli::{InspectArgs, LogLevel};
use crate::level::level_label;
use crate::team::{TeamNode, TeamTree};
use crate::view::{TreeRow, TreeView};
use std::path::Path;

/// Load and render a team hierarchy export
pub fn run_inspect(args: &InspectArgs, level: LogLevel) -> Result<(), String> {
    let tree = load_tree(&args.team)?;

    log(level, LogLevel::Normal, &format!("Team hierarchy: {} members", tree.len()));

    let mut view = TreeView::new(tree);
    if args.expand {
        view.expand_all();
    }

    for row in view.visible_rows() {
        log(level, LogLevel::Normal, &render_row(&row));
        if level == LogLevel::Verbose {
            log(
                level,
                LogLevel::Verbose,
                &format!(
                    "{}    {} | joined {}",
                    "  ".repeat(row.depth),
                    row.email,
                    joined_date(view.tree().node(&row.id))
                ),
            );
        }
    }

    if args.check_rollups {
        report_drift(view.tree(), level);
    }

    Ok(())
}

fn load_tree(path: &Path) -> Result<TeamTree, String> {
    let text =
        std::fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {e}", path.display()))?;

    // Accept the full response envelope or a bare member array.
    let roots: Vec<TeamNode> = match serde_json::from_str::<TeamResponse>(&text) {
        Ok(response) => response.data.team,
        Err(_) => serde_json::from_str(&text)
            .map_err(|e| format!("Failed to parse team JSON: {e}"))?,
    };

    TeamTree::normalize(roots).map_err(|e| format!("Invalid hierarchy: {e}"))
}

fn render_row(row: &TreeRow) -> String {
    let marker = if row.has_children {
        if row.expanded {
            "v"
        } else {
            ">"
        }
    } else {
        " "
    };
    format!(
        "{}{} [L{}] {} — ${:.2}, {} team, {:.0}% comm. ({})",
        "  ".repeat(row.depth),
        marker,
        row.level,
        row.name,
        row.investment,
        row.team_size,
        row.commission_percent,
        level_label(row.level),
    )
}

fn joined_date(node: Option<&TeamNode>) -> String {
    node.map(|n| n.joined_at.format("%d %b %Y").to_string()).unwrap_or_default()
}

fn report_drift(tree: &TeamTree, level: LogLevel) {
    let drift = tree.verify_rollups();
    if drift.is_empty() {
        log(level, LogLevel::Normal, "Rollups: backend figures match local recomputation");
        return;
    }
    log(level, LogLevel::Normal, &format!("Rollups: {} node(s) drifted", drift.len()));
    for entry in drift {
        log(
            level,
            LogLevel::Normal,
            &format!(
                "  {}: team size {} reported vs {} recomputed, total business {:.2} vs {:.2}",
                entry.id,
                entry.reported.team_size,
                entry.recomputed.team_size,
                entry.reported.total_business,
                entry.recomputed.total_business,
            ),
        );
    }
}
