//! Headless replay: apply actions from the command line and print the view.

use crate::settings::Settings;
use anyhow::{Context, Result, anyhow};
use strictly_timetravel::{Action, Game, Position, SessionView};
use tracing::{debug, info, instrument};

/// Parses one command-line token into an action.
///
/// `jN` (or `jump:N`) jumps to step N; anything else names a square by its
/// number (1-9, as printed on empty squares) or label.
#[instrument]
pub fn parse_action(token: &str) -> Result<Action> {
    let token = token.trim();
    let lower = token.to_lowercase();

    if let Some(step) = lower.strip_prefix("jump:").or_else(|| lower.strip_prefix('j')) {
        let step = step
            .parse::<usize>()
            .with_context(|| format!("Invalid jump target in `{}`", token))?;
        return Ok(Action::JumpTo(step));
    }

    let position = match token.parse::<usize>() {
        Ok(number) => number.checked_sub(1).and_then(Position::from_index),
        Err(_) => Position::from_label_or_number(token),
    };

    position
        .map(Action::RecordMove)
        .ok_or_else(|| anyhow!("Unknown square `{}` (use 1-9 or a label like `center`)", token))
}

/// Applies `tokens` to a fresh game and returns the last rendered view.
#[instrument(skip(settings))]
pub fn replay(tokens: &[String], settings: &Settings) -> Result<SessionView> {
    let mut latest = None;
    {
        let mut game = Game::with_draw_policy(
            |view: &SessionView| latest = Some(view.clone()),
            settings.draw_policy(),
        );

        for token in tokens {
            let action = parse_action(token)?;
            let changed = game
                .dispatch(action)
                .with_context(|| format!("Failed to apply `{}`", token))?;
            debug!(%action, changed, "Action applied");
        }
    }

    let view = latest.ok_or_else(|| anyhow!("Game never rendered"))?;
    info!(status = %view.status, "Replay finished");
    Ok(view)
}

/// Formats a view for the terminal.
pub fn format_view(view: &SessionView) -> String {
    let mut out = format!("{}\n\n{}\n\n", view.board.display(), view.status);
    for entry in &view.moves {
        let marker = if entry.step == view.cursor { '>' } else { ' ' };
        out.push_str(&format!("{} {}\n", marker, entry.label));
    }
    out
}

/// Runs the `replay` command.
#[instrument(skip(settings))]
pub fn run(tokens: &[String], json: bool, settings: &Settings) -> Result<()> {
    let view = replay(tokens, settings)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", format_view(&view));
    }
    Ok(())
}
