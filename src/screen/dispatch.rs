use crate::error::RosterError;
use crate::screen::action::{Accent, ActionStyle, RowAction, RowActionKind, RowUpdate};
use crate::screen::state::Roster;
use tracing::debug;

/// Build the swipe actions for the row at `index`, in fixed order: Delete,
/// then the favorite toggle, then the mute toggle.
///
/// Toggle labels reflect the record's current flags, so callers must re-query
/// after every mutation rather than caching descriptors. Fails with
/// `IndexOutOfRange` when `index` no longer names a row.
pub fn actions_for(roster: &Roster, index: usize) -> Result<Vec<RowAction>, RosterError> {
    let user = roster.get(index)?;

    let favorite_label = if user.is_favorite {
        "Unfavorite"
    } else {
        "Favorite"
    };
    let mute_label = if user.is_muted { "Unmute" } else { "Mute" };

    Ok(vec![
        RowAction {
            kind: RowActionKind::Delete,
            label: "Delete",
            style: ActionStyle::Destructive,
            accent: None,
        },
        RowAction {
            kind: RowActionKind::ToggleFavorite,
            label: favorite_label,
            style: ActionStyle::Normal,
            accent: Some(Accent::Blue),
        },
        RowAction {
            kind: RowActionKind::ToggleMute,
            label: mute_label,
            style: ActionStyle::Normal,
            accent: Some(Accent::Orange),
        },
    ])
}

/// Apply one action to the roster and report what the widget must do with the
/// visual row.
///
/// A stale `index` fails with `IndexOutOfRange` before any mutation; callers
/// must re-derive indices from current list state before each dispatch.
pub fn apply(
    roster: &mut Roster,
    kind: RowActionKind,
    index: usize,
) -> Result<RowUpdate, RosterError> {
    let update = match kind {
        RowActionKind::Delete => {
            roster.remove(index)?;
            RowUpdate::Remove { index }
        }
        RowActionKind::ToggleFavorite => {
            roster.toggle_favorite(index)?;
            RowUpdate::Refresh { index }
        }
        RowActionKind::ToggleMute => {
            roster.toggle_mute(index)?;
            RowUpdate::Refresh { index }
        }
    };
    debug!(?kind, index, "applied row action");
    Ok(update)
}
