use std::cmp::Ordering;
use std::collections::HashMap;

use uuid::Uuid;

use crate::dto::leaderboard::LeaderboardRow;
use crate::models::{Player, WeekEntry};

/// Joins the full roster against one week's entries and ranks the result.
///
/// Every player yields exactly one row, with null scores when they have no
/// entry. Should the entries hold more than one row for a player, the last
/// one seen is used. Rows are ordered by combined score ascending with
/// unscored players last, then by name.
pub fn build_leaderboard(players: &[Player], entries: &[WeekEntry]) -> Vec<LeaderboardRow> {
    let by_player: HashMap<Uuid, &WeekEntry> = entries
        .iter()
        .map(|entry| (entry.player_id, entry))
        .collect();

    let mut rows: Vec<LeaderboardRow> = players
        .iter()
        .map(|player| {
            let entry = by_player.get(&player.id);

            LeaderboardRow {
                player_id: player.id,
                player_name: player.name.clone(),
                player_score: entry.and_then(|e| e.your_score),
                pro_score: entry.and_then(|e| e.pro_score),
                combined: entry.and_then(|e| e.combined()),
                pga_golfer: entry.and_then(|e| e.pga_golfer.clone()),
            }
        })
        .collect();

    rows.sort_by(compare_rows);
    rows
}

/// The top row of a ranked leaderboard, if anyone has a combined score.
pub fn leader(rows: &[LeaderboardRow]) -> Option<&LeaderboardRow> {
    rows.first().filter(|row| row.combined.is_some())
}

fn compare_rows(a: &LeaderboardRow, b: &LeaderboardRow) -> Ordering {
    let by_score = match (a.combined, b.combined) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };

    by_score.then_with(|| a.player_name.cmp(&b.player_name))
}
