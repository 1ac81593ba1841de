use log::info;

use crate::{GameEvent, Events, Rally, Score, Side};

/// Credit a point to `scorer`: the rally ends and the multiplier drops back
/// to baseline
pub fn award_point(scorer: Side, score: &mut Score, rally: &mut Rally, events: &mut Events) {
    score.increment(scorer);
    rally.reset();
    events.turn_on(match scorer {
        Side::Left => GameEvent::LeftScoreHit,
        Side::Right => GameEvent::RightScoreHit,
    });
    info!(
        "{scorer} scores! Left: {} Right: {}",
        score.left, score.right
    );
}

/// Keep the persistent "score higher" flags in line with the score.
/// A tie leaves both flags as they were.
pub fn update_leader_flags(score: &Score, events: &mut Events) {
    match score.leader() {
        Some(Side::Right) => {
            events.turn_on(GameEvent::RightScoreHigher);
            events.turn_off(GameEvent::LeftScoreHigher);
        }
        Some(Side::Left) => {
            events.turn_off(GameEvent::RightScoreHigher);
            events.turn_on(GameEvent::LeftScoreHigher);
        }
        None => {}
    }
}
