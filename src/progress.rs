use crate::models::{DailySnapshot, STEP_GOAL, WATER_GOAL};

// 5 habits + the water goal + the step goal.
const MAIN_GOAL_TOTAL: u32 = 7;
const SIDE_QUEST_TOTAL: u32 = 4;

/// Share of the main protocol completed today: every daily habit counts for
/// one, plus one each for hitting the water and step goals.
pub fn main_protocol_percent(snapshot: &DailySnapshot) -> u8 {
    let mut completed = snapshot.daily_habits.completed();
    if snapshot.water_count >= WATER_GOAL {
        completed += 1;
    }
    if snapshot.steps >= STEP_GOAL {
        completed += 1;
    }
    percent(completed, MAIN_GOAL_TOTAL)
}

pub fn side_quest_percent(snapshot: &DailySnapshot) -> u8 {
    percent(snapshot.side_quests.completed(), SIDE_QUEST_TOTAL)
}

// Rounds half away from zero (`f64::round`), so 1/7 lands on 14 rather
// than 15. Clamped to 0..=100 for display.
fn percent(completed: u32, total: u32) -> u8 {
    let raw = (f64::from(completed) * 100.0 / f64::from(total)).round();
    raw.clamp(0.0, 100.0) as u8
}
