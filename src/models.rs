use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const WATER_GOAL: u8 = 4;
pub const STEP_GOAL: u32 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HabitKey {
    Creatine,
    NoSugar,
    Protein,
    Study,
    ColdShower,
}

impl HabitKey {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "creatine" => Some(Self::Creatine),
            "noSugar" => Some(Self::NoSugar),
            "protein" => Some(Self::Protein),
            "study" => Some(Self::Study),
            "coldShower" => Some(Self::ColdShower),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideQuestKey {
    Skincare,
    NoSwiggy,
    NoNailBiting,
    Reading,
}

impl SideQuestKey {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "skincare" => Some(Self::Skincare),
            "noSwiggy" => Some(Self::NoSwiggy),
            "noNailBiting" => Some(Self::NoNailBiting),
            "reading" => Some(Self::Reading),
            _ => None,
        }
    }
}

/// The five daily non-negotiables. A struct rather than a map so every key
/// is always present with a boolean value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DailyHabits {
    pub creatine: bool,
    pub no_sugar: bool,
    pub protein: bool,
    pub study: bool,
    pub cold_shower: bool,
}

impl DailyHabits {
    pub fn toggle(&mut self, key: HabitKey) {
        let flag = match key {
            HabitKey::Creatine => &mut self.creatine,
            HabitKey::NoSugar => &mut self.no_sugar,
            HabitKey::Protein => &mut self.protein,
            HabitKey::Study => &mut self.study,
            HabitKey::ColdShower => &mut self.cold_shower,
        };
        *flag = !*flag;
    }

    pub fn completed(&self) -> u32 {
        [
            self.creatine,
            self.no_sugar,
            self.protein,
            self.study,
            self.cold_shower,
        ]
        .into_iter()
        .filter(|&done| done)
        .count() as u32
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SideQuests {
    pub skincare: bool,
    pub no_swiggy: bool,
    pub no_nail_biting: bool,
    pub reading: bool,
}

impl SideQuests {
    pub fn toggle(&mut self, key: SideQuestKey) {
        let flag = match key {
            SideQuestKey::Skincare => &mut self.skincare,
            SideQuestKey::NoSwiggy => &mut self.no_swiggy,
            SideQuestKey::NoNailBiting => &mut self.no_nail_biting,
            SideQuestKey::Reading => &mut self.reading,
        };
        *flag = !*flag;
    }

    pub fn completed(&self) -> u32 {
        [self.skincare, self.no_swiggy, self.no_nail_biting, self.reading]
            .into_iter()
            .filter(|&done| done)
            .count() as u32
    }
}

/// One day of recorded progress. Exactly one of these exists in memory at a
/// time; it is replaced wholesale on manual reset or day rollover.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DailySnapshot {
    pub date: String,
    pub water_count: u8,
    pub steps: u32,
    pub daily_habits: DailyHabits,
    pub side_quests: SideQuests,
}

impl Default for DailySnapshot {
    fn default() -> Self {
        Self::fresh(String::new())
    }
}

impl DailySnapshot {
    pub fn fresh(date: String) -> Self {
        Self {
            date,
            water_count: 0,
            steps: 0,
            daily_habits: DailyHabits::default(),
            side_quests: SideQuests::default(),
        }
    }

    /// Rebuilds a snapshot from a stored payload, merging recognized fields
    /// onto defaults so every habit key ends up present. Returns `None` when
    /// the payload was not recorded today; nothing is salvaged from a stale
    /// snapshot.
    pub fn restore(stored: &Value, today: &str) -> Option<Self> {
        let date = stored.get("date").and_then(|value| value.as_str())?;
        if date != today {
            return None;
        }

        Some(Self {
            date: today.to_string(),
            water_count: field::<u8>(stored, "waterCount").min(WATER_GOAL),
            steps: field(stored, "steps"),
            daily_habits: field(stored, "dailyHabits"),
            side_quests: field(stored, "sideQuests"),
        })
    }

    /// The step control is a binary toggle: below the goal it records the
    /// given target, at or above the goal it clears back to zero.
    pub fn set_steps(&mut self, target: u32) {
        self.steps = if self.steps >= STEP_GOAL { 0 } else { target };
    }

    /// Fill-to-level water control. Tapping glass `g` fills up to `g`;
    /// tapping the currently topmost filled glass empties it back to `g - 1`.
    /// Callers validate `glass` against `1..=WATER_GOAL`.
    pub fn set_water(&mut self, glass: u8) {
        self.water_count = if self.water_count == glass {
            glass - 1
        } else {
            glass
        };
    }

    pub fn toggle_habit(&mut self, key: HabitKey) {
        self.daily_habits.toggle(key);
    }

    pub fn toggle_side_quest(&mut self, key: SideQuestKey) {
        self.side_quests.toggle(key);
    }

    /// Clears every recorded value while keeping the current date tag.
    pub fn reset(&mut self) {
        *self = Self::fresh(std::mem::take(&mut self.date));
    }

    /// Discards the snapshot in favor of a fresh one when the recorded date
    /// no longer matches today. Returns whether a reset happened.
    pub fn roll_over(&mut self, today: &str) -> bool {
        if self.date == today {
            return false;
        }
        *self = Self::fresh(today.to_string());
        true
    }
}

fn field<T>(stored: &Value, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    stored
        .get(key)
        .cloned()
        .and_then(|value| serde_json::from_value(value).ok())
        .unwrap_or_default()
}

#[derive(Debug, Deserialize)]
pub struct StepsRequest {
    pub target: u32,
}

#[derive(Debug, Deserialize)]
pub struct WaterRequest {
    pub glass: u8,
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub key: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayResponse {
    pub date: String,
    pub water_count: u8,
    pub steps: u32,
    pub daily_habits: DailyHabits,
    pub side_quests: SideQuests,
    pub main_protocol_percent: u8,
    pub side_quest_percent: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const TODAY: &str = "2026-08-08";

    fn snapshot() -> DailySnapshot {
        DailySnapshot::fresh(TODAY.to_string())
    }

    #[test]
    fn water_fills_to_tapped_glass() {
        let mut snap = snapshot();
        snap.set_water(2);
        assert_eq!(snap.water_count, 2);
        snap.set_water(4);
        assert_eq!(snap.water_count, 4);
    }

    #[test]
    fn water_tap_on_top_glass_undoes_it() {
        let mut snap = snapshot();
        snap.set_water(2);
        snap.set_water(2);
        assert_eq!(snap.water_count, 1);
        snap.set_water(1);
        assert_eq!(snap.water_count, 0);
    }

    #[test]
    fn water_jump_down_from_higher_level() {
        let mut snap = snapshot();
        snap.set_water(4);
        snap.set_water(1);
        assert_eq!(snap.water_count, 1);
    }

    #[test]
    fn steps_toggle_between_zero_and_goal() {
        let mut snap = snapshot();
        snap.set_steps(10_000);
        assert_eq!(snap.steps, 10_000);
        snap.set_steps(10_000);
        assert_eq!(snap.steps, 0);
    }

    #[test]
    fn habit_toggle_flips_only_that_flag() {
        let mut snap = snapshot();
        snap.toggle_habit(HabitKey::Creatine);
        assert!(snap.daily_habits.creatine);
        assert!(!snap.daily_habits.no_sugar);
        snap.toggle_habit(HabitKey::Creatine);
        assert!(!snap.daily_habits.creatine);
    }

    #[test]
    fn side_quest_toggle_flips_only_that_flag() {
        let mut snap = snapshot();
        snap.toggle_side_quest(SideQuestKey::Reading);
        assert!(snap.side_quests.reading);
        assert!(!snap.side_quests.skincare);
    }

    #[test]
    fn unknown_keys_do_not_parse() {
        assert_eq!(HabitKey::parse("gym"), None);
        assert_eq!(HabitKey::parse("Creatine"), None);
        assert_eq!(SideQuestKey::parse("noSugar"), None);
    }

    #[test]
    fn reset_clears_everything_but_keeps_date() {
        let mut snap = snapshot();
        snap.set_water(4);
        snap.set_steps(10_000);
        snap.toggle_habit(HabitKey::Study);
        snap.toggle_side_quest(SideQuestKey::Skincare);

        snap.reset();
        assert_eq!(snap, snapshot());
    }

    #[test]
    fn roll_over_discards_stale_snapshot() {
        let mut snap = DailySnapshot::fresh("2026-08-07".to_string());
        snap.set_water(3);
        snap.toggle_habit(HabitKey::Protein);

        assert!(snap.roll_over(TODAY));
        assert_eq!(snap, snapshot());
    }

    #[test]
    fn roll_over_same_day_keeps_state() {
        let mut snap = snapshot();
        snap.set_water(3);
        assert!(!snap.roll_over(TODAY));
        assert_eq!(snap.water_count, 3);
    }

    #[test]
    fn restore_round_trips_a_full_payload() {
        let mut snap = snapshot();
        snap.set_water(3);
        snap.set_steps(10_000);
        snap.toggle_habit(HabitKey::NoSugar);
        snap.toggle_side_quest(SideQuestKey::NoSwiggy);

        let stored = serde_json::to_value(&snap).unwrap();
        assert_eq!(DailySnapshot::restore(&stored, TODAY), Some(snap));
    }

    #[test]
    fn restore_defaults_missing_habit_keys() {
        let stored = json!({
            "date": TODAY,
            "dailyHabits": { "creatine": true },
        });

        let snap = DailySnapshot::restore(&stored, TODAY).unwrap();
        assert!(snap.daily_habits.creatine);
        assert!(!snap.daily_habits.no_sugar);
        assert!(!snap.daily_habits.protein);
        assert!(!snap.daily_habits.study);
        assert!(!snap.daily_habits.cold_shower);
        assert_eq!(snap.water_count, 0);
        assert_eq!(snap.steps, 0);
        assert_eq!(snap.side_quests, SideQuests::default());
    }

    #[test]
    fn restore_rejects_stale_date() {
        let stored = json!({ "date": "2026-08-07", "waterCount": 4 });
        assert_eq!(DailySnapshot::restore(&stored, TODAY), None);
    }

    #[test]
    fn restore_rejects_missing_date() {
        let stored = json!({ "waterCount": 4 });
        assert_eq!(DailySnapshot::restore(&stored, TODAY), None);
    }

    #[test]
    fn restore_clamps_water_into_range() {
        let stored = json!({ "date": TODAY, "waterCount": 9 });
        let snap = DailySnapshot::restore(&stored, TODAY).unwrap();
        assert_eq!(snap.water_count, WATER_GOAL);
    }

    #[test]
    fn restore_defaults_wrong_shaped_fields() {
        let stored = json!({
            "date": TODAY,
            "waterCount": "three",
            "steps": -5,
            "dailyHabits": "all of them",
            "sideQuests": { "reading": true },
        });

        let snap = DailySnapshot::restore(&stored, TODAY).unwrap();
        assert_eq!(snap.water_count, 0);
        assert_eq!(snap.steps, 0);
        assert_eq!(snap.daily_habits, DailyHabits::default());
        assert!(snap.side_quests.reading);
    }

    #[test]
    fn restore_ignores_unknown_extra_fields() {
        let stored = json!({
            "date": TODAY,
            "steps": 10_000,
            "streak": 12,
        });

        let snap = DailySnapshot::restore(&stored, TODAY).unwrap();
        assert_eq!(snap.steps, 10_000);
    }
}
