//! Stock quests and JSON quest loading.

use crate::error::QuestResult;
use crate::quest::Quest;

/// The quests every new game starts with.
pub fn builtin_quests() -> Vec<Quest> {
    vec![
        Quest::new("quest_1", "Goblin Slayer")
            .with_description("Defeat 10 goblins threatening the village.")
            .with_reward(100, 50)
            .with_reward_item("potion_hp50")
            .with_giver("Village Elder")
            .with_objective("Goblin x 10"),
        Quest::new("quest_2", "Dragon Hunt")
            .with_description("Slay the fire dragon in the mountains.")
            .with_reward(500, 200)
            .with_reward_item("iron_sword")
            .with_reward_item("buff_atk10")
            .with_giver("Knight Commander")
            .requires("quest_1")
            .with_objective("Fire Dragon x 1"),
        Quest::new("quest_3", "Treasure Hunt")
            .with_description("Find the hidden treasure in the forest.")
            .with_reward(300, 100)
            .with_reward_item("golden_ring")
            .with_giver("Treasure Hunter")
            .with_objective("Treasure x 1"),
    ]
}

/// Parse a JSON array of quest definitions.
///
/// Completion flags in the input are kept; registering the quests in a
/// ledger resets them.
pub fn quests_from_json(json: &str) -> QuestResult<Vec<Quest>> {
    Ok(serde_json::from_str(json)?)
}
