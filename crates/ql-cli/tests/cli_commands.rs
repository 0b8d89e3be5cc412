//! CLI command integration tests.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ql() -> Command {
    Command::cargo_bin("ql").unwrap()
}

/// Create a temp directory with a fresh save for "Kaito".
fn new_game() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let save = dir.path().join("save.json");
    ql().args(["new", "Kaito", "--class", "Soul Samurai", "--save"])
        .arg(&save)
        .assert()
        .success();
    (dir, save)
}

/// Run `ql <args> --save <save>`.
fn run(save: &Path, args: &[&str]) -> assert_cmd::assert::Assert {
    ql().args(args).arg("--save").arg(save).assert()
}

fn saved_character(save: &Path) -> serde_json::Value {
    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(save).unwrap()).unwrap();
    json["character"].clone()
}

// ---------------------------------------------------------------------------
// new / show
// ---------------------------------------------------------------------------

#[test]
fn new_creates_save() {
    let dir = TempDir::new().unwrap();
    let save = dir.path().join("save.json");
    ql().args(["new", "Kaito", "--save"])
        .arg(&save)
        .assert()
        .success()
        .stdout(predicate::str::contains("Kaito").and(predicate::str::contains("3 quests")));

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&save).unwrap()).unwrap();
    assert!(json["saved_at"].is_string());
    assert_eq!(json["character"]["level"], 1);
    assert_eq!(json["quests"]["quests"].as_array().unwrap().len(), 3);
}

#[test]
fn new_refuses_to_overwrite() {
    let (_dir, save) = new_game();
    run(&save, &["new", "Other"])
        .failure()
        .stderr(predicate::str::contains("already exists"));
    run(&save, &["new", "Other", "--force"]).success();
    assert_eq!(saved_character(&save)["name"], "Other");
}

#[test]
fn new_with_custom_quests() {
    let dir = TempDir::new().unwrap();
    let quests = dir.path().join("quests.json");
    fs::write(
        &quests,
        r#"[{"quest_id": "rats", "title": "Cellar Rats", "reward_exp": 20, "objectives": ["Rat x 5"]}]"#,
    )
    .unwrap();
    let save = dir.path().join("save.json");
    ql().args(["new", "Kaito", "--quests"])
        .arg(&quests)
        .arg("--save")
        .arg(&save)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 quests"));

    run(&save, &["quests"])
        .success()
        .stdout(predicate::str::contains("Cellar Rats"));
}

#[test]
fn new_rejects_duplicate_quest_ids() {
    let dir = TempDir::new().unwrap();
    let quests = dir.path().join("quests.json");
    fs::write(
        &quests,
        r#"[{"quest_id": "a", "title": "A"}, {"quest_id": "a", "title": "B"}]"#,
    )
    .unwrap();
    ql().args(["new", "Kaito", "--quests"])
        .arg(&quests)
        .arg("--save")
        .arg(dir.path().join("save.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate quest id"));
}

#[test]
fn show_displays_character_sheet() {
    let (_dir, save) = new_game();
    run(&save, &["show"]).success().stdout(
        predicate::str::contains("Kaito")
            .and(predicate::str::contains("Soul Samurai"))
            .and(predicate::str::contains("100/100"))
            .and(predicate::str::contains("Defense")),
    );
}

#[test]
fn show_without_save_fails() {
    let dir = TempDir::new().unwrap();
    run(&dir.path().join("missing.json"), &["show"])
        .failure()
        .stderr(predicate::str::contains("cannot read save"));
}

// ---------------------------------------------------------------------------
// quests
// ---------------------------------------------------------------------------

#[test]
fn quests_lists_states() {
    let (_dir, save) = new_game();
    run(&save, &["quests"]).success().stdout(
        predicate::str::contains("Goblin Slayer")
            .and(predicate::str::contains("locked"))
            .and(predicate::str::contains("available")),
    );
}

#[test]
fn quests_filter_by_giver() {
    let (_dir, save) = new_game();
    run(&save, &["quests", "--giver", "knight commander"])
        .success()
        .stdout(predicate::str::contains("Dragon Hunt").and(predicate::str::contains("Goblin").not()));
}

#[test]
fn accept_locked_quest_fails() {
    let (_dir, save) = new_game();
    run(&save, &["accept", "quest_2"])
        .failure()
        .stderr(predicate::str::contains("prerequisites not completed"));
    run(&save, &["accept", "quest_1"])
        .success()
        .stdout(predicate::str::contains("Goblin Slayer"));
    run(&save, &["show"])
        .success()
        .stdout(predicate::str::contains("Active quests"));
}

#[test]
fn complete_quest_flow() {
    let (_dir, save) = new_game();
    run(&save, &["complete", "quest_1"])
        .failure()
        .stderr(predicate::str::contains("objectives not completed"));

    run(&save, &["objective", "Goblin x 10"])
        .success()
        .stdout(predicate::str::contains("can be turned in"));
    run(&save, &["complete", "quest_1"]).success().stdout(
        predicate::str::contains("+100 EXP, +50 gold")
            .and(predicate::str::contains("potion_hp50"))
            .and(predicate::str::contains("leveled up to 2!")),
    );

    run(&save, &["complete", "quest_1"])
        .failure()
        .stderr(predicate::str::contains("already completed"));
    let hero = saved_character(&save);
    assert_eq!(hero["gold"], 50);
    assert_eq!(hero["level"], 2);
}

#[test]
fn complete_with_unknown_reward_item_warns() {
    let (_dir, save) = new_game();
    run(&save, &["objective", "Treasure x 1"]).success();
    run(&save, &["complete", "quest_3"])
        .success()
        .stdout(predicate::str::contains("golden_ring").and(predicate::str::contains("+300 EXP")));
    assert_eq!(saved_character(&save)["gold"], 100);
}

#[test]
fn complete_unknown_quest_fails() {
    let (_dir, save) = new_game();
    run(&save, &["complete", "quest_99"])
        .failure()
        .stderr(predicate::str::contains("no such quest"));
}

// ---------------------------------------------------------------------------
// exp / damage / heal
// ---------------------------------------------------------------------------

#[test]
fn exp_levels_up() {
    let (_dir, save) = new_game();
    run(&save, &["exp", "250"])
        .success()
        .stdout(predicate::str::contains("leveled up to 3!"));
    let hero = saved_character(&save);
    assert_eq!(hero["level"], 3);
    assert_eq!(hero["experience"], 25);
    assert_eq!(hero["experience_to_next"], 156);
}

#[test]
fn negative_exp_rejected() {
    let (_dir, save) = new_game();
    run(&save, &["exp", "-5"])
        .failure()
        .stderr(predicate::str::contains("invalid amount"));
    assert_eq!(saved_character(&save)["experience"], 0);
}

#[test]
fn damage_and_heal() {
    let (_dir, save) = new_game();
    run(&save, &["damage", "20"])
        .success()
        .stdout(predicate::str::contains("took 12 damage (88 HP left)"));
    run(&save, &["heal", "50"])
        .success()
        .stdout(predicate::str::contains("healed 12 HP (100 HP)"));
    run(&save, &["heal", "-1"])
        .failure()
        .stderr(predicate::str::contains("invalid amount"));
}

#[test]
fn lethal_damage_defeats() {
    let (_dir, save) = new_game();
    run(&save, &["damage", "500"])
        .success()
        .stdout(predicate::str::contains("has been defeated"));
}

// ---------------------------------------------------------------------------
// equipment / inventory / crafting
// ---------------------------------------------------------------------------

#[test]
fn equip_and_unequip() {
    let (_dir, save) = new_game();
    run(&save, &["equip", "iron_sword"])
        .success()
        .stdout(predicate::str::contains("Equipped Iron Sword"));
    run(&save, &["show"])
        .success()
        .stdout(predicate::str::contains("Equipment"));
    run(&save, &["unequip", "weapon"])
        .success()
        .stdout(predicate::str::contains("Removed iron_sword"));
    run(&save, &["unequip", "weapon"])
        .failure()
        .stderr(predicate::str::contains("nothing equipped"));
}

#[test]
fn equip_non_equipment_fails() {
    let (_dir, save) = new_game();
    run(&save, &["equip", "potion_hp50"])
        .failure()
        .stderr(predicate::str::contains("cannot be equipped"));
    run(&save, &["unequip", "tail"])
        .failure()
        .stderr(predicate::str::contains("unknown equipment slot"));
}

#[test]
fn give_and_craft() {
    let (_dir, save) = new_game();
    run(&save, &["craft", "iron_blade"])
        .failure()
        .stderr(predicate::str::contains("missing materials"));

    run(&save, &["give", "iron_shard", "-n", "3"])
        .success()
        .stdout(predicate::str::contains("3 carried"));
    run(&save, &["give", "wood"]).success();
    run(&save, &["craft", "iron_blade"])
        .success()
        .stdout(predicate::str::contains("Crafted Iron Sword"));

    let hero = saved_character(&save);
    assert_eq!(hero["inventory"]["iron_sword"], 1);
    assert!(hero["inventory"].get("iron_shard").is_none());
}

#[test]
fn give_caps_at_stack_limit() {
    let (_dir, save) = new_game();
    run(&save, &["give", "potion_hp50", "-n", "150"])
        .success()
        .stdout(predicate::str::contains("99 carried").and(predicate::str::contains("51 did not fit")));
    run(&save, &["give", "potion_hp50"])
        .failure()
        .stderr(predicate::str::contains("stack limit 99"));
    assert_eq!(saved_character(&save)["inventory"]["potion_hp50"], 99);
}

#[test]
fn give_unknown_item_fails() {
    let (_dir, save) = new_game();
    run(&save, &["give", "golden_ring"])
        .failure()
        .stderr(predicate::str::contains("unknown item"));
}

// ---------------------------------------------------------------------------
// use / buy / defeat
// ---------------------------------------------------------------------------

#[test]
fn use_potion_heals() {
    let (_dir, save) = new_game();
    run(&save, &["give", "potion_hp50"]).success();
    run(&save, &["damage", "68"]).success();
    run(&save, &["use", "potion_hp50"]).success().stdout(
        predicate::str::contains("used Healing Potion").and(predicate::str::contains("healed 50 HP (90 HP)")),
    );
    let hero = saved_character(&save);
    assert_eq!(hero["hp"], 90);
    assert!(hero["inventory"].get("potion_hp50").is_none());
}

#[test]
fn use_tonic_only_in_battle() {
    let (_dir, save) = new_game();
    run(&save, &["give", "buff_atk10"]).success();
    run(&save, &["use", "buff_atk10"])
        .failure()
        .stderr(predicate::str::contains("cannot be used outside battle"));
    assert_eq!(saved_character(&save)["inventory"]["buff_atk10"], 1);

    run(&save, &["use", "buff_atk10", "--battle"])
        .success()
        .stdout(predicate::str::contains("is now affected by Attack Tonic"));
    let hero = saved_character(&save);
    assert_eq!(hero["status_effects"][0]["bonus"]["attack"], 10);
}

#[test]
fn use_missing_or_unusable_item_fails() {
    let (_dir, save) = new_game();
    run(&save, &["use", "potion_hp50"])
        .failure()
        .stderr(predicate::str::contains("not enough 'potion_hp50'"));
    run(&save, &["give", "wood"]).success();
    run(&save, &["use", "wood"])
        .failure()
        .stderr(predicate::str::contains("cannot be used"));
}

#[test]
fn buy_needs_gold() {
    let (_dir, save) = new_game();
    run(&save, &["buy", "potion_hp50"])
        .failure()
        .stderr(predicate::str::contains("insufficient funds: need 50, have 0"));
    let hero = saved_character(&save);
    assert_eq!(hero["gold"], 0);
    assert!(hero["inventory"].get("potion_hp50").is_none());

    run(&save, &["objective", "Goblin x 10"]).success();
    run(&save, &["complete", "quest_1"]).success();
    run(&save, &["buy", "wood", "-n", "4"])
        .success()
        .stdout(predicate::str::contains("Bought 4 x Wood for 20 gold (30 gold left)"));
    assert_eq!(saved_character(&save)["inventory"]["wood"], 4);
}

#[test]
fn defeat_grants_rewards() {
    let (_dir, save) = new_game();
    run(&save, &["defeat", "goblin", "--level", "3", "--seed", "42"])
        .success()
        .stdout(predicate::str::contains("Defeated Goblin (level 3)").and(predicate::str::contains("+30 EXP, +15 gold")));
    let hero = saved_character(&save);
    assert_eq!(hero["experience"], 30);
    assert_eq!(hero["gold"], 15);

    run(&save, &["defeat", "dragon"])
        .success()
        .stdout(predicate::str::contains("leveled up to 2!"));
    run(&save, &["defeat", "lich"])
        .failure()
        .stderr(predicate::str::contains("unknown enemy"));
}

// ---------------------------------------------------------------------------
// convert
// ---------------------------------------------------------------------------

#[test]
fn convert_currencies() {
    ql().args(["convert", "10", "gold", "silver"])
        .assert()
        .success()
        .stdout(predicate::str::contains("= 20"));
    ql().args(["convert", "10", "gold", "zorkmid"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown currency"));
}
