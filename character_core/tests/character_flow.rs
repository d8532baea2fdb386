//! Integration test: Create -> Equip -> Fight -> Level -> Save -> Restore
//!
//! Walks a character through a full session using only the public API.

mod common;

use character_core::prelude::*;
use character_core::{CharacterRecord, RewardGrant};
use common::{gear, item_factory, potion, Potion};
use std::sync::Arc;

#[test]
fn test_human_warrior_scenario() {
    let mut hero = Character::new("Aldric", Race::Human, CharacterClass::Warrior);
    assert_eq!(hero.stat(StatKind::Strength).value(), 13);
    assert_eq!(hero.stat(StatKind::Constitution).value(), 12);
    assert_eq!(hero.max_health(), 122);

    assert_eq!(hero.take_damage(20, Some("Goblin")), 17);
    assert_eq!(hero.health(), 105);
}

#[test]
fn test_racial_and_class_tables() {
    let cases = [
        (Race::Elf, CharacterClass::Rogue, [10, 14, 9, 12, 10, 11]),
        (Race::Dwarf, CharacterClass::Cleric, [11, 10, 12, 10, 12, 10]),
        (Race::Orc, CharacterClass::Mage, [12, 10, 12, 10, 10, 9]),
        (Race::Human, CharacterClass::Mage, [10, 11, 11, 13, 11, 11]),
    ];
    for (race, class, expected) in cases {
        let c = Character::new("Test", race, class);
        let actual: Vec<i32> = StatKind::all().iter().map(|&k| c.stat(k).value()).collect();
        assert_eq!(actual, expected, "{} {}", race, class);
    }
}

#[test]
fn test_equip_unequip_round_trip() {
    let mut hero = Character::new("Bel", Race::Elf, CharacterClass::Rogue);
    let sword = gear("Short Sword", &[EquipmentSlot::MainHand, EquipmentSlot::OffHand], &[(StatKind::Strength, 2)]);
    let strength = hero.stat(StatKind::Strength).value();

    hero.equip(sword.clone(), EquipmentSlot::MainHand).unwrap();
    assert_eq!(hero.stat(StatKind::Strength).value(), strength + 2);

    let back = hero.unequip(EquipmentSlot::MainHand).unwrap();
    assert!(Arc::ptr_eq(&back, &sword));
    assert_eq!(hero.stat(StatKind::Strength).value(), strength);
    assert!(hero.inventory().contains(&sword));
}

#[test]
fn test_full_equipment_loadout() {
    let mut hero = Character::new("Gim", Race::Dwarf, CharacterClass::Warrior);
    let loadout = [
        (EquipmentSlot::Head, StatKind::Wisdom),
        (EquipmentSlot::Chest, StatKind::Constitution),
        (EquipmentSlot::Legs, StatKind::Dexterity),
        (EquipmentSlot::Feet, StatKind::Dexterity),
        (EquipmentSlot::MainHand, StatKind::Strength),
        (EquipmentSlot::OffHand, StatKind::Constitution),
        (EquipmentSlot::Accessory, StatKind::Charisma),
    ];
    let before = hero.stats().clone();
    for (slot, stat) in loadout {
        let item = gear(&format!("{} piece", slot), &[slot], &[(stat, 1)]);
        hero.add_to_inventory(item.clone());
        hero.equip(item, slot).unwrap();
    }
    assert_eq!(hero.equipment().equipped().count(), 7);
    assert!(hero.inventory().is_empty());
    assert_eq!(hero.stat(StatKind::Dexterity).value(), before.dexterity.value() + 2);
    assert_eq!(hero.stat(StatKind::Constitution).value(), before.constitution.value() + 2);

    for &slot in EquipmentSlot::all() {
        hero.unequip(slot).unwrap();
    }
    assert_eq!(hero.stats(), &before);
    assert_eq!(hero.inventory().len(), 7);
}

#[test]
fn test_consumables() {
    let mut mage = Character::new("Fae", Race::Elf, CharacterClass::Mage);
    let mana = potion(Potion::Mana(30));
    let bread = potion(Potion::Food(10));
    let antidote = potion(Potion::Antidote);
    for item in [&mana, &bread, &antidote] {
        assert!(mage.add_to_inventory(item.clone()));
    }

    assert!(mage.spend_mana(40));
    assert!(mage.use_item(&mana));
    assert_eq!(mage.mana(), mage.max_mana() - 10);

    let con = mage.stat(StatKind::Constitution).value();
    assert!(mage.use_item(&bread));
    assert_eq!(mage.stat(StatKind::Constitution).value(), con + 1);
    for _ in 0..3 {
        mage.update();
    }
    assert_eq!(mage.stat(StatKind::Constitution).value(), con);

    // nothing to cure yet
    assert!(!mage.use_item(&antidote));
    assert!(mage.inventory().contains(&antidote));
    mage.add_status_effect("Poisoned", "Spider", 5);
    assert!(mage.use_item(&antidote));
    assert!(!mage.has_status_effect("Poisoned"));
    assert!(mage.inventory().is_empty());
}

#[test]
fn test_session_save_and_restore() {
    let log = Arc::new(EventLog::new());
    let mut hero = Character::new("Cal", Race::Human, CharacterClass::Cleric);
    hero.attach_observer(log.clone());

    let mace = gear("Mace", &[EquipmentSlot::MainHand], &[(StatKind::Strength, 1), (StatKind::Wisdom, 1)]);
    hero.equip(mace, EquipmentSlot::MainHand).unwrap();
    hero.add_to_inventory(potion(Potion::Health(25)));
    hero.take_damage(30, Some("Bandit"));
    hero.add_status_effect("Blessed", "Shrine", 3);
    hero.stat_mut(StatKind::Wisdom).add_modifier(2, "Prayer", Some(2));
    hero.gain_combat_experience(&[Character::new("Rok", Race::Orc, CharacterClass::Warrior)]);
    hero.update();

    let json = hero.to_json().unwrap();
    let restored = Character::from_json(&json, item_factory).unwrap();
    assert_eq!(restored.to_record(), hero.to_record());
    assert_eq!(restored.status_effects()[0].duration, 2);
    assert_eq!(restored.stat(StatKind::Wisdom).modifiers().last().unwrap().duration, Some(1));

    let record: CharacterRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(record.equipment.len(), EquipmentSlot::COUNT);

    assert!(log.events().iter().any(|(_, e)| matches!(e, CharacterEvent::Equipped { .. })));
    assert!(log.events().iter().all(|(name, _)| name == "Cal"));
}

#[test]
fn test_quest_reward_levels_and_fills_inventory() {
    let mut hero = Character::new("Jo", Race::Human, CharacterClass::Rogue);
    let reward: RewardGrant = serde_json::from_str(
        r#"{ "xp": 100, "gold": 25, "items": [{ "id": "potion", "name": "Health Potion", "quantity": 3 }] }"#,
    )
    .unwrap();

    let outcome = hero.apply_reward(&reward, |_| Some(potion(Potion::Health(20))));
    assert!(outcome.leveled_up);
    assert_eq!(hero.level(), 2);
    assert_eq!(hero.inventory().len(), 3);
    assert_eq!(outcome.gold, 25);
}

#[test]
fn test_unequip_into_full_inventory_is_reported() {
    let log = Arc::new(EventLog::new());
    let mut rules = CharacterRules::default();
    rules.max_inventory_slots = 2;
    let mut hero = Character::with_rules("Ul", Race::Dwarf, CharacterClass::Warrior, rules).unwrap();
    hero.attach_observer(log.clone());

    let helm = gear("Helm", &[EquipmentSlot::Head], &[(StatKind::Constitution, 1)]);
    hero.equip(helm.clone(), EquipmentSlot::Head).unwrap();
    hero.add_to_inventory(potion(Potion::Health(5)));
    hero.add_to_inventory(potion(Potion::Health(5)));
    assert!(!hero.add_to_inventory(potion(Potion::Health(5))));

    let dropped = hero.unequip(EquipmentSlot::Head).unwrap();
    assert!(Arc::ptr_eq(&dropped, &helm));
    assert!(!hero.inventory().contains(&helm));
    assert!(log
        .events()
        .iter()
        .any(|(_, e)| matches!(e, CharacterEvent::ItemDropped { slot: EquipmentSlot::Head, .. })));
}
