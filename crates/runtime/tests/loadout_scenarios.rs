use loadout_content::ContentFactory;
use loadout_core::{
    AddOutcome, HudEvent, InventoryConfig, InventoryError, ItemCatalog, ItemId, ItemRecord,
    LoadoutConfig, TransitionOutcome, WeaponSlot, WeaponState,
};
use loadout_runtime::{ItemTable, PickupOutcome, Runtime, RuntimeConfig, RuntimeError};

fn bundled_runtime() -> Runtime {
    Runtime::from_content(&ContentFactory::bundled(), RuntimeConfig::default())
        .expect("bundled content should load")
}

fn small_runtime(slots: usize, weight: f32) -> Runtime {
    let items = ContentFactory::bundled()
        .load_items()
        .expect("bundled items should load");
    let loadout = LoadoutConfig::new(InventoryConfig::new(slots, weight), Default::default());
    Runtime::new(
        ItemTable::from_definitions(items),
        loadout,
        RuntimeConfig::default(),
    )
}

fn key_of(record: &ItemRecord) -> loadout_core::ItemKey {
    record.key().expect("owned records carry a key")
}

/// Weapon swap through real montage timing:
/// 1. Rifle drawn in Primary, pistol holstered in Secondary
/// 2. Drawing Secondary starts holstering the rifle only
/// 3. Holster montage ends → pistol draw montage starts in the same frame
/// 4. Draw montage ends → pistol equipped, rifle holstered
#[test]
fn swap_waits_for_holster_montage() {
    let runtime = bundled_runtime();
    let mut character = runtime.spawn_character("Ranger");

    // ================================================================
    // Setup
    // ================================================================
    let rifle = runtime.instantiate("m4_rifle", 1).unwrap();
    assert_eq!(character.equip_weapon(&rifle), Ok(WeaponSlot::Primary));

    let pistol = runtime.instantiate("pistol", 1).unwrap();
    assert!(character.add_item(&pistol).is_all());
    let pistol_key = key_of(
        character
            .inventory()
            .find_next_item_by_id(&ItemId::from("pistol"))
            .unwrap(),
    );
    character
        .assign_from_inventory(WeaponSlot::Secondary, pistol_key)
        .unwrap();
    character.drain_hud();

    // ================================================================
    // Request the switch
    // ================================================================
    let outcome = character.draw(WeaponSlot::Secondary).unwrap();
    assert!(matches!(
        outcome,
        TransitionOutcome::Deferred {
            holstering: WeaponSlot::Primary,
            ..
        }
    ));

    // Input during the holster is dropped.
    assert!(matches!(
        character.draw(WeaponSlot::Melee),
        Err(RuntimeError::Slot(_))
    ));

    character.tick(0.25);
    let weapons = character.weapons();
    assert_eq!(weapons.current_slot(), Some(WeaponSlot::Primary));
    assert_eq!(
        weapons.weapon(WeaponSlot::Secondary).unwrap().state(),
        WeaponState::Holstered
    );

    // ================================================================
    // Holster finishes, draw chains
    // ================================================================
    character.tick(0.25);
    let weapons = character.weapons();
    assert_eq!(
        weapons.weapon(WeaponSlot::Primary).unwrap().state(),
        WeaponState::Holstered
    );
    assert_eq!(weapons.current_slot(), None);
    assert!(weapons.animation_state().is_animating(WeaponSlot::Secondary));
    assert!(!weapons.has_pending_switch());

    // ================================================================
    // Draw finishes
    // ================================================================
    character.tick(0.5);
    let weapons = character.weapons();
    assert_eq!(weapons.current_slot(), Some(WeaponSlot::Secondary));
    assert!(weapons.weapon(WeaponSlot::Secondary).unwrap().is_equipped());
    assert_eq!(weapons.equipped_count(), 1);
    assert!(weapons.animation_state().is_idle());
    assert_eq!(character.animator().started(), 2);

    let displays: Vec<_> = character
        .drain_hud()
        .into_iter()
        .filter_map(|event| match event {
            HudEvent::WeaponDisplay(display) => Some(display.map(|summary| summary.name)),
            _ => None,
        })
        .collect();
    assert_eq!(displays, vec![None, Some("Service Pistol".to_string())]);
}

/// Reload pulls rounds through the ammo bridge in insertion order:
/// two rifle ammo records of 5 and 20, a reload needing 12 rounds
/// removes the first record and leaves 13 in the second.
#[test]
fn reload_consumes_ammo_records_in_order() {
    let runtime = bundled_runtime();
    let mut character = runtime.spawn_character("Ranger");

    character
        .equip_weapon(&runtime.instantiate("m4_rifle", 1).unwrap())
        .unwrap();
    character.add_item(&runtime.instantiate("rifle_ammo", 25).unwrap());
    let first = key_of(&character.inventory().contents()[0]);
    let second = character.split_stack(first, 20).unwrap();
    let quantities: Vec<_> = character
        .inventory()
        .contents()
        .iter()
        .map(ItemRecord::quantity)
        .collect();
    assert_eq!(quantities, vec![5, 20]);

    // Automatic fire: one round now, one per 0.1s tick while held.
    assert_eq!(character.start_fire(), Ok(29));
    for _ in 0..11 {
        character.tick(0.1);
    }
    character.stop_fire();
    assert_eq!(
        character.weapons().current_weapon().unwrap().ammo_in_magazine(),
        18
    );

    assert!(character.can_reload_from_inventory());
    character.reload().unwrap();
    character.tick(2.5);

    assert_eq!(
        character.weapons().current_weapon().unwrap().ammo_in_magazine(),
        30
    );
    assert!(character.inventory().find_matching_item(first).is_none());
    assert_eq!(character.inventory().len(), 1);
    assert_eq!(
        character.inventory().find_matching_item(second).unwrap().quantity(),
        13
    );
    assert!(
        character
            .hud()
            .events()
            .contains(&HudEvent::AmmoChanged {
                magazine: 30,
                reserve: 13
            })
    );
}

#[test]
fn stacking_boundary_opens_new_stack() {
    let runtime = bundled_runtime();
    let mut character = runtime.spawn_character("Medic");

    character.add_item(&runtime.instantiate("bandage", 8).unwrap());
    let result = character.add_item(&runtime.instantiate("bandage", 5).unwrap());

    assert_eq!(result.outcome, AddOutcome::All);
    assert_eq!(result.actual_amount, 5);
    let quantities: Vec<_> = character
        .inventory()
        .contents()
        .iter()
        .map(ItemRecord::quantity)
        .collect();
    assert_eq!(quantities, vec![10, 3]);
    assert!(character.hud().events().contains(&HudEvent::InventoryUpdated));
}

#[test]
fn pickup_keeps_what_does_not_fit() {
    let runtime = small_runtime(1, 50.0);
    let mut character = runtime.spawn_character("Scavenger");
    character.add_item(&runtime.instantiate("bandage", 8).unwrap());

    let mut pickup = runtime.spawn_pickup("bandage", 10).unwrap();
    assert!(pickup.item().is_pickup());

    assert_eq!(
        pickup.take(&mut character),
        PickupOutcome::Partial {
            added: 2,
            remaining: 8
        }
    );
    assert_eq!(pickup.quantity(), 8);

    assert!(matches!(
        pickup.take(&mut character),
        PickupOutcome::Untouched {
            reason: Some(InventoryError::SlotsCapacityExceeded { .. })
        }
    ));
    assert_eq!(pickup.quantity(), 8);
    assert_eq!(character.inventory().count_of(&ItemId::from("bandage")), 10);
}

#[test]
fn pickup_of_zero_quantity_becomes_one() {
    let runtime = bundled_runtime();
    let mut character = runtime.spawn_character("Scavenger");

    let mut pickup = runtime.spawn_pickup("storage_key", 0).unwrap();
    assert_eq!(pickup.quantity(), 1);
    assert_eq!(
        pickup.take(&mut character),
        PickupOutcome::Consumed { added: 1 }
    );
    assert!(pickup.is_spent());
    assert!(matches!(
        runtime.spawn_pickup("excalibur", 1),
        Err(RuntimeError::UnknownItem(_))
    ));
}

#[test]
fn dropping_splits_or_removes_records() {
    let runtime = bundled_runtime();
    let mut character = runtime.spawn_character("Scavenger");
    character.add_item(&runtime.instantiate("bandage", 6).unwrap());
    character.add_item(&runtime.instantiate("storage_key", 1).unwrap());
    let bandages = key_of(&character.inventory().contents()[0]);
    let key = key_of(&character.inventory().contents()[1]);
    let weight = character.inventory().total_weight();

    assert_eq!(
        character.drop_item(bandages, 0).map(|_| ()),
        Err(RuntimeError::NothingToDrop(bandages))
    );
    assert_eq!(
        character.inventory().find_matching_item(bandages).unwrap().quantity(),
        6
    );
    assert_eq!(character.inventory().total_weight(), weight);

    let pickup = character.drop_item(bandages, 2).unwrap();
    assert_eq!(pickup.quantity(), 2);
    assert_eq!(
        character.inventory().find_matching_item(bandages).unwrap().quantity(),
        4
    );
    assert!((character.inventory().total_weight() - (weight - 0.2)).abs() < 1e-4);

    let pickup = character.drop_item(bandages, 10).unwrap();
    assert_eq!(pickup.quantity(), 4);
    assert!(character.inventory().find_matching_item(bandages).is_none());

    assert!(matches!(
        character.drop_item(key, 1),
        Err(RuntimeError::NotDiscardable(_))
    ));
    assert_eq!(
        character.drop_item(bandages, 1).map(|_| ()),
        Err(RuntimeError::ItemNotFound(bandages))
    );
}

#[test]
fn weight_overflow_rejects_heavy_weapon() {
    let runtime = small_runtime(10, 4.0);
    let mut character = runtime.spawn_character("Courier");

    assert!(character.add_item(&runtime.instantiate("m4_rifle", 1).unwrap()).is_all());
    let before = character.inventory().total_weight();
    let result = character.add_item(&runtime.instantiate("pump_shotgun", 1).unwrap());

    assert_eq!(result.outcome, AddOutcome::None);
    assert!(matches!(
        result.reason,
        Some(InventoryError::WeightCapacityExceeded { .. })
    ));
    assert_eq!(character.inventory().total_weight(), before);
    assert_eq!(character.inventory().len(), 1);
}

#[test]
fn content_errors_surface_as_runtime_errors() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[inventory]\nslots_capacity = 4\n").unwrap();

    let result = Runtime::from_content(&ContentFactory::new(dir.path()), RuntimeConfig::default());
    assert!(matches!(result, Err(RuntimeError::Content(_))));

    std::fs::write(dir.path().join("items.ron"), "(items: [])").unwrap();
    let runtime =
        Runtime::from_content(&ContentFactory::new(dir.path()), RuntimeConfig::default()).unwrap();
    assert_eq!(runtime.loadout().inventory.slots_capacity, 4);
    assert!(runtime.items().all_definitions().is_empty());
}
