//! App-driven tests of the restoration flow.

use bevy::prelude::*;
use voxel_health::{
	Damage, DamageKind, FullyHealed, Health, PlayerRespawned, Restore, RestoreFullHealth,
	RestoreHookAppExt, RestoreResponse, Restored,
};

/// Everything the restoration flow emitted, captured by test observers.
#[derive(Resource, Default)]
struct Recorded {
	restored: Vec<i32>,
	fully_healed: usize,
	damage: Vec<(i32, DamageKind)>,
}

fn test_app() -> App {
	let mut app = App::new();
	app.add_plugins(MinimalPlugins);
	app.add_plugins(voxel_health::health::plugin);
	app.init_resource::<Recorded>();
	app.add_observer(
		|restored: On<Restored>, mut recorded: ResMut<Recorded>| {
			recorded.restored.push(restored.amount);
		},
	);
	app.add_observer(|_: On<FullyHealed>, mut recorded: ResMut<Recorded>| {
		recorded.fully_healed += 1;
	});
	app.add_observer(|damage: On<Damage>, mut recorded: ResMut<Recorded>| {
		recorded.damage.push((damage.amount, damage.kind));
	});
	app
}

fn spawn_with_health(app: &mut App, current: i32, max: i32) -> Entity {
	app.world_mut().spawn(Health { current, max }).id()
}

fn health_of(app: &mut App, entity: Entity) -> Health {
	*app.world_mut().entity(entity).get::<Health>().unwrap()
}

#[test]
fn restore_raises_health_and_reports_the_delta() {
	let mut app = test_app();
	let entity = spawn_with_health(&mut app, 40, 100);

	app.world_mut().trigger(Restore { entity, amount: 30 });
	app.world_mut().flush();

	assert_eq!(health_of(&mut app, entity).current, 70);
	let recorded = app.world().resource::<Recorded>();
	assert_eq!(recorded.restored, vec![30]);
	assert_eq!(recorded.fully_healed, 0);
}

#[test]
fn restore_caps_at_max_and_fires_fully_healed_once() {
	let mut app = test_app();
	let entity = spawn_with_health(&mut app, 90, 100);

	app.world_mut().trigger(Restore { entity, amount: 30 });
	app.world_mut().flush();

	assert_eq!(health_of(&mut app, entity).current, 100);
	let recorded = app.world().resource::<Recorded>();
	assert_eq!(recorded.restored, vec![10]);
	assert_eq!(recorded.fully_healed, 1);
}

#[test]
fn zero_amount_is_dropped_silently() {
	let mut app = test_app();
	let entity = spawn_with_health(&mut app, 40, 100);

	app.world_mut().trigger(Restore { entity, amount: 0 });
	app.world_mut().flush();

	assert_eq!(health_of(&mut app, entity).current, 40);
	let recorded = app.world().resource::<Recorded>();
	assert!(recorded.restored.is_empty());
	assert_eq!(recorded.fully_healed, 0);
	assert!(recorded.damage.is_empty());
}

#[test]
fn hooks_adjust_the_amount_and_the_result_is_floored() {
	let mut app = test_app();
	app.add_restore_hook(|_, amount| RestoreResponse::Adjust(amount / 2.0));
	let entity = spawn_with_health(&mut app, 40, 100);

	// 25 / 2 = 12.5, floored to 12.
	app.world_mut().trigger(Restore { entity, amount: 25 });
	app.world_mut().flush();

	assert_eq!(health_of(&mut app, entity).current, 52);
	assert_eq!(app.world().resource::<Recorded>().restored, vec![12]);
}

#[test]
fn cancelled_requests_change_nothing() {
	let mut app = test_app();
	app.add_restore_hook(|_, _| RestoreResponse::Cancel);
	let entity = spawn_with_health(&mut app, 40, 100);

	app.world_mut().trigger(Restore { entity, amount: 30 });
	app.world_mut().flush();

	assert_eq!(health_of(&mut app, entity).current, 40);
	let recorded = app.world().resource::<Recorded>();
	assert!(recorded.restored.is_empty());
	assert!(recorded.damage.is_empty());
}

#[test]
fn negative_adjustment_becomes_healing_damage() {
	let mut app = test_app();
	app.add_restore_hook(|_, amount| RestoreResponse::Adjust(amount - 35.0));
	let entity = spawn_with_health(&mut app, 40, 100);

	app.world_mut().trigger(Restore { entity, amount: 30 });
	app.world_mut().flush();

	assert_eq!(health_of(&mut app, entity).current, 40);
	let recorded = app.world().resource::<Recorded>();
	assert!(recorded.restored.is_empty());
	assert_eq!(recorded.damage, vec![(5, DamageKind::Healing)]);
}

#[test]
fn huge_restore_amounts_cap_instead_of_overflowing() {
	let mut app = test_app();
	let entity = spawn_with_health(&mut app, 50, 100);

	app.world_mut().trigger(Restore { entity, amount: i32::MAX });
	app.world_mut().flush();

	assert_eq!(health_of(&mut app, entity).current, 100);
	let recorded = app.world().resource::<Recorded>();
	assert_eq!(recorded.restored, vec![50]);
	assert_eq!(recorded.fully_healed, 1);
}

#[test]
fn extreme_negative_adjustments_saturate_the_damage_amount() {
	let mut app = test_app();
	// Floors below i32::MIN, so the magnitude cannot be represented exactly.
	app.add_restore_hook(|_, _| RestoreResponse::Adjust(-1.0e12));
	let entity = spawn_with_health(&mut app, 40, 100);

	app.world_mut().trigger(Restore { entity, amount: 30 });
	app.world_mut().flush();

	assert_eq!(health_of(&mut app, entity).current, 40);
	let recorded = app.world().resource::<Recorded>();
	assert!(recorded.restored.is_empty());
	assert_eq!(recorded.damage, vec![(i32::MAX, DamageKind::Healing)]);
}

#[test]
fn adjustment_floored_to_zero_still_routes_to_the_damage_pathway() {
	let mut app = test_app();
	app.add_restore_hook(|_, _| RestoreResponse::Adjust(0.9));
	let entity = spawn_with_health(&mut app, 40, 100);

	app.world_mut().trigger(Restore { entity, amount: 30 });
	app.world_mut().flush();

	assert_eq!(health_of(&mut app, entity).current, 40);
	let recorded = app.world().resource::<Recorded>();
	assert!(recorded.restored.is_empty());
	assert_eq!(recorded.damage, vec![(0, DamageKind::Healing)]);
}

#[test]
fn restore_full_health_bypasses_hooks_and_events() {
	let mut app = test_app();
	// Would veto any regular restoration.
	app.add_restore_hook(|_, _| RestoreResponse::Cancel);
	let entity = spawn_with_health(&mut app, 10, 100);

	app.world_mut().trigger(RestoreFullHealth { entity });
	app.world_mut().flush();

	assert_eq!(health_of(&mut app, entity).current, 100);
	let recorded = app.world().resource::<Recorded>();
	assert!(recorded.restored.is_empty());
	assert_eq!(recorded.fully_healed, 0);
}

#[test]
fn respawning_restores_full_health() {
	let mut app = test_app();
	let entity = spawn_with_health(&mut app, 1, 80);

	app.world_mut().trigger(PlayerRespawned { entity });
	app.world_mut().flush();

	assert_eq!(health_of(&mut app, entity).current, 80);
}

#[test]
fn targets_without_health_are_ignored() {
	let mut app = test_app();
	let entity = app.world_mut().spawn_empty().id();

	app.world_mut().trigger(Restore { entity, amount: 30 });
	app.world_mut().flush();
	app.world_mut().trigger(RestoreFullHealth { entity });
	app.world_mut().flush();

	let recorded = app.world().resource::<Recorded>();
	assert!(recorded.restored.is_empty());
	assert!(recorded.damage.is_empty());
}
