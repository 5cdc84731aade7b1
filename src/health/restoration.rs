//! Authority-side restoration handling.

use bevy::prelude::*;

use crate::health::{
	Damage, DamageKind, FullyHealed, Health, PlayerRespawned, Restore, RestoreFullHealth,
	RestoreHooks, Restored,
};

pub(super) fn plugin(app: &mut App) {
	app.init_resource::<RestoreHooks>();
	app.add_observer(on_restore);
	app.add_observer(on_restore_full_health);
	app.add_observer(on_respawn);
}

fn on_restore(
	restore: On<Restore>,
	mut healths: Query<&mut Health>,
	hooks: Res<RestoreHooks>,
	mut commands: Commands,
) {
	// Ignore 0 restoration
	if restore.amount == 0 {
		return;
	}
	let Ok(mut health) = healths.get_mut(restore.entity) else {
		return;
	};

	let Some(modified) = hooks.evaluate(restore.entity, restore.amount) else {
		// A hook vetoed the request. Not an error, just policy.
		return;
	};

	let modified = modified.floor() as i32;
	if modified > 0 {
		apply_restoration(restore.entity, &mut health, modified, &mut commands);
	} else {
		// The hook chain flipped the sign, so hand the request over to the
		// damage pathway as "healing" damage. The floored value saturates at
		// i32::MIN, whose plain negation would overflow.
		commands.trigger(Damage {
			entity: restore.entity,
			amount: modified.saturating_neg(),
			kind: DamageKind::Healing,
		});
	}
}

fn apply_restoration(entity: Entity, health: &mut Health, amount: i32, commands: &mut Commands) {
	let capped = health.max.min(health.current.saturating_add(amount));
	let applied = capped - health.current;
	health.current = capped;

	debug!("Restored {applied} health on {entity} ({}/{})", health.current, health.max);
	commands.trigger(Restored { entity, amount: applied });
	if capped == health.max {
		commands.trigger(FullyHealed { entity });
	}
}

fn on_restore_full_health(
	request: On<RestoreFullHealth>,
	mut healths: Query<&mut Health>,
) {
	let Ok(mut health) = healths.get_mut(request.entity) else {
		return;
	};
	health.current = health.max;
}

fn on_respawn(respawn: On<PlayerRespawned>, mut healths: Query<&mut Health>) {
	let Ok(mut health) = healths.get_mut(respawn.entity) else {
		return;
	};
	health.current = health.max;
}
