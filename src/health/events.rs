use bevy::prelude::*;

/// Request to restore health on the target entity.
///
/// Logic flow for restoration:
/// - `Restore`
/// - pre-restore hooks ([`super::RestoreHooks`])
/// - (`Health` written back)
/// - [`Restored`]
/// - [`FullyHealed`] (if healed to full health)
#[derive(EntityEvent, Debug)]
pub struct Restore {
	pub entity: Entity,
	/// Requested amount. Zero is ignored; a hook chain that drives the amount
	/// negative turns the request into healing-type [`Damage`].
	pub amount: i32,
}

/// Request to restore the target entity to full health, bypassing hooks and
/// intermediate events.
#[derive(EntityEvent, Debug)]
pub struct RestoreFullHealth {
	pub entity: Entity,
}

/// Emitted by the hosting engine when a player entity respawns. Respawning
/// restores full health.
#[derive(EntityEvent, Debug)]
pub struct PlayerRespawned {
	pub entity: Entity,
}

/// Health was restored on the target entity.
#[derive(EntityEvent, Debug)]
pub struct Restored {
	pub entity: Entity,
	/// The delta that was actually applied, after capping at max health.
	pub amount: i32,
}

/// The target entity reached full health through restoration.
#[derive(EntityEvent, Debug)]
pub struct FullyHealed {
	pub entity: Entity,
}

/// Request to damage the target entity. Handled by the damage authority;
/// this module only dispatches it when a restoration flips sign.
#[derive(EntityEvent, Debug)]
pub struct Damage {
	pub entity: Entity,
	pub amount: i32,
	pub kind: DamageKind,
}

/// Broad classification of a damage request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum DamageKind {
	/// Typeless damage, e.g. from scripts.
	Direct,
	Physical,
	/// Negative restoration. Lets listeners distinguish a healing spell gone
	/// sour from hostile damage.
	Healing,
}
