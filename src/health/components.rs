use std::collections::HashMap;

use bevy::prelude::*;
use bincode::{Decode, Encode};

/// Health of a block or creature entity. Mutated only through the restoration
/// and damage pathways, which keep `0 <= current <= max`.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Clone, Debug, Component)]
pub struct Health {
	pub current: i32,
	pub max: i32,
}

impl Health {
	/// A full health pool of the given capacity.
	pub fn new(max: i32) -> Self {
		Self { current: max, max }
	}

	pub fn is_full(&self) -> bool {
		self.current == self.max
	}

	/// Remaining health as a fraction in `[0, 1]`.
	pub fn fraction(&self) -> f32 {
		self.current as f32 / self.max as f32
	}
}

impl Default for Health {
	fn default() -> Self {
		Self::new(100)
	}
}

/// Regeneration bookkeeping, managed by the game's regeneration scheduler.
///
/// Registered actions map an effect id to the timestamp (in seconds of game
/// time) at which the effect expires. A negative timestamp denotes an action
/// that never expires; prefabs pre-register the base regeneration this way
/// via [`Regen::add_indefinite_action`].
///
/// Replicated. The scheduler computes integer regeneration amounts per tick
/// and parks the sub-integer rest in [`remainder`](Self::remainder) so slow
/// regeneration is not rounded away.
#[derive(Component, Debug, Clone, Default, Reflect, Encode, Decode)]
#[reflect(Clone, Debug, Component, Default)]
pub struct Regen {
	/// Fractional carry-over from the last regeneration tick.
	pub remainder: f32,
	actions: HashMap<String, f64>,
}

impl Regen {
	/// Sentinel expiry for actions that never run out.
	pub const INDEFINITE: f64 = -1.0;

	/// Registers (or re-schedules) an action that expires at `expires_at`.
	pub fn add_action(&mut self, id: impl Into<String>, expires_at: f64) {
		self.actions.insert(id.into(), expires_at);
	}

	/// Registers an action with no expiry.
	pub fn add_indefinite_action(&mut self, id: impl Into<String>) {
		self.add_action(id, Self::INDEFINITE);
	}

	/// Removes an action, returning its expiry if it was registered.
	pub fn remove_action(&mut self, id: &str) -> Option<f64> {
		self.actions.remove(id)
	}

	/// The expiry timestamp of an action, if registered.
	pub fn expiry(&self, id: &str) -> Option<f64> {
		self.actions.get(id).copied()
	}

	pub fn has_action(&self, id: &str) -> bool {
		self.actions.contains_key(id)
	}

	/// Whether the action is registered and never expires.
	pub fn is_indefinite(&self, id: &str) -> bool {
		self.expiry(id).is_some_and(|expiry| expiry < 0.0)
	}

	pub fn is_empty(&self) -> bool {
		self.actions.is_empty()
	}

	pub fn action_ids(&self) -> impl Iterator<Item = &str> {
		self.actions.keys().map(String::as_str)
	}
}
