//! Pre-restore hooks.
//!
//! Gameplay code gets a say before a [`Restore`](super::Restore) request is
//! applied: each registered hook sees the running amount and may keep it,
//! adjust it, or cancel the request outright. Hooks run in registration order
//! and the dispatcher folds their responses into a single decision, so there
//! is no shared event object for listeners to race over.

use bevy::prelude::*;

/// A single hook's verdict on a restoration request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RestoreResponse {
	/// Pass the running amount through unchanged.
	Keep,
	/// Replace the running amount. May be fractional; the dispatcher floors
	/// the final value. Driving it to zero or below turns the request into
	/// healing-type damage.
	Adjust(f32),
	/// Veto the request. No further hooks run, nothing is applied.
	Cancel,
}

type RestoreHook = Box<dyn Fn(Entity, f32) -> RestoreResponse + Send + Sync>;

/// Ordered registry of pre-restore hooks.
#[derive(Resource, Default)]
pub struct RestoreHooks {
	hooks: Vec<RestoreHook>,
}

impl RestoreHooks {
	pub fn register(
		&mut self,
		hook: impl Fn(Entity, f32) -> RestoreResponse + Send + Sync + 'static,
	) {
		self.hooks.push(Box::new(hook));
	}

	/// Folds all hooks over the requested amount. `None` means the request
	/// was cancelled; otherwise the final (possibly fractional) amount.
	pub fn evaluate(&self, entity: Entity, amount: i32) -> Option<f32> {
		let mut value = amount as f32;
		for hook in &self.hooks {
			match hook(entity, value) {
				RestoreResponse::Keep => {}
				RestoreResponse::Adjust(adjusted) => value = adjusted,
				RestoreResponse::Cancel => return None,
			}
		}
		Some(value)
	}
}

pub trait RestoreHookAppExt {
	/// Registers a pre-restore hook. Hooks run in registration order on every
	/// [`Restore`](super::Restore) request.
	fn add_restore_hook(
		&mut self,
		hook: impl Fn(Entity, f32) -> RestoreResponse + Send + Sync + 'static,
	) -> &mut Self;
}

impl RestoreHookAppExt for App {
	fn add_restore_hook(
		&mut self,
		hook: impl Fn(Entity, f32) -> RestoreResponse + Send + Sync + 'static,
	) -> &mut Self {
		self.world_mut()
			.get_resource_or_init::<RestoreHooks>()
			.register(hook);
		self
	}
}
