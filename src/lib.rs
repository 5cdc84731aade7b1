//! Health subsystem for a voxel game.
//!
//! Thin glue over the hosting engine, in two pieces:
//! - [`overlay`]: renders crack overlays on damaged blocks, batched by damage tier.
//! - [`health`]: restoration handling (`Restore` and friends) plus the [`health::Regen`]
//!   bookkeeping component consumed by the game's regeneration scheduler.
//!
//! Add [`plugin`] to your [`App`] to get both, or cherry-pick the sub-plugins.

use bevy::prelude::*;

pub mod health;
pub mod overlay;

pub use health::{
	Damage, DamageKind, FullyHealed, Health, PlayerRespawned, Regen, Restore, RestoreFullHealth,
	RestoreHookAppExt, RestoreResponse, Restored,
};
pub use overlay::{BlockPosition, BlockRegion, DamageOverlaySettings};

pub fn plugin(app: &mut App) {
	app.add_plugins((health::plugin, overlay::plugin));
}
