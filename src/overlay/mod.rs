//! Crack overlays for damaged blocks.
//!
//! Every frame, damaged block entities are grouped by [`damage_tier`] and
//! marked with that tier's crack texture, one texture bind per tier.

use bevy::prelude::*;

pub mod components;
pub mod renderer;
pub mod tier;
mod systems;

pub use components::*;
pub use renderer::BlockOverlayRenderer;
pub use tier::{MAX_DAMAGE_TIER, damage_tier};

/// Where the overlay pass finds its crack textures.
#[derive(Resource, Debug, Clone, Reflect)]
#[reflect(Resource)]
pub struct DamageOverlaySettings {
	/// Asset path prefix; tier `n` resolves to `{base_path}_{n}.png`.
	pub base_path: String,
	/// Highest tier the texture set covers.
	pub tiers: u32,
}

impl DamageOverlaySettings {
	pub fn tier_texture_path(&self, tier: u32) -> String {
		format!("{}_{tier}.png", self.base_path)
	}
}

impl Default for DamageOverlaySettings {
	fn default() -> Self {
		Self {
			base_path: "textures/effects/block_damage".into(),
			tiers: MAX_DAMAGE_TIER,
		}
	}
}

pub fn plugin(app: &mut App) {
	app.register_type::<BlockPosition>()
		.register_type::<BlockRegion>()
		.register_type::<DamageOverlay>()
		.register_type::<DamageOverlaySettings>();
	app.init_resource::<DamageOverlaySettings>();
	app.add_systems(Update, systems::render_damage_overlays);
}
