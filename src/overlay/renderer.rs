use bevy::{platform::collections::HashMap, prelude::*};

use crate::overlay::{DamageOverlay, DamageOverlaySettings};

/// Issues the crack overlay pass for damaged blocks.
///
/// Built once, on the overlay system's first run, and owned by that system
/// for the rest of its life. Holds the shared overlay cube mesh, a handle per
/// tier texture variant, and one lazily created material per tier so that all
/// marks of a tier land in the same draw batch.
pub struct BlockOverlayRenderer {
	mesh: Handle<Mesh>,
	tiers: Vec<Handle<Image>>,
	materials: HashMap<u32, Handle<StandardMaterial>>,
	bound: Option<Handle<StandardMaterial>>,
}

impl BlockOverlayRenderer {
	/// Kicks off loading of the whole tier texture set and creates the shared
	/// overlay mesh.
	pub fn new(
		settings: &DamageOverlaySettings,
		assets: &AssetServer,
		meshes: &mut Assets<Mesh>,
	) -> Self {
		let tiers = (0..=settings.tiers)
			.map(|tier| assets.load(settings.tier_texture_path(tier)))
			.collect();
		Self {
			// Slightly inflated so the crack wins the depth fight against the
			// block it sits on.
			mesh: meshes.add(Cuboid::from_length(1.002)),
			tiers,
			materials: HashMap::new(),
			bound: None,
		}
	}

	/// The texture variant for a tier, or `None` if the set has no usable
	/// variant there (never loaded, failed, or out of range).
	pub fn resolve_tier_texture(&self, tier: u32, images: &Assets<Image>) -> Option<Handle<Image>> {
		let handle = self.tiers.get(tier as usize)?;
		images.contains(handle).then(|| handle.clone())
	}

	/// Opens an overlay pass, despawning the previous frame's marks.
	pub fn begin_overlay(
		&mut self,
		commands: &mut Commands,
		previous: impl Iterator<Item = Entity>,
	) {
		for mark in previous {
			commands.entity(mark).despawn();
		}
		self.bound = None;
	}

	/// Binds a tier's texture for the marks that follow.
	pub fn set_texture(
		&mut self,
		tier: u32,
		image: Handle<Image>,
		materials: &mut Assets<StandardMaterial>,
	) {
		let material = self.materials.entry(tier).or_insert_with(|| {
			materials.add(StandardMaterial {
				base_color_texture: Some(image),
				alpha_mode: AlphaMode::Blend,
				unlit: true,
				..default()
			})
		});
		self.bound = Some(material.clone());
	}

	/// Spawns one crack mark over the block at `position`, using the texture
	/// bound by [`set_texture`](Self::set_texture).
	pub fn render_mark(&self, commands: &mut Commands, position: IVec3) {
		let Some(material) = self.bound.clone() else {
			return;
		};
		commands.spawn((
			Name::new("Block Damage Overlay"),
			DamageOverlay,
			Mesh3d(self.mesh.clone()),
			MeshMaterial3d(material),
			Transform::from_translation(position.as_vec3() + Vec3::splat(0.5)),
		));
	}

	/// Closes the pass and unbinds the texture.
	pub fn end_overlay(&mut self) {
		self.bound = None;
	}
}
