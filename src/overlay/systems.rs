use bevy::prelude::*;

use crate::{
	health::Health,
	overlay::{
		BlockOverlayRenderer, BlockPosition, BlockRegion, DamageOverlay, DamageOverlaySettings,
		tier::bucket_by_tier,
	},
};

/// Once per frame: collect every damaged block position, grouped by damage
/// tier, and emit one overlay pass with a single texture bind per non-empty
/// tier. Tiers whose texture variant is missing are skipped.
pub(super) fn render_damage_overlays(
	mut commands: Commands,
	mut renderer: Local<Option<BlockOverlayRenderer>>,
	settings: Res<DamageOverlaySettings>,
	assets: Res<AssetServer>,
	images: Res<Assets<Image>>,
	mut meshes: ResMut<Assets<Mesh>>,
	mut materials: ResMut<Assets<StandardMaterial>>,
	blocks: Query<(&Health, &BlockPosition)>,
	regions: Query<(&Health, &BlockRegion)>,
	marks: Query<Entity, With<DamageOverlay>>,
) {
	let renderer = renderer
		.get_or_insert_with(|| BlockOverlayRenderer::new(&settings, &assets, &mut meshes));

	// Group positions by tier before touching the renderer so each tier is
	// exactly one texture bind; switching the effects texture mid-pass would
	// split the mark batch.
	let single_blocks = blocks
		.iter()
		.map(|(&health, position)| (health, position.0));
	let region_blocks = regions
		.iter()
		.flat_map(|(&health, region)| region.iter().map(move |position| (health, position)));
	let buckets = bucket_by_tier(single_blocks.chain(region_blocks));

	renderer.begin_overlay(&mut commands, marks.iter());
	for (&tier, positions) in &buckets {
		let Some(image) = renderer.resolve_tier_texture(tier, &images) else {
			continue;
		};
		renderer.set_texture(tier, image, &mut materials);
		for &position in positions {
			renderer.render_mark(&mut commands, position);
		}
	}
	renderer.end_overlay();

	if !buckets.is_empty() {
		debug!(
			"Marked {} damaged block(s) across {} tier(s)",
			buckets.values().map(Vec::len).sum::<usize>(),
			buckets.len()
		);
	}
}
