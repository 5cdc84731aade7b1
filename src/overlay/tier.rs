use bevy::{math::IVec3, platform::collections::HashMap};

use crate::health::Health;

/// Tier of a block at zero health. Tiers index the crack texture variants.
pub const MAX_DAMAGE_TIER: u32 = 10;

/// Discretized damage level in `0..=`[`MAX_DAMAGE_TIER`], derived from the
/// missing health fraction. Only meaningful for damaged entities; callers
/// filter out full-health entities before asking.
pub fn damage_tier(health: &Health) -> u32 {
	((1.0 - health.fraction()) * MAX_DAMAGE_TIER as f32).round() as u32
}

/// Groups damaged block positions by damage tier, dropping undamaged entries.
/// Each entry's tier is computed exactly once.
pub(crate) fn bucket_by_tier(
	entries: impl IntoIterator<Item = (Health, IVec3)>,
) -> HashMap<u32, Vec<IVec3>> {
	let mut buckets: HashMap<u32, Vec<IVec3>> = HashMap::new();
	for (health, position) in entries {
		if health.is_full() {
			continue;
		}
		buckets.entry(damage_tier(&health)).or_default().push(position);
	}
	buckets
}
