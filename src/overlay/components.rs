use bevy::prelude::*;

/// Grid position of a single-block entity. Fixed once the block is placed.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Deref, Reflect)]
#[reflect(Clone, Debug, Component)]
pub struct BlockPosition(pub IVec3);

/// Inclusive axis-aligned footprint of a multi-block entity, e.g. a door or
/// a placed structure spanning several blocks.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Clone, Debug, Component)]
pub struct BlockRegion {
	pub min: IVec3,
	pub max: IVec3,
}

impl BlockRegion {
	/// Region spanning `a` and `b` inclusively, in any corner order.
	pub fn new(a: IVec3, b: IVec3) -> Self {
		Self {
			min: a.min(b),
			max: a.max(b),
		}
	}

	/// Region covering a single block.
	pub fn single(position: IVec3) -> Self {
		Self {
			min: position,
			max: position,
		}
	}

	pub fn contains(&self, position: IVec3) -> bool {
		self.min.cmple(position).all() && position.cmple(self.max).all()
	}

	/// Every block position in the region, one by one.
	pub fn iter(&self) -> impl Iterator<Item = IVec3> {
		let (min, max) = (self.min, self.max);
		(min.x..=max.x).flat_map(move |x| {
			(min.y..=max.y)
				.flat_map(move |y| (min.z..=max.z).map(move |z| IVec3::new(x, y, z)))
		})
	}
}

/// Marker for the transient crack-mark entities the overlay pass owns. They
/// live for exactly one frame.
#[derive(Component, Debug, Reflect)]
#[reflect(Component)]
pub struct DamageOverlay;
