//! Entity health: the [`Health`] and [`Regen`] components, the restoration
//! event surface, and the observers that apply restoration on the authority
//! side.

use bevy::prelude::*;

pub mod components;
pub mod events;
pub mod hooks;
mod restoration;

pub use components::*;
pub use events::*;
pub use hooks::{RestoreHookAppExt, RestoreHooks, RestoreResponse};

pub fn plugin(app: &mut App) {
	app.register_type::<Health>().register_type::<Regen>();
	app.add_plugins(restoration::plugin);
}
