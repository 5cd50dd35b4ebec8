//! Core plugin: shared resources and global settings.

use crate::common::{session::Session, tunables::Tunables};
use bevy::prelude::*;

/// Wheat.
const BACKGROUND: Color = Color::srgb(0.96, 0.87, 0.70);

pub fn plugin(app: &mut App) {
    app.insert_resource(Tunables::default());
    app.insert_resource(Session::default());
    app.insert_resource(ClearColor(BACKGROUND));
}
