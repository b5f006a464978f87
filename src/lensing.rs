//! Bevy integration of the lensing mapper.
//!
//! Owns the [`PlanetParams`] resource and keeps the derived
//! [`LensingSnapshot`] in step with it. The snapshot is re-evaluated from
//! scratch whenever the parameters change and never otherwise.

use bevy::prelude::*;

use crate::mapper::{LensingSnapshot, evaluate};
use crate::params::get_preset;
use crate::types::{LensingSystemSet, PlanetParams};

/// Message requesting a preset be loaded.
#[derive(Message, Clone, Debug)]
pub struct LoadPresetMessage {
    /// ID of the preset to load.
    pub preset_id: &'static str,
}

/// Message restoring the default parameters.
#[derive(Message, Clone, Copy, Debug, Default)]
pub struct ResetParamsMessage;

/// Plugin providing parameter state and snapshot recomputation.
pub struct LensingPlugin;

impl Plugin for LensingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlanetParams>();

        // Parameters may already have been supplied on the command line
        let params = *app.world().resource::<PlanetParams>();
        app.insert_resource(evaluate(params))
            .add_message::<LoadPresetMessage>()
            .add_message::<ResetParamsMessage>()
            .configure_sets(
                Update,
                LensingSystemSet::Recompute.after(LensingSystemSet::Input),
            )
            .add_systems(
                Update,
                (handle_load_preset, handle_reset).in_set(LensingSystemSet::Input),
            )
            .add_systems(
                Update,
                recompute_snapshot
                    .in_set(LensingSystemSet::Recompute)
                    .run_if(resource_changed::<PlanetParams>),
            );
    }
}

/// Re-evaluate the mapper for the current parameters.
pub fn recompute_snapshot(params: Res<PlanetParams>, mut snapshot: ResMut<LensingSnapshot>) {
    *snapshot = evaluate(*params);

    debug!(
        "Recomputed: angle={}° distance={} AU -> intensity={:.3}, peak t={:.2}",
        params.angle_deg,
        params.distance_au,
        snapshot.intensity,
        snapshot.peak_time()
    );
}

/// Apply preset load requests.
fn handle_load_preset(
    mut messages: MessageReader<LoadPresetMessage>,
    mut params: ResMut<PlanetParams>,
) {
    for message in messages.read() {
        match get_preset(message.preset_id) {
            Ok(preset) => {
                info!("Loading preset: {} ({})", preset.name, preset.id);
                *params = preset.params;
            }
            Err(err) => warn!("{err}"),
        }
    }
}

/// Restore default parameters.
fn handle_reset(mut messages: MessageReader<ResetParamsMessage>, mut params: ResMut<PlanetParams>) {
    if messages.read().count() == 0 {
        return;
    }

    info!("Resetting parameters to defaults");
    *params = PlanetParams::default();
}
