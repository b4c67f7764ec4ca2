//! Vehicle motion.

use crate::{config::LaneConfig, state::LaneVehicles};

/// Move every vehicle one tick along its lane.
///
/// Positions wrap at 256, which loops the lane. `prev_pos` is left alone
/// for the renderer.
pub fn advance(lanes: &mut [LaneVehicles], config: &[LaneConfig]) {
    for (vehicles, lane) in lanes.iter_mut().zip(config) {
        for vehicle in vehicles.iter_mut() {
            vehicle.pos = vehicle.pos.wrapping_add_signed(lane.speed);
        }
    }
}
