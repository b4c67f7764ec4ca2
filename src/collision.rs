//! Frog/vehicle hit test.
//!
//! Hitboxes are plain signed intervals here: a vehicle whose leading edge
//! has wrapped past zero has its tail at a negative coordinate, not at the
//! far end of the lane.

use crate::{config::Config, state::GameState};

/// The three-way interval test used by the game.
///
/// Player `[x - size, x]` against vehicle `[pos - length, pos]`: the player
/// inside the vehicle, the player's left edge inside it, or the player's
/// right edge inside it, all with strict bounds. Touching edges do not
/// count, and a zero-length vehicle can never be hit.
pub fn overlaps(x: u8, size: u8, pos: u8, length: u8) -> bool {
    let right = i16::from(x);
    let left = right - i16::from(size);
    let front = i16::from(pos);
    let back = front - i16::from(length);

    (right < front && left > back)
        || (left < front && left > back)
        || (right > back && right < front)
}

/// Index of the lane whose vehicle the frog hit this tick, if any.
pub fn check(state: &GameState, config: &Config) -> Option<usize> {
    if !state.session.collision_enabled {
        return None;
    }
    let lane = config.lane_at(state.frog.track)?;
    let length = config.lanes.get(lane)?.length;
    let size = config.layout.frog_size;

    state
        .lanes()
        .get(lane)?
        .iter()
        .any(|v| overlaps(state.frog.x, size, v.pos, length))
        .then_some(lane)
}
