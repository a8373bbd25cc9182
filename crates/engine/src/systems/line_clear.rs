//! Stage 7: remove full rows.

use log::debug;

use crate::env::Env;
use crate::systems::TickState;
use crate::world::World;

/// All full rows go at once; rows above drop by the number cleared below
/// them and empty rows fill in at the top.
pub fn clear_lines(world: &mut World, _env: &Env, tick: &mut TickState) {
    let cleared = world.grid.clear_full_rows();
    if cleared.is_empty() {
        return;
    }
    tick.rows_cleared = cleared.len();
    world.add_lines_cleared(cleared.len() as u32);
    debug!("cleared rows {:?} ({} total)", cleared, world.lines_cleared());
}
