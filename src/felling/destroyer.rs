//! Removes every trunk block connected to a validated tree.
//!
//! Trunk cells are destroyed and spread to their four horizontal neighbors
//! and the cell above, never below. Leaves and air spread only sideways,
//! and only into trunk cells that are not rooted in soil on their own, so a
//! separate tree standing next to the felled one survives.
//!
//! The walk uses an explicit stack instead of recursion. Frames are
//! classified when popped, not when pushed, which keeps the visiting order
//! and the world reads identical to a depth-first recursive walk.

use crate::world::{BlockSource, Direction};
use super::adjacency;
use super::material::{MaterialKind, MaterialRules};
use super::validate::is_rooted_in_soil;

/// Initial work stack size; typical trees stay well below this
const WORK_STACK_CAPACITY: usize = 128;

/// Items drop from every felled block
const DROP_ITEMS: bool = true;

#[derive(Clone, Copy, Debug)]
enum Step<P> {
    /// Destroy if trunk, spread sideways if leaves or air
    Visit(P),
    /// Reached sideways from leaves or air: only unrooted trunk is visited
    Lateral(P),
}

/// Fell the tree whose trunk continues at `start`.
///
/// Seeds the walk with the four horizontal neighbors of `start` and `start`
/// itself. Returns the number of blocks destroyed.
pub fn destroy<W: BlockSource>(world: &mut W, rules: &MaterialRules, start: W::Position) -> u32 {
    let mut felled = 0u32;
    let mut stack: Vec<Step<W::Position>> = Vec::with_capacity(WORK_STACK_CAPACITY);

    stack.push(Step::Visit(start));
    for dir in Direction::HORIZONTAL.iter().rev() {
        stack.push(Step::Visit(world.neighbor(start, *dir)));
    }

    while let Some(step) = stack.pop() {
        let pos = match step {
            Step::Visit(pos) => pos,
            Step::Lateral(pos) => {
                if adjacency::material_at(&*world, rules, pos) != MaterialKind::Trunk
                    || is_rooted_in_soil(&*world, rules, pos)
                {
                    continue;
                }
                pos
            }
        };

        match adjacency::material_at(&*world, rules, pos) {
            MaterialKind::Trunk => {
                felled += 1;
                world.destroy_block(pos, DROP_ITEMS);
                log::trace!("felled {:?} ({} so far)", pos, felled);

                let around = adjacency::neighbors(&*world, rules, pos);
                // reverse of North, East, West, South, Up
                for next in [around.up, around.south, around.west, around.east, around.north] {
                    stack.push(Step::Visit(next.position));
                }
            }
            kind if kind.is_pass_through() => {
                let around = adjacency::neighbors(&*world, rules, pos);
                for next in around.horizontal().iter().rev() {
                    stack.push(Step::Lateral(next.position));
                }
            }
            _ => {}
        }
    }

    felled
}
