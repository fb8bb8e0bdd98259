//! Neighbor lookups with fresh material classification

use crate::world::{BlockSource, Direction};
use super::material::{MaterialKind, MaterialRules};

/// A cell reached from another across one face
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Neighbor<P> {
    pub position: P,
    pub material: MaterialKind,
    /// Face it was reached through
    pub direction: Direction,
}

/// The six neighbors of one position, classified at lookup time.
///
/// A snapshot: recompute it after the world changes.
#[derive(Clone, Copy, Debug)]
pub struct NeighborSet<P> {
    pub north: Neighbor<P>,
    pub east: Neighbor<P>,
    pub west: Neighbor<P>,
    pub south: Neighbor<P>,
    pub down: Neighbor<P>,
    pub up: Neighbor<P>,
}

impl<P: Copy> NeighborSet<P> {
    /// North, East, West, South
    pub fn horizontal(&self) -> [Neighbor<P>; 4] {
        [self.north, self.east, self.west, self.south]
    }
}

/// Current material of the block at `pos`
pub fn material_at<W: BlockSource>(
    world: &W,
    rules: &MaterialRules,
    pos: W::Position,
) -> MaterialKind {
    rules.classify(world.block_id(pos))
}

/// Resolve and classify one neighbor of `pos`
pub fn neighbor<W: BlockSource>(
    world: &W,
    rules: &MaterialRules,
    pos: W::Position,
    direction: Direction,
) -> Neighbor<W::Position> {
    let position = world.neighbor(pos, direction);
    Neighbor {
        position,
        material: material_at(world, rules, position),
        direction,
    }
}

/// Resolve and classify all six neighbors of `pos`
pub fn neighbors<W: BlockSource>(
    world: &W,
    rules: &MaterialRules,
    pos: W::Position,
) -> NeighborSet<W::Position> {
    NeighborSet {
        north: neighbor(world, rules, pos, Direction::North),
        east: neighbor(world, rules, pos, Direction::East),
        west: neighbor(world, rules, pos, Direction::West),
        south: neighbor(world, rules, pos, Direction::South),
        down: neighbor(world, rules, pos, Direction::Down),
        up: neighbor(world, rules, pos, Direction::Up),
    }
}
