//! Support and tree-shape checks.
//!
//! Both walk a single column and stop at the first non-trunk cell, so
//! they terminate on any finite world. Neither mutates the world.

use crate::world::{BlockSource, Direction};
use super::adjacency::material_at;
use super::material::{MaterialKind, MaterialRules};

/// Follow trunk cells straight down from `start`; true if the column ends in soil.
///
/// A soil cell is trivially rooted. Anything other than trunk or soil is not.
pub fn is_rooted_in_soil<W: BlockSource>(
    world: &W,
    rules: &MaterialRules,
    start: W::Position,
) -> bool {
    let mut pos = start;
    loop {
        match material_at(world, rules, pos) {
            MaterialKind::Trunk => pos = world.neighbor(pos, Direction::Down),
            MaterialKind::Soil => return true,
            _ => return false,
        }
    }
}

/// Follow trunk cells straight up from `start`; true if the column ends in leaves or air.
///
/// Air counts: the top of a partially chopped tree is still a tree.
pub fn is_part_of_tree<W: BlockSource>(
    world: &W,
    rules: &MaterialRules,
    start: W::Position,
) -> bool {
    let mut pos = start;
    loop {
        match material_at(world, rules, pos) {
            MaterialKind::Trunk => pos = world.neighbor(pos, Direction::Up),
            kind if kind.is_pass_through() => return true,
            _ => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::GridWorld;
    use glam::IVec3;

    #[test]
    fn test_rooted_through_trunk_chain() {
        let mut world = GridWorld::new();
        world.set_block(IVec3::ZERO, "tile.dirt");
        world.fill_column(IVec3::Y, 3, "tile.log");
        let rules = MaterialRules::default();

        assert!(is_rooted_in_soil(&world, &rules, IVec3::new(0, 3, 0)));
        assert!(is_rooted_in_soil(&world, &rules, IVec3::ZERO));
    }

    #[test]
    fn test_not_rooted_on_stone_or_air() {
        let mut world = GridWorld::new();
        world.set_block(IVec3::ZERO, "tile.stone");
        world.fill_column(IVec3::Y, 2, "tile.log");
        world.fill_column(IVec3::new(5, 10, 5), 2, "tile.log");
        let rules = MaterialRules::default();

        assert!(!is_rooted_in_soil(&world, &rules, IVec3::new(0, 2, 0)));
        assert!(!is_rooted_in_soil(&world, &rules, IVec3::new(5, 11, 5)));
    }

    #[test]
    fn test_leaves_below_do_not_root() {
        let mut world = GridWorld::new();
        world.set_block(IVec3::ZERO, "tile.leaves");
        world.set_block(IVec3::Y, "tile.log");
        let rules = MaterialRules::default();

        assert!(!is_rooted_in_soil(&world, &rules, IVec3::Y));
    }

    #[test]
    fn test_tree_ends_in_leaves_or_air() {
        let mut world = GridWorld::new();
        world.fill_column(IVec3::ZERO, 3, "tile.log");
        world.set_block(IVec3::new(0, 3, 0), "tile.leaves");
        world.fill_column(IVec3::new(2, 0, 0), 3, "tile.log");
        let rules = MaterialRules::default();

        assert!(is_part_of_tree(&world, &rules, IVec3::ZERO));
        // bare column topped by air
        assert!(is_part_of_tree(&world, &rules, IVec3::new(2, 0, 0)));
    }

    #[test]
    fn test_capped_column_is_not_a_tree() {
        let mut world = GridWorld::new();
        world.fill_column(IVec3::ZERO, 3, "tile.log");
        world.set_block(IVec3::new(0, 3, 0), "tile.stone");
        let rules = MaterialRules::default();

        assert!(!is_part_of_tree(&world, &rules, IVec3::ZERO));
        assert!(!is_part_of_tree(&world, &rules, IVec3::new(0, 3, 0)));
    }

    #[test]
    fn test_checks_are_repeatable() {
        let mut world = GridWorld::new();
        world.set_block(IVec3::ZERO, "tile.dirt");
        world.fill_column(IVec3::Y, 4, "tile.stripped_birch_log");
        world.set_block(IVec3::new(0, 5, 0), "tile.leaves");
        let rules = MaterialRules::default();
        let start = IVec3::new(0, 2, 0);

        let rooted: Vec<bool> = (0..3).map(|_| is_rooted_in_soil(&world, &rules, start)).collect();
        let tree: Vec<bool> = (0..3).map(|_| is_part_of_tree(&world, &rules, start)).collect();
        assert_eq!(rooted, vec![true; 3]);
        assert_eq!(tree, vec![true; 3]);
        assert_eq!(world.block_count(), 6);
        assert!(world.destroyed().is_empty());
    }
}
