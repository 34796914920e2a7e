use rand::{seq::SliceRandom as _, Rng as _};
use smallvec::SmallVec;

use super::{GenerationError, MazeGenerator, Params, Random};
use crate::{
    dims::*,
    disjoint_set::DisjointSet,
    gameboard::{CellWall, Grid},
    random,
};

use CellWall::*;

const DEFAULT_MERGE_CHANCE: f64 = 0.5;

/// Eller's algorithm, building the maze one row at a time.
///
/// Every carve is decided from the set membership of the current row: neighbours are only
/// joined when their sets differ, and each set sends at least one passage down, so no set can
/// get cut off. The last row joins whatever sets are left. `merge_chance` controls how often
/// neighbouring sets are joined within a row.
///
/// Sets of a row live in a [`DisjointSet`] over its columns. Columns reached from above share
/// the set they came from, the rest start alone.
#[derive(Debug)]
pub struct Ellers;

impl MazeGenerator for Ellers {
    fn generate(
        &self,
        size: Dims,
        rng: &mut Random,
        params: &Params,
    ) -> Result<Grid, GenerationError> {
        let mut grid = Grid::from_size(size)?;
        let (width, height) = (grid.cols(), grid.rows());
        let merge_chance = merge_chance(params);

        let mut sets = DisjointSet::new(width);

        for y in 0..height {
            let last_row = y + 1 == height;

            for x in 0..width - 1 {
                if sets.connected(x, x + 1) {
                    continue;
                }

                if last_row || rng.gen_bool(merge_chance) {
                    grid.open_passage(Dims(x as i32, y as i32), East);
                    sets.union(x, x + 1);
                }
            }

            if last_row {
                break;
            }

            let mut next = DisjointSet::new(width);
            for mut members in row_members(&mut sets) {
                members.shuffle(rng);
                let down = 1 + random::index(rng, members.len());

                for &x in &members[..down] {
                    grid.open_passage(Dims(x as i32, y as i32), South);
                    next.union(members[0], x);
                }
            }

            sets = next;
        }

        Ok(grid)
    }
}

fn merge_chance(params: &Params) -> f64 {
    let chance = params.parsed_or_warn("merge_chance", DEFAULT_MERGE_CHANCE);
    if (0.0..=1.0).contains(&chance) {
        chance
    } else {
        log::warn!("merge_chance must be within 0..=1, got {}", chance);
        DEFAULT_MERGE_CHANCE
    }
}

/// Columns of each set, sets ordered by their leftmost column.
fn row_members(sets: &mut DisjointSet) -> Vec<SmallVec<[usize; 8]>> {
    const NONE: usize = usize::MAX;

    let mut group_of = vec![NONE; sets.len()];
    let mut groups: Vec<SmallVec<[usize; 8]>> = Vec::new();
    for x in 0..sets.len() {
        let root = sets.find(x);
        if group_of[root] == NONE {
            group_of[root] = groups.len();
            groups.push(SmallVec::new());
        }
        groups[group_of[root]].push(x);
    }

    groups
}
