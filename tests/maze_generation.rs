//! Property tests for maze generation: seed determinism and full
//! connectivity of every non-wall cell from the start position.

use mazebound::{GenerationConfig, Maze, TileType};
use proptest::prelude::*;
use std::collections::VecDeque;

/// Flood fills walkable cells from (1, 1), treating placed entities as
/// passable, and returns the number of cells reached.
fn reachable_count(maze: &Maze) -> usize {
    let mut visited = vec![vec![false; maze.cols() as usize]; maze.rows() as usize];
    let mut queue = VecDeque::from([(1i32, 1i32)]);
    let mut count = 0;

    while let Some((x, y)) = queue.pop_front() {
        if !maze.is_walkable(x, y) || visited[y as usize][x as usize] {
            continue;
        }
        visited[y as usize][x as usize] = true;
        count += 1;
        for (dx, dy) in [(0, -1), (1, 0), (0, 1), (-1, 0)] {
            queue.push_back((x + dx, y + dy));
        }
    }

    count
}

fn non_wall_count(maze: &Maze) -> usize {
    (0..maze.rows() as i32)
        .flat_map(|y| (0..maze.cols() as i32).map(move |x| (x, y)))
        .filter(|&(x, y)| maze.tile(x, y) != TileType::Wall)
        .count()
}

proptest! {
    #[test]
    fn generation_is_deterministic_for_any_seed(seed in any::<u64>()) {
        let a = Maze::new(21, 21, Some(seed));
        let b = Maze::new(21, 21, Some(seed));

        for y in 0..21 {
            for x in 0..21 {
                prop_assert_eq!(a.tile(x, y), b.tile(x, y));
            }
        }
    }

    #[test]
    fn every_non_wall_cell_is_reachable(seed in any::<u64>(), half in 3u32..12) {
        // Odd dimensions, the shape the carve is built for
        let size = half * 2 + 1;
        let maze = Maze::new(size, size, Some(seed));

        prop_assert_eq!(reachable_count(&maze), non_wall_count(&maze));
    }

    #[test]
    fn exit_is_always_placed(seed in any::<u64>()) {
        let maze = Maze::new(21, 21, Some(seed));
        prop_assert_eq!(maze.count_tiles(TileType::Exit), 1);
    }

    #[test]
    fn rectangular_mazes_generate(seed in any::<u64>(), rh in 3u32..10, ch in 3u32..10) {
        let maze = Maze::new(rh * 2 + 1, ch * 2 + 1, Some(seed));
        prop_assert_eq!(maze.tile(1, 1), TileType::Empty);
        prop_assert_eq!(reachable_count(&maze), non_wall_count(&maze));
    }
}

#[test]
fn unseeded_mazes_still_satisfy_invariants() {
    let config = GenerationConfig::new(21);
    let maze = Maze::generate(&config);

    assert_eq!(maze.tile(1, 1), TileType::Empty);
    assert_eq!(maze.count_tiles(TileType::Exit), 1);
    assert_eq!(reachable_count(&maze), non_wall_count(&maze));
}
