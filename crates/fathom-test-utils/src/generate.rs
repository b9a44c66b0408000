//! Seeded maze generators.

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn below(rng: &mut ChaCha8Rng, n: usize) -> usize {
    (rng.next_u64() % n as u64) as usize
}

fn draw(grid: &[Vec<char>]) -> String {
    grid.iter()
        .map(|row| row.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// A perfect maze of `w` × `h` rooms carved by a randomized depth-first
/// backtracker, drawn `2w+1` wide and `2h+1` tall.
///
/// `S` is the top-left room. `T` is a random other room (or absent when
/// there is only one room). Same seed, same maze.
pub fn random_maze(seed: u64, w: usize, h: usize) -> String {
    assert!(w > 0 && h > 0, "maze needs at least one room");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut grid = vec![vec!['#'; 2 * w + 1]; 2 * h + 1];
    let mut seen = vec![false; w * h];
    let mut stack = vec![(0usize, 0usize)];
    seen[0] = true;
    grid[1][1] = '.';
    while let Some(&(x, y)) = stack.last() {
        let mut next = Vec::with_capacity(4);
        if y > 0 && !seen[(y - 1) * w + x] {
            next.push((x, y - 1));
        }
        if y + 1 < h && !seen[(y + 1) * w + x] {
            next.push((x, y + 1));
        }
        if x > 0 && !seen[y * w + x - 1] {
            next.push((x - 1, y));
        }
        if x + 1 < w && !seen[y * w + x + 1] {
            next.push((x + 1, y));
        }
        if next.is_empty() {
            stack.pop();
            continue;
        }
        let (nx, ny) = next[below(&mut rng, next.len())];
        seen[ny * w + nx] = true;
        grid[2 * ny + 1][2 * nx + 1] = '.';
        // Knock out the wall between the two rooms.
        grid[y + ny + 1][x + nx + 1] = '.';
        stack.push((nx, ny));
    }
    grid[1][1] = 'S';
    if w * h > 1 {
        let room = 1 + below(&mut rng, w * h - 1);
        grid[2 * (room / w) + 1][2 * (room % w) + 1] = 'T';
    }
    draw(&grid)
}

/// An open `w` × `h` cave inside a wall border, with roughly
/// `wall_percent`% of interior cells walled.
///
/// Unlike [`random_maze`] it has loops and may have sealed pockets. `S`
/// is the top-left interior cell. `T` is a random floor cell reachable or
/// not; tests should check reachability against the ground truth.
pub fn random_cave(seed: u64, w: usize, h: usize, wall_percent: u32) -> String {
    assert!(w > 0 && h > 0, "cave needs at least one cell");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut grid = vec![vec!['#'; w + 2]; h + 2];
    let mut floor = Vec::new();
    for y in 1..=h {
        for x in 1..=w {
            if (x, y) == (1, 1) || rng.next_u32() % 100 >= wall_percent {
                grid[y][x] = '.';
                floor.push((x, y));
            }
        }
    }
    grid[1][1] = 'S';
    if floor.len() > 1 {
        let (x, y) = floor[1 + below(&mut rng, floor.len() - 1)];
        grid[y][x] = 'T';
    }
    draw(&grid)
}
