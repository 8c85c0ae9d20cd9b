use grid_util::point::Point;
use maze_search::{shortest_path, CancelToken, MazeGrid, SearchOutcome};

// In this demo a path is found on a fixed maze with shape
// S.........
// #########.
// ..........
// .#########
// E.........
// (padded to the minimum grid size)
// S marks the source
// E marks the destination
fn main() {
    let grid = MazeGrid::from_rows(&[
        "..........",
        "#########.",
        "..........",
        ".#########",
        "..........",
        "..........",
        "..........",
        "..........",
        "..........",
        "..........",
    ])
    .unwrap();
    let source = Point::new(0, 0);
    let destination = Point::new(0, 4);
    match shortest_path(&grid, source, destination, &CancelToken::new()) {
        SearchOutcome::PathFound(path) => {
            println!("A path has been found:");
            for p in path {
                println!("{:?}", p);
            }
        }
        SearchOutcome::NoPathExists => println!("No path exists"),
        SearchOutcome::Cancelled => unreachable!(),
    }
}
