use grid_util::point::Point;
use maze_search::{MazeConfig, MazeGrid, SearchOutcome, SearchSupervisor};

// Simulates an interactive session: a maze is generated from configuration,
// the destination "hovers" across a few cells in quick succession and only
// the newest query's result is rendered.
fn main() {
    let config = MazeConfig {
        width: 80,
        height: 60,
        density: 0.3,
    };
    let (mut supervisor, outcomes) = SearchSupervisor::new();
    supervisor.install_grid(MazeGrid::from_config(&config).unwrap());

    let source = Point::new(0, 0);
    for hover in [
        Point::new(79, 59),
        Point::new(40, 59),
        Point::new(79, 30),
    ] {
        // Requests on blocked cells are refused outright, like clicks on
        // walls in the visualizer.
        if !supervisor.endpoints_changed(source, Some(hover)) {
            println!("{hover:?} is not a legal destination, skipped");
        }
    }

    // Each hover superseded the previous search, so at most a handful of
    // outcomes arrive and the last one belongs to the newest query.
    while let Ok(outcome) = outcomes.recv_timeout(std::time::Duration::from_secs(2)) {
        match outcome {
            SearchOutcome::PathFound(path) => {
                println!("path of {} cells to {:?}", path.len(), path.last().unwrap())
            }
            SearchOutcome::NoPathExists => println!("destination is walled off"),
            SearchOutcome::Cancelled => unreachable!(),
        }
    }
    supervisor.shutdown();
}
