//! Search lifecycle sequencing.
//!
//! [SearchSupervisor] keeps at most one search execution alive at a time and
//! guarantees that a superseded execution has fully terminated before its
//! successor starts. Without that wait two executions could overlap on a grid
//! that is about to be replaced, or a stale result could arrive after a newer
//! request. Outcomes reach the consumer over a channel the supervisor owns
//! the sending half of, so delivery is decoupled from any UI event dispatch.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use grid_util::point::Point;
use log::{info, warn};

use crate::maze_grid::MazeGrid;
use crate::search::{shortest_path, CancelToken, SearchOutcome};

/// One spawned search execution: its cancellation token and the handle used
/// to wait for true termination.
struct SearchTask {
    cancel: CancelToken,
    handle: JoinHandle<()>,
}

/// Sequences search requests so that at most one execution runs at a time
/// and only the newest request can ever deliver an outcome.
pub struct SearchSupervisor {
    grid: Option<Arc<MazeGrid>>,
    task: Option<SearchTask>,
    outcome_tx: Sender<SearchOutcome>,
}

impl SearchSupervisor {
    /// Creates a supervisor together with the receiving end of its outcome
    /// channel. Exactly one outcome arrives per request that was accepted and
    /// not superseded; cancelled executions deliver nothing.
    pub fn new() -> (SearchSupervisor, Receiver<SearchOutcome>) {
        let (outcome_tx, outcome_rx) = mpsc::channel();
        (
            SearchSupervisor {
                grid: None,
                task: None,
                outcome_tx,
            },
            outcome_rx,
        )
    }

    /// Installs a freshly generated grid. Any in-flight search is cancelled
    /// and waited for first: the outgoing grid must not be read past this
    /// call.
    pub fn install_grid(&mut self, grid: MazeGrid) {
        self.stop();
        info!("Installing {}x{} grid", grid.width(), grid.height());
        self.grid = Some(Arc::new(grid));
    }

    /// The currently installed grid, if any.
    pub fn grid(&self) -> Option<&Arc<MazeGrid>> {
        self.grid.as_ref()
    }

    /// Starts a search between two cells, superseding any search still in
    /// flight.
    ///
    /// A request with no grid installed or with an out-of-bounds or blocked
    /// endpoint is not a legal query: it is refused without touching the
    /// in-flight search and without emitting an outcome. Returns whether an
    /// execution was started.
    ///
    /// Blocks until the superseded execution has terminated; the wait is
    /// bounded by one node expansion of the running search.
    pub fn request(&mut self, source: Point, destination: Point) -> bool {
        let Some(grid) = &self.grid else {
            warn!("Search requested before a grid was installed");
            return false;
        };
        if !grid.is_free(source) || !grid.is_free(destination) {
            return false;
        }
        let grid = Arc::clone(grid);
        self.stop();

        let cancel = CancelToken::new();
        let token = cancel.clone();
        let outcome_tx = self.outcome_tx.clone();
        let handle = thread::spawn(move || {
            match shortest_path(&grid, source, destination, &token) {
                SearchOutcome::Cancelled => {}
                // A send fails only when the consumer has gone away.
                outcome => {
                    let _ = outcome_tx.send(outcome);
                }
            }
        });
        self.task = Some(SearchTask { cancel, handle });
        true
    }

    /// Reacts to an endpoint change. While only the source is fixed (the
    /// destination is merely hovered or not chosen yet) no search runs.
    pub fn endpoints_changed(&mut self, source: Point, destination: Option<Point>) -> bool {
        match destination {
            Some(destination) => self.request(source, destination),
            None => false,
        }
    }

    /// Cancels the in-flight search, if any, and blocks until its execution
    /// has fully terminated. In practice the wait is short since the engine
    /// observes the token once per node expansion, but it is not O(1).
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.cancel.cancel();
            if task.handle.join().is_err() {
                warn!("Search execution panicked");
            }
        }
    }

    /// Whether an execution is still running. A finished task that has not
    /// been superseded yet does not count.
    pub fn is_searching(&self) -> bool {
        self.task
            .as_ref()
            .is_some_and(|task| !task.handle.is_finished())
    }

    /// Tears the supervisor down, waiting for any in-flight execution.
    pub fn shutdown(&mut self) {
        self.stop();
        self.grid = None;
    }
}

impl Drop for SearchSupervisor {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn open_grid() -> MazeGrid {
        MazeGrid::from_rows(&[".........."; 10]).unwrap()
    }

    #[test]
    fn refuses_requests_without_a_grid() {
        let (mut supervisor, outcome_rx) = SearchSupervisor::new();
        assert!(!supervisor.request(Point::new(0, 0), Point::new(5, 5)));
        assert!(outcome_rx.recv_timeout(Duration::from_millis(50)).is_err());
    }

    #[test]
    fn refuses_blocked_and_out_of_bounds_endpoints() {
        let grid = MazeGrid::from_rows(&[
            "..........",
            ".#........",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
        ])
        .unwrap();
        let (mut supervisor, outcome_rx) = SearchSupervisor::new();
        supervisor.install_grid(grid);
        assert!(!supervisor.request(Point::new(0, 0), Point::new(1, 1)));
        assert!(!supervisor.request(Point::new(1, 1), Point::new(0, 0)));
        assert!(!supervisor.request(Point::new(0, 0), Point::new(10, 0)));
        assert!(outcome_rx.recv_timeout(Duration::from_millis(100)).is_err());
    }

    #[test]
    fn delivers_exactly_one_outcome_per_completed_request() {
        let (mut supervisor, outcome_rx) = SearchSupervisor::new();
        supervisor.install_grid(open_grid());
        assert!(supervisor.request(Point::new(0, 0), Point::new(9, 9)));
        match outcome_rx.recv_timeout(Duration::from_secs(5)).unwrap() {
            SearchOutcome::PathFound(path) => {
                assert_eq!(path.first(), Some(&Point::new(0, 0)));
                assert_eq!(path.last(), Some(&Point::new(9, 9)));
                assert_eq!(path.len(), 19);
            }
            other => panic!("expected a path, got {other:?}"),
        }
        supervisor.stop();
        assert!(outcome_rx.recv_timeout(Duration::from_millis(50)).is_err());
    }

    #[test]
    fn hover_without_destination_starts_nothing() {
        let (mut supervisor, _outcome_rx) = SearchSupervisor::new();
        supervisor.install_grid(open_grid());
        assert!(!supervisor.endpoints_changed(Point::new(0, 0), None));
        assert!(!supervisor.is_searching());
        assert!(supervisor.endpoints_changed(Point::new(0, 0), Some(Point::new(3, 3))));
    }

    #[test]
    fn install_grid_cancels_in_flight_search() {
        let (mut supervisor, outcome_rx) = SearchSupervisor::new();
        supervisor.install_grid(MazeGrid::generate(150, 150, 0.0).unwrap());
        assert!(supervisor.request(Point::new(0, 0), Point::new(149, 149)));
        supervisor.install_grid(open_grid());
        // The old execution is gone; a request on the new grid still works.
        assert!(supervisor.request(Point::new(0, 0), Point::new(1, 0)));
        // The first search may have finished before the regeneration, so the
        // fresh outcome is the last one delivered, not necessarily the only
        // one.
        let mut last = outcome_rx.recv_timeout(Duration::from_secs(5)).unwrap();
        while let Ok(outcome) = outcome_rx.recv_timeout(Duration::from_millis(200)) {
            last = outcome;
        }
        match last {
            SearchOutcome::PathFound(path) => {
                assert_eq!(path.last(), Some(&Point::new(1, 0)));
            }
            other => panic!("expected the fresh path, got {other:?}"),
        }
    }

    #[test]
    fn shutdown_is_clean_while_searching() {
        let (mut supervisor, _outcome_rx) = SearchSupervisor::new();
        supervisor.install_grid(MazeGrid::generate(150, 150, 0.0).unwrap());
        assert!(supervisor.request(Point::new(0, 0), Point::new(149, 149)));
        supervisor.shutdown();
        assert!(!supervisor.is_searching());
        assert!(supervisor.grid().is_none());
    }
}
