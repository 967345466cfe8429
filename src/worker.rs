/*!
# Background Queries

[`QueryWorker`] runs graph queries on a dedicated, reusable thread so that the calling thread
can continue while an `O(n^2)` search is in progress. Spawning a thread per query is
considerably slower than handing work to a thread that is already waiting.

The protocol is strictly one query at a time:

1. [`QueryWorker::assign`] hands over an immutable snapshot (`Arc<WeightedGraph>`) and a
   [`Query`]. Assigning while a previous query has not been collected is rejected with
   [`WorkerError::Busy`]; work is never silently dropped.
2. [`QueryWorker::is_done`] polls for completion without blocking.
3. [`QueryWorker::join`] blocks until the query finished and returns its result.

# Example
```
use std::sync::Arc;
use wgraphs::{prelude::*, worker::*};

let graph = WeightedGraph::from_edges(
    WeightBounds::<u32>::default(),
    ['A', 'B', 'C'],
    [(0, 1, 2), (1, 2, 3)],
)
.unwrap();
let snapshot = Arc::new(graph);

let mut worker = QueryWorker::new().unwrap();
worker.assign(snapshot.clone(), Query::ShortestPath { source: 0, destination: 2 }).unwrap();

match worker.join().unwrap() {
    QueryOutcome::ShortestPath(path) => assert_eq!(path.distance(), Some(5)),
    QueryOutcome::SpanningTree(_) => unreachable!(),
}
```
*/

use std::{
    sync::Arc,
    thread::{self, JoinHandle},
    time::Duration,
};

use parking_lot::{Condvar, Mutex, MutexGuard};
use thiserror::Error;
use tracing::{debug, warn};

use crate::{algo::*, prelude::*};

/// A query that can be run by a [`QueryWorker`]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Query {
    /// See [`WeightedGraph::shortest_path`]
    ShortestPath { source: Node, destination: Node },
    /// See [`WeightedGraph::minimum_spanning_tree`]
    SpanningTree { source: Node },
}

/// Result of a successfully executed [`Query`]
#[derive(Debug, Clone)]
pub enum QueryOutcome<V, W> {
    ShortestPath(ShortestPath<W>),
    SpanningTree(SpanningTree<WeightedGraph<V, W>>),
}

impl Query {
    /// Runs the query synchronously on the calling thread
    ///
    /// # Errors
    /// Propagates the [`GraphError`] of the underlying graph operation.
    pub fn run<V, W>(&self, graph: &WeightedGraph<V, W>) -> Result<QueryOutcome<V, W>, GraphError>
    where
        V: Clone,
        W: Weight,
    {
        match *self {
            Query::ShortestPath {
                source,
                destination,
            } => graph
                .shortest_path(source, destination)
                .map(QueryOutcome::ShortestPath),
            Query::SpanningTree { source } => graph
                .minimum_spanning_tree(source)
                .map(QueryOutcome::SpanningTree),
        }
    }
}

/// Errors of the worker protocol
#[derive(Debug, Error)]
pub enum WorkerError {
    /// A query was assigned while the previous one has not been joined yet
    #[error("worker is still busy with a previous query")]
    Busy,

    /// `join` was called without an assigned query
    #[error("no query has been assigned")]
    Idle,

    /// The worker thread terminated before delivering a result
    #[error("worker thread terminated unexpectedly")]
    Terminated,

    /// The worker thread could not be spawned
    #[error("failed to spawn worker thread: {0}")]
    Spawn(#[from] std::io::Error),

    /// The query itself was rejected by the graph
    #[error(transparent)]
    Query(#[from] GraphError),
}

const JOIN_POLL_INTERVAL: Duration = Duration::from_millis(50);

type Job<V, W> = (Arc<WeightedGraph<V, W>>, Query);

struct State<V, W> {
    job: Option<Job<V, W>>,
    result: Option<Result<QueryOutcome<V, W>, GraphError>>,
    /// A query was assigned and its result has not been collected yet
    assigned: bool,
    shutdown: bool,
}

struct Shared<V, W> {
    state: Mutex<State<V, W>>,
    start: Condvar,
    finish: Condvar,
}

/// A reusable background thread executing one [`Query`] at a time.
pub struct QueryWorker<V, W> {
    shared: Arc<Shared<V, W>>,
    handle: Option<JoinHandle<()>>,
}

impl<V, W> QueryWorker<V, W>
where
    V: Clone + Send + Sync + 'static,
    W: Weight + Send + Sync + 'static,
{
    /// Spawns the worker thread.
    ///
    /// # Errors
    /// Returns [`WorkerError::Spawn`] if the OS refuses to create a thread.
    pub fn new() -> Result<Self, WorkerError> {
        let shared = Arc::new(Shared {
            state: Mutex::new(State {
                job: None,
                result: None,
                assigned: false,
                shutdown: false,
            }),
            start: Condvar::new(),
            finish: Condvar::new(),
        });

        let handle = thread::Builder::new().name("wgraphs-query".into()).spawn({
            let shared = shared.clone();
            move || work_loop(&shared)
        })?;

        debug!("query worker started");
        Ok(Self {
            shared,
            handle: Some(handle),
        })
    }

    /// Hands a query over to the worker thread and returns immediately.
    ///
    /// # Errors
    /// Returns [`WorkerError::Busy`] if the previous query has not been joined yet.
    pub fn assign(&mut self, graph: Arc<WeightedGraph<V, W>>, query: Query) -> Result<(), WorkerError> {
        let mut state = self.shared.state.lock();
        if state.assigned {
            return Err(WorkerError::Busy);
        }

        debug!(?query, "assigning query");
        state.job = Some((graph, query));
        state.result = None;
        state.assigned = true;
        self.shared.start.notify_one();
        Ok(())
    }

    /// Returns *true* if the assigned query has finished (or if nothing is assigned)
    pub fn is_done(&self) -> bool {
        let state = self.shared.state.lock();
        !state.assigned || state.result.is_some()
    }

    /// Blocks until the assigned query has finished and returns its outcome.
    /// Afterwards the worker accepts a new query.
    ///
    /// # Errors
    /// Returns [`WorkerError::Idle`] if nothing was assigned, [`WorkerError::Terminated`] if the
    /// worker thread died and [`WorkerError::Query`] if the graph rejected the query.
    pub fn join(&mut self) -> Result<QueryOutcome<V, W>, WorkerError> {
        let mut state = self.shared.state.lock();
        if !state.assigned {
            return Err(WorkerError::Idle);
        }

        loop {
            if let Some(result) = state.result.take() {
                state.assigned = false;
                return Ok(result?);
            }

            if self.handle.as_ref().is_none_or(|h| h.is_finished()) {
                warn!("query worker terminated without a result");
                state.assigned = false;
                return Err(WorkerError::Terminated);
            }

            // the timeout only matters if the worker panicked between notifying and terminating
            self.shared.finish.wait_for(&mut state, JOIN_POLL_INTERVAL);
        }
    }
}

impl<V, W> Drop for QueryWorker<V, W> {
    fn drop(&mut self) {
        {
            let mut state = self.shared.state.lock();
            state.shutdown = true;
            self.shared.start.notify_all();
        }

        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("query worker panicked");
            }
        }
    }
}

/// Signals `finish` when dropped, so that a panicking query does not leave `join` waiting forever
struct FinishGuard<'a, V, W>(&'a Shared<V, W>);

impl<V, W> Drop for FinishGuard<'_, V, W> {
    fn drop(&mut self) {
        self.0.finish.notify_all();
    }
}

fn work_loop<V, W>(shared: &Shared<V, W>)
where
    V: Clone,
    W: Weight,
{
    let mut state = shared.state.lock();
    loop {
        while state.job.is_none() && !state.shutdown {
            shared.start.wait(&mut state);
        }
        if state.shutdown {
            break;
        }

        let Some((graph, query)) = state.job.take() else {
            continue;
        };
        let _finish = FinishGuard(shared);
        let result = MutexGuard::unlocked(&mut state, || query.run(&graph));

        state.result = Some(result);
    }
    debug!("query worker stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;

    #[test]
    fn runs_queries_in_sequence() {
        let snapshot = Arc::new(fixture_abcd());
        let mut worker = QueryWorker::new().unwrap();

        for (source, destination) in [(0, 3), (3, 0), (1, 1)] {
            worker
                .assign(
                    snapshot.clone(),
                    Query::ShortestPath {
                        source,
                        destination,
                    },
                )
                .unwrap();

            let expected = snapshot.shortest_path(source, destination).unwrap();
            match worker.join().unwrap() {
                QueryOutcome::ShortestPath(path) => assert_eq!(path, expected),
                QueryOutcome::SpanningTree(_) => panic!("wrong outcome"),
            }
        }

        worker
            .assign(snapshot.clone(), Query::SpanningTree { source: 2 })
            .unwrap();
        match worker.join().unwrap() {
            QueryOutcome::SpanningTree(SpanningTree::Found { tree }) => {
                assert_eq!(tree.number_of_edges(), 3);
                assert_eq!(tree.vertices(), snapshot.vertices());
                assert!(tree.is_fresh());
            }
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn rejects_second_assignment() {
        let rng = &mut seeded_rng(40);
        let snapshot = Arc::new(random_graph(rng, 200, 0.5, 1..100));
        let mut worker = QueryWorker::new().unwrap();

        assert!(matches!(worker.join(), Err(WorkerError::Idle)));
        assert!(worker.is_done());

        let query = Query::SpanningTree { source: 0 };
        worker.assign(snapshot.clone(), query).unwrap();
        assert!(matches!(
            worker.assign(snapshot.clone(), query),
            Err(WorkerError::Busy)
        ));

        // finished but not yet joined is still busy
        while !worker.is_done() {
            std::thread::sleep(Duration::from_millis(1));
        }
        assert!(matches!(
            worker.assign(snapshot.clone(), query),
            Err(WorkerError::Busy)
        ));

        assert!(worker.join().is_ok());
        assert!(worker.assign(snapshot, query).is_ok());
    }

    #[test]
    fn propagates_graph_errors() {
        let mut graph = fixture_abcd();
        graph.add_vertex('E').unwrap();
        let mut worker = QueryWorker::new().unwrap();

        worker
            .assign(Arc::new(graph), Query::SpanningTree { source: 0 })
            .unwrap();
        assert!(matches!(
            worker.join(),
            Err(WorkerError::Query(GraphError::StaleState))
        ));

        worker
            .assign(
                Arc::new(fixture_abcd()),
                Query::ShortestPath {
                    source: 0,
                    destination: 9,
                },
            )
            .unwrap();
        assert!(matches!(
            worker.join(),
            Err(WorkerError::Query(GraphError::VertexOutOfRange { index: 9, len: 4 }))
        ));
    }
}
