//! Classic algorithm demos: string hashing, linear and binary search,
//! five comparison sorts, and shortest paths over randomly generated
//! weighted graphs, timed across ten trials of growing size.
//!
//! The crate is the computational core of a set of demo pages. It exposes
//! the rows and `(label, series)` pairs a table or chart renderer needs;
//! rendering itself, along with form handling, lives with the caller.

pub mod error;
pub mod graph;
pub mod hash;
pub mod paths;
pub mod search;
pub mod sort;
pub mod trials;

pub use error::{Error, Result};
pub use graph::{AdjacencyMatrix, Edge, Graph, NodeId, Topology};
pub use hash::{hash_values, string_hash};
pub use paths::{bellman_ford, dijkstra, path_edges, BellmanFordRun, PathOutcome, ShortestPathTree};
pub use search::SearchKind;
pub use sort::{QuickStrategy, SortKind};
pub use trials::{
    run_search_trials, run_sort_comparison, run_sort_trials, SizeSchedule, TrialOutcome,
    TrialRecord, TrialReport, TRIAL_COUNT,
};
