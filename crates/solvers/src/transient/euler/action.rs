/// Control actions supported by the Euler drain solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the run early and return the solution so far.
    StopEarly,
}
