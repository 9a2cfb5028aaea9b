//! A time window feature.
//!
//! Travel time equals travel distance. Each vehicle leaves the depot at any time inside the
//! depot window (or the horizon if there is none), may wait up to `max_waiting` before every
//! visit and must arrive at each node inside its window and back at the depot inside the
//! depot window. As waiting is bounded, a late departure can be required, so feasibility is
//! checked by propagating an interval of possible arrival times along the tour.

#[cfg(test)]
#[path = "../../../tests/unit/construction/features/time_windows_test.rs"]
mod time_windows_test;

use super::*;

/// Creates the time dimension as a hard constraint.
pub fn create_time_window_feature(
    name: &str,
    matrix: Arc<DistanceMatrix>,
    nodes: &[Node],
    limits: &DimensionLimits,
) -> GenericResult<Feature> {
    if nodes.is_empty() {
        return Err("cannot create time window feature without nodes".into());
    }

    if matrix.size() != nodes.len() {
        return Err(format!("matrix size {} does not match {} nodes", matrix.size(), nodes.len()).into());
    }

    let schedule = TourSchedule {
        matrix,
        windows: nodes.iter().map(|node| node.time_window).collect(),
        horizon: limits.max_time,
        max_waiting: limits.max_waiting,
    };

    FeatureBuilder::default().with_name(name).with_constraint(TimeWindowConstraint { schedule }).build()
}

/// Computes arrival times of a tour under time window constraints.
pub struct TourSchedule {
    matrix: Arc<DistanceMatrix>,
    windows: Vec<Option<TimeWindow>>,
    horizon: Timestamp,
    max_waiting: Timestamp,
}

impl TourSchedule {
    /// Creates a new instance of `TourSchedule`.
    pub fn new(
        matrix: Arc<DistanceMatrix>,
        windows: Vec<Option<TimeWindow>>,
        horizon: Timestamp,
        max_waiting: Timestamp,
    ) -> Self {
        Self { matrix, windows, horizon, max_waiting }
    }

    /// Returns intervals of feasible arrival times at every stop of the tour, including the
    /// depot departure (first) and the depot return (last). Returns `None` if the tour is
    /// infeasible. Intervals are forward reachable only: a value inside an interval is reachable
    /// from the departure, but not every value can be continued to the end of the tour.
    pub fn arrivals(&self, tour: &[usize]) -> Option<Vec<TimeWindow>> {
        let mut current = self.restrict(DEPOT_INDEX, TimeWindow::new(0, self.horizon))?;
        let mut arrivals = Vec::with_capacity(tour.len() + 2);
        arrivals.push(current);

        let mut prev = DEPOT_INDEX;
        for &node in tour.iter().chain(std::iter::once(&DEPOT_INDEX)) {
            let transit = self.matrix.distance(prev, node);
            let reachable = TimeWindow::new(current.start + transit, current.end + transit + self.max_waiting);

            current = self.restrict(node, reachable)?;
            arrivals.push(current);
            prev = node;
        }

        Some(arrivals)
    }

    /// Checks whether the tour is feasible.
    pub fn is_feasible(&self, tour: &[usize]) -> bool {
        self.arrivals(tour).is_some()
    }

    fn restrict(&self, node: usize, interval: TimeWindow) -> Option<TimeWindow> {
        let start = interval.start.max(0);
        let end = interval.end.min(self.horizon);

        let (start, end) = match self.windows.get(node).copied().flatten() {
            Some(tw) => (start.max(tw.start), end.min(tw.end)),
            None => (start, end),
        };

        if start <= end { Some(TimeWindow::new(start, end)) } else { None }
    }
}

struct TimeWindowConstraint {
    schedule: TourSchedule,
}

impl FeatureConstraint for TimeWindowConstraint {
    fn evaluate(&self, move_ctx: &MoveContext<'_>) -> Option<ConstraintViolation> {
        let is_feasible = match move_ctx {
            MoveContext::Assignment { node, .. } => self.schedule.is_feasible(std::slice::from_ref(node)),
            MoveContext::Tour { tour, .. } => self.schedule.is_feasible(tour),
        };

        if is_feasible { ConstraintViolation::success() } else { ConstraintViolation::fail(TIME_CONSTRAINT_CODE) }
    }
}
