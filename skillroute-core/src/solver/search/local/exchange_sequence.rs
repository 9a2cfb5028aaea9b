#[cfg(test)]
#[path = "../../../../tests/unit/solver/search/local/exchange_sequence_test.rs"]
mod exchange_sequence_test;

use super::*;

/// A local search operator which moves a sequence of consecutive nodes to another position in
/// the same or another route. With sequence length of one, it is a relocate operator, with
/// lengths of two or three, it is known as or-opt.
pub struct ExchangeSequence {
    min_length: usize,
    max_length: usize,
}

impl ExchangeSequence {
    /// Creates a new instance of `ExchangeSequence`.
    pub fn new(min_length: usize, max_length: usize) -> Self {
        assert!(min_length > 0 && min_length <= max_length);

        Self { min_length, max_length }
    }
}

impl LocalOperator for ExchangeSequence {
    fn explore(&self, search_ctx: &SearchContext<'_>, random: &dyn Random) -> Option<Vec<TourChange>> {
        let vehicles = shuffled_vehicles(search_ctx, random);

        vehicles.iter().find_map(|&source| {
            let size = search_ctx.routes()[source].len();

            (self.min_length..=self.max_length).find_map(|length| {
                // NOTE sequence is route[start..start + length], the last customer is at size - 2
                (1..size.saturating_sub(length)).find_map(|start| {
                    vehicles.iter().find_map(|&target| {
                        let sequence = Sequence { source, start, length };

                        if source == target {
                            try_move_within(search_ctx, &sequence)
                        } else {
                            try_move_between(search_ctx, &sequence, target)
                        }
                    })
                })
            })
        })
    }
}

struct Sequence {
    source: usize,
    start: usize,
    length: usize,
}

impl Sequence {
    fn end(&self) -> usize {
        self.start + self.length
    }

    fn nodes<'a>(&self, route: &'a [usize]) -> &'a [usize] {
        &route[self.start..self.end()]
    }

    /// Returns removal arcs: removed and added one.
    fn removal_arcs(&self, route: &[usize]) -> ([(usize, usize); 2], (usize, usize)) {
        let (prev, next) = (route[self.start - 1], route[self.end()]);
        let (first, last) = (route[self.start], route[self.end() - 1]);

        ([(prev, first), (last, next)], (prev, next))
    }
}

fn try_move_within(search_ctx: &SearchContext<'_>, sequence: &Sequence) -> Option<Vec<TourChange>> {
    let route = &search_ctx.routes()[sequence.source];
    let nodes = sequence.nodes(route);
    let (first, last) = (nodes[0], nodes[nodes.len() - 1]);
    let (removed, added) = sequence.removal_arcs(route);

    // NOTE positions are in the route without the sequence
    let rest = route[..sequence.start].iter().chain(route[sequence.end()..].iter()).copied().collect::<Vec<_>>();

    (0..rest.len() - 1).filter(|&position| position + 1 != sequence.start).find_map(|position| {
        let (prev, next) = (rest[position], rest[position + 1]);
        let delta = search_ctx.arc_delta(
            &[removed[0], removed[1], (prev, next)],
            &[added, (prev, first), (last, next)],
        );
        let delta = search_ctx.augmented_delta(&[(sequence.source, delta)]);

        accept_if_improving(search_ctx, delta, || {
            let mut new_route = rest.clone();
            new_route.splice(position + 1..position + 1, nodes.iter().copied());

            vec![TourChange { vehicle: sequence.source, route: new_route }]
        })
    })
}

fn try_move_between(search_ctx: &SearchContext<'_>, sequence: &Sequence, target: usize) -> Option<Vec<TourChange>> {
    let source_route = &search_ctx.routes()[sequence.source];
    let target_route = &search_ctx.routes()[target];
    let nodes = sequence.nodes(source_route);
    let (first, last) = (nodes[0], nodes[nodes.len() - 1]);

    if !nodes.iter().all(|&node| search_ctx.is_feasible_assignment(node, target)) {
        return None;
    }

    let (removed, added) = sequence.removal_arcs(source_route);
    let source_delta = search_ctx.arc_delta(&removed, &[added]);

    (0..target_route.len() - 1).find_map(|position| {
        let (prev, next) = (target_route[position], target_route[position + 1]);
        let target_delta = search_ctx.arc_delta(&[(prev, next)], &[(prev, first), (last, next)]);
        let delta = search_ctx.augmented_delta(&[(sequence.source, source_delta), (target, target_delta)]);

        accept_if_improving(search_ctx, delta, || {
            let new_source = source_route[..sequence.start]
                .iter()
                .chain(source_route[sequence.end()..].iter())
                .copied()
                .collect::<Vec<_>>();

            let mut new_target = target_route.clone();
            new_target.splice(position + 1..position + 1, nodes.iter().copied());

            vec![
                TourChange { vehicle: sequence.source, route: new_source },
                TourChange { vehicle: target, route: new_target },
            ]
        })
    })
}
