#[cfg(test)]
#[path = "../../../../tests/unit/solver/search/local/exchange_2opt_test.rs"]
mod exchange_2opt_test;

use super::*;

/// A local search operator which tries to resolve route intersection by reversing a route
/// segment (2-opt). As distances and penalties are symmetric, only two boundary arcs change.
#[derive(Default)]
pub struct ExchangeTwoOpt {}

impl LocalOperator for ExchangeTwoOpt {
    fn explore(&self, search_ctx: &SearchContext<'_>, random: &dyn Random) -> Option<Vec<TourChange>> {
        shuffled_vehicles(search_ctx, random).into_iter().find_map(|vehicle| {
            let route = &search_ctx.routes()[vehicle];
            let size = route.len();

            // NOTE reverse route[i + 1..=j], both depots stay in place
            (0..size.saturating_sub(3)).find_map(|i| {
                (i + 2..size - 1).find_map(|j| {
                    let delta = search_ctx.arc_delta(
                        &[(route[i], route[i + 1]), (route[j], route[j + 1])],
                        &[(route[i], route[j]), (route[i + 1], route[j + 1])],
                    );
                    let delta = search_ctx.augmented_delta(&[(vehicle, delta)]);

                    accept_if_improving(search_ctx, delta, || {
                        let mut new_route = route.clone();
                        new_route[i + 1..=j].reverse();

                        vec![TourChange { vehicle, route: new_route }]
                    })
                })
            })
        })
    }
}
