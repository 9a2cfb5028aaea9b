#[cfg(test)]
#[path = "../../../../tests/unit/solver/search/local/exchange_swap_test.rs"]
mod exchange_swap_test;

use super::*;

/// A local search operator which swaps two nodes served by different vehicles.
#[derive(Default)]
pub struct ExchangeSwap {}

impl LocalOperator for ExchangeSwap {
    fn explore(&self, search_ctx: &SearchContext<'_>, random: &dyn Random) -> Option<Vec<TourChange>> {
        let vehicles = shuffled_vehicles(search_ctx, random);
        let routes = search_ctx.routes();

        vehicles.iter().enumerate().find_map(|(order, &first)| {
            vehicles.iter().skip(order + 1).find_map(|&second| {
                let (a, b) = (&routes[first], &routes[second]);

                (1..a.len().saturating_sub(1)).find_map(|i| {
                    (1..b.len().saturating_sub(1)).find_map(|j| {
                        let (x, y) = (a[i], b[j]);

                        if !search_ctx.is_feasible_assignment(x, second) || !search_ctx.is_feasible_assignment(y, first)
                        {
                            return None;
                        }

                        let first_delta =
                            search_ctx.arc_delta(&[(a[i - 1], x), (x, a[i + 1])], &[(a[i - 1], y), (y, a[i + 1])]);
                        let second_delta =
                            search_ctx.arc_delta(&[(b[j - 1], y), (y, b[j + 1])], &[(b[j - 1], x), (x, b[j + 1])]);
                        let delta = search_ctx.augmented_delta(&[(first, first_delta), (second, second_delta)]);

                        accept_if_improving(search_ctx, delta, || {
                            let mut new_a = a.clone();
                            let mut new_b = b.clone();
                            new_a[i] = y;
                            new_b[j] = x;

                            vec![
                                TourChange { vehicle: first, route: new_a },
                                TourChange { vehicle: second, route: new_b },
                            ]
                        })
                    })
                })
            })
        })
    }
}
