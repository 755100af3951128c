use libc::{c_int, size_t};
use ordered_float::OrderedFloat;

use crate::algorithm::tsp::solve_tsp;
use crate::graph::DistanceMatrix;
use crate::Error;

pub const PK_OK: c_int = 0;
pub const PK_NULL_POINTER: c_int = -1;
pub const PK_INVALID_INPUT: c_int = -2;
pub const PK_NO_FEASIBLE_TOUR: c_int = -3;
pub const PK_INTERNAL_ERROR: c_int = -4;

fn status(err: &Error) -> c_int {
    match err {
        Error::NoFeasibleTour => PK_NO_FEASIBLE_TOUR,
        Error::AlgorithmError(_) => PK_INTERNAL_ERROR,
        _ => PK_INVALID_INPUT,
    }
}

/// Solves an exact tour over a row-major `n x n` matrix of `f64` weights.
///
/// On success writes `n` node ids to `out_order` and the cost to `out_cost`
/// and returns `PK_OK`. Negative return values are error codes; NaN or
/// infinite weights are `PK_INVALID_INPUT`.
///
/// # Safety
/// `weights` must point to `n * n` readable `f64`s and `out_order` to `n`
/// writable `size_t`s.
#[no_mangle]
pub unsafe extern "C" fn pk_solve_tour(
    weights: *const f64,
    n: size_t,
    start: size_t,
    closed: bool,
    out_order: *mut size_t,
    out_cost: *mut f64,
) -> c_int {
    if weights.is_null() || out_order.is_null() || out_cost.is_null() {
        return PK_NULL_POINTER;
    }

    let Some(cells) = n.checked_mul(n) else {
        return PK_INVALID_INPUT;
    };
    let flat = std::slice::from_raw_parts(weights, cells);
    if !flat.iter().all(|w| w.is_finite()) {
        return PK_INVALID_INPUT;
    }
    let rows = flat
        .chunks(n.max(1))
        .take(n)
        .map(|row| row.iter().copied().map(OrderedFloat).collect())
        .collect();

    let tour = match DistanceMatrix::from_rows(rows).and_then(|m| solve_tsp(&m, start, closed)) {
        Ok(tour) => tour,
        Err(e) => return status(&e),
    };

    let order = std::slice::from_raw_parts_mut(out_order, n);
    order.copy_from_slice(&tour.order);
    *out_cost = tour.cost.into_inner();
    PK_OK
}
