#![cfg(feature = "ffi")]

use pathkit::ffi::{pk_solve_tour, PK_INVALID_INPUT, PK_NO_FEASIBLE_TOUR, PK_NULL_POINTER, PK_OK};

// Row-major triangle, 0 meaning no edge
const TRIANGLE: [f64; 9] = [
    0.0, 1.5, 4.0,
    1.5, 0.0, 2.0,
    4.0, 2.0, 0.0,
];

fn solve(weights: &[f64], n: usize, closed: bool) -> (i32, Vec<usize>, f64) {
    let mut order = vec![usize::MAX; n];
    let mut cost = -1.0;
    let status = unsafe { pk_solve_tour(weights.as_ptr(), n, 0, closed, order.as_mut_ptr(), &mut cost) };
    (status, order, cost)
}

#[test]
fn test_solves_triangle() {
    let (status, order, cost) = solve(&TRIANGLE, 3, true);
    assert_eq!(status, PK_OK);
    assert_eq!(order, vec![0, 2, 1]);
    assert_eq!(cost, 7.5);

    let (status, order, cost) = solve(&TRIANGLE, 3, false);
    assert_eq!(status, PK_OK);
    assert_eq!(order, vec![0, 1, 2]);
    assert_eq!(cost, 3.5);
}

#[test]
fn test_rejects_non_finite_weights() {
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let mut weights = TRIANGLE;
        weights[2] = bad;
        weights[6] = bad;

        let (status, order, cost) = solve(&weights, 3, false);
        assert_eq!(status, PK_INVALID_INPUT, "weight {} should be rejected", bad);
        assert_eq!(order, vec![usize::MAX; 3], "outputs stay untouched");
        assert_eq!(cost, -1.0);
    }
}

#[test]
fn test_status_codes() {
    let line = [
        0.0, 1.0, 0.0,
        1.0, 0.0, 1.0,
        0.0, 1.0, 0.0,
    ];
    assert_eq!(solve(&line, 3, true).0, PK_NO_FEASIBLE_TOUR);
    assert_eq!(solve(&[0.0], 1, false).0, PK_INVALID_INPUT);

    let mut cost = 0.0;
    let status = unsafe { pk_solve_tour(TRIANGLE.as_ptr(), 3, 0, false, std::ptr::null_mut(), &mut cost) };
    assert_eq!(status, PK_NULL_POINTER);
}
