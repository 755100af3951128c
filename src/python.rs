use std::collections::HashMap;

use ordered_float::OrderedFloat;
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::algorithm::dijkstra::shortest_distances as dijkstra_distances;
use crate::algorithm::traversal;
use crate::algorithm::tsp::solve_tsp as exact_tour;
use crate::graph::{AdjacencyMap, DistanceMatrix};
use crate::Error;

fn to_py_err(err: Error) -> PyErr {
    match err {
        Error::AlgorithmError(msg) => PyRuntimeError::new_err(msg),
        other => PyValueError::new_err(other.to_string()),
    }
}

fn to_matrix(rows: Vec<Vec<f64>>) -> PyResult<DistanceMatrix<OrderedFloat<f64>>> {
    if rows.iter().flatten().any(|w| !w.is_finite()) {
        return Err(PyValueError::new_err("distances must be finite"));
    }
    let rows = rows
        .into_iter()
        .map(|row| row.into_iter().map(OrderedFloat).collect())
        .collect();
    DistanceMatrix::from_rows(rows).map_err(to_py_err)
}

#[pyfunction]
fn breadth_first_search(edges: HashMap<usize, Vec<usize>>, source: usize, sink: usize) -> PyResult<Vec<usize>> {
    traversal::breadth_first_search(&AdjacencyMap::from(edges), source, sink).map_err(to_py_err)
}

#[pyfunction]
fn depth_first_search(edges: HashMap<usize, Vec<usize>>, source: usize, sink: usize) -> PyResult<Vec<usize>> {
    traversal::depth_first_search(&AdjacencyMap::from(edges), source, sink).map_err(to_py_err)
}

/// Unreachable nodes come back as `inf`
#[pyfunction]
fn shortest_distances(distances: Vec<Vec<f64>>, start: usize) -> PyResult<Vec<f64>> {
    let matrix = to_matrix(distances)?;
    let result = dijkstra_distances(&matrix, start).map_err(to_py_err)?;
    Ok(result
        .into_iter()
        .map(|d| d.map_or(f64::INFINITY, OrderedFloat::into_inner))
        .collect())
}

/// Returns `(cost, route)`; a closed route repeats the start at the end
#[pyfunction]
#[pyo3(signature = (distances, start, closed = false))]
fn solve_tsp(distances: Vec<Vec<f64>>, start: usize, closed: bool) -> PyResult<(f64, Vec<usize>)> {
    let matrix = to_matrix(distances)?;
    let tour = exact_tour(&matrix, start, closed).map_err(to_py_err)?;
    Ok((tour.cost.into_inner(), tour.route()))
}

#[pymodule]
fn pathkit_py(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(breadth_first_search, m)?)?;
    m.add_function(wrap_pyfunction!(depth_first_search, m)?)?;
    m.add_function(wrap_pyfunction!(shortest_distances, m)?)?;
    m.add_function(wrap_pyfunction!(solve_tsp, m)?)?;
    Ok(())
}
