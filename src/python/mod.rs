//! Python bindings for the setup generator.
//!
//! Everything crosses the boundary as JSON text so the Python side needs no
//! wrapper types for catalog records or results.
//!
//! # Quick Start
//!
//! ```python
//! import legendary_setup as ls
//!
//! catalog = open("catalog.json").read()
//!
//! # One-shot generation
//! setup = json.loads(ls.generate_setup(catalog, 3, seed=42))
//!
//! # Reuse a parsed catalog, restricted to some sets
//! gen = ls.SetupGenerator(catalog, sets=["Core Set", "Dark City"])
//! setup = json.loads(gen.generate(2, '{"mastermind": "Magneto"}'))
//! ```

use pyo3::prelude::*;

mod py_setup;

pub use py_setup::*;

/// legendary_setup: scheme-driven setup generation.
#[pymodule]
fn legendary_setup(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySetupGenerator>()?;
    m.add_function(wrap_pyfunction!(generate_setup, m)?)?;
    m.add_function(wrap_pyfunction!(plan_setup, m)?)?;
    Ok(())
}
