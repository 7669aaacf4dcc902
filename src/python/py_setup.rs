//! Setup generation bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::cards::EntityCatalog;
use crate::core::GeneratorConfig;
use crate::setup::{SetupGenerator, SetupPlanner, UserSelections};

fn value_error(e: impl std::fmt::Display) -> PyErr {
    PyErr::new::<PyValueError, _>(e.to_string())
}

fn parse_selections(json: Option<&str>) -> PyResult<UserSelections> {
    match json {
        Some(json) => serde_json::from_str(json).map_err(value_error),
        None => Ok(UserSelections::default()),
    }
}

fn config_for(seed: Option<u64>) -> GeneratorConfig {
    match seed {
        Some(seed) => GeneratorConfig::default().with_seed(seed),
        None => GeneratorConfig::default(),
    }
}

fn catalog_from_json(json: &str, sets: Option<Vec<String>>) -> PyResult<EntityCatalog> {
    EntityCatalog::from_json_str(json, sets.as_deref()).map_err(value_error)
}

/// Generate one setup and return it as JSON (result plus advisories).
#[pyfunction]
#[pyo3(signature = (catalog_json, player_count, selections_json = None, seed = None, sets = None))]
pub fn generate_setup(
    catalog_json: &str,
    player_count: u8,
    selections_json: Option<&str>,
    seed: Option<u64>,
    sets: Option<Vec<String>>,
) -> PyResult<String> {
    let catalog = catalog_from_json(catalog_json, sets)?;
    let selections = parse_selections(selections_json)?;
    let setup = SetupGenerator::new(&catalog, config_for(seed))
        .generate(player_count, &selections)
        .map_err(value_error)?;
    serde_json::to_string(&setup).map_err(value_error)
}

/// Plan the override slots for a scheme and mastermind, as JSON.
#[pyfunction]
#[pyo3(signature = (catalog_json, player_count, scheme = None, mastermind = None, sets = None))]
pub fn plan_setup(
    catalog_json: &str,
    player_count: u8,
    scheme: Option<&str>,
    mastermind: Option<&str>,
    sets: Option<Vec<String>>,
) -> PyResult<String> {
    let catalog = catalog_from_json(catalog_json, sets)?;
    let plan = SetupPlanner::plan(&catalog, &GeneratorConfig::default(), player_count, scheme, mastermind)
        .map_err(value_error)?;
    serde_json::to_string(&plan).map_err(value_error)
}

/// Python wrapper holding a parsed catalog.
#[pyclass(name = "SetupGenerator")]
pub struct PySetupGenerator {
    catalog: EntityCatalog,
}

#[pymethods]
impl PySetupGenerator {
    /// Parse the catalog once, keeping only `sets` when given.
    #[new]
    #[pyo3(signature = (catalog_json, sets = None))]
    fn new(catalog_json: &str, sets: Option<Vec<String>>) -> PyResult<Self> {
        Ok(Self {
            catalog: catalog_from_json(catalog_json, sets)?,
        })
    }

    /// Generate one setup as JSON.
    #[pyo3(signature = (player_count, selections_json = None, seed = None))]
    fn generate(&self, player_count: u8, selections_json: Option<&str>, seed: Option<u64>) -> PyResult<String> {
        let selections = parse_selections(selections_json)?;
        let setup = SetupGenerator::new(&self.catalog, config_for(seed))
            .generate(player_count, &selections)
            .map_err(value_error)?;
        serde_json::to_string(&setup).map_err(value_error)
    }

    /// Manual-override options for `heroes`, `masterminds`, `villains`,
    /// `henchmen` or `schemes`.
    fn options(&self, category: &str) -> PyResult<Vec<String>> {
        let category = category.parse().map_err(value_error)?;
        Ok(self.catalog.display_options(category))
    }

    fn __repr__(&self) -> String {
        format!(
            "SetupGenerator(heroes={}, schemes={})",
            self.catalog.heroes().len(),
            self.catalog.schemes().len()
        )
    }
}
