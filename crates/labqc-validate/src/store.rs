use anyhow::{Context, Result};
use polars::prelude::{DataFrame, IntoLazy};
use polars::sql::SQLContext;
use tracing::debug;

/// Relation name the lab results table is registered under.
pub const LAB_RESULTS_TABLE: &str = "lab_results";

/// An in-memory SQL store scoped to the lifetime of one QC run.
///
/// Wraps a Polars [`SQLContext`]. The store is constructed by the caller and
/// dropped at the end of the run; nothing is persisted.
pub struct ResultStore {
    ctx: SQLContext,
}

impl ResultStore {
    /// Creates an empty store with no registered relations.
    pub fn new() -> Self {
        Self {
            ctx: SQLContext::new(),
        }
    }

    /// Registers `df` as the `lab_results` relation.
    ///
    /// Replace semantics: any previously registered table of that name is
    /// discarded, so loading the same frame twice is equivalent to loading
    /// it once.
    pub fn load(&mut self, df: &DataFrame) {
        debug!(rows = df.height(), table = LAB_RESULTS_TABLE, "registering relation");
        self.ctx.register(LAB_RESULTS_TABLE, df.clone().lazy());
    }

    /// Runs a read-only SQL query and materializes the result.
    pub fn query(&mut self, sql: &str) -> Result<DataFrame> {
        self.ctx
            .execute(sql)
            .with_context(|| format!("execute query: {sql}"))?
            .collect()
            .with_context(|| format!("collect query result: {sql}"))
    }
}

impl Default for ResultStore {
    fn default() -> Self {
        Self::new()
    }
}
