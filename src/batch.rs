use rayon::prelude::*;

use crate::component::emit_component;
use crate::error::CompileResult;
use crate::ir::CompilationUnit;
use crate::options::CompileOptions;

/// Compile independent units in parallel.
///
/// Every unit gets its own compile context, so the results are the same as
/// compiling the units one at a time. Results are in input order.
pub fn compile_batch(
    units: &[CompilationUnit],
    options: &CompileOptions,
) -> Vec<CompileResult<String>> {
    tracing::debug!(units = units.len(), "compiling batch");
    units
        .par_iter()
        .map(|unit| emit_component(unit, options))
        .collect()
}
