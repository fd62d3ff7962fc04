use crate::error::{ContactgridError, Result};
use contactgrid_engine::builtins::builtin;
use contactgrid_engine::engine::{CellInput, CellOutput, ContactExtractor};

/// Evaluate a named contact function (e.g. `FIRST_NAME`) on a cell or range.
pub fn eval_function(
    name: &str,
    extractor: &ContactExtractor,
    input: &CellInput,
) -> Result<CellOutput> {
    let Some(func) = builtin(name) else {
        return Err(ContactgridError::UnknownFunction(name.to_string()));
    };
    Ok(func.apply(extractor, input))
}
