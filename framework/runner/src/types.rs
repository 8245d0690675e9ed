/// Recommended error type for a scenario `main` function. Errors from the runner convert into it
/// so you can use `?` to propagate them.
pub type TsungResult<T> = anyhow::Result<T>;
