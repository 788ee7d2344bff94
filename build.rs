use anyhow::Result;
use vergen::EmitBuilder;

// Exposes VERGEN_GIT_SHA for `fitlog --version`. Outside a git checkout vergen
// sets it to VERGEN_IDEMPOTENT_OUTPUT, which the CLI leaves out of the version.
fn main() -> Result<()> {
    EmitBuilder::builder().git_sha(true).emit()?;
    Ok(())
}
