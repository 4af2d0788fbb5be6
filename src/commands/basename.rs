//! Basename command implementation.

/// Prints the part of `path` after the last '/'.
pub fn command_basename(path: &str) -> anyhow::Result<()> {
    println!("{}", nagutils::basename(path));
    Ok(())
}
