use anyhow::Result;

pub fn execute() -> Result<()> {
    println!("thermbar version {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
