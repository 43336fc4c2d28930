#[cfg(feature = "version")]
fn main() -> Result<(), shadow_rs::ShadowError> {
    shadow_rs::ShadowBuilder::builder().build()?;
    Ok(())
}

#[cfg(not(feature = "version"))]
fn main() {}
