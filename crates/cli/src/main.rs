fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    stockroom_cli::demo::run(&mut out)?;

    tracing::debug!("demo finished");
    Ok(())
}
