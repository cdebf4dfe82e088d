use anyhow::Context;

fn main() -> anyhow::Result<()> {
    critters_observability::init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match critters_sounds::run(&mut out) {
        Ok(()) => Ok(()),
        Err(err) if err.is_broken_pipe() => {
            tracing::debug!("stdout closed early; stopping");
            Ok(())
        }
        Err(err) => Err(err).context("failed to write demo output"),
    }
}
