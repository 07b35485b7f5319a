use clipring_lib::bootstrap;

fn main() -> anyhow::Result<()> {
    bootstrap::tracing::init_tracing_subscriber()?;
    bootstrap::run_app()
}
