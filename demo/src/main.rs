mod app;
mod robot;
mod screens;

use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut app = app::App::new();
    let mut robot = robot::Robot::new();
    app.run_tour(&mut robot);
    Ok(())
}
