use anyhow::Result;

mod camera;
mod demo;
mod engine;
mod geometry;
mod rendering;
mod scene_graph;
mod window;

fn main() -> Result<()> {
    pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    pollster::block_on(window::run(demo::DemoConfig::default()))?;

    Ok(())
}
