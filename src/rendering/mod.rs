pub mod config;
pub mod draw_list;
pub mod model_uniform;
pub mod passes;
pub mod render_common;
pub mod render_mesh;
pub mod renderer;
pub mod shader_loader;
pub mod texture;
