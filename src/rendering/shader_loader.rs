use anyhow::Context;
use pollster::block_on;
use wgpu::{CompilationMessageType, PollType, ShaderSource};

#[derive(Debug, Clone)]
pub(crate) struct ShaderDefinition {
    pub name: &'static str,
    pub source: &'static str,
}

/// Compiles `shader_def` and hands the module to `factory` to build a pipeline.
/// Any validation error raised while doing so is returned instead of being left to the device's error handler.
pub(crate) fn create_pipeline<F>(
    device: &wgpu::Device,
    shader_def: &ShaderDefinition,
    factory: F,
) -> anyhow::Result<wgpu::RenderPipeline>
where
    F: FnOnce(&wgpu::Device, &ShaderDefinition, &wgpu::ShaderModule) -> wgpu::RenderPipeline,
{
    device.push_error_scope(wgpu::ErrorFilter::Validation);

    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(shader_def.name),
        source: ShaderSource::Wgsl(shader_def.source.into()),
    });

    let info = block_on(module.get_compilation_info());
    for message in &info.messages {
        match message.message_type {
            CompilationMessageType::Error => {
                log::error!("{}: {}", shader_def.name, message.message)
            }
            CompilationMessageType::Warning => {
                log::warn!("{}: {}", shader_def.name, message.message)
            }
            CompilationMessageType::Info => {
                log::info!("{}: {}", shader_def.name, message.message)
            }
        }
    }

    let pipeline = factory(device, shader_def, &module);

    device
        .poll(PollType::Wait)
        .context("Failed to poll device after shader compilation.")?;

    let error = block_on(device.pop_error_scope());

    if let Some(error) = error {
        return Err(anyhow::anyhow!(
            "Shader compilation failed for {}: {}",
            shader_def.name,
            error
        ));
    };

    log::info!("Created pipeline for {}", shader_def.name);

    Ok(pipeline)
}
