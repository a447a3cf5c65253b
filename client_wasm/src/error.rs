//! Errors raised by the browser host

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("failed to find a WebGPU adapter")]
    NoAdapter,

    #[error("failed to create device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    #[error("no surface formats available")]
    NoSurfaceFormat,

    #[error("failed to get current texture: {0}")]
    Surface(#[from] wgpu::SurfaceError),

    #[error("invalid config JSON: {0}")]
    ConfigJson(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] game_core::ConfigError),

    #[error("client not initialized")]
    NotInitialized,
}

impl From<ClientError> for JsValue {
    fn from(err: ClientError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
