//! Error types for the confetti overlay.
//!
//! The headless engine has no failure modes; everything here belongs to
//! the window and GPU bring-up path.

use std::fmt;

/// Errors that can occur during GPU initialization.
#[derive(Debug)]
pub enum GpuError {
    /// Failed to create a surface for rendering.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    NoAdapter(wgpu::RequestAdapterError),
    /// Failed to create GPU device.
    DeviceCreation(wgpu::RequestDeviceError),
}

impl fmt::Display for GpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuError::SurfaceCreation(e) => write!(f, "Failed to create GPU surface: {}", e),
            GpuError::NoAdapter(e) => write!(
                f,
                "No compatible GPU adapter found ({}). Ensure your system has a GPU with WebGPU/Vulkan/Metal/DX12 support.",
                e
            ),
            GpuError::DeviceCreation(e) => write!(f, "Failed to create GPU device: {}", e),
        }
    }
}

impl std::error::Error for GpuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GpuError::SurfaceCreation(e) => Some(e),
            GpuError::NoAdapter(e) => Some(e),
            GpuError::DeviceCreation(e) => Some(e),
        }
    }
}

impl From<wgpu::CreateSurfaceError> for GpuError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        GpuError::SurfaceCreation(e)
    }
}

impl From<wgpu::RequestAdapterError> for GpuError {
    fn from(e: wgpu::RequestAdapterError) -> Self {
        GpuError::NoAdapter(e)
    }
}

impl From<wgpu::RequestDeviceError> for GpuError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        GpuError::DeviceCreation(e)
    }
}

/// Errors that can occur when running the overlay.
#[derive(Debug)]
pub enum OverlayError {
    /// Failed to create or drive the event loop.
    EventLoop(winit::error::EventLoopError),
    /// Failed to create the window.
    Window(winit::error::OsError),
    /// GPU initialization failed.
    Gpu(GpuError),
}

impl fmt::Display for OverlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverlayError::EventLoop(e) => write!(f, "Failed to create event loop: {}", e),
            OverlayError::Window(e) => write!(f, "Failed to create window: {}", e),
            OverlayError::Gpu(e) => write!(f, "GPU error: {}", e),
        }
    }
}

impl std::error::Error for OverlayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OverlayError::EventLoop(e) => Some(e),
            OverlayError::Window(e) => Some(e),
            OverlayError::Gpu(e) => Some(e),
        }
    }
}

impl From<winit::error::EventLoopError> for OverlayError {
    fn from(e: winit::error::EventLoopError) -> Self {
        OverlayError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for OverlayError {
    fn from(e: winit::error::OsError) -> Self {
        OverlayError::Window(e)
    }
}

impl From<GpuError> for OverlayError {
    fn from(e: GpuError) -> Self {
        OverlayError::Gpu(e)
    }
}
