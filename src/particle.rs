//! Confetti particle state.
//!
//! A particle is one rectangular strip. All coordinates live in logical
//! (CSS) pixels, viewport-relative, with the origin at the top-left; only
//! the render surface's backing resolution knows about the device pixel
//! ratio, so resizes never touch particle state.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::visuals::Palette;

/// A single confetti strip.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Position in logical pixels.
    pub pos: Vec2,
    /// Velocity in logical pixels per frame.
    pub vel: Vec2,
    /// Size scalar; rendered as a `size * 1.4` by `size * 0.35` rectangle.
    pub size: f32,
    /// Index into the 16-entry palette.
    pub color: u8,
    /// Rotation in radians.
    pub angle: f32,
    /// Angular velocity in radians per frame.
    pub spin: f32,
    /// Per-strip offset decorrelating the wind oscillation.
    pub phase: f32,
    /// True once the strip has come to rest on the ground plane.
    pub settled: bool,
    /// Frames since spawn. Diagnostic only, read by nothing.
    pub life: u32,
}

impl Particle {
    /// Instance data for rendering, with the palette index resolved to
    /// linear RGB.
    pub fn to_instance(&self, palette: &Palette) -> Instance {
        Instance {
            position: self.pos.to_array(),
            angle: self.angle,
            size: self.size,
            color: palette.linear(self.color).to_array(),
            _pad: 0.0,
        }
    }
}

/// Per-instance vertex data for one strip.
///
/// Layout must match the instance attributes declared in `shader.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Instance {
    /// Strip center in logical pixels.
    pub position: [f32; 2],
    /// Rotation in radians.
    pub angle: f32,
    /// Size scalar.
    pub size: f32,
    /// Linear RGB fill color.
    pub color: [f32; 3],
    pub _pad: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_layout_is_tightly_packed() {
        // 2 + 1 + 1 + 3 + 1 floats.
        assert_eq!(std::mem::size_of::<Instance>(), 32);
    }

    #[test]
    fn test_to_instance_resolves_palette_color() {
        let p = Particle {
            pos: Vec2::new(10.0, 20.0),
            vel: Vec2::ZERO,
            size: 8.0,
            color: 0,
            angle: 1.0,
            spin: 0.0,
            phase: 0.0,
            settled: false,
            life: 0,
        };

        let inst = p.to_instance(&Palette::classic());
        assert_eq!(inst.position, [10.0, 20.0]);
        assert_eq!(inst.size, 8.0);
        // Palette entry 0 is a saturated red: dominant red channel.
        assert!(inst.color[0] > inst.color[1]);
        assert!(inst.color[0] > inst.color[2]);
    }
}
