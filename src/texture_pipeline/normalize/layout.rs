//! Static texture layout tables.
//!
//! All rectangles are expressed on the reference grid of their texture kind
//! (64 px wide for skins) and scaled at the point of use.

use crate::texture_pipeline::common::{Region, Scale};

pub const SKIN_REFERENCE_WIDTH: u32 = 64;

/// Scale of a skin `width` pixels wide, legacy or modern.
pub fn skin_scale(width: u32) -> Scale {
    Scale::new(width, SKIN_REFERENCE_WIDTH)
}

pub const CAPE_REFERENCE_WIDTH: u32 = 64;
pub const CAPE_REFERENCE_HEIGHT: u32 = 32;

pub const EARS_REFERENCE_WIDTH: u32 = 14;
pub const EARS_REFERENCE_HEIGHT: u32 = 7;

/// A rectangle tagged with the body part it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedRegion {
    pub name: &'static str,
    pub region: Region,
}

const fn named(name: &'static str, x: u32, y: u32, width: u32, height: u32) -> NamedRegion {
    NamedRegion { name, region: Region::new(x, y, width, height) }
}

/// A strip of the legacy layout and where its mirrored copy lands in the
/// modern layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemapEntry {
    pub name: &'static str,
    pub from: Region,
    pub to_x: u32,
    pub to_y: u32,
}

impl RemapEntry {
    /// Destination rectangle on the reference grid.
    pub fn to(&self) -> Region {
        Region::new(self.to_x, self.to_y, self.from.width, self.from.height)
    }
}

const fn remap(name: &'static str, x: u32, y: u32, width: u32, height: u32, to_x: u32, to_y: u32) -> RemapEntry {
    RemapEntry { name, from: Region::new(x, y, width, height), to_x, to_y }
}

/// Right leg and right arm strips copied onto the left leg and left arm,
/// which the legacy layout does not have.
pub const LEGACY_LIMB_REMAP: [RemapEntry; 12] = [
    remap("Top Leg", 4, 16, 4, 4, 20, 48),
    remap("Bottom Leg", 8, 16, 4, 4, 24, 48),
    remap("Outer Leg", 0, 20, 4, 12, 24, 52),
    remap("Front Leg", 4, 20, 4, 12, 20, 52),
    remap("Inner Leg", 8, 20, 4, 12, 16, 52),
    remap("Back Leg", 12, 20, 4, 12, 28, 52),
    remap("Top Arm", 44, 16, 4, 4, 36, 48),
    remap("Bottom Arm", 48, 16, 4, 4, 40, 48),
    remap("Outer Arm", 40, 20, 4, 12, 40, 52),
    remap("Front Arm", 44, 20, 4, 12, 36, 52),
    remap("Inner Arm", 48, 20, 4, 12, 32, 52),
    remap("Back Arm", 52, 20, 4, 12, 44, 52),
];

/// Area probed for transparency in a legacy skin.
pub const LEGACY_OPACITY_PROBE: Region = Region::new(0, 0, 64, 32);

/// Area probed for transparency in a modern skin.
pub const MODERN_OPACITY_PROBE: Region = Region::new(0, 0, 64, 64);

pub const HAT_REGIONS: [NamedRegion; 6] = [
    named("Helm Top", 40, 0, 8, 8),
    named("Helm Bottom", 48, 0, 8, 8),
    named("Helm Right", 32, 8, 8, 8),
    named("Helm Front", 40, 8, 8, 8),
    named("Helm Left", 48, 8, 8, 8),
    named("Helm Back", 56, 8, 8, 8),
];

pub const SECOND_LAYER_REGIONS: [NamedRegion; 30] = [
    named("Right Leg Layer 2 Top", 4, 32, 4, 4),
    named("Right Leg Layer 2 Bottom", 8, 32, 4, 4),
    named("Right Leg Layer 2 Right", 0, 36, 4, 12),
    named("Right Leg Layer 2 Front", 4, 36, 4, 12),
    named("Right Leg Layer 2 Left", 8, 36, 4, 12),
    named("Right Leg Layer 2 Back", 12, 36, 4, 12),
    named("Torso Layer 2 Top", 20, 32, 8, 4),
    named("Torso Layer 2 Bottom", 28, 32, 8, 4),
    named("Torso Layer 2 Right", 16, 36, 4, 12),
    named("Torso Layer 2 Front", 20, 36, 8, 12),
    named("Torso Layer 2 Left", 28, 36, 4, 12),
    named("Torso Layer 2 Back", 32, 36, 8, 12),
    named("Right Arm Layer 2 Top", 44, 32, 4, 4),
    named("Right Arm Layer 2 Bottom", 48, 32, 4, 4),
    named("Right Arm Layer 2 Right", 40, 36, 4, 12),
    named("Right Arm Layer 2 Front", 44, 36, 4, 12),
    named("Right Arm Layer 2 Left", 48, 36, 4, 12),
    named("Right Arm Layer 2 Back", 52, 36, 12, 12),
    named("Left Leg Layer 2 Top", 4, 48, 4, 4),
    named("Left Leg Layer 2 Bottom", 8, 48, 4, 4),
    named("Left Leg Layer 2 Right", 0, 52, 4, 12),
    named("Left Leg Layer 2 Front", 4, 52, 4, 12),
    named("Left Leg Layer 2 Left", 8, 52, 4, 12),
    named("Left Leg Layer 2 Back", 12, 52, 4, 12),
    named("Left Arm Layer 2 Top", 52, 48, 4, 4),
    named("Left Arm Layer 2 Bottom", 56, 48, 4, 4),
    named("Left Arm Layer 2 Right", 48, 52, 4, 12),
    named("Left Arm Layer 2 Front", 52, 52, 4, 12),
    named("Left Arm Layer 2 Left", 56, 52, 4, 12),
    named("Left Arm Layer 2 Back", 60, 52, 4, 12),
];

/// Arm texels only the default (4 px wide) arm uses.
pub const SLIM_DEAD_SPACE: [NamedRegion; 4] = [
    named("Right Arm Top/Bottom Gap", 50, 16, 2, 4),
    named("Right Arm Back Gap", 54, 20, 2, 12),
    named("Left Arm Top/Bottom Gap", 42, 48, 2, 4),
    named("Left Arm Back Gap", 46, 52, 2, 12),
];

/// Where community skin conventions keep ear pixels.
pub const EARS_IN_SKIN: Region = Region::new(24, 0, EARS_REFERENCE_WIDTH, EARS_REFERENCE_HEIGHT);
