use arbitrary_int::{u2, u3, u5};
use bitbybit::bitfield;

// External registers, as the CPU sees them at $2000-$2002

/// $2000 PPUCTRL
#[bitfield(u8)]
pub struct PPUCTRL {
    #[bit(7, rw)]
    enable_nmi: bool,

    #[bit(6, rw)]
    slave_mode: bool,

    #[bit(5, rw)]
    sprite_size: bool,

    #[bit(4, rw)]
    pattern_background: bool,

    #[bit(3, rw)]
    pattern_sprite: bool,

    #[bit(2, rw)]
    increment_mode: bool,

    #[bit(1, rw)]
    nametable_y: bool,

    #[bit(0, rw)]
    nametable_x: bool,
}

/// $2001 PPUMASK
#[bitfield(u8)]
pub struct PPUMASK {
    #[bit(7, rw)]
    enhance_blue: bool,

    #[bit(6, rw)]
    enhance_green: bool,

    #[bit(5, rw)]
    enhance_red: bool,

    #[bit(4, rw)]
    render_sprites: bool,

    #[bit(3, rw)]
    render_background: bool,

    #[bit(2, rw)]
    render_sprites_left: bool,

    #[bit(1, rw)]
    render_background_left: bool,

    #[bit(0, rw)]
    grayscale: bool,
}

/// $2002 PPUSTATUS. Bits 0-4 have no named field; the raw byte keeps
/// them as written.
#[bitfield(u8)]
pub struct PPUSTATUS {
    #[bit(7, rw)]
    vertical_blank: bool,

    #[bit(6, rw)]
    sprite_zero_hit: bool,

    #[bit(5, rw)]
    sprite_overflow: bool,
}

// Internal registers

/// The 15-bit VRAM address in its "loopy" layout. Bit 15 is unused.
#[bitfield(u16)]
pub struct LoopyRegister {
    #[bits(12..=14, rw)]
    fine_y: u3,

    #[bit(11, rw)]
    nametable_y: bool,

    #[bit(10, rw)]
    nametable_x: bool,

    #[bits(5..=9, rw)]
    coarse_y: u5,

    #[bits(0..=4, rw)]
    coarse_x: u5,
}

/// Byte 2 of an OAM entry. Bits 2-4 have no named field.
#[bitfield(u8)]
pub struct OAMAttributes {
    #[bit(7, rw)]
    flip_vertical: bool,

    #[bit(6, rw)]
    flip_horizontal: bool,

    // Set means the sprite is drawn behind the background
    #[bit(5, rw)]
    priority: bool,

    #[bits(0..=1, rw)]
    palette: u2,
}
