//! Bit-accurate views of the NES PPU (Ricoh RP2C02) registers.
//!
//! Each register is a plain `Copy` value with two always-consistent
//! views: the whole byte or word (`new_with_raw_value`, `raw_value`)
//! and its named bit fields (generated getters, `with_*` and `set_*`).
//! Only the layouts are modeled; none of the chip's runtime behavior is.

pub mod registers;

use crate::registers::{LoopyRegister, PPUCTRL, PPUMASK, PPUSTATUS};
use arbitrary_int::u3;

/// Register-level state of the PPU: the CPU-facing registers plus the
/// internal scroll and address state that sits beside them.
pub struct PpuRegisters {
    pub control: PPUCTRL,
    pub mask: PPUMASK,
    pub status: PPUSTATUS,
    // Active and temporary VRAM address ("v" and "t")
    pub vram_addr: LoopyRegister,
    pub tram_addr: LoopyRegister,
    // Fine x scroll ("x")
    pub fine_x: u3,
    // First/second write toggle for $2005/$2006 ("w")
    pub address_latch: bool,
    // Buffered $2007 read
    pub data_buffer: u8,
}

impl PpuRegisters {
    pub fn new() -> Self {
        PpuRegisters {
            control: PPUCTRL::ZERO,
            mask: PPUMASK::ZERO,
            status: PPUSTATUS::ZERO,
            vram_addr: LoopyRegister::ZERO,
            tram_addr: LoopyRegister::ZERO,
            fine_x: u3::new(0),
            address_latch: false,
            data_buffer: 0x00,
        }
    }

    pub fn reset(&mut self) {
        *self = PpuRegisters::new();
    }
}
