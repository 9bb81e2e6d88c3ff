use flexi_logger::{FlexiLoggerError, Logger};
use log::{log, Level};
use rp2c02::registers::PPUMASK;

fn main() -> Result<(), FlexiLoggerError> {
    let _logger = Logger::try_with_env_or_str("info")?.start()?;

    let mut mask = PPUMASK::new_with_raw_value(0x02);
    log!(Level::Info, "PPUMASK <- {:#010b}", mask.raw_value());

    mask.set_render_background(false);
    log!(
        Level::Info,
        "render_background off: {:#010b}",
        mask.raw_value()
    );

    mask.set_render_sprites(true);
    log!(Level::Info, "render_sprites on: {:#010b}", mask.raw_value());

    println!("A:{} reg:{}", u8::from(mask.grayscale()), mask.raw_value());
    Ok(())
}
