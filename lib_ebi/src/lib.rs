pub mod image;
pub mod pixels;
pub mod ppm;

use log::*;
use std::fs::File;
use std::io::Write;

pub use crate::image::format::{Header, Image, Origin, PixelFormat};
pub use crate::image::{read, write};
pub use crate::pixels::{fill_color, set_pixel, vertical_flip};
pub use crate::ppm::to_ppm;

pub fn init_logging() {
    let target = Box::new(File::create("log.txt").expect("Can't create file"));

    env_logger::Builder::new()
        .target(env_logger::Target::Pipe(target))
        .filter(Some("lib_ebi"), LevelFilter::Debug)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}
