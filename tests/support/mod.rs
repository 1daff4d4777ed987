#![allow(dead_code)]

use std::path::{Path, PathBuf};

use image::RgbImage;
use spritemosaic::{BACKGROUND_FILE, SpriteAssets, Tuning};

pub const BACKDROP: image::Rgb<u8> = image::Rgb([12, 12, 16]);

/// Stock-sized sprites: a fill body with a shade visor whose row moves with the variant index,
/// on a backdrop-colored margin.
pub fn stock_sprites() -> [RgbImage; Tuning::SPRITE_COUNT] {
    let (w, h) = (Tuning::STOCK_SPRITE_WIDTH, Tuning::STOCK_SPRITE_HEIGHT);
    std::array::from_fn(|i| {
        let mut img = RgbImage::from_pixel(w, h, BACKDROP);
        for y in 4..h - 4 {
            for x in 8..w - 8 {
                img.put_pixel(x, y, Tuning::MARKER_FILL);
            }
        }
        let visor = 8 + 6 * i as u32;
        for y in visor..visor + 6 {
            for x in 30..w - 12 {
                img.put_pixel(x, y, Tuning::MARKER_SHADE);
            }
        }
        img
    })
}

pub fn stock_assets() -> SpriteAssets {
    SpriteAssets::new(stock_sprites(), RgbImage::from_pixel(16, 16, BACKDROP)).unwrap()
}

pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("it").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

pub fn write_asset_dir(dir: &Path) {
    for (idx, sprite) in stock_sprites().iter().enumerate() {
        sprite.save(dir.join(format!("{idx}.png"))).unwrap();
    }
    RgbImage::from_pixel(16, 16, BACKDROP)
        .save(dir.join(BACKGROUND_FILE))
        .unwrap();
}
