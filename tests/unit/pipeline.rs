use std::io::Cursor;

use image::RgbImage;

use super::*;
use crate::encode::sink::InMemorySink;
use crate::foundation::core::Tuning;
use crate::foundation::error::MosaicError;

fn assets() -> SpriteAssets {
    let sprites = std::array::from_fn(|i| {
        let mut img = RgbImage::from_pixel(5, 4, Tuning::MARKER_FILL);
        img.put_pixel(i as u32 % 5, 0, Tuning::MARKER_SHADE);
        img
    });
    SpriteAssets::new(sprites, RgbImage::new(2, 2)).unwrap()
}

fn png(img: &RgbImage) -> Vec<u8> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn render_bytes_decodes_and_animates() {
    let bytes = png(&RgbImage::from_pixel(30, 20, image::Rgb([90, 200, 40])));
    let rows = TileRows::new(10).unwrap();
    let animation = render_bytes(&bytes, rows, &assets(), &RenderThreading::default()).unwrap();
    assert_eq!(animation.plan.rows, 10);
    assert_eq!(animation.plan.cols, 13);
}

#[test]
fn write_animation_feeds_sink_in_order() {
    let bytes = png(&RgbImage::from_pixel(16, 16, image::Rgb([255, 255, 255])));
    let animation = render_bytes(
        &bytes,
        TileRows::default(),
        &assets(),
        &RenderThreading::default(),
    )
    .unwrap();

    let mut sink = InMemorySink::new();
    write_animation(&animation, &mut sink).unwrap();
    assert!(sink.is_finished());
    assert_eq!(sink.frames().len(), Tuning::FRAME_COUNT);
    assert_eq!(sink.frames(), animation.frames.as_slice());
    let cfg = sink.config().unwrap();
    assert_eq!((cfg.width, cfg.height), animation.dimensions());
    assert_eq!(cfg.frame_delay_ms, Tuning::FRAME_DELAY_MS);
}

#[test]
fn render_gif_returns_gif_bytes() {
    let bytes = png(&RgbImage::from_pixel(12, 12, image::Rgb([0, 0, 0])));
    let gif = render_gif(
        &bytes,
        TileRows::new(10).unwrap(),
        &assets(),
        &RenderThreading::default(),
    )
    .unwrap();
    assert!(gif.starts_with(b"GIF89a"));
    assert_eq!(
        image::guess_format(&gif).unwrap(),
        image::ImageFormat::Gif
    );
}

#[test]
fn undecodable_bytes_fail() {
    let err = render_gif(
        b"nope",
        TileRows::default(),
        &assets(),
        &RenderThreading::default(),
    )
    .unwrap_err();
    assert!(matches!(err, MosaicError::Other(_)));
}
