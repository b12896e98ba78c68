use devlogo_color::Hsv;
use devlogo_core::RgbaImage;
use devlogo_ops::{is_selected, recolor, recolor_sequential, recolor_with_stats};

/// Sweeps the RGB cube coarsely with a few alpha levels.
fn swatch() -> RgbaImage {
    let levels = [0u8, 13, 64, 128, 200, 255];
    let alphas = [0u8, 1, 128, 255];
    let n = levels.len() as u32;
    RgbaImage::from_fn(n * n, n * alphas.len() as u32, |x, y| {
        let r = levels[(x / n) as usize];
        let g = levels[(x % n) as usize];
        let b = levels[(y % n) as usize];
        let a = alphas[(y / n) as usize];
        [r, g, b, a]
    })
}

#[test]
fn shape_is_preserved() {
    for (w, h) in [(0, 0), (1, 1), (5, 3), (0, 4), (130, 7)] {
        let img = RgbaImage::filled(w, h, [0, 128, 255, 255]);
        assert_eq!(recolor(&img).dimensions(), (w, h));
    }
}

#[test]
fn alpha_is_untouched() {
    let src = swatch();
    let out = recolor(&src);
    for (a, b) in src.pixels().zip(out.pixels()) {
        assert_eq!(a[3], b[3]);
    }
}

#[test]
fn excluded_pixels_pass_through_within_one() {
    let src = swatch();
    let out = recolor(&src);
    let mut checked = 0;
    for (a, b) in src.pixels().zip(out.pixels()) {
        let hsv = Hsv::from_rgb8([a[0], a[1], a[2]]);
        if is_selected(hsv, a[3]) {
            continue;
        }
        checked += 1;
        for c in 0..3 {
            assert!(
                (a[c] as i16 - b[c] as i16).abs() <= 1,
                "{:?} became {:?}",
                a,
                b
            );
        }
    }
    assert!(checked > 0);
}

#[test]
fn selected_pixels_end_up_warm() {
    let src = swatch();
    let out = recolor(&src);
    let mut checked = 0;
    for (a, b) in src.pixels().zip(out.pixels()) {
        if !is_selected(Hsv::from_rgb8([a[0], a[1], a[2]]), a[3]) {
            continue;
        }
        checked += 1;
        let hsv = Hsv::from_rgb8([b[0], b[1], b[2]]);
        // Allow for quantization drift at the band edges.
        assert!(
            hsv.h >= 340.0 || hsv.h <= 20.0,
            "{:?} became {:?} (hue {})",
            a,
            b,
            hsv.h
        );
    }
    assert!(checked > 0);
}

#[test]
fn black_and_white_are_exact() {
    let img = RgbaImage::from_fn(2, 1, |x, _| {
        if x == 0 {
            [0, 0, 0, 255]
        } else {
            [255, 255, 255, 255]
        }
    });
    let out = recolor(&img);
    assert_eq!(out.pixel(0, 0), [0, 0, 0, 255]);
    assert_eq!(out.pixel(1, 0), [255, 255, 255, 255]);
}

#[test]
fn reference_colors() {
    let img = RgbaImage::from_fn(2, 1, |x, _| {
        if x == 0 {
            [0, 255, 255, 255]
        } else {
            [0, 0, 255, 255]
        }
    });
    let out = recolor(&img);
    assert_eq!(out.pixel(0, 0), [255, 0, 9, 255]);
    assert_eq!(out.pixel(1, 0), [255, 45, 0, 255]);
}

#[test]
fn repeated_runs_are_identical() {
    let src = swatch();
    let first = recolor(&src);
    let second = recolor(&src);
    assert_eq!(first, second);
    assert_eq!(first, recolor_sequential(&src));
}

#[test]
fn stats_agree_with_mask() {
    let src = swatch();
    let expected = src
        .pixels()
        .filter(|p| is_selected(Hsv::from_rgb8([p[0], p[1], p[2]]), p[3]))
        .count();
    let (_, stats) = recolor_with_stats(&src);
    assert_eq!(stats.total, src.pixel_count());
    assert_eq!(stats.recolored, expected);
}
