//! 边框归一化与尺寸校正的场景与性质测试。
use figure_raster::figure_export::{
    find_content_bounds, normalize_border, reconcile_dimensions, BackgroundColor, ExpectedExtent,
    FigureColor, FigureHandle, RasterImage, RenderSpec, RenderStrategy, WHITE,
};
use proptest::prelude::*;

const NEAR_WHITE: [u8; 3] = [254, 254, 253];
const DECLARED_WHITE: FigureColor = FigureColor::Rgb([1.0, 1.0, 1.0]);

fn declared(rgb: [u8; 3]) -> FigureColor {
    FigureColor::Rgb(rgb.map(|channel| channel as f64 / 255.0))
}

fn vector_spec(scale: f64) -> RenderSpec {
    RenderSpec::new(FigureHandle(1), scale, RenderStrategy::Vector, 96.0, None).expect("valid request")
}

#[test]
fn all_white_raster_with_white_background_is_unchanged() {
    let mut raster = RasterImage::filled(100, 100, WHITE);
    let before = raster.clone();

    let report = normalize_border(&mut raster, DECLARED_WHITE);

    assert_eq!(raster, before);
    assert_eq!(report.background, BackgroundColor::Rgb(WHITE));
    assert!(find_content_bounds(&raster).spans(&raster));
}

#[test]
fn near_white_frame_wins_over_declared_color() {
    // 2-pixel near-white frame around content rows/cols 2..=7 (0-based).
    let mut raster = RasterImage::from_fn(10, 10, |row, col| {
        if (2..=7).contains(&row) && (2..=7).contains(&col) {
            [30, 60, 90]
        } else {
            NEAR_WHITE
        }
    });

    let report = normalize_border(&mut raster, declared([250, 250, 250]));

    assert_eq!(report.background, BackgroundColor::Rgb(NEAR_WHITE));
    for row in 0..10 {
        for col in 0..10 {
            let inside = (2..=7).contains(&row) && (2..=7).contains(&col);
            let expected = if inside { [30, 60, 90] } else { NEAR_WHITE };
            assert_eq!(raster.pixel(row, col), expected, "pixel ({row}, {col})");
        }
    }
}

#[test]
fn oversized_output_is_cropped_from_top_left() {
    let raster = RasterImage::from_fn(105, 200, |row, col| [row as u8, (col % 256) as u8, 1]);

    let result = reconcile_dimensions(raster, ExpectedExtent { height: 100, width: 200 }, &vector_spec(3.0));

    assert_eq!(result.shape(), (100, 200, 3));
    assert_eq!(result.pixel(99, 0), [99, 0, 1]);
}

fn palette_pixel() -> impl Strategy<Value = [u8; 3]> {
    prop_oneof![
        3 => Just(WHITE),
        1 => Just(NEAR_WHITE),
        1 => Just([200u8, 200, 200]),
        1 => any::<[u8; 3]>(),
    ]
}

fn raster_strategy() -> impl Strategy<Value = RasterImage> {
    (1u32..12, 1u32..12).prop_flat_map(|(height, width)| {
        prop::collection::vec(palette_pixel(), (height * width) as usize).prop_map(move |pixels| {
            let bytes = pixels.into_iter().flatten().collect();
            RasterImage::from_raw(height, width, bytes).expect("length matches shape")
        })
    })
}

fn declared_strategy() -> impl Strategy<Value = FigureColor> {
    prop_oneof![
        Just(FigureColor::None),
        Just(DECLARED_WHITE),
        any::<[u8; 3]>().prop_map(declared),
        prop::array::uniform3(0.0f64..=1.0).prop_map(FigureColor::Rgb),
    ]
}

proptest! {
    #[test]
    fn transparent_background_never_modifies(raster in raster_strategy()) {
        let mut working = raster.clone();
        let report = normalize_border(&mut working, FigureColor::None);
        prop_assert_eq!(working, raster);
        prop_assert_eq!(report.background, BackgroundColor::Transparent);
    }

    #[test]
    fn out_of_box_pixels_take_the_fill(raster in raster_strategy(), color in declared_strategy()) {
        let mut working = raster;
        let report = normalize_border(&mut working, color);
        if let (Some(bounds), Some(fill)) = (report.bounds, report.background.rgb()) {
            for row in 0..working.height() {
                for col in 0..working.width() {
                    if !bounds.contains(row, col) {
                        prop_assert_eq!(working.pixel(row, col), fill);
                    }
                }
            }
        }
        if color.is_exact_white() {
            prop_assert_eq!(report.background, BackgroundColor::Rgb(WHITE));
        }
    }

    #[test]
    fn normalization_is_idempotent(raster in raster_strategy(), color in declared_strategy()) {
        let mut once = raster;
        normalize_border(&mut once, color);
        let mut twice = once.clone();
        normalize_border(&mut twice, color);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn reconcile_only_shrinks(
        height in 0u32..40,
        width in 0u32..40,
        expected_height in 0u32..40,
        expected_width in 0u32..40,
        scale in 1u32..4,
    ) {
        let raster = RasterImage::filled(height, width, [9, 9, 9]);
        let expected = ExpectedExtent { height: expected_height, width: expected_width };
        let result = reconcile_dimensions(raster, expected, &vector_spec(scale as f64));
        prop_assert_eq!(result.height(), height.min(expected_height));
        prop_assert_eq!(result.width(), width.min(expected_width));
    }

    #[test]
    fn reconcile_skips_fractional_scale(
        height in 1u32..40,
        width in 1u32..40,
        expected_height in 0u32..40,
        expected_width in 0u32..40,
        whole in 1u32..4,
        fraction in 0.01f64..0.99,
    ) {
        let raster = RasterImage::filled(height, width, [9, 9, 9]);
        let expected = ExpectedExtent { height: expected_height, width: expected_width };
        let result = reconcile_dimensions(raster.clone(), expected, &vector_spec(whole as f64 + fraction));
        prop_assert_eq!(result, raster);
    }
}
