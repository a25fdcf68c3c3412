use bridge_pca::{
    BlendOutput, Color, ContrastError, Polarity, RatioFormat, alpha_composite, calc_contrast,
    contrast, contrast_lc, normalize, srgb_to_y, to_legacy_ratio,
};

fn luminance_grid() -> Vec<f64> {
    (0..=110).map(|i| f64::from(i) / 100.0).collect()
}

#[test]
fn sign_follows_polarity() {
    let grid = luminance_grid();
    for &text in &grid {
        for &bg in &grid {
            let lc = contrast(text, bg).unwrap();
            if bg > text {
                assert!(lc >= 0.0, "text {text} bg {bg} gave {lc}");
            } else if bg < text {
                assert!(lc <= 0.0, "text {text} bg {bg} gave {lc}");
            } else {
                assert_eq!(lc, 0.0);
            }
        }
    }
}

#[test]
fn swapping_inputs_is_not_negation() {
    let grid = luminance_grid();
    let asymmetric = grid
        .iter()
        .flat_map(|&a| grid.iter().map(move |&b| (a, b)))
        .filter(|&(a, b)| contrast(a, b).unwrap() != -contrast(b, a).unwrap())
        .count();
    assert!(asymmetric > 0);

    let black = srgb_to_y([0, 0, 0]);
    let white = srgb_to_y([255, 255, 255]);
    let normal = contrast(black, white).unwrap();
    let reverse = contrast(white, black).unwrap();
    assert!(normal > 0.0 && reverse < 0.0);
    assert!((normal + reverse).abs() > 0.5);
}

#[test]
fn out_of_range_is_always_an_error() {
    for bad in [f64::NAN, -0.5, -f64::EPSILON, 1.2, 2.0, f64::NEG_INFINITY] {
        for good in luminance_grid() {
            assert!(matches!(
                contrast(bad, good),
                Err(ContrastError::InvalidLuminance { .. })
            ));
            assert!(matches!(
                contrast(good, bad),
                Err(ContrastError::InvalidLuminance { .. })
            ));
        }
    }
}

#[test]
fn near_identical_luminances_collapse_to_zero() {
    for base in [0.0, 0.1, 0.25, 0.6, 0.95, 1.0995] {
        for delta in [0.0, 0.0001, 0.0003, 0.00049] {
            assert_eq!(contrast(base, base + delta), Ok(0.0), "{base} + {delta}");
            assert_eq!(contrast(base + delta, base), Ok(0.0), "{base} + {delta}");
        }
    }
}

#[test]
fn white_normalizes_the_same_from_every_shape() {
    let expected = Color::rgba(255, 255, 255, 1.0);
    assert_eq!(normalize("#ffffff"), Ok(expected));
    assert_eq!(normalize("white"), Ok(expected));
    assert_eq!(normalize(16777215u32), Ok(expected));
}

#[test]
fn compositing_extremes() {
    assert_eq!(
        alpha_composite(Color::rgba(255, 0, 0, 1.0), Color::rgb(0, 0, 0), BlendOutput::Integer),
        [255.0, 0.0, 0.0]
    );
    assert_eq!(
        alpha_composite(
            Color::rgba(255, 0, 0, 0.0),
            Color::rgb(10, 20, 30),
            BlendOutput::Integer
        ),
        [10.0, 20.0, 30.0]
    );
}

#[test]
fn end_to_end_with_ratio() {
    let lc = contrast_lc(srgb_to_y([0x76, 0x76, 0x76]), srgb_to_y([255, 255, 255])).unwrap();
    assert_eq!(lc.polarity, Polarity::Normal);
    assert_eq!(lc.to_string(), "72 BoW");
    assert_eq!(to_legacy_ratio(lc.value, &RatioFormat::default()), "4.1 to 1");

    assert_eq!(calc_contrast("#767676", "#fff"), Ok(lc.value));
}

#[cfg(feature = "serde")]
#[test]
fn config_round_trips_through_json() {
    use bridge_pca::{ColorSpace, ContrastConfig};

    let config = ContrastConfig {
        space: ColorSpace::DisplayP3,
        blend: BlendOutput::Float,
    };
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(json, r#"{"space":"display-p3","blend":"float"}"#);
    assert_eq!(serde_json::from_str::<ContrastConfig>(&json).unwrap(), config);
    assert_eq!(
        serde_json::from_str::<ContrastConfig>("{}").unwrap(),
        ContrastConfig::default()
    );
}
