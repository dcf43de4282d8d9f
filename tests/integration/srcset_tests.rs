//! Srcset generation tests.

use imgix_url::{
    Params, SrcsetOptions, ValidationError, WidthRange, DEFAULT_WIDTHS, LIB_VERSION,
};

use super::test_utils::{descriptor, params, signed_builder, split_srcset, test_builder};

// =============================================================================
// Width Mode
// =============================================================================

#[test]
fn test_default_srcset_uses_default_widths() {
    let builder = test_builder();
    let srcset = builder.create_srcset("image.jpg", &Params::new(), &SrcsetOptions::default());
    let candidates = split_srcset(&srcset);

    assert_eq!(candidates.len(), DEFAULT_WIDTHS.len());
    for (candidate, width) in candidates.iter().zip(DEFAULT_WIDTHS.iter()) {
        assert_eq!(
            *candidate,
            format!("https://test.imgix.net/image.jpg?w={} {}w", width, width)
        );
    }
}

#[test]
fn test_height_only_is_width_mode() {
    let builder = test_builder();
    let srcset = builder.create_srcset(
        "image.jpg",
        &params(&[("h", "800")]),
        &SrcsetOptions::default(),
    );
    let candidates = split_srcset(&srcset);

    assert_eq!(candidates.len(), 31);
    assert_eq!(
        candidates[0],
        "https://test.imgix.net/image.jpg?h=800&w=100 100w"
    );
    assert!(candidates.iter().all(|c| descriptor(c).ends_with('w')));
}

#[test]
fn test_aspect_ratio_only_is_width_mode() {
    let builder = test_builder();
    let srcset = builder.create_srcset(
        "image.jpg",
        &params(&[("ar", "4:3")]),
        &SrcsetOptions::default(),
    );
    assert!(split_srcset(&srcset)
        .iter()
        .all(|c| descriptor(c).ends_with('w')));
}

#[test]
fn test_custom_width_range() {
    let builder = test_builder();
    let options = SrcsetOptions::default().with_width_range(WidthRange::new(100, 384, 0.2).unwrap());
    let srcset = builder.create_srcset("image.jpg", &Params::new(), &options);

    assert_eq!(
        srcset,
        "https://test.imgix.net/image.jpg?w=100 100w,\n\
         https://test.imgix.net/image.jpg?w=140 140w,\n\
         https://test.imgix.net/image.jpg?w=196 196w,\n\
         https://test.imgix.net/image.jpg?w=274 274w,\n\
         https://test.imgix.net/image.jpg?w=384 384w"
    );
}

#[test]
fn test_srcset_from_range() {
    let builder = test_builder();
    let range = WidthRange::new(300, 3000, 0.13).unwrap();
    let srcset = builder.create_srcset_from_range("image.jpg", &Params::new(), &range);

    let widths: Vec<&str> = split_srcset(&srcset).into_iter().map(descriptor).collect();
    assert_eq!(
        widths,
        vec![
            "300w", "378w", "476w", "600w", "756w", "953w", "1200w", "1513w", "1906w", "2401w",
            "3000w"
        ]
    );
}

#[test]
fn test_srcset_from_range_ignores_ratio_params() {
    let builder = test_builder();
    let range = WidthRange::new(100, 108, 0.02).unwrap();
    let srcset = builder.create_srcset_from_range("image.jpg", &params(&[("w", "320")]), &range);

    // The driving width replaces the caller's
    assert_eq!(
        srcset,
        "https://test.imgix.net/image.jpg?w=100 100w,\n\
         https://test.imgix.net/image.jpg?w=104 104w,\n\
         https://test.imgix.net/image.jpg?w=108 108w"
    );
}

#[test]
fn test_srcset_from_widths() {
    let builder = test_builder();
    let srcset = builder
        .create_srcset_from_widths("image.png", &params(&[("mask", "ellipse")]), &[100, 200, 300])
        .unwrap();

    assert_eq!(
        srcset,
        "https://test.imgix.net/image.png?mask=ellipse&w=100 100w,\n\
         https://test.imgix.net/image.png?mask=ellipse&w=200 200w,\n\
         https://test.imgix.net/image.png?mask=ellipse&w=300 300w"
    );
}

#[test]
fn test_srcset_from_widths_keeps_order() {
    let builder = test_builder();
    let srcset = builder
        .create_srcset_from_widths("image.png", &Params::new(), &[300, 100, 200])
        .unwrap();
    let widths: Vec<&str> = split_srcset(&srcset).into_iter().map(descriptor).collect();
    assert_eq!(widths, vec!["300w", "100w", "200w"]);
}

#[test]
fn test_srcset_from_widths_rejects_negative() {
    let builder = test_builder();
    assert_eq!(
        builder.create_srcset_from_widths("image.png", &Params::new(), &[-1, 100]),
        Err(ValidationError::NegativeWidthAtIndex { index: 0, value: -1 })
    );
}

#[test]
fn test_invalid_width_ranges() {
    assert_eq!(
        WidthRange::new(-1, 100, 0.08),
        Err(ValidationError::NegativeWidth(-1))
    );
    assert_eq!(
        WidthRange::new(500, 100, 0.08),
        Err(ValidationError::InvertedRange { min: 500, max: 100 })
    );
    assert_eq!(
        WidthRange::new(100, 500, 0.001),
        Err(ValidationError::ToleranceTooSmall(0.001))
    );
}

// =============================================================================
// Ratio Mode
// =============================================================================

#[test]
fn test_fixed_width_srcset() {
    let builder = test_builder();
    let srcset = builder.create_srcset(
        "image.jpg",
        &params(&[("w", "320")]),
        &SrcsetOptions::default(),
    );
    let candidates = split_srcset(&srcset);

    assert_eq!(candidates.len(), 5);
    assert_eq!(
        candidates[0],
        "https://test.imgix.net/image.jpg?dpr=1&q=75&w=320 1x"
    );
    assert_eq!(
        candidates[4],
        "https://test.imgix.net/image.jpg?dpr=5&q=20&w=320 5x"
    );
}

#[test]
fn test_height_and_aspect_ratio_srcset() {
    let builder = test_builder();
    let srcset = builder.create_srcset(
        "image.jpg",
        &params(&[("h", "800"), ("ar", "4:3")]),
        &SrcsetOptions::default(),
    );

    assert_eq!(
        srcset,
        "https://test.imgix.net/image.jpg?ar=4%3A3&dpr=1&h=800&q=75 1x,\n\
         https://test.imgix.net/image.jpg?ar=4%3A3&dpr=2&h=800&q=50 2x,\n\
         https://test.imgix.net/image.jpg?ar=4%3A3&dpr=3&h=800&q=35 3x,\n\
         https://test.imgix.net/image.jpg?ar=4%3A3&dpr=4&h=800&q=23 4x,\n\
         https://test.imgix.net/image.jpg?ar=4%3A3&dpr=5&h=800&q=20 5x"
    );
}

#[test]
fn test_explicit_quality_overrides_ladder() {
    let builder = test_builder();
    let srcset = builder.create_srcset(
        "image.jpg",
        &params(&[("w", "320"), ("q", "99")]),
        &SrcsetOptions::default(),
    );
    let candidates = split_srcset(&srcset);

    assert_eq!(candidates.len(), 5);
    assert!(candidates.iter().all(|c| c.contains("q=99")));
    assert_eq!(
        candidates[1],
        "https://test.imgix.net/image.jpg?dpr=2&q=99&w=320 2x"
    );
}

#[test]
fn test_variable_quality_disabled() {
    let builder = test_builder();
    let options = SrcsetOptions::default().with_variable_quality(false);
    let srcset = builder.create_srcset("image.jpg", &params(&[("w", "320")]), &options);

    assert_eq!(
        srcset,
        "https://test.imgix.net/image.jpg?dpr=1&w=320 1x,\n\
         https://test.imgix.net/image.jpg?dpr=2&w=320 2x,\n\
         https://test.imgix.net/image.jpg?dpr=3&w=320 3x,\n\
         https://test.imgix.net/image.jpg?dpr=4&w=320 4x,\n\
         https://test.imgix.net/image.jpg?dpr=5&w=320 5x"
    );
}

#[test]
fn test_ratio_mode_ignores_width_range() {
    let builder = test_builder();
    let options = SrcsetOptions::default().with_width_range(WidthRange::new(100, 200, 0.5).unwrap());
    let srcset = builder.create_srcset("image.jpg", &params(&[("w", "320")]), &options);
    assert_eq!(split_srcset(&srcset).len(), 5);
}

// =============================================================================
// Signing and Library Parameter
// =============================================================================

#[test]
fn test_signed_width_srcset() {
    let builder = signed_builder();
    let srcset = builder.create_srcset("/users/1.png", &Params::new(), &SrcsetOptions::default());
    let candidates = split_srcset(&srcset);

    assert_eq!(candidates.len(), 31);
    assert_eq!(
        candidates[0],
        "https://my-social-network.imgix.net/users/1.png?w=100&s=fa5b249e99366126363e6d776d13938a 100w"
    );
    assert_eq!(
        candidates[30],
        "https://my-social-network.imgix.net/users/1.png?w=8192&s=3bc8179d3fcd238e6962f6fa9396bf9b 8192w"
    );
}

#[test]
fn test_signed_ratio_srcset() {
    let builder = signed_builder();
    let srcset = builder.create_srcset(
        "/users/1.png",
        &params(&[("w", "320")]),
        &SrcsetOptions::default(),
    );
    assert_eq!(
        split_srcset(&srcset)[0],
        "https://my-social-network.imgix.net/users/1.png?dpr=1&q=75&w=320&s=2d9823e74bb97dac2395fa48ea6694f3 1x"
    );
}

#[test]
fn test_srcset_carries_lib_param() {
    let builder = imgix_url::UrlBuilder::new("test.imgix.net").unwrap();
    let srcset = builder.create_srcset("image.jpg", &params(&[("w", "320")]), &SrcsetOptions::default());
    let lib_param = format!("ixlib={}", LIB_VERSION);
    assert!(split_srcset(&srcset).iter().all(|c| c.contains(&lib_param)));
}
