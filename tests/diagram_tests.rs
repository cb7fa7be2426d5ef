use distcalc::config::RenderSettings;
use distcalc::diagram::{render_diagram, Renderer, SpacingPolicy, WEIGHT_DIAGRAM};
use distcalc::error::DistCalcError;
use distcalc::model::{CornerWeights, Rounding, WeightDistribution, WeightModel};
use rstest::rstest;

fn distribution(fl: u32, fr: u32, rl: u32, rr: u32) -> WeightDistribution {
    WeightModel::new(CornerWeights::new(fl, fr, rl, rr), Rounding::default())
        .distribution()
        .unwrap()
}

fn with_spacing(spacing: SpacingPolicy) -> RenderSettings {
    RenderSettings {
        spacing,
        ..RenderSettings::default()
    }
}

// --- GOLDEN DIAGRAMS (byte-exact legacy layout) ---

#[rstest]
#[case((100, 100, 100, 100), include_str!("fixtures/diagram_square_100.txt"))]
#[case((612, 587, 498, 455), include_str!("fixtures/diagram_612_587_498_455.txt"))]
#[case((12000, 100, 100, 100), include_str!("fixtures/diagram_12000_100_100_100.txt"))]
fn test_matches_legacy_output(#[case] corners: (u32, u32, u32, u32), #[case] expected: &str) {
    let (fl, fr, rl, rr) = corners;
    let dist = distribution(fl, fr, rl, rr);
    let out = render_diagram(&dist, &RenderSettings::default()).unwrap();
    assert_eq!(out, expected);
}

#[rstest]
#[case(100, 100, 100, 100)]
#[case(612, 587, 498, 455)]
#[case(9, 9999, 10, 1000)]
#[case(12000, 100, 100, 100)]
fn test_columnar_is_identical_on_built_in_diagram(
    #[case] fl: u32,
    #[case] fr: u32,
    #[case] rl: u32,
    #[case] rr: u32,
) {
    let dist = distribution(fl, fr, rl, rr);
    let scan = render_diagram(&dist, &with_spacing(SpacingPolicy::ScanOrder)).unwrap();
    let col = render_diagram(&dist, &with_spacing(SpacingPolicy::Columnar)).unwrap();
    assert_eq!(scan, col);
}

#[test]
fn test_short_weights_keep_right_column_aligned() {
    // b0 sits after a vsd that compensates for a0, so its column must not move
    let wide = render_diagram(&distribution(1000, 1000, 1000, 1000), &RenderSettings::default())
        .unwrap();
    let narrow =
        render_diagram(&distribution(1000, 1000, 7, 1000), &RenderSettings::default()).unwrap();

    let first_line = |s: &str| s.lines().nth(1).unwrap().to_string();
    let col = |line: String| line.rfind("1000 Lbs.").unwrap();
    assert_eq!(col(first_line(&wide)), col(first_line(&narrow)));
}

#[test]
fn test_dynamic_padding_is_configurable() {
    let dist = distribution(100, 100, 100, 100);
    let settings = RenderSettings {
        dynamic_space_padding: 0,
        ..RenderSettings::default()
    };
    let tight = render_diagram(&dist, &settings).unwrap();
    let normal = render_diagram(&dist, &RenderSettings::default()).unwrap();
    // five {vsd} placeholders, five spaces each
    assert_eq!(normal.len() - tight.len(), 5 * 5);
}

// --- TEMPLATE ERRORS ---

#[rstest]
#[case("{z0}", "z0")]
#[case("ok {a9} ok", "a9")]
#[case("{vsx}", "vsx")]
#[case("{}", "")]
fn test_unknown_placeholders(#[case] template: &str, #[case] token: &str) {
    let dist = distribution(1, 1, 1, 1);
    match Renderer::new(template, RenderSettings::default()).render(&dist) {
        Err(DistCalcError::UnknownPlaceholder { token: t }) => assert_eq!(t, token),
        other => panic!("expected UnknownPlaceholder, got {:?}", other),
    }
}

#[rstest]
#[case("{vsd", 0)]
#[case("{a0} Lbs. {vsd", 10)]
#[case("text {", 5)]
fn test_malformed_templates(#[case] template: &str, #[case] offset: usize) {
    let dist = distribution(1, 1, 1, 1);
    match Renderer::new(template, RenderSettings::default()).render(&dist) {
        Err(DistCalcError::MalformedTemplate { offset: o }) => assert_eq!(o, offset),
        other => panic!("expected MalformedTemplate, got {:?}", other),
    }
}

#[test]
fn test_built_in_template_has_every_key() {
    for key in ["a", "b", "c", "d", "e", "f", "g", "h", "i"] {
        assert!(WEIGHT_DIAGRAM.contains(&format!("{{{}0}}", key)));
        assert!(WEIGHT_DIAGRAM.contains(&format!("{{{}1}}", key)));
    }
}
