use distcalc::config::RenderSettings;
use distcalc::diagram::{render_diagram, SpacingPolicy, WEIGHT_DIAGRAM};
use distcalc::model::{CornerWeights, Figure, Rounding, WeightModel};
use proptest::prelude::*;

// --- STRATEGIES ---

prop_compose! {
    // At least one corner carries load so percentages are defined
    fn arb_loaded_corners()(
        fl in 0u32..20_000,
        fr in 0u32..20_000,
        rl in 0u32..20_000,
        rr in 1u32..20_000
    ) -> CornerWeights {
        CornerWeights::new(fl, fr, rl, rr)
    }
}

fn arb_rounding() -> impl Strategy<Value = Rounding> {
    prop_oneof![Just(Rounding::HalfAwayFromZero), Just(Rounding::HalfEven)]
}

/// Template text with every `{...}` removed.
fn literal_chars(template: &str) -> String {
    let mut out = String::new();
    let mut inside = false;
    for c in template.chars() {
        match c {
            '{' => inside = true,
            '}' if inside => inside = false,
            _ if !inside => out.push(c),
            _ => {}
        }
    }
    out
}

fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut hay = haystack.chars();
    needle.chars().all(|n| hay.any(|h| h == n))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn test_axles_sum_to_one_hundred(
        corners in arb_loaded_corners(),
        rounding in arb_rounding()
    ) {
        let model = WeightModel::new(corners, rounding);
        let front = model.percentage(Figure::FrontTotal).unwrap().tenths();
        let rear = model.percentage(Figure::RearTotal).unwrap().tenths();
        prop_assert!((999..=1001).contains(&(front + rear)), "front {} + rear {}", front, rear);
    }

    #[test]
    fn test_sides_sum_to_one_hundred(
        corners in arb_loaded_corners(),
        rounding in arb_rounding()
    ) {
        let model = WeightModel::new(corners, rounding);
        let left = model.percentage(Figure::LeftSide).unwrap().tenths();
        let right = model.percentage(Figure::RightSide).unwrap().tenths();
        prop_assert!((999..=1001).contains(&(left + right)), "left {} + right {}", left, right);
    }

    #[test]
    fn test_percentages_have_one_decimal(corners in arb_loaded_corners()) {
        let dist = WeightModel::new(corners, Rounding::default()).distribution().unwrap();
        for (_, wf) in dist.iter() {
            let text = wf.percentage.to_string();
            let (whole, frac) = text.split_once('.').unwrap();
            prop_assert!(!whole.is_empty());
            prop_assert_eq!(frac.len(), 1);
        }
    }

    #[test]
    fn test_literals_survive_rendering(corners in arb_loaded_corners()) {
        let dist = WeightModel::new(corners, Rounding::default()).distribution().unwrap();
        let out = render_diagram(&dist, &RenderSettings::default()).unwrap();
        prop_assert!(is_subsequence(&literal_chars(WEIGHT_DIAGRAM), &out));
        prop_assert_eq!(out.lines().count(), WEIGHT_DIAGRAM.lines().count());
    }

    #[test]
    fn test_policies_agree_on_built_in_diagram(corners in arb_loaded_corners()) {
        let dist = WeightModel::new(corners, Rounding::default()).distribution().unwrap();
        let scan = render_diagram(&dist, &RenderSettings {
            spacing: SpacingPolicy::ScanOrder,
            ..RenderSettings::default()
        }).unwrap();
        let col = render_diagram(&dist, &RenderSettings {
            spacing: SpacingPolicy::Columnar,
            ..RenderSettings::default()
        }).unwrap();
        prop_assert_eq!(scan, col);
    }
}
