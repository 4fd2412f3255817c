use forge_core::models::OklchColor;
use forge_core::utils::{generate_slug, is_kebab_case, to_camel_case, to_kebab_case};
use proptest::prelude::*;

proptest! {
    #[test]
    fn in_range_colors_round_trip_through_display(
        l in 0.0f64..=1.0,
        c in 0.0f64..=0.4,
        h in 0.0f64..360.0,
    ) {
        let color = OklchColor::new(l, c, h).unwrap();
        let parsed: OklchColor = color.to_string().parse().unwrap();
        prop_assert_eq!(parsed, color);
    }

    #[test]
    fn out_of_range_lightness_is_rejected(l in 1.0001f64..100.0) {
        let text = format!("oklch({l} 0.1 120)");
        prop_assert!(!OklchColor::is_valid(&text));
    }

    #[test]
    fn slugs_are_kebab_case(name in ".{0,40}") {
        let slug = generate_slug(&name);
        prop_assert!(slug.is_empty() || is_kebab_case(&slug));
        prop_assert!(!slug.starts_with('-') && !slug.ends_with('-'));
        prop_assert!(!slug.contains("--"));
    }

    // Single-letter parts run capitals together (`a-a-a` -> `aAA`), which
    // kebab-casing cannot split back apart.
    #[test]
    fn camel_and_kebab_invert(parts in prop::collection::vec("[a-z][a-z0-9]{1,6}", 1..4)) {
        let kebab = parts.join("-");
        prop_assert_eq!(to_kebab_case(&to_camel_case(&kebab)), kebab);
    }
}
