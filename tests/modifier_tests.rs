use tailwind_catalog::modifier::{Breakpoint, Modifier, StateVariant};
use tailwind_catalog::{responsive, state, try_responsive, try_state, tw, CatalogError};

#[test]
fn test_responsive_examples() {
    assert_eq!(try_responsive("md", "flex").unwrap(), "md:flex");
    assert_eq!(try_responsive("sm", "flex-col").unwrap(), "sm:flex-col");
    assert_eq!(responsive(Breakpoint::Md, tw::layout::FLEX), "md:flex");
}

#[test]
fn test_state_examples() {
    assert_eq!(try_state("hover", "bg-blue-600").unwrap(), "hover:bg-blue-600");
    assert_eq!(try_state("dark", "bg-gray-800").unwrap(), "dark:bg-gray-800");
    assert_eq!(state(StateVariant::Hover, tw::background::BLUE_600), "hover:bg-blue-600");
}

#[test]
fn test_composition_preserves_order() {
    let inner = try_responsive("lg", "flex").unwrap();
    assert_eq!(try_state("focus", &inner).unwrap(), "focus:lg:flex");

    let same = state(StateVariant::Focus, &responsive(Breakpoint::Lg, "flex"));
    assert_eq!(same, "focus:lg:flex");
}

#[test]
fn test_every_prefix_on_empty_input() {
    for breakpoint in Breakpoint::ALL {
        assert_eq!(responsive(*breakpoint, ""), format!("{}:", breakpoint.prefix()));
    }
    for variant in StateVariant::ALL {
        assert_eq!(state(*variant, ""), format!("{}:", variant.prefix()));
    }
}

#[test]
fn test_prefix_set_is_fixed() {
    let breakpoints: Vec<_> = Breakpoint::ALL.iter().map(|b| b.prefix()).collect();
    assert_eq!(breakpoints, vec!["sm", "md", "lg", "xl", "2xl"]);

    let widths: Vec<_> = Breakpoint::ALL.iter().map(|b| b.min_width()).collect();
    assert_eq!(widths, vec!["640px", "768px", "1024px", "1280px", "1536px"]);

    let states: Vec<_> = StateVariant::ALL.iter().map(|s| s.prefix()).collect();
    assert_eq!(states, vec!["hover", "focus", "active", "dark", "disabled"]);
}

#[test]
fn test_unknown_prefixes_fail() {
    assert!(matches!(
        try_responsive("3xl", "flex"),
        Err(CatalogError::UnknownBreakpoint(p)) if p == "3xl"
    ));
    assert!(matches!(
        try_state("hovered", "flex"),
        Err(CatalogError::UnknownStateVariant(p)) if p == "hovered"
    ));
    // a state prefix is not a breakpoint
    assert!(try_responsive("hover", "flex").is_err());
}

#[test]
fn test_missing_utility_fails_fast() {
    for prefix in ["sm", "2xl", "hover", "disabled"] {
        let modifier: Modifier = prefix.parse().unwrap();
        let err = modifier.try_apply(None).unwrap_err();
        assert!(matches!(err, CatalogError::MissingUtility { .. }));
        assert!(!err.to_string().contains("null"));
    }
}

#[test]
fn test_facade_matches_parameterized_form() {
    let utility = tw::spacing::padding::P_4;
    assert_eq!(tw::responsive::sm(utility), responsive(Breakpoint::Sm, utility));
    assert_eq!(tw::responsive::xxl(utility), responsive(Breakpoint::Xxl, utility));
    assert_eq!(tw::state::active(utility), state(StateVariant::Active, utility));
    assert_eq!(tw::state::disabled(utility), state(StateVariant::Disabled, utility));
}
