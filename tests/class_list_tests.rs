use insta::assert_snapshot;
use tailwind_catalog::{class_list, tw, Breakpoint, ClassList, StateVariant};

#[test]
fn test_round_trip_recovers_constants() {
    let originals = [
        tw::layout::FLEX,
        tw::flex::align_items::CENTER,
        tw::spacing::padding::P_4,
        tw::background::GRAY_100,
        tw::spacing::gap::GAP_0_5,
        tw::sizing::width::W_1_12,
        tw::spacing::margin::NEG_RIGHT_1,
    ];

    let joined = originals.join(" ");
    let parsed = ClassList::parse(&joined);

    assert_eq!(parsed.iter().collect::<Vec<_>>(), originals.to_vec());
    assert_eq!(parsed.to_string(), joined);
}

#[test]
fn test_card_component() {
    let card = ClassList::new()
        .with(tw::background::WHITE)
        .with(tw::border::ROUNDED_LG)
        .with(tw::effects::shadow::LG)
        .with(tw::spacing::padding::P_6)
        .with(tw::sizing::max_width::W_SM)
        .responsive(Breakpoint::Md, tw::sizing::max_width::W_MD)
        .state(StateVariant::Dark, tw::background::GRAY_800);

    assert_snapshot!(card.to_string(), @"bg-white rounded-lg shadow-lg p-6 max-w-sm md:max-w-md dark:bg-gray-800");
}

#[test]
fn test_macro_accepts_mixed_expressions() {
    let list = class_list![
        tw::layout::FLEX,
        tw::responsive::sm(tw::flex::COL),
        tw::responsive::md(tw::flex::ROW),
        tw::state::hover(tw::background::BLUE_600),
    ];

    assert_eq!(list.len(), 4);
    assert_eq!(list.to_string(), "flex sm:flex-col md:flex-row hover:bg-blue-600");
}

#[test]
fn test_into_string() {
    let value: String = class_list![tw::layout::GRID, tw::grid::COLS_NONE].into();
    assert_eq!(value, "grid grid-cols-none");
}
