use regex::Regex;
use std::collections::HashSet;
use tailwind_catalog::catalog::{self, Category};
use tailwind_catalog::tw;

/// (path, class) pairs checked against the Tailwind CSS 4.1.18 class names
const GOLDEN: &[(&str, &str)] = &[
    ("Spacing.Gap.GAP_0", "gap-0"),
    ("Spacing.Gap.GAP_0_5", "gap-0.5"),
    ("Spacing.Gap.X_4", "gap-x-4"),
    ("Spacing.Gap.GAP_60", "gap-60"),
    ("Spacing.Margin.M_AUTO", "m-auto"),
    ("Spacing.Margin.Y_AUTO", "my-auto"),
    ("Spacing.Margin.NEG_RIGHT_1", "-mr-1"),
    ("Spacing.Padding.P_0", "p-0"),
    ("Spacing.Padding.P_4", "p-4"),
    ("Spacing.Padding.P_11", "p-11"),
    ("Spacing.Padding.P_56", "p-56"),
    ("Spacing.Space.X_REVERSE", "space-x-reverse"),
    ("Spacing.Space.Y_4", "space-y-4"),
    ("Layout.FLEX", "flex"),
    ("Layout.GRID", "grid"),
    ("Layout.HIDDEN", "hidden"),
    ("Layout.TABLE_ROW", "table-row"),
    ("Sizing.Height.H_80", "h-80"),
    ("Sizing.MaxHeight.FULL", "max-h-full"),
    ("Sizing.MaxWidth.SCREEN_2XL", "max-w-screen-2xl"),
    ("Sizing.MaxWidth.W_XS", "max-w-xs"),
    ("Sizing.MinHeight.MIN", "min-h-min"),
    ("Sizing.MinWidth.W_0", "min-w-0"),
    ("Sizing.Size.SIZE_AUTO", "size-auto"),
    ("Sizing.Width.W_1_12", "w-1/12"),
    ("Background.WHITE", "bg-white"),
    ("Background.BLUE_600", "bg-blue-600"),
    ("Background.ORANGE_950", "bg-orange-950"),
    ("Text.RED_500", "text-red-500"),
    ("Text.STONE_50", "text-stone-50"),
    ("Border.ROUNDED_LG", "rounded-lg"),
    ("Border.ROUNDED_ES_NONE", "rounded-es-none"),
    ("Flex.ROW", "flex-row"),
    ("Flex.COL_REVERSE", "flex-col-reverse"),
    ("Flex.AlignContent.AROUND", "content-around"),
    ("Flex.AlignItems.CENTER", "items-center"),
    ("Flex.AlignSelf.START", "self-start"),
    ("Flex.JustifyContent.BETWEEN", "justify-between"),
    ("Grid.COLS_NONE", "grid-cols-none"),
    ("Grid.ROWS_10", "grid-rows-10"),
    ("Typography.FontFamily.SERIF", "font-serif"),
    ("Typography.FontSize.BASE", "text-base"),
    ("Typography.FontSize.XXLARGE", "text-2xl"),
    ("Typography.FontSize.XXXXXXXXXLARGE", "text-9xl"),
    ("Typography.FontStyle.NOT_ITALIC", "not-italic"),
    ("Typography.FontWeight.BOLD", "font-bold"),
    ("Typography.TextAlign.JUSTIFY", "text-justify"),
    ("Typography.TextDecoration.DECORATION_DOUBLE", "decoration-double"),
    ("Typography.TextTransform.NORMAL_CASE", "normal-case"),
    ("Effects.Opacity.OPACITY_80", "opacity-80"),
    ("Effects.Shadow.LG", "shadow-lg"),
    ("Position.INSET_20", "inset-20"),
    ("Overflow.OVERFLOW_X_VISIBLE", "overflow-x-visible"),
    ("Transitions.DELAY_1000", "delay-1000"),
    ("Transitions.ANIMATE_NONE", "animate-none"),
    ("Transforms.SKEW_X_2", "skew-x-2"),
    ("Other.RING_2", "ring-2"),
    ("Other.ORDER_5", "order-5"),
    ("Other.WILL_CHANGE_TRANSFORM", "will-change-transform"),
];

#[test]
fn test_golden_values_resolve() {
    for (path, expected) in GOLDEN {
        let actual = catalog::resolve(path)
            .unwrap_or_else(|e| panic!("{} did not resolve: {}", path, e));
        assert_eq!(actual, *expected, "wrong class for {}", path);
    }
}

/// Every utility as `category\tname\tclass`, in catalog order
const GOLDEN_CATALOG: &str = include_str!("fixtures/catalog.tsv");

fn golden_catalog() -> Vec<(&'static str, &'static str, &'static str)> {
    GOLDEN_CATALOG
        .lines()
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            let mut fields = line.split('\t');
            match (fields.next(), fields.next(), fields.next(), fields.next()) {
                (Some(category), Some(name), Some(class), None) => (category, name, class),
                _ => panic!("malformed fixture line: {:?}", line),
            }
        })
        .collect()
}

#[test]
fn test_whole_catalog_matches_golden_fixture() {
    let golden = golden_catalog();
    let actual: Vec<_> = catalog::entries().collect();

    assert_eq!(golden.len(), 1414);
    assert_eq!(actual.len(), golden.len(), "catalog and fixture sizes differ");

    for (entry, (category, name, class)) in actual.iter().zip(&golden) {
        assert_eq!(entry.category.path(), *category, "category of {}", entry.path());
        assert_eq!(entry.name, *name, "name in {}", category);
        assert_eq!(entry.class_name, *class, "class of {}.{}", category, name);
    }
}

#[test]
fn test_every_golden_path_resolves() {
    for (category, name, class) in golden_catalog() {
        let path = format!("{}.{}", category, name);
        assert_eq!(catalog::resolve(&path).unwrap(), class, "wrong class for {}", path);
    }
}

#[test]
fn test_golden_values_as_constants() {
    assert_eq!(tw::spacing::gap::GAP_0_5, "gap-0.5");
    assert_eq!(tw::spacing::margin::NEG_RIGHT_1, "-mr-1");
    assert_eq!(tw::sizing::width::W_1_12, "w-1/12");
    assert_eq!(tw::layout::FLEX, "flex");
    assert_eq!(tw::flex::align_items::CENTER, "items-center");
    assert_eq!(tw::typography::font_size::BASE, "text-base");
    assert_eq!(tw::typography::font_weight::BOLD, "font-bold");
    assert_eq!(tw::effects::shadow::LG, "shadow-lg");
    assert_eq!(tw::other::RING_2, "ring-2");
    assert_eq!(tw::TAILWIND_VERSION, "4.1.18");
}

#[test]
fn test_category_sizes() {
    let expected = [
        (Category::SpacingGap, 43),
        (Category::SpacingMargin, 70),
        (Category::SpacingPadding, 65),
        (Category::SpacingSpace, 10),
        (Category::Layout, 21),
        (Category::SizingWidth, 41),
        (Category::Background, 39),
        (Category::Text, 97),
        (Category::Border, 63),
        (Category::Flex, 22),
        (Category::Grid, 67),
        (Category::TypographyFontSize, 13),
        (Category::EffectsOpacity, 16),
        (Category::Position, 62),
        (Category::Transforms, 45),
        (Category::Other, 525),
    ];
    for (category, len) in expected {
        assert_eq!(category.len(), len, "size of {}", category);
    }
    assert_eq!(Category::ALL.len(), 35);
    assert_eq!(catalog::total_len(), 1414);
    assert_eq!(catalog::entries().count(), 1414);
}

#[test]
fn test_names_and_classes_unique_within_category() {
    for category in Category::ALL {
        let mut names = HashSet::new();
        let mut classes = HashSet::new();
        for entry in category.entries() {
            assert!(names.insert(entry.name), "duplicate name {}", entry.path());
            assert!(classes.insert(entry.class_name), "duplicate class {} in {}", entry.class_name, category);
        }
    }
}

#[test]
fn test_every_entry_has_tailwind_shape() {
    let class_shape = Regex::new(r"^-?[a-z0-9]+(?:[-./][a-z0-9]+)*$").unwrap();
    let name_shape = Regex::new(r"^[A-Z][A-Z0-9]*(?:_[A-Z0-9]+)*$").unwrap();

    for entry in catalog::entries() {
        assert!(class_shape.is_match(entry.class_name), "bad class {:?}", entry);
        assert!(name_shape.is_match(entry.name), "bad name {:?}", entry);
    }
}

#[test]
fn test_negative_values_use_neg_prefix() {
    for entry in catalog::entries().filter(|e| e.class_name.starts_with('-')) {
        assert!(entry.name.starts_with("NEG_"), "{} should be NEG_*", entry.path());
    }
}

#[test]
fn test_reverse_lookup() {
    let found = catalog::find_class("items-center");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].category, Category::FlexAlignItems);
    assert_eq!(found[0].name, "CENTER");

    assert!(catalog::find_class("items-centre").is_empty());
}
