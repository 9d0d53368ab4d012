//! Tailwind CSS utility class constants.
//!
//! Each category module exposes its utilities as `&'static str` constants
//! together with an `ENTRIES` table listing every `(name, class)` pair in
//! declaration order. The [`Category`] registry ties the tables together so
//! the catalog can also be queried at runtime:
//!
//! ```
//! use tailwind_catalog::catalog::{self, Category};
//!
//! assert_eq!(catalog::layout::FLEX, "flex");
//! assert_eq!(catalog::lookup(Category::Layout, "FLEX"), Some("flex"));
//! assert_eq!(catalog::resolve("Typography.FontSize.BASE").unwrap(), "text-base");
//! ```

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::errors::{CatalogError, Result};

/// Declares one constant per utility plus the `ENTRIES` table for the
/// enclosing module.
macro_rules! utility_table {
    ($($name:ident => $class:literal),* $(,)?) => {
        $(
            #[doc = concat!("Tailwind class: `", $class, "`")]
            pub const $name: &str = $class;
        )*

        /// Every `(name, class)` pair of this category, in declaration order.
        pub const ENTRIES: &[(&str, &str)] = &[$((stringify!($name), $class)),*];
    };
}

pub mod background;
pub mod border;
pub mod effects;
pub mod flex;
pub mod grid;
pub mod layout;
pub mod other;
pub mod overflow;
pub mod position;
pub mod sizing;
pub mod spacing;
pub mod text;
pub mod transforms;
pub mod transitions;
pub mod typography;

macro_rules! categories {
    ($($variant:ident => $path:literal, $($module:ident)::+;)*) => {
        /// Every category of the catalog that carries utilities.
        ///
        /// Parent namespaces without utilities of their own (`Spacing`,
        /// `Sizing`, `Typography`, `Effects`) are not categories.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Category {
            $($variant,)*
        }

        impl Category {
            /// All categories in catalog order.
            pub const ALL: &'static [Category] = &[$(Category::$variant,)*];

            /// Dotted path of the category, e.g. `"Spacing.Gap"`.
            pub fn path(self) -> &'static str {
                match self {
                    $(Category::$variant => $path,)*
                }
            }

            /// Raw `(name, class)` table of the category.
            pub fn table(self) -> &'static [(&'static str, &'static str)] {
                match self {
                    $(Category::$variant => $($module)::+::ENTRIES,)*
                }
            }
        }
    };
}

categories! {
    SpacingGap => "Spacing.Gap", spacing::gap;
    SpacingMargin => "Spacing.Margin", spacing::margin;
    SpacingPadding => "Spacing.Padding", spacing::padding;
    SpacingSpace => "Spacing.Space", spacing::space;
    Layout => "Layout", layout;
    SizingHeight => "Sizing.Height", sizing::height;
    SizingMaxHeight => "Sizing.MaxHeight", sizing::max_height;
    SizingMaxWidth => "Sizing.MaxWidth", sizing::max_width;
    SizingMinHeight => "Sizing.MinHeight", sizing::min_height;
    SizingMinWidth => "Sizing.MinWidth", sizing::min_width;
    SizingSize => "Sizing.Size", sizing::size;
    SizingWidth => "Sizing.Width", sizing::width;
    Background => "Background", background;
    Text => "Text", text;
    Border => "Border", border;
    Flex => "Flex", flex;
    FlexAlignContent => "Flex.AlignContent", flex::align_content;
    FlexAlignItems => "Flex.AlignItems", flex::align_items;
    FlexAlignSelf => "Flex.AlignSelf", flex::align_self;
    FlexJustifyContent => "Flex.JustifyContent", flex::justify_content;
    Grid => "Grid", grid;
    TypographyFontFamily => "Typography.FontFamily", typography::font_family;
    TypographyFontSize => "Typography.FontSize", typography::font_size;
    TypographyFontStyle => "Typography.FontStyle", typography::font_style;
    TypographyFontWeight => "Typography.FontWeight", typography::font_weight;
    TypographyTextAlign => "Typography.TextAlign", typography::text_align;
    TypographyTextDecoration => "Typography.TextDecoration", typography::text_decoration;
    TypographyTextTransform => "Typography.TextTransform", typography::text_transform;
    EffectsOpacity => "Effects.Opacity", effects::opacity;
    EffectsShadow => "Effects.Shadow", effects::shadow;
    Position => "Position", position;
    Overflow => "Overflow", overflow;
    Transitions => "Transitions", transitions;
    Transforms => "Transforms", transforms;
    Other => "Other", other;
}

impl Category {
    /// Typed entries of the category.
    pub fn entries(self) -> impl Iterator<Item = UtilityClassEntry> {
        self.table().iter().map(move |&(name, class_name)| UtilityClassEntry {
            category: self,
            name,
            class_name,
        })
    }

    /// Number of utilities in the category.
    pub fn len(self) -> usize {
        self.table().len()
    }

    pub fn is_empty(self) -> bool {
        self.table().is_empty()
    }

    /// Look up a utility of this category by its constant name.
    pub fn get(self, name: &str) -> Option<&'static str> {
        self.table()
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, class_name)| *class_name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Normalized form used to compare category paths: lowercase, `::` treated
/// as `.`, underscores ignored.
fn normalize_path(path: &str) -> String {
    path.trim()
        .replace("::", ".")
        .chars()
        .filter(|c| *c != '_')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl FromStr for Category {
    type Err = CatalogError;

    /// Accepts `"Spacing.Gap"`, `"spacing.gap"` and `"spacing::gap"`.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = normalize_path(s);
        Category::ALL
            .iter()
            .copied()
            .find(|category| normalize_path(category.path()) == wanted)
            .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.path())
    }
}

/// A single utility of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct UtilityClassEntry {
    pub category: Category,
    /// Constant name, e.g. `GAP_0_5`.
    pub name: &'static str,
    /// Tailwind class, e.g. `gap-0.5`.
    pub class_name: &'static str,
}

impl UtilityClassEntry {
    /// Full dotted path, e.g. `"Spacing.Gap.GAP_0_5"`.
    pub fn path(&self) -> String {
        format!("{}.{}", self.category.path(), self.name)
    }
}

/// Look up a utility by category and constant name.
pub fn lookup(category: Category, name: &str) -> Option<&'static str> {
    category.get(name)
}

/// Resolve a dotted path such as `"Typography.FontSize.BASE"` to its class.
///
/// The constant name is matched case-insensitively.
pub fn resolve(path: &str) -> Result<&'static str> {
    let (category_path, name) = path
        .trim()
        .rsplit_once('.')
        .ok_or_else(|| CatalogError::InvalidInput(format!("'{}' is not a Category.NAME path", path)))?;

    let category: Category = category_path.parse()?;
    let name = name.to_ascii_uppercase();

    category.get(&name).ok_or_else(|| CatalogError::UnknownUtility {
        category: category.path().to_string(),
        name,
    })
}

/// Every utility of the catalog, category by category.
pub fn entries() -> impl Iterator<Item = UtilityClassEntry> {
    Category::ALL.iter().flat_map(|category| category.entries())
}

/// Reverse lookup: every entry whose class equals `class_name`.
///
/// A class may appear in more than one category.
pub fn find_class(class_name: &str) -> Vec<UtilityClassEntry> {
    entries().filter(|entry| entry.class_name == class_name).collect()
}

/// Total number of utilities across all categories.
pub fn total_len() -> usize {
    Category::ALL.iter().map(|category| category.len()).sum()
}
