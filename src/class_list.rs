use serde::{Deserialize, Serialize};
use std::fmt;

use crate::modifier::{Breakpoint, Modifier, StateVariant};

/// An ordered list of class names, rendered as a space-separated `class`
/// attribute value.
///
/// Order is kept as pushed. Duplicates are kept too: the list is a
/// transport for class names, not a set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split a class attribute on any run of whitespace.
    ///
    /// Leading and trailing whitespace is dropped, so `parse(" a  b ")`
    /// yields `["a", "b"]`.
    pub fn parse(class_string: &str) -> Self {
        class_string.split_whitespace().collect()
    }

    /// Append a class. Blank input is ignored so that joining never
    /// produces doubled spaces.
    pub fn push(&mut self, class_name: impl Into<String>) {
        let class_name = class_name.into();
        if !class_name.trim().is_empty() {
            self.classes.push(class_name);
        }
    }

    /// Builder form of [`ClassList::push`].
    pub fn with(mut self, class_name: impl Into<String>) -> Self {
        self.push(class_name);
        self
    }

    /// Append `breakpoint:utility`.
    pub fn responsive(self, breakpoint: Breakpoint, utility: &str) -> Self {
        self.with(breakpoint.apply(utility))
    }

    /// Append `variant:utility`.
    pub fn state(self, variant: StateVariant, utility: &str) -> Self {
        self.with(variant.apply(utility))
    }

    /// Append `utility` wrapped in every modifier, innermost first.
    pub fn modified(self, modifiers: &[Modifier], utility: &str) -> Self {
        let class_name = modifiers
            .iter()
            .fold(utility.to_string(), |acc, modifier| modifier.apply(&acc));
        self.with(class_name)
    }

    pub fn contains(&self, class_name: &str) -> bool {
        self.classes.iter().any(|c| c == class_name)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.classes
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, class_name) in self.classes.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(class_name)?;
        }
        Ok(())
    }
}

impl<S: Into<String>> FromIterator<S> for ClassList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = ClassList::new();
        list.extend(iter);
        list
    }
}

impl<S: Into<String>> Extend<S> for ClassList {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for class_name in iter {
            self.push(class_name);
        }
    }
}

impl From<ClassList> for String {
    fn from(list: ClassList) -> Self {
        list.to_string()
    }
}

/// Build a [`ClassList`] from class name expressions.
///
/// ```
/// use tailwind_catalog::{class_list, tw};
///
/// let list = class_list![tw::layout::FLEX, tw::responsive::md(tw::flex::ROW)];
/// assert_eq!(list.to_string(), "flex md:flex-row");
/// ```
#[macro_export]
macro_rules! class_list {
    () => {
        $crate::ClassList::new()
    };
    ($($class:expr),+ $(,)?) => {{
        let mut list = $crate::ClassList::new();
        $(list.push($class);)+
        list
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{background, border, effects, layout, sizing, spacing};

    #[test]
    fn test_display_joins_with_single_space() {
        let list = ClassList::new()
            .with(background::WHITE)
            .with(border::ROUNDED_LG)
            .with(effects::shadow::LG)
            .with(spacing::padding::P_6)
            .with(sizing::max_width::W_SM)
            .responsive(Breakpoint::Md, sizing::max_width::W_MD);

        assert_eq!(
            list.to_string(),
            "bg-white rounded-lg shadow-lg p-6 max-w-sm md:max-w-md"
        );
    }

    #[test]
    fn test_parse_normalizes_whitespace() {
        let list = ClassList::parse("  flex\titems-center \n p-4  ");
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["flex", "items-center", "p-4"]);
        assert!(ClassList::parse("   ").is_empty());
    }

    #[test]
    fn test_blank_classes_are_skipped() {
        let mut list = ClassList::new();
        list.push("");
        list.push("  ");
        list.push(layout::FLEX);
        assert_eq!(list.len(), 1);
        assert_eq!(list.to_string(), "flex");
    }

    #[test]
    fn test_duplicates_and_order_kept() {
        let list: ClassList = vec!["p-4", "flex", "p-4"].into_iter().collect();
        assert_eq!(list.to_string(), "p-4 flex p-4");
        assert!(list.contains("flex"));
        assert!(!list.contains("grid"));
    }

    #[test]
    fn test_modified_applies_innermost_first() {
        let list = ClassList::new().modified(
            &[Modifier::from(Breakpoint::Lg), Modifier::from(StateVariant::Focus)],
            layout::FLEX,
        );
        assert_eq!(list.to_string(), "focus:lg:flex");
    }

    #[test]
    fn test_macro() {
        let empty: ClassList = crate::class_list![];
        assert!(empty.is_empty());

        let list = crate::class_list![layout::GRID, String::from("gap-4"),];
        assert_eq!(list.into_vec(), vec!["grid".to_string(), "gap-4".to_string()]);
    }

    #[test]
    fn test_serde_transparent() {
        let list = ClassList::parse("flex p-4");
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"["flex","p-4"]"#);
        let back: ClassList = serde_json::from_str(&json).unwrap();
        assert_eq!(back, list);
    }
}
