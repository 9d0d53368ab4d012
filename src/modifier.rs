//! Responsive and state variant prefixes.
//!
//! A modifier turns a utility into its variant form by prepending
//! `prefix + ":"`. Applying several modifiers simply nests the prefixes in
//! call order; nothing is deduplicated or reordered:
//!
//! ```
//! use tailwind_catalog::modifier::{responsive, state, Breakpoint, StateVariant};
//!
//! assert_eq!(responsive(Breakpoint::Md, "flex"), "md:flex");
//! assert_eq!(
//!     state(StateVariant::Focus, &responsive(Breakpoint::Lg, "flex")),
//!     "focus:lg:flex"
//! );
//! ```

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::errors::{CatalogError, Result};

/// Separator between a variant prefix and the utility.
pub const SEPARATOR: char = ':';

fn prefixed(prefix: &str, utility: &str) -> String {
    let mut out = String::with_capacity(prefix.len() + 1 + utility.len());
    out.push_str(prefix);
    out.push(SEPARATOR);
    out.push_str(utility);
    out
}

/// Responsive breakpoints (minimum viewport widths).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Breakpoint {
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

impl Breakpoint {
    pub const ALL: &'static [Breakpoint] = &[
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
        Breakpoint::Xxl,
    ];

    pub fn prefix(self) -> &'static str {
        match self {
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
            Breakpoint::Xxl => "2xl",
        }
    }

    /// Default Tailwind minimum width of the breakpoint.
    pub fn min_width(self) -> &'static str {
        match self {
            Breakpoint::Sm => "640px",
            Breakpoint::Md => "768px",
            Breakpoint::Lg => "1024px",
            Breakpoint::Xl => "1280px",
            Breakpoint::Xxl => "1536px",
        }
    }

    /// Prepend this breakpoint's prefix to `utility`.
    pub fn apply(self, utility: &str) -> String {
        prefixed(self.prefix(), utility)
    }
}

impl FromStr for Breakpoint {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "sm" => Ok(Breakpoint::Sm),
            "md" => Ok(Breakpoint::Md),
            "lg" => Ok(Breakpoint::Lg),
            "xl" => Ok(Breakpoint::Xl),
            "2xl" | "xxl" => Ok(Breakpoint::Xxl),
            other => Err(CatalogError::UnknownBreakpoint(other.to_string())),
        }
    }
}

/// Interaction and appearance state variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StateVariant {
    Hover,
    Focus,
    Active,
    Dark,
    Disabled,
}

impl StateVariant {
    pub const ALL: &'static [StateVariant] = &[
        StateVariant::Hover,
        StateVariant::Focus,
        StateVariant::Active,
        StateVariant::Dark,
        StateVariant::Disabled,
    ];

    pub fn prefix(self) -> &'static str {
        match self {
            StateVariant::Hover => "hover",
            StateVariant::Focus => "focus",
            StateVariant::Active => "active",
            StateVariant::Dark => "dark",
            StateVariant::Disabled => "disabled",
        }
    }

    /// Prepend this variant's prefix to `utility`.
    pub fn apply(self, utility: &str) -> String {
        prefixed(self.prefix(), utility)
    }
}

impl FromStr for StateVariant {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "hover" => Ok(StateVariant::Hover),
            "focus" => Ok(StateVariant::Focus),
            "active" => Ok(StateVariant::Active),
            "dark" => Ok(StateVariant::Dark),
            "disabled" => Ok(StateVariant::Disabled),
            other => Err(CatalogError::UnknownStateVariant(other.to_string())),
        }
    }
}

/// Either kind of modifier, used where the prefix comes from runtime input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Responsive(Breakpoint),
    State(StateVariant),
}

impl Modifier {
    pub fn prefix(self) -> &'static str {
        match self {
            Modifier::Responsive(breakpoint) => breakpoint.prefix(),
            Modifier::State(variant) => variant.prefix(),
        }
    }

    pub fn apply(self, utility: &str) -> String {
        prefixed(self.prefix(), utility)
    }

    /// Apply to a utility that may be absent.
    ///
    /// A missing utility is an error, never a placeholder in the output.
    /// An empty string is not missing and yields `"<prefix>:"`.
    pub fn try_apply(self, utility: Option<&str>) -> Result<String> {
        match utility {
            Some(utility) => Ok(self.apply(utility)),
            None => Err(CatalogError::MissingUtility {
                prefix: self.prefix().to_string(),
            }),
        }
    }
}

impl From<Breakpoint> for Modifier {
    fn from(breakpoint: Breakpoint) -> Self {
        Modifier::Responsive(breakpoint)
    }
}

impl From<StateVariant> for Modifier {
    fn from(variant: StateVariant) -> Self {
        Modifier::State(variant)
    }
}

impl FromStr for Modifier {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        if let Ok(breakpoint) = s.parse::<Breakpoint>() {
            return Ok(Modifier::Responsive(breakpoint));
        }
        if let Ok(variant) = s.parse::<StateVariant>() {
            return Ok(Modifier::State(variant));
        }
        Err(CatalogError::UnknownModifier(s.to_string()))
    }
}

macro_rules! prefix_display {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.prefix())
                }
            }

            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                    serializer.serialize_str(self.prefix())
                }
            }
        )*
    };
}

prefix_display!(Breakpoint, StateVariant, Modifier);

/// Returns `"<breakpoint>:<utility>"`.
pub fn responsive(breakpoint: Breakpoint, utility: &str) -> String {
    breakpoint.apply(utility)
}

/// Returns `"<variant>:<utility>"`.
pub fn state(variant: StateVariant, utility: &str) -> String {
    variant.apply(utility)
}

/// [`responsive`] with the breakpoint given by its prefix, e.g. `"md"`.
pub fn try_responsive(breakpoint: &str, utility: &str) -> Result<String> {
    Ok(responsive(breakpoint.parse()?, utility))
}

/// [`state`] with the variant given by its prefix, e.g. `"hover"`.
pub fn try_state(variant: &str, utility: &str) -> Result<String> {
    Ok(state(variant.parse()?, utility))
}
