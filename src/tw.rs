//! Flat facade over the catalog, one function per modifier prefix.
//!
//! ```
//! use tailwind_catalog::tw;
//!
//! let classes = [
//!     tw::layout::FLEX.to_string(),
//!     tw::responsive::md(tw::flex::ROW),
//!     tw::state::hover(tw::background::BLUE_600),
//! ];
//! assert_eq!(classes.join(" "), "flex md:flex-row hover:bg-blue-600");
//! ```

pub use crate::catalog::{
    background, border, effects, flex, grid, layout, other, overflow, position, sizing, spacing,
    text, transforms, transitions, typography,
};
pub use crate::TAILWIND_VERSION;

/// Breakpoint modifiers.
pub mod responsive {
    use crate::modifier::Breakpoint;

    /// `sm:` (640px)
    pub fn sm(utility: &str) -> String {
        Breakpoint::Sm.apply(utility)
    }

    /// `md:` (768px)
    pub fn md(utility: &str) -> String {
        Breakpoint::Md.apply(utility)
    }

    /// `lg:` (1024px)
    pub fn lg(utility: &str) -> String {
        Breakpoint::Lg.apply(utility)
    }

    /// `xl:` (1280px)
    pub fn xl(utility: &str) -> String {
        Breakpoint::Xl.apply(utility)
    }

    /// `2xl:` (1536px)
    pub fn xxl(utility: &str) -> String {
        Breakpoint::Xxl.apply(utility)
    }
}

/// State variant modifiers.
pub mod state {
    use crate::modifier::StateVariant;

    pub fn hover(utility: &str) -> String {
        StateVariant::Hover.apply(utility)
    }

    pub fn focus(utility: &str) -> String {
        StateVariant::Focus.apply(utility)
    }

    pub fn active(utility: &str) -> String {
        StateVariant::Active.apply(utility)
    }

    /// Dark mode.
    pub fn dark(utility: &str) -> String {
        StateVariant::Dark.apply(utility)
    }

    pub fn disabled(utility: &str) -> String {
        StateVariant::Disabled.apply(utility)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_prefix_functions() {
        assert_eq!(responsive::sm(flex::COL), "sm:flex-col");
        assert_eq!(responsive::md(layout::GRID), "md:grid");
        assert_eq!(responsive::lg(flex::ROW), "lg:flex-row");
        assert_eq!(responsive::xl(layout::HIDDEN), "xl:hidden");
        assert_eq!(responsive::xxl(layout::BLOCK), "2xl:block");

        assert_eq!(state::hover(background::BLUE_600), "hover:bg-blue-600");
        assert_eq!(state::focus(other::RING_2), "focus:ring-2");
        assert_eq!(state::active(effects::shadow::LG), "active:shadow-lg");
        assert_eq!(state::dark(background::GRAY_800), "dark:bg-gray-800");
        assert_eq!(state::disabled(effects::opacity::OPACITY_50), "disabled:opacity-50");
    }

    #[test]
    fn test_nested_calls_compose() {
        assert_eq!(state::focus(&responsive::lg(layout::FLEX)), "focus:lg:flex");
        assert_eq!(responsive::md(&state::dark(text::WHITE)), "md:dark:text-white");
    }
}
