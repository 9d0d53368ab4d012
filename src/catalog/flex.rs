//! Flexbox utilities.

utility_table! {
    BASIS_0 => "basis-0",
    BASIS_1 => "basis-1",
    BASIS_AUTO => "basis-auto",
    BASIS_FULL => "basis-full",
    COL => "flex-col",
    COL_REVERSE => "flex-col-reverse",
    FLEX_GROW_0 => "flex-grow-0",
    FLEX_1 => "flex-1",
    BASIS_2 => "basis-2",
    BASIS_4 => "basis-4",
    BASIS_8 => "basis-8",
    FLEX_AUTO => "flex-auto",
    FLEX_GROW => "flex-grow",
    FLEX_INITIAL => "flex-initial",
    FLEX_NONE => "flex-none",
    FLEX_SHRINK => "flex-shrink",
    FLEX_SHRINK_0 => "flex-shrink-0",
    NOWRAP => "flex-nowrap",
    ROW => "flex-row",
    ROW_REVERSE => "flex-row-reverse",
    WRAP => "flex-wrap",
    WRAP_REVERSE => "flex-wrap-reverse",
}

/// `align-content` utilities.
pub mod align_content {
    utility_table! {
        AROUND => "content-around",
        BASELINE => "content-baseline",
        BETWEEN => "content-between",
        CENTER => "content-center",
        END => "content-end",
        EVENLY => "content-evenly",
        NONE => "content-none",
        START => "content-start",
        STRETCH => "content-stretch",
    }
}

/// `align-items` utilities.
pub mod align_items {
    utility_table! {
        BASELINE => "items-baseline",
        CENTER => "items-center",
        END => "items-end",
        START => "items-start",
        STRETCH => "items-stretch",
    }
}

/// `align-self` utilities.
pub mod align_self {
    utility_table! {
        AUTO => "self-auto",
        BASELINE => "self-baseline",
        CENTER => "self-center",
        END => "self-end",
        START => "self-start",
        STRETCH => "self-stretch",
    }
}

/// `justify-content` utilities.
pub mod justify_content {
    utility_table! {
        AROUND => "justify-around",
        BETWEEN => "justify-between",
        CENTER => "justify-center",
        END => "justify-end",
        EVENLY => "justify-evenly",
        START => "justify-start",
        STRETCH => "justify-stretch",
    }
}
