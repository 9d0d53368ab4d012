//! Width, height and their min/max bounds.

/// Height utilities.
pub mod height {
    utility_table! {
        AUTO => "h-auto",
        FIT => "h-fit",
        FULL => "h-full",
        H_0 => "h-0",
        H_0_5 => "h-0.5",
        H_1 => "h-1",
        H_1_2 => "h-1/2",
        H_1_3 => "h-1/3",
        H_1_4 => "h-1/4",
        H_1_5 => "h-1/5",
        H_1_6 => "h-1/6",
        H_2 => "h-2",
        H_2_3 => "h-2/3",
        H_3 => "h-3",
        H_3_4 => "h-3/4",
        H_4 => "h-4",
        H_5 => "h-5",
        H_6 => "h-6",
        H_8 => "h-8",
        H_10 => "h-10",
        H_12 => "h-12",
        H_16 => "h-16",
        H_20 => "h-20",
        H_24 => "h-24",
        H_32 => "h-32",
        H_40 => "h-40",
        H_48 => "h-48",
        H_56 => "h-56",
        H_64 => "h-64",
        H_72 => "h-72",
        H_80 => "h-80",
        H_96 => "h-96",
        H_PX => "h-px",
        MAX => "h-max",
        MIN => "h-min",
        SCREEN => "h-screen",
    }
}

/// Maximum height utilities.
pub mod max_height {
    utility_table! {
        FIT => "max-h-fit",
        FULL => "max-h-full",
        H_0 => "max-h-0",
        MAX => "max-h-max",
        MIN => "max-h-min",
        SCREEN => "max-h-screen",
    }
}

/// Maximum width utilities.
pub mod max_width {
    utility_table! {
        FIT => "max-w-fit",
        FULL => "max-w-full",
        MAX => "max-w-max",
        MIN => "max-w-min",
        SCREEN_LG => "max-w-screen-lg",
        W_0 => "max-w-0",
        SCREEN_2XL => "max-w-screen-2xl",
        SCREEN_MD => "max-w-screen-md",
        SCREEN_SM => "max-w-screen-sm",
        SCREEN_XL => "max-w-screen-xl",
        W_2XL => "max-w-2xl",
        W_3XL => "max-w-3xl",
        W_4XL => "max-w-4xl",
        W_5XL => "max-w-5xl",
        W_6XL => "max-w-6xl",
        W_7XL => "max-w-7xl",
        W_LG => "max-w-lg",
        W_MD => "max-w-md",
        W_NONE => "max-w-none",
        W_PROSE => "max-w-prose",
        W_SM => "max-w-sm",
        W_XL => "max-w-xl",
        W_XS => "max-w-xs",
    }
}

/// Minimum height utilities.
pub mod min_height {
    utility_table! {
        FIT => "min-h-fit",
        FULL => "min-h-full",
        H_0 => "min-h-0",
        MAX => "min-h-max",
        MIN => "min-h-min",
        SCREEN => "min-h-screen",
    }
}

/// Minimum width utilities.
pub mod min_width {
    utility_table! {
        FIT => "min-w-fit",
        FULL => "min-w-full",
        MAX => "min-w-max",
        MIN => "min-w-min",
        W_0 => "min-w-0",
    }
}

/// Size utilities.
pub mod size {
    utility_table! {
        SIZE_0 => "size-0",
        SIZE_1 => "size-1",
        SIZE_2 => "size-2",
        SIZE_4 => "size-4",
        SIZE_8 => "size-8",
        SIZE_AUTO => "size-auto",
        SIZE_FULL => "size-full",
    }
}

/// Width utilities.
pub mod width {
    utility_table! {
        AUTO => "w-auto",
        FIT => "w-fit",
        FULL => "w-full",
        MAX => "w-max",
        MIN => "w-min",
        SCREEN => "w-screen",
        W_0 => "w-0",
        W_0_5 => "w-0.5",
        W_1 => "w-1",
        W_1_12 => "w-1/12",
        W_1_2 => "w-1/2",
        W_1_3 => "w-1/3",
        W_1_4 => "w-1/4",
        W_1_5 => "w-1/5",
        W_1_6 => "w-1/6",
        W_2 => "w-2",
        W_2_3 => "w-2/3",
        W_2_4 => "w-2/4",
        W_2_5 => "w-2/5",
        W_3 => "w-3",
        W_3_4 => "w-3/4",
        W_3_5 => "w-3/5",
        W_4 => "w-4",
        W_4_5 => "w-4/5",
        W_5 => "w-5",
        W_6 => "w-6",
        W_8 => "w-8",
        W_10 => "w-10",
        W_12 => "w-12",
        W_16 => "w-16",
        W_20 => "w-20",
        W_24 => "w-24",
        W_32 => "w-32",
        W_40 => "w-40",
        W_48 => "w-48",
        W_56 => "w-56",
        W_64 => "w-64",
        W_72 => "w-72",
        W_80 => "w-80",
        W_96 => "w-96",
        W_PX => "w-px",
    }
}
