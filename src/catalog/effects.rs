//! Opacity and shadow utilities.

/// Opacity utilities.
pub mod opacity {
    utility_table! {
        OPACITY_0 => "opacity-0",
        OPACITY_5 => "opacity-5",
        OPACITY_10 => "opacity-10",
        OPACITY_15 => "opacity-15",
        OPACITY_20 => "opacity-20",
        OPACITY_25 => "opacity-25",
        OPACITY_30 => "opacity-30",
        OPACITY_40 => "opacity-40",
        OPACITY_50 => "opacity-50",
        OPACITY_60 => "opacity-60",
        OPACITY_70 => "opacity-70",
        OPACITY_75 => "opacity-75",
        OPACITY_80 => "opacity-80",
        OPACITY_90 => "opacity-90",
        OPACITY_95 => "opacity-95",
        OPACITY_100 => "opacity-100",
    }
}

/// Shadow utilities.
pub mod shadow {
    utility_table! {
        DEFAULT => "shadow",
        N2XL => "shadow-2xl",
        BLUE_500 => "shadow-blue-500",
        GRAY_500 => "shadow-gray-500",
        INNER => "shadow-inner",
        LG => "shadow-lg",
        MD => "shadow-md",
        NONE => "shadow-none",
        RED_500 => "shadow-red-500",
        SLATE_500 => "shadow-slate-500",
        SM => "shadow-sm",
        XL => "shadow-xl",
    }
}
