//! Font and text styling utilities.

/// Font family utilities.
pub mod font_family {
    utility_table! {
        MONO => "font-mono",
        SANS => "font-sans",
        SERIF => "font-serif",
    }
}

/// Font size utilities.
pub mod font_size {
    utility_table! {
        BASE => "text-base",
        LG => "text-lg",
        SM => "text-sm",
        XL => "text-xl",
        XS => "text-xs",
        XXLARGE => "text-2xl",
        XXXLARGE => "text-3xl",
        XXXXLARGE => "text-4xl",
        XXXXXLARGE => "text-5xl",
        XXXXXXLARGE => "text-6xl",
        XXXXXXXLARGE => "text-7xl",
        XXXXXXXXLARGE => "text-8xl",
        XXXXXXXXXLARGE => "text-9xl",
    }
}

/// Font style utilities.
pub mod font_style {
    utility_table! {
        ITALIC => "italic",
        NOT_ITALIC => "not-italic",
    }
}

/// Font weight utilities.
pub mod font_weight {
    utility_table! {
        BLACK => "font-black",
        BOLD => "font-bold",
        EXTRABOLD => "font-extrabold",
        EXTRALIGHT => "font-extralight",
        LIGHT => "font-light",
        MEDIUM => "font-medium",
        NORMAL => "font-normal",
        SEMIBOLD => "font-semibold",
        THIN => "font-thin",
    }
}

/// Text alignment utilities.
pub mod text_align {
    utility_table! {
        CENTER => "text-center",
        END => "text-end",
        JUSTIFY => "text-justify",
        LEFT => "text-left",
        RIGHT => "text-right",
        START => "text-start",
    }
}

/// Text decoration utilities.
pub mod text_decoration {
    utility_table! {
        DECORATION_0 => "decoration-0",
        DECORATION_1 => "decoration-1",
        DECORATION_2 => "decoration-2",
        DECORATION_4 => "decoration-4",
        DECORATION_8 => "decoration-8",
        DECORATION_AUTO => "decoration-auto",
        DECORATION_BLUE_500 => "decoration-blue-500",
        DECORATION_DASHED => "decoration-dashed",
        DECORATION_DOTTED => "decoration-dotted",
        DECORATION_DOUBLE => "decoration-double",
        DECORATION_FROM_FONT => "decoration-from-font",
        DECORATION_GRAY_500 => "decoration-gray-500",
        DECORATION_RED_500 => "decoration-red-500",
        DECORATION_SLATE_500 => "decoration-slate-500",
        DECORATION_SOLID => "decoration-solid",
        DECORATION_WAVY => "decoration-wavy",
        LINE_THROUGH => "line-through",
        NO_UNDERLINE => "no-underline",
        OVERLINE => "overline",
        UNDERLINE => "underline",
    }
}

/// Text transform utilities.
pub mod text_transform {
    utility_table! {
        CAPITALIZE => "capitalize",
        LOWERCASE => "lowercase",
        NORMAL_CASE => "normal-case",
        UPPERCASE => "uppercase",
    }
}
