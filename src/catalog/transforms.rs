//! Scale, rotate, translate and skew utilities.

utility_table! {
    ROTATE_0 => "rotate-0",
    SCALE_0 => "scale-0",
    SCALE_X_0 => "scale-x-0",
    SCALE_Y_0 => "scale-y-0",
    SKEW_X_0 => "skew-x-0",
    SKEW_Y_0 => "skew-y-0",
    TRANSLATE_X_0 => "translate-x-0",
    TRANSLATE_Y_0 => "translate-y-0",
    NEG_ROTATE_1 => "-rotate-1",
    NEG_TRANSLATE_X_1 => "-translate-x-1",
    NEG_TRANSLATE_Y_1 => "-translate-y-1",
    ROTATE_1 => "rotate-1",
    SKEW_X_1 => "skew-x-1",
    SKEW_Y_1 => "skew-y-1",
    TRANSLATE_X_1 => "translate-x-1",
    TRANSLATE_Y_1 => "translate-y-1",
    ROTATE_2 => "rotate-2",
    SKEW_X_2 => "skew-x-2",
    TRANSLATE_X_2 => "translate-x-2",
    TRANSLATE_Y_2 => "translate-y-2",
    ROTATE_3 => "rotate-3",
    SKEW_X_3 => "skew-x-3",
    ROTATE_6 => "rotate-6",
    SKEW_X_6 => "skew-x-6",
    ROTATE_12 => "rotate-12",
    SKEW_X_12 => "skew-x-12",
    NEG_ROTATE_45 => "-rotate-45",
    ROTATE_45 => "rotate-45",
    SCALE_50 => "scale-50",
    SCALE_X_50 => "scale-x-50",
    SCALE_Y_50 => "scale-y-50",
    SCALE_75 => "scale-75",
    NEG_ROTATE_90 => "-rotate-90",
    ROTATE_90 => "rotate-90",
    SCALE_90 => "scale-90",
    SCALE_95 => "scale-95",
    SCALE_100 => "scale-100",
    SCALE_X_100 => "scale-x-100",
    SCALE_Y_100 => "scale-y-100",
    SCALE_105 => "scale-105",
    SCALE_110 => "scale-110",
    SCALE_125 => "scale-125",
    SCALE_150 => "scale-150",
    NEG_ROTATE_180 => "-rotate-180",
    ROTATE_180 => "rotate-180",
}
