//! Positioning and inset utilities.

utility_table! {
    ABSOLUTE => "absolute",
    AUTO => "z-auto",
    BOTTOM_0 => "bottom-0",
    FIXED => "fixed",
    INSET_0 => "inset-0",
    INSET_0_5 => "inset-0.5",
    INSET_X_0 => "inset-x-0",
    INSET_Y_0 => "inset-y-0",
    LEFT_0 => "left-0",
    RIGHT_0 => "right-0",
    TOP_0 => "top-0",
    TOP_0_5 => "top-0.5",
    Z_0 => "z-0",
    INSET_1 => "inset-1",
    INSET_1_5 => "inset-1.5",
    TOP_1 => "top-1",
    INSET_2 => "inset-2",
    INSET_2_5 => "inset-2.5",
    TOP_2 => "top-2",
    INSET_3 => "inset-3",
    INSET_3_5 => "inset-3.5",
    INSET_4 => "inset-4",
    LEFT_4 => "left-4",
    TOP_4 => "top-4",
    INSET_5 => "inset-5",
    INSET_6 => "inset-6",
    INSET_7 => "inset-7",
    INSET_8 => "inset-8",
    TOP_8 => "top-8",
    INSET_9 => "inset-9",
    INSET_10 => "inset-10",
    Z_10 => "z-10",
    INSET_11 => "inset-11",
    INSET_12 => "inset-12",
    INSET_14 => "inset-14",
    INSET_16 => "inset-16",
    TOP_16 => "top-16",
    INSET_20 => "inset-20",
    Z_20 => "z-20",
    INSET_24 => "inset-24",
    INSET_28 => "inset-28",
    Z_30 => "z-30",
    INSET_32 => "inset-32",
    INSET_36 => "inset-36",
    INSET_40 => "inset-40",
    Z_40 => "z-40",
    INSET_44 => "inset-44",
    INSET_48 => "inset-48",
    Z_50 => "z-50",
    INSET_52 => "inset-52",
    INSET_56 => "inset-56",
    INSET_60 => "inset-60",
    INSET_64 => "inset-64",
    INSET_72 => "inset-72",
    INSET_80 => "inset-80",
    INSET_96 => "inset-96",
    INSET_PX => "inset-px",
    RELATIVE => "relative",
    STATIC => "static",
    STICKY => "sticky",
    TOP_AUTO => "top-auto",
    TOP_PX => "top-px",
}
