//! Spacing utilities: gap, margin, padding and child spacing.

/// Gap utilities.
pub mod gap {
    utility_table! {
        GAP_0 => "gap-0",
        GAP_0_5 => "gap-0.5",
        X_0 => "gap-x-0",
        Y_0 => "gap-y-0",
        GAP_1 => "gap-1",
        GAP_1_5 => "gap-1.5",
        X_1 => "gap-x-1",
        Y_1 => "gap-y-1",
        GAP_2 => "gap-2",
        GAP_2_5 => "gap-2.5",
        X_2 => "gap-x-2",
        Y_2 => "gap-y-2",
        GAP_3 => "gap-3",
        GAP_3_5 => "gap-3.5",
        GAP_4 => "gap-4",
        X_4 => "gap-x-4",
        Y_4 => "gap-y-4",
        GAP_5 => "gap-5",
        GAP_6 => "gap-6",
        GAP_7 => "gap-7",
        GAP_8 => "gap-8",
        GAP_9 => "gap-9",
        GAP_10 => "gap-10",
        GAP_11 => "gap-11",
        GAP_12 => "gap-12",
        GAP_14 => "gap-14",
        GAP_16 => "gap-16",
        GAP_20 => "gap-20",
        GAP_24 => "gap-24",
        GAP_28 => "gap-28",
        GAP_32 => "gap-32",
        GAP_36 => "gap-36",
        GAP_40 => "gap-40",
        GAP_44 => "gap-44",
        GAP_48 => "gap-48",
        GAP_52 => "gap-52",
        GAP_56 => "gap-56",
        GAP_60 => "gap-60",
        GAP_64 => "gap-64",
        GAP_72 => "gap-72",
        GAP_80 => "gap-80",
        GAP_96 => "gap-96",
        GAP_PX => "gap-px",
    }
}

/// Margin utilities.
pub mod margin {
    utility_table! {
        BOTTOM_0 => "mb-0",
        LEFT_0 => "ml-0",
        M_0 => "m-0",
        M_0_5 => "m-0.5",
        NEG_M_0 => "-m-0",
        RIGHT_0 => "mr-0",
        TOP_0 => "mt-0",
        X_0 => "mx-0",
        Y_0 => "my-0",
        BOTTOM_1 => "mb-1",
        LEFT_1 => "ml-1",
        M_1 => "m-1",
        M_1_5 => "m-1.5",
        NEG_BOTTOM_1 => "-mb-1",
        NEG_LEFT_1 => "-ml-1",
        NEG_M_1 => "-m-1",
        NEG_RIGHT_1 => "-mr-1",
        NEG_TOP_1 => "-mt-1",
        NEG_X_1 => "-mx-1",
        NEG_Y_1 => "-my-1",
        RIGHT_1 => "mr-1",
        TOP_1 => "mt-1",
        X_1 => "mx-1",
        Y_1 => "my-1",
        BOTTOM_2 => "mb-2",
        LEFT_2 => "ml-2",
        M_2 => "m-2",
        M_2_5 => "m-2.5",
        NEG_M_2 => "-m-2",
        RIGHT_2 => "mr-2",
        TOP_2 => "mt-2",
        X_2 => "mx-2",
        Y_2 => "my-2",
        M_3 => "m-3",
        M_3_5 => "m-3.5",
        LEFT_4 => "ml-4",
        M_4 => "m-4",
        NEG_LEFT_4 => "-ml-4",
        NEG_M_4 => "-m-4",
        TOP_4 => "mt-4",
        X_4 => "mx-4",
        M_5 => "m-5",
        M_6 => "m-6",
        M_7 => "m-7",
        M_8 => "m-8",
        M_9 => "m-9",
        M_10 => "m-10",
        M_11 => "m-11",
        M_12 => "m-12",
        M_14 => "m-14",
        M_16 => "m-16",
        M_20 => "m-20",
        M_24 => "m-24",
        M_28 => "m-28",
        M_32 => "m-32",
        M_36 => "m-36",
        M_40 => "m-40",
        M_44 => "m-44",
        M_48 => "m-48",
        M_52 => "m-52",
        M_56 => "m-56",
        M_60 => "m-60",
        M_64 => "m-64",
        M_72 => "m-72",
        M_80 => "m-80",
        M_96 => "m-96",
        M_AUTO => "m-auto",
        M_PX => "m-px",
        X_AUTO => "mx-auto",
        Y_AUTO => "my-auto",
    }
}

/// Padding utilities.
pub mod padding {
    utility_table! {
        BOTTOM_0 => "pb-0",
        LEFT_0 => "pl-0",
        P_0 => "p-0",
        P_0_5 => "p-0.5",
        PE_0 => "pe-0",
        PS_0 => "ps-0",
        RIGHT_0 => "pr-0",
        TOP_0 => "pt-0",
        X_0 => "px-0",
        Y_0 => "py-0",
        BOTTOM_1 => "pb-1",
        LEFT_1 => "pl-1",
        P_1 => "p-1",
        P_1_5 => "p-1.5",
        PE_1 => "pe-1",
        PS_1 => "ps-1",
        RIGHT_1 => "pr-1",
        TOP_1 => "pt-1",
        X_1 => "px-1",
        Y_1 => "py-1",
        BOTTOM_2 => "pb-2",
        LEFT_2 => "pl-2",
        P_2 => "p-2",
        P_2_5 => "p-2.5",
        PE_2 => "pe-2",
        PS_2 => "ps-2",
        RIGHT_2 => "pr-2",
        TOP_2 => "pt-2",
        X_2 => "px-2",
        Y_2 => "py-2",
        P_3 => "p-3",
        P_3_5 => "p-3.5",
        LEFT_4 => "pl-4",
        P_4 => "p-4",
        TOP_4 => "pt-4",
        Y_4 => "py-4",
        X_6 => "px-6",
        X_8 => "px-8",
        P_96 => "p-96",
        P_PX => "p-px",
        X_4 => "px-4",
        P_5 => "p-5",
        P_6 => "p-6",
        P_7 => "p-7",
        P_8 => "p-8",
        P_9 => "p-9",
        P_10 => "p-10",
        P_11 => "p-11",
        P_12 => "p-12",
        P_14 => "p-14",
        P_16 => "p-16",
        P_20 => "p-20",
        P_24 => "p-24",
        P_28 => "p-28",
        P_32 => "p-32",
        P_36 => "p-36",
        P_40 => "p-40",
        P_44 => "p-44",
        P_48 => "p-48",
        P_52 => "p-52",
        P_56 => "p-56",
        P_60 => "p-60",
        P_64 => "p-64",
        P_72 => "p-72",
        P_80 => "p-80",
    }
}

/// Space-between (child spacing) utilities.
pub mod space {
    utility_table! {
        X_REVERSE => "space-x-reverse",
        X_0 => "space-x-0",
        Y_REVERSE => "space-y-reverse",
        Y_0 => "space-y-0",
        X_1 => "space-x-1",
        Y_1 => "space-y-1",
        X_2 => "space-x-2",
        Y_2 => "space-y-2",
        X_4 => "space-x-4",
        Y_4 => "space-y-4",
    }
}
