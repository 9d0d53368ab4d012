//! Border width, color, style and radius utilities.

utility_table! {
    BLACK => "border-black",
    BORDER => "border",
    BORDER_0 => "border-0",
    BORDER_B_0 => "border-b-0",
    BORDER_E_0 => "border-e-0",
    BORDER_L_0 => "border-l-0",
    BORDER_R_0 => "border-r-0",
    BORDER_S_0 => "border-s-0",
    BORDER_T_0 => "border-t-0",
    BORDER_X_0 => "border-x-0",
    BORDER_Y_0 => "border-y-0",
    BORDER_2 => "border-2",
    BORDER_T_2 => "border-t-2",
    BORDER_X_2 => "border-x-2",
    BORDER_Y_2 => "border-y-2",
    BORDER_4 => "border-4",
    ROUNDED => "rounded",
    ROUNDED_2XL => "rounded-2xl",
    ROUNDED_3XL => "rounded-3xl",
    BORDER_8 => "border-8",
    BLUE_50 => "border-blue-50",
    GRAY_50 => "border-gray-50",
    RED_50 => "border-red-50",
    SLATE_50 => "border-slate-50",
    GRAY_100 => "border-gray-100",
    BLUE_500 => "border-blue-500",
    RED_500 => "border-red-500",
    BLUE_950 => "border-blue-950",
    CURRENT => "border-current",
    DASHED => "border-dashed",
    DOTTED => "border-dotted",
    DOUBLE => "border-double",
    GRAY_500 => "border-gray-500",
    GRAY_950 => "border-gray-950",
    HIDDEN => "border-hidden",
    INHERIT => "border-inherit",
    NONE => "border-none",
    RED_950 => "border-red-950",
    ROUNDED_B_NONE => "rounded-b-none",
    ROUNDED_BL_NONE => "rounded-bl-none",
    ROUNDED_BR_NONE => "rounded-br-none",
    ROUNDED_EE_NONE => "rounded-ee-none",
    ROUNDED_ES_NONE => "rounded-es-none",
    ROUNDED_FULL => "rounded-full",
    ROUNDED_L_NONE => "rounded-l-none",
    ROUNDED_LG => "rounded-lg",
    ROUNDED_MD => "rounded-md",
    ROUNDED_NONE => "rounded-none",
    ROUNDED_R_NONE => "rounded-r-none",
    ROUNDED_SE_NONE => "rounded-se-none",
    ROUNDED_SM => "rounded-sm",
    ROUNDED_SS_NONE => "rounded-ss-none",
    ROUNDED_T => "rounded-t",
    ROUNDED_T_NONE => "rounded-t-none",
    ROUNDED_T_SM => "rounded-t-sm",
    ROUNDED_TL_NONE => "rounded-tl-none",
    ROUNDED_TR_NONE => "rounded-tr-none",
    ROUNDED_XL => "rounded-xl",
    SLATE_500 => "border-slate-500",
    SLATE_950 => "border-slate-950",
    SOLID => "border-solid",
    TRANSPARENT => "border-transparent",
    WHITE => "border-white",
}
