//! Background color utilities.

utility_table! {
    BLACK => "bg-black",
    BLUE_50 => "bg-blue-50",
    GRAY_50 => "bg-gray-50",
    GREEN_50 => "bg-green-50",
    ORANGE_50 => "bg-orange-50",
    RED_50 => "bg-red-50",
    SLATE_50 => "bg-slate-50",
    ZINC_50 => "bg-zinc-50",
    BLUE_100 => "bg-blue-100",
    GRAY_100 => "bg-gray-100",
    RED_100 => "bg-red-100",
    SLATE_100 => "bg-slate-100",
    GRAY_200 => "bg-gray-200",
    GRAY_300 => "bg-gray-300",
    GRAY_400 => "bg-gray-400",
    BLUE_500 => "bg-blue-500",
    GRAY_500 => "bg-gray-500",
    GREEN_500 => "bg-green-500",
    ORANGE_500 => "bg-orange-500",
    RED_500 => "bg-red-500",
    SLATE_500 => "bg-slate-500",
    BLUE_600 => "bg-blue-600",
    GRAY_600 => "bg-gray-600",
    BLUE_700 => "bg-blue-700",
    GRAY_700 => "bg-gray-700",
    GRAY_800 => "bg-gray-800",
    GRAY_900 => "bg-gray-900",
    BLUE_950 => "bg-blue-950",
    CURRENT => "bg-current",
    GRAY_950 => "bg-gray-950",
    GREEN_950 => "bg-green-950",
    INHERIT => "bg-inherit",
    ZINC_500 => "bg-zinc-500",
    ORANGE_950 => "bg-orange-950",
    RED_950 => "bg-red-950",
    SLATE_950 => "bg-slate-950",
    TRANSPARENT => "bg-transparent",
    WHITE => "bg-white",
    ZINC_950 => "bg-zinc-950",
}
