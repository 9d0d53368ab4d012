//! Text color and text layout utilities.

utility_table! {
    AMBER_50 => "text-amber-50",
    BLUE_50 => "text-blue-50",
    CYAN_50 => "text-cyan-50",
    EMERALD_50 => "text-emerald-50",
    FUCHSIA_50 => "text-fuchsia-50",
    GRAY_50 => "text-gray-50",
    GREEN_50 => "text-green-50",
    INDIGO_50 => "text-indigo-50",
    ORANGE_50 => "text-orange-50",
    PINK_50 => "text-pink-50",
    PURPLE_50 => "text-purple-50",
    GRAY_100 => "text-gray-100",
    GRAY_200 => "text-gray-200",
    GRAY_300 => "text-gray-300",
    GRAY_400 => "text-gray-400",
    AMBER_500 => "text-amber-500",
    BLUE_500 => "text-blue-500",
    CYAN_500 => "text-cyan-500",
    FUCHSIA_500 => "text-fuchsia-500",
    GREEN_500 => "text-green-500",
    AMBER_950 => "text-amber-950",
    BLACK => "text-black",
    LIME_50 => "text-lime-50",
    NEUTRAL_50 => "text-neutral-50",
    BLUE_100 => "text-blue-100",
    EMERALD_500 => "text-emerald-500",
    GRAY_600 => "text-gray-600",
    GRAY_700 => "text-gray-700",
    GRAY_800 => "text-gray-800",
    BLUE_950 => "text-blue-950",
    CURRENT => "text-current",
    GRAY_500 => "text-gray-500",
    INDIGO_500 => "text-indigo-500",
    LIME_500 => "text-lime-500",
    NEUTRAL_500 => "text-neutral-500",
    ORANGE_500 => "text-orange-500",
    PINK_500 => "text-pink-500",
    GRAY_900 => "text-gray-900",
    CYAN_950 => "text-cyan-950",
    EMERALD_950 => "text-emerald-950",
    FUCHSIA_950 => "text-fuchsia-950",
    GRAY_950 => "text-gray-950",
    GREEN_950 => "text-green-950",
    INDIGO_950 => "text-indigo-950",
    INHERIT => "text-inherit",
    RED_50 => "text-red-50",
    ROSE_50 => "text-rose-50",
    SKY_50 => "text-sky-50",
    SLATE_50 => "text-slate-50",
    STONE_50 => "text-stone-50",
    TEAL_50 => "text-teal-50",
    VIOLET_50 => "text-violet-50",
    YELLOW_50 => "text-yellow-50",
    ZINC_50 => "text-zinc-50",
    RED_100 => "text-red-100",
    SLATE_100 => "text-slate-100",
    ZINC_100 => "text-zinc-100",
    RED_200 => "text-red-200",
    SLATE_200 => "text-slate-200",
    RED_300 => "text-red-300",
    SLATE_300 => "text-slate-300",
    RED_400 => "text-red-400",
    SLATE_400 => "text-slate-400",
    PURPLE_500 => "text-purple-500",
    RED_500 => "text-red-500",
    ROSE_500 => "text-rose-500",
    SKY_500 => "text-sky-500",
    SLATE_500 => "text-slate-500",
    STONE_500 => "text-stone-500",
    TEAL_500 => "text-teal-500",
    VIOLET_500 => "text-violet-500",
    YELLOW_500 => "text-yellow-500",
    ZINC_500 => "text-zinc-500",
    RED_600 => "text-red-600",
    SLATE_600 => "text-slate-600",
    RED_700 => "text-red-700",
    SLATE_700 => "text-slate-700",
    RED_800 => "text-red-800",
    SLATE_800 => "text-slate-800",
    RED_900 => "text-red-900",
    SLATE_900 => "text-slate-900",
    LIME_950 => "text-lime-950",
    NEUTRAL_950 => "text-neutral-950",
    ORANGE_950 => "text-orange-950",
    PINK_950 => "text-pink-950",
    PURPLE_950 => "text-purple-950",
    RED_950 => "text-red-950",
    ROSE_950 => "text-rose-950",
    SKY_950 => "text-sky-950",
    SLATE_950 => "text-slate-950",
    STONE_950 => "text-stone-950",
    TEAL_950 => "text-teal-950",
    TRANSPARENT => "text-transparent",
    VIOLET_950 => "text-violet-950",
    WHITE => "text-white",
    YELLOW_950 => "text-yellow-950",
    ZINC_950 => "text-zinc-950",
}
