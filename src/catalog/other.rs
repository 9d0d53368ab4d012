//! Utilities that do not fit a more specific category.

utility_table! {
    ACCENT_AUTO => "accent-auto",
    ACCENT_BLACK => "accent-black",
    ACCENT_CURRENT => "accent-current",
    ACCENT_INHERIT => "accent-inherit",
    ACCENT_TRANSPARENT => "accent-transparent",
    ACCENT_WHITE => "accent-white",
    ALIGN_BASELINE => "align-baseline",
    ALIGN_BOTTOM => "align-bottom",
    ALIGN_MIDDLE => "align-middle",
    ALIGN_SUB => "align-sub",
    ALIGN_SUPER => "align-super",
    ALIGN_TEXT_BOTTOM => "align-text-bottom",
    ALIGN_TEXT_TOP => "align-text-top",
    ALIGN_TOP => "align-top",
    APPEARANCE_AUTO => "appearance-auto",
    APPEARANCE_NONE => "appearance-none",
    ASPECT_AUTO => "aspect-auto",
    ASPECT_SQUARE => "aspect-square",
    ASPECT_VIDEO => "aspect-video",
    BACKDROP_BLUR => "backdrop-blur",
    BACKDROP_BLUR_NONE => "backdrop-blur-none",
    BACKDROP_BLUR_SM => "backdrop-blur-sm",
    BG_AUTO => "bg-auto",
    BG_BLEND_DARKEN => "bg-blend-darken",
    BORDER_SPACING_X_0 => "border-spacing-x-0",
    BORDER_SPACING_Y_0 => "border-spacing-y-0",
    BOX_BORDER => "box-border",
    BOX_CONTENT => "box-content",
    BOX_DECORATION_CLONE => "box-decoration-clone",
    BOX_DECORATION_SLICE => "box-decoration-slice",
    BREAK_AFTER_ALL => "break-after-all",
    BREAK_AFTER_AUTO => "break-after-auto",
    BREAK_AFTER_AVOID => "break-after-avoid",
    BREAK_AFTER_AVOID_PAGE => "break-after-avoid-page",
    BREAK_AFTER_COLUMN => "break-after-column",
    BREAK_AFTER_LEFT => "break-after-left",
    BREAK_AFTER_PAGE => "break-after-page",
    BREAK_AFTER_RIGHT => "break-after-right",
    BREAK_ALL => "break-all",
    BREAK_BEFORE_ALL => "break-before-all",
    BREAK_BEFORE_AUTO => "break-before-auto",
    BREAK_BEFORE_AVOID => "break-before-avoid",
    BREAK_BEFORE_AVOID_PAGE => "break-before-avoid-page",
    BREAK_BEFORE_COLUMN => "break-before-column",
    BREAK_BEFORE_LEFT => "break-before-left",
    BREAK_BEFORE_PAGE => "break-before-page",
    BREAK_BEFORE_RIGHT => "break-before-right",
    BREAK_INSIDE_AUTO => "break-inside-auto",
    BREAK_INSIDE_AVOID => "break-inside-avoid",
    BREAK_INSIDE_AVOID_COLUMN => "break-inside-avoid-column",
    BREAK_INSIDE_AVOID_PAGE => "break-inside-avoid-page",
    BREAK_KEEP => "break-keep",
    BREAK_NORMAL => "break-normal",
    BREAK_WORDS => "break-words",
    BRIGHTNESS_0 => "brightness-0",
    NEG_INSET_0 => "-inset-0",
    NEG_INSET_1 => "-inset-1",
    NEG_LEFT_1 => "-left-1",
    NEG_RIGHT_1 => "-right-1",
    NEG_TOP_1 => "-top-1",
    NEG_INSET_2 => "-inset-2",
    COLUMNS_5XL => "columns-5xl",
    BRIGHTNESS_50 => "brightness-50",
    BRIGHTNESS_75 => "brightness-75",
    BRIGHTNESS_90 => "brightness-90",
    BRIGHTNESS_95 => "brightness-95",
    BRIGHTNESS_100 => "brightness-100",
    BRIGHTNESS_105 => "brightness-105",
    BRIGHTNESS_110 => "brightness-110",
    BRIGHTNESS_125 => "brightness-125",
    BRIGHTNESS_150 => "brightness-150",
    ACCENT_BLUE_500 => "accent-blue-500",
    ACCENT_RED_500 => "accent-red-500",
    ACCENT_SLATE_500 => "accent-slate-500",
    BG_BLEND_LIGHTEN => "bg-blend-lighten",
    BG_BLEND_MULTIPLY => "bg-blend-multiply",
    BG_BLEND_NORMAL => "bg-blend-normal",
    BG_BLEND_OVERLAY => "bg-blend-overlay",
    BG_BLEND_SCREEN => "bg-blend-screen",
    BG_BOTTOM => "bg-bottom",
    BG_CENTER => "bg-center",
    BG_CLIP_BORDER => "bg-clip-border",
    BG_CLIP_CONTENT => "bg-clip-content",
    BG_CLIP_PADDING => "bg-clip-padding",
    BG_CLIP_TEXT => "bg-clip-text",
    BG_CONTAIN => "bg-contain",
    BG_COVER => "bg-cover",
    BG_FIXED => "bg-fixed",
    BG_LEFT => "bg-left",
    BG_LEFT_BOTTOM => "bg-left-bottom",
    BG_LEFT_TOP => "bg-left-top",
    BG_LOCAL => "bg-local",
    BG_NO_REPEAT => "bg-no-repeat",
    BG_ORIGIN_BORDER => "bg-origin-border",
    BG_ORIGIN_CONTENT => "bg-origin-content",
    BG_ORIGIN_PADDING => "bg-origin-padding",
    BG_REPEAT => "bg-repeat",
    BG_REPEAT_ROUND => "bg-repeat-round",
    BG_REPEAT_SPACE => "bg-repeat-space",
    BG_REPEAT_X => "bg-repeat-x",
    BG_REPEAT_Y => "bg-repeat-y",
    BG_RIGHT => "bg-right",
    BG_RIGHT_BOTTOM => "bg-right-bottom",
    BG_RIGHT_TOP => "bg-right-top",
    BG_SCROLL => "bg-scroll",
    BG_TOP => "bg-top",
    BLUR => "blur",
    BLUR_2XL => "blur-2xl",
    BLUR_3XL => "blur-3xl",
    BLUR_LG => "blur-lg",
    BLUR_MD => "blur-md",
    BLUR_NONE => "blur-none",
    BLUR_SM => "blur-sm",
    BLUR_XL => "blur-xl",
    BORDER_COLLAPSE => "border-collapse",
    BORDER_SEPARATE => "border-separate",
    BORDER_SPACING_0 => "border-spacing-0",
    BORDER_SPACING_1 => "border-spacing-1",
    BORDER_SPACING_2 => "border-spacing-2",
    CAPTION_BOTTOM => "caption-bottom",
    CAPTION_TOP => "caption-top",
    CARET_BLACK => "caret-black",
    CARET_BLUE_500 => "caret-blue-500",
    CARET_CURRENT => "caret-current",
    CARET_INHERIT => "caret-inherit",
    CARET_RED_500 => "caret-red-500",
    CARET_SLATE_500 => "caret-slate-500",
    CARET_TRANSPARENT => "caret-transparent",
    CARET_WHITE => "caret-white",
    CLEAR_BOTH => "clear-both",
    CLEAR_END => "clear-end",
    CLEAR_LEFT => "clear-left",
    CLEAR_NONE => "clear-none",
    CLEAR_RIGHT => "clear-right",
    CLEAR_START => "clear-start",
    COLLAPSE => "collapse",
    COLUMNS_1 => "columns-1",
    COLUMNS_2 => "columns-2",
    COLUMNS_2XL => "columns-2xl",
    COLUMNS_2XS => "columns-2xs",
    COLUMNS_3 => "columns-3",
    COLUMNS_3XL => "columns-3xl",
    COLUMNS_3XS => "columns-3xs",
    COLUMNS_4 => "columns-4",
    COLUMNS_4XL => "columns-4xl",
    COLUMNS_5 => "columns-5",
    COLUMNS_6 => "columns-6",
    COLUMNS_6XL => "columns-6xl",
    COLUMNS_7 => "columns-7",
    COLUMNS_7XL => "columns-7xl",
    COLUMNS_8 => "columns-8",
    COLUMNS_9 => "columns-9",
    COLUMNS_10 => "columns-10",
    COLUMNS_11 => "columns-11",
    COLUMNS_12 => "columns-12",
    COLUMNS_AUTO => "columns-auto",
    COLUMNS_LG => "columns-lg",
    COLUMNS_MD => "columns-md",
    COLUMNS_SM => "columns-sm",
    COLUMNS_XL => "columns-xl",
    COLUMNS_XS => "columns-xs",
    CONTAINER => "container",
    CONTRAST_0 => "contrast-0",
    DIVIDE_X_0 => "divide-x-0",
    DIVIDE_X_2 => "divide-x-2",
    CONTRAST_50 => "contrast-50",
    CONTRAST_75 => "contrast-75",
    CONTRAST_100 => "contrast-100",
    CONTRAST_125 => "contrast-125",
    CONTRAST_150 => "contrast-150",
    BRIGHTNESS_200 => "brightness-200",
    CONTRAST_200 => "contrast-200",
    CURSOR_ALIAS => "cursor-alias",
    CURSOR_ALL_SCROLL => "cursor-all-scroll",
    CURSOR_AUTO => "cursor-auto",
    CURSOR_CELL => "cursor-cell",
    CURSOR_COL_RESIZE => "cursor-col-resize",
    CURSOR_CONTEXT_MENU => "cursor-context-menu",
    CURSOR_COPY => "cursor-copy",
    CURSOR_CROSSHAIR => "cursor-crosshair",
    CURSOR_DEFAULT => "cursor-default",
    CURSOR_E_RESIZE => "cursor-e-resize",
    CURSOR_EW_RESIZE => "cursor-ew-resize",
    CURSOR_GRAB => "cursor-grab",
    CURSOR_GRABBING => "cursor-grabbing",
    CURSOR_HELP => "cursor-help",
    CURSOR_MOVE => "cursor-move",
    CURSOR_N_RESIZE => "cursor-n-resize",
    CURSOR_NE_RESIZE => "cursor-ne-resize",
    CURSOR_NESW_RESIZE => "cursor-nesw-resize",
    CURSOR_NO_DROP => "cursor-no-drop",
    CURSOR_NONE => "cursor-none",
    CURSOR_NOT_ALLOWED => "cursor-not-allowed",
    CURSOR_NS_RESIZE => "cursor-ns-resize",
    CURSOR_NW_RESIZE => "cursor-nw-resize",
    CURSOR_NWSE_RESIZE => "cursor-nwse-resize",
    CURSOR_POINTER => "cursor-pointer",
    CURSOR_PROGRESS => "cursor-progress",
    CURSOR_ROW_RESIZE => "cursor-row-resize",
    CURSOR_S_RESIZE => "cursor-s-resize",
    CURSOR_SE_RESIZE => "cursor-se-resize",
    CURSOR_SW_RESIZE => "cursor-sw-resize",
    CURSOR_TEXT => "cursor-text",
    CURSOR_VERTICAL_TEXT => "cursor-vertical-text",
    CURSOR_W_RESIZE => "cursor-w-resize",
    CURSOR_WAIT => "cursor-wait",
    CURSOR_ZOOM_IN => "cursor-zoom-in",
    CURSOR_ZOOM_OUT => "cursor-zoom-out",
    DIAGONAL_FRACTIONS => "diagonal-fractions",
    DIVIDE_BLUE_500 => "divide-blue-500",
    DIVIDE_DASHED => "divide-dashed",
    DIVIDE_DOTTED => "divide-dotted",
    DIVIDE_DOUBLE => "divide-double",
    DIVIDE_GRAY_500 => "divide-gray-500",
    DIVIDE_NONE => "divide-none",
    DIVIDE_RED_500 => "divide-red-500",
    DIVIDE_SOLID => "divide-solid",
    DIVIDE_X_REVERSE => "divide-x-reverse",
    DIVIDE_Y_0 => "divide-y-0",
    DIVIDE_Y_2 => "divide-y-2",
    DIVIDE_Y_REVERSE => "divide-y-reverse",
    DROP_SHADOW => "drop-shadow",
    DROP_SHADOW_2XL => "drop-shadow-2xl",
    DROP_SHADOW_LG => "drop-shadow-lg",
    DROP_SHADOW_MD => "drop-shadow-md",
    DROP_SHADOW_NONE => "drop-shadow-none",
    DROP_SHADOW_SM => "drop-shadow-sm",
    DROP_SHADOW_XL => "drop-shadow-xl",
    FILL_BLACK => "fill-black",
    HUE_ROTATE_30 => "hue-rotate-30",
    HUE_ROTATE_60 => "hue-rotate-60",
    FILL_BLUE_500 => "fill-blue-500",
    FILL_CURRENT => "fill-current",
    FILL_INHERIT => "fill-inherit",
    FILL_NONE => "fill-none",
    FILL_RED_500 => "fill-red-500",
    FILL_SLATE_500 => "fill-slate-500",
    FILL_TRANSPARENT => "fill-transparent",
    FILL_WHITE => "fill-white",
    FLOAT_END => "float-end",
    FLOAT_LEFT => "float-left",
    FLOAT_NONE => "float-none",
    FLOAT_RIGHT => "float-right",
    FLOAT_START => "float-start",
    FORCED_COLOR_ADJUST_AUTO => "forced-color-adjust-auto",
    FORCED_COLOR_ADJUST_NONE => "forced-color-adjust-none",
    GRAYSCALE => "grayscale",
    GRAYSCALE_0 => "grayscale-0",
    HUE_ROTATE_0 => "hue-rotate-0",
    HUE_ROTATE_15 => "hue-rotate-15",
    HUE_ROTATE_90 => "hue-rotate-90",
    HYPHENS_AUTO => "hyphens-auto",
    HYPHENS_MANUAL => "hyphens-manual",
    HYPHENS_NONE => "hyphens-none",
    INDENT_0 => "indent-0",
    INDENT_1 => "indent-1",
    INDENT_2 => "indent-2",
    LEADING_3 => "leading-3",
    INDENT_4 => "indent-4",
    LEADING_7 => "leading-7",
    INDENT_8 => "indent-8",
    INVERT => "invert",
    INVERT_0 => "invert-0",
    INVISIBLE => "invisible",
    ISOLATE => "isolate",
    ISOLATION_AUTO => "isolation-auto",
    JUSTIFY_ITEMS_CENTER => "justify-items-center",
    JUSTIFY_ITEMS_END => "justify-items-end",
    JUSTIFY_ITEMS_START => "justify-items-start",
    JUSTIFY_ITEMS_STRETCH => "justify-items-stretch",
    JUSTIFY_SELF_AUTO => "justify-self-auto",
    JUSTIFY_SELF_CENTER => "justify-self-center",
    JUSTIFY_SELF_END => "justify-self-end",
    JUSTIFY_SELF_START => "justify-self-start",
    JUSTIFY_SELF_STRETCH => "justify-self-stretch",
    NEG_BOTTOM_1 => "-bottom-1",
    LEADING_4 => "leading-4",
    LEADING_5 => "leading-5",
    LEADING_6 => "leading-6",
    LEADING_8 => "leading-8",
    LEADING_9 => "leading-9",
    LEADING_10 => "leading-10",
    HUE_ROTATE_180 => "hue-rotate-180",
    LEADING_LOOSE => "leading-loose",
    LEADING_NONE => "leading-none",
    LEADING_NORMAL => "leading-normal",
    LEADING_RELAXED => "leading-relaxed",
    LEADING_SNUG => "leading-snug",
    LEADING_TIGHT => "leading-tight",
    LINING_NUMS => "lining-nums",
    LIST_DECIMAL => "list-decimal",
    LIST_DISC => "list-disc",
    LIST_INSIDE => "list-inside",
    LIST_NONE => "list-none",
    LIST_OUTSIDE => "list-outside",
    MIX_BLEND_COLOR => "mix-blend-color",
    MIX_BLEND_COLOR_BURN => "mix-blend-color-burn",
    MIX_BLEND_COLOR_DODGE => "mix-blend-color-dodge",
    MIX_BLEND_DARKEN => "mix-blend-darken",
    MIX_BLEND_DIFFERENCE => "mix-blend-difference",
    MIX_BLEND_EXCLUSION => "mix-blend-exclusion",
    MIX_BLEND_HARD_LIGHT => "mix-blend-hard-light",
    MIX_BLEND_HUE => "mix-blend-hue",
    MIX_BLEND_LIGHTEN => "mix-blend-lighten",
    MIX_BLEND_LUMINOSITY => "mix-blend-luminosity",
    MIX_BLEND_MULTIPLY => "mix-blend-multiply",
    MIX_BLEND_NORMAL => "mix-blend-normal",
    MIX_BLEND_OVERLAY => "mix-blend-overlay",
    MIX_BLEND_PLUS_DARKER => "mix-blend-plus-darker",
    MIX_BLEND_PLUS_LIGHTER => "mix-blend-plus-lighter",
    MIX_BLEND_SATURATION => "mix-blend-saturation",
    MIX_BLEND_SCREEN => "mix-blend-screen",
    MIX_BLEND_SOFT_LIGHT => "mix-blend-soft-light",
    NORMAL_NUMS => "normal-nums",
    NOT_SR_ONLY => "not-sr-only",
    OBJECT_BOTTOM => "object-bottom",
    OBJECT_CENTER => "object-center",
    OBJECT_CONTAIN => "object-contain",
    OBJECT_COVER => "object-cover",
    OBJECT_FILL => "object-fill",
    OBJECT_LEFT => "object-left",
    OBJECT_LEFT_BOTTOM => "object-left-bottom",
    OBJECT_LEFT_TOP => "object-left-top",
    OBJECT_NONE => "object-none",
    OBJECT_RIGHT => "object-right",
    OBJECT_RIGHT_BOTTOM => "object-right-bottom",
    OBJECT_RIGHT_TOP => "object-right-top",
    OBJECT_SCALE_DOWN => "object-scale-down",
    OBJECT_TOP => "object-top",
    OLDSTYLE_NUMS => "oldstyle-nums",
    ORDER_1 => "order-1",
    ORDER_2 => "order-2",
    ORDER_3 => "order-3",
    ORDER_4 => "order-4",
    ORDER_5 => "order-5",
    ORDER_6 => "order-6",
    ORDER_7 => "order-7",
    ORDER_8 => "order-8",
    ORDER_9 => "order-9",
    ORDER_10 => "order-10",
    ORDER_11 => "order-11",
    ORDER_FIRST => "order-first",
    ORDER_LAST => "order-last",
    ORDER_NONE => "order-none",
    ORDINAL => "ordinal",
    ORIGIN_BOTTOM => "origin-bottom",
    ORIGIN_BOTTOM_LEFT => "origin-bottom-left",
    ORIGIN_BOTTOM_RIGHT => "origin-bottom-right",
    ORIGIN_CENTER => "origin-center",
    ORIGIN_LEFT => "origin-left",
    ORIGIN_RIGHT => "origin-right",
    ORIGIN_TOP => "origin-top",
    ORIGIN_TOP_LEFT => "origin-top-left",
    ORIGIN_TOP_RIGHT => "origin-top-right",
    OUTLINE => "outline",
    OUTLINE_0 => "outline-0",
    PLACE_CONTENT_AROUND => "place-content-around",
    PLACE_CONTENT_BASELINE => "place-content-baseline",
    PLACE_CONTENT_BETWEEN => "place-content-between",
    PLACE_CONTENT_CENTER => "place-content-center",
    PLACE_CONTENT_END => "place-content-end",
    PLACE_CONTENT_EVENLY => "place-content-evenly",
    PLACE_CONTENT_START => "place-content-start",
    PLACE_CONTENT_STRETCH => "place-content-stretch",
    PLACE_ITEMS_BASELINE => "place-items-baseline",
    PLACE_ITEMS_CENTER => "place-items-center",
    PLACE_ITEMS_END => "place-items-end",
    PLACE_ITEMS_START => "place-items-start",
    PLACE_ITEMS_STRETCH => "place-items-stretch",
    PLACE_SELF_AUTO => "place-self-auto",
    PLACE_SELF_CENTER => "place-self-center",
    PLACE_SELF_END => "place-self-end",
    PLACE_SELF_START => "place-self-start",
    PLACE_SELF_STRETCH => "place-self-stretch",
    SATURATE_0 => "saturate-0",
    SCROLL_M_0 => "scroll-m-0",
    SCROLL_MB_0 => "scroll-mb-0",
    SCROLL_ML_0 => "scroll-ml-0",
    SCROLL_MR_0 => "scroll-mr-0",
    SCROLL_MT_0 => "scroll-mt-0",
    SCROLL_MX_0 => "scroll-mx-0",
    SCROLL_MY_0 => "scroll-my-0",
    SCROLL_P_0 => "scroll-p-0",
    SCROLL_PB_0 => "scroll-pb-0",
    SCROLL_PL_0 => "scroll-pl-0",
    SCROLL_PR_0 => "scroll-pr-0",
    SCROLL_PT_0 => "scroll-pt-0",
    SCROLL_PX_0 => "scroll-px-0",
    SCROLL_PY_0 => "scroll-py-0",
    SEPIA_0 => "sepia-0",
    OUTLINE_1 => "outline-1",
    SCROLL_M_1 => "scroll-m-1",
    SCROLL_P_1 => "scroll-p-1",
    OUTLINE_2 => "outline-2",
    SCROLL_M_2 => "scroll-m-2",
    SCROLL_P_2 => "scroll-p-2",
    OUTLINE_4 => "outline-4",
    OUTLINE_8 => "outline-8",
    OUTLINE_BLACK => "outline-black",
    SATURATE_50 => "saturate-50",
    SATURATE_100 => "saturate-100",
    SATURATE_150 => "saturate-150",
    SATURATE_200 => "saturate-200",
    OUTLINE_BLUE_500 => "outline-blue-500",
    OUTLINE_DASHED => "outline-dashed",
    OUTLINE_DOTTED => "outline-dotted",
    OUTLINE_DOUBLE => "outline-double",
    OUTLINE_GRAY_500 => "outline-gray-500",
    OUTLINE_NONE => "outline-none",
    OUTLINE_OFFSET_0 => "outline-offset-0",
    OUTLINE_OFFSET_1 => "outline-offset-1",
    OUTLINE_OFFSET_2 => "outline-offset-2",
    OUTLINE_OFFSET_4 => "outline-offset-4",
    OUTLINE_OFFSET_8 => "outline-offset-8",
    OUTLINE_RED_500 => "outline-red-500",
    OUTLINE_SLATE_500 => "outline-slate-500",
    OUTLINE_WHITE => "outline-white",
    OVERSCROLL_AUTO => "overscroll-auto",
    OVERSCROLL_CONTAIN => "overscroll-contain",
    OVERSCROLL_NONE => "overscroll-none",
    OVERSCROLL_X_AUTO => "overscroll-x-auto",
    OVERSCROLL_X_CONTAIN => "overscroll-x-contain",
    OVERSCROLL_X_NONE => "overscroll-x-none",
    OVERSCROLL_Y_AUTO => "overscroll-y-auto",
    OVERSCROLL_Y_CONTAIN => "overscroll-y-contain",
    OVERSCROLL_Y_NONE => "overscroll-y-none",
    POINTER_EVENTS_AUTO => "pointer-events-auto",
    POINTER_EVENTS_NONE => "pointer-events-none",
    PROPORTIONAL_NUMS => "proportional-nums",
    RESIZE => "resize",
    RESIZE_NONE => "resize-none",
    RESIZE_X => "resize-x",
    RESIZE_Y => "resize-y",
    RING => "ring",
    RING_0 => "ring-0",
    RING_1 => "ring-1",
    RING_2 => "ring-2",
    RING_4 => "ring-4",
    RING_8 => "ring-8",
    RING_BLUE_500 => "ring-blue-500",
    RING_GRAY_500 => "ring-gray-500",
    RING_INSET => "ring-inset",
    RING_OFFSET_0 => "ring-offset-0",
    RING_OFFSET_1 => "ring-offset-1",
    RING_OFFSET_2 => "ring-offset-2",
    RING_OFFSET_4 => "ring-offset-4",
    RING_OFFSET_8 => "ring-offset-8",
    ORDER_12 => "order-12",
    RING_OFFSET_BLACK => "ring-offset-black",
    RING_OFFSET_GRAY_500 => "ring-offset-gray-500",
    RING_OFFSET_WHITE => "ring-offset-white",
    RING_RED_500 => "ring-red-500",
    RING_SLATE_500 => "ring-slate-500",
    SCROLL_AUTO => "scroll-auto",
    SCROLL_SMOOTH => "scroll-smooth",
    SELECT_ALL => "select-all",
    SELECT_AUTO => "select-auto",
    SELECT_NONE => "select-none",
    SELECT_TEXT => "select-text",
    SEPIA => "sepia",
    SLASHED_ZERO => "slashed-zero",
    SNAP_ALIGN_NONE => "snap-align-none",
    SNAP_ALWAYS => "snap-always",
    SNAP_BOTH => "snap-both",
    SNAP_CENTER => "snap-center",
    SNAP_END => "snap-end",
    SNAP_MANDATORY => "snap-mandatory",
    SNAP_NONE => "snap-none",
    SNAP_NORMAL => "snap-normal",
    SNAP_PROXIMITY => "snap-proximity",
    SNAP_START => "snap-start",
    SNAP_X => "snap-x",
    SNAP_Y => "snap-y",
    SR_ONLY => "sr-only",
    STACKED_FRACTIONS => "stacked-fractions",
    STROKE_0 => "stroke-0",
    STROKE_1 => "stroke-1",
    STROKE_2 => "stroke-2",
    STROKE_BLACK => "stroke-black",
    STROKE_BLUE_500 => "stroke-blue-500",
    STROKE_CURRENT => "stroke-current",
    STROKE_INHERIT => "stroke-inherit",
    STROKE_NONE => "stroke-none",
    STROKE_RED_500 => "stroke-red-500",
    STROKE_SLATE_500 => "stroke-slate-500",
    STROKE_TRANSPARENT => "stroke-transparent",
    STROKE_WHITE => "stroke-white",
    TABLE_AUTO => "table-auto",
    TABLE_FIXED => "table-fixed",
    TABULAR_NUMS => "tabular-nums",
    TEXT_BALANCE => "text-balance",
    TEXT_CLIP => "text-clip",
    TEXT_ELLIPSIS => "text-ellipsis",
    TEXT_NOWRAP => "text-nowrap",
    TEXT_PRETTY => "text-pretty",
    TEXT_WRAP => "text-wrap",
    TOUCH_AUTO => "touch-auto",
    TOUCH_MANIPULATION => "touch-manipulation",
    TOUCH_NONE => "touch-none",
    TOUCH_PAN_DOWN => "touch-pan-down",
    TOUCH_PAN_LEFT => "touch-pan-left",
    TOUCH_PAN_RIGHT => "touch-pan-right",
    TOUCH_PAN_UP => "touch-pan-up",
    TOUCH_PAN_X => "touch-pan-x",
    TOUCH_PAN_Y => "touch-pan-y",
    TOUCH_PINCH_ZOOM => "touch-pinch-zoom",
    TRANSFORM => "transform",
    TRUNCATE => "truncate",
    UNDERLINE_OFFSET_0 => "underline-offset-0",
    UNDERLINE_OFFSET_1 => "underline-offset-1",
    UNDERLINE_OFFSET_2 => "underline-offset-2",
    UNDERLINE_OFFSET_4 => "underline-offset-4",
    UNDERLINE_OFFSET_8 => "underline-offset-8",
    UNDERLINE_OFFSET_AUTO => "underline-offset-auto",
    VISIBLE => "visible",
    WHITESPACE_BREAK_SPACES => "whitespace-break-spaces",
    WHITESPACE_NORMAL => "whitespace-normal",
    WHITESPACE_NOWRAP => "whitespace-nowrap",
    WHITESPACE_PRE => "whitespace-pre",
    WHITESPACE_PRE_LINE => "whitespace-pre-line",
    WHITESPACE_PRE_WRAP => "whitespace-pre-wrap",
    WILL_CHANGE_AUTO => "will-change-auto",
    WILL_CHANGE_CONTENTS => "will-change-contents",
    WILL_CHANGE_SCROLL => "will-change-scroll",
    WILL_CHANGE_TRANSFORM => "will-change-transform",
}
