//! Overflow and overscroll utilities.

utility_table! {
    OVERFLOW_AUTO => "overflow-auto",
    OVERFLOW_CLIP => "overflow-clip",
    OVERFLOW_HIDDEN => "overflow-hidden",
    OVERFLOW_SCROLL => "overflow-scroll",
    OVERFLOW_VISIBLE => "overflow-visible",
    OVERFLOW_X_AUTO => "overflow-x-auto",
    OVERFLOW_X_CLIP => "overflow-x-clip",
    OVERFLOW_X_HIDDEN => "overflow-x-hidden",
    OVERFLOW_X_SCROLL => "overflow-x-scroll",
    OVERFLOW_X_VISIBLE => "overflow-x-visible",
    OVERFLOW_Y_AUTO => "overflow-y-auto",
    OVERFLOW_Y_CLIP => "overflow-y-clip",
    OVERFLOW_Y_HIDDEN => "overflow-y-hidden",
    OVERFLOW_Y_SCROLL => "overflow-y-scroll",
    OVERFLOW_Y_VISIBLE => "overflow-y-visible",
}
