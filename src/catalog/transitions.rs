//! Transition, duration, easing and animation utilities.

utility_table! {
    ANIMATE_BOUNCE => "animate-bounce",
    ANIMATE_NONE => "animate-none",
    ANIMATE_PING => "animate-ping",
    ANIMATE_PULSE => "animate-pulse",
    ANIMATE_SPIN => "animate-spin",
    DELAY_0 => "delay-0",
    DURATION_0 => "duration-0",
    DELAY_75 => "delay-75",
    DURATION_75 => "duration-75",
    DELAY_100 => "delay-100",
    DURATION_100 => "duration-100",
    DELAY_150 => "delay-150",
    DURATION_150 => "duration-150",
    DELAY_200 => "delay-200",
    DURATION_200 => "duration-200",
    DELAY_300 => "delay-300",
    DURATION_300 => "duration-300",
    DELAY_500 => "delay-500",
    DURATION_500 => "duration-500",
    DELAY_700 => "delay-700",
    DURATION_700 => "duration-700",
    DELAY_1000 => "delay-1000",
    DURATION_1000 => "duration-1000",
    EASE_IN => "ease-in",
    EASE_IN_OUT => "ease-in-out",
    EASE_LINEAR => "ease-linear",
    EASE_OUT => "ease-out",
    TRANSITION => "transition",
    TRANSITION_ALL => "transition-all",
    TRANSITION_COLORS => "transition-colors",
    TRANSITION_NONE => "transition-none",
    TRANSITION_OPACITY => "transition-opacity",
    TRANSITION_SHADOW => "transition-shadow",
    TRANSITION_TRANSFORM => "transition-transform",
}
