//! Grid template, placement and flow utilities.

utility_table! {
    AUTO_COLS_AUTO => "auto-cols-auto",
    AUTO_COLS_FR => "auto-cols-fr",
    AUTO_COLS_MAX => "auto-cols-max",
    AUTO_COLS_MIN => "auto-cols-min",
    AUTO_ROWS_AUTO => "auto-rows-auto",
    AUTO_ROWS_FR => "auto-rows-fr",
    AUTO_ROWS_MAX => "auto-rows-max",
    AUTO_ROWS_MIN => "auto-rows-min",
    COL_AUTO => "col-auto",
    COL_END_1 => "col-end-1",
    COL_END_AUTO => "col-end-auto",
    COL_SPAN_1 => "col-span-1",
    COL_START_1 => "col-start-1",
    COLS_1 => "grid-cols-1",
    ROW_END_1 => "row-end-1",
    ROW_SPAN_1 => "row-span-1",
    ROW_START_1 => "row-start-1",
    ROWS_1 => "grid-rows-1",
    COL_SPAN_2 => "col-span-2",
    COL_START_2 => "col-start-2",
    COLS_2 => "grid-cols-2",
    ROW_SPAN_2 => "row-span-2",
    ROWS_2 => "grid-rows-2",
    COL_SPAN_3 => "col-span-3",
    COLS_3 => "grid-cols-3",
    ROW_SPAN_3 => "row-span-3",
    ROWS_3 => "grid-rows-3",
    COL_SPAN_4 => "col-span-4",
    COLS_4 => "grid-cols-4",
    ROWS_4 => "grid-rows-4",
    COL_SPAN_5 => "col-span-5",
    COLS_5 => "grid-cols-5",
    ROWS_5 => "grid-rows-5",
    COL_SPAN_6 => "col-span-6",
    COLS_6 => "grid-cols-6",
    ROWS_6 => "grid-rows-6",
    COL_SPAN_7 => "col-span-7",
    COLS_7 => "grid-cols-7",
    ROWS_7 => "grid-rows-7",
    COL_SPAN_8 => "col-span-8",
    COLS_8 => "grid-cols-8",
    ROWS_8 => "grid-rows-8",
    COL_SPAN_9 => "col-span-9",
    COLS_9 => "grid-cols-9",
    ROWS_9 => "grid-rows-9",
    COL_SPAN_10 => "col-span-10",
    COL_SPAN_12 => "col-span-12",
    COL_SPAN_FULL => "col-span-full",
    COL_START_AUTO => "col-start-auto",
    COLS_10 => "grid-cols-10",
    ROWS_10 => "grid-rows-10",
    COL_SPAN_11 => "col-span-11",
    COLS_11 => "grid-cols-11",
    COLS_12 => "grid-cols-12",
    COLS_NONE => "grid-cols-none",
    COLS_SUBGRID => "grid-cols-subgrid",
    FLOW_COL => "grid-flow-col",
    FLOW_COL_DENSE => "grid-flow-col-dense",
    FLOW_DENSE => "grid-flow-dense",
    FLOW_ROW => "grid-flow-row",
    FLOW_ROW_DENSE => "grid-flow-row-dense",
    ROW_AUTO => "row-auto",
    ROW_SPAN_FULL => "row-span-full",
    ROWS_11 => "grid-rows-11",
    ROWS_12 => "grid-rows-12",
    ROWS_NONE => "grid-rows-none",
    ROWS_SUBGRID => "grid-rows-subgrid",
}
