//! Display utilities.

utility_table! {
    BLOCK => "block",
    CONTENTS => "contents",
    FLEX => "flex",
    FLOW_ROOT => "flow-root",
    GRID => "grid",
    HIDDEN => "hidden",
    INLINE => "inline",
    INLINE_BLOCK => "inline-block",
    INLINE_FLEX => "inline-flex",
    INLINE_GRID => "inline-grid",
    INLINE_TABLE => "inline-table",
    LIST_ITEM => "list-item",
    TABLE => "table",
    TABLE_CAPTION => "table-caption",
    TABLE_CELL => "table-cell",
    TABLE_COLUMN => "table-column",
    TABLE_COLUMN_GROUP => "table-column-group",
    TABLE_FOOTER_GROUP => "table-footer-group",
    TABLE_HEADER_GROUP => "table-header-group",
    TABLE_ROW => "table-row",
    TABLE_ROW_GROUP => "table-row-group",
}
