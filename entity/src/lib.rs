pub mod item;

/*
 A single catalog table. Rows are never resurrected: soft deletion flips
 is_active, hard deletion removes the row and its id is not handed out again.
 */
