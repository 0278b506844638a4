//! Diesel schema for to-do persistence.

diesel::table! {
    /// To-do item records.
    todos (id) {
        /// Sequence-assigned identifier.
        id -> Int8,
        /// Sanitised task text.
        task -> Text,
        /// Item status.
        #[max_length = 20]
        status -> Varchar,
        /// Optional due date.
        due -> Nullable<Date>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
