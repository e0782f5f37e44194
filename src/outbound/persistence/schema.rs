//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. They are used
//! by Diesel for compile-time query validation and type-safe SQL generation.

diesel::table! {
    /// Registered user accounts.
    users (id) {
        /// Primary key, assigned by the database.
        id -> Int8,
        /// Display name.
        name -> Varchar,
        /// Unique lowercased email address.
        email -> Varchar,
        /// Argon2 hash of the account secret.
        password_hash -> Varchar,
        avatar_url -> Nullable<Varchar>,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Motorcycles, each owned by one user.
    motos (id) {
        id -> Int8,
        name -> Varchar,
        brand -> Varchar,
        model -> Nullable<Varchar>,
        year -> Nullable<Int4>,
        km -> Nullable<Int4>,
        plate -> Nullable<Varchar>,
        color -> Nullable<Varchar>,
        next_revision_date -> Nullable<Timestamptz>,
        owner_id -> Int8,
    }
}

diesel::table! {
    /// Maintenance revisions attached to motos.
    revisions (id) {
        id -> Int8,
        moto_id -> Int8,
        title -> Varchar,
        service -> Varchar,
        details -> Nullable<Text>,
        date -> Nullable<Timestamptz>,
        time -> Nullable<Varchar>,
        km -> Nullable<Int4>,
        auto_reminder_enabled -> Bool,
        auto_reminder_interval -> Nullable<Varchar>,
        /// Work status: "pending" or "done".
        status -> Varchar,
        owner_id -> Int8,
    }
}

diesel::table! {
    /// User-facing notifications, optionally tied to a moto or revision.
    notifications (id) {
        id -> Int8,
        moto_id -> Nullable<Int8>,
        revision_id -> Nullable<Int8>,
        title -> Varchar,
        description -> Nullable<Text>,
        /// Work status: "pending" or "done".
        status -> Varchar,
        owner_id -> Int8,
        created_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(users, motos, revisions, notifications);
