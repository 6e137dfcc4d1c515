table! {
    clients (client_id) {
        client_id -> Text,
        secret_hash -> Nullable<Text>,
        grant_types -> Nullable<Text>,
        redirect_uri -> Nullable<Text>,
        description -> Nullable<Text>,
    }
}
