macro_rules! v1_path {
    ($path:literal) => {
        concat!("/api/v1", $path)
    };
}

/// Versioned API route definitions served by the user directory backend
pub mod v1 {
    /// Prefix shared by every v1 route
    pub const ROOT: &str = "/api/v1";
    /// Version segment
    pub const VERSION: &str = "v1";

    /// User directory routes
    pub mod users {
        /// `POST` creates a user
        pub const COLLECTION: &str = v1_path!("/users");
        /// `GET` lists assignable profiles
        pub const PROFILE_OPTIONS: &str = v1_path!("/users/profile-options");
        /// `GET` lists assignable roles
        pub const ROLE_OPTIONS: &str = v1_path!("/users/role-options");
    }
}
