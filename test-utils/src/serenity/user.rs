//! Test factory for creating Serenity User objects.

use serenity::all::User;

/// Creates a test Serenity User as returned by Discord's `/users/@me`.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `username` - Unique account username
/// - `global_name` - Optional display name shown across servers
///
/// # Returns
/// - `User` - A valid Serenity User struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a User (indicates invalid test data)
pub fn create_test_user(user_id: u64, username: &str, global_name: Option<&str>) -> User {
    serde_json::from_value(serde_json::json!({
        "id": user_id.to_string(),
        "username": username,
        "global_name": global_name,
        "discriminator": "0",
        "avatar": null,
        "bot": false,
    }))
    .expect("Failed to create test user")
}
