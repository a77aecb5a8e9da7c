use crate::domain::User;
use crate::view::Detail;

/// Shown in the ID row when the profile carries no id
pub const NOT_SET: &str = "Not set";

/// Detail panel for a user's profile page
pub fn map_profile_to_details(user: &User) -> Vec<Detail> {
    let id = if user.id == 0 {
        NOT_SET.to_string()
    } else {
        user.id.to_string()
    };
    vec![
        Detail::new("Position", user.user_type.as_str()),
        Detail::new("Email", user.email.clone()),
        Detail::new("ID", id),
    ]
}
