pub mod admin;
pub mod claims;
pub mod dashboard;
pub mod feedback;
pub mod items;
pub mod users;
