pub mod list_activities_usecase;
pub mod signup_usecase;
pub mod unregister_usecase;
