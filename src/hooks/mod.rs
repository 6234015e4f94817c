pub mod use_health;
pub mod use_query;
