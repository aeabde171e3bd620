// Job description comparison pages and API.

pub mod handlers;
