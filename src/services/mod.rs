/// HTML board form handling and rendering.
pub mod board_service;
/// OpenAPI documentation generation.
pub mod documentation;
/// Health check service.
pub mod health_service;
/// Match lifecycle: start, score, finish, listings.
pub mod match_service;
