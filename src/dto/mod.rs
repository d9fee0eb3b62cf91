/// Form payloads posted by the HTML board.
pub mod form;
/// Health check payload.
pub mod health;
/// Match JSON API payloads.
pub mod matches;
