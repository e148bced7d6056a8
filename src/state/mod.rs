/// State management module
///
/// This module handles all application state, including:
/// - Transform parameters edited by the form (params.rs)
/// - The selected image and upload lifecycle (session.rs)

pub mod params;
pub mod session;
