/// Pinning service integration
///
/// This module handles everything that crosses the network:
/// - Uploading the selected file to the pinning API (client.rs)
/// - Building the transform gateway URL (gateway.rs)

pub mod client;
pub mod gateway;
