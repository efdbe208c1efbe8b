//! Inbound RPC surface for the contact form relay.
//!
//! The form client calls a single tool over the Model Context Protocol
//! (JSON-RPC 2.0 over stdio) and receives the submission result.

pub mod handlers;

pub use handlers::ContactFormServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the contact form server with stdio transport.
///
/// This function starts the server and runs it until the client disconnects.
pub async fn run_server(server: ContactFormServer) -> Result<()> {
    let service = server.serve(stdio()).await?;

    service.waiting().await?;

    Ok(())
}
