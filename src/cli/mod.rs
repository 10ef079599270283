// CLI module for listing and moderating items against the local data directory

pub mod render;

use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use serde_json::Value;

use crate::api::admin::{FOUND_ACCEPTED, LOST_APPROVED, LOST_REJECTED, UPDATE_FAILED};
use crate::app_data::AppData;
use crate::coordinators::{ItemsCoordinator, ModerationCoordinator};
use crate::errors::ItemsError;
use crate::types::db::{FoundItem, LostItem};
use crate::types::internal::context::RequestContext;

/// Lost & found tracker
#[derive(Parser, Debug)]
#[command(name = "lostfound")]
#[command(about = "Lost & found tracker backend and admin CLI", long_about = None)]
pub struct Cli {
    /// Defaults to `serve`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Run the HTTP server
    Serve,

    /// Print a collection with the positions admin commands expect
    List {
        #[arg(value_enum)]
        collection: CollectionArg,
    },

    /// Moderate lost items
    #[command(subcommand)]
    Lost(LostCommands),

    /// Moderate found items
    #[command(subcommand)]
    Found(FoundCommands),
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum CollectionArg {
    Lost,
    Found,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum LostCommands {
    /// Mark the lost item at INDEX as approved
    Approve {
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },

    /// Mark the lost item at INDEX as rejected
    Reject {
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum FoundCommands {
    /// Mark the found item at INDEX as accepted
    Accept {
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },
}

/// Execute a non-server CLI command and return what should be printed
///
/// Admin commands fail with the same message the HTTP API would send.
pub async fn execute_command(
    command: Commands,
    app_data: Arc<AppData>,
) -> Result<String, Box<dyn std::error::Error>> {
    match command {
        Commands::Serve => Err("serve is handled by the server entry point".into()),
        Commands::List { collection } => {
            let ctx = RequestContext::for_cli("list");
            let coordinator = ItemsCoordinator::new(app_data);
            let rendered = match collection {
                CollectionArg::Lost => render::render_lost(&coordinator.list::<LostItem>(&ctx).await?),
                CollectionArg::Found => render::render_found(&coordinator.list::<FoundItem>(&ctx).await?),
            };
            Ok(rendered)
        }
        Commands::Lost(LostCommands::Approve { index }) => {
            let ctx = RequestContext::for_cli("lost-approve");
            let result = ModerationCoordinator::new(app_data)
                .approve_lost(&ctx, Some(Value::from(index)))
                .await;
            moderation_output(result, LOST_APPROVED)
        }
        Commands::Lost(LostCommands::Reject { index }) => {
            let ctx = RequestContext::for_cli("lost-reject");
            let result = ModerationCoordinator::new(app_data)
                .reject_lost(&ctx, Some(Value::from(index)))
                .await;
            moderation_output(result, LOST_REJECTED)
        }
        Commands::Found(FoundCommands::Accept { index }) => {
            let ctx = RequestContext::for_cli("found-accept");
            let result = ModerationCoordinator::new(app_data)
                .accept_found(&ctx, Some(Value::from(index)))
                .await;
            moderation_output(result, FOUND_ACCEPTED)
        }
    }
}

fn moderation_output(
    result: Result<usize, crate::errors::InternalError>,
    success_message: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    match result {
        Ok(_) => Ok(success_message.to_string()),
        Err(e) => Err(ItemsError::from_internal(e, UPDATE_FAILED).message().into()),
    }
}
