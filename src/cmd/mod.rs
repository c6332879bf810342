use crate::{pkg::client, pkg::server::listen, prelude::Result};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(about = "job board web services")]
struct Cmd {
    #[command(subcommand)]
    command: Option<SubCommandType>,
}

#[derive(Subcommand)]
enum SubCommandType {
    Listen,
    Browse {
        #[arg(long, default_value = "all")]
        job_type: String,
    },
}

pub async fn run() -> Result<()> {
    let args = Cmd::parse();
    match args.command {
        Some(SubCommandType::Listen) => {
            listen().await?;
        }
        Some(SubCommandType::Browse { job_type }) => {
            client::browse(&job_type).await?;
        }
        None => {
            tracing::error!("no subcommand passed");
        }
    }
    Ok(())
}
