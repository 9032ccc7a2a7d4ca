//! CLI for mq-client
//!
//! Subcommands:
//! - `produce`: send one message to a topic
//! - `consume`: print messages from a topic until Ctrl-C

use clap::Parser;
use mq_client::config::{Settings, load_config};
use mq_client::utils::logging;
use mq_client::{Consumer, Producer};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "mq-client")]
enum Command {
    /// Send a single message
    Produce {
        /// Message body
        message: String,
        /// Topic to publish to (default: from configuration)
        #[arg(long)]
        topic: Option<String>,
    },
    /// Subscribe and print messages as JSON lines
    Consume {
        /// Topic to subscribe to (default: from configuration)
        #[arg(long)]
        topic: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cmd = Command::parse();

    let mut settings = match load_config() {
        Ok(settings) => settings,
        Err(e) => {
            logging::init("info");
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    logging::init(&settings.client.log_level);

    let result = match cmd {
        Command::Produce { message, topic } => {
            if let Some(topic) = topic {
                settings.client.topic = topic;
            }
            run_producer(&settings, &message).await
        }
        Command::Consume { topic } => {
            if let Some(topic) = topic {
                settings.client.topic = topic;
            }
            run_consumer(&settings).await
        }
    };

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run_producer(settings: &Settings, message: &str) -> Result<(), Box<dyn std::error::Error>> {
    let producer = Producer::from_settings(settings);
    producer.produce(message).await?;
    info!("Sent message to topic '{}'", producer.topic());
    Ok(())
}

async fn run_consumer(settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    let cancel = CancellationToken::new();
    let consumer = Consumer::from_settings(settings, cancel.clone());
    let mut messages = consumer.consume().await?;
    info!(
        "Consuming topic '{}' from {}:{}",
        consumer.topic(),
        settings.broker.host,
        settings.broker.port
    );

    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutdown signal received. Waiting for the next read to stop.");
            ctrl_c.cancel();
        }
    });

    while let Some(msg) = messages.recv().await {
        println!("{}", serde_json::to_string(&msg)?);
    }

    let stats = consumer.stats().snapshot();
    info!(
        "Consumer stopped: {} delivered, {} heartbeats, {} undecodable frames",
        stats.delivered, stats.heartbeats, stats.decode_failures
    );
    Ok(())
}
