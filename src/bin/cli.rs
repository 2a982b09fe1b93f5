//! crimson CLI Client
//!
//! Command-line interface for issuing single commands against a server.

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use crimson::{Client, ClientConfig, Reply};

/// crimson CLI
#[derive(Parser, Debug)]
#[command(name = "crimson-cli")]
#[command(about = "CLI for the crimson Redis client")]
#[command(version)]
struct Args {
    /// Server address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:6379")]
    server: String,

    /// Password for AUTH
    #[arg(short, long)]
    password: Option<String>,

    /// Logical database index for SELECT
    #[arg(short, long)]
    database: Option<i64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ping the server
    Ping,

    /// Get a value by key
    Get { key: String },

    /// Set a key-value pair
    Set { key: String, value: String },

    /// Delete a key
    Del { key: String },

    /// Check whether a key exists
    Exists { key: String },

    /// Increment the integer value of a key
    Incr { key: String },

    /// The type of the value stored at a key
    Type { key: String },

    /// Remaining time to live of a key
    Ttl { key: String },

    /// List keys matching a glob pattern
    Keys { pattern: String },

    /// Prepend a value to a list
    Lpush { key: String, value: String },

    /// Print a list range (inclusive indices)
    Lrange {
        key: String,
        #[arg(default_value = "0")]
        start: i64,
        #[arg(default_value = "-1")]
        stop: i64,
    },

    /// Print all fields of a hash
    Hgetall { key: String },

    /// Number of keys in the selected database
    Dbsize,

    /// Server statistics
    Info,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,crimson=info"));

    fmt().with_env_filter(filter).with_target(false).init();

    let args = Args::parse();

    let mut builder = ClientConfig::builder().addr(&args.server);
    if let Some(password) = &args.password {
        builder = builder.password(password);
    }
    if let Some(database) = args.database {
        builder = builder.database(database);
    }
    let config = builder.build();

    let mut client = match Client::connect(&config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to connect to {}: {}", args.server, e);
            std::process::exit(1);
        }
    };

    let result = match &args.command {
        Commands::Ping => client.ping(),
        Commands::Get { key } => client.get(key.as_str()),
        Commands::Set { key, value } => client.set(key.as_str(), value.as_str()),
        Commands::Del { key } => client.del(key.as_str()),
        Commands::Exists { key } => client.exists(key.as_str()),
        Commands::Incr { key } => client.incr(key.as_str()),
        Commands::Type { key } => client.key_type(key.as_str()),
        Commands::Ttl { key } => client.ttl(key.as_str()),
        Commands::Keys { pattern } => client.keys(pattern.as_str()),
        Commands::Lpush { key, value } => client.lpush(key.as_str(), value.as_str()),
        Commands::Lrange { key, start, stop } => client.lrange(key.as_str(), *start, *stop),
        Commands::Hgetall { key } => client.hgetall(key.as_str()),
        Commands::Dbsize => client.dbsize(),
        Commands::Info => client.info(),
    };

    match result {
        Ok(reply) => print_reply(&reply),
        Err(e) => {
            tracing::error!("Command failed: {}", e);
            std::process::exit(1);
        }
    }
}

/// Render a reply the way redis-cli would
fn print_reply(reply: &Reply) {
    match reply {
        Reply::Nil => println!("(nil)"),
        Reply::Error(msg) => println!("(error) {}", msg),
        Reply::Integer(n) => println!("(integer) {}", n),
        Reply::Bool(b) => println!("(integer) {}", i64::from(*b)),
        Reply::Double(d) => println!("{}", d),
        Reply::Bulk(payload) => println!("{}", payload.to_string_lossy()),
        Reply::List(items) => {
            if items.is_empty() {
                println!("(empty list)");
            }
            for (i, item) in items.iter().enumerate() {
                println!("{}) {}", i + 1, item.to_string_lossy());
            }
        }
        Reply::ZSet(pairs) => {
            for (i, (member, score)) in pairs.iter().enumerate() {
                println!("{}) {} (score {})", i + 1, member.to_string_lossy(), score);
            }
        }
        Reply::Map(entries) => {
            if entries.is_empty() {
                println!("(empty map)");
            }
            for (key, value) in entries {
                println!("{}: {}", key, value.to_string_lossy());
            }
        }
        Reply::Queued => println!("QUEUED"),
    }
}
