use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "camera-members-server",
    version,
    about = "Members API with a live camera stream and indicator light control",
    long_about = "Serves a members CRUD API backed by MySQL, an MJPEG stream built from fswebcam snapshots, and an indicator light endpoint"
)]
pub struct Cli {
    /// Verbose console logging with thread info (ignored when LOG_DIR is set)
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the web server
    Run {
        /// Port to bind the web server to (overrides PORT)
        #[arg(short, long)]
        port: Option<u16>,
        /// Host to bind the web server to (overrides HOST)
        #[arg(short = 'H', long)]
        host: Option<String>,
        /// Keep members in memory instead of MySQL
        #[arg(long)]
        memory_store: bool,
    },
    /// Create the members table and exit
    #[command(name = "init-db")]
    InitDb,
    /// Capture a single frame from the camera into a file
    Snapshot {
        /// Output file
        #[arg(short, long, default_value = "snapshot.jpg")]
        output: PathBuf,
    },
}
