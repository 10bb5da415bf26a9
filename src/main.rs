//! xcodeproj-scaffold: create an Xcode bundle skeleton and print setup steps
//!
//! Run with no arguments to scaffold `Lymbo.xcodeproj/` in the current
//! directory.

use anyhow::Result;
use clap::Parser;

use xcodeproj_scaffold::commands::scaffold::{self, ScaffoldOptions};
use xcodeproj_scaffold::config;

#[derive(Parser)]
#[command(name = "xcodeproj-scaffold")]
#[command(about = "Scaffold an Xcode project bundle layout", long_about = None)]
#[command(version)]
struct Cli {
    /// Project name (bundle becomes <NAME>.xcodeproj)
    #[arg(long, default_value = config::DEFAULT_PROJECT_NAME)]
    name: String,

    /// Directory to create the bundle in
    #[arg(long, default_value = ".")]
    root: String,

    /// Show what would be created without making changes
    #[arg(short = 'n', long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let options = ScaffoldOptions {
        name: cli.name,
        root: cli.root,
        dry_run: cli.dry_run,
    };
    scaffold::execute(&options)?;

    Ok(())
}
