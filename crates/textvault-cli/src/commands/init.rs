//! Store bootstrap command

use clap::Args;
use std::path::PathBuf;
use textvault_store::db;

#[derive(Debug, Args)]
pub struct InitArgs {
    #[arg(long, default_value = ".textvault/store.db")]
    pub db: PathBuf,
}

pub fn execute(args: InitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let existed = db::check_available(&args.db)?;

    db::bootstrap(&args.db)?;

    if existed {
        println!("Store already initialized at {}", args.db.display());
    } else {
        println!("Store created at {}", args.db.display());
    }
    Ok(())
}
