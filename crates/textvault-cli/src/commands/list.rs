//! List command

use clap::Args;
use std::path::PathBuf;
use textvault_editor::Editor;
use textvault_store::StoreConfig;

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(long, default_value = ".textvault/store.db")]
    pub db: PathBuf,
}

pub fn execute(args: ListArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut editor = Editor::open(StoreConfig::new(args.db))?;

    let names = editor.file_list()?;
    if names.is_empty() {
        println!("No documents stored");
    } else {
        for name in names {
            println!("{}", name);
        }
    }
    Ok(())
}
