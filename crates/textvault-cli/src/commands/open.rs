//! Open command

use clap::Args;
use std::path::PathBuf;
use textvault_editor::Editor;
use textvault_store::StoreConfig;

#[derive(Debug, Args)]
pub struct OpenArgs {
    /// Name of the stored document
    pub name: String,

    /// Write the document to this file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,

    #[arg(long, default_value = ".textvault/store.db")]
    pub db: PathBuf,
}

pub fn execute(args: OpenArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut editor = Editor::open(StoreConfig::new(args.db))?;
    let text = editor.open_file(&args.name)?;

    match &args.out {
        Some(path) => std::fs::write(path, text)?,
        None => print!("{}", text),
    }
    Ok(())
}
