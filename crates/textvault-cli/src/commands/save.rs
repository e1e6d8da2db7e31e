//! Save command

use clap::Args;
use std::io::Read;
use std::path::PathBuf;
use textvault_editor::Editor;
use textvault_store::{StoreConfig, DEFAULT_MAX_NAME_LEN};

#[derive(Debug, Args)]
pub struct SaveArgs {
    /// Name to store the document under
    pub name: String,

    /// Read the document from this file instead of stdin
    #[arg(long)]
    pub file: Option<PathBuf>,

    #[arg(long, default_value = ".textvault/store.db")]
    pub db: PathBuf,

    /// Maximum name length in characters
    #[arg(long, default_value_t = DEFAULT_MAX_NAME_LEN)]
    pub max_name_len: usize,
}

pub fn execute(args: SaveArgs) -> Result<(), Box<dyn std::error::Error>> {
    let text = match &args.file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let config = StoreConfig::new(args.db).with_max_name_len(args.max_name_len);
    let mut editor = Editor::open(config)?;

    let overwritten = editor.file_exists(&args.name)?;
    editor.save_file(&args.name, &text)?;

    if overwritten {
        println!("Overwrote '{}'", args.name);
    } else {
        println!("Saved '{}'", args.name);
    }
    Ok(())
}
