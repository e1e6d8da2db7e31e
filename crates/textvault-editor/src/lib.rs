//! TextVault Editor - the save/open/list operations a UI calls
//!
//! Composes the text codec with the blob store: save encodes then
//! upserts, open loads then decodes. Holds the store connection for its
//! lifetime; `&mut self` receivers keep at most one store operation
//! outstanding at a time. Errors come back typed. Presenting them to a
//! user is the caller's job.

use rusqlite::Connection;
use textvault_core::codec;
use textvault_core::Result;
use textvault_store::{db, BlobRepo, StoreConfig};

/// An open document vault
pub struct Editor {
    conn: Connection,
    config: StoreConfig,
}

impl Editor {
    /// Open the vault described by `config`, bootstrapping the store file
    /// if it does not exist yet.
    pub fn open(config: StoreConfig) -> Result<Self> {
        let conn = db::bootstrap(config.db_path())?;
        Ok(Self { conn, config })
    }

    /// Save a document under `name`, overwriting any previous version.
    pub fn save_file(&mut self, name: &str, text: &str) -> Result<()> {
        let blob = codec::encode(text);
        BlobRepo::save(&self.conn, &self.config, name, &blob)?;

        tracing::info!(name, chars = text.chars().count(), "document saved");
        Ok(())
    }

    /// Open the document stored under `name`.
    pub fn open_file(&mut self, name: &str) -> Result<String> {
        let blob = BlobRepo::load(&self.conn, name)?;
        let text = codec::decode(&blob)?;

        tracing::info!(name, chars = text.chars().count(), "document opened");
        Ok(text)
    }

    /// List all stored document names.
    pub fn file_list(&mut self) -> Result<Vec<String>> {
        BlobRepo::list_names(&self.conn)
    }

    /// Check whether a document is stored under `name`.
    pub fn file_exists(&mut self, name: &str) -> Result<bool> {
        BlobRepo::exists(&self.conn, name)
    }

    /// Get the configuration this editor was opened with.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }
}
