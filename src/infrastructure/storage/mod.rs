pub mod file;
pub mod memory;

use anyhow::bail;
use anyhow::Result;
pub use file::FileStore;
pub use memory::MemoryStore;

use crate::domain::models::KeyValueStoreBox;
use crate::domain::models::StoreName;

pub struct StoreManager {}

impl StoreManager {
    pub fn get(name: StoreName) -> Result<KeyValueStoreBox> {
        if name == StoreName::File {
            return Ok(Box::<FileStore>::default());
        }

        if name == StoreName::Memory {
            return Ok(Box::<MemoryStore>::default());
        }

        bail!(format!("No store implemented for {name}"))
    }
}
