//! The identity command: print the persistent identifiers, minting them on
//! first use.

use payshield_core::{resolve_device_id, resolve_user_id, AppConfig, FileStore};

pub fn run(config: &AppConfig) -> anyhow::Result<()> {
    let store = FileStore::new(config.identity_path.clone());
    println!("user_id: {}", resolve_user_id(&store));
    println!("device_id: {}", resolve_device_id(&store));
    Ok(())
}
