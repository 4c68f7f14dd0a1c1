
use std::path::Path;

/// Writes a world directory with the given server.properties contents.
pub(crate) fn write_world(root: &Path, name: &str, properties: Option<&str>) {
    let dir = root.join(name);
    std::fs::create_dir_all(&dir).unwrap();
    if let Some(properties) = properties {
        std::fs::write(dir.join(crate::SERVER_PROPERTIES), properties).unwrap();
    }
}
