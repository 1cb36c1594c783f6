//! Application startup
//!
//! The app renders into an existing `#main` element. Launching without it
//! would render nothing, so its absence is reported as an error instead.

use crate::App;
use thiserror::Error;
use tracing::info;

/// Id of the element the app mounts into
pub const MOUNT_ID: &str = "main";

#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("No browser document is available")]
    NoDocument,
    #[error("Mount element #{0} was not found in the document")]
    MissingMountTarget(&'static str),
}

/// Find the mount element in the current document
pub fn find_mount_target() -> Result<web_sys::Element, BootstrapError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(BootstrapError::NoDocument)?;
    document
        .get_element_by_id(MOUNT_ID)
        .ok_or(BootstrapError::MissingMountTarget(MOUNT_ID))
}

/// Check the mount element and launch the app into it
pub fn bootstrap() -> Result<(), BootstrapError> {
    find_mount_target()?;
    info!("Mounting into #{}", MOUNT_ID);

    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname(MOUNT_ID))
        .launch(App);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            BootstrapError::MissingMountTarget(MOUNT_ID).to_string(),
            "Mount element #main was not found in the document"
        );
        assert_eq!(
            BootstrapError::NoDocument.to_string(),
            "No browser document is available"
        );
    }
}
