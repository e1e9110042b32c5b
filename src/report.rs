use crate::constants::icons::IconTarget;

/// Console line printed after an icon lands on disk
pub fn created_line(target: &IconTarget) -> String {
    format!("Created {}", target.file_name)
}

/// The single line printed when a run fails; includes the whole context chain
pub fn error_line(err: &anyhow::Error) -> String {
    format!("Error: {:#}", err)
}
