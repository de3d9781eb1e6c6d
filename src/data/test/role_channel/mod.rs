use crate::data::role_channel::RoleChannelStore;

mod load;
mod set_role_channel;

/// Creates a temp directory and returns it with the path of a role channel
/// file inside it. The directory must stay alive for the duration of the test.
fn store_path() -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("role_channels.txt");
    (dir, path)
}
