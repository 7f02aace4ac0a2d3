#[cfg(test)]
mod tests {
    use crate::autosave::{AUTOSAVE_INTERVAL, AutosaveStore};
    use std::time::Duration;

    #[test]
    fn test_interval_is_five_seconds() {
        assert_eq!(AUTOSAVE_INTERVAL, Duration::from_secs(5));
    }

    #[test]
    fn test_snapshot_round_trips() {
        // Scratch file in the project root, removed at the end
        let path = "test_autosave_roundtrip.html";
        let store = AutosaveStore::new(path);

        store
            .save("<p>draft &amp; notes</p>")
            .expect("Failed to write snapshot");
        assert_eq!(store.load().as_deref(), Some("<p>draft &amp; notes</p>"));

        std::fs::remove_file(path).expect("Failed to remove test file");
    }

    #[test]
    fn test_load_never_consumes_the_snapshot() {
        let path = "test_autosave_keep.html";
        let store = AutosaveStore::new(path);

        store.save("<p>kept</p>").expect("Failed to write snapshot");

        // Declining a restore reads but must not clear the slot.
        assert!(store.load().is_some());
        assert!(store.load().is_some());

        std::fs::remove_file(path).expect("Failed to remove test file");
    }

    #[test]
    fn test_missing_snapshot_loads_as_none() {
        let store = AutosaveStore::new("test_autosave_missing.html");
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_empty_snapshot_counts_as_absent() {
        let path = "test_autosave_empty.html";
        let store = AutosaveStore::new(path);

        store.save("").expect("Failed to write snapshot");
        assert_eq!(store.load(), None);

        std::fs::remove_file(path).expect("Failed to remove test file");
    }

    #[test]
    fn test_save_overwrites_the_previous_snapshot() {
        let path = "test_autosave_overwrite.html";
        let store = AutosaveStore::new(path);

        store.save("<p>old</p>").expect("Failed to write snapshot");
        store.save("<p>new</p>").expect("Failed to write snapshot");
        assert_eq!(store.load().as_deref(), Some("<p>new</p>"));

        std::fs::remove_file(path).expect("Failed to remove test file");
    }
}
