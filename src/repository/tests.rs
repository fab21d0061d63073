//! Repository Integration Tests
//!
//! Round-trip and legacy-format tests for the store adapter, plus the
//! file-backed store against a temporary directory.

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use crate::domain::{Project, Status};
    use crate::manager::ProjectManager;
    use crate::repository::{FileStore, KeyValueStore, MemoryStore, ProjectStore, STORAGE_KEY};

    fn sample(id: i64, title: &str, status: Status) -> Project {
        Project {
            id,
            title: title.to_string(),
            description: format!("{} description", title),
            technology: "Rust".to_string(),
            status,
            created_at: Utc.with_ymd_and_hms(2024, 5, 21, 14, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_round_trip_reproduces_collection() {
        let mut store = ProjectStore::new(MemoryStore::new());
        let projects = vec![
            sample(1, "Web", Status::Pending),
            sample(2, "Bot", Status::Completed),
        ];

        store.save(&projects).expect("save failed");
        let loaded = store.load();

        assert_eq!(loaded, projects);
    }

    #[test]
    fn test_load_from_empty_store() {
        let store = ProjectStore::new(MemoryStore::new());
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_discards_corrupt_slot() {
        let _ = env_logger::builder().is_test(true).try_init();

        let mut kv = MemoryStore::new();
        kv.set(STORAGE_KEY, "{not json").unwrap();
        let store = ProjectStore::new(kv);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_legacy_localstorage_blob() {
        // As written by JSON.stringify in the original application
        let legacy = r#"[{
            "id": 1716300000000,
            "titulo": "Mi web",
            "descripcion": "Una página personal",
            "tecnologia": "React",
            "estado": "pendiente",
            "fecha": "2024-05-21T14:00:00.000Z"
        }]"#;

        let mut kv = MemoryStore::new();
        kv.set(STORAGE_KEY, legacy).unwrap();
        let loaded = ProjectStore::new(kv).load();

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, 1716300000000);
        assert_eq!(loaded[0].title, "Mi web");
        assert_eq!(loaded[0].status, Status::Pending);
        assert_eq!(loaded[0].created_at.timestamp(), 1716300000);
    }

    #[test]
    fn test_custom_slot_key() {
        let mut kv = MemoryStore::new();
        kv.set("otros", r#"[]"#).unwrap();
        let mut store = ProjectStore::with_key(kv, "otros");

        store.save(&[sample(1, "Web", Status::Pending)]).unwrap();
        assert_eq!(store.load().len(), 1);
    }

    #[test]
    fn test_file_store_get_set_remove() {
        let dir = tempfile::tempdir().expect("tempdir failed");
        let mut store = FileStore::new(dir.path());

        assert_eq!(store.get("proyectos").unwrap(), None);
        store.set("proyectos", "[]").unwrap();
        assert_eq!(store.get("proyectos").unwrap().as_deref(), Some("[]"));
        store.remove("proyectos").unwrap();
        assert_eq!(store.get("proyectos").unwrap(), None);
        // Removing an absent slot is not an error
        store.remove("proyectos").unwrap();
    }

    #[test]
    fn test_manager_survives_reopen() {
        let dir = tempfile::tempdir().expect("tempdir failed");

        let first_id = {
            let mut mgr = ProjectManager::new(ProjectStore::new(FileStore::new(dir.path())));
            let project = mgr.add("Site", "A website", "React").unwrap();
            mgr.mark_completed(project.id).unwrap();
            project.id
        };

        let mut mgr = ProjectManager::new(ProjectStore::new(FileStore::new(dir.path())));
        assert_eq!(mgr.len(), 1);
        assert!(mgr.get(first_id).unwrap().is_completed());

        // Persisted ids are never reused by a fresh manager
        let second = mgr.add("Bot", "A chat bot", "Rust").unwrap();
        assert!(second.id > first_id);
    }
}
