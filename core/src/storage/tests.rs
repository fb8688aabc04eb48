use super::*;
use crate::model::{Cabinet, Drawer, DrawerId, Item, ItemName};
use tempfile::TempDir;

mod common {
    use super::*;

    pub(super) fn config(dir: &TempDir) -> Config {
        Config::new(dir.path())
    }

    pub(super) fn item(name: &str, amount: Option<f64>) -> Item {
        Item::new(ItemName::try_from(name).unwrap(), amount)
    }

    pub(super) fn sample_organizer() -> Organizer {
        let mut drawer = Drawer::new();
        drawer.add_item(item("Power Cable", Some(2.0)));
        drawer.add_item(item("Bread Knife", None));

        Organizer::new(
            2,
            1,
            vec![
                Cabinet::with_drawers(0, 0, 1, 1, vec![drawer, Drawer::new()]),
                Cabinet::new(1, 0, 1, 1, 3),
            ],
        )
    }
}

mod document_io {
    use super::*;

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let config = common::config(&dir);
        let org = common::sample_organizer();

        save(&config, &org).unwrap();
        let back = load_or_init(&config).unwrap();

        assert_eq!(back, org);
    }

    #[test]
    fn test_document_is_pretty_printed_json() {
        let dir = TempDir::new().unwrap();
        let config = common::config(&dir);

        save(&config, &common::sample_organizer()).unwrap();
        let content = std::fs::read_to_string(config.document_path()).unwrap();

        assert!(content.contains("\n"));
        assert!(content.contains(r#""boxes""#));
        assert!(content.contains(r#""amount": null"#));
    }

    #[test]
    fn test_malformed_document_is_fatal() {
        let dir = TempDir::new().unwrap();
        let config = common::config(&dir);
        std::fs::write(config.document_path(), "{\"width\": 2, ").unwrap();

        assert!(matches!(
            load_or_init(&config),
            Err(StoreError::Document(DocumentError::Parse(_)))
        ));
    }

    #[test]
    fn test_overlapping_document_is_fatal() {
        let dir = TempDir::new().unwrap();
        let config = common::config(&dir);
        let json = r#"{
            "width": 2, "height": 2,
            "boxes": [
                {"x": 0, "y": 0, "w": 2, "h": 2, "drawers": []},
                {"x": 1, "y": 1, "w": 1, "h": 1, "drawers": []}
            ]
        }"#;
        std::fs::write(config.document_path(), json).unwrap();

        assert!(matches!(
            load_or_init(&config),
            Err(StoreError::Document(DocumentError::Invalid(_)))
        ));
    }
}

mod fallback {
    use super::*;

    #[test]
    fn test_missing_document_falls_back_to_layout_conf() {
        let dir = TempDir::new().unwrap();
        let config = common::config(&dir);
        std::fs::write(config.layout_conf_path(), "a:2\nb:1\na b\n").unwrap();

        let org = load_or_init(&config).unwrap();

        assert_eq!(org.width(), 2);
        assert_eq!(org.height(), 1);
        assert_eq!(org.cabinets().len(), 2);
        assert_eq!(org.drawer(DrawerId::new(0, 1)).unwrap().items().len(), 0);
    }

    #[test]
    fn test_document_wins_over_layout_conf() {
        let dir = TempDir::new().unwrap();
        let config = common::config(&dir);
        let org = common::sample_organizer();
        save(&config, &org).unwrap();
        std::fs::write(config.layout_conf_path(), "a:1\na a a\n").unwrap();

        let back = load_or_init(&config).unwrap();

        assert_eq!(back, org);
    }

    #[test]
    fn test_neither_document_nor_conf_is_fatal() {
        let dir = TempDir::new().unwrap();
        let config = common::config(&dir);

        assert!(matches!(
            load_or_init(&config),
            Err(StoreError::LayoutConf(LayoutConfError::Io(_)))
        ));
    }
}
