use super::*;

mod common {
    use super::*;

    pub(super) fn name(s: &str) -> ItemName {
        ItemName::try_from(s).unwrap()
    }

    pub(super) fn item(s: &str) -> Item {
        Item::new(name(s), None)
    }

    pub(super) fn drawer_with(names: &[&str]) -> Drawer {
        let mut drawer = Drawer::new();
        for n in names {
            drawer.add_item(item(n));
        }
        drawer
    }

    /// Two cabinets side by side with a wide one on the row above:
    ///
    /// ```text
    /// CC
    /// AB
    /// ```
    pub(super) fn sample_organizer() -> Organizer {
        Organizer::new(
            2,
            2,
            vec![
                Cabinet::with_drawers(0, 0, 1, 1, vec![drawer_with(&["Screws", "Nails"])]),
                Cabinet::with_drawers(1, 0, 1, 1, vec![drawer_with(&["Tape"])]),
                Cabinet::with_drawers(
                    0,
                    1,
                    2,
                    1,
                    vec![drawer_with(&["Cable"]), drawer_with(&["Glue"])],
                ),
            ],
        )
    }
}

mod item_name {
    use super::*;

    #[test]
    fn test_name_is_trimmed() {
        let name = ItemName::try_from("  Screws  ").unwrap();

        assert_eq!(name.as_ref(), "Screws");
    }

    #[test]
    fn test_blank_name_rejected() {
        assert!(ItemName::try_from("   ").is_err());
        assert!(ItemName::try_from("").is_err());
    }

    #[test]
    fn test_overlong_name_rejected() {
        let long = "x".repeat(MAX_NAME_LENGTH + 1);

        assert!(ItemName::try_new(long).is_err());
    }
}

mod item {
    use super::common::{item, name};
    use super::*;

    #[test]
    fn test_lower_derived_on_construction() {
        let item = Item::new(name("Power Cable"), Some(3.0));

        assert_eq!(item.lower(), "power cable");
        assert_eq!(item.amount(), Some(3.0));
    }

    #[test]
    fn test_rename_updates_name_and_lower_together() {
        let mut item = item("Screws");

        item.rename(name("Bolts"));

        assert_eq!(item.name().as_ref(), "Bolts");
        assert_eq!(item.lower(), "bolts");
    }

    #[test]
    fn test_json_round_trip() {
        let item = Item::new(name("Cable"), Some(2.5));

        let json = serde_json::to_string(&item).unwrap();
        let back: Item = serde_json::from_str(&json).unwrap();

        assert_eq!(back, item);
    }

    #[test]
    fn test_null_and_absent_amount_both_load() {
        let with_null: Item = serde_json::from_str(r#"{"name":"Cable","amount":null}"#).unwrap();
        let absent: Item = serde_json::from_str(r#"{"name":"Cable"}"#).unwrap();

        assert_eq!(with_null.amount(), None);
        assert_eq!(absent.amount(), None);
    }

    #[test]
    fn test_missing_amount_serializes_as_null() {
        let json = serde_json::to_string(&item("Cable")).unwrap();

        assert_eq!(json, r#"{"name":"Cable","amount":null}"#);
    }

    #[test]
    fn test_blank_name_fails_deserialization() {
        let result: Result<Item, _> = serde_json::from_str(r#"{"name":"  "}"#);

        assert!(result.is_err());
    }
}

mod cabinet {
    use super::*;

    #[test]
    fn test_contains_cell_bounds() {
        let cabinet = Cabinet::new(1, 2, 2, 3, 1);

        assert!(cabinet.contains_cell(1, 2));
        assert!(cabinet.contains_cell(2, 4));
        assert!(!cabinet.contains_cell(3, 2));
        assert!(!cabinet.contains_cell(1, 5));
        assert!(!cabinet.contains_cell(0, 2));
    }
}

mod organizer {
    use super::common::{drawer_with, sample_organizer};
    use super::*;

    #[test]
    fn test_cabinet_at_finds_covering_cabinet() {
        let org = sample_organizer();

        assert_eq!(org.cabinet_at(0, 0), Some(0));
        assert_eq!(org.cabinet_at(1, 0), Some(1));
        assert_eq!(org.cabinet_at(1, 1), Some(2));
        assert_eq!(org.cabinet_at(2, 0), None);
    }

    #[test]
    fn test_drawers_iterate_in_traversal_order() {
        let org = sample_organizer();

        let ids: Vec<DrawerId> = org.drawers().map(|(id, _)| id).collect();

        assert_eq!(
            ids,
            vec![
                DrawerId::new(0, 0),
                DrawerId::new(1, 0),
                DrawerId::new(2, 0),
                DrawerId::new(2, 1),
            ]
        );
    }

    #[test]
    fn test_drawer_lookup_by_id() {
        let mut org = sample_organizer();
        let id = DrawerId::new(2, 1);

        assert_eq!(org.drawer(id).unwrap().items()[0].name().as_ref(), "Glue");
        assert!(org.drawer(DrawerId::new(2, 5)).is_none());
        assert!(org.drawer_mut(DrawerId::new(9, 0)).is_none());
    }

    #[test]
    fn test_remove_item_shifts_later_items() {
        let mut org = sample_organizer();
        let id = DrawerId::new(0, 0);

        let removed = org.drawer_mut(id).unwrap().remove_item(0).unwrap();

        assert_eq!(removed.name().as_ref(), "Screws");
        assert_eq!(org.drawer(id).unwrap().items()[0].name().as_ref(), "Nails");
        assert!(org.drawer_mut(id).unwrap().remove_item(5).is_none());
    }

    #[test]
    fn test_validate_accepts_sample() {
        assert!(sample_organizer().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_bounds_cabinet() {
        let org = Organizer::new(2, 2, vec![Cabinet::new(1, 0, 2, 1, 1)]);

        assert!(matches!(
            org.validate(),
            Err(ModelError::CabinetOutOfBounds { index: 0, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_overlap() {
        let org = Organizer::new(
            4,
            4,
            vec![Cabinet::new(0, 0, 2, 2, 1), Cabinet::new(1, 1, 2, 2, 1)],
        );

        assert!(matches!(
            org.validate(),
            Err(ModelError::CabinetOverlap {
                first: 0,
                second: 1
            })
        ));
    }

    #[test]
    fn test_touching_cabinets_do_not_overlap() {
        let org = Organizer::new(
            4,
            2,
            vec![Cabinet::new(0, 0, 2, 2, 1), Cabinet::new(2, 0, 2, 2, 1)],
        );

        assert!(org.validate().is_ok());
    }

    #[test]
    fn test_json_round_trip_preserves_everything() {
        let org = sample_organizer();

        let json = serde_json::to_string_pretty(&org).unwrap();
        let back: Organizer = serde_json::from_str(&json).unwrap();

        assert_eq!(back, org);
    }

    #[test]
    fn test_document_uses_boxes_field_name() {
        let org = Organizer::new(
            1,
            1,
            vec![Cabinet::with_drawers(0, 0, 1, 1, vec![drawer_with(&["Cable"])])],
        );

        let json = serde_json::to_string(&org).unwrap();

        assert!(json.contains(r#""boxes":"#));
        assert!(!json.contains(r#""cabinets""#));
        assert!(!json.contains(r#""lower""#));
    }
}
