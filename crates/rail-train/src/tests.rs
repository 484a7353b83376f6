//! Unit tests for rail-train.

#[cfg(test)]
mod helpers {
    use rail_topology::{load_topology_str, Topology};

    /// Topology covering every block id the default roster's routes reference.
    pub fn full_topology() -> Topology {
        let json = r#"{
            "blocks": [
                {"id": "B1",  "name": "B1",  "length_km": 1.0, "max_speed_kmh": 100.0, "adjacent_blocks": ["B2"]},
                {"id": "B2",  "name": "B2",  "length_km": 1.0, "max_speed_kmh": 100.0, "adjacent_blocks": ["B1", "B3", "B8"]},
                {"id": "B3",  "name": "B3",  "length_km": 1.0, "max_speed_kmh": 100.0, "adjacent_blocks": ["B2", "B4", "B11"]},
                {"id": "B4",  "name": "B4",  "length_km": 1.0, "max_speed_kmh": 100.0, "adjacent_blocks": ["B3", "B5"]},
                {"id": "B5",  "name": "B5",  "length_km": 1.0, "max_speed_kmh": 100.0, "adjacent_blocks": ["B4", "B6", "B10"]},
                {"id": "B6",  "name": "B6",  "length_km": 1.0, "max_speed_kmh": 100.0, "adjacent_blocks": ["B5", "B7", "B9"]},
                {"id": "B7",  "name": "B7",  "length_km": 1.0, "max_speed_kmh": 100.0, "adjacent_blocks": ["B6"]},
                {"id": "B8",  "name": "B8",  "length_km": 1.0, "max_speed_kmh": 100.0, "adjacent_blocks": ["B2", "B9"]},
                {"id": "B9",  "name": "B9",  "length_km": 1.0, "max_speed_kmh": 100.0, "adjacent_blocks": ["B6", "B8"]},
                {"id": "B10", "name": "B10", "length_km": 1.0, "max_speed_kmh": 100.0, "adjacent_blocks": ["B5"]},
                {"id": "B11", "name": "B11", "length_km": 1.0, "max_speed_kmh": 100.0, "adjacent_blocks": ["B3"]}
            ]
        }"#;
        load_topology_str(json).unwrap()
    }

    /// Minimal topology missing `B11`, used to exercise the unknown-block error path.
    pub fn partial_topology() -> Topology {
        let json = r#"{
            "blocks": [
                {"id": "B1", "name": "B1", "length_km": 1.0, "max_speed_kmh": 100.0, "adjacent_blocks": ["B2"]},
                {"id": "B2", "name": "B2", "length_km": 1.0, "max_speed_kmh": 100.0, "adjacent_blocks": ["B1"]}
            ]
        }"#;
        load_topology_str(json).unwrap()
    }
}

#[cfg(test)]
mod roster {
    use crate::roster::build_default_roster;

    #[test]
    fn builds_eight_trains() {
        let topo = super::helpers::full_topology();
        let store = build_default_roster(&topo).unwrap();
        assert_eq!(store.count, 8);
        assert!(!store.is_empty());
    }

    #[test]
    fn ids_and_names_match_expected_roster() {
        let topo = super::helpers::full_topology();
        let store = build_default_roster(&topo).unwrap();
        assert_eq!(store.id[0], "T1");
        assert_eq!(store.name[0], "EXP-12001");
        assert_eq!(store.id[7], "T8");
        assert_eq!(store.name[7], "REG-22008");
    }

    #[test]
    fn nominal_speed_matches_priority() {
        let topo = super::helpers::full_topology();
        let store = build_default_roster(&topo).unwrap();
        assert_eq!(store.speed_kmh[0], 100.0); // T1 EXPRESS
        assert_eq!(store.speed_kmh[1], 70.0); // T2 REGIONAL
        assert_eq!(store.speed_kmh[3], 60.0); // T4 FREIGHT
    }

    #[test]
    fn index_of_resolves_known_ids() {
        let topo = super::helpers::full_topology();
        let store = build_default_roster(&topo).unwrap();
        assert!(store.contains("T3"));
        assert!(!store.contains("T99"));
        assert_eq!(store.index_of("T3").unwrap().index(), 2);
    }

    #[test]
    fn route_resolved_to_block_indices() {
        let topo = super::helpers::full_topology();
        let store = build_default_roster(&topo).unwrap();
        let t1 = store.index_of("T1").unwrap();
        assert_eq!(store.route[t1.index()].len(), 7);
        assert_eq!(store.current_block[t1.index()], store.route[t1.index()][0]);
    }

    #[test]
    fn terminus_detection() {
        let topo = super::helpers::full_topology();
        let mut store = build_default_roster(&topo).unwrap();
        let t4 = store.index_of("T4").unwrap();
        assert!(!store.is_at_terminus(t4));
        store.route_index[t4.index()] = store.route[t4.index()].len() - 1;
        assert!(store.is_at_terminus(t4));
        assert_eq!(store.peek_next_block(t4), None);
    }

    #[test]
    fn unknown_block_in_route_is_rejected() {
        let topo = super::helpers::partial_topology();
        assert!(build_default_roster(&topo).is_err());
    }
}
