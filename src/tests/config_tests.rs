//! Configuration tests

#[cfg(test)]
mod tests {
    use crate::tests::test_utils::clock_at;
    use crate::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_default_config() {
        let config = SnowNodeConfig::default();
        assert_eq!(config.node_bits(), 6);
        assert_eq!(config.node(), None);
        assert!(!config.global());
        assert_eq!(config.epoch().to_rfc3339(), "2019-01-01T00:00:00+00:00");
        assert_eq!(config, SnowNodeConfig::builder().build());
    }

    #[test]
    fn test_valid_node_bits() {
        for bits in 0..=20 {
            let config = SnowNodeConfig::builder().node_bits(bits).unwrap().build();
            let layout = config.layout().unwrap();
            assert_eq!(layout.node_bits(), bits);
            assert_eq!(layout.step_bits(), 21 - bits);
        }
    }

    #[test]
    fn test_node_bits_err() {
        let err = SnowNodeConfig::builder().node_bits(21).unwrap_err();
        assert!(matches!(err, SnowNodeError::InvalidNodeBits { bits: 21 }));
    }

    #[test]
    fn test_custom_config() {
        let epoch = Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap();
        let config = SnowNodeConfig::builder()
            .node_bits(10)
            .unwrap()
            .epoch(epoch)
            .node(1000)
            .global(true)
            .build();

        assert_eq!(config.node_bits(), 10);
        assert_eq!(config.epoch(), epoch);
        assert_eq!(config.node(), Some(1000));
        assert!(config.global());

        let node = SnowNode::with_clock(config, clock_at(0), None).unwrap();
        assert_eq!(node.max_node_id(), 1023);
        assert_eq!(node.max_step(), 2047);
        assert_eq!(node.epoch(), epoch);
    }

    #[test]
    fn test_node_out_of_range() {
        let config = SnowNodeConfig::builder().node(64).build();
        match SnowNode::with_clock(config, clock_at(0), None) {
            Err(SnowNodeError::InvalidNodeId { node, max }) => {
                assert_eq!(node, 64);
                assert_eq!(max, 63);
            }
            other => panic!("Expected InvalidNodeId error, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_node_bits_allows_only_node_zero() {
        let builder = || SnowNodeConfig::builder().node_bits(0).unwrap();
        assert!(SnowNode::with_clock(builder().node(0).build(), clock_at(0), None).is_ok());
        assert!(matches!(
            SnowNode::with_clock(builder().node(1).build(), clock_at(0), None),
            Err(SnowNodeError::InvalidNodeId { node: 1, max: 0 })
        ));
    }

    #[test]
    fn test_explicit_node_wins_over_env() {
        let config = SnowNodeConfig::builder().node(5).build();
        let node = config
            .resolve_node_with(|_| Some("9".to_string()))
            .unwrap();
        assert_eq!(node, 5);
    }

    #[test]
    fn test_node_from_env() {
        let config = SnowNodeConfig::default();
        let node = config
            .resolve_node_with(|key| {
                assert_eq!(key, NODE_ID_ENV);
                Some(" 12 ".to_string())
            })
            .unwrap();
        assert_eq!(node, 12);
    }

    #[test]
    fn test_node_env_missing_or_blank() {
        let config = SnowNodeConfig::default();
        assert_eq!(config.resolve_node_with(|_| None).unwrap(), 0);
        assert_eq!(config.resolve_node_with(|_| Some(String::new())).unwrap(), 0);
    }

    #[test]
    fn test_node_env_garbage() {
        let config = SnowNodeConfig::default();
        match config.resolve_node_with(|_| Some("node-7".to_string())) {
            Err(SnowNodeError::InvalidNodeEnv { value, .. }) => assert_eq!(value, "node-7"),
            other => panic!("Expected InvalidNodeEnv error, got {other:?}"),
        }
    }
}
