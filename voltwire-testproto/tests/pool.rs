//! Pool recycling: logical clearing with invisible capacity retention.
use {
    voltwire::{Pool, Recycle},
    voltwire_testproto::sample::{Child, Sample, SampleShape},
};

#[test]
fn recycle_preserves_container_capacity_and_clears_logically() {
    let mut s = Sample::default();
    s.children.reserve_exact(8);
    for i in 0..5 {
        s.children.push(Child {
            id: i,
            ..Default::default()
        });
    }
    s.payload.reserve_exact(64);
    s.payload.extend_from_slice(b"hello");
    s.values.reserve_exact(16);
    s.values.extend_from_slice(&[1, 2, 3]);
    s.id = 42;
    let mut blob = Vec::with_capacity(32);
    blob.extend_from_slice(b"abc");
    s.shape = Some(SampleShape::Blob(blob));

    let children_cap = s.children.capacity();
    let payload_cap = s.payload.capacity();
    let values_cap = s.values.capacity();

    s.recycle();
    let mut s = Sample::acquire();

    // Every field reads as cleared.
    assert_eq!(s.id, 0);
    assert!(s.children.is_empty());
    assert!(s.payload.is_empty());
    assert!(s.values.is_empty());

    // Backing storage survived the round trip.
    assert_eq!(s.children.capacity(), children_cap);
    assert_eq!(s.payload.capacity(), payload_cap);
    assert_eq!(s.values.capacity(), values_cap);

    // The oneof bytes variant keeps its wrapper, emptied, with its buffer.
    match &s.shape {
        Some(SampleShape::Blob(b)) => {
            assert!(b.is_empty());
            assert_eq!(b.capacity(), 32);
        }
        other => panic!("expected reusable blob wrapper, got {other:?}"),
    }

    // Refilling to the original allocation never reallocates.
    let ptr = s.children.as_ptr();
    for _ in 0..8 {
        s.children.push(Child::default());
    }
    assert_eq!(s.children.capacity(), children_cap);
    assert_eq!(s.children.as_ptr(), ptr);
}

#[test]
fn caller_supplied_pool_hands_off_exclusively() {
    let pool: Pool<Child> = Pool::new();
    let mut c = Child::default();
    c.payload.reserve_exact(64);
    c.payload.extend_from_slice(b"xyz");
    c.tags.reserve_exact(4);
    c.tags.push("a".into());
    c.id = 9;
    let payload_cap = c.payload.capacity();
    let tags_cap = c.tags.capacity();

    pool.release(c);
    assert_eq!(pool.len(), 1);

    let c = pool.acquire();
    assert!(pool.is_empty());
    // Logically a fresh instance; the capacity is invisible to equality.
    assert_eq!(c, Child::default());
    assert_eq!(c.payload.capacity(), payload_cap);
    assert_eq!(c.tags.capacity(), tags_cap);
}

#[test]
fn five_of_eight_slots_refill_without_allocation() {
    let pool: Pool<Sample> = Pool::new();
    let mut s = Sample::default();
    s.children.reserve_exact(8);
    for _ in 0..5 {
        s.children.push(Child::default());
    }
    let cap = s.children.capacity();

    pool.release(s);
    let mut s = pool.acquire();

    assert!(s.children.is_empty());
    let ptr = s.children.as_ptr();
    for _ in 0..8 {
        s.children.push(Child::default());
    }
    assert_eq!(s.children.capacity(), cap);
    assert_eq!(s.children.as_ptr(), ptr);
}

#[test]
fn recycling_parent_recycles_eligible_nested_messages() {
    let pool: Pool<Sample> = Pool::new();
    let mut s = Sample::default();
    s.nested = Some(Child {
        id: 7,
        payload: b"data".to_vec(),
        ..Default::default()
    });
    s.shape = Some(SampleShape::Node(Child {
        id: 8,
        ..Default::default()
    }));

    pool.release(s);
    let s = pool.acquire();
    assert_eq!(s.nested, None);
    assert_eq!(s.shape, None);

    // Whatever instance the child pool hands out reads as cleared.
    let c = Child::acquire();
    assert_eq!(c, Child::default());
    c.recycle();
}

#[test]
fn reset_drops_maps_and_explicit_slots() {
    let mut s = Sample::default();
    s.metadata.insert("k".into(), 1);
    s.refs.insert(1, Child::default());
    s.scale = Some(1.5);
    s.name = "x".into();
    s.id = 3;
    s.seq = vec![-1, 2];

    s.reset_for_reuse();

    assert_eq!(s, Sample::default());
    // Maps are dropped outright, not capacity-preserved.
    assert_eq!(s.metadata.capacity(), 0);
    assert_eq!(s.refs.capacity(), 0);
}

#[test]
fn acquire_decode_recycle_cycle_stays_clean() {
    let pool: Pool<Sample> = Pool::new();
    let payload = {
        use voltwire::WireWrite;
        let mut m = Sample::default();
        m.id = 11;
        m.labels = vec!["a".into(), "b".into()];
        m.payload = b"xyz".to_vec();
        m.encode()
    };

    for round in 0..4 {
        let mut s = pool.acquire();
        assert_eq!(s, Sample::default(), "round {round} leaked state");
        {
            use voltwire::WireRead;
            s.decode(&payload).unwrap();
        }
        assert_eq!(s.id, 11);
        assert_eq!(s.labels, vec!["a".to_string(), "b".to_string()]);
        pool.release(s);
    }
}
