use std::time::Duration;

use pubsub::{Error, MemoryPublisher, MemorySubscriber, Publisher, Subscriber, SubscriberOptions};

fn subscriber(size: usize) -> MemorySubscriber<u32> {
    MemorySubscriber::new(SubscriberOptions::default().with_buffer_size(size))
}

#[tokio::test]
async fn test_fan_out_skips_unregistered() {
    let publisher = MemoryPublisher::<u32>::default();
    let registered: Vec<_> = (0..3).map(|_| subscriber(16)).collect();
    let outsider = subscriber(16);
    for s in &registered {
        publisher.subscribe(s).unwrap();
    }
    assert_eq!(publisher.subscriber_count(), 3);

    publisher.publish(42).unwrap();
    for s in &registered {
        assert_eq!(s.recv().await, Some(42));
    }
    assert!(outsider.is_empty());
    assert!(!outsider.is_closed());
}

#[tokio::test]
async fn test_overflow_keeps_oldest() {
    let publisher = MemoryPublisher::<u32>::default();
    let s = subscriber(4);
    publisher.subscribe(&s).unwrap();

    for i in 0..5 {
        assert_eq!(publisher.publish(i), Ok(()));
    }
    assert_eq!(s.len(), 4);

    publisher.close().unwrap();
    let mut received = Vec::new();
    while let Some(e) = s.recv().await {
        received.push(e);
    }
    assert_eq!(received, vec![0, 1, 2, 3]);
}

#[tokio::test]
async fn test_publisher_close_auto_closes_only_orphans() {
    let p1 = MemoryPublisher::<u32>::default();
    let p2 = MemoryPublisher::<u32>::default();
    let shared = subscriber(16);
    let orphan = subscriber(16);
    p1.subscribe(&shared).unwrap();
    p2.subscribe(&shared).unwrap();
    p1.subscribe(&orphan).unwrap();

    p1.publish(1).unwrap();
    p1.close().unwrap();

    assert_eq!(p1.subscriber_count(), 0);
    assert!(!shared.is_registered_with(p1.id()));
    assert!(shared.is_registered_with(p2.id()));
    assert!(!shared.is_closed());
    assert!(orphan.is_closed());

    assert_eq!(orphan.recv().await, Some(1));
    assert_eq!(orphan.recv().await, None);

    p2.publish(2).unwrap();
    assert_eq!(shared.recv().await, Some(1));
    assert_eq!(shared.recv().await, Some(2));
}

#[tokio::test]
async fn test_subscriber_close_unsubscribes_everywhere() {
    let p1 = MemoryPublisher::<u32>::default();
    let p2 = MemoryPublisher::<u32>::default();
    let leaving = subscriber(16);
    let staying = subscriber(16);
    for p in [&p1, &p2] {
        p.subscribe(&leaving).unwrap();
        p.subscribe(&staying).unwrap();
    }

    leaving.close();
    assert_eq!(leaving.publisher_count(), 0);
    assert!(!p1.is_subscribed(&leaving));
    assert!(!p2.is_subscribed(&leaving));
    assert!(p1.is_subscribed(&staying));

    p1.publish(7).unwrap();
    assert_eq!(leaving.recv().await, None);
    assert_eq!(staying.recv().await, Some(7));
}

#[tokio::test]
async fn test_recv_waits_until_publish() {
    let publisher = MemoryPublisher::<u32>::default();
    let s = subscriber(16);
    publisher.subscribe(&s).unwrap();

    let pending = tokio::time::timeout(Duration::from_millis(20), s.recv()).await;
    assert!(pending.is_err());

    let consumer = {
        let s = s.clone();
        tokio::spawn(async move { s.recv().await })
    };
    publisher.publish(5).unwrap();
    assert_eq!(consumer.await.unwrap(), Some(5));
}

#[tokio::test]
async fn test_close_wakes_pending_recv() {
    let publisher = MemoryPublisher::<u32>::default();
    let s = subscriber(16);
    publisher.subscribe(&s).unwrap();

    let consumer = {
        let s = s.clone();
        tokio::spawn(async move { s.recv().await })
    };
    tokio::task::yield_now().await;
    s.close();
    assert_eq!(consumer.await.unwrap(), None);
    assert_eq!(publisher.subscriber_count(), 0);
}

#[test]
fn test_resubscribe_after_publisher_close() {
    let publisher = MemoryPublisher::<u32>::default();
    let first = subscriber(4);
    publisher.subscribe(&first).unwrap();
    publisher.close().unwrap();
    assert!(first.is_closed());

    let second = subscriber(4);
    publisher.subscribe(&second).unwrap();
    publisher.publish(1).unwrap();
    drop(publisher);
    assert_eq!(second.blocking_recv(), Some(1));
    assert_eq!(second.blocking_recv(), None);
}

#[test]
fn test_invalid_subscriber_is_a_caller_error() {
    struct Stub;
    impl Subscriber<u32> for Stub {
        async fn recv(&self) -> Option<u32> {
            None
        }
        fn blocking_recv(&self) -> Option<u32> {
            None
        }
        fn close(&self) {}
    }

    let publisher = MemoryPublisher::<u32>::default();
    let err = publisher.subscribe(&Stub).unwrap_err();
    assert_eq!(err, Error::InvalidSubscriber);
    assert_eq!(publisher.subscriber_count(), 0);
}
