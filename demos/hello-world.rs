use pubsub::prelude::*;

// Name the event kinds with a string-like type
#[derive(Clone, Debug)]
struct Topic(&'static str);

impl AsRef<str> for Topic {
    fn as_ref(&self) -> &str {
        self.0
    }
}

type Greeting = EventEnvelope<Topic, String>;

#[tokio::main]
async fn main() -> Result<(), PubsubError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let hooks = Hooks::new().on_publish(|e: &Greeting| tracing::info!(topic = e.name(), "published"));
    let publisher = MemoryPublisher::new(hooks);
    let subscriber = MemorySubscriber::<Greeting>::new(SubscriberOptions::default());
    publisher.subscribe(&subscriber)?;

    let consumer = tokio::spawn(async move {
        while let Some(event) = subscriber.recv().await {
            println!("{}: {}", event.name(), event.data);
        }
    });

    publisher.publish(EventEnvelope::new(Topic("hello"), "World".into()))?;
    publisher.publish(EventEnvelope::new(Topic("bye"), "World".into()))?;

    // Closing the publisher closes its only subscriber, which ends the loop above
    publisher.close()?;
    let _ = consumer.await;
    Ok(())
}
