use actor_framework::{ActorEntity, FrameworkError, ResourceActor};
use async_trait::async_trait;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Station {
    id: u32,
    name: String,
    position: u32,
}

#[derive(Debug)]
struct StationCreate {
    name: String,
}

#[derive(Debug)]
struct StationUpdate {
    name: Option<String>,
    position: Option<u32>,
}

#[derive(Debug, thiserror::Error)]
enum StationError {
    #[error("position must be at least 1")]
    InvalidPosition,
    #[error("name must not be empty")]
    EmptyName,
}

#[async_trait]
impl ActorEntity for Station {
    type Id = u32;
    type Create = StationCreate;
    type Update = StationUpdate;
    type Context = ();
    type Error = StationError;

    fn from_create_params(id: u32, params: StationCreate) -> Result<Self, Self::Error> {
        if params.name.is_empty() {
            return Err(StationError::EmptyName);
        }
        Ok(Self {
            id,
            name: params.name,
            position: id,
        })
    }

    async fn on_update(
        &mut self,
        update: StationUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(position) = update.position {
            if position == 0 {
                return Err(StationError::InvalidPosition);
            }
            self.position = position;
        }
        Ok(())
    }
}

fn create(name: &str) -> StationCreate {
    StationCreate {
        name: name.to_string(),
    }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (actor, client) = ResourceActor::new(10);
    tokio::spawn(actor.run(()));

    // 1. Create
    let id: u32 = client.create(create("Grill")).await.unwrap();
    assert_eq!(id, 1); // First ID should be 1

    // 2. Get
    let station: Station = client.get(id).await.unwrap().unwrap();
    assert_eq!(station.name, "Grill");

    // 3. Update
    let update = StationUpdate {
        name: Some("Parrilla".into()),
        position: Some(4),
    };
    let updated = client.update(id, update).await.unwrap();
    assert_eq!(updated.name, "Parrilla");
    assert_eq!(updated.position, 4);

    // 4. Delete
    client.delete(id).await.unwrap();
    assert!(client.get(id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_is_ordered_by_id() {
    let (actor, client) = ResourceActor::<Station>::new(10);
    tokio::spawn(actor.run(()));

    for name in ["Bar", "Grill", "Pastry"] {
        client.create(create(name)).await.unwrap();
    }
    client.delete(2).await.unwrap();

    let names: Vec<String> = client
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(names, vec!["Bar", "Pastry"]);
}

#[tokio::test]
async fn test_failed_update_keeps_previous_state() {
    let (actor, client) = ResourceActor::<Station>::new(10);
    tokio::spawn(actor.run(()));

    let id = client.create(create("Bar")).await.unwrap();

    // The name change is applied before the position check fails.
    let result = client
        .update(
            id,
            StationUpdate {
                name: Some("Cocktails".into()),
                position: Some(0),
            },
        )
        .await;
    let err = result.unwrap_err();
    assert!(matches!(
        err.downcast_entity::<StationError>(),
        Some(StationError::InvalidPosition)
    ));

    let station = client.get(id).await.unwrap().unwrap();
    assert_eq!(station.name, "Bar");
}

#[tokio::test]
async fn test_missing_ids_and_rejected_creates() {
    let (actor, client) = ResourceActor::<Station>::new(10);
    tokio::spawn(actor.run(()));

    assert!(matches!(
        client.delete(9).await,
        Err(FrameworkError::NotFound(id)) if id == "9"
    ));
    assert!(matches!(
        client.update(9, StationUpdate { name: None, position: None }).await,
        Err(FrameworkError::NotFound(_))
    ));

    let err = client.create(create("")).await.unwrap_err();
    assert!(matches!(
        err.downcast_entity::<StationError>(),
        Some(StationError::EmptyName)
    ));

    // A rejected create does not consume an id.
    assert_eq!(client.create(create("Bar")).await.unwrap(), 1);
}

#[tokio::test]
async fn test_closed_actor_is_reported() {
    let (actor, client) = ResourceActor::<Station>::new(10);
    drop(actor);

    assert!(matches!(
        client.list().await,
        Err(FrameworkError::ActorClosed)
    ));
}
